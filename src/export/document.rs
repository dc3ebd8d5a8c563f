//! Assemble the complete KML document of a layer.

use log::debug;
use rand::Rng;

use super::catalog::StyleCatalog;
use super::feature::FeatureEncoder;
use super::style::{default_style, encode_style};
use crate::kml::Document;
use crate::model::Feature;

/// Id of the catch-all style of a layer.
pub fn default_style_id(layer_id: &str) -> String {
    format!("{}styleid", id_stem(layer_id))
}

/// Prefix of a layer's schema ids; the feature index is appended.
pub fn schema_id_prefix(layer_id: &str) -> String {
    format!("{}schemaid", id_stem(layer_id))
}

/// Layer id usable as the start of an XML id and a URL fragment. Characters
/// outside `[A-Za-z0-9_.-]` become `_`, and a stem that does not start with
/// a letter or `_` gets a leading `_`.
fn id_stem(layer_id: &str) -> String {
    let mut stem: String = layer_id
        .chars()
        .map(|c| match c {
            'A'..='Z' | 'a'..='z' | '0'..='9' | '_' | '-' | '.' => c,
            _ => '_',
        })
        .collect();
    if stem.starts_with(|c: char| !(c.is_ascii_alphabetic() || c == '_')) {
        stem.insert(0, '_');
    }
    stem
}

/// Build the document: one schema and placemark per feature, one style per
/// catalog entry, then the default style.
///
/// `catalog` must have been collected from `features`.
pub fn assemble<R: Rng>(
    layer_id: &str,
    features: &[Feature],
    catalog: &StyleCatalog,
    icon_scale: f32,
    rng: &mut R,
) -> Document {
    let default_id = default_style_id(layer_id);
    let schema_prefix = schema_id_prefix(layer_id);
    let encoder = FeatureEncoder::new(catalog, &default_id, &schema_prefix);

    let mut doc = Document {
        name: layer_id.to_string(),
        schemas: Vec::with_capacity(features.len()),
        placemarks: Vec::with_capacity(features.len()),
        styles: Vec::with_capacity(catalog.len() + 1),
    };

    for (index, feature) in features.iter().enumerate() {
        let (schema, placemark) = encoder.encode(feature, index);
        doc.schemas.push(schema);
        doc.placemarks.push(placemark);
    }

    for entry in catalog {
        doc.styles
            .push(encode_style(&entry.symbol, &entry.token, icon_scale));
    }
    doc.styles.push(default_style(&default_id, rng));

    debug!(
        "Assembled KML document {:?}: {} placemarks, {} styles",
        doc.name,
        doc.placemarks.len(),
        doc.styles.len()
    );
    doc
}
