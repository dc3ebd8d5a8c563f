//! Feature to schema and placemark.

use quick_xml::escape::escape;

use super::catalog::StyleCatalog;
use super::geometry::encode_geometry;
use crate::kml::{Placemark, Schema, SchemaData, SimpleData, SimpleField};
use crate::model::{AttributeValue, Attributes, Feature};

/// `SHAPE` in any case and `FID` in exact case are geodatabase bookkeeping
/// columns and never exported.
pub fn is_reserved_field(name: &str) -> bool {
    name.eq_ignore_ascii_case("SHAPE") || name == "FID"
}

/// Part of a raw field name after the last `.`, e.g. `db.owner.NAME` gives
/// `NAME`.
pub fn display_name(name: &str) -> &str {
    name.rsplit_once('.').map_or(name, |(_, last)| last)
}

/// Key of the attribute used as placemark name and snippet.
///
/// The first key containing `name` or `title` (any case) wins; otherwise
/// the first key. `None` only for an empty table.
pub fn name_field(attributes: &Attributes) -> Option<&str> {
    let mut keys = attributes.keys().peekable();
    let first = *keys.peek()?;
    keys.find(|key| {
        let lower = key.to_lowercase();
        lower.contains("name") || lower.contains("title")
    })
    .or(Some(first))
}

/// Encodes features of one layer against a shared style catalog.
pub struct FeatureEncoder<'a> {
    catalog: &'a StyleCatalog,
    default_style_id: &'a str,
    schema_id_prefix: &'a str,
}

impl<'a> FeatureEncoder<'a> {
    pub fn new(
        catalog: &'a StyleCatalog,
        default_style_id: &'a str,
        schema_id_prefix: &'a str,
    ) -> Self {
        Self {
            catalog,
            default_style_id,
            schema_id_prefix,
        }
    }

    /// Build the schema and placemark of the feature at `index`.
    pub fn encode(&self, feature: &Feature, index: usize) -> (Schema, Placemark) {
        let schema = self.schema(feature, index);
        let placemark = self.placemark(feature, &schema.id);
        (schema, placemark)
    }

    fn schema(&self, feature: &Feature, index: usize) -> Schema {
        let fields = exported(&feature.attributes)
            .map(|(key, _)| SimpleField {
                name: key.to_string(),
                display_name: format!("<b>{}</b>", display_name(key)),
            })
            .collect();

        Schema {
            id: format!("{}{}", self.schema_id_prefix, index),
            name: format!("f{}schemaid", index),
            fields,
        }
    }

    fn placemark(&self, feature: &Feature, schema_id: &str) -> Placemark {
        let name = name_field(&feature.attributes)
            .and_then(|key| feature.attributes.get(key))
            .map(AttributeValue::to_string)
            .unwrap_or_default();

        let fields = exported(&feature.attributes)
            .map(|(key, value)| SimpleData {
                name: key.to_string(),
                value: value.to_string(),
            })
            .collect();

        Placemark {
            snippet: name.clone(),
            name,
            description: description_table(&feature.attributes),
            style_url: format!("#{}", self.style_id(feature)),
            schema_data: SchemaData {
                schema_url: format!("#{}", schema_id),
                fields,
            },
            geometry: feature.geometry.as_ref().and_then(encode_geometry),
        }
    }

    fn style_id(&self, feature: &Feature) -> &str {
        feature
            .symbol
            .as_ref()
            .and_then(|symbol| self.catalog.token_of(symbol))
            .unwrap_or(self.default_style_id)
    }
}

fn exported(attributes: &Attributes) -> impl Iterator<Item = (&str, &AttributeValue)> {
    attributes.iter().filter(|(key, _)| !is_reserved_field(key))
}

/// HTML table with one row per exported attribute.
fn description_table(attributes: &Attributes) -> String {
    let mut html = String::from("<table border=\"1\" cellspacing=\"0\" cellpadding=\"1\">\n");
    for (key, value) in exported(attributes) {
        html.push_str(&format!(
            "<tr><td width=\"100\">{}</td><td width=\"150\">{}</td></tr>",
            escape(key),
            escape(&value.to_string())
        ));
    }
    html.push_str("</table>\n");
    html
}
