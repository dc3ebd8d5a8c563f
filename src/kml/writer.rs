//! KML text serialization.
//!
//! Element order follows the KML 2.2 schema: a Document lists its styles
//! before its schemas and placemarks, and a Placemark's geometry comes last.

use std::borrow::Cow;
use std::fmt::Write;

use log::debug;
use quick_xml::escape::escape;

use super::{
    Coordinate, Document, IconStyle, KmlGeometry, LineStyle, Placemark, PolyStyle, Schema, Style,
};

pub const KML_NAMESPACE: &str = "http://www.opengis.net/kml/2.2";

/// Serialize a document as a complete KML file.
pub fn write_document(doc: &Document) -> String {
    let mut kml = String::new();

    kml.push_str("<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n");
    kml.push_str(&format!("<kml xmlns=\"{}\">\n", KML_NAMESPACE));
    kml.push_str("  <Document>\n");
    kml.push_str(&format!("    <name>{}</name>\n", text(&doc.name)));

    for style in &doc.styles {
        write_style(&mut kml, style);
    }
    for schema in &doc.schemas {
        write_schema(&mut kml, schema);
    }
    for placemark in &doc.placemarks {
        write_placemark(&mut kml, placemark);
    }

    kml.push_str("  </Document>\n</kml>\n");
    kml
}

fn write_style(kml: &mut String, style: &Style) {
    kml.push_str(&format!("    <Style id=\"{}\">\n", text(&style.id)));
    if let Some(ref icon) = style.icon {
        write_icon_style(kml, icon);
    }
    if let Some(ref line) = style.line {
        write_line_style(kml, line);
    }
    if let Some(ref poly) = style.poly {
        write_poly_style(kml, poly);
    }
    kml.push_str("    </Style>\n");
}

fn write_icon_style(kml: &mut String, icon: &IconStyle) {
    kml.push_str("      <IconStyle>\n");
    kml.push_str(&format!("        <scale>{}</scale>\n", icon.scale));
    kml.push_str(&format!(
        "        <Icon>\n          <href>{}</href>\n        </Icon>\n",
        text(&icon.href)
    ));
    kml.push_str(&format!(
        "        <hotSpot x=\"{}\" y=\"{}\" xunits=\"insetPixels\" yunits=\"insetPixels\"/>\n",
        icon.hot_spot.x, icon.hot_spot.y
    ));
    kml.push_str("      </IconStyle>\n");
}

fn write_line_style(kml: &mut String, line: &LineStyle) {
    kml.push_str("      <LineStyle>\n");
    kml.push_str(&format!("        <color>{}</color>\n", text(&line.color)));
    if let Some(width) = line.width {
        kml.push_str(&format!("        <width>{}</width>\n", width));
    }
    kml.push_str("      </LineStyle>\n");
}

fn write_poly_style(kml: &mut String, poly: &PolyStyle) {
    kml.push_str("      <PolyStyle>\n");
    kml.push_str(&format!("        <color>{}</color>\n", text(&poly.color)));
    if let Some(fill) = poly.fill {
        kml.push_str(&format!("        <fill>{}</fill>\n", u8::from(fill)));
    }
    kml.push_str("      </PolyStyle>\n");
}

fn write_schema(kml: &mut String, schema: &Schema) {
    kml.push_str(&format!(
        "    <Schema name=\"{}\" id=\"{}\">\n",
        text(&schema.name),
        text(&schema.id)
    ));
    for field in &schema.fields {
        kml.push_str(&format!(
            "      <SimpleField type=\"string\" name=\"{}\">\n",
            text(&field.name)
        ));
        kml.push_str(&format!(
            "        <displayName>{}</displayName>\n",
            cdata(&field.display_name)
        ));
        kml.push_str("      </SimpleField>\n");
    }
    kml.push_str("    </Schema>\n");
}

fn write_placemark(kml: &mut String, placemark: &Placemark) {
    kml.push_str("    <Placemark>\n");
    kml.push_str(&format!("      <name>{}</name>\n", text(&placemark.name)));
    kml.push_str(&format!(
        "      <Snippet maxLines=\"2\">{}</Snippet>\n",
        text(&placemark.snippet)
    ));
    kml.push_str(&format!(
        "      <description>{}</description>\n",
        cdata(&placemark.description)
    ));
    kml.push_str(&format!(
        "      <styleUrl>{}</styleUrl>\n",
        text(&placemark.style_url)
    ));

    let data = &placemark.schema_data;
    kml.push_str("      <ExtendedData>\n");
    kml.push_str(&format!(
        "        <SchemaData schemaUrl=\"{}\">\n",
        text(&data.schema_url)
    ));
    for field in &data.fields {
        kml.push_str(&format!(
            "          <SimpleData name=\"{}\">{}</SimpleData>\n",
            text(&field.name),
            text(&field.value)
        ));
    }
    kml.push_str("        </SchemaData>\n");
    kml.push_str("      </ExtendedData>\n");

    if let Some(ref geometry) = placemark.geometry {
        write_geometry(kml, geometry);
    }
    kml.push_str("    </Placemark>\n");
}

fn write_geometry(kml: &mut String, geometry: &KmlGeometry) {
    match geometry {
        KmlGeometry::Point(c) => {
            kml.push_str("      <Point>\n");
            kml.push_str(&format!(
                "        <coordinates>{}</coordinates>\n",
                coordinates(std::slice::from_ref(c))
            ));
            kml.push_str("      </Point>\n");
        }
        KmlGeometry::LineString(coords) => {
            kml.push_str("      <LineString>\n");
            kml.push_str(&format!(
                "        <coordinates>{}</coordinates>\n",
                coordinates(coords)
            ));
            kml.push_str("      </LineString>\n");
        }
    }
}

/// `lon,lat` tuples separated by single spaces.
fn coordinates(coords: &[Coordinate]) -> String {
    let mut out = String::new();
    for (i, c) in coords.iter().enumerate() {
        if i > 0 {
            out.push(' ');
        }
        if !c.lon.is_finite() || !c.lat.is_finite() {
            debug!("Writing non-finite coordinate {},{}", c.lon, c.lat);
        }
        let _ = write!(out, "{},{}", c.lon, c.lat);
    }
    out
}

/// Whether `c` matches the XML 1.0 `Char` production.
fn is_xml_char(c: char) -> bool {
    matches!(
        c,
        '\u{9}'
            | '\u{A}'
            | '\u{D}'
            | '\u{20}'..='\u{D7FF}'
            | '\u{E000}'..='\u{FFFD}'
            | '\u{10000}'..='\u{10FFFF}'
    )
}

/// Drop code points that may not appear anywhere in an XML document.
fn strip_invalid(s: &str) -> Cow<'_, str> {
    if s.chars().all(is_xml_char) {
        Cow::Borrowed(s)
    } else {
        Cow::Owned(s.chars().filter(|&c| is_xml_char(c)).collect())
    }
}

/// Escaped text or attribute value.
fn text(s: &str) -> String {
    escape(&*strip_invalid(s)).into_owned()
}

/// Wrap text in a CDATA section. An embedded `]]>` is split across two
/// sections.
fn cdata(s: &str) -> String {
    format!(
        "<![CDATA[{}]]>",
        strip_invalid(s).replace("]]>", "]]]]><![CDATA[>")
    )
}
