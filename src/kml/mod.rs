//! KML 2.2 document model.
//!
//! A [`Document`] is built by the exporter and turned into text by
//! [`write_document`]. The types only cover the subset of KML that layer
//! export produces.

mod writer;

pub use writer::{KML_NAMESPACE, write_document};

/// Root `<Document>`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Document {
    pub name: String,
    pub schemas: Vec<Schema>,
    pub placemarks: Vec<Placemark>,
    pub styles: Vec<Style>,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Schema {
    pub id: String,
    pub name: String,
    pub fields: Vec<SimpleField>,
}

/// A schema field. Every field is declared as `string`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SimpleField {
    pub name: String,
    /// Markup shown by viewers; written as a CDATA section.
    pub display_name: String,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Placemark {
    pub name: String,
    pub snippet: String,
    /// HTML; written as a CDATA section.
    pub description: String,
    pub style_url: String,
    pub schema_data: SchemaData,
    pub geometry: Option<KmlGeometry>,
}

/// `<ExtendedData><SchemaData>` block of a placemark.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SchemaData {
    pub schema_url: String,
    pub fields: Vec<SimpleData>,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct SimpleData {
    pub name: String,
    pub value: String,
}

/// A longitude/latitude pair.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Coordinate {
    pub lon: f64,
    pub lat: f64,
}

impl Coordinate {
    /// Longitude is clamped to [-180, 180] and latitude to [-90, 90].
    pub fn new(lon: f64, lat: f64) -> Self {
        Self {
            lon: lon.clamp(-180.0, 180.0),
            lat: lat.clamp(-90.0, 90.0),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum KmlGeometry {
    Point(Coordinate),
    LineString(Vec<Coordinate>),
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Style {
    pub id: String,
    pub icon: Option<IconStyle>,
    pub line: Option<LineStyle>,
    pub poly: Option<PolyStyle>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct IconStyle {
    pub href: String,
    pub scale: f32,
    pub hot_spot: HotSpot,
}

/// Icon anchor, written with `insetPixels` units.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HotSpot {
    pub x: f64,
    pub y: f64,
}

/// Colors are KML `aabbggrr` strings.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LineStyle {
    pub color: String,
    pub width: Option<f64>,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct PolyStyle {
    pub color: String,
    pub fill: Option<bool>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_coordinate_clamps_to_angle_range() {
        let c = Coordinate::new(200.0, -95.0);
        assert_eq!(c.lon, 180.0);
        assert_eq!(c.lat, -90.0);

        let c = Coordinate::new(-12.5, 45.25);
        assert_eq!((c.lon, c.lat), (-12.5, 45.25));
    }
}
