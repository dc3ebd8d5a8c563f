//! JSON layer description.
//!
//! ```json
//! {
//!   "id": "poi",
//!   "symbols": {
//!     "red": { "type": "marker", "color": "#ff0000", "size": 12, "offset_x": 6, "offset_y": 6 },
//!     "road": { "type": "line", "color": "#333333", "width": 2 }
//!   },
//!   "features": [
//!     { "geometry": { "type": "point", "x": 8.54, "y": 47.37 },
//!       "attributes": { "NAME": "Zurich", "POP": 421878 },
//!       "symbol": "red" }
//!   ]
//! }
//! ```
//!
//! Features naming the same symbol key share one symbol instance, and so one
//! KML style.

use std::collections::HashMap;
use std::sync::Arc;

use serde::Deserialize;
use serde_json::{Map, Value};

use kmzkit::{
    AttributeValue, Attributes, Color, Feature, FillSymbol, Geometry, Layer, LineSymbol, MapPoint,
    MarkerSymbol, Symbol,
};

#[derive(Deserialize)]
struct LayerInput {
    id: String,
    #[serde(default)]
    symbols: HashMap<String, SymbolInput>,
    #[serde(default)]
    features: Vec<FeatureInput>,
}

#[derive(Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
enum SymbolInput {
    Marker {
        #[serde(default)]
        offset_x: f64,
        #[serde(default)]
        offset_y: f64,
        #[serde(default = "default_marker_size")]
        size: f64,
        #[serde(default = "default_color")]
        color: String,
    },
    Line {
        #[serde(default = "default_color")]
        color: String,
        #[serde(default = "default_width")]
        width: f64,
    },
    Fill {
        fill: String,
        #[serde(default = "default_color")]
        border: String,
        #[serde(default = "default_width")]
        border_width: f64,
    },
}

#[derive(Deserialize)]
struct FeatureInput {
    geometry: Option<GeometryInput>,
    #[serde(default)]
    attributes: Map<String, Value>,
    symbol: Option<String>,
}

#[derive(Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
enum GeometryInput {
    Point { x: f64, y: f64 },
    Polyline { paths: Vec<Vec<[f64; 2]>> },
    Polygon { rings: Vec<Vec<[f64; 2]>> },
    Multipoint { points: Vec<[f64; 2]> },
}

fn default_marker_size() -> f64 {
    MarkerSymbol::default().size
}

fn default_color() -> String {
    "#000000".to_string()
}

fn default_width() -> f64 {
    1.0
}

/// Parse a JSON layer description into a [`Layer`].
pub fn parse_layer(json: &str) -> Result<Layer, String> {
    let input: LayerInput = serde_json::from_str(json).map_err(|e| e.to_string())?;

    let mut symbols: HashMap<String, Arc<Symbol>> = HashMap::with_capacity(input.symbols.len());
    for (key, symbol) in input.symbols {
        let symbol = to_symbol(symbol).map_err(|e| format!("symbol {key:?}: {e}"))?;
        symbols.insert(key, Arc::new(symbol));
    }

    let mut layer = Layer::new(input.id);
    for (i, feature) in input.features.into_iter().enumerate() {
        let symbol = match feature.symbol {
            Some(key) => Some(
                symbols
                    .get(&key)
                    .cloned()
                    .ok_or_else(|| format!("feature {i}: unknown symbol {key:?}"))?,
            ),
            None => None,
        };

        layer.add_feature(Feature {
            geometry: feature.geometry.map(to_geometry),
            attributes: to_attributes(feature.attributes),
            symbol,
        });
    }

    Ok(layer)
}

fn to_symbol(input: SymbolInput) -> Result<Symbol, String> {
    let symbol = match input {
        SymbolInput::Marker {
            offset_x,
            offset_y,
            size,
            color,
        } => Symbol::Marker(MarkerSymbol {
            offset_x,
            offset_y,
            size,
            color: parse_color(&color)?,
        }),
        SymbolInput::Line { color, width } => Symbol::Line(LineSymbol {
            color: parse_color(&color)?,
            width,
        }),
        SymbolInput::Fill {
            fill,
            border,
            border_width,
        } => Symbol::Fill(FillSymbol {
            fill: parse_color(&fill)?,
            border: parse_color(&border)?,
            border_width,
        }),
    };
    Ok(symbol)
}

fn parse_color(s: &str) -> Result<Color, String> {
    Color::from_hex(s).ok_or_else(|| format!("invalid color {s:?}"))
}

fn to_geometry(input: GeometryInput) -> Geometry {
    let points = |part: Vec<[f64; 2]>| -> Vec<MapPoint> {
        part.into_iter().map(|[x, y]| MapPoint::new(x, y)).collect()
    };

    match input {
        GeometryInput::Point { x, y } => Geometry::point(x, y),
        GeometryInput::Polyline { paths } => Geometry::Polyline {
            paths: paths.into_iter().map(points).collect(),
        },
        GeometryInput::Polygon { rings } => Geometry::Polygon {
            rings: rings.into_iter().map(points).collect(),
        },
        GeometryInput::Multipoint { points: list } => Geometry::MultiPoint {
            points: points(list),
        },
    }
}

fn to_attributes(map: Map<String, Value>) -> Attributes {
    map.into_iter().map(|(k, v)| (k, to_value(v))).collect()
}

fn to_value(value: Value) -> AttributeValue {
    match value {
        Value::Null => AttributeValue::Null,
        Value::String(s) => AttributeValue::Text(s),
        Value::Number(n) => match n.as_i64() {
            Some(i) => AttributeValue::Integer(i),
            None => n
                .as_f64()
                .map_or_else(|| AttributeValue::Text(n.to_string()), AttributeValue::Float),
        },
        other => AttributeValue::Text(other.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = r##"{
        "id": "poi",
        "symbols": {
            "red": { "type": "marker", "color": "#ff0000", "offset_x": 6, "offset_y": 6 },
            "road": { "type": "line", "color": "#333333", "width": 2 }
        },
        "features": [
            { "geometry": { "type": "point", "x": 8.5, "y": 47.3 },
              "attributes": { "Z": 1, "NAME": "a", "ratio": 0.5, "note": null },
              "symbol": "red" },
            { "geometry": { "type": "point", "x": 8.6, "y": 47.4 }, "symbol": "red" },
            { "geometry": { "type": "polyline", "paths": [[[0, 0], [1, 1]]] }, "symbol": "road" },
            { "attributes": { "NAME": "no geometry" } }
        ]
    }"##;

    #[test]
    fn test_parse_layer() {
        let layer = parse_layer(SAMPLE).unwrap();

        assert_eq!(layer.id, "poi");
        assert_eq!(layer.features.len(), 4);

        let keys: Vec<_> = layer.features[0].attributes.keys().collect();
        assert_eq!(keys, ["Z", "NAME", "ratio", "note"]);
        assert_eq!(
            layer.features[0].attributes.get("Z"),
            Some(&AttributeValue::Integer(1))
        );
        assert_eq!(
            layer.features[0].attributes.get("ratio"),
            Some(&AttributeValue::Float(0.5))
        );
        assert!(layer.features[0].attributes.get("note").unwrap().is_null());
        assert!(layer.features[3].geometry.is_none());
        assert!(layer.features[3].symbol.is_none());
    }

    #[test]
    fn test_symbol_keys_share_instances() {
        let layer = parse_layer(SAMPLE).unwrap();
        let a = layer.features[0].symbol.as_ref().unwrap();
        let b = layer.features[1].symbol.as_ref().unwrap();
        let c = layer.features[2].symbol.as_ref().unwrap();
        assert!(Arc::ptr_eq(a, b));
        assert!(!Arc::ptr_eq(a, c));
    }

    #[test]
    fn test_unknown_symbol_rejected() {
        let json = r#"{ "id": "x", "features": [ { "symbol": "missing" } ] }"#;
        let err = parse_layer(json).unwrap_err();
        assert!(err.contains("unknown symbol"));
    }

    #[test]
    fn test_bad_color_rejected() {
        let json = r#"{ "id": "x", "symbols": { "s": { "type": "line", "color": "blue" } } }"#;
        assert!(parse_layer(json).unwrap_err().contains("invalid color"));
    }
}
