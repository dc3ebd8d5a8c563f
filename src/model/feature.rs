//! Features, their attribute tables, and the layer that holds them.

use std::fmt;
use std::sync::Arc;

use super::{Geometry, Symbol};

/// A single attribute value.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum AttributeValue {
    #[default]
    Null,
    Integer(i64),
    Float(f64),
    Text(String),
}

impl AttributeValue {
    pub fn is_null(&self) -> bool {
        matches!(self, AttributeValue::Null)
    }
}

/// Default text rendering. `Null` renders as the empty string.
impl fmt::Display for AttributeValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AttributeValue::Null => Ok(()),
            AttributeValue::Integer(v) => write!(f, "{}", v),
            AttributeValue::Float(v) => write!(f, "{}", v),
            AttributeValue::Text(v) => f.write_str(v),
        }
    }
}

impl From<&str> for AttributeValue {
    fn from(v: &str) -> Self {
        AttributeValue::Text(v.to_string())
    }
}

impl From<String> for AttributeValue {
    fn from(v: String) -> Self {
        AttributeValue::Text(v)
    }
}

impl From<i64> for AttributeValue {
    fn from(v: i64) -> Self {
        AttributeValue::Integer(v)
    }
}

impl From<i32> for AttributeValue {
    fn from(v: i32) -> Self {
        AttributeValue::Integer(v.into())
    }
}

impl From<f64> for AttributeValue {
    fn from(v: f64) -> Self {
        AttributeValue::Float(v)
    }
}

impl<T: Into<AttributeValue>> From<Option<T>> for AttributeValue {
    fn from(v: Option<T>) -> Self {
        v.map(Into::into).unwrap_or(AttributeValue::Null)
    }
}

/// Attribute table that keeps insertion order.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Attributes {
    entries: Vec<(String, AttributeValue)>,
}

impl Attributes {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or replace. A replaced key keeps its original position.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<AttributeValue>) {
        let key = key.into();
        let value = value.into();
        match self.entries.iter_mut().find(|(k, _)| *k == key) {
            Some((_, existing)) => *existing = value,
            None => self.entries.push((key, value)),
        }
    }

    pub fn get(&self, key: &str) -> Option<&AttributeValue> {
        self.entries
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &AttributeValue)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(k, _)| k.as_str())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<K, V> FromIterator<(K, V)> for Attributes
where
    K: Into<String>,
    V: Into<AttributeValue>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut attributes = Attributes::new();
        for (k, v) in iter {
            attributes.insert(k, v);
        }
        attributes
    }
}

/// One map entity.
#[derive(Debug, Clone, Default)]
pub struct Feature {
    pub geometry: Option<Geometry>,
    pub attributes: Attributes,
    /// Shared appearance; `None` means the layer's default style.
    pub symbol: Option<Arc<Symbol>>,
}

impl Feature {
    pub fn new(geometry: Geometry) -> Self {
        Self {
            geometry: Some(geometry),
            ..Default::default()
        }
    }

    pub fn with_attribute(
        mut self,
        key: impl Into<String>,
        value: impl Into<AttributeValue>,
    ) -> Self {
        self.attributes.insert(key, value);
        self
    }

    pub fn with_symbol(mut self, symbol: Arc<Symbol>) -> Self {
        self.symbol = Some(symbol);
        self
    }
}

/// A named collection of features. The id becomes the KML document name
/// and prefixes the default style and schema ids.
#[derive(Debug, Clone, Default)]
pub struct Layer {
    pub id: String,
    pub features: Vec<Feature>,
}

impl Layer {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            features: Vec::new(),
        }
    }

    pub fn with_features(mut self, features: Vec<Feature>) -> Self {
        self.features = features;
        self
    }

    pub fn add_feature(&mut self, feature: Feature) {
        self.features.push(feature);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_attributes_preserve_insertion_order() {
        let attrs: Attributes = [("b", "1"), ("a", "2"), ("c", "3")].into_iter().collect();
        let keys: Vec<_> = attrs.keys().collect();
        assert_eq!(keys, ["b", "a", "c"]);
    }

    #[test]
    fn test_attributes_replace_in_place() {
        let mut attrs = Attributes::new();
        attrs.insert("x", 1);
        attrs.insert("y", 2);
        attrs.insert("x", "three");

        let entries: Vec<_> = attrs.iter().map(|(k, v)| (k, v.to_string())).collect();
        assert_eq!(entries, [("x", "three".to_string()), ("y", "2".to_string())]);
    }

    #[test]
    fn test_attribute_value_display() {
        assert_eq!(AttributeValue::Null.to_string(), "");
        assert_eq!(AttributeValue::Integer(-4).to_string(), "-4");
        assert_eq!(AttributeValue::Float(2.5).to_string(), "2.5");
        assert_eq!(AttributeValue::from("abc").to_string(), "abc");
        assert_eq!(AttributeValue::from(None::<i64>), AttributeValue::Null);
    }
}
