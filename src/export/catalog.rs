//! Distinct symbols of a feature set.
//!
//! Symbols are deduplicated by `Arc` identity, never by value. Each entry
//! gets a token (`symbol1`, `symbol2`, ...) in first-seen order; the token
//! is the style id and the icon file stem, and is only meaningful within
//! one export call.

use std::collections::HashMap;
use std::sync::Arc;

use crate::model::{Feature, Symbol};

/// One distinct symbol and its per-export token.
#[derive(Debug, Clone)]
pub struct CatalogEntry {
    pub token: String,
    pub symbol: Arc<Symbol>,
}

/// Ordered, identity-deduplicated set of symbols used by a feature list.
#[derive(Debug, Default)]
pub struct StyleCatalog {
    entries: Vec<CatalogEntry>,
    // Pointer -> entry index. Entries hold a strong reference, so an
    // address cannot be reused while the catalog is alive.
    index: HashMap<usize, usize>,
}

impl StyleCatalog {
    /// Collect the symbols referenced by `features`, in order.
    pub fn collect<'a, I>(features: I) -> Self
    where
        I: IntoIterator<Item = &'a Feature>,
    {
        let mut catalog = StyleCatalog::default();
        for feature in features {
            if let Some(ref symbol) = feature.symbol {
                catalog.insert(symbol);
            }
        }
        catalog
    }

    fn insert(&mut self, symbol: &Arc<Symbol>) {
        let key = identity(symbol);
        if self.index.contains_key(&key) {
            return;
        }
        let token = format!("symbol{}", self.entries.len() + 1);
        self.index.insert(key, self.entries.len());
        self.entries.push(CatalogEntry {
            token,
            symbol: Arc::clone(symbol),
        });
    }

    /// Token of a symbol, if that exact instance is in the catalog.
    pub fn token_of(&self, symbol: &Arc<Symbol>) -> Option<&str> {
        self.index
            .get(&identity(symbol))
            .map(|&i| self.entries[i].token.as_str())
    }

    pub fn entries(&self) -> &[CatalogEntry] {
        &self.entries
    }

    pub fn iter(&self) -> std::slice::Iter<'_, CatalogEntry> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

fn identity(symbol: &Arc<Symbol>) -> usize {
    Arc::as_ptr(symbol) as usize
}

impl<'a> IntoIterator for &'a StyleCatalog {
    type Item = &'a CatalogEntry;
    type IntoIter = std::slice::Iter<'a, CatalogEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Color, Geometry, LineSymbol, MarkerSymbol};
    use proptest::prelude::*;

    fn marker() -> Arc<Symbol> {
        Arc::new(MarkerSymbol::default().into())
    }

    fn point_with(symbol: Option<&Arc<Symbol>>) -> Feature {
        Feature {
            symbol: symbol.cloned(),
            ..Feature::new(Geometry::point(0.0, 0.0))
        }
    }

    #[test]
    fn test_empty_features_empty_catalog() {
        let catalog = StyleCatalog::collect(&Vec::<Feature>::new());
        assert!(catalog.is_empty());
    }

    #[test]
    fn test_shared_instance_collected_once() {
        let a = marker();
        let features = [point_with(Some(&a)), point_with(None), point_with(Some(&a))];

        let catalog = StyleCatalog::collect(&features);
        assert_eq!(catalog.len(), 1);
        assert_eq!(catalog.token_of(&a), Some("symbol1"));
    }

    #[test]
    fn test_equal_values_stay_distinct() {
        let a = marker();
        let b = marker();
        assert_eq!(*a, *b);

        let catalog = StyleCatalog::collect(&[point_with(Some(&a)), point_with(Some(&b))]);
        assert_eq!(catalog.len(), 2);
        assert_ne!(catalog.token_of(&a), catalog.token_of(&b));
    }

    #[test]
    fn test_first_seen_order() {
        let a = marker();
        let b: Arc<Symbol> = Arc::new(
            LineSymbol {
                color: Color::BLACK,
                width: 1.0,
            }
            .into(),
        );
        let features = [point_with(Some(&b)), point_with(Some(&a)), point_with(Some(&b))];

        let catalog = StyleCatalog::collect(&features);
        let tokens: Vec<_> = catalog.iter().map(|e| e.token.as_str()).collect();
        assert_eq!(tokens, ["symbol1", "symbol2"]);
        assert!(Arc::ptr_eq(&catalog.entries()[0].symbol, &b));
        assert!(Arc::ptr_eq(&catalog.entries()[1].symbol, &a));
    }

    #[test]
    fn test_unknown_symbol_has_no_token() {
        let catalog = StyleCatalog::collect(&[point_with(Some(&marker()))]);
        assert_eq!(catalog.token_of(&marker()), None);
    }

    proptest! {
        #[test]
        fn prop_catalog_is_first_occurrence_dedup(picks in prop::collection::vec(prop::option::of(0usize..5), 0..40)) {
            let pool: Vec<Arc<Symbol>> = (0..5).map(|_| marker()).collect();
            let features: Vec<Feature> = picks
                .iter()
                .map(|p| point_with(p.map(|i| &pool[i])))
                .collect();

            let mut expected: Vec<usize> = Vec::new();
            for i in picks.iter().flatten() {
                if !expected.contains(i) {
                    expected.push(*i);
                }
            }

            let catalog = StyleCatalog::collect(&features);
            prop_assert_eq!(catalog.len(), expected.len());
            for (entry, &i) in catalog.iter().zip(&expected) {
                prop_assert!(Arc::ptr_eq(&entry.symbol, &pool[i]));
            }
        }
    }
}
