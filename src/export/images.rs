//! Rendered symbol images.

use log::{debug, warn};

use super::catalog::StyleCatalog;
use super::style::icon_path;
use crate::error::{BoxError, Error, Result};
use crate::model::Symbol;

/// A named file destined for the archive.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportFile {
    pub title: String,
    /// Path inside the archive.
    pub path: String,
    pub data: Vec<u8>,
}

/// Renders a symbol to PNG bytes.
///
/// Implemented for any `FnMut(&Symbol) -> Result<Vec<u8>, E>`. Hosts whose
/// renderer is bound to a UI thread marshal the call inside their
/// implementation; export waits for it synchronously.
pub trait Rasterizer {
    fn rasterize(&mut self, symbol: &Symbol) -> std::result::Result<Vec<u8>, BoxError>;
}

impl<F, E> Rasterizer for F
where
    F: FnMut(&Symbol) -> std::result::Result<Vec<u8>, E>,
    E: Into<BoxError>,
{
    fn rasterize(&mut self, symbol: &Symbol) -> std::result::Result<Vec<u8>, BoxError> {
        self(symbol).map_err(Into::into)
    }
}

/// Render every catalog symbol, in catalog order.
///
/// The first failure aborts collection: an archive with a missing icon
/// would contain dangling style references.
pub fn collect_images<R>(catalog: &StyleCatalog, rasterizer: &mut R) -> Result<Vec<ExportFile>>
where
    R: Rasterizer + ?Sized,
{
    let mut images = Vec::with_capacity(catalog.len());

    for entry in catalog {
        let data = rasterizer.rasterize(&entry.symbol).map_err(|source| {
            warn!(
                "Rasterizer failed for {} symbol {}: {}",
                entry.symbol.kind(),
                entry.token,
                source
            );
            Error::Rasterize {
                token: entry.token.clone(),
                source,
            }
        })?;

        debug!("Rendered {} ({} bytes)", entry.token, data.len());
        images.push(ExportFile {
            title: entry.token.clone(),
            path: icon_path(&entry.token),
            data,
        });
    }

    Ok(images)
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use crate::model::{Color, Feature, Geometry, LineSymbol, MarkerSymbol};

    fn catalog_of(symbols: &[Arc<Symbol>]) -> StyleCatalog {
        let features: Vec<Feature> = symbols
            .iter()
            .map(|s| Feature::new(Geometry::point(0.0, 0.0)).with_symbol(s.clone()))
            .collect();
        StyleCatalog::collect(&features)
    }

    fn symbols() -> Vec<Arc<Symbol>> {
        vec![
            Arc::new(MarkerSymbol::default().into()),
            Arc::new(
                LineSymbol {
                    color: Color::BLACK,
                    width: 1.0,
                }
                .into(),
            ),
        ]
    }

    #[test]
    fn test_images_follow_catalog() {
        let catalog = catalog_of(&symbols());
        let mut rasterize =
            |symbol: &Symbol| Ok::<_, std::io::Error>(symbol.kind().as_bytes().to_vec());

        let images = collect_images(&catalog, &mut rasterize).unwrap();

        assert_eq!(images.len(), 2);
        assert_eq!(images[0].path, "files/symbol1.png");
        assert_eq!(images[0].title, "symbol1");
        assert_eq!(images[0].data, b"marker");
        assert_eq!(images[1].path, "files/symbol2.png");
        assert_eq!(images[1].data, b"line");
    }

    #[test]
    fn test_failure_aborts_with_token() {
        let catalog = catalog_of(&symbols());
        let mut calls = 0;
        let mut rasterize = |symbol: &Symbol| -> std::result::Result<Vec<u8>, String> {
            calls += 1;
            match symbol {
                Symbol::Line(_) => Err("no surface".to_string()),
                _ => Ok(vec![1, 2, 3]),
            }
        };

        let err = collect_images(&catalog, &mut rasterize).unwrap_err();
        match err {
            Error::Rasterize { token, source } => {
                assert_eq!(token, "symbol2");
                assert_eq!(source.to_string(), "no surface");
            }
            other => panic!("Expected rasterize error, got {:?}", other),
        }
        assert_eq!(calls, 2);
    }

    #[test]
    fn test_empty_catalog_no_images() {
        let catalog = catalog_of(&[]);
        let mut rasterize = |_: &Symbol| -> std::result::Result<Vec<u8>, BoxError> {
            panic!("not called")
        };
        assert!(collect_images(&catalog, &mut rasterize).unwrap().is_empty());
    }
}
