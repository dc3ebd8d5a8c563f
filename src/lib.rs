//! # kmzkit
//!
//! Export in-memory map layers to KMZ archives for Google Earth and other
//! KML viewers.
//!
//! ## Features
//!
//! - Points, polylines and polygons with ordered attribute tables
//! - Marker, line and fill symbols shared between features, one KML style
//!   per distinct symbol instance
//! - One schema and `ExtendedData` block per placemark
//! - Symbol icons rendered through a caller-supplied [`Rasterizer`](export::Rasterizer)
//!
//! ## Quick Start
//!
//! ```no_run
//! use std::sync::Arc;
//! use kmzkit::{Color, Feature, Geometry, Layer, LineSymbol, Symbol, write_kmz};
//!
//! let river: Arc<Symbol> = Arc::new(
//!     LineSymbol { color: Color::rgb(0, 0, 255), width: 3.0 }.into(),
//! );
//!
//! let mut layer = Layer::new("rivers");
//! layer.add_feature(
//!     Feature::new(Geometry::polyline([vec![(8.5, 47.3), (8.6, 47.4)]]))
//!         .with_attribute("NAME", "Limmat")
//!         .with_symbol(river),
//! );
//!
//! // Line symbols still get an icon; any PNG renderer will do.
//! let mut rasterize = |_: &Symbol| std::fs::read("line.png");
//! write_kmz(&layer, &mut rasterize, "rivers.kmz")?;
//! # Ok::<(), kmzkit::Error>(())
//! ```

pub mod error;
pub mod export;
pub mod kml;
pub mod model;

pub use error::{Error, Result};
pub use export::{KmzConfig, KmzExporter, Rasterizer, write_kmz};
pub use model::{
    AttributeValue, Attributes, Color, Feature, FillSymbol, Geometry, Layer, LineSymbol, MapPoint,
    MarkerSymbol, Symbol,
};
