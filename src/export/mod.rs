//! Layer export pipeline.
//!
//! # Architecture
//!
//! Export runs as one synchronous call chain:
//! - [`StyleCatalog`] collects the distinct symbols of the layer
//! - [`assemble`] encodes every feature and symbol into a KML [`Document`]
//! - [`collect_images`] renders each catalog symbol through a [`Rasterizer`]
//! - [`pack`] zips the document and images into KMZ bytes
//!
//! [`KmzExporter`] wraps the whole chain with a builder-style config.
//!
//! # Example
//!
//! ```no_run
//! use kmzkit::export::{KmzConfig, KmzExporter};
//! use kmzkit::{Layer, Symbol};
//!
//! let layer = Layer::new("empty");
//! let config = KmzConfig {
//!     seed: Some(42),
//!     ..Default::default()
//! };
//!
//! let mut rasterize = |_: &Symbol| Ok::<_, std::io::Error>(Vec::new());
//! let bytes = KmzExporter::new()
//!     .with_config(config)
//!     .export(&layer, &mut rasterize)?;
//! # Ok::<(), kmzkit::Error>(())
//! ```
//!
//! [`Document`]: crate::kml::Document

mod catalog;
mod document;
mod feature;
mod geometry;
mod images;
mod kmz;
mod style;

pub use catalog::{CatalogEntry, StyleCatalog};
pub use document::{assemble, default_style_id, schema_id_prefix};
pub use feature::{FeatureEncoder, display_name, is_reserved_field, name_field};
pub use geometry::encode_geometry;
pub use images::{ExportFile, Rasterizer, collect_images};
pub use kmz::{DOCUMENT_PATH, KmzConfig, KmzExporter, MAX_COMPRESSION_LEVEL, pack, write_kmz};
pub use style::{IMAGE_FOLDER, default_style, encode_style, icon_path};
