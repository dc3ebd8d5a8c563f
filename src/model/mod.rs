//! In-memory map layer model.
//!
//! This module contains:
//! - Features with ordered attribute tables
//! - Point, polyline and polygon geometry
//! - Marker, line and fill symbols

mod feature;
mod geometry;
mod symbol;

pub use feature::{AttributeValue, Attributes, Feature, Layer};
pub use geometry::{Geometry, MapPoint};
pub use symbol::{Color, FillSymbol, LineSymbol, MarkerSymbol, Symbol};
