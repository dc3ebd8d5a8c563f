//! Binary-only helpers: JSON layer input and the reference icon renderer.

mod input;
mod raster;

pub use input::parse_layer;
pub use raster::render_png;
