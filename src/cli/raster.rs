//! Reference icon renderer.
//!
//! Markers are filled circles, lines a horizontal stroke, and fills a
//! bordered square, all on a transparent square canvas.

use std::io::Cursor;

use image::{DynamicImage, ImageFormat, ImageResult, Rgba, RgbaImage};

use kmzkit::{Color, Symbol};

/// Render `symbol` as a `size` x `size` PNG.
pub fn render_png(symbol: &Symbol, size: u32) -> ImageResult<Vec<u8>> {
    let mut canvas = RgbaImage::new(size, size);
    let extent = size as f64;

    match symbol {
        Symbol::Marker(marker) => {
            let radius = (marker.size.min(extent) / 2.0).max(0.5);
            let center = extent / 2.0;
            paint(&mut canvas, marker.color, |x, y| {
                (x - center).powi(2) + (y - center).powi(2) <= radius * radius
            });
        }
        Symbol::Line(line) => {
            let half = (line.width.min(extent) / 2.0).max(0.5);
            let center = extent / 2.0;
            paint(&mut canvas, line.color, |_, y| (y - center).abs() <= half);
        }
        Symbol::Fill(fill) => {
            let border = fill.border_width.clamp(0.0, extent / 2.0);
            paint(&mut canvas, fill.fill, |_, _| true);
            paint(&mut canvas, fill.border, |x, y| {
                x < border || y < border || x >= extent - border || y >= extent - border
            });
        }
    }

    let mut png = Vec::new();
    DynamicImage::ImageRgba8(canvas).write_to(&mut Cursor::new(&mut png), ImageFormat::Png)?;
    Ok(png)
}

/// Set every pixel whose center satisfies `inside`.
fn paint(canvas: &mut RgbaImage, color: Color, inside: impl Fn(f64, f64) -> bool) {
    let rgba = Rgba([color.r, color.g, color.b, color.a]);
    for (x, y, pixel) in canvas.enumerate_pixels_mut() {
        if inside(x as f64 + 0.5, y as f64 + 0.5) {
            *pixel = rgba;
        }
    }
}
