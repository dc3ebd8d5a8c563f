//! Symbol to KML style.

use rand::Rng;

use crate::kml::{HotSpot, IconStyle, LineStyle, PolyStyle, Style};
use crate::model::{Color, FillSymbol, LineSymbol, MarkerSymbol, Symbol};

/// Folder holding rendered symbol images inside the archive.
pub const IMAGE_FOLDER: &str = "files";

/// Archive path of a symbol's rendered icon. Marker styles reference this
/// path and the image collector writes to it.
pub fn icon_path(token: &str) -> String {
    format!("{}/{}.png", IMAGE_FOLDER, token)
}

/// Build the style for a catalog symbol. The style id is `token`.
pub fn encode_style(symbol: &Symbol, token: &str, icon_scale: f32) -> Style {
    match symbol {
        Symbol::Marker(marker) => marker_style(marker, token, icon_scale),
        Symbol::Line(line) => line_style(line, token),
        Symbol::Fill(fill) => fill_style(fill, token),
    }
}

fn marker_style(marker: &MarkerSymbol, token: &str, icon_scale: f32) -> Style {
    Style {
        id: token.to_string(),
        icon: Some(IconStyle {
            href: icon_path(token),
            scale: icon_scale,
            hot_spot: HotSpot {
                x: marker.offset_x,
                y: marker.offset_y,
            },
        }),
        ..Default::default()
    }
}

fn line_style(line: &LineSymbol, token: &str) -> Style {
    Style {
        id: token.to_string(),
        line: Some(LineStyle {
            color: line.color.to_kml(),
            width: Some(line.width),
        }),
        ..Default::default()
    }
}

fn fill_style(fill: &FillSymbol, token: &str) -> Style {
    Style {
        id: token.to_string(),
        line: Some(LineStyle {
            color: fill.border.to_kml(),
            width: Some(fill.border_width),
        }),
        poly: Some(PolyStyle {
            color: fill.fill.to_kml(),
            fill: None,
        }),
        ..Default::default()
    }
}

/// Catch-all style for features without a symbol: one random opaque color
/// for both the polygon fill and the outline.
pub fn default_style<R: Rng>(id: &str, rng: &mut R) -> Style {
    let color = Color::rgb(
        rng.random_range(0..255),
        rng.random_range(0..255),
        rng.random_range(0..255),
    )
    .to_kml();

    Style {
        id: id.to_string(),
        icon: None,
        line: Some(LineStyle {
            color: color.clone(),
            width: None,
        }),
        poly: Some(PolyStyle {
            color,
            fill: Some(true),
        }),
    }
}
