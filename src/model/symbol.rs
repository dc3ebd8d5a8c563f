//! Symbol appearance descriptors.
//!
//! Symbols are shared between features through [`Arc`](std::sync::Arc).
//! Export treats each `Arc` allocation as one style, so two symbols with the
//! same appearance stay separate styles unless they are the same instance.

use std::fmt;

/// 32-bit ARGB color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Color {
    pub a: u8,
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const BLACK: Color = Color::rgb(0, 0, 0);

    pub const fn argb(a: u8, r: u8, g: u8, b: u8) -> Self {
        Self { a, r, g, b }
    }

    /// Fully opaque color.
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self::argb(255, r, g, b)
    }

    /// Parse `#rrggbb` or `#aarrggbb` (leading `#` optional).
    pub fn from_hex(s: &str) -> Option<Self> {
        let hex = s.strip_prefix('#').unwrap_or(s);
        let byte = |i: usize| u8::from_str_radix(hex.get(i..i + 2)?, 16).ok();

        match hex.len() {
            6 => Some(Self::rgb(byte(0)?, byte(2)?, byte(4)?)),
            8 => Some(Self::argb(byte(0)?, byte(2)?, byte(4)?, byte(6)?)),
            _ => None,
        }
    }

    /// KML color notation: `aabbggrr`, lowercase hex.
    pub fn to_kml(self) -> String {
        format!("{:02x}{:02x}{:02x}{:02x}", self.a, self.b, self.g, self.r)
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}{:02x}", self.a, self.r, self.g, self.b)
    }
}

/// Point marker. The offsets locate the icon hot spot in pixels.
#[derive(Debug, Clone, PartialEq)]
pub struct MarkerSymbol {
    pub offset_x: f64,
    pub offset_y: f64,
    /// Rendered size in pixels.
    pub size: f64,
    pub color: Color,
}

impl Default for MarkerSymbol {
    fn default() -> Self {
        Self {
            offset_x: 0.0,
            offset_y: 0.0,
            size: 16.0,
            color: Color::BLACK,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct LineSymbol {
    pub color: Color,
    pub width: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct FillSymbol {
    pub fill: Color,
    pub border: Color,
    pub border_width: f64,
}

/// Appearance of a feature.
#[derive(Debug, Clone, PartialEq)]
pub enum Symbol {
    Marker(MarkerSymbol),
    Line(LineSymbol),
    Fill(FillSymbol),
}

impl Symbol {
    pub fn kind(&self) -> &'static str {
        match self {
            Symbol::Marker(_) => "marker",
            Symbol::Line(_) => "line",
            Symbol::Fill(_) => "fill",
        }
    }
}

impl From<MarkerSymbol> for Symbol {
    fn from(symbol: MarkerSymbol) -> Self {
        Symbol::Marker(symbol)
    }
}

impl From<LineSymbol> for Symbol {
    fn from(symbol: LineSymbol) -> Self {
        Symbol::Line(symbol)
    }
}

impl From<FillSymbol> for Symbol {
    fn from(symbol: FillSymbol) -> Self {
        Symbol::Fill(symbol)
    }
}
