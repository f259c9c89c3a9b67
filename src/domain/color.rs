use std::fmt;

use serde::{Deserialize, Serialize};

/// CSS colour as the effects use it
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Color {
    /// hue in degrees, saturation and lightness in percent
    Hsl { h: f64, s: f64, l: f64 },
    Rgb(u8, u8, u8),
    Rgba(u8, u8, u8, f64),
}

impl Color {
    pub const WHITE: Color = Color::Rgb(255, 255, 255);
    pub const BLACK: Color = Color::Rgb(0, 0, 0);

    pub const fn hsl(h: f64, s: f64, l: f64) -> Self {
        Color::Hsl { h, s, l }
    }

    /// `0xRRGGBB`
    pub const fn hex(rgb: u32) -> Self {
        Color::Rgb((rgb >> 16) as u8, (rgb >> 8) as u8, rgb as u8)
    }

    pub fn to_css(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            Color::Hsl { h, s, l } => write!(f, "hsl({}, {}%, {}%)", h, s, l),
            Color::Rgb(r, g, b) => write!(f, "#{:02X}{:02X}{:02X}", r, g, b),
            Color::Rgba(r, g, b, a) => write!(f, "rgba({}, {}, {}, {})", r, g, b, a),
        }
    }
}
