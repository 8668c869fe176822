// Simple color struct, created from an unsigned 32 representing RRGGBBAA

use std::fmt;

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    pub const fn from_u32(num: u32) -> Color {
        let r = (num >> 24) as u8;
        let g = (num >> 16) as u8;
        let b = (num >> 8) as u8;
        let a = num as u8;

        Color { r, g, b, a }
    }

    pub const fn rgb(r: u8, g: u8, b: u8) -> Color {
        Color { r, g, b, a: 0xff }
    }

    // CSS color string with the given opacity in place of this color's own alpha
    pub fn to_css_with_opacity(self, opacity: f64) -> String {
        format!(
            "rgba({}, {}, {}, {})",
            self.r,
            self.g,
            self.b,
            opacity.max(0.0).min(1.0)
        )
    }
}

// Opaque colors print as hex, anything else as rgba()
impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.a == 0xff {
            write!(f, "#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
        } else {
            write!(
                f,
                "rgba({}, {}, {}, {})",
                self.r,
                self.g,
                self.b,
                self.a as f64 / 255.0
            )
        }
    }
}

// Pinks, plum and gold of the page theme
pub const PALETTE: [Color; 5] = [
    Color::from_u32(0xFFB6C1ff),
    Color::from_u32(0xFF69B4ff),
    Color::from_u32(0xDDA0DDff),
    Color::from_u32(0xFFD700ff),
    Color::from_u32(0xFFC0CBff),
];

pub const CONNECTION_COLOR: Color = Color::rgb(255, 182, 193);
