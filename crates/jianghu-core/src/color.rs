//! Theme colors

use serde::{Deserialize, Serialize};
use std::fmt;

/// A theme color as supplied by the caller (e.g. `"#F4D03F"`).
///
/// The engine does not validate the format; the string is handed to the
/// rendering primitives as-is. `to_rgba` is available for hosts that need
/// numeric channels.
#[derive(Clone, Debug, Hash, Eq, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ThemeColor(String);

impl ThemeColor {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Case-insensitive substring test, used by palette-dependent shape choices
    pub fn contains_code(&self, code: &str) -> bool {
        self.0.to_ascii_uppercase().contains(&code.to_ascii_uppercase())
    }

    /// Parse as a CSS hex color. Returns `None` for anything else.
    pub fn to_rgba(&self) -> Option<Rgba> {
        Rgba::from_css_hex(&self.0)
    }
}

impl Default for ThemeColor {
    fn default() -> Self {
        Self("#fff".to_string())
    }
}

impl fmt::Display for ThemeColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ThemeColor {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl From<String> for ThemeColor {
    fn from(value: String) -> Self {
        Self(value)
    }
}

/// RGBA color with channels in [0, 1]
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Rgba {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl Rgba {
    pub const WHITE: Self = Self {
        r: 1.0,
        g: 1.0,
        b: 1.0,
        a: 1.0,
    };

    pub fn from_hex(hex: u32) -> Self {
        Self {
            r: ((hex >> 16) & 0xFF) as f32 / 255.0,
            g: ((hex >> 8) & 0xFF) as f32 / 255.0,
            b: (hex & 0xFF) as f32 / 255.0,
            a: 1.0,
        }
    }

    /// Parse `#rgb`, `#rrggbb` or `#rrggbbaa`
    pub fn from_css_hex(s: &str) -> Option<Self> {
        let digits = s.trim().strip_prefix('#')?;
        if !digits.chars().all(|c| c.is_ascii_hexdigit()) {
            return None;
        }
        match digits.len() {
            3 => {
                let mut expanded = String::with_capacity(6);
                for c in digits.chars() {
                    expanded.push(c);
                    expanded.push(c);
                }
                u32::from_str_radix(&expanded, 16).ok().map(Self::from_hex)
            }
            6 => u32::from_str_radix(digits, 16).ok().map(Self::from_hex),
            8 => {
                let rgb = u32::from_str_radix(&digits[..6], 16).ok()?;
                let alpha = u8::from_str_radix(&digits[6..], 16).ok()?;
                Some(Self {
                    a: alpha as f32 / 255.0,
                    ..Self::from_hex(rgb)
                })
            }
            _ => None,
        }
    }

    pub fn to_array(&self) -> [f32; 4] {
        [self.r, self.g, self.b, self.a]
    }
}

impl Default for Rgba {
    fn default() -> Self {
        Self::WHITE
    }
}
