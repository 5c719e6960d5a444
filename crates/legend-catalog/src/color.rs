//! 24-bit RGB color values and their `#rrggbb` text form.

use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Packed `0x00RRGGBB` color.
///
/// The high byte is never rendered; [`Color::hex`] reads the value in
/// big-endian byte order and keeps the low three bytes.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Color(pub u32);

/// Error type for color parsing failures.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ColorError {
    /// Input string was empty.
    #[error("empty color string")]
    Empty,
    /// Wrong number of hex digits after the optional `#`.
    #[error("invalid color length {0}, expected 6")]
    InvalidLength(usize),
    /// Contains a non-hex character.
    #[error("invalid hex character '{0}'")]
    InvalidHex(char),
}

impl Color {
    /// Build a color from its red, green and blue channels.
    pub const fn from_rgb(r: u8, g: u8, b: u8) -> Self {
        Self(u32::from_be_bytes([0, r, g, b]))
    }

    /// The same color with the unrendered high byte cleared.
    pub const fn normalized(self) -> Self {
        Self(self.0 & 0x00FF_FFFF)
    }

    /// Red, green and blue channels.
    pub const fn rgb(self) -> (u8, u8, u8) {
        let [_, r, g, b] = self.normalized().0.to_be_bytes();
        (r, g, b)
    }

    /// Six lowercase hex digits, zero-padded, no `#` and no alpha.
    pub fn hex(self) -> String {
        let (r, g, b) = self.rgb();
        format!("{r:02x}{g:02x}{b:02x}")
    }

    /// Parse `#rrggbb` or `rrggbb` (case-insensitive).
    pub fn from_hex(s: &str) -> Result<Self, ColorError> {
        let s = s.trim();
        if s.is_empty() {
            return Err(ColorError::Empty);
        }
        let digits = s.strip_prefix('#').unwrap_or(s);
        if let Some(bad) = digits.chars().find(|c| !c.is_ascii_hexdigit()) {
            return Err(ColorError::InvalidHex(bad));
        }
        if digits.len() != 6 {
            return Err(ColorError::InvalidLength(digits.len()));
        }
        u32::from_str_radix(digits, 16)
            .map(Color)
            .map_err(|_| ColorError::InvalidLength(digits.len()))
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.hex())
    }
}

impl TryFrom<String> for Color {
    type Error = ColorError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Color::from_hex(&value)
    }
}

impl From<Color> for String {
    fn from(color: Color) -> Self {
        color.to_string()
    }
}
