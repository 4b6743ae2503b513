//! Color utilities
//!
//! Conversion between `#rrggbb` strings and channel triplets, plus the
//! channel averaging used to mix colors.

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

/// Errors produced when parsing a hex color string
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ColorError {
    #[error("color {0:?} does not start with '#'")]
    MissingHash(String),

    #[error("color {input:?} has {digits} hex digits, expected 6")]
    InvalidLength { input: String, digits: usize },

    #[error("color {0:?} contains a non-hex digit")]
    InvalidDigit(String),
}

/// Channel triplet, each channel in 0..=255
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Channels as an array, the form egui's color button edits
    pub fn to_array(self) -> [u8; 3] {
        [self.r, self.g, self.b]
    }

    pub fn from_array([r, g, b]: [u8; 3]) -> Self {
        Self { r, g, b }
    }

    pub fn to_color32(self) -> egui::Color32 {
        egui::Color32::from_rgb(self.r, self.g, self.b)
    }
}

impl From<[u8; 3]> for Rgb {
    fn from(channels: [u8; 3]) -> Self {
        Self::from_array(channels)
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

impl FromStr for Rgb {
    type Err = ColorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        decode(s)
    }
}

/// Parse a `#RRGGBB` color string (either case) into a triplet
///
/// The six digits are read as one 24-bit value; red is bits 16-23,
/// green bits 8-15 and blue bits 0-7.
pub fn decode(hex: &str) -> Result<Rgb, ColorError> {
    let digits = hex
        .strip_prefix('#')
        .ok_or_else(|| ColorError::MissingHash(hex.to_string()))?;

    let count = digits.chars().count();
    if count != 6 {
        return Err(ColorError::InvalidLength {
            input: hex.to_string(),
            digits: count,
        });
    }

    // from_str_radix alone would accept a leading '+'
    if !digits.bytes().all(|c| c.is_ascii_hexdigit()) {
        return Err(ColorError::InvalidDigit(hex.to_string()));
    }

    let value = u32::from_str_radix(digits, 16)
        .map_err(|_| ColorError::InvalidDigit(hex.to_string()))?;

    Ok(Rgb {
        r: ((value >> 16) & 0xff) as u8,
        g: ((value >> 8) & 0xff) as u8,
        b: (value & 0xff) as u8,
    })
}

/// Format a triplet as a lowercase `#rrggbb` string
pub fn encode(rgb: Rgb) -> String {
    rgb.to_string()
}

/// Average colors channel by channel
///
/// Each channel sum is divided by `N` and rounded half up. `N` must be at
/// least one; an empty set is rejected at compile time.
pub fn mix<const N: usize>(colors: &[Rgb; N]) -> Rgb {
    const { assert!(N > 0, "cannot mix an empty set of colors") };

    let (r, g, b) = colors.iter().fold((0u32, 0u32, 0u32), |acc, c| {
        (acc.0 + c.r as u32, acc.1 + c.g as u32, acc.2 + c.b as u32)
    });

    let n = N as u32;
    let round = |sum: u32| ((sum + n / 2) / n) as u8;

    Rgb::new(round(r), round(g), round(b))
}
