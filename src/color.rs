//! RGB colors and color-spec parsing
//!
//! Color specs are what the config file and the picker's text field hold:
//! a handful of color names, or hex in `#rgb` / `#rrggbb` form.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Opaque 8-bit RGB color
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ColorParseError {
    #[error("empty color string")]
    Empty,
    #[error("invalid hex length (expected 3 or 6 digits)")]
    InvalidLength,
    #[error("invalid hex digits")]
    InvalidHex,
    #[error("unknown color name '{0}'")]
    UnknownName(String),
}

/// Named colors understood by `Rgb::parse`
const NAMED_COLORS: &[(&str, Rgb)] = &[
    ("white", Rgb::WHITE),
    ("black", Rgb::BLACK),
    ("red", Rgb::RED),
    ("green", Rgb::GREEN),
    ("blue", Rgb::BLUE),
    ("yellow", Rgb::new(255, 255, 0)),
    ("cyan", Rgb::new(0, 255, 255)),
    ("magenta", Rgb::new(255, 0, 255)),
    ("gray", Rgb::new(128, 128, 128)),
    ("grey", Rgb::new(128, 128, 128)),
    ("orange", Rgb::new(255, 165, 0)),
    ("purple", Rgb::new(128, 0, 128)),
    ("brown", Rgb::new(165, 42, 42)),
    ("pink", Rgb::new(255, 192, 203)),
];

impl Rgb {
    pub const WHITE: Rgb = Rgb::new(255, 255, 255);
    pub const BLACK: Rgb = Rgb::new(0, 0, 0);
    pub const RED: Rgb = Rgb::new(255, 0, 0);
    pub const GREEN: Rgb = Rgb::new(0, 255, 0);
    pub const BLUE: Rgb = Rgb::new(0, 0, 255);

    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Parse a color name or a 3/6 digit hex string (leading `#` optional)
    pub fn parse(spec: &str) -> Result<Self, ColorParseError> {
        let spec = spec.trim();
        if spec.is_empty() {
            return Err(ColorParseError::Empty);
        }

        let lower = spec.to_ascii_lowercase();
        if let Some((_, rgb)) = NAMED_COLORS.iter().find(|(name, _)| *name == lower) {
            return Ok(*rgb);
        }

        match lower.strip_prefix('#') {
            Some(hex) => parse_hex(hex),
            // Bare hex digits are accepted too; anything else was meant as a name
            None if lower.bytes().all(|c| c.is_ascii_hexdigit()) => parse_hex(&lower),
            None => Err(ColorParseError::UnknownName(spec.to_string())),
        }
    }

    /// Parse, falling back to `fallback` for anything unrecognized
    pub fn parse_or(spec: &str, fallback: Rgb) -> Self {
        Self::parse(spec).unwrap_or(fallback)
    }

    /// Lowercase `#rrggbb`
    pub fn to_hex(self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }

    pub fn to_rgba_bytes(self) -> [u8; 4] {
        [self.r, self.g, self.b, 255]
    }

    /// Convert to macroquad Color (f32 0.0-1.0)
    pub fn to_mq_color(self) -> macroquad::color::Color {
        macroquad::color::Color::from_rgba(self.r, self.g, self.b, 255)
    }

    /// Perceived brightness, used to pick a readable outline over a swatch
    pub fn luma(self) -> f32 {
        0.299 * self.r as f32 + 0.587 * self.g as f32 + 0.114 * self.b as f32
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

impl FromStr for Rgb {
    type Err = ColorParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Rgb::parse(s)
    }
}

fn parse_hex(hex: &str) -> Result<Rgb, ColorParseError> {
    use ColorParseError::*;

    let nibble = |c: u8| -> Result<u8, ColorParseError> {
        match c {
            b'0'..=b'9' => Ok(c - b'0'),
            b'a'..=b'f' => Ok(c - b'a' + 10),
            b'A'..=b'F' => Ok(c - b'A' + 10),
            _ => Err(InvalidHex),
        }
    };

    let bytes = hex.as_bytes();
    match bytes.len() {
        0 => Err(Empty),
        3 => {
            // #rgb doubles each digit: f -> ff
            let r = nibble(bytes[0])?;
            let g = nibble(bytes[1])?;
            let b = nibble(bytes[2])?;
            Ok(Rgb::new(r * 17, g * 17, b * 17))
        }
        6 => {
            let byte = |hi: u8, lo: u8| -> Result<u8, ColorParseError> {
                Ok(nibble(hi)? << 4 | nibble(lo)?)
            };
            Ok(Rgb::new(
                byte(bytes[0], bytes[1])?,
                byte(bytes[2], bytes[3])?,
                byte(bytes[4], bytes[5])?,
            ))
        }
        _ => Err(InvalidLength),
    }
}

pub const PALETTE_COLS: usize = 8;

/// Swatches offered by the color picker
pub const DEFAULT_PALETTE: [Rgb; 24] = [
    Rgb::new(0, 0, 0),
    Rgb::new(64, 64, 64),
    Rgb::new(128, 128, 128),
    Rgb::new(192, 192, 192),
    Rgb::new(255, 255, 255),
    Rgb::new(120, 0, 0),
    Rgb::new(255, 0, 0),
    Rgb::new(255, 119, 119),
    Rgb::new(102, 57, 49),
    Rgb::new(143, 86, 59),
    Rgb::new(223, 113, 38),
    Rgb::new(255, 165, 0),
    Rgb::new(251, 242, 54),
    Rgb::new(238, 195, 154),
    Rgb::new(153, 229, 80),
    Rgb::new(0, 255, 0),
    Rgb::new(55, 148, 110),
    Rgb::new(75, 105, 47),
    Rgb::new(0, 255, 255),
    Rgb::new(91, 110, 225),
    Rgb::new(0, 0, 255),
    Rgb::new(47, 50, 167),
    Rgb::new(128, 0, 128),
    Rgb::new(255, 0, 255),
];
