//! 8-bit sRGB color type
//!
//! Grids, palettes and composited canvases all store colors as plain 8-bit
//! sRGB triples. Float math happens in [`Lab`](super::Lab) or in the error
//! diffusion working values, never here.

use std::fmt;
use std::str::FromStr;

/// Error returned when a hex color string cannot be parsed.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseColorError {
    /// Not exactly six hex digits after stripping an optional `#`.
    #[error("invalid hex color length in {0:?} (expected 6 hex digits)")]
    InvalidLength(String),
    /// Six characters, but at least one is not a hex digit.
    #[error("invalid hex digit in {0:?}")]
    InvalidHex(String),
}

impl ParseColorError {
    /// The input string that failed to parse.
    pub fn input(&self) -> &str {
        match self {
            ParseColorError::InvalidLength(s) | ParseColorError::InvalidHex(s) => s,
        }
    }
}

/// A color in 8-bit sRGB.
///
/// `Rgb` is a plain value type: it is `Copy`, compares byte-for-byte and
/// hashes by channel, which is what the "output is a palette color"
/// invariant is checked against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Rgb {
    /// Red channel
    pub r: u8,
    /// Green channel
    pub g: u8,
    /// Blue channel
    pub b: u8,
}

impl Rgb {
    /// Create a color from its three channels.
    #[inline]
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Create a color from a byte array `[R, G, B]`.
    #[inline]
    pub const fn from_bytes(bytes: [u8; 3]) -> Self {
        Self::new(bytes[0], bytes[1], bytes[2])
    }

    /// Convert to a byte array `[R, G, B]`.
    #[inline]
    pub const fn to_bytes(self) -> [u8; 3] {
        [self.r, self.g, self.b]
    }

    /// The RGB part of an RGBA sample.
    #[inline]
    pub const fn from_rgba(px: [u8; 4]) -> Self {
        Self::new(px[0], px[1], px[2])
    }

    /// Combine with an alpha value into an RGBA sample.
    #[inline]
    pub const fn with_alpha(self, a: u8) -> [u8; 4] {
        [self.r, self.g, self.b, a]
    }

    /// Perceptual brightness `(0.299 R + 0.587 G + 0.114 B) / 255`, in `[0, 1]`.
    ///
    /// Used by the ordered and two-color algorithms to pick between the
    /// nearest and second-nearest palette entries.
    #[inline]
    pub fn brightness(self) -> f64 {
        (self.r as f64 * 0.299 + self.g as f64 * 0.587 + self.b as f64 * 0.114) / 255.0
    }

    /// Lowercase `#rrggbb` form.
    pub fn to_hex(self) -> String {
        format!("#{}", hex::encode(self.to_bytes()))
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

impl From<[u8; 3]> for Rgb {
    fn from(bytes: [u8; 3]) -> Self {
        Self::from_bytes(bytes)
    }
}

impl FromStr for Rgb {
    type Err = ParseColorError;

    /// Parse `#rrggbb` or `rrggbb`, case-insensitive.
    ///
    /// Shorthand (`#rgb`) and surrounding whitespace are rejected: palette
    /// entries must be exactly six hex digits.
    ///
    /// ```
    /// use pixel_dither::Rgb;
    ///
    /// let c: Rgb = "#0F380F".parse().unwrap();
    /// assert_eq!(c, Rgb::new(0x0f, 0x38, 0x0f));
    /// assert!("#fff".parse::<Rgb>().is_err());
    /// ```
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let digits = s.strip_prefix('#').unwrap_or(s);
        if digits.len() != 6 {
            return Err(ParseColorError::InvalidLength(s.to_string()));
        }
        let mut bytes = [0u8; 3];
        hex::decode_to_slice(digits, &mut bytes)
            .map_err(|_| ParseColorError::InvalidHex(s.to_string()))?;
        Ok(Self::from_bytes(bytes))
    }
}
