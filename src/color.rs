use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{PosterError, PosterResult};

/// Opaque 8-bit RGB color. Serializes as a lowercase `#rrggbb` hex string.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Rgb8 {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

pub const BLACK: Rgb8 = Rgb8 { r: 0, g: 0, b: 0 };
pub const WHITE: Rgb8 = Rgb8 {
    r: 255,
    g: 255,
    b: 255,
};

impl Rgb8 {
    pub fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Parse a `#rrggbb` hex string (case-insensitive, `#` optional).
    pub fn parse_hex(s: &str) -> PosterResult<Self> {
        let s = s.trim();
        let s = s.strip_prefix('#').unwrap_or(s);

        fn hex_byte(pair: &str) -> PosterResult<u8> {
            u8::from_str_radix(pair, 16)
                .map_err(|_| PosterError::validation(format!("invalid hex byte \"{pair}\"")))
        }

        if s.len() != 6 || !s.is_ascii() {
            return Err(PosterError::validation(
                "hex color must be #rrggbb (case-insensitive)",
            ));
        }

        Ok(Self {
            r: hex_byte(&s[0..2])?,
            g: hex_byte(&s[2..4])?,
            b: hex_byte(&s[4..6])?,
        })
    }

    pub fn to_hex(self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }

    /// Weighted-sum luminance in [0, 1]: `(0.299 r + 0.587 g + 0.114 b) / 255`.
    ///
    /// These exact coefficients are load-bearing for palette ordering; this is
    /// not CIE lightness.
    pub fn luminance(self) -> f64 {
        (0.299 * f64::from(self.r) + 0.587 * f64::from(self.g) + 0.114 * f64::from(self.b)) / 255.0
    }
}

impl fmt::Display for Rgb8 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_hex())
    }
}

impl Serialize for Rgb8 {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.to_hex())
    }
}

impl<'de> Deserialize<'de> for Rgb8 {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Self::parse_hex(&s).map_err(serde::de::Error::custom)
    }
}

/// Black for light colors, white for dark ones. A single hard threshold at
/// luminance 0.5, no gradation.
pub fn contrast_color(color: Rgb8) -> Rgb8 {
    if color.luminance() > 0.5 { BLACK } else { WHITE }
}

/// Stable descending sort by luminance, lightest first.
pub fn sort_by_lightness(palette: &mut [Rgb8]) {
    palette.sort_by(|a, b| b.luminance().total_cmp(&a.luminance()));
}
