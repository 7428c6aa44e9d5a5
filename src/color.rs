//! Hex color parsing and light/dark tint generation.
//!
//! Blending is a straight linear interpolation of each sRGB channel toward
//! white (lighten) or black (darken). No gamma handling is applied.

use std::fmt;
use std::str::FromStr;

use serde::{Serialize, Serializer};

use crate::error::ScaffoldError;

/// Number of hex characters in a color code.
pub const HEX_LEN: usize = 6;

/// Message shown when a prompt receives a malformed color.
pub const HEX_HINT: &str = "Enter a 6 character hex value without #";

/// Returns true if `value` is exactly six hex digits with no prefix.
pub fn is_valid_hex(value: &str) -> bool {
    value.len() == HEX_LEN && value.bytes().all(|b| b.is_ascii_hexdigit())
}

/// An 8-bit RGB color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const WHITE: Self = Self::new(255, 255, 255);
    pub const BLACK: Self = Self::new(0, 0, 0);

    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Parse a six digit hex code (case-insensitive, no leading `#`).
    pub fn from_hex(hex: &str) -> Result<Self, ScaffoldError> {
        let trimmed = hex.trim();
        if !is_valid_hex(trimmed) {
            return Err(ScaffoldError::InvalidColor {
                value: hex.to_string(),
            });
        }

        let channel = |range: std::ops::Range<usize>| {
            u8::from_str_radix(&trimmed[range], 16).map_err(|_| ScaffoldError::InvalidColor {
                value: hex.to_string(),
            })
        };

        Ok(Self {
            r: channel(0..2)?,
            g: channel(2..4)?,
            b: channel(4..6)?,
        })
    }

    /// Lowercase six digit hex code without `#`.
    pub fn to_hex(self) -> String {
        format!("{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }

    /// CSS form, `#rrggbb`.
    pub fn to_css(self) -> String {
        format!("#{}", self.to_hex())
    }

    /// Move every channel toward 255 by `factor` (clamped to [0, 1]).
    #[must_use]
    pub fn lighten(self, factor: f64) -> Self {
        let amount = clamp_factor(factor);
        self.map(|c| c + (255.0 - c) * amount)
    }

    /// Move every channel toward 0 by `factor` (clamped to [0, 1]).
    #[must_use]
    pub fn darken(self, factor: f64) -> Self {
        let amount = clamp_factor(factor);
        self.map(|c| c * (1.0 - amount))
    }

    fn map(self, f: impl Fn(f64) -> f64) -> Self {
        Self {
            r: to_channel(f(f64::from(self.r))),
            g: to_channel(f(f64::from(self.g))),
            b: to_channel(f(f64::from(self.b))),
        }
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

impl FromStr for Rgb {
    type Err = ScaffoldError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_hex(s)
    }
}

impl Serialize for Rgb {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_css())
    }
}

/// Lighten a hex color, returning the lowercase hex result.
///
/// ```
/// assert_eq!(nxs::color::lighten("336699", 0.2).unwrap(), "5c85ad");
/// ```
pub fn lighten(hex: &str, factor: f64) -> Result<String, ScaffoldError> {
    Ok(Rgb::from_hex(hex)?.lighten(factor).to_hex())
}

/// Darken a hex color, returning the lowercase hex result.
///
/// ```
/// assert_eq!(nxs::color::darken("336699", 0.2).unwrap(), "29527a");
/// ```
pub fn darken(hex: &str, factor: f64) -> Result<String, ScaffoldError> {
    Ok(Rgb::from_hex(hex)?.darken(factor).to_hex())
}

// NaN compares false both ways; treat it as "no change".
fn clamp_factor(factor: f64) -> f64 {
    if factor.is_nan() {
        0.0
    } else {
        factor.clamp(0.0, 1.0)
    }
}

// Inputs are never negative here, so round() matches half-up rounding.
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn to_channel(value: f64) -> u8 {
    value.round().clamp(0.0, 255.0) as u8
}
