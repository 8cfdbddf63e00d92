// SPDX-License-Identifier: MPL-2.0
//! Hex color parsing.

use std::fmt;
use std::str::FromStr;

/// Color shown before the first detected color arrives.
pub const DEFAULT_HEX: &str = "#FFFFFF";

/// Number of characters in a `#RRGGBB` string.
const HEX_LEN: usize = 7;

// =============================================================================
// ColorError
// =============================================================================

/// Reasons a payload is not a `#RRGGBB` color.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ColorError {
    /// The payload does not start with `#`.
    MissingHash,

    /// The payload is not exactly seven characters long.
    InvalidLength(usize),

    /// A character after the `#` is not a hexadecimal digit.
    InvalidDigit {
        /// Character index in the payload.
        position: usize,
        /// The offending character.
        found: char,
    },
}

impl fmt::Display for ColorError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ColorError::MissingHash => write!(f, "color must start with '#'"),
            ColorError::InvalidLength(len) => {
                write!(f, "color must be {HEX_LEN} characters long, got {len}")
            }
            ColorError::InvalidDigit { position, found } => {
                write!(f, "invalid hex digit {found:?} at position {position}")
            }
        }
    }
}

impl std::error::Error for ColorError {}

// =============================================================================
// Rgb
// =============================================================================

/// An 8-bit per channel color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    #[must_use]
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Formats the color the way the native capture emits it (uppercase `#RRGGBB`).
    #[must_use]
    pub fn to_hex(self) -> String {
        format!("#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }

    /// Returns true when the color is bright enough to need a dark card.
    #[must_use]
    pub fn is_light(self) -> bool {
        super::brightness::is_light_rgb(self)
    }
}

// =============================================================================
// HexColor
// =============================================================================

/// A validated `#RRGGBB` color.
///
/// The original text is kept as received (digits may be upper or lower case),
/// so the displayed and copied value is exactly what the producer sent.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct HexColor(String);

impl HexColor {
    /// Validates `input` as `#` followed by six hexadecimal digits.
    ///
    /// # Errors
    ///
    /// Returns a [`ColorError`] describing the first problem found.
    pub fn parse(input: &str) -> Result<Self, ColorError> {
        let Some(digits) = input.strip_prefix('#') else {
            return Err(ColorError::MissingHash);
        };

        let len = input.chars().count();
        if len != HEX_LEN {
            return Err(ColorError::InvalidLength(len));
        }

        if let Some((index, found)) = digits
            .chars()
            .enumerate()
            .find(|(_, c)| !c.is_ascii_hexdigit())
        {
            return Err(ColorError::InvalidDigit {
                position: index + 1,
                found,
            });
        }

        Ok(Self(input.to_string()))
    }

    /// Returns the color exactly as received.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Returns the channel values.
    #[must_use]
    pub fn rgb(&self) -> Rgb {
        // Validation guarantees ASCII hex digits at offsets 1..7.
        let channel = |range: std::ops::Range<usize>| {
            u8::from_str_radix(&self.0[range], 16).unwrap_or_default()
        };
        Rgb::new(channel(1..3), channel(3..5), channel(5..7))
    }
}

impl Default for HexColor {
    fn default() -> Self {
        Self(DEFAULT_HEX.to_string())
    }
}

impl fmt::Display for HexColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for HexColor {
    type Err = ColorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl From<Rgb> for HexColor {
    fn from(rgb: Rgb) -> Self {
        Self(rgb.to_hex())
    }
}
