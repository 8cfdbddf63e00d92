// SPDX-License-Identifier: MPL-2.0
//! Perceived brightness classifier.
//!
//! Uses the ITU-R BT.601 luma weights: `Y = (299·R + 587·G + 114·B) / 1000`.
//! A color counts as light when `Y > 200` on the 0–255 scale, which only flips
//! the card for clearly bright colors and keeps mid-grays on the white card.

use super::hex::Rgb;

/// Brightness above which a color is considered light (0–255 scale).
pub const LIGHT_THRESHOLD: u32 = 200;

const RED_WEIGHT: u32 = 299;
const GREEN_WEIGHT: u32 = 587;
const BLUE_WEIGHT: u32 = 114;
const WEIGHT_SCALE: u32 = 1000;

/// Returns true when the `#RRGGBB` string describes a light color.
///
/// Never panics. Channels that are missing or not valid hexadecimal count
/// as 0, so malformed input still yields a deterministic answer.
#[must_use]
pub fn classify(hex: &str) -> bool {
    let rgb = Rgb::new(channel(hex, 1), channel(hex, 3), channel(hex, 5));
    is_light_rgb(rgb)
}

/// Returns the perceived brightness `Y` of a color, in `0.0..=255.0`.
#[must_use]
pub fn perceived_brightness(rgb: Rgb) -> f32 {
    weighted_sum(rgb) as f32 / WEIGHT_SCALE as f32
}

pub(super) fn is_light_rgb(rgb: Rgb) -> bool {
    // Compare in thousandths to stay in integer arithmetic.
    weighted_sum(rgb) > LIGHT_THRESHOLD * WEIGHT_SCALE
}

fn weighted_sum(rgb: Rgb) -> u32 {
    RED_WEIGHT * u32::from(rgb.r) + GREEN_WEIGHT * u32::from(rgb.g) + BLUE_WEIGHT * u32::from(rgb.b)
}

/// Parses the two-digit channel starting at byte `offset`, or 0.
fn channel(hex: &str, offset: usize) -> u8 {
    hex.get(offset..offset + 2)
        .and_then(|pair| u8::from_str_radix(pair, 16).ok())
        .unwrap_or(0)
}
