// SPDX-License-Identifier: MPL-2.0
//! Color value objects and legibility rules.
//!
//! Colors reach the application as `#RRGGBB` strings emitted by the native
//! eyedropper. [`HexColor`] is the validated form kept as the current color,
//! and [`classify`] decides whether a color is bright enough to require the
//! dark card variant.

mod brightness;
mod hex;

pub use brightness::{classify, perceived_brightness, LIGHT_THRESHOLD};
pub use hex::{ColorError, HexColor, Rgb, DEFAULT_HEX};
