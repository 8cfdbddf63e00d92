// SPDX-License-Identifier: MPL-2.0
//! User interface components and state management.
//!
//! This module follows the Elm-style "state down, messages up" pattern.
//!
//! - [`picker`] - The color picker component
//! - [`styles`] - Centralized styling (buttons, containers, tooltips)
//! - [`design_tokens`] - Design system constants (colors, spacing, sizing)
//! - [`theming`] - Light/Dark/System theme mode and the card color schemes
//! - [`icons`] - Embedded SVG icons

pub mod design_tokens;
pub mod icons;
pub mod picker;
pub mod styles;
pub mod theming;
