// SPDX-License-Identifier: MPL-2.0
//! `pixel_pickr` shows the color reported by a system eyedropper, built with
//! the Iced GUI framework.
//!
//! The picker listens to the `color-update` event channel, switches its card
//! between a light and a dark variant from the perceived brightness of each
//! color, and copies the hex code to the clipboard with a short confirmation.
//!
//! # Architecture
//!
//! - [`domain`] - Hex colors and the brightness classifier (no external deps)
//! - [`application`] - Ports for the clipboard and the event channel
//! - [`infrastructure`] - `arboard` clipboard, in-process bus, stdin feed
//! - [`ui`] - The picker component, design tokens and styles
//! - [`app`] - Iced application root, configuration and paths

pub mod app;
pub mod application;
pub mod domain;
pub mod error;
pub mod i18n;
pub mod infrastructure;
#[doc(hidden)]
pub mod test_utils;
pub mod ui;

pub use app::config;
