// SPDX-License-Identifier: MPL-2.0
//! SVG icons.
//!
//! Icons are embedded at compile time and their handles are cached using
//! `OnceLock`, so every frame reuses the same parsed document. They are drawn
//! in `currentColor` and tinted through the widget style.

use crate::ui::design_tokens::sizing;
use iced::widget::svg::{Handle, Svg};
use iced::Length;
use std::sync::OnceLock;

const COPY_SVG: &str = include_str!("../../assets/icons/copy.svg");

/// Two overlapping rounded sheets.
pub fn copy() -> Svg<'static> {
    static HANDLE: OnceLock<Handle> = OnceLock::new();
    let handle = HANDLE.get_or_init(|| Handle::from_memory(COPY_SVG.as_bytes()));

    Svg::new(handle.clone())
        .width(Length::Fixed(sizing::ICON))
        .height(Length::Fixed(sizing::ICON))
}
