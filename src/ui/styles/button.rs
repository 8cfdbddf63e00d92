// SPDX-License-Identifier: MPL-2.0
//! Centralized button styles.

use crate::ui::theming::CardScheme;
use iced::widget::{button, svg};
use iced::{Border, Theme};

/// Borderless icon button laid directly on the card.
pub fn icon(scheme: CardScheme) -> impl Fn(&Theme, button::Status) -> button::Style {
    move |_theme: &Theme, status: button::Status| {
        let text_color = match status {
            button::Status::Hovered | button::Status::Pressed => scheme.icon_hover,
            _ => scheme.icon,
        };

        button::Style {
            background: None,
            text_color,
            border: Border::default(),
            ..Default::default()
        }
    }
}

/// Tint of the SVG glyph inside an [`icon`] button.
pub fn icon_glyph(scheme: CardScheme) -> impl Fn(&Theme, svg::Status) -> svg::Style {
    move |_theme: &Theme, status: svg::Status| {
        let color = match status {
            svg::Status::Hovered => scheme.icon_hover,
            svg::Status::Idle => scheme.icon,
        };
        svg::Style { color: Some(color) }
    }
}
