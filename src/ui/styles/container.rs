// SPDX-License-Identifier: MPL-2.0
//! Container styles.

use crate::ui::design_tokens::{palette, radius, shadow};
use crate::ui::theming::CardScheme;
use iced::gradient::Linear;
use iced::widget::container;
use iced::{Background, Border, Color, Radians, Theme};
use std::f32::consts::PI;

/// Window backdrop: slate to near-black gradient toward the bottom right.
pub fn backdrop(_theme: &Theme) -> container::Style {
    // Iced measures gradient angles clockwise from "up"; this points to the bottom right.
    let gradient = Linear::new(Radians(3.0 * PI / 4.0))
        .add_stop(0.0, palette::SLATE_600)
        .add_stop(0.5, palette::NEUTRAL_900)
        .add_stop(1.0, palette::SLATE_950);

    container::Style {
        background: Some(Background::Gradient(gradient.into())),
        shadow: shadow::LG,
        ..Default::default()
    }
}

/// Picker card surface.
pub fn card(scheme: CardScheme) -> impl Fn(&Theme) -> container::Style {
    move |_theme: &Theme| container::Style {
        background: Some(Background::Color(scheme.background)),
        text_color: Some(scheme.text),
        border: Border {
            radius: radius::LG.into(),
            ..Default::default()
        },
        shadow: shadow::LG,
        ..Default::default()
    }
}

/// Square filled with the detected color.
pub fn swatch(color: Color) -> impl Fn(&Theme) -> container::Style {
    move |_theme: &Theme| container::Style {
        background: Some(Background::Color(color)),
        border: Border {
            radius: radius::MD.into(),
            ..Default::default()
        },
        shadow: shadow::MD,
        ..Default::default()
    }
}

/// Small pill used for the copy confirmation and copy errors.
pub fn badge(background: Color, text: Color) -> impl Fn(&Theme) -> container::Style {
    move |_theme: &Theme| container::Style {
        background: Some(Background::Color(background)),
        text_color: Some(text),
        border: Border {
            radius: radius::MD.into(),
            ..Default::default()
        },
        shadow: shadow::MD,
        ..Default::default()
    }
}
