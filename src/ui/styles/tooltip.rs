// SPDX-License-Identifier: MPL-2.0
//! Tooltip styles.
//!
//! Tooltips invert the card they belong to: a dark card gets a white tooltip
//! and a white card a dark one, whatever the window theme.

use crate::ui::design_tokens::{radius, shadow, spacing, typography};
use crate::ui::theming::CardScheme;
use iced::widget::{container, tooltip, Container, Text};
use iced::{Background, Border, Element, Theme};

/// Tooltip bubble for a card drawn with `scheme`.
pub fn tooltip_container(scheme: CardScheme) -> impl Fn(&Theme) -> container::Style {
    move |_theme: &Theme| container::Style {
        background: Some(Background::Color(scheme.text)),
        text_color: Some(scheme.background),
        border: Border {
            radius: radius::MD.into(),
            ..Default::default()
        },
        shadow: shadow::MD,
        ..Default::default()
    }
}

/// Wraps `content` in a tooltip showing `tip`, tinted for `scheme`.
pub fn styled<'a, Message: 'a>(
    content: impl Into<Element<'a, Message>>,
    tip: impl Into<String>,
    position: tooltip::Position,
    scheme: CardScheme,
) -> tooltip::Tooltip<'a, Message, Theme, iced::Renderer> {
    let tip_container = Container::new(Text::new(tip.into()).size(typography::CAPTION))
        .padding(spacing::XS)
        .style(tooltip_container(scheme));

    tooltip(content, tip_container, position).gap(spacing::XS)
}
