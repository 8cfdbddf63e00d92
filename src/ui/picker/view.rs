// SPDX-License-Identifier: MPL-2.0
//! Picker layout: app name on the left, color card on the right.

use super::component::Message;
use crate::application::port::{BusError, ClipboardError};
use crate::domain::color::HexColor;
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{palette, sizing, spacing, typography};
use crate::ui::icons;
use crate::ui::styles;
use crate::ui::theming::CardScheme;
use iced::font::Weight;
use iced::widget::{button, tooltip, Column, Container, Row, Text};
use iced::{alignment, Color, Element, Font, Length};

const BOLD: Font = Font {
    weight: Weight::Bold,
    ..Font::DEFAULT
};

pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub color: &'a HexColor,
    pub is_light: bool,
    pub copied: bool,
    pub copy_error: Option<&'a ClipboardError>,
    pub rejected: Option<&'a str>,
    pub feed_error: Option<&'a BusError>,
}

pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let brand = Container::new(
        Text::new(ctx.i18n.tr("window-title"))
            .size(typography::TITLE)
            .font(BOLD)
            .color(palette::GRAY_400),
    )
    .width(Length::Fill)
    .height(Length::Fill)
    .align_x(alignment::Horizontal::Center)
    .align_y(alignment::Vertical::Center);

    let content = Row::new()
        .spacing(spacing::LG)
        .push(brand)
        .push(card(&ctx));

    Container::new(content)
        .width(Length::Fill)
        .height(Length::Fill)
        .padding(spacing::LG)
        .style(styles::container::backdrop)
        .into()
}

fn card<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let scheme = CardScheme::for_color(ctx.is_light);
    let fill = swatch_color(ctx.color);

    // On the dark card the color itself may be unreadable.
    let hex_color = if ctx.is_light { palette::WHITE } else { fill };

    let color_line = Row::new()
        .spacing(spacing::XS)
        .align_y(alignment::Vertical::Center)
        .push(
            Text::new(ctx.i18n.tr("detected-color-label"))
                .size(typography::BODY)
                .color(scheme.text),
        )
        .push(
            Text::new(ctx.color.as_str())
                .size(typography::BODY)
                .font(BOLD)
                .color(hex_color),
        )
        .push(copy_button(ctx.i18n, scheme));

    let swatch = Container::new(Column::new())
        .width(Length::Fixed(sizing::SWATCH))
        .height(Length::Fixed(sizing::SWATCH))
        .style(styles::container::swatch(fill));

    let mut body = Column::new()
        .spacing(spacing::MD)
        .align_x(alignment::Horizontal::Center)
        .push(badge_slot(ctx, scheme))
        .push(color_line)
        .push(swatch);

    if let Some(payload) = ctx.rejected {
        body = body.push(
            Text::new(
                ctx.i18n
                    .tr_with_args("payload-rejected", &[("payload", payload)]),
            )
            .size(typography::CAPTION)
            .color(scheme.warning),
        );
    }

    if ctx.feed_error.is_some() {
        body = body.push(
            Text::new(ctx.i18n.tr("subscription-failed"))
                .size(typography::CAPTION)
                .color(scheme.warning),
        );
    }

    Container::new(body)
        .width(Length::Fill)
        .height(Length::Fill)
        .padding(spacing::LG)
        .align_x(alignment::Horizontal::Center)
        .align_y(alignment::Vertical::Center)
        .style(styles::container::card(scheme))
        .into()
}

fn copy_button<'a>(i18n: &'a I18n, scheme: CardScheme) -> Element<'a, Message> {
    let icon = icons::copy().style(styles::button::icon_glyph(scheme));

    let copy = button(icon)
        .padding(spacing::XXS)
        .style(styles::button::icon(scheme))
        .on_press(Message::CopyRequested);

    styles::tooltip::styled(
        copy,
        i18n.tr("copy-button-tooltip"),
        tooltip::Position::Bottom,
        scheme,
    )
    .into()
}

/// Fixed-height row above the color line, so showing a badge never shifts
/// the rest of the card.
fn badge_slot<'a>(ctx: &ViewContext<'a>, scheme: CardScheme) -> Element<'a, Message> {
    let badge = if let Some(error) = ctx.copy_error {
        Some((ctx.i18n.tr(error.i18n_key()), palette::ERROR_500))
    } else if ctx.copied {
        Some((ctx.i18n.tr("color-copied"), scheme.badge))
    } else {
        None
    };

    let content: Element<'a, Message> = match badge {
        Some((label, background)) => Container::new(Text::new(label).size(typography::CAPTION))
            .padding([spacing::XXS, spacing::XS])
            .style(styles::container::badge(background, scheme.badge_text))
            .into(),
        None => Column::new().into(),
    };

    Container::new(content)
        .height(Length::Fixed(sizing::BADGE_SLOT))
        .align_y(alignment::Vertical::Bottom)
        .into()
}

fn swatch_color(color: &HexColor) -> Color {
    let rgb = color.rgb();
    Color::from_rgb8(rgb.r, rgb.g, rgb.b)
}
