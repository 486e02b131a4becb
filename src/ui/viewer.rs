// SPDX-License-Identifier: MPL-2.0
//! Detail view of the current item.
//!
//! The media fills the window. The two halves of the media viewport are the
//! previous/next controls; they carry no widgets of their own and only show
//! their affordance, since every pointer and touch event reaches the gallery
//! through the input disambiguator. The caption panel at the bottom is
//! opaque to the pointer so clicks on it never navigate.

use crate::domain::item::Item;
use crate::domain::location::{LineBullet, LocationBadge};
use crate::gallery::input::Focus;
use crate::gallery::{Direction, Gallery, Message};
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{palette, sizing, spacing, typography};
use crate::ui::markdown::{self, Scale};
use crate::ui::{media, styles};
use iced::widget::text::LineHeight;
use iced::widget::{button, opaque, Column, Container, Row, Space, Stack, Text};
use iced::{alignment, Color, ContentFit, Element, Length, Pixels};

pub fn view<'a>(gallery: &'a Gallery, i18n: &'a I18n) -> Element<'a, Message> {
    let item = gallery.current_item();

    let media_layer = Container::new(media::view(
        &item.media,
        ContentFit::Contain,
        Length::Fill,
        Length::Fill,
        item.ordinal.padded(),
    ))
    .width(Length::Fill)
    .height(Length::Fill)
    .align_x(alignment::Horizontal::Center)
    .align_y(alignment::Vertical::Center)
    .style(styles::container::surface);

    let mut stack = Stack::new().push(media_layer);

    // While interception is suspended the platform menu owns the pointer.
    if gallery.input().is_intercepting() {
        stack = stack.push(
            Row::new()
                .push(nav_half(gallery, Direction::Previous, i18n))
                .push(nav_half(gallery, Direction::Next, i18n))
                .width(Length::Fill)
                .height(Length::Fill),
        );
    }

    stack = stack.push(
        Container::new(opaque(caption_panel(gallery, item, i18n)))
            .width(Length::Fill)
            .height(Length::Fill)
            .align_y(alignment::Vertical::Bottom),
    );

    stack.width(Length::Fill).height(Length::Fill).into()
}

fn nav_half<'a>(gallery: &'a Gallery, side: Direction, i18n: &'a I18n) -> Element<'a, Message> {
    let input = gallery.input();
    let highlighted = input.is_highlighted(side);
    let focused = input.focus() == Focus::Control(side);

    let (glyph, label_key, align) = match side {
        Direction::Previous => ("‹", "nav-previous-label", alignment::Horizontal::Left),
        Direction::Next => ("›", "nav-next-label", alignment::Horizontal::Right),
    };

    let mut content = Column::new()
        .spacing(spacing::XXS)
        .align_x(alignment::Horizontal::Center);
    if highlighted {
        content = content.push(Text::new(glyph).size(sizing::NAV_GLYPH));
    }
    if focused {
        content = content.push(Text::new(i18n.tr(label_key)).size(typography::CAPTION));
    }

    Container::new(content)
        .width(Length::FillPortion(1))
        .height(Length::Fill)
        .padding(spacing::MD)
        .align_x(align)
        .align_y(alignment::Vertical::Center)
        .style(styles::overlay::nav_half(highlighted))
        .into()
}

fn caption_panel<'a>(gallery: &'a Gallery, item: &'a Item, i18n: &'a I18n) -> Element<'a, Message> {
    let back = button(Text::new(i18n.tr("back-to-all")).size(typography::BODY))
        .padding([spacing::XXS, 0.0])
        .style(styles::button::link)
        .on_press(Message::BackToGrid);

    let share = button(Text::new(i18n.tr("share-button-label")).size(typography::BODY))
        .padding([spacing::XXS, spacing::SM])
        .style(styles::button::primary)
        .on_press(Message::ShareRequested);

    let header = Row::new()
        .spacing(spacing::MD)
        .align_y(alignment::Vertical::Center)
        .push(back)
        .push(Text::new(item.ordinal.padded()).size(typography::TITLE_MD))
        .push(Space::new().width(Length::Fill))
        .push(share);

    let mut panel = Column::new().spacing(spacing::XS).push(header);

    if let Some(badge) = item.location.as_ref().and_then(|tag| tag.resolve()) {
        panel = panel.push(location_badge(badge));
    }

    if let Some(disclosure) = gallery.disclosure() {
        if disclosure.is_open() {
            let body = match gallery.current_rich_text() {
                Some(rendered) if !rendered.is_empty() => markdown::body(rendered, Scale::PANEL),
                _ => plain_body(&item.text),
            };
            let mut body = Container::new(body).width(Length::Fill).clip(true);
            if let Some(lines) = disclosure.preview_lines() {
                body = body.max_height(f32::from(lines) * sizing::DISCLOSURE_LINE);
            }
            panel = panel.push(body);
        }

        let toggle_key = if disclosure.is_open() {
            "disclosure-collapse"
        } else {
            "disclosure-toggle"
        };
        panel = panel.push(
            button(Text::new(i18n.tr(toggle_key)).size(typography::CAPTION))
                .padding(0.0)
                .style(styles::button::link)
                .on_press(Message::ToggleDisclosure),
        );
    }

    Container::new(panel)
        .width(Length::Fill)
        .padding([spacing::SM, spacing::LG])
        .style(styles::container::caption)
        .into()
}

fn location_badge<'a>(badge: LocationBadge) -> Element<'a, Message> {
    let bullets = badge.lines.into_iter().map(line_bullet);
    Row::new()
        .spacing(spacing::XXS)
        .align_y(alignment::Vertical::Center)
        .push(
            Text::new(badge.name)
                .size(typography::CAPTION)
                .color(palette::GRAY_200),
        )
        .extend(bullets)
        .into()
}

fn line_bullet<'a>(bullet: LineBullet) -> Element<'a, Message> {
    let glyph_color = if bullet.dark_glyph {
        palette::BLACK
    } else {
        palette::WHITE
    };
    Container::new(
        Text::new(bullet.line)
            .size(typography::CAPTION)
            .color(glyph_color),
    )
    .width(Length::Fixed(sizing::ICON_MD))
    .height(Length::Fixed(sizing::ICON_MD))
    .align_x(alignment::Horizontal::Center)
    .align_y(alignment::Vertical::Center)
    .style(styles::container::bullet(rgb_hex(bullet.background)))
    .into()
}

fn rgb_hex(value: u32) -> Color {
    let [_, r, g, b] = value.to_be_bytes();
    Color::from_rgb8(r, g, b)
}

fn plain_body(source: &str) -> Element<'_, Message> {
    Text::new(source)
        .size(typography::BODY_LG)
        .line_height(LineHeight::Absolute(Pixels(sizing::DISCLOSURE_LINE)))
        .into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn signage_colour_is_decoded() {
        assert_eq!(rgb_hex(0xEE352E), Color::from_rgb8(0xEE, 0x35, 0x2E));
    }
}
