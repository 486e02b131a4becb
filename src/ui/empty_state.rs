// SPDX-License-Identifier: MPL-2.0
//! Fallback screen shown when there is nothing to review.
//!
//! Covers both an empty collection and a catalog that failed to load; in
//! the second case the error text is shown under the title.

use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{palette, spacing, typography};
use crate::ui::styles;
use iced::widget::{Column, Container, Text};
use iced::{alignment, Element, Length};

pub fn view<'a, Message: 'a>(i18n: &I18n, error: Option<&'a str>) -> Element<'a, Message> {
    let title_key = if error.is_some() {
        "catalog-error-title"
    } else {
        "empty-collection"
    };

    let mut content = Column::new()
        .spacing(spacing::SM)
        .align_x(alignment::Horizontal::Center)
        .push(
            Text::new(i18n.tr(title_key))
                .size(typography::TITLE_MD)
                .color(palette::GRAY_200),
        );

    if let Some(error) = error {
        content = content.push(
            Text::new(error)
                .size(typography::CAPTION)
                .color(palette::GRAY_400),
        );
    }

    Container::new(content)
        .width(Length::Fill)
        .height(Length::Fill)
        .padding(spacing::LG)
        .align_x(alignment::Horizontal::Center)
        .align_y(alignment::Vertical::Center)
        .style(styles::container::surface)
        .into()
}
