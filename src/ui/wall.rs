// SPDX-License-Identifier: MPL-2.0
//! Wall of every review in catalog order, rendered as one document.

use crate::domain::item::Collection;
use crate::gallery::rich_text::{MarkdownRenderer, RenderedText, RichTextRenderer};
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::markdown::{self, Scale};
use crate::ui::styles;
use iced::widget::text::LineHeight;
use iced::widget::{button, Column, Container, Row, Scrollable, Text};
use iced::{alignment, Element, Length, Pixels};

#[derive(Debug, Clone, PartialEq)]
pub enum Message {
    /// The wall was shown for the first time.
    Mounted,
    Back,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    None,
    ShowGrid,
}

#[derive(Debug, Default)]
pub struct State {
    rendered: Option<RenderedText>,
}

impl State {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn is_mounted(&self) -> bool {
        self.rendered.is_some()
    }

    #[must_use]
    pub fn rendered(&self) -> Option<&RenderedText> {
        self.rendered.as_ref()
    }

    pub fn handle(&mut self, message: Message, collection: &Collection) -> Effect {
        match message {
            Message::Mounted => {
                if self.rendered.is_none() {
                    self.rendered = Some(render(collection, &MarkdownRenderer));
                }
                Effect::None
            }
            Message::Back => Effect::ShowGrid,
        }
    }
}

/// Joins every review into one source, one paragraph per item. Rich text
/// wins over the plain fallback; blank reviews are skipped.
#[must_use]
pub fn compose(collection: &Collection) -> String {
    collection
        .iter()
        .map(|item| item.rich_text.as_deref().unwrap_or(&item.text).trim())
        .filter(|source| !source.is_empty())
        .collect::<Vec<_>>()
        .join("\n\n")
}

fn render(collection: &Collection, renderer: &dyn RichTextRenderer) -> RenderedText {
    let rendered = renderer.render(&compose(collection));
    tracing::debug!("Rendered wall with {} blocks", rendered.blocks.len());
    rendered
}

pub fn view<'a>(state: &'a State, collection: &'a Collection, i18n: &'a I18n) -> Element<'a, Message> {
    let back = button(Text::new(i18n.tr("back-to-all")).size(typography::BODY))
        .padding([spacing::XXS, 0.0])
        .style(styles::button::link)
        .on_press(Message::Back);

    let header = Container::new(
        Row::new()
            .spacing(spacing::MD)
            .align_y(alignment::Vertical::Center)
            .push(back)
            .push(Text::new(i18n.tr("wall-title")).size(typography::TITLE_MD)),
    )
    .width(Length::Fill)
    .height(Length::Fixed(sizing::GRID_HEADER))
    .padding([0.0, spacing::LG])
    .align_y(alignment::Vertical::Center);

    let body: Element<'a, Message> = match state.rendered() {
        Some(rendered) => markdown::body(rendered, Scale::WALL),
        None => Column::with_children(
            collection
                .iter()
                .filter(|item| !item.text.trim().is_empty())
                .map(|item| {
                    Text::new(item.text.as_str())
                        .size(typography::DISPLAY)
                        .line_height(LineHeight::Absolute(Pixels(sizing::WALL_LINE)))
                        .into()
                }),
        )
        .spacing(spacing::XS)
        .into(),
    };

    let article = Container::new(body)
        .max_width(sizing::WALL_MAX_WIDTH)
        .padding([spacing::XS, spacing::LG]);

    let scrollable = Scrollable::new(article)
        .width(Length::Fill)
        .height(Length::Fill);

    Container::new(Column::new().push(header).push(scrollable))
        .width(Length::Fill)
        .height(Length::Fill)
        .style(styles::container::surface)
        .into()
}
