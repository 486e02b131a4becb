// SPDX-License-Identifier: MPL-2.0
//! Thumbnail grid and the start of the shared-element transition.
//!
//! The grid lays its cells out itself, so the on-screen rectangle of any
//! thumbnail is known synchronously when it is selected. That rectangle is
//! handed to the [`TransitionCoordinator`] together with the item's media
//! before the application switches to the detail screen.
//!
//! Captions start as plain text. Once the grid is mounted, items carrying
//! rich text show its first rendered line instead.

use crate::config::{GRID_GAP, GRID_MIN_CELL_WIDTH, GRID_PADDING};
use crate::domain::geometry::{ScreenRect, ViewportSize};
use crate::domain::item::{Collection, Item, Ordinal};
use crate::gallery::rich_text::{MarkdownRenderer, RenderCache, RenderedText};
use crate::gallery::transition::{TransitionCoordinator, TransitionDescriptor};
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{palette, sizing, spacing, typography};
use crate::ui::{markdown, media, styles};
use iced::widget::scrollable::Viewport;
use iced::widget::{button, text, Column, Container, Row, Scrollable, Space, Text};
use iced::{alignment, ContentFit, Element, Length};
use std::time::Duration;

/// Column count and cell size for a given window width.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GridLayout {
    pub columns: usize,
    /// Width (and height) of a square thumbnail.
    pub thumb_size: f32,
}

impl GridLayout {
    /// Fits as many columns of at least [`GRID_MIN_CELL_WIDTH`] as the width
    /// allows, then stretches them to fill it.
    #[must_use]
    pub fn for_width(width: f32) -> Self {
        let available = (width - 2.0 * GRID_PADDING).max(GRID_MIN_CELL_WIDTH);
        let columns =
            (((available + GRID_GAP) / (GRID_MIN_CELL_WIDTH + GRID_GAP)).floor() as usize).max(1);
        let thumb_size = (available - GRID_GAP * (columns - 1) as f32) / columns as f32;
        Self {
            columns,
            thumb_size,
        }
    }

    /// Vertical distance between two rows.
    #[must_use]
    pub fn row_stride(&self) -> f32 {
        self.thumb_size + sizing::GRID_CAPTION + GRID_GAP
    }

    /// Window-space rectangle of the thumbnail at `position`, given the
    /// current scroll offset.
    #[must_use]
    pub fn thumb_rect(&self, position: usize, scroll_offset: f32) -> ScreenRect {
        let row = position / self.columns;
        let column = position % self.columns;
        ScreenRect::new(
            GRID_PADDING + column as f32 * (self.thumb_size + GRID_GAP),
            sizing::GRID_HEADER + GRID_PADDING + row as f32 * self.row_stride() - scroll_offset,
            self.thumb_size,
            self.thumb_size,
        )
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Message {
    /// The grid was shown for the first time.
    Mounted,
    Selected(Ordinal),
    Scrolled(f32),
    OpenWall,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    None,
    /// Show the detail screen on `ordinal`.
    OpenDetail { ordinal: Ordinal },
    ShowWall,
}

#[derive(Debug, Default)]
pub struct State {
    window: ViewportSize,
    scroll_offset: f32,
    /// Rendered captions, filled on mount.
    captions: Option<RenderCache>,
}

impl State {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_window(&mut self, window: ViewportSize) {
        self.window = window;
    }

    #[must_use]
    pub fn layout(&self) -> GridLayout {
        GridLayout::for_width(self.window.width)
    }

    #[must_use]
    pub fn scroll_offset(&self) -> f32 {
        self.scroll_offset
    }

    #[must_use]
    pub fn is_mounted(&self) -> bool {
        self.captions.is_some()
    }

    /// Rendered caption of `ordinal`, once mounted.
    #[must_use]
    pub fn caption(&self, ordinal: Ordinal) -> Option<&RenderedText> {
        self.captions
            .as_ref()?
            .peek(ordinal)
            .map(|rendered| &**rendered)
    }

    /// Rectangle of the thumbnail at `position`, or `None` before the grid
    /// has been laid out.
    #[must_use]
    pub fn capture_rect(&self, position: usize) -> Option<ScreenRect> {
        if !self.window.is_laid_out() {
            return None;
        }
        let rect = self.layout().thumb_rect(position, self.scroll_offset);
        (!rect.is_degenerate()).then_some(rect)
    }

    /// Handles a grid message. Selecting an item starts the transition on
    /// `transitions` before the detail screen is requested.
    pub fn handle(
        &mut self,
        message: Message,
        collection: &Collection,
        transitions: &mut TransitionCoordinator,
        now: Duration,
    ) -> Effect {
        match message {
            Message::Mounted => {
                if self.captions.is_none() {
                    self.captions = Some(render_captions(collection));
                }
                Effect::None
            }
            Message::OpenWall => Effect::ShowWall,
            Message::Scrolled(offset) => {
                self.scroll_offset = offset.max(0.0);
                Effect::None
            }
            Message::Selected(ordinal) => {
                let Some(position) = collection.position_of(ordinal) else {
                    tracing::debug!("Grid selection {} is not in the collection", ordinal);
                    return Effect::None;
                };
                let item = collection.at(position);
                let source_rect = self.capture_rect(position);
                if source_rect.is_none() {
                    tracing::debug!("Grid not laid out, opening {} without overlay", ordinal);
                }
                transitions.begin(
                    TransitionDescriptor {
                        media: item.media.clone(),
                        ordinal,
                        source_rect,
                    },
                    now,
                );
                Effect::OpenDetail { ordinal }
            }
        }
    }
}

fn render_captions(collection: &Collection) -> RenderCache {
    let mut captions = RenderCache::new(collection.len());
    for item in collection.iter() {
        if let Some(source) = item.rich_text.as_deref() {
            captions.get_or_render(item.ordinal, source, &MarkdownRenderer);
        }
    }
    tracing::debug!("Rendered {} grid captions", captions.len());
    captions
}

pub fn view<'a>(state: &'a State, collection: &'a Collection, i18n: &'a I18n) -> Element<'a, Message> {
    let layout = state.layout();

    let wall = button(Text::new(i18n.tr("grid-open-wall")).size(typography::BODY))
        .padding([spacing::XXS, spacing::SM])
        .style(styles::button::link)
        .on_press(Message::OpenWall);

    let header = Row::new()
        .align_y(alignment::Vertical::Center)
        .push(Text::new(i18n.tr("grid-title")).size(typography::TITLE_MD))
        .push(Space::new().width(Length::Fill))
        .push(wall);

    let title = Container::new(header)
        .width(Length::Fill)
        .height(Length::Fixed(sizing::GRID_HEADER))
        .padding([0.0, GRID_PADDING])
        .align_y(alignment::Vertical::Center);

    let items: Vec<&Item> = collection.iter().collect();
    let rows = items.chunks(layout.columns).map(|chunk| -> Element<'a, Message> {
        Row::with_children(
            chunk
                .iter()
                .map(|item| cell(*item, state.caption(item.ordinal), layout.thumb_size)),
        )
            .spacing(GRID_GAP)
            .into()
    });

    let grid = Column::with_children(rows)
        .spacing(GRID_GAP)
        .padding(GRID_PADDING);

    let scrollable = Scrollable::new(grid)
        .width(Length::Fill)
        .height(Length::Fill)
        .on_scroll(|viewport: Viewport| Message::Scrolled(viewport.absolute_offset().y));

    Container::new(Column::new().push(title).push(scrollable))
        .width(Length::Fill)
        .height(Length::Fill)
        .style(styles::container::surface)
        .into()
}

fn cell<'a>(item: &'a Item, rendered: Option<&'a RenderedText>, size: f32) -> Element<'a, Message> {
    let thumb = media::view(
        &item.media,
        ContentFit::Cover,
        Length::Fixed(size),
        Length::Fixed(size),
        item.ordinal.padded(),
    );

    let line = rendered
        .and_then(|rendered| markdown::first_line(rendered, typography::CAPTION, palette::GRAY_200))
        .unwrap_or_else(|| {
            Text::new(item.text.as_str())
                .size(typography::CAPTION)
                .wrapping(text::Wrapping::None)
                .color(palette::GRAY_200)
                .into()
        });

    let caption = Container::new(line)
    .width(Length::Fixed(size))
    .height(Length::Fixed(sizing::GRID_CAPTION))
    .padding([0.0, spacing::XXS])
    .align_y(alignment::Vertical::Center)
    .clip(true);

    button(Column::new().push(thumb).push(caption))
        .padding(0.0)
        .style(styles::button::thumbnail)
        .on_press(Message::Selected(item.ordinal))
        .into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::item::fixtures::{collection, item};

    #[test]
    fn narrow_window_has_one_column() {
        let layout = GridLayout::for_width(200.0);
        assert_eq!(layout.columns, 1);
        assert!(layout.thumb_size >= GRID_MIN_CELL_WIDTH);
    }

    #[test]
    fn columns_fill_the_width() {
        let layout = GridLayout::for_width(1000.0);
        assert_eq!(layout.columns, 5);
        let used = layout.columns as f32 * layout.thumb_size + (layout.columns - 1) as f32 * GRID_GAP;
        assert!((used - (1000.0 - 2.0 * GRID_PADDING)).abs() < 0.01);
    }

    #[test]
    fn thumb_rect_follows_rows_and_scroll() {
        let layout = GridLayout::for_width(1000.0);
        let first = layout.thumb_rect(0, 0.0);
        assert_eq!(first.left, GRID_PADDING);
        assert_eq!(first.top, sizing::GRID_HEADER + GRID_PADDING);

        let second_row = layout.thumb_rect(layout.columns, 0.0);
        assert_eq!(second_row.left, GRID_PADDING);
        assert!((second_row.top - first.top - layout.row_stride()).abs() < 0.01);

        let scrolled = layout.thumb_rect(0, 40.0);
        assert_eq!(scrolled.top, first.top - 40.0);
    }

    #[test]
    fn selection_begins_transition_with_captured_rect() {
        let items = collection(&[3, 7, 9]);
        let mut state = State::new();
        state.set_window(ViewportSize::new(1000.0, 800.0));
        let mut transitions = TransitionCoordinator::default();

        let effect = state.handle(
            Message::Selected(Ordinal::new(7)),
            &items,
            &mut transitions,
            Duration::ZERO,
        );

        assert_eq!(
            effect,
            Effect::OpenDetail {
                ordinal: Ordinal::new(7)
            }
        );
        let descriptor = transitions.descriptor().unwrap();
        assert_eq!(descriptor.ordinal, Ordinal::new(7));
        assert_eq!(descriptor.source_rect, state.capture_rect(1));
        assert!(descriptor.source_rect.is_some());
    }

    #[test]
    fn unlaid_grid_opens_without_rect() {
        let items = collection(&[1, 2]);
        let mut state = State::new();
        let mut transitions = TransitionCoordinator::default();

        state.handle(
            Message::Selected(Ordinal::new(2)),
            &items,
            &mut transitions,
            Duration::ZERO,
        );

        let descriptor = transitions.descriptor().unwrap();
        assert!(descriptor.source_rect.is_none());
        assert!(transitions
            .frame(ViewportSize::new(800.0, 600.0), Duration::ZERO)
            .is_none());
    }

    #[test]
    fn unknown_selection_is_ignored() {
        let items = collection(&[1]);
        let mut state = State::new();
        let mut transitions = TransitionCoordinator::default();

        let effect = state.handle(
            Message::Selected(Ordinal::new(5)),
            &items,
            &mut transitions,
            Duration::ZERO,
        );
        assert_eq!(effect, Effect::None);
        assert!(!transitions.is_animating());
    }

    #[test]
    fn captions_render_on_mount() {
        let mut rich = item(2);
        rich.rich_text = Some("A **bold** caption".to_string());
        let items = Collection::new(vec![item(1), rich]).unwrap();

        let mut state = State::new();
        let mut transitions = TransitionCoordinator::default();
        assert!(state.caption(Ordinal::new(2)).is_none());

        state.handle(Message::Mounted, &items, &mut transitions, Duration::ZERO);

        assert!(state.is_mounted());
        assert!(state.caption(Ordinal::new(1)).is_none());
        let caption = state.caption(Ordinal::new(2)).expect("rich caption rendered");
        assert_eq!(caption.blocks[0].plain_text(), "A bold caption");
    }

    #[test]
    fn wall_button_requests_the_wall() {
        let items = collection(&[1]);
        let mut state = State::new();
        let mut transitions = TransitionCoordinator::default();
        let effect = state.handle(Message::OpenWall, &items, &mut transitions, Duration::ZERO);
        assert_eq!(effect, Effect::ShowWall);
    }

    #[test]
    fn scroll_offset_is_never_negative() {
        let items = collection(&[1]);
        let mut state = State::new();
        let mut transitions = TransitionCoordinator::default();
        state.handle(Message::Scrolled(-5.0), &items, &mut transitions, Duration::ZERO);
        assert_eq!(state.scroll_offset(), 0.0);
    }
}
