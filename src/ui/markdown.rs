// SPDX-License-Identifier: MPL-2.0
//! Widgets for rendered review text.
//!
//! The same blocks are drawn at three scales: the caption panel, the wall
//! and the single-line grid caption.

use crate::gallery::rich_text::{Block, BlockKind, RenderedText, Span};
use crate::ui::design_tokens::{palette, sizing, spacing, typography};
use iced::font::{self, Font};
use iced::widget::text::{self, LineHeight};
use iced::widget::{rich_text, span, Column, Container};
use iced::{Color, Element, Pixels};

/// Text sizes for one surface.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Scale {
    pub body: f32,
    pub heading: f32,
    pub code: f32,
    pub line: f32,
}

impl Scale {
    /// Caption panel of the detail view.
    pub const PANEL: Scale = Scale {
        body: typography::BODY_LG,
        heading: typography::TITLE_MD,
        code: typography::BODY,
        line: sizing::DISCLOSURE_LINE,
    };

    /// Full-page wall.
    pub const WALL: Scale = Scale {
        body: typography::DISPLAY,
        heading: typography::DISPLAY,
        code: typography::TITLE_MD,
        line: sizing::WALL_LINE,
    };
}

/// Every block of `rendered`, stacked.
pub fn body<'a, Message: 'a>(rendered: &'a RenderedText, scale: Scale) -> Element<'a, Message> {
    Column::with_children(rendered.blocks.iter().map(|block| paragraph(block, scale)))
        .spacing(spacing::XS)
        .into()
}

/// First block of `rendered` on one unwrapped line, or `None` when there is
/// nothing to show.
pub fn first_line<'a, Message: 'a>(
    rendered: &'a RenderedText,
    size: f32,
    color: Color,
) -> Option<Element<'a, Message>> {
    let block = rendered.blocks.first()?;
    let spans: Vec<text::Span<'a, (), Font>> = block
        .spans
        .iter()
        .map(|inline| styled_span(inline, Font::DEFAULT))
        .collect();
    Some(
        rich_text(spans)
            .size(size)
            .color(color)
            .wrapping(text::Wrapping::None)
            .into(),
    )
}

fn paragraph<'a, Message: 'a>(block: &'a Block, scale: Scale) -> Element<'a, Message> {
    let (size, base) = block_font(block.kind, scale);

    let mut spans: Vec<text::Span<'a, (), Font>> = Vec::with_capacity(block.spans.len() + 1);
    if block.kind == BlockKind::ListItem {
        spans.push(span("• "));
    }
    spans.extend(block.spans.iter().map(|inline| styled_span(inline, base)));

    let paragraph = rich_text(spans)
        .size(size)
        .line_height(LineHeight::Absolute(Pixels(scale.line)));

    if block.kind == BlockKind::Quote {
        Container::new(paragraph)
            .padding([0.0, spacing::MD])
            .into()
    } else {
        paragraph.into()
    }
}

fn block_font(kind: BlockKind, scale: Scale) -> (f32, Font) {
    match kind {
        BlockKind::Heading(1 | 2) => (scale.heading, bold(Font::DEFAULT)),
        BlockKind::Heading(_) => (scale.body, bold(Font::DEFAULT)),
        BlockKind::Code => (scale.code, Font::MONOSPACE),
        BlockKind::Quote => (scale.body, italic(Font::DEFAULT)),
        BlockKind::Paragraph | BlockKind::ListItem => (scale.body, Font::DEFAULT),
    }
}

fn styled_span(inline: &Span, base: Font) -> text::Span<'_, (), Font> {
    let mut font = if inline.style.code { Font::MONOSPACE } else { base };
    if inline.style.strong {
        font = bold(font);
    }
    if inline.style.emphasis {
        font = italic(font);
    }

    let styled = span(inline.text.as_str()).font(font);
    if inline.style.link.is_some() {
        styled.color(palette::PRIMARY_500).underline(true)
    } else {
        styled
    }
}

fn bold(font: Font) -> Font {
    Font {
        weight: font::Weight::Bold,
        ..font
    }
}

fn italic(font: Font) -> Font {
    Font {
        style: font::Style::Italic,
        ..font
    }
}
