// SPDX-License-Identifier: MPL-2.0
//! Rich-text rendering of review payloads.
//!
//! Payloads are Markdown. They are turned into a small block/span tree that
//! the viewer maps onto iced `rich_text` spans. Rendering happens lazily,
//! once the gallery is mounted, and results are kept in a bounded
//! [`RenderCache`] keyed by ordinal.

use crate::domain::item::Ordinal;
use lru::LruCache;
use pulldown_cmark::{Event, HeadingLevel, Parser, Tag, TagEnd};
use std::num::NonZeroUsize;
use std::sync::Arc;

/// Inline styling of a span.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SpanStyle {
    pub strong: bool,
    pub emphasis: bool,
    pub code: bool,
    pub link: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Span {
    pub text: String,
    pub style: SpanStyle,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BlockKind {
    Paragraph,
    Heading(u8),
    ListItem,
    Quote,
    Code,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Block {
    pub kind: BlockKind,
    pub spans: Vec<Span>,
}

impl Block {
    /// Concatenated text of all spans.
    #[must_use]
    pub fn plain_text(&self) -> String {
        self.spans.iter().map(|span| span.text.as_str()).collect()
    }
}

/// Output of a [`RichTextRenderer`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RenderedText {
    pub blocks: Vec<Block>,
}

impl RenderedText {
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty()
    }
}

pub trait RichTextRenderer {
    fn render(&self, source: &str) -> RenderedText;
}

/// CommonMark renderer backed by `pulldown-cmark`.
#[derive(Debug, Clone, Copy, Default)]
pub struct MarkdownRenderer;

fn heading_depth(level: HeadingLevel) -> u8 {
    match level {
        HeadingLevel::H1 => 1,
        HeadingLevel::H2 => 2,
        HeadingLevel::H3 => 3,
        HeadingLevel::H4 => 4,
        HeadingLevel::H5 => 5,
        HeadingLevel::H6 => 6,
    }
}

#[derive(Default)]
struct Builder {
    blocks: Vec<Block>,
    current: Option<Block>,
    quote_depth: usize,
    strong: usize,
    emphasis: usize,
    link: Option<String>,
}

impl Builder {
    fn open(&mut self, kind: BlockKind) {
        // Loose list items wrap their text in a paragraph.
        if kind == BlockKind::Paragraph
            && self
                .current
                .as_ref()
                .is_some_and(|block| block.kind == BlockKind::ListItem && block.spans.is_empty())
        {
            return;
        }
        self.close();
        let kind = if self.quote_depth > 0 && kind == BlockKind::Paragraph {
            BlockKind::Quote
        } else {
            kind
        };
        self.current = Some(Block {
            kind,
            spans: Vec::new(),
        });
    }

    fn close(&mut self) {
        if let Some(block) = self.current.take() {
            if !block.spans.is_empty() {
                self.blocks.push(block);
            }
        }
    }

    fn push(&mut self, text: &str, code: bool) {
        if text.is_empty() {
            return;
        }
        let style = SpanStyle {
            strong: self.strong > 0,
            emphasis: self.emphasis > 0,
            code,
            link: self.link.clone(),
        };
        let block = self.current.get_or_insert_with(|| Block {
            kind: BlockKind::Paragraph,
            spans: Vec::new(),
        });
        match block.spans.last_mut() {
            Some(last) if last.style == style => last.text.push_str(text),
            _ => block.spans.push(Span {
                text: text.to_string(),
                style,
            }),
        }
    }
}

impl RichTextRenderer for MarkdownRenderer {
    fn render(&self, source: &str) -> RenderedText {
        let mut builder = Builder::default();

        for event in Parser::new(source) {
            match event {
                Event::Start(Tag::Paragraph) => builder.open(BlockKind::Paragraph),
                Event::Start(Tag::Heading { level, .. }) => {
                    builder.open(BlockKind::Heading(heading_depth(level)));
                }
                Event::Start(Tag::Item) => builder.open(BlockKind::ListItem),
                Event::Start(Tag::CodeBlock(_)) => builder.open(BlockKind::Code),
                Event::Start(Tag::BlockQuote(_)) => builder.quote_depth += 1,
                Event::End(TagEnd::BlockQuote(_)) => {
                    builder.close();
                    builder.quote_depth = builder.quote_depth.saturating_sub(1);
                }
                Event::Start(Tag::Strong) => builder.strong += 1,
                Event::End(TagEnd::Strong) => builder.strong = builder.strong.saturating_sub(1),
                Event::Start(Tag::Emphasis) => builder.emphasis += 1,
                Event::End(TagEnd::Emphasis) => {
                    builder.emphasis = builder.emphasis.saturating_sub(1);
                }
                Event::Start(Tag::Link { dest_url, .. }) => {
                    builder.link = Some(dest_url.to_string());
                }
                Event::End(TagEnd::Link) => builder.link = None,
                Event::End(
                    TagEnd::Paragraph | TagEnd::Heading(_) | TagEnd::Item | TagEnd::CodeBlock,
                ) => builder.close(),
                Event::Text(text) => {
                    let code = builder
                        .current
                        .as_ref()
                        .is_some_and(|block| block.kind == BlockKind::Code);
                    builder.push(&text, code);
                }
                Event::Code(text) => builder.push(&text, true),
                Event::SoftBreak => builder.push(" ", false),
                Event::HardBreak => builder.push("\n", false),
                _ => {}
            }
        }
        builder.close();

        RenderedText {
            blocks: builder.blocks,
        }
    }
}

/// Bounded cache of rendered payloads.
pub struct RenderCache {
    entries: LruCache<Ordinal, Arc<RenderedText>>,
}

impl RenderCache {
    /// Creates a cache holding up to `capacity` entries (at least one).
    #[must_use]
    pub fn new(capacity: usize) -> Self {
        let capacity = NonZeroUsize::new(capacity).unwrap_or(NonZeroUsize::MIN);
        Self {
            entries: LruCache::new(capacity),
        }
    }

    /// Returns the cached rendering, rendering and inserting it on a miss.
    pub fn get_or_render(
        &mut self,
        ordinal: Ordinal,
        source: &str,
        renderer: &dyn RichTextRenderer,
    ) -> Arc<RenderedText> {
        if let Some(rendered) = self.entries.get(&ordinal) {
            return Arc::clone(rendered);
        }
        let rendered = Arc::new(renderer.render(source));
        self.entries.put(ordinal, Arc::clone(&rendered));
        rendered
    }

    /// Cached rendering without touching recency.
    #[must_use]
    pub fn peek(&self, ordinal: Ordinal) -> Option<&Arc<RenderedText>> {
        self.entries.peek(&ordinal)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl std::fmt::Debug for RenderCache {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RenderCache")
            .field("len", &self.entries.len())
            .field("cap", &self.entries.cap())
            .finish()
    }
}
