// SPDX-License-Identifier: MPL-2.0
//! Gallery orchestrator.
//!
//! Owns the collection and the sub-components, routes raw input through the
//! disambiguator, and reports what the application must do as an [`Effect`].
//! Time is always passed in by the caller.

use super::disclosure::DisclosurePanel;
use super::input::{HostCommand, InputDisambiguator, InputSettings, Intent, Outcome, RawInput};
use super::navigation::{Direction, NavigationController};
use super::rich_text::{MarkdownRenderer, RenderCache, RenderedText, RichTextRenderer};
use super::share::{self, ShareRequest};
use super::GalleryTimer;
use crate::config::{Config, Variant, DEFAULT_RICH_TEXT_CACHE};
use crate::domain::geometry::{ScreenPoint, ScreenRect};
use crate::domain::item::{Collection, Item, Ordinal};
use crate::domain::timing::{LockWindow, PreviewLines, TouchedDelay};
use crate::error::ShareError;
use crate::scheduler::Scheduler;
use std::time::Duration;

/// Behaviour of one gallery instance.
#[derive(Debug, Clone, PartialEq)]
pub struct GallerySettings {
    pub variant: Variant,
    pub lock_window: Option<LockWindow>,
    pub input: InputSettings,
    pub touched_delay: TouchedDelay,
    pub preview_lines: PreviewLines,
    pub base_url: String,
    pub rich_text_cache: usize,
}

impl GallerySettings {
    #[must_use]
    pub fn from_config(config: &Config) -> Self {
        let variant = config.gallery.variant;
        Self {
            variant,
            lock_window: config.lock_window(),
            input: InputSettings {
                long_press: config.long_press(),
                tap_slop: config.tap_slop(),
                touch_session: config.touch_session(),
                disclosure_enabled: variant.has_disclosure(),
            },
            touched_delay: config.touched_delay(),
            preview_lines: config.preview_lines(),
            base_url: config.base_url().to_string(),
            rich_text_cache: config.rich_text_cache(),
        }
    }

    /// Settings for `variant` with default timings.
    #[must_use]
    pub fn for_variant(variant: Variant) -> Self {
        Self {
            variant,
            lock_window: variant.has_transition_lock().then(LockWindow::default),
            input: InputSettings {
                disclosure_enabled: variant.has_disclosure(),
                ..InputSettings::default()
            },
            touched_delay: TouchedDelay::default(),
            preview_lines: PreviewLines::default(),
            base_url: String::new(),
            rich_text_cache: DEFAULT_RICH_TEXT_CACHE,
        }
    }
}

impl Default for GallerySettings {
    fn default() -> Self {
        Self::for_variant(Variant::default())
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Message {
    /// Raw keyboard, pointer or touch input.
    Input(RawInput),
    /// On-screen previous/next button.
    Navigate(Direction),
    /// Disclosure trigger pressed.
    ToggleDisclosure,
    ShareRequested,
    BackToGrid,
    /// The media viewport was laid out at a new rectangle.
    ViewportChanged(ScreenRect),
    /// The gallery is on screen and may render rich text.
    Mounted,
    /// The host closed the context menu opened by [`Effect::ContextMenu`].
    ContextMenuClosed,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Effect {
    None,
    /// The current item changed.
    PositionChanged { ordinal: Ordinal },
    /// Share the captured request.
    Share(ShareRequest),
    ShowGrid,
    /// Open the context menu for the current item at `position`.
    ContextMenu {
        position: ScreenPoint,
        ordinal: Ordinal,
    },
}

pub struct Gallery {
    collection: Collection,
    settings: GallerySettings,
    navigation: NavigationController,
    input: InputDisambiguator,
    disclosure: DisclosurePanel,
    timers: Scheduler<GalleryTimer>,
    mounted: bool,
    renderer: Box<dyn RichTextRenderer>,
    rich_text: RenderCache,
}

impl std::fmt::Debug for Gallery {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Gallery")
            .field("len", &self.collection.len())
            .field("position", &self.navigation.position())
            .field("variant", &self.settings.variant)
            .field("mounted", &self.mounted)
            .finish_non_exhaustive()
    }
}

impl Gallery {
    /// Creates a gallery positioned on `requested` (or the first item).
    #[must_use]
    pub fn new(collection: Collection, requested: Option<Ordinal>, settings: GallerySettings) -> Self {
        Self::with_renderer(collection, requested, settings, Box::new(MarkdownRenderer))
    }

    #[must_use]
    pub fn with_renderer(
        collection: Collection,
        requested: Option<Ordinal>,
        settings: GallerySettings,
        renderer: Box<dyn RichTextRenderer>,
    ) -> Self {
        let lock_window = if settings.variant.has_transition_lock() {
            settings.lock_window
        } else {
            None
        };
        let navigation = NavigationController::new(&collection, requested, lock_window);

        Self {
            navigation,
            input: InputDisambiguator::new(settings.input),
            disclosure: DisclosurePanel::new(settings.touched_delay, settings.preview_lines),
            timers: Scheduler::new(),
            mounted: false,
            renderer,
            rich_text: RenderCache::new(settings.rich_text_cache),
            collection,
            settings,
        }
    }

    // =========================================================================
    // Read-outs
    // =========================================================================

    #[must_use]
    pub fn collection(&self) -> &Collection {
        &self.collection
    }

    #[must_use]
    pub fn settings(&self) -> &GallerySettings {
        &self.settings
    }

    #[must_use]
    pub fn position(&self) -> usize {
        self.navigation.position()
    }

    #[must_use]
    pub fn current_ordinal(&self) -> Ordinal {
        self.navigation.current_ordinal()
    }

    #[must_use]
    pub fn current_item(&self) -> &Item {
        self.collection.at(self.navigation.position())
    }

    #[must_use]
    pub fn navigation(&self) -> &NavigationController {
        &self.navigation
    }

    #[must_use]
    pub fn input(&self) -> &InputDisambiguator {
        &self.input
    }

    #[must_use]
    pub fn disclosure(&self) -> Option<&DisclosurePanel> {
        self.settings
            .variant
            .has_disclosure()
            .then_some(&self.disclosure)
    }

    #[must_use]
    pub fn is_mounted(&self) -> bool {
        self.mounted
    }

    /// Rendered rich text of the current item, once mounted and rendered.
    #[must_use]
    pub fn current_rich_text(&self) -> Option<&RenderedText> {
        if !self.mounted {
            return None;
        }
        self.rich_text
            .peek(self.current_ordinal())
            .map(|rendered| &**rendered)
    }

    /// Permalink of the current item.
    pub fn permalink(&self) -> Result<String, ShareError> {
        share::permalink(&self.settings.base_url, self.current_ordinal())
    }

    #[must_use]
    pub fn has_pending_timers(&self) -> bool {
        self.timers.has_pending()
    }

    #[must_use]
    pub fn next_deadline(&self) -> Option<Duration> {
        self.timers.next_deadline()
    }

    // =========================================================================
    // Commands
    // =========================================================================

    /// Handles a gallery message at time `now`.
    pub fn handle(&mut self, message: Message, now: Duration) -> Effect {
        match message {
            Message::Input(raw) => {
                let outcome = self.input.handle(raw, now, &mut self.timers);
                self.apply(outcome, now)
            }
            Message::Navigate(direction) => self.navigate(direction, now),
            Message::ToggleDisclosure => {
                self.toggle_disclosure(now);
                Effect::None
            }
            Message::ShareRequested => Effect::Share(ShareRequest::for_item(
                self.current_item(),
                self.settings.base_url.clone(),
            )),
            Message::BackToGrid => Effect::ShowGrid,
            Message::ViewportChanged(rect) => {
                self.input.set_viewport(rect);
                Effect::None
            }
            Message::Mounted => {
                self.mounted = true;
                self.render_current();
                Effect::None
            }
            Message::ContextMenuClosed => {
                self.input.restore_interception();
                self.input.release_long_press(&mut self.timers);
                Effect::None
            }
        }
    }

    /// Fires due timers. Returns the effect of the last timer that had one.
    pub fn tick(&mut self, now: Duration) -> Effect {
        let mut effect = Effect::None;
        for timer in self.timers.drain_due(now) {
            match timer {
                GalleryTimer::LockReleased => self.navigation.release_lock(),
                GalleryTimer::Touched => self.disclosure.mark_touched(),
                GalleryTimer::LongPress { finger } => {
                    let outcome = self.input.on_long_press(finger);
                    match self.apply(outcome, now) {
                        Effect::None => {}
                        other => effect = other,
                    }
                }
            }
        }
        effect
    }

    /// Jumps to `ordinal` without consulting the lock.
    pub fn go_to(&mut self, ordinal: Ordinal) -> bool {
        let before = self.navigation.position();
        if !self.navigation.go_to(ordinal) {
            return false;
        }
        if self.navigation.position() != before {
            self.on_position_changed();
        }
        true
    }

    fn apply(&mut self, outcome: Outcome, now: Duration) -> Effect {
        if let Some(HostCommand::ContextMenu { position }) = outcome.command {
            return Effect::ContextMenu {
                position,
                ordinal: self.current_ordinal(),
            };
        }
        match outcome.intent {
            Intent::Prev => self.navigate(Direction::Previous, now),
            Intent::Next => self.navigate(Direction::Next, now),
            Intent::ToggleDisclosure => {
                self.toggle_disclosure(now);
                Effect::None
            }
            Intent::Passthrough => Effect::None,
        }
    }

    fn navigate(&mut self, direction: Direction, now: Duration) -> Effect {
        if !self.navigation.advance(direction, now, &mut self.timers) {
            return Effect::None;
        }
        self.on_position_changed();
        Effect::PositionChanged {
            ordinal: self.current_ordinal(),
        }
    }

    fn toggle_disclosure(&mut self, now: Duration) {
        if self.settings.variant.has_disclosure() {
            self.disclosure.toggle(now, &mut self.timers);
        }
    }

    fn on_position_changed(&mut self) {
        self.disclosure.reset(&mut self.timers);
        self.render_current();
    }

    fn render_current(&mut self) {
        if !self.mounted {
            return;
        }
        let item = self.collection.at(self.navigation.position());
        if let Some(source) = &item.rich_text {
            self.rich_text
                .get_or_render(item.ordinal, source, self.renderer.as_ref());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::item::fixtures::{collection, item};
    use crate::gallery::input::{Key, Modifiers, PointerButton};
    use crate::scheduler::{Clock, ManualClock};

    fn key(key: Key) -> Message {
        Message::Input(RawInput::Key {
            key,
            modifiers: Modifiers::default(),
            root_focused: true,
        })
    }

    #[test]
    fn keyboard_navigation_reports_new_ordinal() {
        let mut gallery = Gallery::new(collection(&[1, 2, 3]), None, GallerySettings::default());
        assert_eq!(
            gallery.handle(key(Key::ArrowLeft), Duration::ZERO),
            Effect::PositionChanged {
                ordinal: Ordinal::new(3)
            }
        );
    }

    #[test]
    fn navigation_resets_disclosure() {
        let clock = ManualClock::new();
        let mut gallery = Gallery::new(collection(&[1, 2, 3]), None, GallerySettings::default());

        gallery.handle(key(Key::Space), clock.now());
        clock.advance_ms(250);
        gallery.tick(clock.now());
        let panel = gallery.disclosure().unwrap();
        assert!(!panel.is_open());
        assert!(panel.is_touched());

        gallery.handle(key(Key::ArrowRight), clock.now());
        let panel = gallery.disclosure().unwrap();
        assert!(panel.is_open());
        assert!(!panel.is_touched());
    }

    #[test]
    fn carousel_has_lock_and_no_disclosure() {
        let clock = ManualClock::new();
        let mut gallery = Gallery::new(
            collection(&[1, 2, 3]),
            None,
            GallerySettings::for_variant(Variant::Carousel),
        );
        assert!(gallery.disclosure().is_none());

        gallery.handle(Message::Navigate(Direction::Next), clock.now());
        clock.advance_ms(100);
        gallery.tick(clock.now());
        assert_eq!(
            gallery.handle(Message::Navigate(Direction::Next), clock.now()),
            Effect::None
        );
        clock.advance_ms(400);
        gallery.tick(clock.now());
        assert_eq!(
            gallery.handle(Message::Navigate(Direction::Next), clock.now()),
            Effect::PositionChanged {
                ordinal: Ordinal::new(3)
            }
        );
    }

    #[test]
    fn right_click_yields_context_menu_not_navigation() {
        let mut gallery = Gallery::new(collection(&[1, 2]), None, GallerySettings::default());
        gallery.handle(
            Message::ViewportChanged(ScreenRect::new(0.0, 0.0, 400.0, 300.0)),
            Duration::ZERO,
        );

        let position = ScreenPoint::new(300.0, 100.0);
        let effect = gallery.handle(
            Message::Input(RawInput::PointerPressed {
                button: PointerButton::Secondary,
                position,
            }),
            Duration::ZERO,
        );
        assert_eq!(
            effect,
            Effect::ContextMenu {
                position,
                ordinal: Ordinal::new(1)
            }
        );
        assert_eq!(gallery.position(), 0);
        assert!(!gallery.input().is_intercepting());

        gallery.handle(Message::ContextMenuClosed, Duration::ZERO);
        assert!(gallery.input().is_intercepting());
    }

    #[test]
    fn share_captures_current_item() {
        let mut settings = GallerySettings::default();
        settings.base_url = "https://friend.com".to_string();
        let mut gallery = Gallery::new(collection(&[4, 5]), Some(Ordinal::new(5)), settings);

        let Effect::Share(request) = gallery.handle(Message::ShareRequested, Duration::ZERO) else {
            panic!("expected a share effect");
        };
        gallery.handle(Message::Navigate(Direction::Next), Duration::ZERO);

        assert_eq!(request.ordinal, Ordinal::new(5));
        assert_eq!(request.title, "Review 5");
        assert_eq!(gallery.current_ordinal(), Ordinal::new(4));
        assert_eq!(gallery.permalink().unwrap(), "https://friend.com/?img=4");
    }

    #[test]
    fn rich_text_waits_for_mount() {
        let mut annotated = item(1);
        annotated.rich_text = Some("**sharp**".to_string());
        let items = Collection::new(vec![annotated, item(2)]).unwrap();
        let mut gallery = Gallery::new(items, None, GallerySettings::default());

        assert!(gallery.current_rich_text().is_none());
        gallery.handle(Message::Mounted, Duration::ZERO);
        let rendered = gallery.current_rich_text().unwrap();
        assert!(rendered.blocks[0].spans[0].style.strong);

        gallery.handle(Message::Navigate(Direction::Next), Duration::ZERO);
        assert!(gallery.current_rich_text().is_none());
    }

    #[test]
    fn go_to_resets_disclosure_only_on_change() {
        let mut gallery = Gallery::new(collection(&[1, 2, 3]), None, GallerySettings::default());
        gallery.handle(Message::ToggleDisclosure, Duration::ZERO);

        assert!(gallery.go_to(Ordinal::new(1)));
        assert!(!gallery.disclosure().unwrap().is_open());

        assert!(gallery.go_to(Ordinal::new(3)));
        assert!(gallery.disclosure().unwrap().is_open());
        assert!(!gallery.go_to(Ordinal::new(99)));
        assert_eq!(gallery.position(), 2);
    }
}
