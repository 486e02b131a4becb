// SPDX-License-Identifier: MPL-2.0
//! Input disambiguation: raw keyboard, pointer and touch events in, intents out.
//!
//! The media viewport is split into two invisible halves that act as the
//! "previous" and "next" controls. Everything that decides whether an event
//! navigates, toggles the disclosure panel, or must be left alone for the
//! platform (context menus, long-press menus, focused widgets) lives here so
//! it can be tested without rendering anything.
//!
//! # Rules
//!
//! - Keyboard events carrying Ctrl, Alt or Logo are ignored before any key
//!   matching. Shift is not a blocking modifier.
//! - `ArrowLeft`/`a`/`A` go back, `ArrowRight`/`d`/`D` go forward.
//! - Space toggles the disclosure panel only when the root holds focus and
//!   the variant has a panel.
//! - Secondary clicks never navigate: they suspend interception and ask the
//!   host to open the context menu of the element underneath.
//! - Touch taps navigate; touches held past the long-press threshold open
//!   the platform menu instead.

use super::navigation::Direction;
use super::GalleryTimer;
use crate::domain::geometry::{ScreenPoint, ScreenRect};
use crate::domain::timing::{LongPressThreshold, TapSlop};
use crate::scheduler::{Scheduler, TimerHandle};
use std::time::Duration;

/// Platform-independent key identity.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    ArrowLeft,
    ArrowRight,
    Space,
    Enter,
    Tab,
    Escape,
    Character(char),
    Other,
}

/// Modifier state attached to a key event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Modifiers {
    pub shift: bool,
    pub control: bool,
    pub alt: bool,
    /// Command on macOS, Windows key elsewhere.
    pub logo: bool,
}

impl Modifiers {
    /// Whether the event belongs to a shortcut and must be ignored.
    #[must_use]
    pub fn blocks_navigation(self) -> bool {
        self.control || self.alt || self.logo
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerButton {
    /// Button 0.
    Primary,
    /// Button 2.
    Secondary,
    Other,
}

/// Identifier of a touch point as reported by the platform.
pub type FingerId = u64;

/// Raw input as delivered by the host.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum RawInput {
    Key {
        key: Key,
        modifiers: Modifiers,
        /// `false` when another element (text field, button) holds focus.
        root_focused: bool,
    },
    PointerMoved(ScreenPoint),
    PointerLeft,
    PointerPressed {
        button: PointerButton,
        position: ScreenPoint,
    },
    PointerReleased {
        button: PointerButton,
        position: ScreenPoint,
    },
    TouchPressed {
        finger: FingerId,
        position: ScreenPoint,
    },
    TouchMoved {
        finger: FingerId,
        position: ScreenPoint,
    },
    TouchLifted {
        finger: FingerId,
        position: ScreenPoint,
    },
    TouchLost {
        finger: FingerId,
    },
}

/// What a raw event resolved to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Intent {
    Prev,
    Next,
    ToggleDisclosure,
    /// Leave the event to the platform.
    Passthrough,
}

impl From<Direction> for Intent {
    fn from(direction: Direction) -> Self {
        match direction {
            Direction::Previous => Intent::Prev,
            Direction::Next => Intent::Next,
        }
    }
}

impl Intent {
    #[must_use]
    pub fn direction(self) -> Option<Direction> {
        match self {
            Intent::Prev => Some(Direction::Previous),
            Intent::Next => Some(Direction::Next),
            Intent::ToggleDisclosure | Intent::Passthrough => None,
        }
    }
}

/// Requests for the host that accompany an intent.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum HostCommand {
    /// Open the context menu of whatever is under `position`.
    ContextMenu { position: ScreenPoint },
}

/// Result of feeding one event to the disambiguator.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Outcome {
    pub intent: Intent,
    pub command: Option<HostCommand>,
}

impl Outcome {
    #[must_use]
    pub fn passthrough() -> Self {
        Self::from(Intent::Passthrough)
    }

    fn context_menu(position: ScreenPoint) -> Self {
        Self {
            intent: Intent::Passthrough,
            command: Some(HostCommand::ContextMenu { position }),
        }
    }
}

impl From<Intent> for Outcome {
    fn from(intent: Intent) -> Self {
        Self {
            intent,
            command: None,
        }
    }
}

/// Keyboard focus inside the gallery.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Focus {
    #[default]
    Root,
    Control(Direction),
}

impl Focus {
    fn cycled(self, backwards: bool) -> Self {
        match (self, backwards) {
            (Focus::Root, false) => Focus::Control(Direction::Previous),
            (Focus::Control(Direction::Previous), false) => Focus::Control(Direction::Next),
            (Focus::Control(Direction::Next), false) => Focus::Root,
            (Focus::Root, true) => Focus::Control(Direction::Next),
            (Focus::Control(Direction::Next), true) => Focus::Control(Direction::Previous),
            (Focus::Control(Direction::Previous), true) => Focus::Root,
        }
    }
}

/// Static behaviour of the disambiguator for one session.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct InputSettings {
    pub long_press: LongPressThreshold,
    pub tap_slop: TapSlop,
    /// Touch-classified session: touch input is handled and hover is not.
    pub touch_session: bool,
    /// Whether Space may toggle a disclosure panel.
    pub disclosure_enabled: bool,
}

impl Default for InputSettings {
    fn default() -> Self {
        Self {
            long_press: LongPressThreshold::default(),
            tap_slop: TapSlop::default(),
            touch_session: false,
            disclosure_enabled: true,
        }
    }
}

#[derive(Debug, Clone, Copy)]
struct TrackedTouch {
    finger: FingerId,
    origin: ScreenPoint,
    long_press: bool,
    timer: Option<TimerHandle>,
}

#[derive(Debug, Clone)]
pub struct InputDisambiguator {
    settings: InputSettings,
    viewport: ScreenRect,
    hovered: Option<Direction>,
    focus: Focus,
    interception_suspended: bool,
    pressed: Option<Direction>,
    touch: Option<TrackedTouch>,
}

impl InputDisambiguator {
    #[must_use]
    pub fn new(settings: InputSettings) -> Self {
        Self {
            settings,
            viewport: ScreenRect::default(),
            hovered: None,
            focus: Focus::Root,
            interception_suspended: false,
            pressed: None,
            touch: None,
        }
    }

    /// Sets the media viewport whose halves act as navigation controls.
    pub fn set_viewport(&mut self, viewport: ScreenRect) {
        self.viewport = viewport;
    }

    #[must_use]
    pub fn viewport(&self) -> ScreenRect {
        self.viewport
    }

    #[must_use]
    pub fn settings(&self) -> &InputSettings {
        &self.settings
    }

    #[must_use]
    pub fn focus(&self) -> Focus {
        self.focus
    }

    /// Whether the navigation controls currently receive pointer events.
    #[must_use]
    pub fn is_intercepting(&self) -> bool {
        !self.interception_suspended
    }

    /// Whether the affordance for `side` should be highlighted.
    #[must_use]
    pub fn is_highlighted(&self, side: Direction) -> bool {
        let hovered = !self.settings.touch_session && self.hovered == Some(side);
        hovered || self.focus == Focus::Control(side)
    }

    /// Classifies one raw event.
    pub fn handle(
        &mut self,
        input: RawInput,
        now: Duration,
        timers: &mut Scheduler<GalleryTimer>,
    ) -> Outcome {
        match input {
            RawInput::Key {
                key,
                modifiers,
                root_focused,
            } => self.handle_key(key, modifiers, root_focused),
            RawInput::PointerMoved(position) => self.handle_pointer_moved(position),
            RawInput::PointerLeft => {
                self.hovered = None;
                self.pressed = None;
                Outcome::passthrough()
            }
            RawInput::PointerPressed { button, position } => {
                self.handle_pointer_pressed(button, position)
            }
            RawInput::PointerReleased { button, position } => {
                self.handle_pointer_released(button, position)
            }
            RawInput::TouchPressed { finger, position } => {
                self.handle_touch_pressed(finger, position, now, timers)
            }
            RawInput::TouchMoved { finger, .. } => self.handle_touch_moved(finger, timers),
            RawInput::TouchLifted { finger, position } => {
                self.handle_touch_lifted(finger, position, timers)
            }
            RawInput::TouchLost { finger } => {
                if self.is_tracked(finger) {
                    self.cancel_touch(timers);
                }
                Outcome::passthrough()
            }
        }
    }

    /// Called when a long-press timer fires.
    pub fn on_long_press(&mut self, finger: FingerId) -> Outcome {
        match self.touch.as_mut() {
            Some(touch) if touch.finger == finger && touch.timer.is_some() => {
                touch.timer = None;
                touch.long_press = true;
                tracing::debug!("Long-press detected, deferring to platform menu");
                Outcome::context_menu(touch.origin)
            }
            _ => Outcome::passthrough(),
        }
    }

    // =========================================================================
    // Keyboard
    // =========================================================================

    fn handle_key(&mut self, key: Key, modifiers: Modifiers, root_focused: bool) -> Outcome {
        if modifiers.blocks_navigation() {
            return Outcome::passthrough();
        }

        let intent = match key {
            Key::ArrowLeft | Key::Character('a' | 'A') => Intent::Prev,
            Key::ArrowRight | Key::Character('d' | 'D') => Intent::Next,
            Key::Tab if root_focused => {
                self.focus = self.focus.cycled(modifiers.shift);
                Intent::Passthrough
            }
            Key::Escape => {
                self.focus = Focus::Root;
                Intent::Passthrough
            }
            Key::Space | Key::Enter if root_focused => match self.focus {
                Focus::Control(direction) => Intent::from(direction),
                Focus::Root if key == Key::Space && self.settings.disclosure_enabled => {
                    Intent::ToggleDisclosure
                }
                Focus::Root => Intent::Passthrough,
            },
            _ => Intent::Passthrough,
        };
        Outcome::from(intent)
    }

    // =========================================================================
    // Pointer
    // =========================================================================

    fn side_at(&self, position: ScreenPoint) -> Option<Direction> {
        if self.viewport.is_degenerate() || !self.viewport.contains(position) {
            return None;
        }
        if position.x < self.viewport.center_x() {
            Some(Direction::Previous)
        } else {
            Some(Direction::Next)
        }
    }

    fn handle_pointer_moved(&mut self, position: ScreenPoint) -> Outcome {
        if self.settings.touch_session || self.interception_suspended {
            return Outcome::passthrough();
        }
        self.hovered = self.side_at(position);
        Outcome::passthrough()
    }

    fn handle_pointer_pressed(&mut self, button: PointerButton, position: ScreenPoint) -> Outcome {
        if self.settings.touch_session {
            return Outcome::passthrough();
        }

        match button {
            PointerButton::Primary => {
                if self.interception_suspended {
                    self.restore_interception();
                    self.pressed = None;
                } else {
                    self.pressed = self.side_at(position);
                }
                Outcome::passthrough()
            }
            PointerButton::Secondary => {
                self.pressed = None;
                if self.side_at(position).is_none() {
                    self.restore_interception();
                    return Outcome::passthrough();
                }
                if self.interception_suspended {
                    self.restore_interception();
                } else {
                    tracing::trace!("Suspending navigation interception for context menu");
                    self.interception_suspended = true;
                    self.hovered = None;
                }
                Outcome::context_menu(position)
            }
            PointerButton::Other => Outcome::passthrough(),
        }
    }

    fn handle_pointer_released(&mut self, button: PointerButton, position: ScreenPoint) -> Outcome {
        if self.settings.touch_session || button != PointerButton::Primary {
            return Outcome::passthrough();
        }
        match self.pressed.take() {
            Some(side) if self.side_at(position) == Some(side) => Outcome::from(Intent::from(side)),
            _ => Outcome::passthrough(),
        }
    }

    /// Hands pointer events back to the navigation controls, e.g. once the
    /// host closed its context menu.
    pub fn restore_interception(&mut self) {
        self.interception_suspended = false;
    }

    // =========================================================================
    // Touch
    // =========================================================================

    fn is_tracked(&self, finger: FingerId) -> bool {
        self.touch.is_some_and(|touch| touch.finger == finger)
    }

    fn handle_touch_pressed(
        &mut self,
        finger: FingerId,
        position: ScreenPoint,
        now: Duration,
        timers: &mut Scheduler<GalleryTimer>,
    ) -> Outcome {
        if !self.settings.touch_session || self.touch.is_some() {
            return Outcome::passthrough();
        }
        if self.side_at(position).is_none() {
            return Outcome::passthrough();
        }

        let timer = timers.schedule_after(
            now,
            self.settings.long_press.as_duration(),
            GalleryTimer::LongPress { finger },
        );
        self.touch = Some(TrackedTouch {
            finger,
            origin: position,
            long_press: false,
            timer: Some(timer),
        });
        Outcome::passthrough()
    }

    fn handle_touch_moved(
        &mut self,
        finger: FingerId,
        timers: &mut Scheduler<GalleryTimer>,
    ) -> Outcome {
        if let Some(touch) = self.touch.as_mut().filter(|touch| touch.finger == finger) {
            if touch.timer.is_some() {
                timers.cancel_slot(&mut touch.timer);
                touch.long_press = false;
            }
        }
        Outcome::passthrough()
    }

    fn handle_touch_lifted(
        &mut self,
        finger: FingerId,
        position: ScreenPoint,
        timers: &mut Scheduler<GalleryTimer>,
    ) -> Outcome {
        if !self.is_tracked(finger) {
            return Outcome::passthrough();
        }
        let Some(mut touch) = self.touch.take() else {
            return Outcome::passthrough();
        };
        timers.cancel_slot(&mut touch.timer);

        if touch.long_press {
            return Outcome::passthrough();
        }
        if touch.origin.distance_to(position) > self.settings.tap_slop.value() {
            return Outcome::passthrough();
        }
        match self.side_at(touch.origin) {
            Some(side) => Outcome::from(Intent::from(side)),
            None => Outcome::passthrough(),
        }
    }

    /// Forgets a touch that already opened the platform menu. Its lift may
    /// never arrive once the menu owns the pointer.
    pub fn release_long_press(&mut self, timers: &mut Scheduler<GalleryTimer>) {
        if self.touch.is_some_and(|touch| touch.long_press) {
            self.cancel_touch(timers);
        }
    }

    fn cancel_touch(&mut self, timers: &mut Scheduler<GalleryTimer>) {
        if let Some(mut touch) = self.touch.take() {
            timers.cancel_slot(&mut touch.timer);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scheduler::{Clock, ManualClock};

    const VIEWPORT: ScreenRect = ScreenRect {
        left: 0.0,
        top: 0.0,
        width: 800.0,
        height: 600.0,
    };

    fn left() -> ScreenPoint {
        ScreenPoint::new(100.0, 300.0)
    }

    fn right() -> ScreenPoint {
        ScreenPoint::new(700.0, 300.0)
    }

    fn desktop() -> InputDisambiguator {
        let mut input = InputDisambiguator::new(InputSettings::default());
        input.set_viewport(VIEWPORT);
        input
    }

    fn touch() -> InputDisambiguator {
        let mut input = InputDisambiguator::new(InputSettings {
            touch_session: true,
            ..InputSettings::default()
        });
        input.set_viewport(VIEWPORT);
        input
    }

    fn key(key: Key) -> RawInput {
        RawInput::Key {
            key,
            modifiers: Modifiers::default(),
            root_focused: true,
        }
    }

    /// Feeds `input` and fires due long-press timers the way the gallery does.
    fn feed(
        input: &mut InputDisambiguator,
        timers: &mut Scheduler<GalleryTimer>,
        clock: &ManualClock,
        event: RawInput,
    ) -> Outcome {
        input.handle(event, clock.now(), timers)
    }

    fn fire(
        input: &mut InputDisambiguator,
        timers: &mut Scheduler<GalleryTimer>,
        clock: &ManualClock,
    ) -> Vec<Outcome> {
        timers
            .drain_due(clock.now())
            .into_iter()
            .filter_map(|timer| match timer {
                GalleryTimer::LongPress { finger } => Some(input.on_long_press(finger)),
                _ => None,
            })
            .collect()
    }

    #[test]
    fn arrow_and_letter_keys_navigate() {
        let mut input = desktop();
        let mut timers = Scheduler::new();
        for (raw, expected) in [
            (Key::ArrowLeft, Intent::Prev),
            (Key::Character('a'), Intent::Prev),
            (Key::Character('A'), Intent::Prev),
            (Key::ArrowRight, Intent::Next),
            (Key::Character('d'), Intent::Next),
            (Key::Character('D'), Intent::Next),
            (Key::Character('x'), Intent::Passthrough),
        ] {
            assert_eq!(input.handle(key(raw), Duration::ZERO, &mut timers).intent, expected);
        }
    }

    #[test]
    fn blocking_modifiers_are_checked_before_keys() {
        let mut input = desktop();
        let mut timers = Scheduler::new();
        for modifiers in [
            Modifiers {
                control: true,
                ..Modifiers::default()
            },
            Modifiers {
                alt: true,
                ..Modifiers::default()
            },
            Modifiers {
                logo: true,
                ..Modifiers::default()
            },
        ] {
            let outcome = input.handle(
                RawInput::Key {
                    key: Key::ArrowRight,
                    modifiers,
                    root_focused: true,
                },
                Duration::ZERO,
                &mut timers,
            );
            assert_eq!(outcome.intent, Intent::Passthrough);
        }
    }

    #[test]
    fn shift_does_not_block() {
        let mut input = desktop();
        let mut timers = Scheduler::new();
        let outcome = input.handle(
            RawInput::Key {
                key: Key::Character('D'),
                modifiers: Modifiers {
                    shift: true,
                    ..Modifiers::default()
                },
                root_focused: true,
            },
            Duration::ZERO,
            &mut timers,
        );
        assert_eq!(outcome.intent, Intent::Next);
    }

    #[test]
    fn space_toggles_only_with_root_focus_and_panel() {
        let mut timers = Scheduler::new();
        let mut input = desktop();
        assert_eq!(
            input.handle(key(Key::Space), Duration::ZERO, &mut timers).intent,
            Intent::ToggleDisclosure
        );

        let focused_elsewhere = RawInput::Key {
            key: Key::Space,
            modifiers: Modifiers::default(),
            root_focused: false,
        };
        assert_eq!(
            input.handle(focused_elsewhere, Duration::ZERO, &mut timers).intent,
            Intent::Passthrough
        );

        let mut carousel = InputDisambiguator::new(InputSettings {
            disclosure_enabled: false,
            ..InputSettings::default()
        });
        assert_eq!(
            carousel.handle(key(Key::Space), Duration::ZERO, &mut timers).intent,
            Intent::Passthrough
        );
    }

    #[test]
    fn tab_cycles_focus_and_enter_activates() {
        let mut input = desktop();
        let mut timers = Scheduler::new();

        input.handle(key(Key::Tab), Duration::ZERO, &mut timers);
        assert_eq!(input.focus(), Focus::Control(Direction::Previous));
        assert!(input.is_highlighted(Direction::Previous));
        assert_eq!(
            input.handle(key(Key::Enter), Duration::ZERO, &mut timers).intent,
            Intent::Prev
        );

        input.handle(key(Key::Tab), Duration::ZERO, &mut timers);
        assert_eq!(
            input.handle(key(Key::Space), Duration::ZERO, &mut timers).intent,
            Intent::Next
        );

        input.handle(key(Key::Tab), Duration::ZERO, &mut timers);
        assert_eq!(input.focus(), Focus::Root);

        let shift_tab = RawInput::Key {
            key: Key::Tab,
            modifiers: Modifiers {
                shift: true,
                ..Modifiers::default()
            },
            root_focused: true,
        };
        input.handle(shift_tab, Duration::ZERO, &mut timers);
        assert_eq!(input.focus(), Focus::Control(Direction::Next));
        input.handle(key(Key::Escape), Duration::ZERO, &mut timers);
        assert_eq!(input.focus(), Focus::Root);
    }

    #[test]
    fn hover_highlights_the_half_under_the_pointer() {
        let mut input = desktop();
        let mut timers = Scheduler::new();

        input.handle(RawInput::PointerMoved(left()), Duration::ZERO, &mut timers);
        assert!(input.is_highlighted(Direction::Previous));
        assert!(!input.is_highlighted(Direction::Next));

        input.handle(RawInput::PointerMoved(right()), Duration::ZERO, &mut timers);
        assert!(input.is_highlighted(Direction::Next));

        input.handle(RawInput::PointerLeft, Duration::ZERO, &mut timers);
        assert!(!input.is_highlighted(Direction::Next));
    }

    #[test]
    fn primary_click_navigates_by_half() {
        let mut input = desktop();
        let mut timers = Scheduler::new();
        let click = |input: &mut InputDisambiguator,
                     timers: &mut Scheduler<GalleryTimer>,
                     at: ScreenPoint| {
            input.handle(
                RawInput::PointerPressed {
                    button: PointerButton::Primary,
                    position: at,
                },
                Duration::ZERO,
                timers,
            );
            input
                .handle(
                    RawInput::PointerReleased {
                        button: PointerButton::Primary,
                        position: at,
                    },
                    Duration::ZERO,
                    timers,
                )
                .intent
        };

        assert_eq!(click(&mut input, &mut timers, left()), Intent::Prev);
        assert_eq!(click(&mut input, &mut timers, right()), Intent::Next);
        assert_eq!(
            click(&mut input, &mut timers, ScreenPoint::new(900.0, 10.0)),
            Intent::Passthrough
        );
    }

    #[test]
    fn secondary_click_opens_context_menu_and_suspends_interception() {
        let mut input = desktop();
        let mut timers = Scheduler::new();

        let outcome = input.handle(
            RawInput::PointerPressed {
                button: PointerButton::Secondary,
                position: right(),
            },
            Duration::ZERO,
            &mut timers,
        );
        assert_eq!(outcome.intent, Intent::Passthrough);
        assert_eq!(
            outcome.command,
            Some(HostCommand::ContextMenu { position: right() })
        );
        assert!(!input.is_intercepting());

        // The next primary click is consumed by the platform and restores interception.
        input.handle(
            RawInput::PointerPressed {
                button: PointerButton::Primary,
                position: right(),
            },
            Duration::ZERO,
            &mut timers,
        );
        let release = input.handle(
            RawInput::PointerReleased {
                button: PointerButton::Primary,
                position: right(),
            },
            Duration::ZERO,
            &mut timers,
        );
        assert_eq!(release.intent, Intent::Passthrough);
        assert!(input.is_intercepting());
    }

    #[test]
    fn touch_events_ignored_outside_touch_sessions() {
        let mut input = desktop();
        let clock = ManualClock::new();
        let mut timers = Scheduler::new();

        feed(
            &mut input,
            &mut timers,
            &clock,
            RawInput::TouchPressed {
                finger: 1,
                position: left(),
            },
        );
        let lifted = feed(
            &mut input,
            &mut timers,
            &clock,
            RawInput::TouchLifted {
                finger: 1,
                position: left(),
            },
        );
        assert_eq!(lifted.intent, Intent::Passthrough);
        assert!(!timers.has_pending());
    }

    #[test]
    fn quick_tap_navigates() {
        let mut input = touch();
        let clock = ManualClock::new();
        let mut timers = Scheduler::new();

        feed(
            &mut input,
            &mut timers,
            &clock,
            RawInput::TouchPressed {
                finger: 1,
                position: right(),
            },
        );
        clock.advance_ms(120);
        assert!(fire(&mut input, &mut timers, &clock).is_empty());
        let lifted = feed(
            &mut input,
            &mut timers,
            &clock,
            RawInput::TouchLifted {
                finger: 1,
                position: right(),
            },
        );
        assert_eq!(lifted.intent, Intent::Next);
        assert!(!timers.has_pending());
    }

    #[test]
    fn long_press_is_suppressed_and_opens_menu() {
        let mut input = touch();
        let clock = ManualClock::new();
        let mut timers = Scheduler::new();

        feed(
            &mut input,
            &mut timers,
            &clock,
            RawInput::TouchPressed {
                finger: 1,
                position: left(),
            },
        );
        clock.advance_ms(500);
        let fired = fire(&mut input, &mut timers, &clock);
        assert_eq!(fired, vec![Outcome::context_menu(left())]);

        clock.advance_ms(300);
        let lifted = feed(
            &mut input,
            &mut timers,
            &clock,
            RawInput::TouchLifted {
                finger: 1,
                position: left(),
            },
        );
        assert_eq!(lifted.intent, Intent::Passthrough);
    }

    #[test]
    fn move_before_threshold_cancels_long_press() {
        let mut input = touch();
        let clock = ManualClock::new();
        let mut timers = Scheduler::new();

        feed(
            &mut input,
            &mut timers,
            &clock,
            RawInput::TouchPressed {
                finger: 1,
                position: left(),
            },
        );
        clock.advance_ms(200);
        feed(
            &mut input,
            &mut timers,
            &clock,
            RawInput::TouchMoved {
                finger: 1,
                position: ScreenPoint::new(103.0, 301.0),
            },
        );
        clock.advance_ms(600);
        assert!(fire(&mut input, &mut timers, &clock).is_empty());

        let lifted = feed(
            &mut input,
            &mut timers,
            &clock,
            RawInput::TouchLifted {
                finger: 1,
                position: ScreenPoint::new(104.0, 302.0),
            },
        );
        assert_eq!(lifted.intent, Intent::Prev);
    }

    #[test]
    fn swipe_beyond_slop_does_not_navigate() {
        let mut input = touch();
        let clock = ManualClock::new();
        let mut timers = Scheduler::new();

        feed(
            &mut input,
            &mut timers,
            &clock,
            RawInput::TouchPressed {
                finger: 1,
                position: left(),
            },
        );
        let lifted = feed(
            &mut input,
            &mut timers,
            &clock,
            RawInput::TouchLifted {
                finger: 1,
                position: ScreenPoint::new(250.0, 300.0),
            },
        );
        assert_eq!(lifted.intent, Intent::Passthrough);
    }

    #[test]
    fn second_finger_is_ignored() {
        let mut input = touch();
        let clock = ManualClock::new();
        let mut timers = Scheduler::new();

        feed(
            &mut input,
            &mut timers,
            &clock,
            RawInput::TouchPressed {
                finger: 1,
                position: left(),
            },
        );
        feed(
            &mut input,
            &mut timers,
            &clock,
            RawInput::TouchPressed {
                finger: 2,
                position: right(),
            },
        );
        let lifted_second = feed(
            &mut input,
            &mut timers,
            &clock,
            RawInput::TouchLifted {
                finger: 2,
                position: right(),
            },
        );
        assert_eq!(lifted_second.intent, Intent::Passthrough);

        let lifted_first = feed(
            &mut input,
            &mut timers,
            &clock,
            RawInput::TouchLifted {
                finger: 1,
                position: left(),
            },
        );
        assert_eq!(lifted_first.intent, Intent::Prev);
    }

    #[test]
    fn lost_finger_resets_tracking() {
        let mut input = touch();
        let clock = ManualClock::new();
        let mut timers = Scheduler::new();

        feed(
            &mut input,
            &mut timers,
            &clock,
            RawInput::TouchPressed {
                finger: 7,
                position: left(),
            },
        );
        feed(&mut input, &mut timers, &clock, RawInput::TouchLost { finger: 7 });
        assert!(!timers.has_pending());
    }

    #[test]
    fn released_long_press_frees_the_session() {
        let mut input = touch();
        let clock = ManualClock::new();
        let mut timers = Scheduler::new();

        feed(
            &mut input,
            &mut timers,
            &clock,
            RawInput::TouchPressed {
                finger: 1,
                position: right(),
            },
        );
        clock.advance_ms(700);
        assert_eq!(fire(&mut input, &mut timers, &clock).len(), 1);

        input.release_long_press(&mut timers);

        feed(
            &mut input,
            &mut timers,
            &clock,
            RawInput::TouchPressed {
                finger: 2,
                position: right(),
            },
        );
        let tapped = feed(
            &mut input,
            &mut timers,
            &clock,
            RawInput::TouchLifted {
                finger: 2,
                position: right(),
            },
        );
        assert_eq!(tapped.intent, Intent::Next);
    }

    #[test]
    fn release_keeps_an_ordinary_touch() {
        let mut input = touch();
        let clock = ManualClock::new();
        let mut timers = Scheduler::new();

        feed(
            &mut input,
            &mut timers,
            &clock,
            RawInput::TouchPressed {
                finger: 3,
                position: left(),
            },
        );
        input.release_long_press(&mut timers);
        assert!(timers.has_pending());
    }

    #[test]
    fn touch_sessions_show_no_hover() {
        let mut input = touch();
        let mut timers = Scheduler::new();
        input.handle(RawInput::PointerMoved(left()), Duration::ZERO, &mut timers);
        assert!(!input.is_highlighted(Direction::Previous));
    }

    #[test]
    fn zero_size_viewport_ignores_pointer() {
        let mut input = InputDisambiguator::new(InputSettings::default());
        let mut timers = Scheduler::new();
        input.handle(
            RawInput::PointerPressed {
                button: PointerButton::Primary,
                position: left(),
            },
            Duration::ZERO,
            &mut timers,
        );
        let released = input.handle(
            RawInput::PointerReleased {
                button: PointerButton::Primary,
                position: left(),
            },
            Duration::ZERO,
            &mut timers,
        );
        assert_eq!(released.intent, Intent::Passthrough);
    }
}
