// SPDX-License-Identifier: MPL-2.0
//! Translation of iced runtime events into gallery raw input.
//!
//! Mouse button events carry no position in iced, so the mapper remembers
//! the last cursor position it saw.

use crate::domain::geometry::{ScreenPoint, ViewportSize};
use crate::gallery::input::{Key, Modifiers, PointerButton, RawInput};
use iced::event::{self, Event};
use iced::keyboard::{self, key::Named};
use iced::{mouse, touch, window, Point};

#[derive(Debug, Clone, Copy, Default)]
pub struct EventMapper {
    cursor: Option<ScreenPoint>,
}

impl EventMapper {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Maps one runtime event. Pointer and touch presses that a widget
    /// already captured are dropped; a captured key press is forwarded with
    /// `root_focused` cleared.
    pub fn map(&mut self, event: &Event, status: event::Status) -> Option<RawInput> {
        let captured = status == event::Status::Captured;

        match event {
            Event::Keyboard(keyboard::Event::KeyPressed { key, modifiers, .. }) => {
                Some(RawInput::Key {
                    key: map_key(key),
                    modifiers: map_modifiers(*modifiers),
                    root_focused: !captured,
                })
            }
            Event::Mouse(mouse_event) => self.map_mouse(mouse_event, captured),
            Event::Touch(touch_event) => map_touch(touch_event, captured),
            _ => None,
        }
    }

    fn map_mouse(&mut self, event: &mouse::Event, captured: bool) -> Option<RawInput> {
        match event {
            mouse::Event::CursorMoved { position } => {
                let position = to_point(*position);
                self.cursor = Some(position);
                Some(RawInput::PointerMoved(position))
            }
            mouse::Event::CursorLeft => {
                self.cursor = None;
                Some(RawInput::PointerLeft)
            }
            mouse::Event::ButtonPressed(button) if !captured => {
                Some(RawInput::PointerPressed {
                    button: map_button(*button),
                    position: self.cursor?,
                })
            }
            mouse::Event::ButtonReleased(button) if !captured => {
                Some(RawInput::PointerReleased {
                    button: map_button(*button),
                    position: self.cursor?,
                })
            }
            _ => None,
        }
    }
}

/// New window size carried by an open or resize event.
#[must_use]
pub fn window_size(event: &Event) -> Option<ViewportSize> {
    match event {
        Event::Window(window::Event::Opened { size, .. } | window::Event::Resized(size)) => {
            Some(ViewportSize::new(size.width, size.height))
        }
        _ => None,
    }
}

fn map_touch(event: &touch::Event, captured: bool) -> Option<RawInput> {
    match event {
        touch::Event::FingerPressed { id, position } if !captured => Some(RawInput::TouchPressed {
            finger: id.0,
            position: to_point(*position),
        }),
        touch::Event::FingerMoved { id, position } => Some(RawInput::TouchMoved {
            finger: id.0,
            position: to_point(*position),
        }),
        // Lifts and losses always pass so a tracked finger is never left dangling.
        touch::Event::FingerLifted { id, position } => Some(RawInput::TouchLifted {
            finger: id.0,
            position: to_point(*position),
        }),
        touch::Event::FingerLost { id, .. } => Some(RawInput::TouchLost { finger: id.0 }),
        touch::Event::FingerPressed { .. } => None,
    }
}

fn map_key(key: &keyboard::Key) -> Key {
    match key.as_ref() {
        keyboard::Key::Named(Named::ArrowLeft) => Key::ArrowLeft,
        keyboard::Key::Named(Named::ArrowRight) => Key::ArrowRight,
        keyboard::Key::Named(Named::Space) => Key::Space,
        keyboard::Key::Named(Named::Enter) => Key::Enter,
        keyboard::Key::Named(Named::Tab) => Key::Tab,
        keyboard::Key::Named(Named::Escape) => Key::Escape,
        keyboard::Key::Character(" ") => Key::Space,
        keyboard::Key::Character(text) => {
            let mut chars = text.chars();
            match (chars.next(), chars.next()) {
                (Some(c), None) => Key::Character(c),
                _ => Key::Other,
            }
        }
        _ => Key::Other,
    }
}

fn map_modifiers(modifiers: keyboard::Modifiers) -> Modifiers {
    Modifiers {
        shift: modifiers.shift(),
        control: modifiers.control(),
        alt: modifiers.alt(),
        logo: modifiers.logo(),
    }
}

fn map_button(button: mouse::Button) -> PointerButton {
    match button {
        mouse::Button::Left => PointerButton::Primary,
        mouse::Button::Right => PointerButton::Secondary,
        _ => PointerButton::Other,
    }
}

fn to_point(point: Point) -> ScreenPoint {
    ScreenPoint::new(point.x, point.y)
}
