// SPDX-License-Identifier: MPL-2.0
//! Event, tick and frame subscriptions for the application.

use super::Message;
use iced::{event, keyboard, time, window, Event, Subscription};
use std::time::Duration;

/// Interval of the timer tick. Short enough that lock releases, long-press
/// detection and the overlay clear land within a frame of their deadline.
pub const TICK_INTERVAL: Duration = Duration::from_millis(16);

/// Forwards the runtime events the gallery consumes, with their capture
/// status.
pub fn create_event_subscription() -> Subscription<Message> {
    event::listen_with(|event, status, _window_id| {
        let forwarded = matches!(
            event,
            Event::Keyboard(keyboard::Event::KeyPressed { .. })
                | Event::Mouse(_)
                | Event::Touch(_)
                | Event::Window(window::Event::Opened { .. } | window::Event::Resized(_))
        );
        forwarded.then_some(Message::Event(event, status))
    })
}

/// Ticks while any scheduled timer or toast is pending.
pub fn create_tick_subscription(
    has_pending_timers: bool,
    has_notifications: bool,
) -> Subscription<Message> {
    if has_pending_timers || has_notifications {
        time::every(TICK_INTERVAL).map(Message::Tick)
    } else {
        Subscription::none()
    }
}

/// Frame notifications while the transition overlay is animating.
pub fn create_frame_subscription(is_animating: bool) -> Subscription<Message> {
    if is_animating {
        window::frames().map(Message::Frame)
    } else {
        Subscription::none()
    }
}
