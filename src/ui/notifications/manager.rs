// SPDX-License-Identifier: MPL-2.0
//! Toast stack for copy, share and config feedback.
//!
//! At most [`MAX_VISIBLE`] toasts are on screen; later ones wait their turn
//! and are shown in arrival order once a slot frees up.

use super::notification::{Notification, NotificationId, Severity};
use std::collections::VecDeque;
use std::time::Instant;

/// Maximum number of toasts on screen.
const MAX_VISIBLE: usize = 3;

#[derive(Debug, Clone)]
pub enum Message {
    Dismiss(NotificationId),
    /// Expires toasts whose severity has a timeout.
    Tick(Instant),
}

#[derive(Debug, Default)]
pub struct Manager {
    /// Newest first.
    shown: VecDeque<Notification>,
    waiting: VecDeque<Notification>,
}

impl Manager {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, notification: Notification) {
        match notification.severity() {
            Severity::Warning => tracing::warn!("Notification: {}", notification.message_key()),
            Severity::Error => tracing::error!("Notification: {}", notification.message_key()),
            Severity::Success | Severity::Info => {}
        }

        if self.shown.len() < MAX_VISIBLE {
            self.shown.push_front(notification);
        } else {
            self.waiting.push_back(notification);
        }
    }

    pub fn dismiss(&mut self, id: NotificationId) {
        let before = self.shown.len();
        self.shown.retain(|n| n.id() != id);
        if self.shown.len() == before {
            self.waiting.retain(|n| n.id() != id);
            return;
        }
        while self.shown.len() < MAX_VISIBLE {
            let Some(next) = self.waiting.pop_front() else {
                break;
            };
            self.shown.push_back(next);
        }
    }

    /// Dismisses every shown toast that has expired at `now`.
    pub fn tick(&mut self, now: Instant) {
        let expired: Vec<NotificationId> = self
            .shown
            .iter()
            .filter(|n| n.should_auto_dismiss(now))
            .map(Notification::id)
            .collect();

        for id in expired {
            self.dismiss(id);
        }
    }

    pub fn handle_message(&mut self, message: &Message) {
        match message {
            Message::Dismiss(id) => self.dismiss(*id),
            Message::Tick(now) => self.tick(*now),
        }
    }

    pub fn visible(&self) -> impl Iterator<Item = &Notification> {
        self.shown.iter()
    }

    /// Whether anything is shown or waiting. Keeps the tick subscription alive.
    #[must_use]
    pub fn has_notifications(&self) -> bool {
        !self.shown.is_empty() || !self.waiting.is_empty()
    }
}
