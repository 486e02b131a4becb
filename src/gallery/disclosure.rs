// SPDX-License-Identifier: MPL-2.0
//! Disclosure panel state for the current item's review text.
//!
//! The panel starts open and *untouched*: the text is clamped to a few
//! preview lines. The first toggle marks it touched (optionally after a
//! short delay so the flag does not flip mid-animation), after which the
//! full text is shown. Moving to another item resets everything.

use super::GalleryTimer;
use crate::domain::timing::{PreviewLines, TouchedDelay};
use crate::scheduler::{Scheduler, TimerHandle};
use std::time::Duration;

#[derive(Debug, Clone)]
pub struct DisclosurePanel {
    open: bool,
    touched: bool,
    touched_delay: TouchedDelay,
    preview_lines: PreviewLines,
    pending: Option<TimerHandle>,
}

impl DisclosurePanel {
    #[must_use]
    pub fn new(touched_delay: TouchedDelay, preview_lines: PreviewLines) -> Self {
        Self {
            open: true,
            touched: false,
            touched_delay,
            preview_lines,
            pending: None,
        }
    }

    #[must_use]
    pub fn is_open(&self) -> bool {
        self.open
    }

    #[must_use]
    pub fn is_touched(&self) -> bool {
        self.touched
    }

    /// Line limit for the text, `None` once the panel has been touched.
    #[must_use]
    pub fn preview_lines(&self) -> Option<u16> {
        (!self.touched).then_some(self.preview_lines.value())
    }

    /// Flips `open`. The first interaction schedules the touched flag.
    pub fn toggle(&mut self, now: Duration, timers: &mut Scheduler<GalleryTimer>) {
        self.open = !self.open;

        if self.touched || self.pending.is_some() {
            return;
        }
        if self.touched_delay.millis() == 0 {
            self.touched = true;
        } else {
            self.pending = Some(timers.schedule_after(
                now,
                self.touched_delay.as_duration(),
                GalleryTimer::Touched,
            ));
        }
    }

    /// Applies the delayed touched flag.
    pub fn mark_touched(&mut self) {
        self.pending = None;
        self.touched = true;
    }

    /// Back to `{open: true, touched: false}`, cancelling a pending flag.
    pub fn reset(&mut self, timers: &mut Scheduler<GalleryTimer>) {
        timers.cancel_slot(&mut self.pending);
        self.open = true;
        self.touched = false;
    }
}

impl Default for DisclosurePanel {
    fn default() -> Self {
        Self::new(TouchedDelay::default(), PreviewLines::default())
    }
}
