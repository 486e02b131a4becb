// SPDX-License-Identifier: MPL-2.0
//! Navigation controller: current position and the transition lock.
//!
//! Positions are array indices into the collection; ordinals are only used
//! to seed the position and to answer "which item is this". Stepping wraps
//! in both directions.

use super::GalleryTimer;
use crate::domain::item::{Collection, Ordinal};
use crate::domain::timing::LockWindow;
use crate::scheduler::{Scheduler, TimerHandle};
use std::time::Duration;

/// Direction of a navigation step.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    /// Step to the previous item (wraps to the last).
    Previous,
    /// Step to the next item (wraps to the first).
    Next,
}

/// Position within a non-empty collection plus the optional transition lock.
#[derive(Debug, Clone)]
pub struct NavigationController {
    ordinals: Vec<Ordinal>,
    position: usize,
    lock_window: Option<LockWindow>,
    lock: Option<TimerHandle>,
}

impl NavigationController {
    /// Creates a controller over `collection`.
    ///
    /// The position is seeded from `requested` by a linear scan for the
    /// first item carrying that ordinal; unknown or absent ordinals start at
    /// position 0. `lock_window = None` disables the lock entirely.
    #[must_use]
    pub fn new(
        collection: &Collection,
        requested: Option<Ordinal>,
        lock_window: Option<LockWindow>,
    ) -> Self {
        let position = match requested {
            Some(ordinal) => collection.position_of(ordinal).unwrap_or_else(|| {
                tracing::debug!("Requested ordinal {} not in collection, starting at 0", ordinal);
                0
            }),
            None => 0,
        };

        Self {
            ordinals: collection.iter().map(|item| item.ordinal).collect(),
            position,
            lock_window: lock_window.filter(|window| window.millis() > 0),
            lock: None,
        }
    }

    #[must_use]
    pub fn position(&self) -> usize {
        self.position
    }

    #[must_use]
    #[allow(clippy::len_without_is_empty)]
    pub fn len(&self) -> usize {
        self.ordinals.len()
    }

    #[must_use]
    pub fn current_ordinal(&self) -> Ordinal {
        self.ordinals[self.position]
    }

    #[must_use]
    pub fn is_locked(&self) -> bool {
        self.lock.is_some()
    }

    /// Steps one item in `direction`, wrapping around the ends.
    ///
    /// Returns `false` (and changes nothing) while the lock is held. A
    /// successful step takes the lock when a lock window is configured.
    pub fn advance(
        &mut self,
        direction: Direction,
        now: Duration,
        timers: &mut Scheduler<GalleryTimer>,
    ) -> bool {
        if self.is_locked() {
            tracing::trace!("Navigation suppressed while transition lock is held");
            return false;
        }

        let len = self.ordinals.len();
        self.position = match direction {
            Direction::Previous => (self.position + len - 1) % len,
            Direction::Next => (self.position + 1) % len,
        };

        if let Some(window) = self.lock_window {
            self.lock =
                Some(timers.schedule_after(now, window.as_duration(), GalleryTimer::LockReleased));
        }

        tracing::debug!(
            "Navigated {:?} to position {} (ordinal {})",
            direction,
            self.position,
            self.current_ordinal()
        );
        true
    }

    /// Jumps to the first item carrying `ordinal`.
    ///
    /// Not gated by the lock. Returns `false` if no item matches.
    pub fn go_to(&mut self, ordinal: Ordinal) -> bool {
        match self.ordinals.iter().position(|candidate| *candidate == ordinal) {
            Some(position) => {
                self.position = position;
                true
            }
            None => {
                tracing::debug!("go_to: ordinal {} not found", ordinal);
                false
            }
        }
    }

    /// Releases the lock when its timer fires.
    pub fn release_lock(&mut self) {
        self.lock = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::item::fixtures::collection;
    use crate::scheduler::{Clock, ManualClock};

    fn drive(nav: &mut NavigationController, timers: &mut Scheduler<GalleryTimer>, now: Duration) {
        for timer in timers.drain_due(now) {
            if timer == GalleryTimer::LockReleased {
                nav.release_lock();
            }
        }
    }

    #[test]
    fn wraps_in_both_directions() {
        let items = collection(&[10, 20, 30]);
        let mut timers = Scheduler::new();
        let mut nav = NavigationController::new(&items, None, None);

        assert!(nav.advance(Direction::Previous, Duration::ZERO, &mut timers));
        assert_eq!(nav.position(), 2);
        assert!(nav.advance(Direction::Next, Duration::ZERO, &mut timers));
        assert_eq!(nav.position(), 0);
    }

    #[test]
    fn len_round_trip_returns_to_start() {
        let items = collection(&[1, 2, 3, 4, 5]);
        let mut timers = Scheduler::new();
        let mut nav = NavigationController::new(&items, Some(Ordinal::new(3)), None);
        let start = nav.position();

        for _ in 0..items.len() {
            nav.advance(Direction::Next, Duration::ZERO, &mut timers);
        }
        assert_eq!(nav.position(), start);
        for _ in 0..items.len() {
            nav.advance(Direction::Previous, Duration::ZERO, &mut timers);
        }
        assert_eq!(nav.position(), start);
    }

    #[test]
    fn single_item_wraps_onto_itself() {
        let items = collection(&[42]);
        let mut timers = Scheduler::new();
        let mut nav = NavigationController::new(&items, None, None);
        assert!(nav.advance(Direction::Next, Duration::ZERO, &mut timers));
        assert_eq!(nav.position(), 0);
        assert_eq!(nav.current_ordinal(), Ordinal::new(42));
    }

    #[test]
    fn seeds_from_requested_ordinal_or_zero() {
        let items = collection(&[5, 9, 13]);
        assert_eq!(
            NavigationController::new(&items, Some(Ordinal::new(13)), None).position(),
            2
        );
        assert_eq!(
            NavigationController::new(&items, Some(Ordinal::new(99)), None).position(),
            0
        );
    }

    #[test]
    fn lock_suppresses_advances_until_window_elapses() {
        let items = collection(&[1, 2, 3, 4]);
        let clock = ManualClock::new();
        let mut timers = Scheduler::new();
        let mut nav = NavigationController::new(&items, None, Some(LockWindow::new(500)));

        assert!(nav.advance(Direction::Next, clock.now(), &mut timers));
        clock.advance_ms(100);
        drive(&mut nav, &mut timers, clock.now());
        assert!(!nav.advance(Direction::Next, clock.now(), &mut timers));
        clock.advance_ms(200);
        drive(&mut nav, &mut timers, clock.now());
        assert!(!nav.advance(Direction::Previous, clock.now(), &mut timers));
        assert_eq!(nav.position(), 1);

        clock.advance_ms(200);
        drive(&mut nav, &mut timers, clock.now());
        assert!(nav.advance(Direction::Next, clock.now(), &mut timers));
        assert_eq!(nav.position(), 2);
    }

    #[test]
    fn zero_lock_window_disables_lock() {
        let items = collection(&[1, 2, 3]);
        let mut timers = Scheduler::new();
        let mut nav = NavigationController::new(&items, None, Some(LockWindow::new(0)));
        assert!(nav.advance(Direction::Next, Duration::ZERO, &mut timers));
        assert!(nav.advance(Direction::Next, Duration::ZERO, &mut timers));
        assert!(!timers.has_pending());
    }

    #[test]
    fn go_to_ignores_lock_and_unknown_ordinals() {
        let items = collection(&[4, 8, 15, 16]);
        let mut timers = Scheduler::new();
        let mut nav = NavigationController::new(&items, None, Some(LockWindow::default()));

        nav.advance(Direction::Next, Duration::ZERO, &mut timers);
        assert!(nav.is_locked());
        assert!(nav.go_to(Ordinal::new(16)));
        assert_eq!(nav.position(), 3);
        assert!(!nav.go_to(Ordinal::new(23)));
        assert_eq!(nav.position(), 3);
    }
}
