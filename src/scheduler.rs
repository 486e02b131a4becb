// SPDX-License-Identifier: MPL-2.0
//! Injectable clock and a cancellable timer queue.
//!
//! Every delayed behaviour of the gallery (navigation lock release,
//! long-press detection, the disclosure "touched" delay, the transition
//! auto-clear) is an entry in a [`Scheduler`]. Time is a [`Duration`] since
//! the clock's origin and is always passed in explicitly, so tests drive the
//! state machines with a [`ManualClock`] instead of sleeping.
//!
//! # Example
//!
//! ```
//! use iced_review::scheduler::{Clock, ManualClock, Scheduler};
//! use std::time::Duration;
//!
//! let clock = ManualClock::new();
//! let mut timers = Scheduler::new();
//! let handle = timers.schedule_after(clock.now(), Duration::from_millis(500), "release");
//!
//! clock.advance(Duration::from_millis(499));
//! assert!(timers.drain_due(clock.now()).is_empty());
//!
//! clock.advance(Duration::from_millis(1));
//! assert_eq!(timers.drain_due(clock.now()), vec!["release"]);
//! assert!(!timers.is_pending(handle));
//! ```

use std::cell::Cell;
use std::time::{Duration, Instant};

/// Source of the current time, as an offset from a fixed origin.
pub trait Clock {
    fn now(&self) -> Duration;
}

/// Wall clock anchored at construction.
#[derive(Debug, Clone, Copy)]
pub struct SystemClock {
    origin: Instant,
}

impl SystemClock {
    #[must_use]
    pub fn new() -> Self {
        Self {
            origin: Instant::now(),
        }
    }

    /// Converts an `Instant` delivered by the runtime (ticks, frames) into
    /// clock time. Instants before the origin map to zero.
    #[must_use]
    pub fn at(&self, instant: Instant) -> Duration {
        instant.saturating_duration_since(self.origin)
    }
}

impl Default for SystemClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for SystemClock {
    fn now(&self) -> Duration {
        self.origin.elapsed()
    }
}

/// Clock that only moves when told to.
#[derive(Debug, Default)]
pub struct ManualClock {
    now: Cell<Duration>,
}

impl ManualClock {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn advance(&self, by: Duration) {
        self.now.set(self.now.get() + by);
    }

    pub fn advance_ms(&self, millis: u64) {
        self.advance(Duration::from_millis(millis));
    }

    pub fn set(&self, to: Duration) {
        self.now.set(to);
    }
}

impl Clock for ManualClock {
    fn now(&self) -> Duration {
        self.now.get()
    }
}

/// Handle returned by [`Scheduler::schedule`], used to cancel a timer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TimerHandle(u64);

#[derive(Debug, Clone)]
struct Entry<T> {
    handle: TimerHandle,
    deadline: Duration,
    payload: T,
}

/// Queue of pending timers carrying a payload of type `T`.
///
/// Timers fire in deadline order; timers with the same deadline fire in
/// scheduling order.
#[derive(Debug, Clone)]
pub struct Scheduler<T> {
    next_id: u64,
    entries: Vec<Entry<T>>,
}

impl<T> Default for Scheduler<T> {
    fn default() -> Self {
        Self {
            next_id: 0,
            entries: Vec::new(),
        }
    }
}

impl<T> Scheduler<T> {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Schedules `payload` to fire at `deadline`.
    pub fn schedule(&mut self, deadline: Duration, payload: T) -> TimerHandle {
        let handle = TimerHandle(self.next_id);
        self.next_id += 1;
        self.entries.push(Entry {
            handle,
            deadline,
            payload,
        });
        handle
    }

    /// Schedules `payload` to fire `delay` after `now`.
    pub fn schedule_after(&mut self, now: Duration, delay: Duration, payload: T) -> TimerHandle {
        self.schedule(now + delay, payload)
    }

    /// Cancels a pending timer. Returns `false` if it already fired or was
    /// cancelled.
    pub fn cancel(&mut self, handle: TimerHandle) -> bool {
        let before = self.entries.len();
        self.entries.retain(|entry| entry.handle != handle);
        self.entries.len() != before
    }

    /// Cancels the timer in `slot`, if any, leaving the slot empty.
    pub fn cancel_slot(&mut self, slot: &mut Option<TimerHandle>) {
        if let Some(handle) = slot.take() {
            self.cancel(handle);
        }
    }

    #[must_use]
    pub fn is_pending(&self, handle: TimerHandle) -> bool {
        self.entries.iter().any(|entry| entry.handle == handle)
    }

    #[must_use]
    pub fn has_pending(&self) -> bool {
        !self.entries.is_empty()
    }

    #[must_use]
    pub fn next_deadline(&self) -> Option<Duration> {
        self.entries.iter().map(|entry| entry.deadline).min()
    }

    /// Removes and returns every payload whose deadline is `<= now`.
    pub fn drain_due(&mut self, now: Duration) -> Vec<T> {
        let (mut due, pending): (Vec<_>, Vec<_>) = std::mem::take(&mut self.entries)
            .into_iter()
            .partition(|entry| entry.deadline <= now);
        self.entries = pending;

        due.sort_by_key(|entry| (entry.deadline, entry.handle.0));
        due.into_iter().map(|entry| entry.payload).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ms(value: u64) -> Duration {
        Duration::from_millis(value)
    }

    #[test]
    fn timers_fire_in_deadline_then_schedule_order() {
        let mut timers = Scheduler::new();
        timers.schedule(ms(30), "c");
        timers.schedule(ms(10), "a");
        timers.schedule(ms(10), "b");

        assert_eq!(timers.drain_due(ms(30)), vec!["a", "b", "c"]);
        assert!(!timers.has_pending());
    }

    #[test]
    fn cancelled_timer_never_fires() {
        let mut timers = Scheduler::new();
        let handle = timers.schedule(ms(10), 1);
        assert!(timers.cancel(handle));
        assert!(!timers.cancel(handle));
        assert!(timers.drain_due(ms(100)).is_empty());
    }

    #[test]
    fn cancel_slot_empties_the_slot() {
        let mut timers = Scheduler::new();
        let mut slot = Some(timers.schedule(ms(10), ()));
        timers.cancel_slot(&mut slot);
        assert!(slot.is_none());
        assert!(!timers.has_pending());
    }

    #[test]
    fn next_deadline_tracks_earliest() {
        let mut timers = Scheduler::new();
        assert_eq!(timers.next_deadline(), None);
        timers.schedule(ms(50), ());
        timers.schedule(ms(20), ());
        assert_eq!(timers.next_deadline(), Some(ms(20)));
    }

    #[test]
    fn drain_leaves_future_timers() {
        let mut timers = Scheduler::new();
        timers.schedule(ms(5), "now");
        let later = timers.schedule(ms(50), "later");
        assert_eq!(timers.drain_due(ms(10)), vec!["now"]);
        assert!(timers.is_pending(later));
    }

    #[test]
    fn system_clock_maps_instants_after_origin() {
        let clock = SystemClock::new();
        let later = Instant::now() + ms(5);
        assert!(clock.at(later) >= ms(5));
    }

    #[test]
    fn manual_clock_advances() {
        let clock = ManualClock::new();
        clock.advance_ms(120);
        clock.advance(ms(30));
        assert_eq!(clock.now(), ms(150));
        clock.set(ms(5));
        assert_eq!(clock.now(), ms(5));
    }
}
