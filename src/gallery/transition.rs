// SPDX-License-Identifier: MPL-2.0
//! Shared-element transition between a grid thumbnail and the detail view.
//!
//! The grid captures the thumbnail's on-screen rectangle and calls
//! [`TransitionCoordinator::begin`] before switching screens. The
//! coordinator holds that single in-flight descriptor and produces an
//! [`OverlayFrame`] per rendered frame:
//!
//! ```text
//!  begin ──► Pinned ──(first frame)──► Expanding ──(clear timer)──► Idle
//!            source rect                 eased toward the viewport
//!            transparent backdrop        backdrop fades to black
//!            cover fit                   contain fit
//! ```
//!
//! A second `begin` while animating replaces the descriptor (last write
//! wins) and restarts the clear timer. There is no manual cancel.

use crate::domain::geometry::{ScreenRect, ViewportSize};
use crate::domain::item::{MediaRef, Ordinal};
use crate::domain::timing::{AnimationDuration, ClearDelay};
use crate::scheduler::{Scheduler, TimerHandle};
use std::time::Duration;

/// Geometry easing of the overlay: `cubic-bezier(0.4, 0, 0.2, 1)`.
pub const GEOMETRY_EASING: CubicBezier = CubicBezier::new(0.4, 0.0, 0.2, 1.0);

/// Backdrop fade easing: CSS `ease-out`.
pub const BACKDROP_EASING: CubicBezier = CubicBezier::new(0.0, 0.0, 0.58, 1.0);

/// A CSS-style cubic Bézier timing function through (0,0) and (1,1).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CubicBezier {
    x1: f32,
    y1: f32,
    x2: f32,
    y2: f32,
}

impl CubicBezier {
    #[must_use]
    pub const fn new(x1: f32, y1: f32, x2: f32, y2: f32) -> Self {
        Self { x1, y1, x2, y2 }
    }

    fn sample(a1: f32, a2: f32, t: f32) -> f32 {
        // B(t) = 3(1-t)^2 t a1 + 3(1-t) t^2 a2 + t^3
        let u = 1.0 - t;
        3.0 * u * u * t * a1 + 3.0 * u * t * t * a2 + t * t * t
    }

    fn sample_derivative(a1: f32, a2: f32, t: f32) -> f32 {
        let u = 1.0 - t;
        3.0 * u * u * a1 + 6.0 * u * t * (a2 - a1) + 3.0 * t * t * (1.0 - a2)
    }

    /// Eased progress for linear progress `x` in `[0, 1]`.
    #[must_use]
    pub fn ease(&self, x: f32) -> f32 {
        let x = x.clamp(0.0, 1.0);
        if x == 0.0 || x == 1.0 {
            return x;
        }

        // Newton-Raphson, falling back to bisection when the slope is flat.
        let mut t = x;
        for _ in 0..8 {
            let error = Self::sample(self.x1, self.x2, t) - x;
            if error.abs() < 1e-5 {
                return Self::sample(self.y1, self.y2, t);
            }
            let slope = Self::sample_derivative(self.x1, self.x2, t);
            if slope.abs() < 1e-6 {
                break;
            }
            t = (t - error / slope).clamp(0.0, 1.0);
        }

        let (mut low, mut high) = (0.0_f32, 1.0_f32);
        t = x;
        for _ in 0..32 {
            let value = Self::sample(self.x1, self.x2, t);
            if (value - x).abs() < 1e-5 {
                break;
            }
            if value < x {
                low = t;
            } else {
                high = t;
            }
            t = (low + high) / 2.0;
        }
        Self::sample(self.y1, self.y2, t)
    }
}

/// What the grid hands to the detail view.
#[derive(Debug, Clone, PartialEq)]
pub struct TransitionDescriptor {
    pub media: MediaRef,
    pub ordinal: Ordinal,
    /// `None` when the thumbnail could not be measured.
    pub source_rect: Option<ScreenRect>,
}

/// How the overlay image fits its rectangle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Fit {
    Cover,
    Contain,
}

/// One rendered state of the overlay.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OverlayFrame {
    pub rect: ScreenRect,
    /// Backdrop opacity, `0.0` transparent to `1.0` black.
    pub backdrop_alpha: f32,
    pub fit: Fit,
}

#[derive(Debug, Clone, Copy, PartialEq)]
enum Phase {
    /// Drawn over the source thumbnail, waiting for the first frame.
    Pinned,
    Expanding { since: Duration },
}

#[derive(Debug, Clone)]
struct Active {
    descriptor: TransitionDescriptor,
    phase: Phase,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum TransitionTimer {
    Clear,
}

/// Single process-wide owner of the in-flight transition.
#[derive(Debug, Clone)]
pub struct TransitionCoordinator {
    active: Option<Active>,
    animation: AnimationDuration,
    clear_after: ClearDelay,
    timers: Scheduler<TransitionTimer>,
    clear: Option<TimerHandle>,
}

impl TransitionCoordinator {
    #[must_use]
    pub fn new(animation: AnimationDuration, clear_after: ClearDelay) -> Self {
        Self {
            active: None,
            animation,
            clear_after: ClearDelay::new(clear_after.millis(), animation),
            timers: Scheduler::new(),
            clear: None,
        }
    }

    #[must_use]
    pub fn is_animating(&self) -> bool {
        self.active.is_some()
    }

    /// The in-flight descriptor, if any.
    #[must_use]
    pub fn descriptor(&self) -> Option<&TransitionDescriptor> {
        self.active.as_ref().map(|active| &active.descriptor)
    }

    /// When the overlay will clear, for scheduling ticks.
    #[must_use]
    pub fn next_deadline(&self) -> Option<Duration> {
        self.timers.next_deadline()
    }

    /// Starts (or restarts) a transition.
    pub fn begin(&mut self, descriptor: TransitionDescriptor, now: Duration) {
        if let Some(previous) = &self.active {
            tracing::debug!(
                "Transition to {} replaced by {}",
                previous.descriptor.ordinal,
                descriptor.ordinal
            );
        } else {
            tracing::debug!(
                "Transition to {} started (source rect: {})",
                descriptor.ordinal,
                descriptor.source_rect.is_some()
            );
        }

        self.active = Some(Active {
            descriptor,
            phase: Phase::Pinned,
        });
        self.timers.cancel_slot(&mut self.clear);
        self.clear = Some(self.timers.schedule_after(
            now,
            self.clear_after.as_duration(),
            TransitionTimer::Clear,
        ));
    }

    /// Notifies the coordinator that a frame has been presented.
    pub fn on_frame(&mut self, now: Duration) {
        if let Some(active) = &mut self.active {
            if active.phase == Phase::Pinned {
                active.phase = Phase::Expanding { since: now };
            }
        }
    }

    /// Fires due timers. Returns `true` if the transition ended.
    pub fn advance_time(&mut self, now: Duration) -> bool {
        let mut ended = false;
        for timer in self.timers.drain_due(now) {
            match timer {
                TransitionTimer::Clear => {
                    self.clear = None;
                    self.end();
                    ended = true;
                }
            }
        }
        ended
    }

    fn end(&mut self) {
        if let Some(active) = self.active.take() {
            tracing::debug!("Transition to {} cleared", active.descriptor.ordinal);
        }
    }

    /// Overlay state for a frame at `now`, or `None` when nothing is drawn.
    #[must_use]
    pub fn frame(&self, viewport: ViewportSize, now: Duration) -> Option<OverlayFrame> {
        let active = self.active.as_ref()?;
        let source = active.descriptor.source_rect?;

        match active.phase {
            Phase::Pinned => Some(OverlayFrame {
                rect: source,
                backdrop_alpha: 0.0,
                fit: Fit::Cover,
            }),
            Phase::Expanding { since } => {
                let elapsed = now.saturating_sub(since).as_secs_f32();
                let progress = (elapsed / self.animation.as_duration().as_secs_f32()).min(1.0);
                let target = ScreenRect::covering(viewport);
                Some(OverlayFrame {
                    rect: source.lerp(target, GEOMETRY_EASING.ease(progress)),
                    backdrop_alpha: BACKDROP_EASING.ease(progress),
                    fit: Fit::Contain,
                })
            }
        }
    }
}

impl Default for TransitionCoordinator {
    fn default() -> Self {
        Self::new(AnimationDuration::default(), ClearDelay::default())
    }
}
