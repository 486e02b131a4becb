// SPDX-License-Identifier: MPL-2.0
//! Timing and sizing newtypes for the gallery.
//!
//! Every product-tuned constant of the gallery (lock window, long-press
//! threshold, overlay timings, preview length) is configuration. These
//! wrappers clamp raw configuration values into a usable range so the
//! state machines never see nonsensical durations.

use std::time::Duration;

// =============================================================================
// Bounds
// =============================================================================

/// Bounds for all gallery timings, in milliseconds unless noted.
pub mod bounds {
    /// Transition lock window (carousel variant).
    pub const DEFAULT_LOCK_WINDOW_MS: u64 = 500;
    pub const MAX_LOCK_WINDOW_MS: u64 = 2_000;

    /// Long-press threshold for touch input.
    pub const DEFAULT_LONG_PRESS_MS: u64 = 500;
    pub const MIN_LONG_PRESS_MS: u64 = 150;
    pub const MAX_LONG_PRESS_MS: u64 = 2_000;

    /// Finger travel (logical px) below which a touch still counts as a tap.
    pub const DEFAULT_TAP_SLOP_PX: f32 = 10.0;
    pub const MIN_TAP_SLOP_PX: f32 = 1.0;
    pub const MAX_TAP_SLOP_PX: f32 = 64.0;

    /// Delay before the disclosure panel is marked as touched.
    pub const DEFAULT_TOUCHED_DELAY_MS: u64 = 200;
    pub const MAX_TOUCHED_DELAY_MS: u64 = 1_000;

    /// Lines shown before the disclosure panel has been touched.
    pub const DEFAULT_PREVIEW_LINES: u16 = 3;
    pub const MIN_PREVIEW_LINES: u16 = 1;
    pub const MAX_PREVIEW_LINES: u16 = 12;

    /// Geometry animation of the transition overlay.
    pub const DEFAULT_ANIMATION_MS: u64 = 300;
    pub const MIN_ANIMATION_MS: u64 = 50;
    pub const MAX_ANIMATION_MS: u64 = 2_000;

    /// Margin added on top of the animation before the overlay clears.
    pub const DEFAULT_CLEAR_AFTER_MS: u64 = 350;
}

/// Defines a millisecond newtype clamped into `[min, max]`.
macro_rules! millis_newtype {
    ($(#[$doc:meta])* $name:ident, $min:expr, $max:expr, $default:expr) => {
        $(#[$doc])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
        pub struct $name(u64);

        impl $name {
            /// Creates the value, clamping to the valid range.
            #[must_use]
            pub fn new(millis: u64) -> Self {
                Self(millis.clamp($min, $max))
            }

            /// Returns the value in milliseconds.
            #[must_use]
            pub fn millis(self) -> u64 {
                self.0
            }

            #[must_use]
            pub fn as_duration(self) -> Duration {
                Duration::from_millis(self.0)
            }
        }

        impl Default for $name {
            fn default() -> Self {
                Self($default)
            }
        }
    };
}

millis_newtype!(
    /// How long navigation stays locked after a successful advance.
    LockWindow,
    0,
    bounds::MAX_LOCK_WINDOW_MS,
    bounds::DEFAULT_LOCK_WINDOW_MS
);

millis_newtype!(
    /// How long a finger must rest before the touch becomes a long-press.
    ///
    /// # Example
    ///
    /// ```
    /// use iced_review::domain::timing::LongPressThreshold;
    ///
    /// assert_eq!(LongPressThreshold::default().millis(), 500);
    /// assert_eq!(LongPressThreshold::new(10).millis(), 150); // clamped
    /// ```
    LongPressThreshold,
    bounds::MIN_LONG_PRESS_MS,
    bounds::MAX_LONG_PRESS_MS,
    bounds::DEFAULT_LONG_PRESS_MS
);

millis_newtype!(
    /// Delay before the first disclosure interaction marks the panel touched.
    /// Zero applies the flag immediately.
    TouchedDelay,
    0,
    bounds::MAX_TOUCHED_DELAY_MS,
    bounds::DEFAULT_TOUCHED_DELAY_MS
);

millis_newtype!(
    /// Duration of the overlay's geometry and backdrop animation.
    AnimationDuration,
    bounds::MIN_ANIMATION_MS,
    bounds::MAX_ANIMATION_MS,
    bounds::DEFAULT_ANIMATION_MS
);

/// Time after `begin` at which the transition overlay clears itself.
///
/// Always strictly longer than the animation it belongs to, so the morph is
/// visually complete before the descriptor is dropped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClearDelay(u64);

impl ClearDelay {
    /// Creates the delay, raised to at least `animation + 1ms`.
    #[must_use]
    pub fn new(millis: u64, animation: AnimationDuration) -> Self {
        Self(millis.max(animation.millis() + 1))
    }

    #[must_use]
    pub fn millis(self) -> u64 {
        self.0
    }

    #[must_use]
    pub fn as_duration(self) -> Duration {
        Duration::from_millis(self.0)
    }
}

impl Default for ClearDelay {
    fn default() -> Self {
        Self(bounds::DEFAULT_CLEAR_AFTER_MS)
    }
}

/// Finger travel below which a touch is still a tap.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TapSlop(f32);

impl TapSlop {
    #[must_use]
    pub fn new(px: f32) -> Self {
        if px.is_finite() {
            Self(px.clamp(bounds::MIN_TAP_SLOP_PX, bounds::MAX_TAP_SLOP_PX))
        } else {
            Self::default()
        }
    }

    #[must_use]
    pub fn value(self) -> f32 {
        self.0
    }
}

impl Default for TapSlop {
    fn default() -> Self {
        Self(bounds::DEFAULT_TAP_SLOP_PX)
    }
}

/// Number of lines the disclosure text is clamped to before first touch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PreviewLines(u16);

impl PreviewLines {
    #[must_use]
    pub fn new(lines: u16) -> Self {
        Self(lines.clamp(bounds::MIN_PREVIEW_LINES, bounds::MAX_PREVIEW_LINES))
    }

    #[must_use]
    pub fn value(self) -> u16 {
        self.0
    }
}

impl Default for PreviewLines {
    fn default() -> Self {
        Self(bounds::DEFAULT_PREVIEW_LINES)
    }
}
