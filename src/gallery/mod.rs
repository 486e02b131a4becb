// SPDX-License-Identifier: MPL-2.0
//! Single-item gallery core.
//!
//! Pure state machines, independent of rendering:
//!
//! ```text
//! component.rs (orchestrator)
//!     ├── input       - raw events → intents, affordances, long-press
//!     ├── navigation  - position, wrap-around, transition lock
//!     ├── disclosure  - open/touched state of the review text
//!     ├── rich_text   - Markdown rendering and its cache
//!     └── share       - permalinks and share fallback
//! transition.rs       - shared-element overlay, owned by the app
//! ```
//!
//! Every delayed behaviour is a [`GalleryTimer`] in a
//! [`Scheduler`](crate::scheduler::Scheduler) owned by the component and
//! driven with explicit time.

pub mod component;
pub mod disclosure;
pub mod input;
pub mod navigation;
pub mod rich_text;
pub mod share;
pub mod transition;

pub use component::{Effect, Gallery, GallerySettings, Message};
pub use navigation::Direction;

/// Timers scheduled by the gallery sub-components.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GalleryTimer {
    /// The navigation lock window elapsed.
    LockReleased,
    /// A touch has rested for the long-press threshold.
    LongPress { finger: input::FingerId },
    /// The disclosure panel's touched delay elapsed.
    Touched,
}
