// SPDX-License-Identifier: MPL-2.0
//! User interface components.
//!
//! Views follow the Elm-style "state down, messages up" pattern: they read
//! gallery state and emit messages, and never mutate anything themselves.
//!
//! # Screens
//!
//! - [`grid`] - Thumbnail grid; captures the selected thumbnail's rectangle
//! - [`viewer`] - Detail view with navigation halves and the caption panel
//! - [`wall`] - Every review rendered as one document
//! - [`empty_state`] - Fallback when the catalog is empty or unreadable
//!
//! # Layers
//!
//! - [`overlay`] - Shared-element transition overlay
//! - [`context_menu`] - Menu opened by right-click or long-press
//! - [`notifications`] - Toast notification system for user feedback
//!
//! # Shared Infrastructure
//!
//! - [`events`] - iced runtime events to gallery raw input
//! - [`markdown`] - Widgets for rendered review text
//! - [`media`] - Image widgets with a placeholder for remote media
//! - [`styles`] - Centralized widget styles
//! - [`design_tokens`] - Design system constants (colors, spacing, sizing)

pub mod context_menu;
pub mod design_tokens;
pub mod empty_state;
pub mod events;
pub mod grid;
pub mod markdown;
pub mod media;
pub mod notifications;
pub mod overlay;
pub mod styles;
pub mod viewer;
pub mod wall;
