// SPDX-License-Identifier: MPL-2.0
//! Domain layer - Core gallery types with ZERO external dependencies.
//!
//! This module contains pure domain types, value objects, and business rules.
//! It has no dependencies on external crates (except `std`) to ensure
//! testability and architectural purity.
//!
//! # Modules
//!
//! - [`item`]: Gallery items ([`Item`](item::Item), [`Ordinal`](item::Ordinal),
//!   [`Collection`](item::Collection))
//! - [`geometry`]: Screen-space values ([`ScreenRect`](geometry::ScreenRect),
//!   [`ViewportSize`](geometry::ViewportSize))
//! - [`location`]: Location tags and badges ([`LocationTag`](location::LocationTag))
//! - [`timing`]: Clamped timing newtypes ([`LockWindow`](timing::LockWindow),
//!   [`LongPressThreshold`](timing::LongPressThreshold), [`ClearDelay`](timing::ClearDelay))

pub mod geometry;
pub mod item;
pub mod location;
pub mod timing;
