// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for all configuration constants.
//!
//! This module serves as the single source of truth for default values
//! used across the application. Timing bounds live with their newtypes in
//! [`crate::domain::timing::bounds`] and are re-exported here.
//!
//! # Categories
//!
//! - **Timing**: Lock window, long-press, disclosure and overlay timings
//! - **Share**: Permalink base URL
//! - **Catalog**: Item catalog location and rich-text cache size
//! - **Grid**: Thumbnail grid layout

pub use crate::domain::timing::bounds::*;

// ==========================================================================
// Share Defaults
// ==========================================================================

/// Base URL permalinks are built from (`{base}?img={ordinal}`).
pub const DEFAULT_BASE_URL: &str = "http://localhost:3000";

// ==========================================================================
// Catalog Defaults
// ==========================================================================

/// Catalog file looked up next to the config file when none is given.
pub const DEFAULT_CATALOG_FILE: &str = "catalog.toml";

/// Number of rendered rich-text payloads kept in memory.
pub const DEFAULT_RICH_TEXT_CACHE: usize = 64;

/// Minimum rich-text cache capacity.
pub const MIN_RICH_TEXT_CACHE: usize = 1;

/// Maximum rich-text cache capacity.
pub const MAX_RICH_TEXT_CACHE: usize = 4_096;

// ==========================================================================
// Grid Defaults
// ==========================================================================

/// Smallest width a grid cell may shrink to before a column is dropped.
pub const GRID_MIN_CELL_WIDTH: f32 = 180.0;

/// Gap between grid cells.
pub const GRID_GAP: f32 = 8.0;

/// Padding around the grid.
pub const GRID_PADDING: f32 = 16.0;
