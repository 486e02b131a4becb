// SPDX-License-Identifier: MPL-2.0
//! This module loads the application's configuration from a `settings.toml`
//! file.
//!
//! # Configuration Sections
//!
//! The configuration is organized into logical sections:
//! - `[general]` - Language
//! - `[gallery]` - Variant, lock window, touch session, share base URL
//! - `[input]` - Long-press threshold and tap slop
//! - `[disclosure]` - Preview length and touched delay
//! - `[transition]` - Overlay animation timings
//! - `[catalog]` - Catalog path and rich-text cache size
//!
//! Every timing is plain configuration; values are clamped through the
//! newtypes in [`crate::domain::timing`] when they are read.
//!
//! # Path Resolution
//!
//! The config file location can be customized for testing or portable deployments:
//! 1. Use `load_from_path()` with an explicit path
//! 2. Set `ICED_REVIEW_CONFIG_DIR` environment variable
//! 3. Falls back to platform-specific config directory
//!
//! # Examples
//!
//! ```no_run
//! use iced_review::config::{self, Config};
//!
//! // Load existing configuration (returns tuple with optional warning)
//! let (config, warning) = config::load();
//! if let Some(key) = warning {
//!     eprintln!("using defaults: {key}");
//! }
//!
//! // Read clamped values
//! let long_press = config.long_press();
//! println!("long-press after {} ms", long_press.millis());
//! ```

pub mod defaults;

pub use defaults::*;

use crate::app::paths;
use crate::domain::timing::{
    AnimationDuration, ClearDelay, LockWindow, LongPressThreshold, PreviewLines, TapSlop,
    TouchedDelay,
};
use crate::error::Result;
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILE: &str = "settings.toml";

// =============================================================================
// Enums
// =============================================================================

/// Which flavour of the single-item gallery to run.
#[derive(Debug, Clone, Copy, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "kebab-case")]
pub enum Variant {
    /// Detail panel with review text, no transition lock.
    #[default]
    Review,
    /// Bare carousel: transition lock, no detail panel.
    Carousel,
}

impl Variant {
    /// Whether the variant shows the disclosure panel.
    #[must_use]
    pub fn has_disclosure(self) -> bool {
        matches!(self, Variant::Review)
    }

    /// Whether navigation is rate-limited by the transition lock.
    #[must_use]
    pub fn has_transition_lock(self) -> bool {
        matches!(self, Variant::Carousel)
    }
}

// =============================================================================
// Section Structs
// =============================================================================

/// General application settings.
#[derive(Debug, Clone, Deserialize, PartialEq, Default)]
pub struct GeneralConfig {
    /// UI language code (e.g., "en-US", "fr").
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,
}

/// Single-item gallery settings.
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct GalleryConfig {
    #[serde(default)]
    pub variant: Variant,

    /// Transition lock window in milliseconds (carousel variant only).
    #[serde(
        default = "default_lock_window_ms",
        skip_serializing_if = "Option::is_none"
    )]
    pub lock_window_ms: Option<u64>,

    /// Treat the session as touch-driven (taps and long-presses).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub touch_session: Option<bool>,

    /// Base URL for share links.
    #[serde(default = "default_base_url", skip_serializing_if = "Option::is_none")]
    pub base_url: Option<String>,
}

impl Default for GalleryConfig {
    fn default() -> Self {
        Self {
            variant: Variant::default(),
            lock_window_ms: default_lock_window_ms(),
            touch_session: Some(false),
            base_url: default_base_url(),
        }
    }
}

/// Input disambiguation settings.
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct InputConfig {
    /// Long-press threshold in milliseconds.
    #[serde(
        default = "default_long_press_ms",
        skip_serializing_if = "Option::is_none"
    )]
    pub long_press_ms: Option<u64>,

    /// Maximum finger travel (logical px) for a tap.
    #[serde(default = "default_tap_slop_px", skip_serializing_if = "Option::is_none")]
    pub tap_slop_px: Option<f32>,
}

impl Default for InputConfig {
    fn default() -> Self {
        Self {
            long_press_ms: default_long_press_ms(),
            tap_slop_px: default_tap_slop_px(),
        }
    }
}

/// Disclosure panel settings.
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct DisclosureConfig {
    /// Lines shown before the panel has been interacted with.
    #[serde(
        default = "default_preview_lines",
        skip_serializing_if = "Option::is_none"
    )]
    pub preview_lines: Option<u16>,

    /// Delay (ms) before the first interaction marks the panel touched.
    #[serde(
        default = "default_touched_delay_ms",
        skip_serializing_if = "Option::is_none"
    )]
    pub touched_delay_ms: Option<u64>,
}

impl Default for DisclosureConfig {
    fn default() -> Self {
        Self {
            preview_lines: default_preview_lines(),
            touched_delay_ms: default_touched_delay_ms(),
        }
    }
}

/// Shared-element transition settings.
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct TransitionConfig {
    /// Geometry/backdrop animation duration in milliseconds.
    #[serde(default = "default_animation_ms", skip_serializing_if = "Option::is_none")]
    pub animation_ms: Option<u64>,

    /// Time after the transition starts at which the overlay clears.
    #[serde(
        default = "default_clear_after_ms",
        skip_serializing_if = "Option::is_none"
    )]
    pub clear_after_ms: Option<u64>,
}

impl Default for TransitionConfig {
    fn default() -> Self {
        Self {
            animation_ms: default_animation_ms(),
            clear_after_ms: default_clear_after_ms(),
        }
    }
}

/// Item catalog settings.
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct CatalogConfig {
    /// Catalog file; relative paths resolve against the config directory.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub path: Option<PathBuf>,

    /// Number of rendered rich-text payloads kept in memory.
    #[serde(
        default = "default_rich_text_cache",
        skip_serializing_if = "Option::is_none"
    )]
    pub rich_text_cache: Option<usize>,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            path: None,
            rich_text_cache: default_rich_text_cache(),
        }
    }
}

// =============================================================================
// Main Config Struct (Sectioned)
// =============================================================================

/// Application configuration with logical sections.
#[derive(Debug, Clone, Deserialize, PartialEq, Default)]
pub struct Config {
    #[serde(default)]
    pub general: GeneralConfig,

    #[serde(default)]
    pub gallery: GalleryConfig,

    #[serde(default)]
    pub input: InputConfig,

    #[serde(default)]
    pub disclosure: DisclosureConfig,

    #[serde(default)]
    pub transition: TransitionConfig,

    #[serde(default)]
    pub catalog: CatalogConfig,
}

impl Config {
    /// Lock window for the configured variant; `None` when the variant has
    /// no transition lock or the window is zero.
    #[must_use]
    pub fn lock_window(&self) -> Option<LockWindow> {
        if !self.gallery.variant.has_transition_lock() {
            return None;
        }
        let window = LockWindow::new(self.gallery.lock_window_ms.unwrap_or(DEFAULT_LOCK_WINDOW_MS));
        (window.millis() > 0).then_some(window)
    }

    #[must_use]
    pub fn long_press(&self) -> LongPressThreshold {
        self.input
            .long_press_ms
            .map_or_else(LongPressThreshold::default, LongPressThreshold::new)
    }

    #[must_use]
    pub fn tap_slop(&self) -> TapSlop {
        self.input
            .tap_slop_px
            .map_or_else(TapSlop::default, TapSlop::new)
    }

    #[must_use]
    pub fn preview_lines(&self) -> PreviewLines {
        self.disclosure
            .preview_lines
            .map_or_else(PreviewLines::default, PreviewLines::new)
    }

    #[must_use]
    pub fn touched_delay(&self) -> TouchedDelay {
        self.disclosure
            .touched_delay_ms
            .map_or_else(TouchedDelay::default, TouchedDelay::new)
    }

    #[must_use]
    pub fn animation(&self) -> AnimationDuration {
        self.transition
            .animation_ms
            .map_or_else(AnimationDuration::default, AnimationDuration::new)
    }

    #[must_use]
    pub fn clear_delay(&self) -> ClearDelay {
        let animation = self.animation();
        ClearDelay::new(
            self.transition
                .clear_after_ms
                .unwrap_or(DEFAULT_CLEAR_AFTER_MS),
            animation,
        )
    }

    #[must_use]
    pub fn rich_text_cache(&self) -> usize {
        self.catalog
            .rich_text_cache
            .unwrap_or(DEFAULT_RICH_TEXT_CACHE)
            .clamp(MIN_RICH_TEXT_CACHE, MAX_RICH_TEXT_CACHE)
    }

    #[must_use]
    pub fn touch_session(&self) -> bool {
        self.gallery.touch_session.unwrap_or(false)
    }

    #[must_use]
    pub fn base_url(&self) -> &str {
        self.gallery.base_url.as_deref().unwrap_or("")
    }
}

// =============================================================================
// Default Value Functions
// =============================================================================

fn default_lock_window_ms() -> Option<u64> {
    Some(DEFAULT_LOCK_WINDOW_MS)
}

fn default_base_url() -> Option<String> {
    Some(DEFAULT_BASE_URL.to_string())
}

fn default_long_press_ms() -> Option<u64> {
    Some(DEFAULT_LONG_PRESS_MS)
}

fn default_tap_slop_px() -> Option<f32> {
    Some(DEFAULT_TAP_SLOP_PX)
}

fn default_preview_lines() -> Option<u16> {
    Some(DEFAULT_PREVIEW_LINES)
}

fn default_touched_delay_ms() -> Option<u64> {
    Some(DEFAULT_TOUCHED_DELAY_MS)
}

fn default_animation_ms() -> Option<u64> {
    Some(DEFAULT_ANIMATION_MS)
}

fn default_clear_after_ms() -> Option<u64> {
    Some(DEFAULT_CLEAR_AFTER_MS)
}

fn default_rich_text_cache() -> Option<usize> {
    Some(DEFAULT_RICH_TEXT_CACHE)
}

// =============================================================================
// Config Path Resolution
// =============================================================================

/// Returns the config file path with an optional override.
fn get_config_path_with_override(base_dir: Option<PathBuf>) -> Option<PathBuf> {
    paths::get_app_config_dir_with_override(base_dir).map(|mut path| {
        path.push(CONFIG_FILE);
        path
    })
}

/// Resolves the catalog path: explicit CLI value, then `[catalog] path`
/// (relative to the config directory), then `catalog.toml` in the config
/// directory.
#[must_use]
pub fn resolve_catalog_path(config: &Config, cli_path: Option<PathBuf>) -> Option<PathBuf> {
    if cli_path.is_some() {
        return cli_path;
    }
    let config_dir = paths::get_app_config_dir();
    match &config.catalog.path {
        Some(path) if path.is_absolute() => Some(path.clone()),
        Some(path) => config_dir.map(|dir| dir.join(path)),
        None => config_dir.map(|dir| dir.join(DEFAULT_CATALOG_FILE)),
    }
}

// =============================================================================
// Load Functions
// =============================================================================

/// Loads the configuration from the default path.
///
/// Returns a tuple of (config, optional_warning). If loading fails, returns
/// default config with a warning message key explaining what went wrong.
pub fn load() -> (Config, Option<String>) {
    load_with_override(None)
}

/// Loads the configuration from a custom directory.
pub fn load_with_override(base_dir: Option<PathBuf>) -> (Config, Option<String>) {
    if let Some(path) = get_config_path_with_override(base_dir) {
        if path.exists() {
            match load_from_path(&path) {
                Ok(config) => return (config, None),
                Err(err) => {
                    tracing::warn!("Failed to load config {:?}: {}", path, err);
                    return (
                        Config::default(),
                        Some("notification-config-load-error".to_string()),
                    );
                }
            }
        }
    }
    (Config::default(), None)
}

/// Loads configuration from a specific path.
pub fn load_from_path(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path)?;
    let config: Config = toml::from_str(&content)?;
    Ok(config)
}

// =============================================================================
// Tests
// =============================================================================
