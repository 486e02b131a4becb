// SPDX-License-Identifier: MPL-2.0
//! Top-level messages and runtime flags for the application.

use crate::gallery;
use crate::gallery::share::ShareOutcome;
use crate::ui::{context_menu, grid, notifications, wall};
use iced::event::{self, Event};
use std::path::PathBuf;
use std::time::Instant;

/// Top-level messages consumed by `App::update`. The variants forward
/// lower-level component messages while keeping a single update entrypoint.
#[derive(Debug, Clone)]
pub enum Message {
    Gallery(gallery::Message),
    Grid(grid::Message),
    Wall(wall::Message),
    ContextMenu(context_menu::Message),
    Notification(notifications::NotificationMessage),
    /// Runtime event with the capture status reported by the widget tree.
    Event(Event, event::Status),
    /// Periodic tick while timers or toasts are pending.
    Tick(Instant),
    /// A frame was presented while the transition overlay is up.
    Frame(Instant),
    ShareCompleted(ShareOutcome),
}

/// Runtime flags passed in from the CLI or launcher to tweak startup behavior.
#[derive(Debug, Default, Clone)]
pub struct Flags {
    /// Optional locale override in BCP-47 form (e.g. `fr`, `en-US`).
    pub lang: Option<String>,
    /// Optional config directory override (for settings.toml).
    /// Takes precedence over `ICED_REVIEW_CONFIG_DIR` environment variable.
    pub config_dir: Option<String>,
    /// Catalog to open instead of the configured one.
    pub catalog_path: Option<PathBuf>,
    /// Ordinal to open first (`--img`).
    pub initial_ordinal: Option<u32>,
    /// Start on the thumbnail grid instead of the detail view.
    pub start_on_grid: bool,
}
