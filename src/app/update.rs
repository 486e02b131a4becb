// SPDX-License-Identifier: MPL-2.0
//! Message handlers for the application.
//!
//! Component effects are applied here: screen switches, the context menu,
//! clipboard writes and share tasks.

use super::{Content, Message, Screen};
use crate::domain::geometry::{ScreenRect, ViewportSize};
use crate::gallery::input::RawInput;
use crate::gallery::share::{self, NativeShare, ShareOutcome};
use crate::gallery::transition::TransitionCoordinator;
use crate::gallery::{self, Effect as GalleryEffect, Gallery};
use crate::ui::context_menu::{self, Action, ContextMenu};
use crate::ui::events::{self, EventMapper};
use crate::ui::grid::{self, Effect as GridEffect};
use crate::ui::notifications::{self, Notification};
use crate::ui::wall::{self, Effect as WallEffect};
use iced::event::{self, Event};
use iced::{keyboard, Task};
use std::sync::Arc;
use std::time::{Duration, Instant};

/// Context for update operations containing mutable references to app state.
pub struct UpdateContext<'a> {
    pub screen: &'a mut Screen,
    pub content: &'a mut Content,
    pub grid: &'a mut grid::State,
    pub wall: &'a mut wall::State,
    pub transitions: &'a mut TransitionCoordinator,
    pub now: Duration,
    pub events: &'a mut EventMapper,
    pub window: &'a mut ViewportSize,
    pub context_menu: &'a mut Option<ContextMenu>,
    pub notifications: &'a mut notifications::Manager,
    pub share_sheet: &'a Arc<dyn NativeShare>,
}

impl UpdateContext<'_> {
    fn gallery(&mut self) -> Option<&mut Gallery> {
        match self.content {
            Content::Gallery(gallery) => Some(gallery.as_mut()),
            Content::Unavailable { .. } => None,
        }
    }
}

/// Routes a runtime event to the window state or the gallery.
pub fn handle_event(ctx: &mut UpdateContext<'_>, event: &Event, status: event::Status) -> Task<Message> {
    if let Some(size) = events::window_size(event) {
        *ctx.window = size;
        ctx.grid.set_window(size);
        let now = ctx.now;
        if let Some(gallery) = ctx.gallery() {
            gallery.handle(
                gallery::Message::ViewportChanged(ScreenRect::covering(size)),
                now,
            );
        }
        return Task::none();
    }

    let Some(raw) = ctx.events.map(event, status) else {
        return Task::none();
    };

    if ctx.context_menu.is_some() {
        if is_escape(event) {
            return close_context_menu(ctx);
        }
        // Touches still end while the menu is open; their outcome is dropped.
        if matches!(raw, RawInput::TouchLifted { .. } | RawInput::TouchLost { .. }) {
            let now = ctx.now;
            if let Some(gallery) = ctx.gallery() {
                gallery.handle(gallery::Message::Input(raw), now);
            }
        }
        return Task::none();
    }

    if *ctx.screen != Screen::Detail {
        return Task::none();
    }

    let now = ctx.now;
    let effect = match ctx.gallery() {
        Some(gallery) => gallery.handle(gallery::Message::Input(raw), now),
        None => return Task::none(),
    };
    apply_gallery_effect(ctx, effect)
}

fn is_escape(event: &Event) -> bool {
    matches!(
        event,
        Event::Keyboard(keyboard::Event::KeyPressed {
            key: keyboard::Key::Named(keyboard::key::Named::Escape),
            ..
        })
    )
}

pub fn handle_gallery_message(
    ctx: &mut UpdateContext<'_>,
    message: gallery::Message,
) -> Task<Message> {
    let now = ctx.now;
    let effect = match ctx.gallery() {
        Some(gallery) => gallery.handle(message, now),
        None => return Task::none(),
    };
    apply_gallery_effect(ctx, effect)
}

fn apply_gallery_effect(ctx: &mut UpdateContext<'_>, effect: GalleryEffect) -> Task<Message> {
    match effect {
        GalleryEffect::None => Task::none(),
        GalleryEffect::PositionChanged { ordinal } => {
            tracing::debug!("Showing item {}", ordinal);
            Task::none()
        }
        GalleryEffect::ShowGrid => show_grid(ctx),
        GalleryEffect::Share(request) => {
            let sheet = Arc::clone(ctx.share_sheet);
            Task::perform(share::share(request, sheet), Message::ShareCompleted)
        }
        GalleryEffect::ContextMenu { position, ordinal } => {
            let has_location = ctx
                .gallery()
                .is_some_and(|gallery| gallery.current_item().location.is_some());
            *ctx.context_menu = Some(ContextMenu {
                position,
                ordinal,
                has_location,
            });
            Task::none()
        }
    }
}

pub fn handle_grid_message(ctx: &mut UpdateContext<'_>, message: grid::Message) -> Task<Message> {
    let now = ctx.now;
    let effect = {
        let Content::Gallery(gallery) = &*ctx.content else {
            return Task::none();
        };
        ctx.grid
            .handle(message, gallery.collection(), ctx.transitions, now)
    };

    match effect {
        GridEffect::None => Task::none(),
        GridEffect::OpenDetail { ordinal } => {
            let Some(gallery) = ctx.gallery() else {
                return Task::none();
            };
            gallery.go_to(ordinal);
            let mounted = gallery.is_mounted();
            *ctx.screen = Screen::Detail;
            if mounted {
                Task::none()
            } else {
                Task::done(Message::Gallery(gallery::Message::Mounted))
            }
        }
        GridEffect::ShowWall => {
            *ctx.screen = Screen::Wall;
            if ctx.wall.is_mounted() {
                Task::none()
            } else {
                Task::done(Message::Wall(wall::Message::Mounted))
            }
        }
    }
}

pub fn handle_wall_message(ctx: &mut UpdateContext<'_>, message: wall::Message) -> Task<Message> {
    let effect = {
        let Content::Gallery(gallery) = &*ctx.content else {
            return Task::none();
        };
        ctx.wall.handle(message, gallery.collection())
    };

    match effect {
        WallEffect::None => Task::none(),
        WallEffect::ShowGrid => show_grid(ctx),
    }
}

/// Switches to the grid, mounting it on first display.
fn show_grid(ctx: &mut UpdateContext<'_>) -> Task<Message> {
    *ctx.screen = Screen::Grid;
    if ctx.grid.is_mounted() {
        Task::none()
    } else {
        Task::done(Message::Grid(grid::Message::Mounted))
    }
}

pub fn handle_context_menu_message(
    ctx: &mut UpdateContext<'_>,
    message: context_menu::Message,
) -> Task<Message> {
    let close = close_context_menu(ctx);
    let action = match message {
        context_menu::Message::Dismissed => return close,
        context_menu::Message::Selected(action) => action,
    };

    let task = match action {
        Action::CopyLink => copy_link(ctx),
        Action::CopyLocation => copy_location(ctx),
        Action::Share => handle_gallery_message(ctx, gallery::Message::ShareRequested),
    };
    Task::batch([close, task])
}

fn close_context_menu(ctx: &mut UpdateContext<'_>) -> Task<Message> {
    if ctx.context_menu.take().is_none() {
        return Task::none();
    }
    handle_gallery_message(ctx, gallery::Message::ContextMenuClosed)
}

fn copy_link(ctx: &mut UpdateContext<'_>) -> Task<Message> {
    let Some(permalink) = ctx.gallery().map(|gallery| gallery.permalink()) else {
        return Task::none();
    };
    match permalink {
        Ok(url) => {
            ctx.notifications.push(
                Notification::success("notification-link-copied").with_detail(url.clone()),
            );
            iced::clipboard::write(url)
        }
        Err(err) => {
            tracing::warn!("Cannot copy link: {}", err);
            ctx.notifications.push(Notification::error(err.i18n_key()));
            Task::none()
        }
    }
}

/// Copies the map link of a known location, or the raw tag otherwise.
fn copy_location(ctx: &mut UpdateContext<'_>) -> Task<Message> {
    let Some(tag) = ctx
        .gallery()
        .and_then(|gallery| gallery.current_item().location.clone())
    else {
        return Task::none();
    };
    let text = tag
        .resolve()
        .map_or_else(|| tag.as_str().to_string(), |badge| badge.map_url.to_string());

    ctx.notifications
        .push(Notification::success("notification-location-copied"));
    iced::clipboard::write(text)
}

pub fn handle_tick(ctx: &mut UpdateContext<'_>, instant: Instant) -> Task<Message> {
    let now = ctx.now;
    ctx.notifications.tick(instant);
    ctx.transitions.advance_time(now);

    let effect = match ctx.gallery() {
        Some(gallery) => gallery.tick(now),
        None => return Task::none(),
    };
    apply_gallery_effect(ctx, effect)
}

pub fn handle_frame(ctx: &mut UpdateContext<'_>) -> Task<Message> {
    ctx.transitions.on_frame(ctx.now);
    ctx.transitions.advance_time(ctx.now);
    Task::none()
}

pub fn handle_share_completed(ctx: &mut UpdateContext<'_>, outcome: ShareOutcome) -> Task<Message> {
    match outcome {
        ShareOutcome::Shared => {
            ctx.notifications
                .push(Notification::success("notification-shared"));
            Task::none()
        }
        ShareOutcome::CopyToClipboard { url } => {
            ctx.notifications.push(
                Notification::success("notification-link-copied").with_detail(url.clone()),
            );
            iced::clipboard::write(url)
        }
        ShareOutcome::Failed(err) => {
            ctx.notifications.push(Notification::error(err.i18n_key()));
            Task::none()
        }
    }
}
