// SPDX-License-Identifier: MPL-2.0
//! View rendering for the application.
//!
//! The active screen is drawn first; the transition overlay, the context
//! menu and the toasts are stacked on top of it in that order.

use super::{Content, Message, Screen};
use crate::domain::geometry::ViewportSize;
use crate::gallery::transition::TransitionCoordinator;
use crate::i18n::fluent::I18n;
use crate::ui::context_menu::{self, ContextMenu};
use crate::ui::notifications::{Manager, Toast};
use crate::ui::{empty_state, grid, overlay, viewer, wall};
use iced::widget::{Container, Stack};
use iced::{Element, Length};
use std::time::Duration;

/// Context required to render the application view.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub screen: Screen,
    pub content: &'a Content,
    pub grid: &'a grid::State,
    pub wall: &'a wall::State,
    pub transitions: &'a TransitionCoordinator,
    pub now: Duration,
    pub window: ViewportSize,
    pub context_menu: Option<&'a ContextMenu>,
    pub notifications: &'a Manager,
}

/// Renders the current application view based on the active screen.
pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let current_view: Element<'_, Message> = match ctx.content {
        Content::Gallery(gallery) => match ctx.screen {
            Screen::Grid => grid::view(ctx.grid, gallery.collection(), ctx.i18n).map(Message::Grid),
            Screen::Detail => viewer::view(gallery, ctx.i18n).map(Message::Gallery),
            Screen::Wall => wall::view(ctx.wall, gallery.collection(), ctx.i18n).map(Message::Wall),
        },
        Content::Unavailable { error } => empty_state::view(ctx.i18n, error.as_deref()),
    };

    let mut layers = Stack::new().push(
        Container::new(current_view)
            .width(Length::Fill)
            .height(Length::Fill),
    );

    if let (Some(descriptor), Some(frame)) = (
        ctx.transitions.descriptor(),
        ctx.transitions.frame(ctx.window, ctx.now),
    ) {
        layers = layers.push(overlay::view(&descriptor.media, frame));
    }

    if let Some(menu) = ctx.context_menu {
        layers = layers.push(context_menu::view(menu, ctx.window, ctx.i18n).map(Message::ContextMenu));
    }

    layers
        .push(Toast::view_overlay(ctx.notifications, ctx.i18n).map(Message::Notification))
        .width(Length::Fill)
        .height(Length::Fill)
        .into()
}
