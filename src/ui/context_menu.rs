// SPDX-License-Identifier: MPL-2.0
//! Context menu opened by a right-click or a long-press on the media.

use crate::domain::geometry::{ScreenPoint, ViewportSize};
use crate::domain::item::Ordinal;
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{opacity, palette, sizing, spacing, typography};
use crate::ui::styles;
use iced::widget::{button, mouse_area, opaque, Column, Container, Space, Stack, Text};
use iced::{Element, Length, Padding};

/// Height of one menu row, used to keep the menu inside the window.
const ROW_HEIGHT: f32 = 32.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    CopyLink,
    CopyLocation,
    Share,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Message {
    Selected(Action),
    Dismissed,
}

/// An open context menu, anchored where it was requested.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ContextMenu {
    pub position: ScreenPoint,
    pub ordinal: Ordinal,
    pub has_location: bool,
}

impl ContextMenu {
    fn actions(&self) -> Vec<Action> {
        let mut actions = vec![Action::CopyLink];
        if self.has_location {
            actions.push(Action::CopyLocation);
        }
        actions.push(Action::Share);
        actions
    }

    /// Top-left corner of the menu, shifted so it stays inside `window`.
    #[must_use]
    pub fn anchor(&self, window: ViewportSize) -> ScreenPoint {
        let height = ROW_HEIGHT * self.actions().len() as f32 + 2.0 * spacing::XXS;
        ScreenPoint::new(
            self.position
                .x
                .min(window.width - sizing::CONTEXT_MENU_WIDTH)
                .max(0.0),
            self.position.y.min(window.height - height).max(0.0),
        )
    }
}

fn label_key(action: Action) -> &'static str {
    match action {
        Action::CopyLink => "context-menu-copy-link",
        Action::CopyLocation => "context-menu-copy-location",
        Action::Share => "context-menu-share",
    }
}

pub fn view<'a>(menu: &ContextMenu, window: ViewportSize, i18n: &'a I18n) -> Element<'a, Message> {
    let rows = menu.actions().into_iter().map(|action| -> Element<'a, Message> {
        button(Text::new(i18n.tr(label_key(action))).size(typography::BODY))
            .width(Length::Fill)
            .height(Length::Fixed(ROW_HEIGHT))
            .padding([spacing::XS, spacing::SM])
            .style(styles::button::overlay(
                palette::GRAY_100,
                opacity::TRANSPARENT,
                opacity::OVERLAY_MEDIUM,
            ))
            .on_press(Message::Selected(action))
            .into()
    });

    let panel = Container::new(Column::with_children(rows))
        .width(Length::Fixed(sizing::CONTEXT_MENU_WIDTH))
        .padding(spacing::XXS)
        .style(styles::container::panel);

    let anchor = menu.anchor(window);
    let positioned = Container::new(opaque(panel))
        .width(Length::Fill)
        .height(Length::Fill)
        .padding(Padding {
            top: anchor.y,
            left: anchor.x,
            right: 0.0,
            bottom: 0.0,
        });

    // Any click outside the panel dismisses the menu.
    let dismiss_area = opaque(
        mouse_area(
            Container::new(Space::new())
                .width(Length::Fill)
                .height(Length::Fill),
        )
        .on_press(Message::Dismissed)
        .on_right_press(Message::Dismissed),
    );

    Stack::new()
        .push(dismiss_area)
        .push(positioned)
        .width(Length::Fill)
        .height(Length::Fill)
        .into()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn menu(x: f32, y: f32, has_location: bool) -> ContextMenu {
        ContextMenu {
            position: ScreenPoint::new(x, y),
            ordinal: Ordinal::new(1),
            has_location,
        }
    }

    #[test]
    fn location_action_only_with_location() {
        assert_eq!(
            menu(0.0, 0.0, false).actions(),
            vec![Action::CopyLink, Action::Share]
        );
        assert_eq!(menu(0.0, 0.0, true).actions().len(), 3);
    }

    #[test]
    fn anchor_stays_inside_window() {
        let window = ViewportSize::new(800.0, 600.0);
        let anchor = menu(790.0, 590.0, true).anchor(window);
        assert_eq!(anchor.x, 800.0 - sizing::CONTEXT_MENU_WIDTH);
        assert!(anchor.y + 3.0 * ROW_HEIGHT <= 600.0);

        let inside = menu(10.0, 20.0, true).anchor(window);
        assert_eq!(inside, ScreenPoint::new(10.0, 20.0));
    }
}
