// SPDX-License-Identifier: MPL-2.0
//! Styles for the navigation halves and the transition backdrop.

use crate::ui::design_tokens::{
    opacity,
    palette::{BLACK, WHITE},
};
use iced::widget::container;
use iced::{Background, Color, Theme};

/// Navigation half; tinted while highlighted.
pub fn nav_half(highlighted: bool) -> impl Fn(&Theme) -> container::Style {
    move |_theme: &Theme| container::Style {
        background: highlighted.then(|| {
            Background::Color(Color {
                a: opacity::OVERLAY_SUBTLE,
                ..BLACK
            })
        }),
        text_color: Some(WHITE),
        ..Default::default()
    }
}

/// Black backdrop at `alpha`.
pub fn backdrop(alpha: f32) -> impl Fn(&Theme) -> container::Style {
    let alpha = alpha.clamp(opacity::TRANSPARENT, opacity::OPAQUE);
    move |_theme: &Theme| container::Style {
        background: Some(Background::Color(Color { a: alpha, ..BLACK })),
        ..Default::default()
    }
}
