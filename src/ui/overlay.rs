// SPDX-License-Identifier: MPL-2.0
//! Shared-element transition overlay.
//!
//! Draws one [`OverlayFrame`]: a black backdrop at the frame's opacity and
//! the transitioning media at the frame's rectangle. The overlay has no
//! interactive widgets, so input keeps reaching the screen underneath.

use crate::domain::item::MediaRef;
use crate::gallery::transition::{Fit, OverlayFrame};
use crate::ui::{media, styles};
use iced::widget::{Container, Stack};
use iced::{ContentFit, Element, Length, Padding};

fn content_fit(fit: Fit) -> ContentFit {
    match fit {
        Fit::Cover => ContentFit::Cover,
        Fit::Contain => ContentFit::Contain,
    }
}

pub fn view<'a, Message: 'a>(media_ref: &MediaRef, frame: OverlayFrame) -> Element<'a, Message> {
    let backdrop = Container::new(iced::widget::Space::new())
        .width(Length::Fill)
        .height(Length::Fill)
        .style(styles::overlay::backdrop(frame.backdrop_alpha));

    let image = media::view(
        media_ref,
        content_fit(frame.fit),
        Length::Fixed(frame.rect.width),
        Length::Fixed(frame.rect.height),
        String::new(),
    );

    let positioned = Container::new(image)
        .width(Length::Fill)
        .height(Length::Fill)
        .padding(Padding {
            top: frame.rect.top.max(0.0),
            left: frame.rect.left.max(0.0),
            right: 0.0,
            bottom: 0.0,
        })
        .clip(true);

    Stack::new()
        .push(backdrop)
        .push(positioned)
        .width(Length::Fill)
        .height(Length::Fill)
        .into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fit_maps_to_content_fit() {
        assert_eq!(content_fit(Fit::Cover), ContentFit::Cover);
        assert_eq!(content_fit(Fit::Contain), ContentFit::Contain);
    }
}
