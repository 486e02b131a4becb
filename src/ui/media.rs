// SPDX-License-Identifier: MPL-2.0
//! Image widgets for catalog media.
//!
//! Local files (plain paths or `file://` locators) are decoded by iced.
//! Remote locators are not fetched; a placeholder carrying the item label
//! takes their place at the same size.

use crate::domain::item::MediaRef;
use crate::ui::design_tokens::typography;
use crate::ui::styles;
use iced::widget::{image, Container, Image, Text};
use iced::{alignment, ContentFit, Element, Length};

/// Image handle for `media`, or `None` for a remote locator.
#[must_use]
pub fn handle(media: &MediaRef) -> Option<image::Handle> {
    let locator = media.locator();
    let path = locator.strip_prefix("file://").unwrap_or(locator);
    if path.contains("://") {
        return None;
    }
    Some(image::Handle::from_path(path))
}

/// Renders `media` at the given size with `fit`.
pub fn view<'a, Message: 'a>(
    media: &MediaRef,
    fit: ContentFit,
    width: Length,
    height: Length,
    label: String,
) -> Element<'a, Message> {
    match handle(media) {
        Some(handle) => Image::new(handle)
            .content_fit(fit)
            .width(width)
            .height(height)
            .into(),
        None => Container::new(Text::new(label).size(typography::CAPTION))
            .width(width)
            .height(height)
            .align_x(alignment::Horizontal::Center)
            .align_y(alignment::Vertical::Center)
            .style(styles::container::placeholder)
            .into(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn local_paths_get_a_handle() {
        assert!(handle(&MediaRef::new("images/0001.webp", None, None)).is_some());
        assert!(handle(&MediaRef::new("file:///srv/0001.webp", None, None)).is_some());
    }

    #[test]
    fn remote_locators_use_the_placeholder() {
        assert!(handle(&MediaRef::new("https://cdn.example/0001.webp", None, None)).is_none());
    }
}
