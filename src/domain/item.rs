// SPDX-License-Identifier: MPL-2.0
//! Gallery items and the ordered collection they live in.
//!
//! Items are read-only to the gallery. Navigation works on the *position* of
//! an item inside the [`Collection`], never on its [`Ordinal`]: ordinals are
//! unique but may have gaps.

use super::location::LocationTag;
use std::fmt;

/// Default intrinsic dimension when the store does not provide one.
pub const DEFAULT_MEDIA_DIMENSION: u32 = 1_024;

/// Opaque stable identifier of an item.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ItemId(String);

impl ItemId {
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Stable display and permalink number of an item.
///
/// # Example
///
/// ```
/// use iced_review::domain::item::Ordinal;
///
/// assert_eq!(Ordinal::new(7).padded(), "0007");
/// assert_eq!(Ordinal::new(12345).padded(), "12345");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Ordinal(u32);

impl Ordinal {
    #[must_use]
    pub fn new(value: u32) -> Self {
        Self(value)
    }

    #[must_use]
    pub fn value(self) -> u32 {
        self.0
    }

    /// Zero-padded to four digits, as shown in the detail header.
    #[must_use]
    pub fn padded(self) -> String {
        format!("{:04}", self.0)
    }
}

impl fmt::Display for Ordinal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Locator of the visual asset plus its intrinsic size.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MediaRef {
    locator: String,
    width: u32,
    height: u32,
}

impl MediaRef {
    /// Creates a media reference. Missing dimensions fall back to
    /// [`DEFAULT_MEDIA_DIMENSION`].
    #[must_use]
    pub fn new(locator: impl Into<String>, width: Option<u32>, height: Option<u32>) -> Self {
        Self {
            locator: locator.into(),
            width: width.unwrap_or(DEFAULT_MEDIA_DIMENSION),
            height: height.unwrap_or(DEFAULT_MEDIA_DIMENSION),
        }
    }

    #[must_use]
    pub fn locator(&self) -> &str {
        &self.locator
    }

    #[must_use]
    pub fn width(&self) -> u32 {
        self.width
    }

    #[must_use]
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Width over height, or 1.0 for degenerate sizes.
    #[must_use]
    pub fn aspect_ratio(&self) -> f32 {
        if self.width == 0 || self.height == 0 {
            1.0
        } else {
            self.width as f32 / self.height as f32
        }
    }
}

/// One reviewed image.
#[derive(Debug, Clone, PartialEq)]
pub struct Item {
    pub id: ItemId,
    pub ordinal: Ordinal,
    pub media: MediaRef,
    /// Plain-text fallback description.
    pub text: String,
    /// Rich-text payload; supersedes `text` once rendered.
    pub rich_text: Option<String>,
    pub location: Option<LocationTag>,
}

impl Item {
    /// Title used when sharing: the text, or a generic label when empty.
    #[must_use]
    pub fn share_title(&self) -> String {
        let trimmed = self.text.trim();
        if trimmed.is_empty() {
            format!("review #{}", self.ordinal)
        } else {
            trimmed.to_string()
        }
    }
}

/// Non-empty ordered sequence of items.
///
/// Construction rejects empty input so that every consumer can rely on
/// `len() >= 1` and on position 0 being valid.
#[derive(Debug, Clone, PartialEq)]
pub struct Collection {
    items: Vec<Item>,
}

impl Collection {
    /// Wraps the items, or returns `None` for an empty list.
    #[must_use]
    pub fn new(items: Vec<Item>) -> Option<Self> {
        if items.is_empty() {
            None
        } else {
            Some(Self { items })
        }
    }

    #[must_use]
    #[allow(clippy::len_without_is_empty)]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[must_use]
    pub fn get(&self, position: usize) -> Option<&Item> {
        self.items.get(position)
    }

    /// Item at a position that is known to be in range.
    ///
    /// Out-of-range positions clamp to the last item.
    #[must_use]
    pub fn at(&self, position: usize) -> &Item {
        let last = self.items.len() - 1;
        &self.items[position.min(last)]
    }

    /// Linear scan for the first item carrying `ordinal`.
    #[must_use]
    pub fn position_of(&self, ordinal: Ordinal) -> Option<usize> {
        self.items.iter().position(|item| item.ordinal == ordinal)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Item> {
        self.items.iter()
    }
}

#[cfg(test)]
pub(crate) mod fixtures {
    use super::*;

    /// Builds an item with the given ordinal and generated fields.
    pub fn item(ordinal: u32) -> Item {
        Item {
            id: ItemId::new(format!("img_{ordinal}")),
            ordinal: Ordinal::new(ordinal),
            media: MediaRef::new(format!("images/{ordinal:04}.webp"), Some(800), Some(600)),
            text: format!("Review {ordinal}"),
            rich_text: None,
            location: None,
        }
    }

    pub fn collection(ordinals: &[u32]) -> Collection {
        Collection::new(ordinals.iter().copied().map(item).collect())
            .expect("fixture collection must not be empty")
    }
}

#[cfg(test)]
mod tests {
    use super::fixtures::*;
    use super::*;

    #[test]
    fn empty_collection_is_rejected() {
        assert!(Collection::new(Vec::new()).is_none());
    }

    #[test]
    fn position_of_scans_for_first_match() {
        let collection = collection(&[3, 9, 12]);
        assert_eq!(collection.position_of(Ordinal::new(9)), Some(1));
        assert_eq!(collection.position_of(Ordinal::new(4)), None);
    }

    #[test]
    fn position_of_returns_first_duplicate() {
        let mut items = vec![item(1), item(2)];
        items[1].ordinal = Ordinal::new(1);
        let collection = Collection::new(items).unwrap();
        assert_eq!(collection.position_of(Ordinal::new(1)), Some(0));
    }

    #[test]
    fn media_ref_defaults_missing_dimensions() {
        let media = MediaRef::new("a.webp", None, Some(512));
        assert_eq!(media.width(), DEFAULT_MEDIA_DIMENSION);
        assert_eq!(media.height(), 512);
        assert!((media.aspect_ratio() - 2.0).abs() < f32::EPSILON);
    }

    #[test]
    fn share_title_falls_back_on_blank_text() {
        let mut item = item(42);
        assert_eq!(item.share_title(), "Review 42");
        item.text = "   ".into();
        assert_eq!(item.share_title(), "review #42");
    }

    #[test]
    fn at_clamps_out_of_range_positions() {
        let collection = collection(&[0, 1]);
        assert_eq!(collection.at(5).ordinal, Ordinal::new(1));
    }
}
