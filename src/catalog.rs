// SPDX-License-Identifier: MPL-2.0
//! Item catalog loading.
//!
//! The catalog is a TOML file with one `[[items]]` table per reviewed image:
//!
//! ```toml
//! [[items]]
//! id = "img_001"
//! ordinal = 1
//! url = "images/0001.webp"
//! width = 1600
//! height = 1200
//! text = "Slightly overexposed, great framing."
//! rich_text = "Slightly **overexposed**, great framing."
//! location = "nyc_mta|a27"
//! ```
//!
//! `width`/`height` default to 1024. Relative media locators are resolved
//! against the catalog's directory; URLs are kept as-is.

use crate::domain::item::{Collection, Item, ItemId, MediaRef, Ordinal};
use crate::domain::location::LocationTag;
use crate::error::{Error, Result};
use serde::Deserialize;
use std::collections::HashSet;
use std::fs;
use std::path::Path;

#[derive(Debug, Deserialize)]
struct CatalogFile {
    #[serde(default)]
    items: Vec<ItemRecord>,
}

#[derive(Debug, Deserialize)]
struct ItemRecord {
    id: String,
    ordinal: u32,
    url: String,
    #[serde(default)]
    width: Option<u32>,
    #[serde(default)]
    height: Option<u32>,
    #[serde(default)]
    text: String,
    #[serde(default)]
    rich_text: Option<String>,
    #[serde(default)]
    location: Option<String>,
}

/// Reads and validates a catalog file.
///
/// # Errors
///
/// - [`Error::Io`] if the file cannot be read
/// - [`Error::Config`] if it is not valid TOML for the catalog schema
/// - [`Error::Catalog`] on duplicate ordinals
/// - [`Error::EmptyCollection`] if it lists no items
pub fn load_from_path(path: &Path) -> Result<Collection> {
    let content = fs::read_to_string(path)?;
    let base_dir = path.parent();
    let collection = parse(&content, base_dir)?;
    tracing::info!(
        "Loaded {} catalog items from {}",
        collection.len(),
        path.display()
    );
    Ok(collection)
}

/// Parses catalog TOML. Relative locators are joined onto `base_dir` when given.
pub fn parse(content: &str, base_dir: Option<&Path>) -> Result<Collection> {
    let file: CatalogFile = toml::from_str(content)?;

    let mut seen = HashSet::with_capacity(file.items.len());
    let mut items = Vec::with_capacity(file.items.len());
    for record in file.items {
        if !seen.insert(record.ordinal) {
            return Err(Error::Catalog(format!(
                "duplicate ordinal {} (item {})",
                record.ordinal, record.id
            )));
        }
        items.push(into_item(record, base_dir));
    }

    Collection::new(items).ok_or(Error::EmptyCollection)
}

fn into_item(record: ItemRecord, base_dir: Option<&Path>) -> Item {
    let locator = resolve_locator(&record.url, base_dir);
    Item {
        id: ItemId::new(record.id),
        ordinal: Ordinal::new(record.ordinal),
        media: MediaRef::new(locator, record.width, record.height),
        text: record.text,
        rich_text: record.rich_text.filter(|source| !source.trim().is_empty()),
        location: record
            .location
            .filter(|raw| !raw.trim().is_empty())
            .map(LocationTag::new),
    }
}

fn resolve_locator(url: &str, base_dir: Option<&Path>) -> String {
    let path = Path::new(url);
    match base_dir {
        Some(dir) if !url.contains("://") && path.is_relative() => {
            dir.join(path).to_string_lossy().into_owned()
        }
        _ => url.to_string(),
    }
}
