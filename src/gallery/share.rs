// SPDX-License-Identifier: MPL-2.0
//! Sharing the current item.
//!
//! A share builds a permalink (`{base}?img={ordinal}`) and offers it to the
//! platform share sheet. When there is no share sheet, or the platform
//! refuses, the outcome asks the host to copy the link to the clipboard
//! instead. Only a permalink that cannot be built is a hard failure.
//!
//! The request captures the item at invocation time; navigating while the
//! share is in flight does not change what gets shared.

use crate::domain::item::{Item, Ordinal};
use crate::error::ShareError;
use std::sync::Arc;
use url::Url;

const PERMALINK_PARAM: &str = "img";

/// Everything needed to share one item.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShareRequest {
    pub base_url: String,
    pub ordinal: Ordinal,
    pub title: String,
}

impl ShareRequest {
    #[must_use]
    pub fn for_item(item: &Item, base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            ordinal: item.ordinal,
            title: item.share_title(),
        }
    }
}

/// Result of a share attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ShareOutcome {
    /// The platform share sheet accepted the link.
    Shared,
    /// The host should copy `url` to the clipboard and confirm with a toast.
    CopyToClipboard { url: String },
    Failed(ShareError),
}

/// Platform share sheet.
pub trait NativeShare: Send + Sync {
    /// Presents the share sheet. Blocking; called off the UI thread.
    fn share(&self, title: &str, url: &str) -> Result<(), ShareError>;
}

/// Share sheet for platforms without one.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoShareSheet;

impl NativeShare for NoShareSheet {
    fn share(&self, _title: &str, _url: &str) -> Result<(), ShareError> {
        Err(ShareError::Unavailable)
    }
}

/// Builds the permalink for `ordinal`.
///
/// An `img` parameter already present on the base is replaced; other query
/// parameters are kept in order.
///
/// # Errors
///
/// [`ShareError::MissingBaseUrl`] for an empty base and
/// [`ShareError::InvalidBaseUrl`] for one that does not parse, is not
/// `http`/`https`, or carries a fragment.
///
/// # Example
///
/// ```
/// use iced_review::domain::item::Ordinal;
/// use iced_review::gallery::share::permalink;
///
/// let url = permalink("https://reviews.example.com", Ordinal::new(42)).unwrap();
/// assert_eq!(url, "https://reviews.example.com/?img=42");
/// ```
pub fn permalink(base_url: &str, ordinal: Ordinal) -> Result<String, ShareError> {
    let base = base_url.trim();
    if base.is_empty() {
        return Err(ShareError::MissingBaseUrl);
    }

    let invalid = || ShareError::InvalidBaseUrl(base.to_string());
    let mut url = Url::parse(base).map_err(|_| invalid())?;
    if !matches!(url.scheme(), "http" | "https") || url.fragment().is_some() {
        return Err(invalid());
    }

    let kept: Vec<(String, String)> = url
        .query_pairs()
        .filter(|(key, _)| *key != PERMALINK_PARAM)
        .map(|(key, value)| (key.into_owned(), value.into_owned()))
        .collect();
    url.query_pairs_mut()
        .clear()
        .extend_pairs(kept)
        .append_pair(PERMALINK_PARAM, &ordinal.value().to_string());

    Ok(url.to_string())
}

/// Shares `request` through `native`, degrading to a clipboard copy.
pub async fn share(request: ShareRequest, native: Arc<dyn NativeShare>) -> ShareOutcome {
    let url = match permalink(&request.base_url, request.ordinal) {
        Ok(url) => url,
        Err(err) => {
            tracing::warn!("Cannot share item {}: {}", request.ordinal, err);
            return ShareOutcome::Failed(err);
        }
    };

    let title = request.title;
    let sheet_url = url.clone();
    let result = tokio::task::spawn_blocking(move || native.share(&title, &sheet_url))
        .await
        .unwrap_or_else(|join_err| Err(ShareError::Denied(join_err.to_string())));

    match result {
        Ok(()) => ShareOutcome::Shared,
        Err(err) if err.allows_clipboard_fallback() => {
            tracing::debug!("Native share unavailable ({}), copying link instead", err);
            ShareOutcome::CopyToClipboard { url }
        }
        Err(err) => ShareOutcome::Failed(err),
    }
}
