// SPDX-License-Identifier: MPL-2.0
use std::fmt;

#[derive(Debug, Clone)]
pub enum Error {
    Io(String),
    Config(String),
    Catalog(String),
    /// The item store returned no items; the gallery has nothing to show.
    EmptyCollection,
}

/// Failures on the share path.
///
/// None of these reach the user as a crash: they are turned into a
/// notification by the application.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ShareError {
    /// No native share sheet on this platform.
    Unavailable,
    /// The platform refused the share (permission, user dismissal).
    Denied(String),
    /// No base URL configured to build the permalink from.
    MissingBaseUrl,
    /// The configured base URL cannot carry a query string.
    InvalidBaseUrl(String),
}

impl ShareError {
    /// Returns the i18n message key for this error type.
    pub fn i18n_key(&self) -> &'static str {
        match self {
            ShareError::Unavailable => "share-error-unavailable",
            ShareError::Denied(_) => "share-error-denied",
            ShareError::MissingBaseUrl => "share-error-missing-base-url",
            ShareError::InvalidBaseUrl(_) => "share-error-invalid-base-url",
        }
    }

    /// Whether a clipboard copy should be attempted after this error.
    #[must_use]
    pub fn allows_clipboard_fallback(&self) -> bool {
        matches!(self, ShareError::Unavailable | ShareError::Denied(_))
    }
}

impl fmt::Display for ShareError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ShareError::Unavailable => write!(f, "Native sharing is not available"),
            ShareError::Denied(reason) => write!(f, "Sharing was denied: {}", reason),
            ShareError::MissingBaseUrl => write!(f, "No base URL configured for share links"),
            ShareError::InvalidBaseUrl(url) => write!(f, "Invalid share base URL: {}", url),
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Io(e) => write!(f, "I/O Error: {}", e),
            Error::Config(e) => write!(f, "Config Error: {}", e),
            Error::Catalog(e) => write!(f, "Catalog Error: {}", e),
            Error::EmptyCollection => write!(f, "No images available"),
        }
    }
}

impl std::error::Error for Error {}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err.to_string())
    }
}

impl From<toml::de::Error> for Error {
    fn from(err: toml::de::Error) -> Self {
        Error::Config(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_formats_io_error() {
        let err = Error::Io("disk failure".to_string());
        assert_eq!(format!("{}", err), "I/O Error: disk failure");
    }

    #[test]
    fn from_io_error_produces_io_variant() {
        let io_error = std::io::Error::other("boom");
        let err: Error = io_error.into();
        match err {
            Error::Io(message) => assert!(message.contains("boom")),
            _ => panic!("expected Io variant"),
        }
    }

    #[test]
    fn config_error_formats_properly() {
        let err = Error::Config("bad field".into());
        assert_eq!(format!("{}", err), "Config Error: bad field");
    }

    #[test]
    fn empty_collection_reads_as_no_images() {
        assert_eq!(format!("{}", Error::EmptyCollection), "No images available");
    }

    #[test]
    fn only_platform_failures_fall_back_to_clipboard() {
        assert!(ShareError::Unavailable.allows_clipboard_fallback());
        assert!(ShareError::Denied("user".into()).allows_clipboard_fallback());
        assert!(!ShareError::MissingBaseUrl.allows_clipboard_fallback());
        assert!(!ShareError::InvalidBaseUrl("x".into()).allows_clipboard_fallback());
    }

    #[test]
    fn share_error_i18n_keys() {
        assert_eq!(ShareError::Unavailable.i18n_key(), "share-error-unavailable");
        assert_eq!(
            ShareError::MissingBaseUrl.i18n_key(),
            "share-error-missing-base-url"
        );
    }
}
