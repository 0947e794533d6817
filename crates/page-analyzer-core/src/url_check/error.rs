//! Validation reasons for a rejected URL.

use std::fmt;

/// Why a raw URL was rejected. Returned as data, never raised.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum UrlError {
    /// Not an absolute URL with an allowed scheme and a host.
    InvalidUrl,
    /// Longer than the configured limit.
    UrlTooLong { max_len: usize },
}

impl UrlError {
    /// Stable code, independent of the message wording.
    pub fn code(self) -> &'static str {
        match self {
            UrlError::InvalidUrl => "InvalidURL",
            UrlError::UrlTooLong { .. } => "URLTooLong",
        }
    }
}

impl fmt::Display for UrlError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            UrlError::InvalidUrl => write!(f, "Invalid URL"),
            UrlError::UrlTooLong { max_len } => {
                write!(f, "URL exceeds {} characters", max_len)
            }
        }
    }
}

impl std::error::Error for UrlError {}
