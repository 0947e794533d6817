//! Reduce a validated URL to its `scheme://host[:port]` key.

use super::validate::{validate_url, ValidUrl, Validation};

/// Canonical `scheme://host` form used as the storage uniqueness key.
///
/// Scheme and host come out lowercased (and IDN hosts in punycode) from the
/// parser. Trailing dots of a fully qualified host are removed so
/// `example.com.` and `example.com` share a key. A non-default port is kept;
/// user info, path, query and fragment are dropped.
pub fn normalize(url: &ValidUrl) -> String {
    let url = url.as_url();
    // Validation guarantees a host.
    let host = url.host_str().unwrap_or_default();
    let host = match host.trim_end_matches('.') {
        "" => host,
        trimmed => trimmed,
    };
    match url.port() {
        Some(port) => format!("{}://{}:{}", url.scheme(), host, port),
        None => format!("{}://{}", url.scheme(), host),
    }
}

/// Validates `raw` with default settings and normalizes it, or `None` if invalid.
pub fn normalize_url(raw: &str) -> Option<String> {
    match validate_url(raw) {
        Validation::Valid(url) => Some(normalize(&url)),
        Validation::Invalid(_) => None,
    }
}
