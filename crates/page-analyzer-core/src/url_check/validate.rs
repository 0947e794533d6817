//! Well-formedness and length checks for submitted URLs.

use url::Url;

use super::error::UrlError;

/// Default upper bound on the length of a submitted URL, in characters.
pub const MAX_URL_LEN: usize = 255;

/// Schemes accepted when no explicit allow-list is configured.
pub const DEFAULT_SCHEMES: &[&str] = &["http", "https"];

/// A URL that passed validation. Only [`UrlValidator`] constructs it, so
/// anything holding one can be normalized without further checks.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidUrl(Url);

impl ValidUrl {
    pub fn as_url(&self) -> &Url {
        &self.0
    }
}

/// Outcome of validating a raw string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Validation {
    Valid(ValidUrl),
    /// Ordered reasons; never empty.
    Invalid(Vec<UrlError>),
}

impl Validation {
    pub fn is_valid(&self) -> bool {
        matches!(self, Validation::Valid(_))
    }

    /// Rejection reasons (empty when valid).
    pub fn errors(&self) -> &[UrlError] {
        match self {
            Validation::Valid(_) => &[],
            Validation::Invalid(errors) => errors,
        }
    }
}

/// Validation settings: length limit and scheme allow-list.
#[derive(Debug, Clone)]
pub struct UrlValidator {
    max_len: usize,
    schemes: Vec<String>,
}

impl Default for UrlValidator {
    fn default() -> Self {
        Self {
            max_len: MAX_URL_LEN,
            schemes: DEFAULT_SCHEMES.iter().map(|s| s.to_string()).collect(),
        }
    }
}

impl UrlValidator {
    /// Build a validator. Schemes are compared case-insensitively; an empty
    /// list falls back to [`DEFAULT_SCHEMES`].
    pub fn new(max_len: usize, schemes: &[String]) -> Self {
        let schemes: Vec<String> = schemes.iter().map(|s| s.to_ascii_lowercase()).collect();
        if schemes.is_empty() {
            return Self {
                max_len,
                ..Self::default()
            };
        }
        Self { max_len, schemes }
    }

    pub fn max_len(&self) -> usize {
        self.max_len
    }

    /// Runs every check on `raw` (trimmed) and collects the failures in order:
    /// syntax first, then length.
    pub fn validate(&self, raw: &str) -> Validation {
        let input = raw.trim();
        let mut errors = Vec::new();

        let parsed = self.parse_absolute(input);
        if parsed.is_none() {
            errors.push(UrlError::InvalidUrl);
        }
        if input.chars().count() > self.max_len {
            errors.push(UrlError::UrlTooLong {
                max_len: self.max_len,
            });
        }

        match parsed {
            Some(url) if errors.is_empty() => Validation::Valid(ValidUrl(url)),
            _ => Validation::Invalid(errors),
        }
    }

    fn parse_absolute(&self, input: &str) -> Option<Url> {
        // The parser silently strips tabs and newlines; treat them as malformed.
        if input.chars().any(|c| c.is_control()) {
            return None;
        }
        let url = Url::parse(input).ok()?;
        if !self.schemes.iter().any(|s| s == url.scheme()) {
            return None;
        }
        match url.host_str() {
            Some(host) if !host.is_empty() => Some(url),
            _ => None,
        }
    }
}

/// Validates `raw` with the default limit and schemes.
pub fn validate_url(raw: &str) -> Validation {
    UrlValidator::default().validate(raw)
}
