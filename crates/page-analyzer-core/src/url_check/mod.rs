//! URL checking: validation of raw input and normalization to the storage key.
//!
//! Validation never fails with `Err`; rejected input comes back as
//! [`Validation::Invalid`] with an ordered list of reasons. Normalization only
//! accepts a [`ValidUrl`], so it is total.

mod error;
mod normalize;
mod validate;

pub use error::UrlError;
pub use normalize::{normalize, normalize_url};
pub use validate::{validate_url, UrlValidator, ValidUrl, Validation, DEFAULT_SCHEMES, MAX_URL_LEN};
