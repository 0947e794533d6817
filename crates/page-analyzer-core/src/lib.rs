pub mod config;
pub mod feedback;
pub mod logging;
pub mod store;
pub mod submit;
pub mod url_check;

pub use store::{UrlDb, UrlId, UrlRecord, UrlStore};
pub use submit::{submit_url, Submission, SubmitError};
pub use url_check::{normalize, validate_url, UrlError, UrlValidator, Validation};
