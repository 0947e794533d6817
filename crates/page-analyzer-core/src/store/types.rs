//! Types used by the URL store.

use serde::Serialize;

/// Record identifier, assigned by storage.
pub type UrlId = i64;

/// A stored URL. `name` is always in normalized `scheme://host` form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UrlRecord {
    pub id: UrlId,
    pub name: String,
    /// Unix seconds.
    pub created_at: i64,
}

/// Errors from a storage collaborator.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// Another record already holds this name.
    #[error("url already exists: {name}")]
    Conflict { name: String },
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),
}

impl StoreError {
    pub fn is_conflict(&self) -> bool {
        matches!(self, StoreError::Conflict { .. })
    }
}
