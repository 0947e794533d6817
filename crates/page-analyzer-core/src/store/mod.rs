//! Persistent URL store.
//!
//! The submission flow only needs two primitives: an insert that reports a
//! distinguishable conflict when the name is taken, and a lookup by name.
//! [`UrlDb`] provides them on SQLite (sqlx); [`MemoryStore`] keeps rows in a
//! process-local map.

mod db;
mod memory;
mod types;
mod urls;

use std::future::Future;

pub use db::UrlDb;
pub use memory::MemoryStore;
pub use types::{StoreError, UrlId, UrlRecord};

/// Storage collaborator for URL submissions.
pub trait UrlStore {
    /// Insert a new record named `name`.
    ///
    /// Returns [`StoreError::Conflict`] if a record with that name exists.
    fn insert_url(&self, name: &str) -> impl Future<Output = Result<UrlId, StoreError>> + Send;

    /// Look up a record by its exact name.
    fn find_by_name(
        &self,
        name: &str,
    ) -> impl Future<Output = Result<Option<UrlRecord>, StoreError>> + Send;
}
