//! URL write operations.

use super::super::db::{unix_timestamp, UrlDb};
use super::super::types::{StoreError, UrlId, UrlRecord};
use super::super::UrlStore;

impl UrlDb {
    /// Insert a new record. A violated `UNIQUE(name)` constraint comes back as
    /// [`StoreError::Conflict`]; every other failure as [`StoreError::Database`].
    pub async fn insert_url(&self, name: &str) -> Result<UrlId, StoreError> {
        let now = unix_timestamp();
        let result = sqlx::query(
            r#"
            INSERT INTO urls (name, created_at)
            VALUES (?1, ?2)
            "#,
        )
        .bind(name)
        .bind(now)
        .execute(&self.pool)
        .await;

        match result {
            Ok(done) => Ok(done.last_insert_rowid()),
            Err(sqlx::Error::Database(e)) if e.is_unique_violation() => Err(StoreError::Conflict {
                name: name.to_string(),
            }),
            Err(e) => Err(e.into()),
        }
    }
}

impl UrlStore for UrlDb {
    async fn insert_url(&self, name: &str) -> Result<UrlId, StoreError> {
        UrlDb::insert_url(self, name).await
    }

    async fn find_by_name(&self, name: &str) -> Result<Option<UrlRecord>, StoreError> {
        UrlDb::find_by_name(self, name).await
    }
}
