//! URL read operations: lookup by name or id, and listing.

use sqlx::sqlite::SqliteRow;
use sqlx::Row;

use super::super::db::UrlDb;
use super::super::types::{StoreError, UrlId, UrlRecord};

fn record_from_row(row: &SqliteRow) -> UrlRecord {
    UrlRecord {
        id: row.get("id"),
        name: row.get("name"),
        created_at: row.get("created_at"),
    }
}

impl UrlDb {
    /// Fetch the record whose normalized name is exactly `name`.
    pub async fn find_by_name(&self, name: &str) -> Result<Option<UrlRecord>, StoreError> {
        let row = sqlx::query(
            r#"
            SELECT id, name, created_at
            FROM urls
            WHERE name = ?1
            "#,
        )
        .bind(name)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.as_ref().map(record_from_row))
    }

    /// Fetch a single record by id.
    pub async fn get_url(&self, id: UrlId) -> Result<Option<UrlRecord>, StoreError> {
        let row = sqlx::query(
            r#"
            SELECT id, name, created_at
            FROM urls
            WHERE id = ?1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.as_ref().map(record_from_row))
    }

    /// List all records, newest first.
    pub async fn list_urls(&self) -> Result<Vec<UrlRecord>, StoreError> {
        let rows = sqlx::query(
            r#"
            SELECT id, name, created_at
            FROM urls
            ORDER BY created_at DESC, id DESC
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.iter().map(record_from_row).collect())
    }
}
