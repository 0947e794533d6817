//! SQLite-backed URL database.
//!
//! Handles connection and migrations. Reads and writes live in `urls`.

use anyhow::{Context, Result};
use sqlx::sqlite::SqlitePoolOptions;
use sqlx::{Pool, Sqlite};
use std::path::{Path, PathBuf};
use std::time::{SystemTime, UNIX_EPOCH};

/// Percent-encode a path for use in a sqlite:// URI so spaces and special chars don't break parsing.
fn path_to_sqlite_uri(path: &Path) -> String {
    let s = path.to_string_lossy();
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '%' => out.push_str("%25"),
            ' ' => out.push_str("%20"),
            '#' => out.push_str("%23"),
            '?' => out.push_str("%3F"),
            '&' => out.push_str("%26"),
            c => out.push(c),
        }
    }
    format!("sqlite://{}", out)
}

/// Handle to the SQLite URL database.
///
/// By default the file lives under the XDG state directory:
/// `~/.local/state/page-analyzer/urls.db`.
#[derive(Clone)]
pub struct UrlDb {
    pub(crate) pool: Pool<Sqlite>,
}

impl UrlDb {
    /// Default database location under the XDG state directory.
    pub fn default_path() -> Result<PathBuf> {
        let xdg_dirs = xdg::BaseDirectories::with_prefix("page-analyzer")?;
        Ok(xdg_dirs
            .get_state_home()
            .join("page-analyzer")
            .join("urls.db"))
    }

    /// Open (or create) the database at a specific path. Creates parent dirs if needed.
    pub async fn open_at(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        if let Some(parent) = path.parent() {
            tokio::fs::create_dir_all(parent)
                .await
                .with_context(|| format!("create database dir {}", parent.display()))?;
        }
        let uri = path_to_sqlite_uri(path) + "?mode=rwc";
        let pool = SqlitePoolOptions::new()
            .max_connections(8)
            .connect(&uri)
            .await
            .with_context(|| format!("open database {}", path.display()))?;
        let db = UrlDb { pool };
        db.migrate().await?;
        tracing::debug!(path = %path.display(), "url database ready");
        Ok(db)
    }

    async fn migrate(&self) -> Result<()> {
        // `name` carries the uniqueness constraint the submission flow relies on.
        sqlx::query(
            r#"
            CREATE TABLE IF NOT EXISTS urls (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                name TEXT NOT NULL UNIQUE,
                created_at INTEGER NOT NULL
            );
            "#,
        )
        .execute(&self.pool)
        .await?;

        Ok(())
    }
}

/// Current time as Unix seconds (for DB timestamps).
pub(crate) fn unix_timestamp() -> i64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_secs() as i64
}

#[cfg(test)]
/// Open an in-memory database for tests (no disk I/O).
pub(crate) async fn open_memory() -> Result<UrlDb> {
    // Single connection to avoid the pool handing back a different empty DB.
    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .connect("sqlite::memory:")
        .await?;
    let db = UrlDb { pool };
    db.migrate().await?;
    Ok(db)
}

#[cfg(test)]
mod uri_tests {
    use super::path_to_sqlite_uri;
    use std::path::Path;

    #[test]
    fn special_chars_are_escaped() {
        assert_eq!(
            path_to_sqlite_uri(Path::new("/tmp/my dir/a#b?.db")),
            "sqlite:///tmp/my%20dir/a%23b%3F.db"
        );
    }
}
