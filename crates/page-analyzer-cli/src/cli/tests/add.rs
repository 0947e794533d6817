//! Exit codes returned by the `add` handler.

use crate::cli::commands::run_add;
use page_analyzer_core::store::{StoreError, UrlDb, UrlId, UrlRecord, UrlStore};
use page_analyzer_core::url_check::UrlValidator;
use tempfile::tempdir;

/// Exit code for rejected input.
const EXIT_INVALID: i32 = 2;

/// Store whose inserts always conflict while lookups find nothing.
struct VanishingStore;

impl UrlStore for VanishingStore {
    async fn insert_url(&self, name: &str) -> Result<UrlId, StoreError> {
        Err(StoreError::Conflict {
            name: name.to_string(),
        })
    }

    async fn find_by_name(&self, _name: &str) -> Result<Option<UrlRecord>, StoreError> {
        Ok(None)
    }
}

#[tokio::test]
async fn add_exit_codes_for_rejected_created_and_duplicate() {
    let dir = tempdir().unwrap();
    let db = UrlDb::open_at(dir.path().join("urls.db")).await.unwrap();
    let v = UrlValidator::default();

    assert_eq!(run_add(&db, &v, "not a url").await.unwrap(), EXIT_INVALID);
    assert!(db.list_urls().await.unwrap().is_empty());

    assert_eq!(run_add(&db, &v, "https://x.example/a").await.unwrap(), 0);
    assert_eq!(run_add(&db, &v, "https://x.example/b").await.unwrap(), 0);

    let rows = db.list_urls().await.unwrap();
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].name, "https://x.example");
}

#[tokio::test]
async fn add_overlong_url_is_invalid_exit() {
    let dir = tempdir().unwrap();
    let db = UrlDb::open_at(dir.path().join("urls.db")).await.unwrap();
    let raw = format!("https://example.com/{}", "a".repeat(280));

    let code = run_add(&db, &UrlValidator::default(), &raw).await.unwrap();
    assert_eq!(code, EXIT_INVALID);
}

#[tokio::test]
async fn add_anomaly_is_an_error() {
    let err = run_add(&VanishingStore, &UrlValidator::default(), "https://example.com")
        .await
        .unwrap_err();
    assert!(err.to_string().contains("could not be found"));
}
