//! In-process URL store backed by a mutex-guarded map.

use std::collections::HashMap;
use std::sync::Mutex;

use super::db::unix_timestamp;
use super::types::{StoreError, UrlId, UrlRecord};
use super::UrlStore;

#[derive(Default)]
struct Inner {
    next_id: UrlId,
    by_name: HashMap<String, UrlRecord>,
}

/// URL store kept in memory. Enforces the same name uniqueness as [`super::UrlDb`].
#[derive(Default)]
pub struct MemoryStore {
    inner: Mutex<Inner>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.lock().by_name.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, Inner> {
        // A panic while holding the lock cannot leave the map half-updated.
        self.inner.lock().unwrap_or_else(|e| e.into_inner())
    }
}

impl UrlStore for MemoryStore {
    async fn insert_url(&self, name: &str) -> Result<UrlId, StoreError> {
        let mut inner = self.lock();
        if inner.by_name.contains_key(name) {
            return Err(StoreError::Conflict {
                name: name.to_string(),
            });
        }
        inner.next_id += 1;
        let record = UrlRecord {
            id: inner.next_id,
            name: name.to_string(),
            created_at: unix_timestamp(),
        };
        inner.by_name.insert(name.to_string(), record);
        Ok(inner.next_id)
    }

    async fn find_by_name(&self, name: &str) -> Result<Option<UrlRecord>, StoreError> {
        Ok(self.lock().by_name.get(name).cloned())
    }
}
