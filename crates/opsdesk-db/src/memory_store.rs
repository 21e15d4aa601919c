//! In-memory record store for tests.

use std::collections::HashMap;
use std::sync::RwLock;
use std::sync::atomic::{AtomicBool, Ordering};

use async_trait::async_trait;
use opsdesk_core::{Collection, RecordStore, RepositoryError};
use serde_json::Value;

/// Record store held in memory. Listing order is insertion order.
#[derive(Debug, Default)]
pub struct MemoryRecordStore {
    records: RwLock<HashMap<Collection, Vec<(String, Value)>>>,
    fail_listing: AtomicBool,
}

impl MemoryRecordStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder form of [`Self::insert`].
    #[must_use]
    pub fn with_record(self, collection: Collection, id: &str, value: Value) -> Self {
        self.insert(collection, id, value);
        self
    }

    /// Insert or replace a record.
    pub fn insert(&self, collection: Collection, id: &str, value: Value) {
        let mut records = self.records.write().unwrap_or_else(std::sync::PoisonError::into_inner);
        let entries = records.entry(collection).or_default();
        if let Some(existing) = entries.iter_mut().find(|(key, _)| key == id) {
            existing.1 = value;
        } else {
            entries.push((id.to_string(), value));
        }
    }

    /// Make every subsequent `list` call fail with a storage error.
    pub fn fail_listing(&self) {
        self.fail_listing.store(true, Ordering::SeqCst);
    }
}

#[async_trait]
impl RecordStore for MemoryRecordStore {
    async fn list(&self, collection: Collection) -> Result<Vec<String>, RepositoryError> {
        if self.fail_listing.load(Ordering::SeqCst) {
            return Err(RepositoryError::Storage(format!("{collection}: listing disabled")));
        }
        let records = self.records.read().unwrap_or_else(std::sync::PoisonError::into_inner);
        Ok(records
            .get(&collection)
            .map(|entries| entries.iter().map(|(id, _)| id.clone()).collect())
            .unwrap_or_default())
    }

    async fn read(&self, collection: Collection, id: &str) -> Result<Value, RepositoryError> {
        let records = self.records.read().unwrap_or_else(std::sync::PoisonError::into_inner);
        records
            .get(&collection)
            .and_then(|entries| entries.iter().find(|(key, _)| key == id))
            .map(|(_, value)| value.clone())
            .ok_or_else(|| RepositoryError::NotFound(format!("{collection}/{id}")))
    }
}
