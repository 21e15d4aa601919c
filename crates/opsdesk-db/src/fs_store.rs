//! File-backed record store.
//!
//! Layout: `<root>/<collection>/<id>.json`. Each file holds one JSON
//! document. Any other file in a collection directory is listed by its full
//! name, so bookkeeping files such as `.gitkeep` surface as hidden ids.

use std::io::ErrorKind;
use std::path::PathBuf;

use async_trait::async_trait;
use opsdesk_core::{Collection, RecordStore, RepositoryError};
use serde_json::Value;
use tracing::debug;

/// File extension of stored records.
pub const RECORD_EXTENSION: &str = ".json";

/// Record store over a directory tree of JSON files.
#[derive(Debug, Clone)]
pub struct FsRecordStore {
    root: PathBuf,
}

impl FsRecordStore {
    /// Create a store rooted at `root`. The directory is not created.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    fn collection_dir(&self, collection: Collection) -> PathBuf {
        self.root.join(collection.as_str())
    }

    fn record_path(&self, collection: Collection, id: &str) -> Result<PathBuf, RepositoryError> {
        // Ids are opaque, but must never escape the collection directory.
        if id.is_empty() || id == ".." || id.contains(['/', '\\']) {
            return Err(RepositoryError::NotFound(format!("{collection}/{id}")));
        }
        Ok(self
            .collection_dir(collection)
            .join(format!("{id}{RECORD_EXTENSION}")))
    }
}

#[async_trait]
impl RecordStore for FsRecordStore {
    async fn list(&self, collection: Collection) -> Result<Vec<String>, RepositoryError> {
        let dir = self.collection_dir(collection);
        let mut entries = tokio::fs::read_dir(&dir)
            .await
            .map_err(|e| RepositoryError::Storage(format!("{}: {e}", dir.display())))?;

        let mut ids = Vec::new();
        while let Some(entry) = entries
            .next_entry()
            .await
            .map_err(|e| RepositoryError::Storage(e.to_string()))?
        {
            let name = entry.file_name().to_string_lossy().into_owned();
            let id = name
                .strip_suffix(RECORD_EXTENSION)
                .map_or_else(|| name.clone(), ToString::to_string);
            ids.push(id);
        }

        // read_dir order is platform dependent
        ids.sort();
        debug!(%collection, count = ids.len(), "Listed records");
        Ok(ids)
    }

    async fn read(&self, collection: Collection, id: &str) -> Result<Value, RepositoryError> {
        let path = self.record_path(collection, id)?;
        let contents = tokio::fs::read_to_string(&path)
            .await
            .map_err(|e| match e.kind() {
                ErrorKind::NotFound => RepositoryError::NotFound(format!("{collection}/{id}")),
                _ => RepositoryError::Storage(format!("{}: {e}", path.display())),
            })?;

        serde_json::from_str(&contents)
            .map_err(|e| RepositoryError::Serialization(format!("{}: {e}", path.display())))
    }
}
