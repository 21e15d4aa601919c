//! Record store trait definition.
//!
//! This port defines the read side of the record store the console consumes.
//! Implementations must handle all storage details internally and serialize
//! their own access.

use async_trait::async_trait;
use serde_json::Value;

use super::RepositoryError;
use crate::domain::Collection;

/// Read-only access to stored records.
///
/// Records are JSON documents keyed by an opaque identifier. Typed decoding
/// belongs to services such as `UserDirectory`, not here.
#[async_trait]
pub trait RecordStore: Send + Sync {
    /// List the identifiers in a collection, in store order.
    ///
    /// Identifiers may include hidden bookkeeping entries (see
    /// [`crate::HIDDEN_RECORD_PREFIX`]); callers filter them.
    async fn list(&self, collection: Collection) -> Result<Vec<String>, RepositoryError>;

    /// Read one record.
    ///
    /// Returns `Err(RepositoryError::NotFound)` if the record doesn't exist.
    async fn read(&self, collection: Collection, id: &str) -> Result<Value, RepositoryError>;
}
