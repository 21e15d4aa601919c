//! Port definitions (trait abstractions) for external systems.
//!
//! Ports define the interfaces that the core expects from infrastructure.
//! They contain no implementation details and use only domain types.
//!
//! # Design Rules
//!
//! - No filesystem or OS types in any signature
//! - Read-only: the console never mutates records

pub mod host_stats;
pub mod record_store;

use thiserror::Error;

pub use host_stats::{HostStatsError, HostStatsPort, HostStatsResult};
pub use record_store::RecordStore;

/// Domain-specific errors for record store operations.
///
/// This error type abstracts away storage implementation details (e.g., io
/// errors) and gives services a clean interface for storage failures.
#[derive(Debug, Error)]
pub enum RepositoryError {
    /// The requested record was not found.
    #[error("Not found: {0}")]
    NotFound(String),

    /// Storage backend error (filesystem, etc.).
    #[error("Storage error: {0}")]
    Storage(String),

    /// Serialization or deserialization failed.
    #[error("Serialization error: {0}")]
    Serialization(String),
}

/// Errors surfaced by core services.
#[derive(Debug, Error)]
pub enum CoreError {
    /// Record store failure.
    #[error(transparent)]
    Repository(#[from] RepositoryError),

    /// Input failed validation before reaching the store.
    #[error("Validation error: {0}")]
    Validation(String),
}

impl CoreError {
    /// True when the error means the record does not exist.
    pub const fn is_not_found(&self) -> bool {
        matches!(self, Self::Repository(RepositoryError::NotFound(_)))
    }
}
