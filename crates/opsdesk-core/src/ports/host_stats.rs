//! Host statistics port.
//!
//! Abstracts OS/runtime statistics collection from the console. The
//! implementation lives in `opsdesk-runtime`; the CLI injects it at bootstrap.

use thiserror::Error;

use crate::domain::HostStats;

/// Errors that can occur while probing host statistics.
#[derive(Debug, Error)]
pub enum HostStatsError {
    /// The current process could not be identified.
    #[error("Process lookup failed: {0}")]
    ProcessLookup(String),
}

/// Result type for host stats collection.
pub type HostStatsResult<T> = Result<T, HostStatsError>;

/// Port for sampling host and process statistics.
pub trait HostStatsPort: Send + Sync {
    /// Take a fresh snapshot.
    ///
    /// Fields the source cannot read are left at their defaults rather than
    /// failing the whole snapshot.
    fn snapshot(&self) -> HostStats;
}
