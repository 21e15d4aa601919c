//! Core domain types, ports, and services for the opsdesk operator console.
//!
//! This crate has no knowledge of terminals, files, or the host OS. Adapters
//! (`opsdesk-db`, `opsdesk-runtime`) implement the ports defined here, and the
//! CLI composes them at its bootstrap.

#![deny(unused_crate_dependencies)]

pub mod domain;
pub mod ports;
pub mod services;

// Re-export commonly used types for convenience
pub use domain::{
    CREDENTIAL_FIELD, Collection, HIDDEN_RECORD_PREFIX, HostStats, LoadAverage, User,
    is_hidden_record,
};
pub use ports::{
    CoreError, HostStatsError, HostStatsPort, HostStatsResult, RecordStore, RepositoryError,
};
pub use services::UserDirectory;
