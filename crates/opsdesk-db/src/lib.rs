//! Record store implementations for opsdesk.
//!
//! - [`FsRecordStore`]: JSON documents on disk, one file per record
//! - [`MemoryRecordStore`]: in-memory store for tests (`test-utils` feature)

#![deny(unsafe_code)]

mod fs_store;
#[cfg(any(test, feature = "test-utils"))]
mod memory_store;

pub use fs_store::{FsRecordStore, RECORD_EXTENSION};
#[cfg(any(test, feature = "test-utils"))]
pub use memory_store::MemoryRecordStore;
