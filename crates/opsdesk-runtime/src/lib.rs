//! OS-level adapters for opsdesk.
//!
//! Implements the host statistics port from `opsdesk-core` with `sysinfo`.

#![deny(unsafe_code)]

pub mod system;

pub use system::SysinfoStatsSource;
