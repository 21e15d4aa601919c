//! Active host probing.

mod stats;

pub use stats::SysinfoStatsSource;
