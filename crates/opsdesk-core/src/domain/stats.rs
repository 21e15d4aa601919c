//! Host and process statistics snapshot.

use std::fmt;

/// System load averages over 1, 5 and 15 minutes.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct LoadAverage {
    pub one: f64,
    pub five: f64,
    pub fifteen: f64,
}

impl fmt::Display for LoadAverage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {}", self.one, self.five, self.fifteen)
    }
}

/// Point-in-time statistics about the host and the console process.
///
/// Memory figures are in bytes.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct HostStats {
    pub load_average: LoadAverage,
    pub cpu_count: usize,
    pub total_memory: u64,
    pub free_memory: u64,
    pub used_memory: u64,
    /// Resident set size of this process, if it could be read.
    pub process_resident_memory: Option<u64>,
    /// Virtual memory size of this process, if it could be read.
    pub process_virtual_memory: Option<u64>,
    pub uptime_secs: u64,
}

impl HostStats {
    /// Share of total memory in use, rounded to the nearest percent.
    #[allow(clippy::cast_precision_loss, clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub fn used_memory_percent(&self) -> u64 {
        if self.total_memory == 0 {
            return 0;
        }
        ((self.used_memory as f64 / self.total_memory as f64) * 100.0).round() as u64
    }
}
