//! Host statistics source.
//!
//! Implements the runtime side of the `HostStatsPort` contract. Every call
//! samples fresh values; nothing is cached between snapshots.

use opsdesk_core::{HostStats, HostStatsError, HostStatsPort, HostStatsResult, LoadAverage};
use sysinfo::{ProcessesToUpdate, System};

/// `HostStatsPort` backed by `sysinfo`.
#[derive(Debug, Clone, Copy, Default)]
pub struct SysinfoStatsSource;

impl SysinfoStatsSource {
    pub const fn new() -> Self {
        Self
    }
}

impl HostStatsPort for SysinfoStatsSource {
    fn snapshot(&self) -> HostStats {
        let mut sys = System::new();
        sys.refresh_memory();

        let (process_resident_memory, process_virtual_memory) =
            match current_process_memory(&mut sys) {
                Ok((resident, virtual_mem)) => (Some(resident), Some(virtual_mem)),
                Err(e) => {
                    tracing::debug!(error = %e, "Process memory unavailable");
                    (None, None)
                }
            };

        let load = System::load_average();

        HostStats {
            load_average: LoadAverage {
                one: load.one,
                five: load.five,
                fifteen: load.fifteen,
            },
            cpu_count: num_cpus::get(),
            total_memory: sys.total_memory(),
            free_memory: sys.free_memory(),
            used_memory: sys.used_memory(),
            process_resident_memory,
            process_virtual_memory,
            uptime_secs: System::uptime(),
        }
    }
}

/// Resident and virtual memory of this process, in bytes.
fn current_process_memory(sys: &mut System) -> HostStatsResult<(u64, u64)> {
    let pid = sysinfo::get_current_pid()
        .map_err(|e| HostStatsError::ProcessLookup(e.to_string()))?;
    sys.refresh_processes(ProcessesToUpdate::Some(&[pid]), true);

    let process = sys
        .process(pid)
        .ok_or_else(|| HostStatsError::ProcessLookup(format!("pid {pid} not visible")))?;
    Ok((process.memory(), process.virtual_memory()))
}
