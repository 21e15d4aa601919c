//! System statistics page.

use std::io::{self, Write};

use crate::bootstrap::ConsoleContext;

/// Execute the stats command.
///
/// Samples the host once and renders every figure as a key/value row.
/// Memory figures are raw byte counts.
pub fn execute<W: Write>(ctx: &mut ConsoleContext<W>) -> io::Result<()> {
    let stats = ctx.stats.snapshot();
    let rows = [
        ("Load Average", stats.load_average.to_string()),
        ("CPU Count", stats.cpu_count.to_string()),
        ("Free Memory", stats.free_memory.to_string()),
        ("Total Memory", stats.total_memory.to_string()),
        ("Used Memory (%)", stats.used_memory_percent().to_string()),
        ("Process Resident Memory", optional_bytes(stats.process_resident_memory)),
        ("Process Virtual Memory", optional_bytes(stats.process_virtual_memory)),
        ("Uptime", format!("{} Seconds", stats.uptime_secs)),
    ];

    let renderer = &mut ctx.renderer;
    renderer.banner("SYSTEM STATISTICS")?;
    for (key, value) in rows {
        renderer.key_value(key, value)?;
        renderer.vertical_space(1)?;
    }
    renderer.vertical_space(1)?;
    renderer.horizontal_line()
}

fn optional_bytes(value: Option<u64>) -> String {
    value.map_or_else(|| "unavailable".to_string(), |bytes| bytes.to_string())
}
