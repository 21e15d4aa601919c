//! Help page: the full command registry as a two-column table.

use std::io::{self, Write};

use crate::bootstrap::ConsoleContext;
use crate::registry::describe;

/// Execute the help (and man) command.
pub fn execute<W: Write>(ctx: &mut ConsoleContext<W>) -> io::Result<()> {
    let renderer = &mut ctx.renderer;
    renderer.banner("CLI MANUAL")?;

    for descriptor in describe() {
        renderer.key_value(descriptor.usage, descriptor.description)?;
        renderer.vertical_space(1)?;
    }

    renderer.vertical_space(1)?;
    renderer.horizontal_line()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::handlers::test_support::{context, output};
    use opsdesk_db::MemoryRecordStore;

    #[test]
    fn test_lists_every_descriptor_once_in_order() {
        let mut ctx = context(MemoryRecordStore::new());
        execute(&mut ctx).unwrap();
        let out = output(&ctx);

        let rows: Vec<&str> = out
            .lines()
            .filter(|line| describe().iter().any(|d| line.ends_with(d.description)))
            .collect();
        assert_eq!(rows.len(), describe().len());
        for (row, descriptor) in rows.iter().zip(describe()) {
            assert!(row.starts_with(descriptor.usage), "{row}");
        }
    }

    #[test]
    fn test_framed_by_banner_and_rule() {
        let mut ctx = context(MemoryRecordStore::new());
        execute(&mut ctx).unwrap();
        let out = output(&ctx);

        let rule = "-".repeat(60);
        assert!(out.starts_with(&format!("{rule}\n")));
        assert!(out.contains("CLI MANUAL"));
        assert!(out.ends_with(&format!("{rule}\n")));
    }
}
