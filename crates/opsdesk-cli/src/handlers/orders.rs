//! Menu and order responders.
//!
//! Acknowledgements only; the record store exposes no menu or order
//! listing to the console yet.

use std::io::{self, Write};

use crate::bootstrap::ConsoleContext;
use crate::invocation::Invocation;

/// Execute the list menu items command.
pub fn list_menu_items<W: Write>(ctx: &mut ConsoleContext<W>) -> io::Result<()> {
    ctx.renderer.line("You asked for menu items")
}

/// Execute the list orders command.
pub fn list_orders<W: Write>(ctx: &mut ConsoleContext<W>) -> io::Result<()> {
    ctx.renderer.line("You asked for orders")
}

/// Execute the more order info command, echoing the raw line.
pub fn more_info<W: Write>(
    ctx: &mut ConsoleContext<W>,
    invocation: &Invocation<'_>,
) -> io::Result<()> {
    ctx.renderer
        .line(format!("You asked for more order info {}", invocation.line()))
}
