//! Dispatcher - routes one input line to exactly one responder.
//!
//! Each recognized [`Command`] maps to its responder by a direct call; there
//! is no broadcast or subscription layer in between.

use std::io::{self, Write};

use tracing::debug;

use crate::bootstrap::ConsoleContext;
use crate::handlers;
use crate::invocation::Invocation;
use crate::registry::{Command, match_command};

/// Printed when a line matches no command.
pub const UNRECOGNIZED_NOTICE: &str = "Sorry, try again";

/// What the line source should do after a line has been processed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    /// Prompt for the next line.
    Continue,
    /// Stop reading and end the process successfully.
    Exit,
}

/// Matches input lines and invokes responders against a console context.
pub struct Dispatcher<W: Write> {
    ctx: ConsoleContext<W>,
}

impl<W: Write> Dispatcher<W> {
    pub const fn new(ctx: ConsoleContext<W>) -> Self {
        Self { ctx }
    }

    pub const fn context(&self) -> &ConsoleContext<W> {
        &self.ctx
    }

    pub fn context_mut(&mut self) -> &mut ConsoleContext<W> {
        &mut self.ctx
    }

    pub fn into_context(self) -> ConsoleContext<W> {
        self.ctx
    }

    /// Process one input line.
    ///
    /// Blank lines are ignored. Any responder work, including store reads,
    /// has finished and been written out by the time this returns.
    pub async fn process(&mut self, line: &str) -> io::Result<Flow> {
        let line = line.trim();
        if line.is_empty() {
            return Ok(Flow::Continue);
        }

        let Some(descriptor) = match_command(line) else {
            debug!(line, "No command matched");
            self.ctx.renderer.line(UNRECOGNIZED_NOTICE)?;
            return Ok(Flow::Continue);
        };

        debug!(command = descriptor.phrase, "Dispatching");
        self.respond(&Invocation::new(descriptor, line)).await
    }

    async fn respond(&mut self, invocation: &Invocation<'_>) -> io::Result<Flow> {
        let ctx = &mut self.ctx;
        match invocation.descriptor().command {
            Command::Man | Command::Help => handlers::help::execute(ctx)?,
            Command::Exit => return Ok(Flow::Exit),
            Command::Stats => handlers::stats::execute(ctx)?,
            Command::ListUsers => handlers::users::list(ctx).await?,
            Command::MoreUserInfo => handlers::users::more_info(ctx, invocation).await?,
            Command::ListMenuItems => handlers::orders::list_menu_items(ctx)?,
            Command::ListOrders => handlers::orders::list_orders(ctx)?,
            Command::MoreOrderInfo => handlers::orders::more_info(ctx, invocation)?,
        }
        Ok(Flow::Continue)
    }
}
