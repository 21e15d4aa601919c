//! Responders, one per recognized command.
//!
//! Responders follow the canonical pattern:
//! - Signature: `execute(ctx: &mut ConsoleContext<W>, ...) -> io::Result<()>`
//! - Stateless, one-shot: read through the context's services, then render
//! - Store failures become user-facing text here; only write errors escape

pub mod help;
pub mod orders;
pub mod stats;
pub mod users;

/// Notice shown when a responder needs an argument and none was given.
pub(crate) fn missing_argument_notice(usage: &str) -> String {
    format!("Please supply an id, e.g. {usage}")
}
