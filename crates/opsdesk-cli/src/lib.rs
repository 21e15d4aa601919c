//! Interactive operator console.
//!
//! Reads free-form lines, matches each against a fixed command registry by
//! case-insensitive substring containment, and dispatches to one responder
//! that renders human-readable output.
//!
//! Line source → [`Dispatcher`] → responder (`handlers`) → [`presentation`].

#![deny(unsafe_code)]
#![deny(unused_crate_dependencies)]

// Binary-only dependencies, used by main.rs
use anyhow as _;
use dotenvy as _;
use tracing_subscriber as _;

// Dev-dependency used only by integration tests
#[cfg(test)]
use tempfile as _;

pub mod bootstrap;
pub mod dispatcher;
pub mod error;
pub mod handlers;
pub mod invocation;
pub mod presentation;
pub mod registry;
pub mod repl;

// Re-export primary types for convenient access
pub use bootstrap::{ConsoleConfig, ConsoleContext, bootstrap};
pub use dispatcher::{Dispatcher, Flow, UNRECOGNIZED_NOTICE};
pub use error::CliError;
pub use invocation::{Invocation, argument_token};
pub use registry::{Command, CommandDescriptor, describe, match_command};
pub use repl::{LineSource, ScriptedSource, TerminalSource};
