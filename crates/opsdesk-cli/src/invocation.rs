//! A matched command paired with the line that triggered it.

use crate::registry::CommandDescriptor;

/// Delimiter that introduces a command's argument.
pub const ARGUMENT_DELIMITER: &str = "--";

/// One dispatch of a recognized command.
#[derive(Debug, Clone, Copy)]
pub struct Invocation<'a> {
    descriptor: &'static CommandDescriptor,
    line: &'a str,
}

impl<'a> Invocation<'a> {
    pub const fn new(descriptor: &'static CommandDescriptor, line: &'a str) -> Self {
        Self { descriptor, line }
    }

    pub const fn descriptor(&self) -> &'static CommandDescriptor {
        self.descriptor
    }

    /// The whitespace-trimmed input line.
    pub const fn line(&self) -> &'a str {
        self.line
    }

    /// The argument token, if one was supplied.
    pub fn argument(&self) -> Option<&'a str> {
        argument_token(self.line)
    }
}

/// Extract the identifier following `--`.
///
/// Only the segment between the first and second delimiter counts. A missing
/// or blank segment yields `None`.
pub fn argument_token(line: &str) -> Option<&str> {
    let token = line.split(ARGUMENT_DELIMITER).nth(1)?.trim();
    (!token.is_empty()).then_some(token)
}
