//! CLI-specific error types and exit code mapping.
//!
//! Responders never surface errors here; these cover console startup and
//! the terminal itself.

use thiserror::Error;

/// CLI-specific error type.
#[derive(Debug, Error)]
pub enum CliError {
    /// Terminal could not be opened or read.
    #[error("Terminal error: {0}")]
    Terminal(String),

    /// Writing console output failed.
    #[error("IO error: {0}")]
    Io(String),
}

impl CliError {
    /// Map error to a process exit code.
    ///
    /// Exit codes follow Unix conventions:
    /// - 1: General error
    /// - 64-78: Reserved for specific error categories (see sysexits.h)
    pub const fn exit_code(&self) -> u8 {
        match self {
            Self::Terminal(_) => 71, // EX_OSERR
            Self::Io(_) => 74,       // EX_IOERR
        }
    }
}

impl From<std::io::Error> for CliError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}
