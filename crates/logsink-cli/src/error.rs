//! CLI-specific error types and mappings.
//!
//! This module maps failures to exit codes and user-facing messages.

use thiserror::Error;

/// CLI-specific error type.
#[derive(Debug, Error)]
pub enum CliError {
    /// An endpoint could not be started or stopped serving.
    #[error("{0}")]
    Startup(String),

    /// Ctrl-C was received.
    #[error("Shutdown requested")]
    Interrupted,

    /// IO error (signal handler registration, console).
    #[error("IO error: {0}")]
    Io(String),
}

impl CliError {
    /// Map error to appropriate exit code.
    ///
    /// - 1: endpoint failed to start or crashed
    /// - 74: IO error (EX_IOERR)
    /// - 130: interrupted (128 + SIGINT)
    pub const fn exit_code(&self) -> u8 {
        match self {
            Self::Startup(_) => 1,
            Self::Io(_) => 74,
            Self::Interrupted => 130,
        }
    }
}

impl From<anyhow::Error> for CliError {
    fn from(err: anyhow::Error) -> Self {
        Self::Startup(format!("{err:#}"))
    }
}

impl From<std::io::Error> for CliError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}
