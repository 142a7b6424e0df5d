//! Error types for the kubewrap CLI.
//!
//! Uses thiserror for derive macros. Each variant maps to an exit code.

use crate::exit_codes;
use std::path::PathBuf;
use thiserror::Error;

/// Main error type for kubewrap operations.
#[derive(Error, Debug)]
pub enum KubewrapError {
    /// The environment does not describe a runnable command.
    #[error("{0}")]
    ConfigError(String),

    /// The wrapped command could not be started.
    #[error("failed to launch '{program}': {source}")]
    LaunchError {
        program: String,
        #[source]
        source: std::io::Error,
    },

    /// Output or status messages could not be written to the terminal.
    #[error("failed to write to stdout: {0}")]
    TerminalError(#[source] std::io::Error),

    /// Captured output could not be written to the local filesystem.
    #[error("failed to write output to '{}': {source}", path.display())]
    OutputError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl KubewrapError {
    /// Returns the appropriate exit code for this error type.
    ///
    /// Launch errors are normally reported as output before reaching `main`;
    /// they map to `SUCCESS` so that behavior holds if one ever escapes.
    pub fn exit_code(&self) -> i32 {
        match self {
            KubewrapError::ConfigError(_) => exit_codes::CONFIG_ERROR,
            KubewrapError::LaunchError { .. } => exit_codes::SUCCESS,
            KubewrapError::TerminalError(_) => exit_codes::OUTPUT_FAILURE,
            KubewrapError::OutputError { .. } => exit_codes::OUTPUT_FAILURE,
        }
    }
}

/// Result type alias for kubewrap operations.
pub type Result<T> = std::result::Result<T, KubewrapError>;
