//! Exit code constants for the kubewrap CLI.
//!
//! - 0: Success (including a wrapped command that failed, which is reported as output)
//! - 1: Configuration error (`COMMAND` missing, empty, or unparseable)
//! - 2: Usage error (no prefix tokens; emitted by clap itself)
//! - 3: Output failure (the local fallback write failed)

/// Successful execution.
pub const SUCCESS: i32 = 0;

/// Configuration error: the environment does not describe a runnable command.
pub const CONFIG_ERROR: i32 = 1;

/// Usage error. clap exits with this code when required arguments are missing.
#[allow(dead_code)]
pub const USAGE_ERROR: i32 = 2;

/// Output failure: captured output could not be written anywhere.
pub const OUTPUT_FAILURE: i32 = 3;
