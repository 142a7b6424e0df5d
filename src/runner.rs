//! Wrapped command assembly and execution.
//!
//! The full command line is the fixed prefix from our own arguments followed
//! by the `COMMAND` suffix, split with POSIX shell-word rules.

use crate::error::{KubewrapError, Result};
use std::process::Command;

/// An assembled command line, program first.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandLine {
    tokens: Vec<String>,
}

impl CommandLine {
    /// Build `prefix ++ shell_split(suffix)`.
    ///
    /// The prefix must hold at least the program name. A whitespace-only
    /// suffix contributes no tokens.
    pub fn assemble(prefix: &[String], suffix: &str) -> Result<Self> {
        if prefix.is_empty() {
            return Err(KubewrapError::ConfigError(
                "command prefix is empty; pass at least the program to run".to_string(),
            ));
        }

        let suffix_tokens = shell_words::split(suffix).map_err(|e| {
            KubewrapError::ConfigError(format!(
                "failed to parse COMMAND '{}': {}\n\
                 Fix: check for unmatched quotes or invalid escape sequences.",
                suffix, e
            ))
        })?;

        let mut tokens = prefix.to_vec();
        tokens.extend(suffix_tokens);
        Ok(Self { tokens })
    }

    /// All tokens, program first.
    pub fn tokens(&self) -> &[String] {
        &self.tokens
    }

    pub fn program(&self) -> &str {
        &self.tokens[0]
    }

    pub fn args(&self) -> &[String] {
        &self.tokens[1..]
    }
}

/// Result of running the wrapped command to completion.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CommandOutcome {
    /// The command exited with status zero.
    Succeeded { stdout: String },
    /// The command exited non-zero or was killed by a signal (`exit_code` is `None`).
    Failed {
        exit_code: Option<i32>,
        stderr: String,
    },
}

/// Run the command and block until it exits, capturing stdout and stderr as text.
///
/// Returns `LaunchError` if the process could not be started at all.
pub fn run(command_line: &CommandLine) -> Result<CommandOutcome> {
    tracing::debug!(command = %shell_words::join(command_line.tokens()), "running command");

    let output = Command::new(command_line.program())
        .args(command_line.args())
        .output()
        .map_err(|e| KubewrapError::LaunchError {
            program: command_line.program().to_string(),
            source: e,
        })?;

    tracing::debug!(status = %output.status, "command exited");

    if output.status.success() {
        Ok(CommandOutcome::Succeeded {
            stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
        })
    } else {
        Ok(CommandOutcome::Failed {
            exit_code: output.status.code(),
            stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
        })
    }
}
