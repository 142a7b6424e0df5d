//! Runtime configuration for kubewrap.
//!
//! All settings come from the process environment and are read exactly once at
//! startup into a [`Config`]. Nothing else in the crate reads the environment.

use crate::error::{KubewrapError, Result};
use std::path::PathBuf;

/// Environment variable holding the shell-tokenized command suffix.
pub const COMMAND_VAR: &str = "COMMAND";

/// Environment variable naming the output destination.
pub const OUTPUT_FILE_VAR: &str = "OUTPUT_FILE";

/// Environment variable naming the workspace root directory.
pub const WORKSPACE_DIR_VAR: &str = "GPTSCRIPT_WORKSPACE_DIR";

/// Environment variable holding the tracing filter directive.
pub const LOG_VAR: &str = "KUBEWRAP_LOG";

/// Settings for a single invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Raw `COMMAND` value, appended after the prefix once tokenized.
    pub command: String,
    /// Where captured stdout goes. `None` means the terminal.
    pub output_file: Option<String>,
    /// Root directory of the workspace, if one is available.
    pub workspace_dir: Option<PathBuf>,
}

impl Config {
    /// Load configuration from the process environment.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load configuration through an arbitrary key lookup.
    ///
    /// Empty values are treated the same as unset ones.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let non_empty = |key: &str| lookup(key).filter(|value| !value.is_empty());

        let command = non_empty(COMMAND_VAR).ok_or_else(|| {
            KubewrapError::ConfigError(format!("{} is not set, it is required.", COMMAND_VAR))
        })?;

        Ok(Self {
            command,
            output_file: non_empty(OUTPUT_FILE_VAR),
            workspace_dir: non_empty(WORKSPACE_DIR_VAR).map(PathBuf::from),
        })
    }
}
