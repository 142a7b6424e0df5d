//! CLI argument parsing for kubewrap.
//!
//! Uses clap derive macros. The only input taken from the command line is the
//! fixed prefix of the wrapped command; everything else comes from the
//! environment (see [`crate::config`]).

use clap::Parser;

/// Run a cluster CLI with arguments taken from the environment.
///
/// The command executed is `<PREFIX>...` followed by the shell-split value of
/// `COMMAND`. Its stdout is printed, or saved to `OUTPUT_FILE` in the
/// workspace (falling back to a local file).
#[derive(Parser, Debug)]
#[command(name = "kubewrap")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Fixed leading tokens of the wrapped command, program first (e.g. `kubectl`).
    #[arg(
        value_name = "PREFIX",
        required = true,
        num_args = 1..,
        trailing_var_arg = true,
        allow_hyphen_values = true
    )]
    pub prefix: Vec<String>,
}

impl Cli {
    /// Parse command-line arguments; exits with a usage error if the prefix is missing.
    pub fn parse_args() -> Self {
        Self::parse()
    }
}
