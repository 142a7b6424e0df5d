//! Top-level flow for a kubewrap invocation.
//!
//! Runs the wrapped command once and routes its output. A failing or
//! unlaunchable command is reported on `out` and is not an error of ours;
//! only configuration problems and a failed local fallback write are.


use crate::config::Config;
use crate::error::{KubewrapError, Result};
use crate::runner::{self, CommandLine, CommandOutcome};
use crate::sink;
use crate::workspace::Workspace;
use std::io::Write;

/// Header printed before the captured stderr of a failed command.
pub const COMMAND_FAILED_HEADER: &str = "An error occurred when executing the command:";

/// Run `prefix ++ COMMAND` and deliver its output.
pub fn run<W: Write>(
    prefix: &[String],
    config: &Config,
    workspace: &dyn Workspace,
    out: &mut W,
) -> Result<()> {
    let command_line = CommandLine::assemble(prefix, &config.command)?;

    match runner::run(&command_line) {
        Ok(CommandOutcome::Succeeded { stdout }) => {
            let delivery = sink::deliver(&stdout, config.output_file.as_deref(), workspace, out)?;
            tracing::debug!(?delivery, "output delivered");
            Ok(())
        }
        Ok(CommandOutcome::Failed { exit_code, stderr }) => {
            tracing::debug!(?exit_code, "command failed");
            writeln!(out, "{}", COMMAND_FAILED_HEADER)
                .and_then(|()| writeln!(out, "{}", stderr))
                .map_err(KubewrapError::TerminalError)
        }
        Err(err @ KubewrapError::LaunchError { .. }) => {
            writeln!(out, "An unexpected error occurred: {}", err)
                .map_err(KubewrapError::TerminalError)
        }
        Err(err) => Err(err),
    }
}
