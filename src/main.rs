//! kubewrap: run a cluster CLI with arguments from the environment.
//!
//! This is the entry point for the `kubewrap` CLI. It parses the command
//! prefix, loads configuration from the environment once, runs the wrapped
//! command, and maps errors to exit codes.

mod cli;
mod commands;
pub mod config;
pub mod error;
pub mod exit_codes;
pub mod fs;
mod logging;
pub mod runner;
pub mod sink;
pub mod workspace;

#[cfg(test)]
mod test_support;

use cli::Cli;
use config::Config;
use std::process::ExitCode;
use workspace::DirectoryWorkspace;

fn main() -> ExitCode {
    let cli = Cli::parse_args();
    logging::init();

    let result = Config::from_env().and_then(|config| {
        let workspace = DirectoryWorkspace::new(config.workspace_dir.clone());
        let mut stdout = std::io::stdout().lock();
        commands::run(&cli.prefix, &config, &workspace, &mut stdout)
    });

    match result {
        Ok(()) => ExitCode::from(exit_codes::SUCCESS as u8),
        Err(err) => {
            // COMMAND problems are reported on stdout like the rest of our messages.
            match &err {
                error::KubewrapError::ConfigError(_) => println!("{}", err),
                _ => eprintln!("Error: {}", err),
            }
            ExitCode::from(err.exit_code() as u8)
        }
    }
}
