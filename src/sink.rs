//! Routing of captured command output.
//!
//! Output lands in exactly one place: the terminal when no destination is
//! configured, otherwise the workspace, otherwise a local file at the
//! requested path.

use crate::error::{KubewrapError, Result};
use crate::workspace::{FILES_ROOT, Workspace, prepend_base_path};
use std::io::Write;
use std::path::PathBuf;

/// Where the captured output ended up.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Delivery {
    /// Printed to the terminal.
    Printed,
    /// Stored in the workspace at `path` (already rooted under `files`).
    Workspace { path: String },
    /// The workspace write failed and the output was written locally.
    LocalFallback { path: PathBuf },
}

/// Deliver `stdout` to its destination, writing user-facing messages to `out`.
///
/// A failed workspace write is recovered here. Errors come only from the local
/// fallback write or from writing to `out`.
pub fn deliver<W: Write>(
    stdout: &str,
    destination: Option<&str>,
    workspace: &dyn Workspace,
    out: &mut W,
) -> Result<Delivery> {
    let Some(requested) = destination else {
        out.write_all(stdout.as_bytes())
            .and_then(|()| out.flush())
            .map_err(KubewrapError::TerminalError)?;
        return Ok(Delivery::Printed);
    };

    let workspace_path = prepend_base_path(FILES_ROOT, requested);
    tracing::debug!(requested, workspace_path = %workspace_path, "saving output to workspace");

    match workspace.write_file(&workspace_path, stdout.as_bytes()) {
        Ok(()) => {
            report(
                out,
                &format!(
                    "Output has been saved to {} in the workspace files directory.",
                    requested
                ),
            )?;
            Ok(Delivery::Workspace {
                path: workspace_path,
            })
        }
        Err(e) => {
            tracing::warn!(error = %e, workspace_path = %workspace_path, "workspace write failed");
            report(
                out,
                "Failed to save to workspace, saving to local file instead.",
            )?;

            let path = PathBuf::from(requested);
            std::fs::write(&path, stdout).map_err(|source| KubewrapError::OutputError {
                path: path.clone(),
                source,
            })?;
            Ok(Delivery::LocalFallback { path })
        }
    }
}

fn report<W: Write>(out: &mut W, message: &str) -> Result<()> {
    writeln!(out, "{}", message).map_err(KubewrapError::TerminalError)
}
