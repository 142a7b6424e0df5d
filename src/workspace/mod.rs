//! Workspace storage backend.
//!
//! A workspace is a path-addressable namespace that lives apart from the local
//! filesystem and is only reachable through [`Workspace::write_file`]. User
//! files belong under the [`FILES_ROOT`] segment; [`prepend_base_path`]
//! applies that rule to a requested path.

mod directory;
mod path;


pub use directory::DirectoryWorkspace;
pub use path::prepend_base_path;

use std::path::PathBuf;
use thiserror::Error;

/// Root segment for user files inside the workspace.
pub const FILES_ROOT: &str = "files";

/// Errors from a workspace backend. Callers treat every variant as
/// "workspace write failed".
#[derive(Error, Debug)]
pub enum WorkspaceError {
    /// No workspace is available to this process.
    #[error("no workspace is configured")]
    NotConfigured,

    /// The path escapes the workspace or is otherwise unusable.
    #[error("invalid workspace path '{0}'")]
    InvalidPath(String),

    /// The backend failed while storing the file.
    #[error("failed to write '{}': {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Write capability for a workspace.
pub trait Workspace {
    /// Store `content` at `path`, replacing anything already there.
    fn write_file(&self, path: &str, content: &[u8]) -> Result<(), WorkspaceError>;
}
