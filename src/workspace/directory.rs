//! Directory-backed workspace provider.
//!
//! Mirrors the GPTScript directory provider: the workspace is a directory on
//! disk named by `GPTSCRIPT_WORKSPACE_DIR`, and workspace paths are relative
//! to it.

use super::{Workspace, WorkspaceError};
use crate::fs::atomic_write;
use std::path::{Component, Path, PathBuf};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DirectoryWorkspace {
    root: Option<PathBuf>,
}

impl DirectoryWorkspace {
    /// A workspace rooted at `root`, or an unavailable one when `root` is `None`.
    pub fn new(root: Option<PathBuf>) -> Self {
        Self { root }
    }

    fn resolve(&self, path: &str) -> Result<PathBuf, WorkspaceError> {
        let root = self.root.as_ref().ok_or(WorkspaceError::NotConfigured)?;

        let relative = Path::new(path);
        let escapes = relative
            .components()
            .any(|c| !matches!(c, Component::Normal(_) | Component::CurDir));
        if path.is_empty() || escapes {
            return Err(WorkspaceError::InvalidPath(path.to_string()));
        }

        Ok(root.join(relative))
    }
}

impl Workspace for DirectoryWorkspace {
    fn write_file(&self, path: &str, content: &[u8]) -> Result<(), WorkspaceError> {
        let target = self.resolve(path)?;
        tracing::debug!(file = %target.display(), bytes = content.len(), "writing workspace file");

        atomic_write(&target, content).map_err(|source| WorkspaceError::Io {
            path: target,
            source,
        })
    }
}
