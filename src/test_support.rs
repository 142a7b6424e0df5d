use crate::workspace::{Workspace, WorkspaceError};
use std::cell::RefCell;
use std::path::{Path, PathBuf};
use std::sync::{LazyLock, Mutex, MutexGuard};

static CWD_LOCK: LazyLock<Mutex<()>> = LazyLock::new(|| Mutex::new(()));

pub(crate) struct DirGuard {
    original: PathBuf,
    _lock: MutexGuard<'static, ()>,
}

impl DirGuard {
    pub(crate) fn new(new_dir: &Path) -> Self {
        // Changing the process current working directory is global and not thread-safe.
        // Lock it so tests don't race even if a #[serial] annotation is missed.
        let lock = CWD_LOCK.lock().unwrap_or_else(|poison| poison.into_inner());
        let original = std::env::current_dir().unwrap();
        std::env::set_current_dir(new_dir).unwrap();
        Self {
            original,
            _lock: lock,
        }
    }
}

impl Drop for DirGuard {
    fn drop(&mut self) {
        let _ = std::env::set_current_dir(&self.original);
    }
}

/// Workspace double that keeps every write in memory.
#[derive(Default)]
pub(crate) struct RecordingWorkspace {
    writes: RefCell<Vec<(String, Vec<u8>)>>,
}

impl RecordingWorkspace {
    pub(crate) fn writes(&self) -> Vec<(String, Vec<u8>)> {
        self.writes.borrow().clone()
    }
}

impl Workspace for RecordingWorkspace {
    fn write_file(&self, path: &str, content: &[u8]) -> Result<(), WorkspaceError> {
        self.writes
            .borrow_mut()
            .push((path.to_string(), content.to_vec()));
        Ok(())
    }
}

/// Workspace double whose writes always fail.
pub(crate) struct FailingWorkspace;

impl Workspace for FailingWorkspace {
    fn write_file(&self, _path: &str, _content: &[u8]) -> Result<(), WorkspaceError> {
        Err(WorkspaceError::NotConfigured)
    }
}
