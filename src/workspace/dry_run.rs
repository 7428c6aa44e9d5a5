//! Read-through workspace that records writes instead of performing them.

use std::path::Path;
use std::sync::Mutex;

use tracing::info;

use super::{FsOperation, Workspace};
use crate::error::Result;

/// Wraps another workspace for `--dry-run`.
///
/// Reads and existence checks go to the inner workspace; directory
/// creation and writes are only recorded.
pub struct DryRunWorkspace<W> {
    inner: W,
    planned: Mutex<Vec<FsOperation>>,
}

impl<W: Workspace> DryRunWorkspace<W> {
    pub const fn new(inner: W) -> Self {
        Self {
            inner,
            planned: Mutex::new(Vec::new()),
        }
    }

    /// Effects that would have been applied, in order.
    pub fn planned(&self) -> Vec<FsOperation> {
        self.planned.lock().unwrap().clone()
    }

    fn is_planned_dir(&self, path: &Path) -> bool {
        self.planned.lock().unwrap().iter().any(
            |op| matches!(op, FsOperation::CreateDir { path: p } if p.starts_with(path)),
        )
    }
}

impl<W: Workspace> Workspace for DryRunWorkspace<W> {
    fn exists(&self, path: &Path) -> bool {
        self.inner.exists(path) || self.is_planned_dir(path)
    }

    fn read_to_string(&self, path: &Path) -> Result<String> {
        self.inner.read_to_string(path)
    }

    fn ensure_dir(&self, path: &Path) -> Result<bool> {
        if self.exists(path) {
            return Ok(false);
        }
        info!(path = %path.display(), "Dry run: would create directory");
        self.planned.lock().unwrap().push(FsOperation::CreateDir {
            path: path.to_path_buf(),
        });
        Ok(true)
    }

    fn write(&self, path: &Path, contents: &str) -> Result<()> {
        info!(path = %path.display(), bytes = contents.len(), "Dry run: would write file");
        self.planned.lock().unwrap().push(FsOperation::Write {
            path: path.to_path_buf(),
            bytes: contents.len(),
        });
        Ok(())
    }
}
