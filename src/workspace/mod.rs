//! Filesystem abstraction for the project directory.
//!
//! The workflow only needs four filesystem capabilities. Routing them
//! through the `Workspace` trait lets the orchestrator run against an
//! in-memory tree in tests and against a recording wrapper in dry-run mode.

mod dry_run;
mod local;
pub mod mock;

pub use dry_run::DryRunWorkspace;
pub use local::LocalWorkspace;

use std::path::{Path, PathBuf};

use serde::Serialize;

use crate::error::Result;

/// A filesystem effect, as recorded by the dry-run and mock workspaces.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum FsOperation {
    CreateDir { path: PathBuf },
    Write { path: PathBuf, bytes: usize },
}

/// Core filesystem operations used by the workflow.
pub trait Workspace {
    /// Check whether a file or directory exists.
    fn exists(&self, path: &Path) -> bool;

    /// Read a UTF-8 file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file is missing or unreadable.
    fn read_to_string(&self, path: &Path) -> Result<String>;

    /// Ensure a directory exists, creating parents as needed.
    ///
    /// Returns `true` if the directory was created, `false` if it was
    /// already present. Existing directories are left untouched.
    fn ensure_dir(&self, path: &Path) -> Result<bool>;

    /// Replace a file's full contents.
    fn write(&self, path: &Path, contents: &str) -> Result<()>;
}

impl<W: Workspace + ?Sized> Workspace for &W {
    fn exists(&self, path: &Path) -> bool {
        (**self).exists(path)
    }

    fn read_to_string(&self, path: &Path) -> Result<String> {
        (**self).read_to_string(path)
    }

    fn ensure_dir(&self, path: &Path) -> Result<bool> {
        (**self).ensure_dir(path)
    }

    fn write(&self, path: &Path, contents: &str) -> Result<()> {
        (**self).write(path, contents)
    }
}
