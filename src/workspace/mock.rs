//! In-memory workspace for unit testing.
//!
//! Records every mutating operation and supports error injection,
//! so workflow decisions can be asserted without touching a disk.
//!
//! # Example
//!
//! ```rust
//! use std::path::Path;
//! use nxs::workspace::mock::MemoryWorkspace;
//! use nxs::workspace::{FsOperation, Workspace};
//!
//! let ws = MemoryWorkspace::new().with_dir("/proj/src");
//! ws.ensure_dir(Path::new("/proj/src/hooks")).unwrap();
//!
//! ws.assert_operations(&[FsOperation::CreateDir {
//!     path: "/proj/src/hooks".into(),
//! }]);
//! ```

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use tracing::trace;

use super::{FsOperation, Workspace};
use crate::error::{Result, ScaffoldError};

/// A node in the in-memory tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Entry {
    Dir,
    File(String),
}

/// In-memory filesystem.
#[derive(Default)]
pub struct MemoryWorkspace {
    entries: Mutex<BTreeMap<PathBuf, Entry>>,
    operation_log: Mutex<Vec<FsOperation>>,
    error_injection: Mutex<Option<ScaffoldError>>,
}

impl MemoryWorkspace {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    // === Seeding ===

    /// Seed a directory (and its ancestors).
    #[must_use]
    pub fn with_dir(self, path: impl AsRef<Path>) -> Self {
        self.insert_dir_all(path.as_ref());
        self
    }

    /// Seed a file (ancestors become directories).
    #[must_use]
    pub fn with_file(self, path: impl AsRef<Path>, contents: &str) -> Self {
        let path = path.as_ref();
        if let Some(parent) = path.parent() {
            self.insert_dir_all(parent);
        }
        self.entries
            .lock()
            .unwrap()
            .insert(path.to_path_buf(), Entry::File(contents.to_string()));
        self
    }

    /// Inject an error for the next mutating operation.
    pub fn inject_error(&self, error: ScaffoldError) {
        *self.error_injection.lock().unwrap() = Some(error);
    }

    // === Inspection ===

    /// Contents of a file, if present.
    #[must_use]
    pub fn file(&self, path: &Path) -> Option<String> {
        match self.entries.lock().unwrap().get(path) {
            Some(Entry::File(contents)) => Some(contents.clone()),
            _ => None,
        }
    }

    /// True if `path` is a directory.
    #[must_use]
    pub fn is_dir(&self, path: &Path) -> bool {
        matches!(self.entries.lock().unwrap().get(path), Some(Entry::Dir))
    }

    /// Get all recorded operations.
    #[must_use]
    pub fn operations(&self) -> Vec<FsOperation> {
        self.operation_log.lock().unwrap().clone()
    }

    // === Assertions ===

    /// Assert specific operations were performed.
    ///
    /// # Panics
    ///
    /// Panics if the operations don't match.
    pub fn assert_operations(&self, expected: &[FsOperation]) {
        let actual = self.operations();
        assert_eq!(
            actual, expected,
            "Operation mismatch.\nExpected: {expected:#?}\nActual: {actual:#?}",
        );
    }

    /// Assert no mutating operations were performed.
    ///
    /// # Panics
    ///
    /// Panics if any operations were recorded.
    pub fn assert_no_operations(&self) {
        let ops = self.operations();
        assert!(ops.is_empty(), "Expected no operations, but found: {ops:#?}");
    }

    /// Assert nothing was written to `path`.
    ///
    /// # Panics
    ///
    /// Panics if a write to `path` was recorded.
    pub fn assert_not_written(&self, path: &Path) {
        let ops = self.operations();
        assert!(
            !ops.iter()
                .any(|op| matches!(op, FsOperation::Write { path: p, .. } if p == path)),
            "Expected no write to {}, but found: {ops:#?}",
            path.display()
        );
    }

    // === Internal Helpers ===

    fn insert_dir_all(&self, path: &Path) {
        let mut entries = self.entries.lock().unwrap();
        for ancestor in path.ancestors() {
            if ancestor.as_os_str().is_empty() {
                continue;
            }
            entries.entry(ancestor.to_path_buf()).or_insert(Entry::Dir);
        }
    }

    fn record_op(&self, op: FsOperation) {
        trace!(?op, "Recording operation");
        self.operation_log.lock().unwrap().push(op);
    }

    fn check_error(&self) -> Result<()> {
        if let Some(error) = self.error_injection.lock().unwrap().take() {
            return Err(error);
        }
        Ok(())
    }
}

impl Workspace for MemoryWorkspace {
    fn exists(&self, path: &Path) -> bool {
        self.entries.lock().unwrap().contains_key(path)
    }

    fn read_to_string(&self, path: &Path) -> Result<String> {
        self.file(path).ok_or_else(|| {
            ScaffoldError::Io(std::io::Error::new(
                std::io::ErrorKind::NotFound,
                format!("{} not found", path.display()),
            ))
        })
    }

    fn ensure_dir(&self, path: &Path) -> Result<bool> {
        self.check_error()?;
        if self.is_dir(path) {
            return Ok(false);
        }
        if self.file(path).is_some() {
            return Err(ScaffoldError::Io(std::io::Error::new(
                std::io::ErrorKind::AlreadyExists,
                format!("{} is a file", path.display()),
            )));
        }
        self.record_op(FsOperation::CreateDir {
            path: path.to_path_buf(),
        });
        self.insert_dir_all(path);
        Ok(true)
    }

    fn write(&self, path: &Path, contents: &str) -> Result<()> {
        self.check_error()?;
        self.record_op(FsOperation::Write {
            path: path.to_path_buf(),
            bytes: contents.len(),
        });
        self.entries
            .lock()
            .unwrap()
            .insert(path.to_path_buf(), Entry::File(contents.to_string()));
        Ok(())
    }
}
