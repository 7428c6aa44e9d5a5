//! Workspace backed by the real filesystem.

use std::fs;
use std::path::Path;

use tracing::{debug, instrument, trace};

use super::Workspace;
use crate::error::{Result, ResultExt};

/// The real filesystem.
#[derive(Debug, Default, Clone, Copy)]
pub struct LocalWorkspace;

impl LocalWorkspace {
    pub const fn new() -> Self {
        Self
    }
}

impl Workspace for LocalWorkspace {
    fn exists(&self, path: &Path) -> bool {
        let exists = path.exists();
        trace!(path = %path.display(), exists, "Checked path");
        exists
    }

    #[instrument(skip(self), fields(path = %path.display()))]
    fn read_to_string(&self, path: &Path) -> Result<String> {
        Ok(fs::read_to_string(path)?)
    }

    #[instrument(skip(self), fields(path = %path.display()))]
    fn ensure_dir(&self, path: &Path) -> Result<bool> {
        if path.is_dir() {
            debug!("Directory already exists");
            return Ok(false);
        }
        fs::create_dir_all(path)
            .with_context(|| format!("Failed to create {}", path.display()))?;
        debug!("Created directory");
        Ok(true)
    }

    #[instrument(skip(self, contents), fields(path = %path.display(), bytes = contents.len()))]
    fn write(&self, path: &Path, contents: &str) -> Result<()> {
        fs::write(path, contents).with_context(|| format!("Failed to write {}", path.display()))?;
        debug!("Wrote file");
        Ok(())
    }
}
