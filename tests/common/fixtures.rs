//! Temporary Next.js project directories.

use std::fs;
use std::path::{Path, PathBuf};

use tempfile::TempDir;

/// Minimal package.json declaring `next`.
pub const NEXT_PACKAGE_JSON: &str = r#"{
  "name": "fixture-site",
  "private": true,
  "dependencies": {
    "next": "15.1.0",
    "react": "19.0.0",
    "react-dom": "19.0.0"
  }
}
"#;

/// Placeholder stylesheet content that a run should replace.
pub const OLD_GLOBALS_CSS: &str = "@import \"tailwindcss\";\n/* generated by create-next-app */\n";

/// A project in a temporary directory, removed on drop.
///
/// # Example
///
/// ```ignore
/// let project = TestProject::next().with_src().with_globals_css("src/app/globals.css");
/// // run nxs in project.path()
/// ```
pub struct TestProject {
    pub dir: TempDir,
}

impl TestProject {
    /// An empty directory: no package.json at all.
    ///
    /// # Panics
    ///
    /// Panics if the temp directory cannot be created.
    #[must_use]
    pub fn empty() -> Self {
        Self {
            dir: TempDir::new().expect("Failed to create temp directory"),
        }
    }

    /// A directory with a package.json that declares `next`.
    #[must_use]
    pub fn next() -> Self {
        Self::empty().with_file("package.json", NEXT_PACKAGE_JSON)
    }

    /// Add `src/`.
    #[must_use]
    pub fn with_src(self) -> Self {
        self.with_dir("src")
    }

    /// Add a placeholder stylesheet at `rel`.
    #[must_use]
    pub fn with_globals_css(self, rel: &str) -> Self {
        self.with_file(rel, OLD_GLOBALS_CSS)
    }

    /// # Panics
    ///
    /// Panics if the directory cannot be created.
    #[must_use]
    pub fn with_dir(self, rel: &str) -> Self {
        fs::create_dir_all(self.path().join(rel)).expect("Failed to create directory");
        self
    }

    /// Write `contents` to `rel`, creating parents.
    ///
    /// # Panics
    ///
    /// Panics if the file cannot be written.
    #[must_use]
    pub fn with_file(self, rel: &str, contents: &str) -> Self {
        let path = self.path().join(rel);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).expect("Failed to create parent directory");
        }
        fs::write(&path, contents).expect("Failed to write fixture file");
        self
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    #[must_use]
    pub fn join(&self, rel: &str) -> PathBuf {
        self.path().join(rel)
    }

    /// Read a file relative to the project root.
    ///
    /// # Panics
    ///
    /// Panics if the file cannot be read.
    #[must_use]
    pub fn read(&self, rel: &str) -> String {
        fs::read_to_string(self.join(rel))
            .unwrap_or_else(|e| panic!("Failed to read {rel}: {e}"))
    }
}
