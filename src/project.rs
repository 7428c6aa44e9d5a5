//! Next.js project inspection.
//!
//! Everything here is read-only: validating `package.json`, choosing the
//! source root and locating the stylesheet to overwrite.

use std::path::{Path, PathBuf};

use serde_json::Value;
use tracing::{debug, instrument};

use crate::error::{Result, ScaffoldError};
use crate::workspace::Workspace;

/// The project descriptor file.
pub const DESCRIPTOR_FILE: &str = "package.json";

/// Dependency that marks a directory as a Next.js project.
pub const FRAMEWORK_DEPENDENCY: &str = "next";

/// Stylesheet locations relative to the project root, in lookup order.
pub const STYLESHEET_CANDIDATES: [&str; 2] = ["src/app/globals.css", "app/globals.css"];

/// Parsed `package.json`.
///
/// The file is arbitrary JSON, so it is kept as a `Value` and queried
/// leniently: a missing or non-object `dependencies` simply has no entries.
#[derive(Debug, Clone)]
pub struct PackageManifest {
    raw: Value,
}

impl PackageManifest {
    pub fn parse(text: &str) -> std::result::Result<Self, serde_json::Error> {
        Ok(Self {
            raw: serde_json::from_str(text)?,
        })
    }

    pub fn name(&self) -> Option<&str> {
        self.raw.get("name").and_then(Value::as_str)
    }

    /// Declared version of `dependency` from `dependencies`, falling back
    /// to `devDependencies`. Empty, `null` and `false` entries count as
    /// undeclared.
    pub fn dependency(&self, dependency: &str) -> Option<&Value> {
        ["dependencies", "devDependencies"]
            .iter()
            .filter_map(|section| self.raw.get(section)?.get(dependency))
            .find(|v| is_truthy(v))
    }

    pub fn has_dependency(&self, dependency: &str) -> bool {
        self.dependency(dependency).is_some()
    }
}

fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::String(s) => !s.is_empty(),
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0),
        Value::Array(_) | Value::Object(_) => true,
    }
}

/// A validated project directory.
#[derive(Debug, Clone)]
pub struct Project {
    pub root: PathBuf,
    pub src_root: PathBuf,
    pub manifest: PackageManifest,
}

impl Project {
    /// Validate `root` and detect its source root.
    #[instrument(skip(ws), fields(root = %root.display()))]
    pub fn open(ws: &dyn Workspace, root: &Path) -> Result<Self> {
        let manifest = ensure_next_project(ws, root)?;
        let src_root = detect_src_root(ws, root);
        Ok(Self {
            root: root.to_path_buf(),
            src_root,
            manifest,
        })
    }
}

/// Check that `root` holds a `package.json` declaring `next`.
pub fn ensure_next_project(ws: &dyn Workspace, root: &Path) -> Result<PackageManifest> {
    let path = root.join(DESCRIPTOR_FILE);
    if !ws.exists(&path) {
        return Err(ScaffoldError::DescriptorNotFound { path });
    }

    let text = ws.read_to_string(&path)?;
    let manifest =
        PackageManifest::parse(&text).map_err(|e| ScaffoldError::DescriptorInvalid {
            path: path.clone(),
            reason: e.to_string(),
        })?;

    match manifest.dependency(FRAMEWORK_DEPENDENCY) {
        Some(version) => {
            debug!(name = ?manifest.name(), %version, "Found Next.js project");
            Ok(manifest)
        }
        None => Err(ScaffoldError::FrameworkDependencyMissing { path }),
    }
}

/// `<root>/src` if it exists, otherwise `root`.
pub fn detect_src_root(ws: &dyn Workspace, root: &Path) -> PathBuf {
    let src = root.join("src");
    if ws.exists(&src) {
        debug!(src_root = %src.display(), "Using src directory");
        src
    } else {
        debug!(src_root = %root.display(), "No src directory, using project root");
        root.to_path_buf()
    }
}

/// First existing stylesheet candidate.
pub fn detect_globals_css(ws: &dyn Workspace, root: &Path) -> Result<PathBuf> {
    let candidates: Vec<PathBuf> = STYLESHEET_CANDIDATES
        .iter()
        .map(|rel| root.join(rel))
        .collect();

    if let Some(found) = candidates.iter().find(|path| ws.exists(path)) {
        debug!(path = %found.display(), "Found stylesheet");
        return Ok(found.clone());
    }
    Err(ScaffoldError::StylesheetNotFound { candidates })
}
