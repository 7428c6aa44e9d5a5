//! Path resolution for configuration files.
//!
//! Supports absolute paths, paths relative to a base directory, and "~"
//! home directory expansion.

use std::path::{Path, PathBuf};

use tracing::{debug, trace};

use crate::error::{Result, ScaffoldError};

/// File name looked up in the project root.
pub const PROJECT_CONFIG_FILE: &str = "nxs.toml";

/// Resolve a user-supplied path.
///
/// Resolution rules:
/// 1. Paths starting with `~`: expanded to home directory
/// 2. Absolute paths: used as-is
/// 3. Relative paths: resolved relative to `base_dir`
pub fn resolve_path(path: &Path, base_dir: &Path) -> Result<PathBuf> {
    trace!(
        path = %path.display(),
        base_dir = %base_dir.display(),
        "Resolving path"
    );

    let path_str = path.to_string_lossy();

    if path_str == "~" || path_str.starts_with("~/") {
        let home = home_dir()?;
        let rest = path_str.strip_prefix("~/").unwrap_or("");
        let resolved = if rest.is_empty() { home } else { home.join(rest) };
        debug!(
            original = %path.display(),
            resolved = %resolved.display(),
            "Expanded home directory path"
        );
        return Ok(resolved);
    }

    if path.is_absolute() {
        return Ok(path.to_path_buf());
    }

    Ok(base_dir.join(path))
}

/// Resolve the user's home directory (cross-platform).
pub fn home_dir() -> Result<PathBuf> {
    dirs::home_dir()
        .ok_or_else(|| ScaffoldError::ConfigInvalid("Could not determine home directory".to_string()))
}

/// `<config_dir>/nxs/config.toml`, if the platform has a config directory.
pub fn user_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("nxs").join("config.toml"))
}

/// Candidate config files, most specific first.
///
/// An explicit path is the only candidate when given.
pub fn config_candidates(explicit: Option<&Path>, project_root: &Path) -> Result<Vec<PathBuf>> {
    if let Some(path) = explicit {
        let cwd = std::env::current_dir()?;
        return Ok(vec![resolve_path(path, &cwd)?]);
    }

    let mut candidates = vec![project_root.join(PROJECT_CONFIG_FILE)];
    candidates.extend(user_config_path());
    Ok(candidates)
}
