//! Configuration loading.
//!
//! An optional TOML file can change the installer command, the standard
//! folder names and the blend factor. Lookup order is `--config`, then
//! `<project>/nxs.toml`, then the user config directory.

mod path;
mod schema;

pub use path::{config_candidates, home_dir, resolve_path, user_config_path, PROJECT_CONFIG_FILE};
pub use schema::{Config, FoldersConfig, InstallerConfig, ThemeConfig};

use std::fs;
use std::path::{Path, PathBuf};

use tracing::{debug, info, instrument};

use crate::error::{Result, ScaffoldError};

/// A configuration and the file it came from, if any.
#[derive(Debug, Clone, Default)]
pub struct LoadedConfig {
    pub config: Config,
    pub source: Option<PathBuf>,
}

/// Load configuration for a project.
///
/// An explicit path must exist. Implicit candidates that are missing are
/// skipped, and defaults apply when none exists.
#[instrument]
pub fn load(explicit: Option<&Path>, project_root: &Path) -> Result<LoadedConfig> {
    for candidate in config_candidates(explicit, project_root)? {
        if !candidate.is_file() {
            if explicit.is_some() {
                return Err(ScaffoldError::ConfigNotFound {
                    path: candidate.display().to_string(),
                });
            }
            debug!(path = %candidate.display(), "No config file");
            continue;
        }

        let text = fs::read_to_string(&candidate)?;
        let config = Config::from_toml(&text).map_err(|e| match e {
            ScaffoldError::ConfigParse(msg) => {
                ScaffoldError::ConfigParse(format!("{}: {msg}", candidate.display()))
            }
            other => other,
        })?;
        info!(path = %candidate.display(), "Loaded config");
        return Ok(LoadedConfig {
            config,
            source: Some(candidate),
        });
    }

    debug!("Using default config");
    Ok(LoadedConfig::default())
}
