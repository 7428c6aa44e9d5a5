//! Configuration file schema.

use std::path::{Component, Path};

use serde::{Deserialize, Serialize};

use crate::error::{Result, ScaffoldError};
use crate::runner::CommandSpec;
use crate::theme::DEFAULT_BLEND_FACTOR;

/// Top-level configuration. Every field has a default, so an empty file
/// (or no file) reproduces the stock behaviour.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    pub installer: InstallerConfig,
    pub folders: FoldersConfig,
    pub theme: ThemeConfig,
}

/// Component-library installer invocation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct InstallerConfig {
    /// Package runner, e.g. `npx`, `pnpm`, `bunx`.
    pub program: String,
    /// Installer package passed to the runner.
    pub package: String,
    /// Component added after initialisation.
    pub component: String,
}

impl Default for InstallerConfig {
    fn default() -> Self {
        Self {
            program: "npx".to_string(),
            package: "shadcn".to_string(),
            component: "button".to_string(),
        }
    }
}

impl InstallerConfig {
    /// `<program> <package> init`
    pub fn init_command(&self) -> CommandSpec {
        CommandSpec::new(self.program.clone(), [self.package.as_str(), "init"])
    }

    /// `<program> <package> add <component>`
    pub fn add_command(&self) -> CommandSpec {
        CommandSpec::new(
            self.program.clone(),
            [self.package.as_str(), "add", self.component.as_str()],
        )
    }
}

/// Standard folders created under the source root.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct FoldersConfig {
    pub names: Vec<String>,
}

impl Default for FoldersConfig {
    fn default() -> Self {
        Self {
            names: ["components", "hooks", "utils"]
                .into_iter()
                .map(String::from)
                .collect(),
        }
    }
}

/// Theme generation settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ThemeConfig {
    pub blend_factor: f64,
}

impl Default for ThemeConfig {
    fn default() -> Self {
        Self {
            blend_factor: DEFAULT_BLEND_FACTOR,
        }
    }
}

impl Config {
    /// Parse TOML text.
    pub fn from_toml(text: &str) -> Result<Self> {
        let config: Self =
            toml::from_str(text).map_err(|e| ScaffoldError::ConfigParse(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Reject values the workflow cannot use safely.
    pub fn validate(&self) -> Result<()> {
        if self.installer.program.trim().is_empty() {
            return Err(ScaffoldError::ConfigInvalid(
                "installer.program must not be empty".to_string(),
            ));
        }

        for name in &self.folders.names {
            let mut components = Path::new(name).components();
            let single_normal = matches!(
                (components.next(), components.next()),
                (Some(Component::Normal(_)), None)
            );
            if !single_normal {
                return Err(ScaffoldError::ConfigInvalid(format!(
                    "folders.names entry '{name}' must be a single relative directory name"
                )));
            }
        }

        let factor = self.theme.blend_factor;
        if !(0.0..=1.0).contains(&factor) {
            return Err(ScaffoldError::ConfigInvalid(format!(
                "theme.blend_factor must be between 0 and 1, got {factor}"
            )));
        }

        Ok(())
    }
}
