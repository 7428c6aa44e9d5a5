//! Error types for scaffolding operations.

use std::path::PathBuf;

use thiserror::Error;

/// Primary error type for a scaffolding run.
#[derive(Error, Debug)]
pub enum ScaffoldError {
    // Project errors
    #[error("package.json not found. Run this inside a Next.js project.")]
    DescriptorNotFound { path: PathBuf },

    #[error("package.json could not be parsed: {reason}")]
    DescriptorInvalid { path: PathBuf, reason: String },

    #[error("next dependency not found in package.json. Run this inside a Next.js project.")]
    FrameworkDependencyMissing { path: PathBuf },

    #[error("globals.css not found. Expected src/app/globals.css or app/globals.css.")]
    StylesheetNotFound { candidates: Vec<PathBuf> },

    // Installer errors
    #[error("Installer program '{program}' not found on PATH")]
    InstallerNotFound { program: String },

    #[error("Failed to start '{command}': {reason}")]
    InstallerSpawn { command: String, reason: String },

    #[error("Command '{command}' failed with {status}")]
    InstallerFailed { command: String, status: String },

    // Input errors
    #[error("Invalid color '{value}': expected 6 hex digits without # (e.g. 336699)")]
    InvalidColor { value: String },

    #[error("Prompt cancelled by user")]
    PromptCancelled,

    #[error("Prompt failed: {0}")]
    PromptFailed(String),

    // Configuration errors
    #[error("Configuration file not found: {path}")]
    ConfigNotFound { path: String },

    #[error("Configuration parse error: {0}")]
    ConfigParse(String),

    #[error("Invalid configuration: {0}")]
    ConfigInvalid(String),

    // General errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("{0}")]
    Other(String),
}

impl ScaffoldError {
    /// Returns true if the error is recoverable by the user.
    pub const fn is_user_recoverable(&self) -> bool {
        matches!(
            self,
            Self::DescriptorNotFound { .. }
                | Self::FrameworkDependencyMissing { .. }
                | Self::StylesheetNotFound { .. }
                | Self::InstallerNotFound { .. }
                | Self::InvalidColor { .. }
                | Self::ConfigNotFound { .. }
        )
    }

    /// Returns a suggestion for how to fix the error.
    pub fn suggestion(&self) -> Option<&'static str> {
        match self {
            Self::DescriptorNotFound { .. } => {
                Some("cd into the project directory or pass --dir <PATH>")
            }
            Self::FrameworkDependencyMissing { .. } => Some("Run: npm install next"),
            Self::StylesheetNotFound { .. } => {
                Some("Create app/globals.css (or src/app/globals.css) and run again")
            }
            Self::InstallerNotFound { .. } => {
                Some("Install Node.js, or set NXS_INSTALLER / [installer].program")
            }
            Self::InvalidColor { .. } => Some("Use a value like 336699 (no leading #)"),
            Self::ConfigNotFound { .. } => Some("Check the --config path"),
            _ => None,
        }
    }
}

/// Convenience type alias for Results using ScaffoldError.
pub type Result<T> = std::result::Result<T, ScaffoldError>;

/// Extension trait for adding context to errors.
pub trait ResultExt<T> {
    fn with_context<F, S>(self, f: F) -> Result<T>
    where
        F: FnOnce() -> S,
        S: Into<String>;
}

impl<T, E: std::error::Error> ResultExt<T> for std::result::Result<T, E> {
    fn with_context<F, S>(self, f: F) -> Result<T>
    where
        F: FnOnce() -> S,
        S: Into<String>,
    {
        self.map_err(|e| ScaffoldError::Other(format!("{}: {e}", f().into())))
    }
}
