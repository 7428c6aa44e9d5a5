//! What a single run did.

use std::path::PathBuf;

use serde::Serialize;

use crate::project::Project;
use crate::runner::CommandSpec;
use crate::theme::ThemePalette;
use crate::workspace::FsOperation;

use super::Answers;

/// Final message when the theme step is declined.
pub const NO_THEME_MESSAGE: &str = "Done. No theme changes applied.";

/// Final message after the stylesheet is written.
pub const THEME_APPLIED_MESSAGE: &str = "Theme configured successfully.";

/// Outcome of the theme step.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum ThemeOutcome {
    #[default]
    Declined,
    Applied {
        stylesheet: PathBuf,
        palette: ThemePalette,
    },
}

/// Serializable record of one workflow run.
#[derive(Debug, Clone, Serialize)]
pub struct RunReport {
    pub root: PathBuf,
    pub src_root: PathBuf,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub project_name: Option<String>,
    pub dry_run: bool,
    pub answers: Answers,
    /// Installer commands, in the order they ran (or would have run).
    pub commands: Vec<CommandSpec>,
    pub folders_created: Vec<PathBuf>,
    pub folders_existing: Vec<PathBuf>,
    pub theme: ThemeOutcome,
    pub message: &'static str,
    /// Filesystem effects skipped because of `--dry-run`.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub planned: Vec<FsOperation>,
}

impl RunReport {
    pub fn new(project: &Project) -> Self {
        Self {
            root: project.root.clone(),
            src_root: project.src_root.clone(),
            project_name: project.manifest.name().map(String::from),
            dry_run: false,
            answers: Answers::default(),
            commands: Vec::new(),
            folders_created: Vec::new(),
            folders_existing: Vec::new(),
            theme: ThemeOutcome::Declined,
            message: NO_THEME_MESSAGE,
            planned: Vec::new(),
        }
    }

    /// Mark the report as a dry run and attach the skipped effects.
    #[must_use]
    pub fn into_dry_run(mut self, planned: Vec<FsOperation>) -> Self {
        self.dry_run = true;
        self.planned = planned;
        self
    }

    pub const fn theme_applied(&self) -> bool {
        matches!(self.theme, ThemeOutcome::Applied { .. })
    }
}
