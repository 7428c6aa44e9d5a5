//! Output mode abstraction for robot and human output.

use std::io::{self, IsTerminal};

use serde::Serialize;

use crate::cli::Cli;
use crate::color::Rgb;
use crate::error::ScaffoldError;
use crate::theme::ThemePalette;
use crate::workflow::RunReport;

pub mod human;
pub mod mock;
pub mod robot;

pub use human::HumanOutput;
pub use robot::RobotOutput;

/// Direction of a single-color shade.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ShadeMode {
    Lighten,
    Darken,
}

/// Result of `nxs shade`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Shade {
    pub input: Rgb,
    pub factor: f64,
    pub mode: ShadeMode,
    pub result: Rgb,
}

/// Build metadata shown by `nxs version`.
#[derive(Debug, Clone, Serialize)]
pub struct VersionInfo {
    pub tool: &'static str,
    pub version: &'static str,
    pub git_sha: &'static str,
    pub git_dirty: bool,
    pub build_timestamp: &'static str,
    pub rustc: &'static str,
    pub target: &'static str,
}

/// JSON formatting options for robot mode.
#[derive(Debug, Clone, Copy)]
pub enum RobotFormat {
    /// Pretty-printed JSON (default for --robot).
    Json,
    /// Single-line JSON (--format=json-compact).
    JsonCompact,
}

/// Determines how command output is rendered.
#[derive(Debug, Clone, Copy)]
pub enum OutputMode {
    /// JSON output for scripting.
    Robot(RobotFormat),
    /// Colored terminal output.
    Human,
}

impl OutputMode {
    /// Create OutputMode from CLI arguments.
    #[must_use]
    pub const fn from_cli(cli: &Cli) -> Self {
        if cli.use_json() {
            let format = if cli.use_compact_json() {
                RobotFormat::JsonCompact
            } else {
                RobotFormat::Json
            };
            Self::Robot(format)
        } else {
            Self::Human
        }
    }

    /// Convert into the appropriate Output implementation.
    ///
    /// `color` says which streams human output may style.
    #[must_use]
    pub fn into_output(self, color: StreamColor) -> Box<dyn Output> {
        match self {
            Self::Robot(format) => Box::new(RobotOutput::new(format)),
            Self::Human => Box::new(HumanOutput::new(color.stdout, color.stderr)),
        }
    }
}

/// Per-stream color decision.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StreamColor {
    pub stdout: bool,
    pub stderr: bool,
}

impl StreamColor {
    /// Color a stream only when it is a terminal and color is not disabled.
    #[must_use]
    pub fn detect(no_color: bool) -> Self {
        Self {
            stdout: !no_color && io::stdout().is_terminal(),
            stderr: !no_color && io::stderr().is_terminal(),
        }
    }

    #[must_use]
    pub const fn any(self) -> bool {
        self.stdout || self.stderr
    }
}

/// Trait for all output operations.
///
/// The workflow and commands call these without knowing the output mode.
pub trait Output {
    /// A step is about to start.
    fn step(&self, message: &str);
    /// The run finished successfully.
    fn success(&self, message: &str);
    fn error(&self, error: &ScaffoldError);

    /// Summary of a completed workflow run.
    fn report(&self, report: &RunReport);

    /// A generated stylesheet (`nxs css`).
    fn stylesheet(&self, palette: &ThemePalette, css: &str);
    fn shade(&self, shade: &Shade);
    fn version_info(&self, info: &VersionInfo);
}
