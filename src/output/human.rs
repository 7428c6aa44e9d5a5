//! Human-friendly output using `colored`.

use colored::{ColoredString, Colorize};
use tracing::{debug, instrument, trace};

use crate::error::ScaffoldError;
use crate::theme::ThemePalette;
use crate::workflow::RunReport;
use crate::workspace::FsOperation;

use super::{Output, Shade, VersionInfo};

/// Styled terminal output for people.
///
/// Progress goes to stdout, errors to stderr. Each stream is colored only
/// when it is enabled here, so `nxs | tee log` keeps red errors on a
/// terminal and `nxs 2>err.log` keeps escape codes out of the log.
#[derive(Debug, Default)]
pub struct HumanOutput {
    stdout_color: bool,
    stderr_color: bool,
}

impl HumanOutput {
    #[must_use]
    pub const fn new(stdout_color: bool, stderr_color: bool) -> Self {
        Self {
            stdout_color,
            stderr_color,
        }
    }

    fn out(&self, text: ColoredString) -> ColoredString {
        paint(self.stdout_color, text)
    }

    /// Lines written to stderr for `error`.
    #[must_use]
    pub fn error_lines(&self, error: &ScaffoldError) -> Vec<String> {
        let mut lines = vec![paint(self.stderr_color, error.to_string().red()).to_string()];
        if let Some(suggestion) = error.suggestion() {
            trace!(suggestion, "Adding suggestion");
            let hint = paint(self.stderr_color, "hint:".yellow().bold());
            lines.push(format!("{hint} {suggestion}"));
        }
        lines
    }

    fn dry_run_summary(&self, report: &RunReport) {
        println!("{}", self.out("Dry run: no changes were made.".yellow().bold()));
        for command in &report.commands {
            println!("  {} {command}", self.out("would run   ".dimmed()));
        }
        for op in &report.planned {
            match op {
                FsOperation::CreateDir { path } => {
                    println!("  {} {}", self.out("would create".dimmed()), path.display());
                }
                FsOperation::Write { path, bytes } => {
                    println!(
                        "  {} {} ({bytes} bytes)",
                        self.out("would write ".dimmed()),
                        path.display()
                    );
                }
            }
        }
    }
}

fn paint(enabled: bool, text: ColoredString) -> ColoredString {
    if enabled { text } else { text.clear() }
}

impl Output for HumanOutput {
    fn step(&self, message: &str) {
        trace!(message, "Outputting step");
        println!("{}", self.out(message.cyan()));
    }

    fn success(&self, message: &str) {
        debug!(message, "Outputting success");
        println!("{}", self.out(message.green()));
    }

    #[instrument(skip(self))]
    fn error(&self, error: &ScaffoldError) {
        debug!(
            error = %error,
            recoverable = error.is_user_recoverable(),
            "Outputting error"
        );
        for line in self.error_lines(error) {
            eprintln!("{line}");
        }
    }

    fn report(&self, report: &RunReport) {
        debug!(
            dry_run = report.dry_run,
            created = report.folders_created.len(),
            "Outputting report"
        );
        if report.dry_run {
            self.dry_run_summary(report);
        }
    }

    fn stylesheet(&self, _palette: &ThemePalette, css: &str) {
        print!("{css}");
    }

    fn shade(&self, shade: &Shade) {
        println!("{}", shade.result);
    }

    fn version_info(&self, info: &VersionInfo) {
        println!("{} {}", self.out(info.tool.bold().cyan()), info.version);
        let dirty = if info.git_dirty { " (dirty)" } else { "" };
        println!("  {} {}{dirty}", self.out("commit:".dimmed()), info.git_sha);
        println!("  {} {}", self.out("built: ".dimmed()), info.build_timestamp);
        println!("  {} {}", self.out("rustc: ".dimmed()), info.rustc);
        println!("  {} {}", self.out("target:".dimmed()), info.target);
    }
}
