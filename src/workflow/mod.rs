//! The scaffolding workflow.
//!
//! Validation and source-root detection run first. The optional steps in
//! [`STEPS`] then run one after another through a single driver loop: each
//! step asks its confirm question, records the answer and runs its handler,
//! which decides whether the run continues. Any error aborts the run; there
//! is no retry and no rollback.

mod report;
mod steps;

pub use report::{RunReport, ThemeOutcome, NO_THEME_MESSAGE, THEME_APPLIED_MESSAGE};
pub use steps::{
    Answers, Flow, Step, StepKind, FOLDERS, INSTALL, PRIMARY_COLOR, SECONDARY_COLOR, STEPS, THEME,
};

use std::path::Path;

use tracing::{debug, info, instrument};

use crate::color::Rgb;
use crate::config::Config;
use crate::error::Result;
use crate::output::Output;
use crate::project::{detect_globals_css, Project};
use crate::prompt::Prompter;
use crate::runner::CommandRunner;
use crate::theme::{render_globals_css, ThemeColors, ThemePalette};
use crate::workspace::Workspace;

/// Banner printed before the installer initialises the project.
pub const INIT_BANNER: &str = "Running shadcn init";

/// Banner printed before the component is added.
pub const ADD_BANNER: &str = "Installing shadcn button component";

/// Capabilities and settings for one run.
pub struct Workflow<'a> {
    workspace: &'a dyn Workspace,
    runner: &'a dyn CommandRunner,
    prompter: &'a dyn Prompter,
    output: &'a dyn Output,
    config: &'a Config,
}

impl<'a> Workflow<'a> {
    pub fn new(
        workspace: &'a dyn Workspace,
        runner: &'a dyn CommandRunner,
        prompter: &'a dyn Prompter,
        output: &'a dyn Output,
        config: &'a Config,
    ) -> Self {
        Self {
            workspace,
            runner,
            prompter,
            output,
            config,
        }
    }

    /// Run every step against the project at `root`.
    ///
    /// # Errors
    ///
    /// Returns the first error from validation, a prompt, the installer or
    /// the filesystem.
    #[instrument(skip(self), fields(root = %root.display()))]
    pub fn run(&self, root: &Path) -> Result<RunReport> {
        let project = Project::open(self.workspace, root)?;
        info!(src_root = %project.src_root.display(), "Validated project");

        let mut report = RunReport::new(&project);
        let mut answers = Answers::default();

        for step in &STEPS {
            let accepted = self.prompter.confirm(&step.question)?;
            debug!(step = ?step.kind, accepted, "Step answered");
            answers.record(step.kind, accepted);

            let flow = match step.kind {
                StepKind::Install => self.install(&answers, &mut report)?,
                StepKind::Folders => self.folders(&project, &answers, &mut report)?,
                StepKind::Theme => self.theme(&project, &mut answers, &mut report)?,
            };
            report.answers = answers;

            if flow == Flow::Finish {
                debug!(step = ?step.kind, "Run finished early");
                break;
            }
        }

        self.output.success(report.message);
        Ok(report)
    }

    fn install(&self, answers: &Answers, report: &mut RunReport) -> Result<Flow> {
        if answers.install != Some(true) {
            return Ok(Flow::Continue);
        }

        let installer = &self.config.installer;
        for (banner, command) in [
            (INIT_BANNER, installer.init_command()),
            (ADD_BANNER, installer.add_command()),
        ] {
            self.output.step(banner);
            self.runner.run(&command)?;
            report.commands.push(command);
        }
        Ok(Flow::Continue)
    }

    fn folders(&self, project: &Project, answers: &Answers, report: &mut RunReport) -> Result<Flow> {
        if answers.folders != Some(true) {
            return Ok(Flow::Continue);
        }

        for name in &self.config.folders.names {
            let dir = project.src_root.join(name);
            if self.workspace.ensure_dir(&dir)? {
                info!(path = %dir.display(), "Created folder");
                report.folders_created.push(dir);
            } else {
                debug!(path = %dir.display(), "Folder already present");
                report.folders_existing.push(dir);
            }
        }
        Ok(Flow::Continue)
    }

    fn theme(
        &self,
        project: &Project,
        answers: &mut Answers,
        report: &mut RunReport,
    ) -> Result<Flow> {
        if answers.theme != Some(true) {
            report.message = NO_THEME_MESSAGE;
            return Ok(Flow::Finish);
        }

        let colors = self.collect_colors()?;
        answers.colors = Some(colors);

        // Resolved only after both colors are in, so a missing stylesheet
        // is reported after the user has answered.
        let stylesheet = detect_globals_css(self.workspace, &project.root)?;

        let palette = ThemePalette::derive(colors, self.config.theme.blend_factor);
        let css = render_globals_css(&palette);
        self.workspace.write(&stylesheet, &css)?;
        info!(path = %stylesheet.display(), bytes = css.len(), "Wrote stylesheet");

        report.theme = ThemeOutcome::Applied {
            stylesheet,
            palette,
        };
        report.message = THEME_APPLIED_MESSAGE;
        Ok(Flow::Finish)
    }

    fn collect_colors(&self) -> Result<ThemeColors> {
        let primary = self.prompter.text(&PRIMARY_COLOR)?;
        let secondary = self.prompter.text(&SECONDARY_COLOR)?;
        Ok(ThemeColors {
            primary: Rgb::from_hex(&primary)?,
            secondary: Rgb::from_hex(&secondary)?,
        })
    }
}
