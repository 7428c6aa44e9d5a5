//! nxs - interactive scaffolding for Next.js projects.
//!
//! Provides both human-friendly and machine-readable (robot mode) output.
#![forbid(unsafe_code)]

use std::env;
use std::io;

use clap::{CommandFactory, Parser};
use tracing::{debug, info};

use nxs::cli::{Cli, Commands, CompletionsArgs, CssArgs, ShadeArgs};
use nxs::color::Rgb;
use nxs::config;
use nxs::error::Result;
use nxs::logging::init_logging;
use nxs::output::{Output, OutputMode, Shade, ShadeMode, StreamColor, VersionInfo};
use nxs::prompt::{InquirePrompter, PresetPrompter, Prompter};
use nxs::runner::{DryRunRunner, SystemRunner};
use nxs::theme::{render_globals_css, ThemeColors, ThemePalette};
use nxs::workflow::{Workflow, FOLDERS, INSTALL, PRIMARY_COLOR, SECONDARY_COLOR, THEME};
use nxs::workspace::{DryRunWorkspace, LocalWorkspace};

/// Build information embedded at compile time.
mod build_info {
    pub const VERSION: &str = env!("CARGO_PKG_VERSION");

    pub fn git_sha() -> &'static str {
        option_env!("VERGEN_GIT_SHA").unwrap_or("unknown")
    }

    pub fn git_dirty() -> &'static str {
        option_env!("VERGEN_GIT_DIRTY").unwrap_or("false")
    }

    pub fn build_timestamp() -> &'static str {
        option_env!("VERGEN_BUILD_TIMESTAMP").unwrap_or("unknown")
    }

    pub fn rustc_semver() -> &'static str {
        option_env!("VERGEN_RUSTC_SEMVER").unwrap_or("unknown")
    }

    pub fn target() -> &'static str {
        option_env!("VERGEN_CARGO_TARGET_TRIPLE").unwrap_or("unknown")
    }
}

fn main() {
    let cli = Cli::parse();

    // Per-stream choice is made in HumanOutput; the global switch only
    // has to let styling through when some stream wants it.
    let color = StreamColor::detect(cli.no_color);
    colored::control::set_override(color.any());

    init_logging(cli.use_json(), cli.verbose, cli.quiet);

    let output = OutputMode::from_cli(&cli).into_output(color);

    if let Err(e) = run(&cli, output.as_ref()) {
        output.error(&e);
        std::process::exit(1);
    }
}

fn run(cli: &Cli, output: &dyn Output) -> Result<()> {
    match &cli.command {
        None => cmd_setup(cli, output),
        Some(Commands::Css(args)) => cmd_css(args, output),
        Some(Commands::Shade(args)) => cmd_shade(args, output),
        Some(Commands::Version) => {
            cmd_version(output);
            Ok(())
        }
        Some(Commands::Completions(args)) => {
            cmd_completions(args);
            Ok(())
        }
    }
}

// === Setup workflow ===

fn cmd_setup(cli: &Cli, output: &dyn Output) -> Result<()> {
    let root = match &cli.dir {
        Some(dir) => dir.clone(),
        None => env::current_dir()?,
    };
    debug!(root = %root.display(), "Project root");

    let mut loaded = config::load(cli.config.as_deref(), &root)?;
    if let Some(program) = &cli.setup.installer {
        loaded.config.installer.program.clone_from(program);
        loaded.config.validate()?;
    }
    let config = loaded.config;

    let prompter = setup_prompter(cli)?;

    let report = if cli.setup.dry_run {
        info!("Dry run: no commands or writes will be performed");
        let workspace = DryRunWorkspace::new(LocalWorkspace::new());
        let runner = DryRunRunner::new();
        let report = Workflow::new(&workspace, &runner, &prompter, output, &config).run(&root)?;
        report.into_dry_run(workspace.planned())
    } else {
        let workspace = LocalWorkspace::new();
        let runner = SystemRunner::new(root.clone());
        Workflow::new(&workspace, &runner, &prompter, output, &config).run(&root)?
    };

    output.report(&report);
    Ok(())
}

/// Interactive prompter with answers from flags layered on top.
///
/// Flag colors are checked here since a flag cannot be re-asked.
fn setup_prompter(cli: &Cli) -> Result<impl Prompter> {
    let args = &cli.setup;
    let mut prompter = PresetPrompter::new(InquirePrompter::new(!cli.no_color))
        .assume_defaults(args.yes);

    for (step, skip) in [
        (INSTALL, args.no_install),
        (FOLDERS, args.no_folders),
        (THEME, args.no_theme),
    ] {
        if skip {
            prompter = prompter.confirm_answer(step.question.key, false);
        }
    }

    for (question, value) in [
        (PRIMARY_COLOR, &args.primary),
        (SECONDARY_COLOR, &args.secondary),
    ] {
        if let Some(value) = value {
            Rgb::from_hex(value)?;
            prompter = prompter.text_answer(question.key, value.trim());
        }
    }

    Ok(prompter)
}

// === Color commands ===

fn cmd_css(args: &CssArgs, output: &dyn Output) -> Result<()> {
    let colors = ThemeColors {
        primary: Rgb::from_hex(&args.primary)?,
        secondary: Rgb::from_hex(&args.secondary)?,
    };
    let palette = ThemePalette::derive(colors, args.factor);
    output.stylesheet(&palette, &render_globals_css(&palette));
    Ok(())
}

fn cmd_shade(args: &ShadeArgs, output: &dyn Output) -> Result<()> {
    let input = Rgb::from_hex(&args.color)?;
    let (mode, result) = if args.darken {
        (ShadeMode::Darken, input.darken(args.factor))
    } else {
        (ShadeMode::Lighten, input.lighten(args.factor))
    };
    output.shade(&Shade {
        input,
        factor: args.factor,
        mode,
        result,
    });
    Ok(())
}

// === Utilities ===

fn cmd_version(output: &dyn Output) {
    output.version_info(&VersionInfo {
        tool: "nxs",
        version: build_info::VERSION,
        git_sha: build_info::git_sha(),
        git_dirty: build_info::git_dirty() == "true",
        build_timestamp: build_info::build_timestamp(),
        rustc: build_info::rustc_semver(),
        target: build_info::target(),
    });
}

fn cmd_completions(args: &CompletionsArgs) {
    clap_complete::generate(args.shell, &mut Cli::command(), "nxs", &mut io::stdout());
}
