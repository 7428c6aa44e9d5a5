//! CLI argument definitions.

use clap::{ArgAction, Args, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// Scaffold a Next.js project: shadcn/ui, standard folders and a color theme.
///
/// Run without a subcommand inside a Next.js project to start the
/// interactive setup. Use --robot for a JSON report.
#[derive(Parser, Debug)]
#[command(name = "nxs", version, about, long_about = None)]
#[command(propagate_version = true)]
#[allow(clippy::struct_excessive_bools)] // CLI flags naturally use multiple bools
pub struct Cli {
    /// Project directory (defaults to the current directory)
    #[arg(long = "dir", short = 'C', global = true, value_name = "DIR")]
    pub dir: Option<PathBuf>,

    /// Output format (text for humans, json for agents/scripts)
    #[arg(
        long,
        short = 'f',
        default_value = "text",
        global = true,
        env = "NXS_FORMAT"
    )]
    pub format: OutputFormat,

    /// Robot mode: equivalent to --format=json
    #[arg(long, global = true)]
    pub robot: bool,

    /// More log output (-v info, -vv debug, -vvv trace)
    #[arg(long, short = 'v', global = true, action = ArgAction::Count)]
    pub verbose: u8,

    /// Only log errors
    #[arg(long, short = 'q', global = true)]
    pub quiet: bool,

    /// Disable colored output
    #[arg(
        long,
        global = true,
        env = "NO_COLOR",
        value_parser = clap::builder::FalseyValueParser::new()
    )]
    pub no_color: bool,

    /// Configuration file (defaults to ./nxs.toml, then the user config)
    #[arg(long, global = true, value_name = "FILE")]
    pub config: Option<PathBuf>,

    #[command(flatten)]
    pub setup: SetupArgs,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Output format selection.
#[derive(Debug, Clone, Copy, Default, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable text with optional color
    #[default]
    Text,
    /// JSON output for scripts and agents
    Json,
    /// Compact JSON (single line)
    JsonCompact,
}

impl Cli {
    /// Returns true if output should be JSON (robot mode or explicit --format=json).
    pub const fn use_json(&self) -> bool {
        self.robot || matches!(self.format, OutputFormat::Json | OutputFormat::JsonCompact)
    }

    /// Returns true if output should be compact JSON.
    pub const fn use_compact_json(&self) -> bool {
        matches!(self.format, OutputFormat::JsonCompact)
    }
}

/// Answers for the setup workflow that would otherwise be prompted for.
#[derive(Args, Debug, Default)]
#[allow(clippy::struct_excessive_bools)]
pub struct SetupArgs {
    /// Accept the default answer for every yes/no question
    #[arg(long, short = 'y')]
    pub yes: bool,

    /// Skip the shadcn/ui installer
    #[arg(long)]
    pub no_install: bool,

    /// Skip creating the standard folders
    #[arg(long)]
    pub no_folders: bool,

    /// Skip the color theme
    #[arg(long)]
    pub no_theme: bool,

    /// Primary color, six hex digits without #
    #[arg(long, value_name = "HEX")]
    pub primary: Option<String>,

    /// Secondary color, six hex digits without #
    #[arg(long, value_name = "HEX")]
    pub secondary: Option<String>,

    /// Package runner used for the installer (e.g. npx, bunx)
    #[arg(long, env = "NXS_INSTALLER", value_name = "PROGRAM")]
    pub installer: Option<String>,

    /// Show what would happen without running or writing anything
    #[arg(long, short = 'n')]
    pub dry_run: bool,
}

/// Available commands.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Print the generated globals.css for two colors
    Css(CssArgs),

    /// Lighten or darken a single color
    Shade(ShadeArgs),

    /// Show version and build information
    Version,

    /// Generate shell completions
    Completions(CompletionsArgs),
}

// === Argument Structs ===

#[derive(Parser, Debug)]
pub struct CssArgs {
    /// Primary color, six hex digits without #
    #[arg(long, value_name = "HEX")]
    pub primary: String,

    /// Secondary color, six hex digits without #
    #[arg(long, value_name = "HEX")]
    pub secondary: String,

    /// Blend factor for the light and dark variants (0 to 1)
    #[arg(long, default_value_t = crate::theme::DEFAULT_BLEND_FACTOR)]
    pub factor: f64,
}

/// Arguments for a single-color shade.
///
/// # Examples
///
/// ```bash
/// nxs shade 336699            # 5c85ad
/// nxs shade 336699 --darken   # 29527a
/// nxs shade 336699 --factor 1 # ffffff
/// ```
#[derive(Parser, Debug)]
pub struct ShadeArgs {
    /// Color, six hex digits without #
    #[arg(value_name = "HEX")]
    pub color: String,

    /// Blend factor, clamped to 0..=1
    #[arg(long, default_value_t = crate::theme::DEFAULT_BLEND_FACTOR, allow_negative_numbers = true)]
    pub factor: f64,

    /// Darken toward black instead of lightening toward white
    #[arg(long)]
    pub darken: bool,
}

#[derive(Parser, Debug)]
pub struct CompletionsArgs {
    /// Shell to generate completions for
    pub shell: clap_complete::Shell,
}
