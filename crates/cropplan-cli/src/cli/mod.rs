//! CLI argument definitions using the clap derive API.
//!
//! This module is the *only* place that knows about argument names, aliases,
//! help text, and value enums. No planning logic lives here.

use clap::{Args, Parser, Subcommand, ValueEnum};

pub mod global;
pub use global::{GlobalArgs, OutputFormat};

// ── Top-level CLI ─────────────────────────────────────────────────────────────

/// Main CLI entry-point.
#[derive(Debug, Parser)]
#[command(
    name    = "cropplan",
    bin_name = "cropplan",
    version  = env!("CARGO_PKG_VERSION"),
    author   = env!("CARGO_PKG_AUTHORS"),
    about    = "\u{1f331} Vegetable garden planner",
    long_about = "cropplan picks which vegetables to grow and how many of each, \
                  given your plot size, the season and how many people you feed.",
    after_help = "EXAMPLES:\n\
        \x20 cropplan plan --area 20 --season spring --people 2\n\
        \x20 cropplan plan --area 8 --season summer --exclude tomato,basil\n\
        \x20 cropplan info carrot\n\
        \x20 cropplan list --season winter",
    arg_required_else_help = true,
    subcommand_required    = true,
)]
pub struct Cli {
    /// Flags available on every subcommand.
    #[command(flatten)]
    pub global: GlobalArgs,

    /// Subcommand to execute.
    #[command(subcommand)]
    pub command: Commands,
}

// ── Subcommands ───────────────────────────────────────────────────────────────

/// All available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Plan a garden.
    #[command(
        visible_alias = "p",
        about = "Plan a garden",
        after_help = "EXAMPLES:\n\
            \x20 cropplan plan\n\
            \x20 cropplan plan --area 12.5 --season autumn --people 4 --max-categories 3\n\
            \x20 cropplan plan --season fall --exclude pumpkin --format json"
    )]
    Plan(PlanArgs),

    /// Show everything the dataset knows about one plant.
    #[command(
        about = "Show plant information",
        after_help = "EXAMPLES:\n\
            \x20 cropplan info carrot\n\
            \x20 cropplan info \"swiss chard\" --format json"
    )]
    Info(InfoArgs),

    /// List plants in the dataset.
    #[command(
        visible_alias = "ls",
        about = "List plants",
        after_help = "EXAMPLES:\n\
            \x20 cropplan list\n\
            \x20 cropplan list --season summer\n\
            \x20 cropplan list --category herb --format csv"
    )]
    List(ListArgs),

    /// Initialise a cropplan configuration file.
    #[command(
        about = "Initialise configuration",
        after_help = "EXAMPLES:\n\
            \x20 cropplan init           # platform config directory\n\
            \x20 cropplan init --local   # ./cropplan.toml"
    )]
    Init(InitArgs),

    /// Generate shell completion scripts.
    #[command(
        about = "Generate shell completions",
        after_help = "EXAMPLES:\n\
            \x20 cropplan completions bash > ~/.local/share/bash-completion/completions/cropplan\n\
            \x20 cropplan completions zsh  > ~/.zfunc/_cropplan\n\
            \x20 cropplan completions fish > ~/.config/fish/completions/cropplan.fish"
    )]
    Completions(CompletionsArgs),

    /// Inspect the cropplan configuration.
    #[command(
        about = "Configuration management",
        subcommand,
        after_help = "EXAMPLES:\n\
            \x20 cropplan config get planner.season\n\
            \x20 cropplan config list\n\
            \x20 cropplan config path"
    )]
    Config(ConfigCommands),
}

// ── plan ──────────────────────────────────────────────────────────────────────

/// Arguments for `cropplan plan`. Unset values fall back to configuration.
#[derive(Debug, Args)]
pub struct PlanArgs {
    /// Plot size in m².
    #[arg(
        short = 'a',
        long = "area",
        value_name = "M2",
        help = "Available area in m² (at most 1000000)"
    )]
    pub area: Option<f64>,

    /// Growing season.
    #[arg(
        short = 's',
        long = "season",
        value_name = "SEASON",
        help = "Season: spring, summer, autumn (fall) or winter"
    )]
    pub season: Option<String>,

    /// Household size.
    #[arg(
        short = 'p',
        long = "people",
        value_name = "N",
        help = "Number of people to feed"
    )]
    pub people: Option<u32>,

    /// Maximum distinct categories.
    #[arg(
        short = 'k',
        long = "max-categories",
        value_name = "K",
        value_parser = clap::value_parser!(u32).range(1..),
        help = "Maximum number of plant categories"
    )]
    pub max_categories: Option<u32>,

    /// Plants to leave out.
    #[arg(
        short = 'x',
        long = "exclude",
        value_name = "NAME",
        value_delimiter = ',',
        help = "Plant names to exclude (repeatable or comma-separated)"
    )]
    pub exclude: Vec<String>,

    /// Output format.
    #[arg(long = "format", value_enum, help = "Output format")]
    pub format: Option<PlanFormat>,
}

/// Output format for the `plan` command.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum PlanFormat {
    /// Human-readable summary.
    Table,
    /// Serialised plan.
    Json,
}

// ── info ──────────────────────────────────────────────────────────────────────

/// Arguments for `cropplan info`.
#[derive(Debug, Args)]
pub struct InfoArgs {
    /// Plant name (any letter case).
    #[arg(value_name = "NAME", num_args = 1.., required = true)]
    pub name: Vec<String>,

    /// Output format.
    #[arg(long = "format", value_enum, default_value = "table")]
    pub format: PlanFormat,
}

impl InfoArgs {
    /// Multi-word names may be passed unquoted.
    pub fn joined_name(&self) -> String {
        self.name.join(" ")
    }
}

// ── list ──────────────────────────────────────────────────────────────────────

/// Arguments for `cropplan list`.
#[derive(Debug, Args)]
pub struct ListArgs {
    /// Only plants grown in this season.
    #[arg(short = 's', long = "season", value_name = "SEASON")]
    pub season: Option<String>,

    /// Only plants in this category.
    #[arg(short = 'g', long = "category", value_name = "CATEGORY")]
    pub category: Option<String>,

    /// Output format.
    #[arg(
        long = "format",
        value_enum,
        default_value = "table",
        help = "Output format"
    )]
    pub format: ListFormat,
}

/// Output format for the `list` command.
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum ListFormat {
    /// Human-readable table.
    Table,
    /// One name per line.
    List,
    /// JSON array.
    Json,
    /// CSV rows.
    Csv,
}

// ── init ──────────────────────────────────────────────────────────────────────

/// Arguments for `cropplan init`.
#[derive(Debug, Args)]
pub struct InitArgs {
    /// Write to `cropplan.toml` in the current directory.
    #[arg(
        long = "local",
        help = "Create local configuration in current directory"
    )]
    pub local: bool,

    /// Overwrite an existing config file.
    #[arg(short = 'f', long = "force", help = "Overwrite existing configuration")]
    pub force: bool,
}

// ── completions ───────────────────────────────────────────────────────────────

/// Arguments for `cropplan completions`.
#[derive(Debug, Args)]
pub struct CompletionsArgs {
    /// Target shell.
    #[arg(value_enum, help = "Shell to generate completions for")]
    pub shell: Shell,
}

/// Supported shells for completion generation.
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum Shell {
    Bash,
    Zsh,
    Fish,
    PowerShell,
    Elvish,
}

// ── config subcommands ────────────────────────────────────────────────────────

/// Subcommands for `cropplan config`.
#[derive(Debug, Subcommand)]
pub enum ConfigCommands {
    /// Print the value of a configuration key.
    Get {
        /// Dotted key path, e.g. `planner.area`.
        key: String,
    },
    /// Print all configuration values.
    List,
    /// Print the path to the active configuration file.
    Path,
}

// ── tests ─────────────────────────────────────────────────────────────────────
