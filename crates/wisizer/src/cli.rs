//! Clap derive structures for the `wisizer` CLI.
//!
//! Defines the complete command tree, global flags, and shared types.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};

// ── Top-Level CLI ────────────────────────────────────────────────────

/// wisizer -- Wi-Fi access point and PoE switch sizing
#[derive(Debug, Parser)]
#[command(
    name = "wisizer",
    version,
    about = "Size Wi-Fi access points and PoE access switches for a space",
    long_about = "Estimates how many access points a space needs, which model to deploy,\n\
        and which PoE access switch (and how many) can wire and power them.\n\n\
        Results are preliminary estimates; large or complex sites should be\n\
        validated with a predictive site survey.",
    propagate_version = true,
    subcommand_required = true,
    arg_required_else_help = true
)]
pub struct Cli {
    #[command(flatten)]
    pub global: GlobalOpts,

    #[command(subcommand)]
    pub command: Command,
}

// ── Global Options ───────────────────────────────────────────────────

#[derive(Debug, Args)]
pub struct GlobalOpts {
    /// Configuration file (defaults to the platform config directory)
    #[arg(long, env = "WISIZER_CONFIG", global = true)]
    pub config: Option<PathBuf>,

    /// Equipment and scenario catalogue TOML (overrides the built-in data)
    #[arg(long, env = "WISIZER_CATALOG", global = true)]
    pub catalog: Option<PathBuf>,

    /// Output format [default: table, or `defaults.output` from config]
    #[arg(long, short = 'o', env = "WISIZER_OUTPUT", global = true)]
    pub output: Option<OutputFormat>,

    /// When to use color output
    #[arg(long, global = true)]
    pub color: Option<ColorMode>,

    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(long, short = 'v', action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress non-error output
    #[arg(long, short = 'q', global = true)]
    pub quiet: bool,
}

// ── Output & Color Enums ─────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Pretty tables (default, interactive)
    Table,
    /// Pretty-printed JSON
    Json,
    /// Compact single-line JSON
    JsonCompact,
    /// YAML
    Yaml,
    /// Plain text, one value per line (scripting)
    Plain,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ColorMode {
    /// Auto-detect (color if terminal is interactive)
    Auto,
    /// Always emit color codes
    Always,
    /// Never emit color codes
    Never,
}

/// Radio technology generation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum GenerationArg {
    /// Wi-Fi 6 (802.11ax)
    #[value(name = "wifi6", alias = "gen-1")]
    Wifi6,
    /// Wi-Fi 6E (802.11ax, 6 GHz)
    #[value(name = "wifi6e", alias = "gen-2")]
    Wifi6e,
    /// Wi-Fi 7 (802.11be)
    #[value(name = "wifi7", alias = "gen-3")]
    Wifi7,
}

// ── Top-Level Command Enum ───────────────────────────────────────────

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Size access points and PoE switches for a space
    #[command(alias = "s")]
    Size(SizeArgs),

    /// Estimate access points only
    Aps(ApsArgs),

    /// Pick PoE switches for a given AP model and count
    #[command(alias = "sw")]
    Switches(SwitchesArgs),

    /// Browse the scenario and equipment catalogues
    #[command(alias = "cat")]
    Catalog(CatalogArgs),

    /// Show recorded calculations
    History(HistoryArgs),

    /// Manage CLI configuration
    Config(ConfigArgs),

    /// Generate shell completions
    Completions(CompletionsArgs),
}

// ── Sizing ───────────────────────────────────────────────────────────

/// The space being sized. Shared by `size` and `aps`.
#[derive(Debug, Args)]
pub struct SpaceArgs {
    /// Total number of people using the space
    #[arg(long, short = 'u')]
    pub users: u32,

    /// Floor area in square metres
    #[arg(long, short = 'a')]
    pub area: f64,

    /// Ceiling height in metres
    #[arg(long, default_value = "3.0")]
    pub ceiling_height: f64,

    /// Deployment scenario key (see `wisizer catalog scenarios`)
    #[arg(long, short = 's')]
    pub scenario: Option<String>,

    /// Wi-Fi generation
    #[arg(long, short = 'g')]
    pub generation: Option<GenerationArg>,
}

#[derive(Debug, Args)]
pub struct SizeArgs {
    #[command(flatten)]
    pub space: SpaceArgs,

    /// Skip the PoE switch recommendation
    #[arg(long)]
    pub no_switches: bool,

    /// Append a plain-language explanation of the result
    #[arg(long)]
    pub explain: bool,

    /// Do not record this calculation in the journal
    #[arg(long)]
    pub no_journal: bool,
}

#[derive(Debug, Args)]
pub struct ApsArgs {
    #[command(flatten)]
    pub space: SpaceArgs,
}

#[derive(Debug, Args)]
pub struct SwitchesArgs {
    /// Number of access points to connect
    #[arg(long, short = 'n')]
    pub ap_count: u32,

    /// Access point model ID (e.g. MR46)
    #[arg(long, short = 'm')]
    pub ap_model: String,
}

// ── Catalogue ────────────────────────────────────────────────────────

#[derive(Debug, Args)]
pub struct CatalogArgs {
    #[command(subcommand)]
    pub command: CatalogCommand,
}

#[derive(Debug, Subcommand)]
pub enum CatalogCommand {
    /// List access point models
    Aps {
        /// Only this generation
        #[arg(long, short = 'g')]
        generation: Option<GenerationArg>,
    },

    /// List PoE switch models
    Switches {
        /// Only models whose family contains this text (case-insensitive)
        #[arg(long, short = 'f')]
        family: Option<String>,
    },

    /// List deployment scenarios
    Scenarios,

    /// Show one access point model
    Ap {
        /// Model ID (e.g. CW9166)
        model_id: String,
    },

    /// Show one switch model
    Switch {
        /// Model ID (e.g. MS150-48FP-4X)
        model_id: String,
    },

    /// Print the active catalogue as TOML, ready to edit and load with --catalog
    Export,
}

// ── History ──────────────────────────────────────────────────────────

#[derive(Debug, Args)]
pub struct HistoryArgs {
    /// Show only the most recent N calculations
    #[arg(long, short = 'l')]
    pub limit: Option<usize>,
}

// ── Config ───────────────────────────────────────────────────────────

#[derive(Debug, Args)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub command: ConfigCommand,
}

#[derive(Debug, Subcommand)]
pub enum ConfigCommand {
    /// Write a config file with default values
    Init {
        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },

    /// Display current resolved configuration
    Show,

    /// Print the config file path
    Path,
}

// ── Completions ──────────────────────────────────────────────────────

#[derive(Debug, Args)]
pub struct CompletionsArgs {
    /// Shell to generate completions for
    pub shell: clap_complete::Shell,
}
