//! Command-line interface definitions.
//!
//! Defines the CLI structure using `clap`: scoring a question document,
//! running the reference fixtures, and inspecting configuration.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Default configuration file, looked up in the working directory.
pub const DEFAULT_CONFIG: &str = "brierly.toml";

/// Relative Brier scoring for resolved forecasting questions
#[derive(Parser, Debug)]
#[command(name = "brierly")]
#[command(version)]
pub struct Cli {
    /// Color output mode [auto, always, never]
    #[arg(
        long,
        global = true,
        default_value = "auto",
        hide_possible_values = true
    )]
    pub color: ColorChoice,

    /// JSON output for scripting
    #[arg(long, global = true)]
    pub json: bool,

    /// Decrease output verbosity
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Increase output verbosity
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Path to the configuration file
    #[arg(short, long, global = true, default_value = DEFAULT_CONFIG)]
    pub config: PathBuf,

    #[command(subcommand)]
    pub command: Commands,
}

/// Color output mode for terminal rendering.
#[derive(Clone, Debug, Default, clap::ValueEnum)]
pub enum ColorChoice {
    /// Detect automatically
    #[default]
    Auto,
    /// Always use colors
    Always,
    /// Never use colors
    Never,
}

/// Top-level subcommands.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Score a resolved question from a JSON document
    Score(ScoreArgs),

    /// Score the built-in reference fixtures and check the pinned values
    Fixtures,

    /// Inspect configuration
    #[command(subcommand)]
    Config(ConfigCommand),
}

/// Arguments for `brierly score`.
#[derive(Parser, Debug)]
pub struct ScoreArgs {
    /// Question document (JSON with `question` and `forecasts`)
    pub file: PathBuf,

    /// Also print per-day medians
    #[arg(long)]
    pub breakdown: bool,
}

/// Subcommands for `brierly config`.
#[derive(Subcommand, Debug)]
pub enum ConfigCommand {
    /// Display the effective configuration with defaults applied.
    Show,
    /// Validate the configuration file.
    Validate,
}
