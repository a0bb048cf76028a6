//! Command-line interface definitions.
//!
//! Defines the CLI structure for the scrapeview application using `clap`.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

use super::paths;

/// Browse scraped marketplace listings
#[derive(Parser, Debug)]
#[command(name = "scrapeview")]
#[command(version, about)]
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
    #[arg(long, global = true, default_value_os_t = paths::default_config())]
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
    /// Fetch listings once and print them
    Search(SearchArgs),

    /// Interactive search: each input line replaces the search text
    Browse(BrowseArgs),

    /// List known category slugs
    Categories,

    /// Manage configuration
    #[command(subcommand)]
    Config(ConfigCommand),

    /// Probe the backend with a one-row query
    Check,
}

/// Arguments for `scrapeview search`.
#[derive(Parser, Debug)]
pub struct SearchArgs {
    /// Case-insensitive title substring (empty for no filter)
    #[arg(default_value = "")]
    pub query: String,

    /// Category slug, or "all"
    #[arg(short, long, default_value = "all")]
    pub category: String,
}

/// Arguments for `scrapeview browse`.
#[derive(Parser, Debug)]
pub struct BrowseArgs {
    /// Initial category slug, or "all"
    #[arg(short, long, default_value = "all")]
    pub category: String,

    /// Override the configured debounce interval in milliseconds
    #[arg(long)]
    pub debounce_ms: Option<u64>,
}

/// Subcommands for `scrapeview config`.
#[derive(Subcommand, Debug)]
pub enum ConfigCommand {
    /// Display the effective configuration with defaults and overrides applied
    Show,
    /// Print the default configuration file path
    Path,
}
