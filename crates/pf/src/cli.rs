//! CLI argument parsing using clap derive macros.
//!
//! This module defines the command-line interface for the pf CLI.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};

/// pf - Preview and validate Path of Exile item filters
#[derive(Parser, Debug)]
#[command(name = "pf")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Verbose output (show debug information)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Quiet mode (errors only)
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Force JSON output
    #[arg(long, global = true)]
    pub json: bool,

    /// Disable colors in output
    #[arg(long, global = true)]
    pub no_color: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Show how a filter displays an item
    #[command(alias = "p")]
    Preview {
        /// Filter file ("-" for stdin; default: preview.default_filter from config)
        file: Option<PathBuf>,

        #[command(flatten)]
        item: ItemArgs,
    },

    /// Check a filter for syntax and range problems
    #[command(alias = "v")]
    Validate {
        /// Filter file ("-" for stdin)
        file: PathBuf,

        /// Treat warnings as errors
        #[arg(long)]
        strict: bool,
    },

    /// List the blocks of a filter with their conditions and style
    #[command(alias = "b")]
    Blocks {
        /// Filter file ("-" for stdin)
        file: PathBuf,
    },

    /// Manage configuration
    Config {
        #[command(subcommand)]
        command: Option<ConfigCommands>,
    },

    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        shell: Shell,
    },
}

/// Description of the item to preview.
///
/// Flags override the fields loaded from `--item`.
#[derive(Args, Debug, Default, Clone)]
pub struct ItemArgs {
    /// JSON file describing the item (camelCase keys, e.g. {"baseType": "Chaos Orb"})
    #[arg(long, value_name = "FILE")]
    pub item: Option<PathBuf>,

    /// Item base type (e.g. "Chaos Orb")
    #[arg(short, long)]
    pub base_type: Option<String>,

    /// Item class (e.g. "Stackable Currency")
    #[arg(short, long)]
    pub class: Option<String>,

    /// Item rarity (Normal, Magic, Rare, Unique)
    #[arg(short, long)]
    pub rarity: Option<String>,

    /// Area level
    #[arg(long)]
    pub area_level: Option<u32>,

    /// Item level
    #[arg(long)]
    pub item_level: Option<u32>,

    /// Drop level of the base type
    #[arg(long)]
    pub drop_level: Option<u32>,

    /// Quality
    #[arg(long)]
    pub quality: Option<u32>,

    /// Number of sockets
    #[arg(long)]
    pub sockets: Option<u32>,

    /// Stack size
    #[arg(long)]
    pub stack_size: Option<u32>,

    /// Waystone tier
    #[arg(long)]
    pub waystone_tier: Option<u32>,
}

/// Supported shells for completions
#[derive(ValueEnum, Clone, Debug)]
pub enum Shell {
    Bash,
    Zsh,
    Fish,
    Powershell,
}

/// Config subcommands
#[derive(Subcommand, Debug)]
pub enum ConfigCommands {
    /// Show current configuration
    Show,

    /// Set a configuration value
    Set {
        /// Configuration key
        key: String,

        /// Configuration value
        value: String,
    },

    /// Print config file path
    Path,
}
