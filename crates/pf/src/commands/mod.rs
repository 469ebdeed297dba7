//! Command implementations for the pf CLI.
//!
//! This module contains the actual command handlers that are invoked by the CLI.

pub mod blocks;
pub mod completions;
pub mod config;
pub mod preview;
pub mod validate;

use std::fs;
use std::io::{self, Read};
use std::path::Path;

use crate::cli::Cli;

/// Path argument meaning "read from stdin".
const STDIN_PATH: &str = "-";

/// Error type for command execution.
#[derive(Debug, thiserror::Error)]
pub enum CommandError {
    /// The filter failed validation.
    #[error("filter is invalid: {errors} error(s), {warnings} warning(s)")]
    InvalidFilter {
        /// Number of error-severity diagnostics.
        errors: usize,
        /// Number of warnings.
        warnings: usize,
    },

    /// The item description is unusable.
    #[error("item error: {0}")]
    Item(String),

    /// Configuration error.
    #[error("configuration error: {0}")]
    Config(String),

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization error.
    #[error("serialization error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type for command execution.
pub type Result<T> = std::result::Result<T, CommandError>;

/// Context for command execution, containing common dependencies.
pub struct CommandContext {
    /// Whether to output JSON.
    pub json_output: bool,
    /// Whether to use colors.
    pub use_colors: bool,
    /// Whether to be quiet (errors only).
    pub quiet: bool,
}

impl CommandContext {
    /// Creates a new command context from CLI arguments and the `[output]`
    /// config section. `NO_COLOR` always disables colors.
    pub fn from_cli(cli: &Cli, output: &config::OutputConfig) -> Self {
        let no_color_env = std::env::var_os("NO_COLOR").is_some_and(|v| !v.is_empty());
        Self {
            json_output: cli.json || output.json.unwrap_or(false),
            use_colors: !cli.no_color && !no_color_env && output.color.unwrap_or(true),
            quiet: cli.quiet,
        }
    }
}

/// Reads a filter script from a file, or from stdin when the path is `-`.
pub fn read_filter(path: &Path) -> Result<String> {
    if path.as_os_str() == STDIN_PATH {
        let mut text = String::new();
        io::stdin().read_to_string(&mut text)?;
        return Ok(text);
    }

    read_file(path)
}

/// Reads a file, naming the path in the error.
pub fn read_file(path: &Path) -> Result<String> {
    fs::read_to_string(path).map_err(|e| {
        CommandError::Io(io::Error::new(
            e.kind(),
            format!("failed to read {}: {e}", path.display()),
        ))
    })
}
