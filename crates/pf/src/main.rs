use clap::Parser;
use std::process::ExitCode;
use tracing::warn;
use tracing_subscriber::EnvFilter;

mod cli;
mod commands;
mod dispatch;
mod output;

use cli::Cli;
use commands::config::{load_config, OutputConfig};
use commands::{CommandContext, CommandError};
use dispatch::{Command, Dispatch};

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(&cli);

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            if cli.json {
                let error_json = serde_json::json!({
                    "error": {
                        "code": error_code(&e),
                        "message": e.to_string(),
                    }
                });
                eprintln!("{error_json:#}");
            } else {
                eprintln!("Error: {e}");
            }
            error_exit_code(&e)
        }
    }
}

/// Installs the stderr log subscriber. `RUST_LOG` wins over the flags.
fn init_tracing(cli: &Cli) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_log_level(cli)));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .without_time()
        .with_target(false)
        .try_init();
}

fn default_log_level(cli: &Cli) -> &'static str {
    if cli.verbose {
        "debug"
    } else if cli.quiet {
        "error"
    } else {
        "warn"
    }
}

fn run(cli: &Cli) -> commands::Result<()> {
    // A broken config file only fails the commands that need its settings.
    let output = match load_config() {
        Ok(config) => config.output,
        Err(e) => {
            warn!("ignoring output settings: {e}");
            OutputConfig::default()
        }
    };
    let ctx = CommandContext::from_cli(cli, &output);

    Dispatch::from_cli(cli).execute(&ctx)
}

/// Returns the error code string for JSON output.
fn error_code(e: &CommandError) -> &'static str {
    match e {
        CommandError::InvalidFilter { .. } => "INVALID_FILTER",
        CommandError::Item(_) => "ITEM_ERROR",
        CommandError::Config(_) => "CONFIG_ERROR",
        CommandError::Io(_) => "IO_ERROR",
        CommandError::Json(_) => "JSON_ERROR",
    }
}

/// Returns the exit code for an error.
fn error_exit_code(e: &CommandError) -> ExitCode {
    ExitCode::from(exit_status(e))
}

fn exit_status(e: &CommandError) -> u8 {
    match e {
        CommandError::Config(_) => 5,
        CommandError::Io(_) => 3,
        CommandError::InvalidFilter { .. } | CommandError::Item(_) | CommandError::Json(_) => 1,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_log_level() {
        assert_eq!(default_log_level(&Cli::parse_from(["pf"])), "warn");
        assert_eq!(default_log_level(&Cli::parse_from(["pf", "-v"])), "debug");
        assert_eq!(default_log_level(&Cli::parse_from(["pf", "--quiet"])), "error");
    }

    #[test]
    fn test_error_codes() {
        let invalid = CommandError::InvalidFilter {
            errors: 1,
            warnings: 0,
        };
        assert_eq!(error_code(&invalid), "INVALID_FILTER");
        assert_eq!(exit_status(&invalid), 1);

        let config = CommandError::Config("bad".to_string());
        assert_eq!(error_code(&config), "CONFIG_ERROR");
        assert_eq!(exit_status(&config), 5);

        let io = CommandError::Io(std::io::Error::from(std::io::ErrorKind::NotFound));
        assert_eq!(error_code(&io), "IO_ERROR");
        assert_eq!(exit_status(&io), 3);

        let item = CommandError::Item("bad".to_string());
        assert_eq!(exit_status(&item), 1);
    }
}
