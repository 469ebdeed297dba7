//! Command dispatch module for routing CLI commands to their handlers.

use crate::cli::{Cli, Commands, ConfigCommands, Shell};
use crate::commands::{self, CommandContext, CommandError, Result};

/// Trait for dispatchable commands.
pub trait Command {
    /// Execute the command.
    fn execute(&self, ctx: &CommandContext) -> Result<()>;
}

/// A parsed CLI invocation, ready to run.
pub enum Dispatch<'a> {
    Preview(commands::preview::PreviewOptions),
    Validate(commands::validate::ValidateOptions),
    Blocks(commands::blocks::BlocksOptions),
    Config(&'a Option<ConfigCommands>),
    Completions(&'a Shell),
    Help,
}

impl<'a> Dispatch<'a> {
    /// Creates a dispatch from the CLI command.
    pub fn from_cli(cli: &'a Cli) -> Self {
        match &cli.command {
            Some(Commands::Preview { file, item }) => {
                Self::Preview(commands::preview::PreviewOptions {
                    file: file.clone(),
                    item: item.clone(),
                })
            }
            Some(Commands::Validate { file, strict }) => {
                Self::Validate(commands::validate::ValidateOptions {
                    file: file.clone(),
                    strict: *strict,
                })
            }
            Some(Commands::Blocks { file }) => {
                Self::Blocks(commands::blocks::BlocksOptions { file: file.clone() })
            }
            Some(Commands::Config { command }) => Self::Config(command),
            Some(Commands::Completions { shell }) => Self::Completions(shell),
            None => Self::Help,
        }
    }
}

impl Command for Dispatch<'_> {
    fn execute(&self, ctx: &CommandContext) -> Result<()> {
        match self {
            Self::Preview(opts) => commands::preview::execute(ctx, opts),
            Self::Validate(opts) => commands::validate::execute(ctx, opts),
            Self::Blocks(opts) => commands::blocks::execute(ctx, opts),
            Self::Config(command) => dispatch_config(ctx, command),
            Self::Completions(shell) => {
                commands::completions::execute(shell).map_err(CommandError::Io)
            }
            Self::Help => {
                if !ctx.quiet {
                    println!("pf - Path of Exile item filter tool");
                    println!("Use --help for usage information");
                }
                Ok(())
            }
        }
    }
}

/// Dispatch config subcommands.
fn dispatch_config(ctx: &CommandContext, command: &Option<ConfigCommands>) -> Result<()> {
    match command {
        Some(ConfigCommands::Show) | None => commands::config::execute_show(ctx),
        Some(ConfigCommands::Set { key, value }) => {
            let opts = commands::config::ConfigSetOptions {
                key: key.clone(),
                value: value.clone(),
            };
            commands::config::execute_set(ctx, &opts)
        }
        Some(ConfigCommands::Path) => commands::config::execute_path(ctx),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;
    use std::path::PathBuf;

    #[test]
    fn test_dispatch_preview() {
        let cli = Cli::parse_from(["pf", "preview", "a.filter", "-b", "Chaos Orb"]);
        let Dispatch::Preview(opts) = Dispatch::from_cli(&cli) else {
            panic!("Expected Preview dispatch");
        };
        assert_eq!(opts.file, Some(PathBuf::from("a.filter")));
        assert_eq!(opts.item.base_type.as_deref(), Some("Chaos Orb"));
    }

    #[test]
    fn test_dispatch_validate() {
        let cli = Cli::parse_from(["pf", "validate", "-", "--strict"]);
        let Dispatch::Validate(opts) = Dispatch::from_cli(&cli) else {
            panic!("Expected Validate dispatch");
        };
        assert_eq!(opts.file, PathBuf::from("-"));
        assert!(opts.strict);
    }

    #[test]
    fn test_dispatch_config_and_help() {
        let cli = Cli::parse_from(["pf", "config"]);
        assert!(matches!(Dispatch::from_cli(&cli), Dispatch::Config(None)));

        let cli = Cli::parse_from(["pf"]);
        assert!(matches!(Dispatch::from_cli(&cli), Dispatch::Help));
    }
}
