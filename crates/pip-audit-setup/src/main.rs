//! pip-audit-setup - Scaffold a Python security audit workflow into a repository

mod recipe;
mod templates;

use anyhow::Result;
use clap::{CommandFactory, FromArgMatches, Parser};
use recipe::SecurityAuditRecipe;
use scaffolder_core::tui::{self, SetupArgs};
use scaffolder_core::{Configuration, Recipe, DEFAULT_BRANCH, DEFAULT_RUNTIME_VERSION};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "pip-audit-setup")]
#[command(version)]
pub struct Args {
    /// Default branch name
    #[arg(long, default_value = DEFAULT_BRANCH)]
    pub branch: String,

    /// Python version to use
    #[arg(long = "python-version", default_value = DEFAULT_RUNTIME_VERSION)]
    pub python_version: String,

    /// Repository root to set up (defaults to the current directory)
    #[arg(short, long)]
    pub directory: Option<PathBuf>,
}

impl From<Args> for SetupArgs {
    fn from(args: Args) -> Self {
        SetupArgs {
            directory: args.directory,
            config: Configuration::new(args.branch, args.python_version),
        }
    }
}

/// Command definition with the recipe's help text
fn cli<R: Recipe>(recipe: &R) -> clap::Command {
    Args::command().about(recipe.cli_description())
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    tui::install_terminal_guard();

    let recipe = SecurityAuditRecipe;
    let args =
        Args::from_arg_matches(&cli(&recipe).get_matches()).unwrap_or_else(|e| e.exit());
    let result = tui::run(&recipe, args.into()).await;

    // Ensure cursor is visible on normal exit
    tui::restore_cursor();

    result.map(|_| ())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let args = Args::parse_from(["pip-audit-setup"]);
        let setup: SetupArgs = args.into();

        assert_eq!(setup.config, Configuration::default());
        assert!(setup.directory.is_none());
    }

    #[test]
    fn test_flags() {
        let args = Args::parse_from([
            "pip-audit-setup",
            "--branch",
            "develop",
            "--python-version",
            "3.12",
            "-d",
            "service",
        ]);
        let setup: SetupArgs = args.into();

        assert_eq!(setup.config.branch(), "develop");
        assert_eq!(setup.config.runtime_version(), "3.12");
        assert_eq!(setup.directory, Some(PathBuf::from("service")));
    }

    #[test]
    fn test_subcommands_are_rejected() {
        assert!(Args::try_parse_from(["pip-audit-setup", "create"]).is_err());
    }

    #[test]
    fn test_cli_is_well_formed() {
        cli(&SecurityAuditRecipe).debug_assert();
    }

    #[test]
    fn test_help_text_comes_from_recipe() {
        let command = cli(&SecurityAuditRecipe);
        assert_eq!(
            command.get_about().map(|about| about.to_string()),
            Some(SecurityAuditRecipe.cli_description().to_string())
        );

        let matches = command
            .try_get_matches_from(["pip-audit-setup", "--branch", "trunk"])
            .unwrap();
        let args = Args::from_arg_matches(&matches).unwrap();
        assert_eq!(args.branch, "trunk");
        assert_eq!(args.python_version, DEFAULT_RUNTIME_VERSION);
    }
}
