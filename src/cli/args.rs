//! CLI argument definitions.
//!
//! This module defines all CLI arguments using clap's derive macros.
//! The main entry point is the [`Cli`] struct.

use clap::{Parser, Subcommand};
use clap_complete::Shell;
use std::path::PathBuf;

use crate::check::OutputFormat;

/// Environment variable naming a fact snapshot to check instead of the live host.
pub const FACTS_ENV: &str = "SATELLITE_SANITY_FACTS";

/// satellite-sanity - Check whether a host is fit to run Satellite.
#[derive(Debug, Parser)]
#[command(name = "satellite-sanity")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Show verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Minimal output (findings and errors only)
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// No output except errors; only the exit code reports the outcome
    #[arg(long, global = true, conflicts_with_all = ["verbose", "quiet"])]
    pub silent: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Enable debug logging
    #[arg(long, global = true)]
    pub debug: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Run checks against the host or a fact snapshot (default if no command specified)
    Check(CheckArgs),

    /// List available rules
    List(ListArgs),

    /// Print collected facts as YAML
    Facts(FactsArgs),

    /// Generate shell completions
    Completions(CompletionsArgs),
}

/// Arguments for the `check` command.
#[derive(Debug, Clone, Default, clap::Args)]
pub struct CheckArgs {
    /// Fact snapshot (directory with one file per fact, or YAML file) instead of the live host
    #[arg(short, long, env = FACTS_ENV, value_name = "PATH")]
    pub facts: Option<PathBuf>,

    /// Run only rules carrying one of these tags (comma-separated)
    #[arg(short, long, value_delimiter = ',')]
    pub tags: Vec<String>,

    /// Run only these rules (comma-separated rule ids)
    #[arg(short, long, value_delimiter = ',')]
    pub rule: Vec<String>,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Human)]
    pub format: OutputFormat,
}

/// Arguments for the `list` command.
#[derive(Debug, Clone, Default, clap::Args)]
pub struct ListArgs {
    /// List only rules carrying one of these tags (comma-separated)
    #[arg(short, long, value_delimiter = ',')]
    pub tags: Vec<String>,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

/// Arguments for the `facts` command.
#[derive(Debug, Clone, Default, clap::Args)]
pub struct FactsArgs {
    /// Fact snapshot to print instead of collecting from the live host
    #[arg(short, long, env = FACTS_ENV, value_name = "PATH")]
    pub facts: Option<PathBuf>,
}

/// Arguments for the `completions` command.
#[derive(Debug, Clone, clap::Args)]
pub struct CompletionsArgs {
    /// Shell to generate completions for
    #[arg(value_enum)]
    pub shell: Shell,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_check_with_filters() {
        let cli = Cli::parse_from([
            "satellite-sanity",
            "check",
            "--facts",
            "/tmp/facts.yml",
            "--tags",
            "Satellite_5,Satellite_6",
            "--format",
            "json",
        ]);

        match cli.command {
            Some(Commands::Check(args)) => {
                assert_eq!(args.facts, Some(PathBuf::from("/tmp/facts.yml")));
                assert_eq!(args.tags, vec!["Satellite_5", "Satellite_6"]);
                assert_eq!(args.format, OutputFormat::Json);
                assert!(args.rule.is_empty());
            }
            other => panic!("Expected Check command, got {:?}", other),
        }
    }

    #[test]
    fn no_command_is_allowed() {
        let cli = Cli::parse_from(["satellite-sanity", "--no-color"]);
        assert!(cli.command.is_none());
        assert!(cli.no_color);
    }

    #[test]
    fn global_flags_after_subcommand() {
        let cli = Cli::parse_from(["satellite-sanity", "list", "--json", "--debug"]);
        assert!(cli.debug);
        assert!(matches!(cli.command, Some(Commands::List(ListArgs { json: true, .. }))));
    }

    #[test]
    fn silent_flag_is_global() {
        let cli = Cli::parse_from(["satellite-sanity", "check", "--silent"]);
        assert!(cli.silent);
        assert!(!cli.quiet);
    }

    #[test]
    fn silent_conflicts_with_verbose() {
        let result = Cli::try_parse_from(["satellite-sanity", "--silent", "-v", "check"]);
        assert!(result.is_err());
    }

    #[test]
    fn check_args_default_to_human() {
        assert_eq!(CheckArgs::default().format, OutputFormat::Human);
    }

    #[test]
    fn rejects_unknown_format() {
        let result = Cli::try_parse_from(["satellite-sanity", "check", "--format", "xml"]);
        assert!(result.is_err());
    }
}
