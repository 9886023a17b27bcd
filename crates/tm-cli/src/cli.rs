//! Command-line argument definitions.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::commands::edit::{AddArgs, AddBreakArgs, AddHeaderArgs, MoveArgs, RemoveArgs};
use crate::commands::leaderboard::LeaderboardArgs;
use crate::commands::new::NewArgs;
use crate::commands::show::ShowArgs;
use crate::commands::times::TimesArgs;

/// Club meeting agenda tool.
///
/// Keeps meeting agendas as JSON documents, recomputes every row's start
/// time after each edit, and ranks members for Gem of the Month.
#[derive(Debug, Parser)]
#[command(name = "tm", version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose output.
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Path to config file.
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Create an empty agenda document.
    New(NewArgs),

    /// Print an agenda as stored.
    Show(ShowArgs),

    /// Recompute every row's start time.
    Times(TimesArgs),

    /// Add a timed speaking item.
    Add(AddArgs),

    /// Add a timed break.
    AddBreak(AddBreakArgs),

    /// Add a session header.
    AddHeader(AddHeaderArgs),

    /// Remove a row.
    Remove(RemoveArgs),

    /// Move a row to a new position.
    Move(MoveArgs),

    /// Rank members by monthly performance points.
    Leaderboard(LeaderboardArgs),
}

#[cfg(test)]
mod tests {
    use super::*;

    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn parses_add_break_with_defaults() {
        let cli = Cli::try_parse_from(["tm", "add-break", "agenda.json", "--minutes", "10"])
            .unwrap();
        let Some(Commands::AddBreak(args)) = cli.command else {
            panic!("expected add-break");
        };
        assert_eq!(args.minutes, 10);
        assert_eq!(args.seconds, 0);
        assert!(args.activity.is_none());
        assert!(args.position.is_none());
    }

    #[test]
    fn parses_global_flags_after_subcommand() {
        let cli = Cli::try_parse_from(["tm", "show", "agenda.json", "--verbose", "--json"])
            .unwrap();
        assert!(cli.verbose);
        assert!(matches!(cli.command, Some(Commands::Show(ShowArgs { json: true, .. }))));
    }
}
