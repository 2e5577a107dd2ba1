//! Command-line interface

use chrono::NaiveDate;
use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// Daily word puzzles in the terminal
#[derive(Parser, Debug)]
#[command(name = "daily-puzzles")]
#[command(about = "Deterministic daily Boggle and Word Ladder", long_about = None)]
#[command(version)]
pub struct Cli {
    /// TOML config file
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Write logs to this file (the terminal UI owns the screen)
    #[arg(long, global = true)]
    pub log_file: Option<PathBuf>,

    /// Subcommand to run; the menu opens when omitted
    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Play the daily Boggle board
    Boggle {
        /// Puzzle date (YYYY-MM-DD), today in UTC when omitted
        #[arg(long)]
        date: Option<NaiveDate>,
    },

    /// Play the daily Word Ladder
    Ladder {
        /// Puzzle date (YYYY-MM-DD), today in UTC when omitted
        #[arg(long)]
        date: Option<NaiveDate>,
    },

    /// Print a puzzle with its metadata and solution as JSON
    Show {
        /// Which game
        #[arg(value_enum)]
        game: GameArg,

        /// Puzzle date (YYYY-MM-DD), today in UTC when omitted
        #[arg(long)]
        date: Option<NaiveDate>,
    },
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameArg {
    Boggle,
    Ladder,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_show() {
        let cli = Cli::parse_from(["daily-puzzles", "show", "ladder", "--date", "2024-01-01"]);
        match cli.command {
            Some(Command::Show { game, date }) => {
                assert_eq!(game, GameArg::Ladder);
                assert_eq!(date, NaiveDate::from_ymd_opt(2024, 1, 1));
            }
            other => panic!("unexpected {:?}", other),
        }
    }

    #[test]
    fn test_global_flags() {
        let cli = Cli::parse_from(["daily-puzzles", "boggle", "--config", "p.toml"]);
        assert_eq!(cli.config, Some(PathBuf::from("p.toml")));
        assert!(matches!(cli.command, Some(Command::Boggle { date: None })));

        let cli = Cli::parse_from(["daily-puzzles"]);
        assert!(cli.command.is_none());
    }

    #[test]
    fn test_bad_date_rejected() {
        assert!(Cli::try_parse_from(["daily-puzzles", "boggle", "--date", "yesterday"]).is_err());
    }
}
