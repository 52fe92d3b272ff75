//! Command-line interface for qttt.

use clap::{ArgAction, Parser, Subcommand};
use quantum_tictactoe::Piece;
use std::path::PathBuf;

/// qttt - Quantum tic-tac-toe match driver
#[derive(Parser, Debug)]
#[command(name = "qttt")]
#[command(about = "Drive quantum tic-tac-toe matches from transcripts", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to a TOML config file (default: ./qttt.toml if present)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Raise log verbosity (-v debug, -vv trace)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Print JSON instead of text boards
    #[arg(long, global = true)]
    pub json: bool,

    /// Print only what one seat may see (x or o)
    #[arg(long = "as", value_name = "SEAT", global = true)]
    pub viewer: Option<Piece>,

    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Replay a transcript file and print the final state
    Replay {
        /// Transcript to replay
        file: PathBuf,

        /// Stop at the first rejected command
        #[arg(long)]
        strict: bool,
    },

    /// Read commands from stdin and print the state after each
    Play,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parses_replay_with_global_flags() {
        let cli = Cli::try_parse_from([
            "qttt", "replay", "game.qttt", "--strict", "--as", "o", "-vv",
        ])
        .unwrap();
        assert_eq!(cli.viewer, Some(Piece::O));
        assert_eq!(cli.verbose, 2);
        assert!(!cli.json);
        match cli.command {
            Command::Replay { file, strict } => {
                assert_eq!(file, PathBuf::from("game.qttt"));
                assert!(strict);
            }
            Command::Play => panic!("expected replay"),
        }
    }

    #[test]
    fn test_rejects_unknown_seat() {
        assert!(Cli::try_parse_from(["qttt", "--as", "z", "play"]).is_err());
    }
}
