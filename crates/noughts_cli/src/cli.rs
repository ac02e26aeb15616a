//! Command-line interface for noughts.

use clap::{Parser, Subcommand};
use noughts::{Board, Player};
use std::path::PathBuf;

/// Noughts - tic-tac-toe against an exhaustive minimax opponent
#[derive(Parser, Debug)]
#[command(name = "noughts")]
#[command(about = "Analyse tic-tac-toe positions with full-width minimax", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to a TOML config file
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Tracing filter (overrides the config file, RUST_LOG overrides both)
    #[arg(long, global = true)]
    pub log_filter: Option<String>,

    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Print the best move for a position
    BestMove {
        /// Board in row-major notation, e.g. "XX./OO./..."
        #[arg(short, long)]
        board: Board,

        /// Search for the human (X) instead of the computer (O)
        #[arg(long)]
        human: bool,

        /// Print JSON instead of text
        #[arg(long)]
        json: bool,
    },

    /// Print the status of a position
    Evaluate {
        /// Board in row-major notation, e.g. "XOX/XXO/OXO"
        #[arg(short, long)]
        board: Board,

        /// Print JSON instead of text
        #[arg(long)]
        json: bool,
    },

    /// Play the selector against itself from the empty board
    SelfPlay {
        /// Side that opens the game (defaults to the config file)
        #[arg(short, long)]
        first: Option<Player>,
    },

    /// Replay a sequence of moves and report the resulting game state
    Replay {
        /// Side that made the first move (defaults to the config file)
        #[arg(short, long)]
        first: Option<Player>,

        /// Moves as square numbers (1-9), "row,col" pairs or labels
        #[arg(required = true)]
        moves: Vec<String>,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_best_move() {
        let cli = Cli::try_parse_from(["noughts", "best-move", "--board", "XX./OO./...", "--json"])
            .unwrap();
        match cli.command {
            Command::BestMove { board, human, json } => {
                assert_eq!(board.occupied(), 4);
                assert!(!human);
                assert!(json);
            }
            other => panic!("unexpected command {:?}", other),
        }
    }

    #[test]
    fn test_parse_self_play_first() {
        let cli = Cli::try_parse_from(["noughts", "self-play", "--first", "computer"]).unwrap();
        assert!(matches!(
            cli.command,
            Command::SelfPlay {
                first: Some(Player::Computer)
            }
        ));
    }

    #[test]
    fn test_global_flags_after_subcommand() {
        let cli = Cli::try_parse_from(["noughts", "replay", "5", "1", "--log-filter", "debug"])
            .unwrap();
        assert_eq!(cli.log_filter.as_deref(), Some("debug"));
    }

    #[test]
    fn test_bad_board_rejected() {
        assert!(Cli::try_parse_from(["noughts", "evaluate", "--board", "XX"]).is_err());
    }
}
