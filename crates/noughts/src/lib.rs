//! Noughts - tic-tac-toe against an exhaustive minimax opponent.
//!
//! # Architecture
//!
//! - **Board state**: [`Board`], [`Square`], [`Position`] and the pure rules
//!   ([`is_win`], [`is_draw`], [`legal_moves`], [`evaluate`])
//! - **Move selector**: full-width minimax ([`choose_computer_move`], [`search`])
//! - **Session**: typestate game wrapper ([`GameSetup`], [`GameInProgress`],
//!   [`GameFinished`]) with move contracts and invariants
//!
//! # Example
//!
//! ```
//! use noughts::{apply_move, choose_computer_move, evaluate, new_game, GameStatus, Player, Position};
//!
//! let mut board = new_game();
//! apply_move(&mut board, Position::Center, Player::Human)?;
//! let reply = choose_computer_move(&board)?;
//! apply_move(&mut board, reply, Player::Computer)?;
//! assert_eq!(evaluate(&board), GameStatus::InProgress);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod action;
mod contracts;
mod invariants;
mod phases;
mod position;
mod rules;
mod selector;
mod typestate;
mod types;

// Crate-level exports - Domain types
pub use action::{Move, MoveError};
pub use phases::Outcome;
pub use position::Position;
pub use types::{Board, GameStatus, ParseBoardError, Player, Square};

// Crate-level exports - Rules
pub use rules::win::LINES;
pub use rules::{apply_move, evaluate, is_draw, is_win, legal_moves, new_game, winning_line};

// Crate-level exports - Move selection
pub use selector::{
    COMPUTER_WIN, DRAW, HUMAN_WIN, Score, ScoredMove, Search, SearchError, SearchStats,
    best_move, choose_computer_move, search, terminal_score,
};

// Crate-level exports - Session
pub use contracts::{BoardConsistent, Contract, LegalMove, MoveContract, PlayersTurn, SquareIsEmpty};
pub use invariants::{
    AlternatingTurnInvariant, HistoryConsistentInvariant, Invariant, InvariantSet,
    InvariantViolation, MonotonicBoardInvariant, NoughtsInvariants,
};
pub use typestate::{GameFinished, GameInProgress, GameResult, GameSetup};
