//! Phase-specific typestate structs for a game against the computer.
//!
//! Each phase is its own distinct type with phase-specific fields.
//! This encodes invariants at compile time - a `GameFinished` game
//! ALWAYS has an outcome, not `Option<Outcome>`.

use crate::action::{Move, MoveError};
use crate::contracts::{Contract, MoveContract, assert_invariants};
use crate::phases::Outcome;
use crate::position::Position;
use crate::rules::{evaluate, legal_moves};
use crate::selector::choose_computer_move;
use crate::types::{Board, Player, Square};
use tracing::{info, instrument};

// ─────────────────────────────────────────────────────────────
//  Setup Phase
// ─────────────────────────────────────────────────────────────

/// Game in setup phase - ready to start.
///
/// The board is always empty.
#[derive(Debug, Clone)]
pub struct GameSetup {
    board: Board,
}

impl GameSetup {
    /// Creates a new game in setup phase.
    #[instrument]
    pub fn new() -> Self {
        Self {
            board: Board::new(),
        }
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Starts the game with the first player (consumes setup, returns in-progress).
    #[instrument(skip(self))]
    pub fn start(self, first_player: Player) -> GameInProgress {
        GameInProgress {
            board: self.board,
            history: Vec::new(),
            to_move: first_player,
            first_player,
        }
    }
}

impl Default for GameSetup {
    fn default() -> Self {
        Self::new()
    }
}

// ─────────────────────────────────────────────────────────────
//  InProgress Phase
// ─────────────────────────────────────────────────────────────

/// Game in progress - can accept moves.
///
/// Invariants enforced by type:
/// - to_move alternates
/// - No outcome yet (outcome is in GameFinished)
#[derive(Debug, Clone)]
pub struct GameInProgress {
    pub(crate) board: Board,
    pub(crate) history: Vec<Move>,
    pub(crate) to_move: Player,
    pub(crate) first_player: Player,
}

impl GameInProgress {
    /// Makes a move, consuming self and transitioning to next state.
    ///
    /// Preconditions are always checked. Postconditions run in debug builds,
    /// on every transition including the one that ends the game.
    #[instrument(skip(self, action), fields(action = %action))]
    pub fn make_move(self, action: Move) -> Result<GameResult, MoveError> {
        MoveContract::pre(&self, &action)?;

        #[cfg(debug_assertions)]
        let before = self.clone();

        let mut game = self;
        game.board.set(action.position, Square::Occupied(action.player));
        game.history.push(action);
        game.to_move = game.to_move.opponent();

        // Checked before branching so the game-ending move is covered too.
        #[cfg(debug_assertions)]
        MoveContract::post(&before, &game)?;

        assert_invariants(&game);

        match Outcome::from_status(evaluate(&game.board)) {
            Some(outcome) => {
                info!(%outcome, moves = game.history.len(), "Game finished");
                Ok(GameResult::Finished(GameFinished {
                    board: game.board,
                    history: game.history,
                    outcome,
                }))
            }
            None => Ok(GameResult::InProgress(game)),
        }
    }

    /// Lets the computer choose and play its move.
    ///
    /// # Errors
    ///
    /// Returns `MoveError::WrongPlayer` when it is the human's turn.
    #[instrument(skip(self))]
    pub fn play_computer(self) -> Result<GameResult, MoveError> {
        if self.to_move != Player::Computer {
            return Err(MoveError::WrongPlayer(Player::Computer));
        }

        let position = choose_computer_move(&self.board)
            .map_err(|e| MoveError::InvariantViolation(e.to_string()))?;
        self.make_move(Move::new(Player::Computer, position))
    }

    /// Plays the human's move at `position`.
    pub fn play_human(self, position: Position) -> Result<GameResult, MoveError> {
        self.make_move(Move::new(Player::Human, position))
    }

    /// Returns the current player to move.
    pub fn to_move(&self) -> Player {
        self.to_move
    }

    /// Returns the player who opened the game.
    pub fn first_player(&self) -> Player {
        self.first_player
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns move history.
    pub fn history(&self) -> &[Move] {
        &self.history
    }

    /// Returns valid positions.
    pub fn valid_moves(&self) -> Vec<Position> {
        legal_moves(&self.board)
    }

    /// Turn prompt for the side to move.
    pub fn turn_message(&self) -> String {
        match self.to_move {
            Player::Human => format!("Your turn ({})", Player::Human.mark()),
            Player::Computer => format!("computer's turn ({})", Player::Computer.mark()),
        }
    }

    /// Replays moves from the initial state.
    #[instrument(skip(moves), fields(moves = moves.len()))]
    pub fn replay(first_player: Player, moves: &[Move]) -> Result<GameResult, MoveError> {
        let mut game = GameSetup::new().start(first_player);

        for action in moves {
            match game.make_move(*action)? {
                GameResult::InProgress(g) => game = g,
                GameResult::Finished(g) => return Ok(GameResult::Finished(g)),
            }
        }

        Ok(GameResult::InProgress(game))
    }
}

// ─────────────────────────────────────────────────────────────
//  Finished Phase
// ─────────────────────────────────────────────────────────────

/// Game finished - outcome determined.
#[derive(Debug, Clone)]
pub struct GameFinished {
    board: Board,
    history: Vec<Move>,
    outcome: Outcome,
}

impl GameFinished {
    /// Returns the outcome.
    pub fn outcome(&self) -> &Outcome {
        &self.outcome
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns move history.
    pub fn history(&self) -> &[Move] {
        &self.history
    }

    /// Restarts the game (consumes finished, returns setup).
    #[instrument(skip(self))]
    pub fn restart(self) -> GameSetup {
        GameSetup::new()
    }
}

// ─────────────────────────────────────────────────────────────
//  Result Type
// ─────────────────────────────────────────────────────────────

/// Result of making a move.
#[derive(Debug)]
pub enum GameResult {
    /// Game continues.
    InProgress(GameInProgress),
    /// Game finished.
    Finished(GameFinished),
}

impl GameResult {
    /// Returns the board in either phase.
    pub fn board(&self) -> &Board {
        match self {
            GameResult::InProgress(game) => game.board(),
            GameResult::Finished(game) => game.board(),
        }
    }

    /// Returns the move history in either phase.
    pub fn history(&self) -> &[Move] {
        match self {
            GameResult::InProgress(game) => game.history(),
            GameResult::Finished(game) => game.history(),
        }
    }
}
