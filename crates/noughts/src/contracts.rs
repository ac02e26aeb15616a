//! Contract-based validation for moves.
//!
//! Contracts define correctness through preconditions and postconditions.
//! They formalize the Hoare-style reasoning: {P} action {Q}

use crate::action::{Move, MoveError};
use crate::invariants::{InvariantSet, NoughtsInvariants};
use crate::typestate::GameInProgress;
use crate::types::{Board, Player};
use tracing::{instrument, warn};

// ─────────────────────────────────────────────────────────────
//  Contract Trait
// ─────────────────────────────────────────────────────────────

/// A contract defines preconditions and postconditions for state transitions.
pub trait Contract<S, A> {
    /// Checks preconditions before applying the action.
    fn pre(state: &S, action: &A) -> Result<(), MoveError>;

    /// Checks postconditions after applying the action.
    fn post(before: &S, after: &S) -> Result<(), MoveError>;
}

// ─────────────────────────────────────────────────────────────
//  Move Preconditions
// ─────────────────────────────────────────────────────────────

/// Precondition: The square at the move's position must be empty.
pub struct SquareIsEmpty;

impl SquareIsEmpty {
    /// Rejects moves onto an occupied square.
    #[instrument(skip(game))]
    pub fn check(mov: &Move, game: &GameInProgress) -> Result<(), MoveError> {
        if !game.board().is_empty(mov.position) {
            Err(MoveError::SquareOccupied(mov.position))
        } else {
            Ok(())
        }
    }
}

/// Precondition: It must be the player's turn.
pub struct PlayersTurn;

impl PlayersTurn {
    /// Rejects moves by the side that is not on turn.
    #[instrument(skip(game))]
    pub fn check(mov: &Move, game: &GameInProgress) -> Result<(), MoveError> {
        if mov.player != game.to_move() {
            Err(MoveError::WrongPlayer(mov.player))
        } else {
            Ok(())
        }
    }
}

/// Composite precondition: A move is legal if the square is empty and it's the player's turn.
pub struct LegalMove;

impl LegalMove {
    /// Validates all preconditions for a move.
    #[instrument(skip(game))]
    pub fn check(mov: &Move, game: &GameInProgress) -> Result<(), MoveError> {
        SquareIsEmpty::check(mov, game)?;
        PlayersTurn::check(mov, game)?;
        Ok(())
    }
}

// ─────────────────────────────────────────────────────────────
//  Move Contract (Pre + Post)
// ─────────────────────────────────────────────────────────────

/// Contract for move actions.
///
/// Preconditions:
/// - Square must be empty
/// - Must be player's turn
///
/// Postconditions:
/// - Board remains monotonic
/// - Players still alternate
/// - History remains consistent with board
pub struct MoveContract;

impl Contract<GameInProgress, Move> for MoveContract {
    fn pre(game: &GameInProgress, action: &Move) -> Result<(), MoveError> {
        LegalMove::check(action, game)
    }

    fn post(before: &GameInProgress, after: &GameInProgress) -> Result<(), MoveError> {
        if after.history().len() != before.history().len() + 1 {
            return Err(MoveError::InvariantViolation(
                "Postcondition failed: exactly one move per transition".to_string(),
            ));
        }

        NoughtsInvariants::check_all(after).map_err(|violations| {
            let descriptions = violations
                .iter()
                .map(|v| v.description.as_str())
                .collect::<Vec<_>>()
                .join("; ");
            MoveError::InvariantViolation(format!("Postcondition failed: {}", descriptions))
        })
    }
}

// ─────────────────────────────────────────────────────────────
//  Board balance
// ─────────────────────────────────────────────────────────────

/// Invariant: mark counts differ by at most one.
pub struct BoardConsistent;

impl BoardConsistent {
    /// Checks the mark balance of a board.
    #[instrument(skip(board))]
    pub fn holds(board: &Board) -> bool {
        let human = board.count(Player::Human);
        let computer = board.count(Player::Computer);

        let valid = human.abs_diff(computer) <= 1;
        if !valid {
            warn!(human, computer, "Board consistency violated");
        }
        valid
    }
}

/// Asserts that all game invariants hold (panic on violation in debug builds).
#[instrument(skip(game))]
pub fn assert_invariants(game: &GameInProgress) {
    debug_assert!(BoardConsistent::holds(game.board()), "Board consistency violated");
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{GameResult, GameSetup, Position, Square};

    #[test]
    fn test_precondition_empty_square() {
        let game = GameSetup::new().start(Player::Human);
        let action = Move::new(Player::Human, Position::Center);
        assert!(MoveContract::pre(&game, &action).is_ok());
    }

    #[test]
    fn test_precondition_occupied_square() {
        let game = GameSetup::new().start(Player::Human);
        let action = Move::new(Player::Human, Position::Center);

        let Ok(GameResult::InProgress(game)) = game.make_move(action) else {
            panic!("Expected in-progress game");
        };
        let action2 = Move::new(Player::Computer, Position::Center);
        assert!(matches!(
            MoveContract::pre(&game, &action2),
            Err(MoveError::SquareOccupied(Position::Center))
        ));
    }

    #[test]
    fn test_precondition_wrong_turn() {
        let game = GameSetup::new().start(Player::Human);
        let action = Move::new(Player::Computer, Position::Center);
        assert!(matches!(
            MoveContract::pre(&game, &action),
            Err(MoveError::WrongPlayer(Player::Computer))
        ));
    }

    #[test]
    fn test_postcondition_holds_after_move() {
        let game = GameSetup::new().start(Player::Human);
        let action = Move::new(Player::Human, Position::Center);

        let Ok(GameResult::InProgress(after)) = game.clone().make_move(action) else {
            panic!("Expected in-progress game");
        };
        assert!(MoveContract::post(&game, &after).is_ok());
    }

    #[test]
    fn test_postcondition_detects_corruption() {
        let game = GameSetup::new().start(Player::Human);
        let action = Move::new(Player::Human, Position::Center);

        let Ok(GameResult::InProgress(mut after)) = game.clone().make_move(action) else {
            panic!("Expected in-progress game");
        };
        after.board.set(Position::TopLeft, Square::Occupied(Player::Computer));
        assert!(MoveContract::post(&game, &after).is_err());
    }

    #[test]
    fn test_postcondition_detects_skipped_transition() {
        let game = GameSetup::new().start(Player::Human);
        assert!(MoveContract::post(&game, &game).is_err());
    }

    #[test]
    fn test_board_consistency() {
        assert!(BoardConsistent::holds(&"XO./X../...".parse().unwrap()));
        assert!(!BoardConsistent::holds(&"XXX/O../...".parse().unwrap()));
    }
}
