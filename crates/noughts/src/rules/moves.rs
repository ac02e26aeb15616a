//! Move generation and application.

use crate::action::MoveError;
use crate::position::Position;
use crate::types::{Board, Player, Square};
use tracing::{debug, instrument};

/// Returns an empty board for a fresh game.
#[instrument]
pub fn new_game() -> Board {
    Board::new()
}

/// Every empty square, in row-major order.
///
/// The order is the tie-break order of the move selector.
pub fn legal_moves(board: &Board) -> Vec<Position> {
    Position::ALL
        .into_iter()
        .filter(|pos| board.is_empty(*pos))
        .collect()
}

/// Places `player`'s mark at `position`.
///
/// # Errors
///
/// - `MoveError::GameOver` if the board already shows a win or is full.
/// - `MoveError::SquareOccupied` if the square is taken.
#[instrument(skip(board), fields(board = %board))]
pub fn apply_move(board: &mut Board, position: Position, player: Player) -> Result<(), MoveError> {
    if super::evaluate(board).is_terminal() {
        return Err(MoveError::GameOver);
    }
    if !board.is_empty(position) {
        return Err(MoveError::SquareOccupied(position));
    }

    board.set(position, Square::Occupied(player));
    debug!(%position, %player, "Move applied");
    Ok(())
}
