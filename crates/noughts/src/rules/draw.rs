//! Draw detection logic for tic-tac-toe.

use crate::types::Board;

/// Checks if the board is full (all squares occupied).
///
/// A full board can also be a won board; callers that need an outcome go
/// through [`super::evaluate`], which checks wins first.
pub fn is_draw(board: &Board) -> bool {
    board.is_full()
}
