//! Derived game status.

use super::{is_draw, is_win};
use crate::types::{Board, GameStatus, Player};

/// Derives the status of a board.
///
/// Checks run in a fixed priority: human win, computer win, then full
/// board. A full board with a completed line is a win, never a draw.
pub fn evaluate(board: &Board) -> GameStatus {
    if is_win(board, Player::Human) {
        GameStatus::Won(Player::Human)
    } else if is_win(board, Player::Computer) {
        GameStatus::Won(Player::Computer)
    } else if is_draw(board) {
        GameStatus::Draw
    } else {
        GameStatus::InProgress
    }
}
