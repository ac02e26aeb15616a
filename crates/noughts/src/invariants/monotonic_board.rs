//! Monotonic board invariant: squares never change once set.

use super::Invariant;
use crate::{Board, GameInProgress, Square};

/// Invariant: Board squares are monotonic (never overwritten).
///
/// Verified by replaying the move history onto an empty board and
/// comparing with the live board.
pub struct MonotonicBoardInvariant;

impl Invariant<GameInProgress> for MonotonicBoardInvariant {
    fn holds(game: &GameInProgress) -> bool {
        let mut reconstructed = Board::new();

        for mov in game.history() {
            if !reconstructed.is_empty(mov.position) {
                return false;
            }
            reconstructed.set(mov.position, Square::Occupied(mov.player));
        }

        reconstructed == *game.board()
    }

    fn description() -> &'static str {
        "Board squares are monotonic (never overwritten)"
    }
}
