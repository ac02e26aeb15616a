//! Shared helpers for integration tests.

use noughts::{Board, Player, Square, evaluate, legal_moves};
use std::collections::HashSet;

/// Every (board, side to move) pair reachable by alternating legal play
/// from the empty board, with either side opening.
pub fn reachable_positions() -> HashSet<(Board, Player)> {
    let mut seen = HashSet::new();
    for first in [Player::Human, Player::Computer] {
        visit(Board::new(), first, &mut seen);
    }
    seen
}

fn visit(board: Board, to_move: Player, seen: &mut HashSet<(Board, Player)>) {
    if !seen.insert((board.clone(), to_move)) {
        return;
    }
    if evaluate(&board).is_terminal() {
        return;
    }
    for pos in legal_moves(&board) {
        let mut next = board.clone();
        next.set(pos, Square::Occupied(to_move));
        visit(next, to_move.opponent(), seen);
    }
}
