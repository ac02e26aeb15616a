//! Win detection logic for tic-tac-toe.

use crate::position::Position;
use crate::types::{Board, Player, Square};

/// The eight winning lines: rows, then columns, then diagonals.
pub const LINES: [[Position; 3]; 8] = [
    // Rows
    [Position::TopLeft, Position::TopCenter, Position::TopRight],
    [Position::MiddleLeft, Position::Center, Position::MiddleRight],
    [Position::BottomLeft, Position::BottomCenter, Position::BottomRight],
    // Columns
    [Position::TopLeft, Position::MiddleLeft, Position::BottomLeft],
    [Position::TopCenter, Position::Center, Position::BottomCenter],
    [Position::TopRight, Position::MiddleRight, Position::BottomRight],
    // Diagonals
    [Position::TopLeft, Position::Center, Position::BottomRight],
    [Position::TopRight, Position::Center, Position::BottomLeft],
];

/// Checks whether `player` owns a complete row, column or diagonal.
///
/// The answer for each player is independent of the other, so a grid
/// that could never arise in play may report both players as winners.
pub fn is_win(board: &Board, player: Player) -> bool {
    winning_line(board, player).is_some()
}

/// Returns the first line (in [`LINES`] order) fully owned by `player`.
pub fn winning_line(board: &Board, player: Player) -> Option<[Position; 3]> {
    let mark = Square::Occupied(player);
    LINES
        .into_iter()
        .find(|line| line.iter().all(|pos| board.get(*pos) == mark))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_winner_empty_board() {
        let board = Board::new();
        assert!(!is_win(&board, Player::Human));
        assert!(!is_win(&board, Player::Computer));
    }

    #[test]
    fn test_winner_top_row() {
        let mut board = Board::new();
        board.set(Position::TopLeft, Square::Occupied(Player::Human));
        board.set(Position::TopCenter, Square::Occupied(Player::Human));
        board.set(Position::TopRight, Square::Occupied(Player::Human));
        assert!(is_win(&board, Player::Human));
        assert!(!is_win(&board, Player::Computer));
    }

    #[test]
    fn test_winner_anti_diagonal() {
        let mut board = Board::new();
        board.set(Position::TopRight, Square::Occupied(Player::Computer));
        board.set(Position::Center, Square::Occupied(Player::Computer));
        board.set(Position::BottomLeft, Square::Occupied(Player::Computer));
        assert!(is_win(&board, Player::Computer));
        assert_eq!(
            winning_line(&board, Player::Computer),
            Some([Position::TopRight, Position::Center, Position::BottomLeft])
        );
    }

    #[test]
    fn test_every_line_detected() {
        for line in LINES {
            let mut board = Board::new();
            for pos in line {
                board.set(pos, Square::Occupied(Player::Computer));
            }
            assert!(is_win(&board, Player::Computer), "line {:?}", line);
            assert_eq!(winning_line(&board, Player::Computer), Some(line));
        }
    }

    #[test]
    fn test_no_winner_incomplete() {
        let board: Board = "XX./O../...".parse().unwrap();
        assert!(!is_win(&board, Player::Human));
    }

    #[test]
    fn test_both_players_reported_on_raw_grid() {
        let board: Board = "XXX/OOO/...".parse().unwrap();
        assert!(is_win(&board, Player::Human));
        assert!(is_win(&board, Player::Computer));
    }
}
