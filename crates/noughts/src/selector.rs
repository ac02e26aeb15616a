//! Exhaustive minimax move selection.
//!
//! The computer maximizes and the human minimizes a single score:
//! `+1` for a computer win, `-1` for a human win and `0` for a draw.
//! The whole remaining game tree is searched without pruning or a depth
//! limit, which is cheap on a 3x3 board (fewer than 9! move sequences).

use crate::position::Position;
use crate::rules::{evaluate, is_draw, is_win, legal_moves};
use crate::types::{Board, GameStatus, Player, Square};
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// Minimax score, from the computer's point of view.
pub type Score = i32;

/// Score of a board the human has won.
pub const HUMAN_WIN: Score = -1;
/// Score of a board the computer has won.
pub const COMPUTER_WIN: Score = 1;
/// Score of a drawn board.
pub const DRAW: Score = 0;

/// A move together with its minimax value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_new::new)]
pub struct ScoredMove {
    /// Square to play.
    pub position: Position,
    /// Value of the game after playing it, assuming optimal play.
    pub score: Score,
}

/// Counters collected during one search.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchStats {
    /// Boards visited, including the root.
    pub nodes: u64,
    /// Deepest ply reached below the root.
    pub max_depth: usize,
}

/// Result of a top-level search.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Search {
    /// The chosen move.
    pub best: ScoredMove,
    /// Search counters.
    pub stats: SearchStats,
}

/// Error returned when the search is asked to move on a finished board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum SearchError {
    /// The board is already won or drawn.
    #[display("Cannot choose a move on a finished board ({})", _0)]
    TerminalBoard(#[error(not(source))] GameStatus),

    /// No empty square remains although nobody has won.
    #[display("No legal moves on an unfinished board")]
    NoLegalMoves,
}


/// Score of a terminal board, or `None` while the game is still open.
///
/// The order of the checks is fixed: human win, computer win, full board.
pub fn terminal_score(board: &Board) -> Option<Score> {
    if is_win(board, Player::Human) {
        Some(HUMAN_WIN)
    } else if is_win(board, Player::Computer) {
        Some(COMPUTER_WIN)
    } else if is_draw(board) {
        Some(DRAW)
    } else {
        None
    }
}

/// Searches for the best move for `mover`.
///
/// The caller's board is left untouched; the search backtracks over a
/// single private copy.
///
/// # Errors
///
/// Returns `SearchError::TerminalBoard` if the board is already won or full.
#[instrument(skip(board), fields(board = %board))]
pub fn search(board: &Board, mover: Player) -> Result<Search, SearchError> {
    let status = evaluate(board);
    if status.is_terminal() {
        return Err(SearchError::TerminalBoard(status));
    }

    let mut searcher = Searcher::new(board.clone());
    let (position, score) = searcher.minimax(0, mover);
    let position = position.ok_or(SearchError::NoLegalMoves)?;
    let best = ScoredMove::new(position, score);

    debug!(
        %mover,
        %position,
        score,
        nodes = searcher.stats.nodes,
        max_depth = searcher.stats.max_depth,
        "Search complete"
    );

    Ok(Search {
        best,
        stats: searcher.stats,
    })
}

/// Best move and its score for `mover`.
///
/// # Errors
///
/// See [`search`].
pub fn best_move(board: &Board, mover: Player) -> Result<ScoredMove, SearchError> {
    search(board, mover).map(|s| s.best)
}

/// Chooses the computer's move on `board`.
///
/// # Errors
///
/// See [`search`].
#[instrument(skip(board))]
pub fn choose_computer_move(board: &Board) -> Result<Position, SearchError> {
    best_move(board, Player::Computer).map(|m| m.position)
}

/// Backtracking search state: one scratch board plus counters.
struct Searcher {
    board: Board,
    stats: SearchStats,
}

impl Searcher {
    fn new(board: Board) -> Self {
        Self {
            board,
            stats: SearchStats::default(),
        }
    }

    /// Returns the best move (if any) and the value of the current board
    /// with `mover` to play.
    ///
    /// Only a strictly better score replaces the current best, so among
    /// equal moves the first in row-major order wins.
    fn minimax(&mut self, depth: usize, mover: Player) -> (Option<Position>, Score) {
        self.stats.nodes += 1;
        self.stats.max_depth = self.stats.max_depth.max(depth);

        if let Some(score) = terminal_score(&self.board) {
            return (None, score);
        }

        let mut best = None;
        let mut best_score = match mover {
            Player::Computer => Score::MIN,
            Player::Human => Score::MAX,
        };

        for position in legal_moves(&self.board) {
            self.board.set(position, Square::Occupied(mover));
            let (_, score) = self.minimax(depth + 1, mover.opponent());
            self.board.set(position, Square::Empty);

            let improves = match mover {
                Player::Computer => score > best_score,
                Player::Human => score < best_score,
            };
            if improves {
                best_score = score;
                best = Some(position);
            }
        }

        (best, best_score)
    }
}
