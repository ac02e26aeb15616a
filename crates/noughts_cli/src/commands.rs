//! Command implementations.
//!
//! Each command builds a serializable report; `main` prints it as text
//! (`Display`) or JSON.

use anyhow::{Context, Result, anyhow, bail};
use noughts::{
    Board, GameInProgress, GameResult, GameSetup, GameStatus, Move, Outcome, Player, Position,
    Score, SearchError, best_move, evaluate, legal_moves, search,
};
use serde::Serialize;
use std::fmt;
use tracing::{debug, info, instrument};

/// Best move for one side of a position.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BestMoveReport {
    /// Side the search played for.
    pub mover: Player,
    /// Chosen square.
    pub position: Position,
    /// Zero-based row of the chosen square.
    pub row: usize,
    /// Zero-based column of the chosen square.
    pub col: usize,
    /// Minimax value of the position after the move.
    pub score: Score,
    /// Boards visited by the search.
    pub nodes: u64,
}

/// Searches `board` for `mover`.
#[instrument(skip(board), fields(board = %board))]
pub fn best_move_report(board: &Board, mover: Player) -> Result<BestMoveReport, SearchError> {
    let result = search(board, mover)?;
    let (row, col) = result.best.position.coords();
    Ok(BestMoveReport {
        mover,
        position: result.best.position,
        row,
        col,
        score: result.best.score,
        nodes: result.stats.nodes,
    })
}

impl fmt::Display for BestMoveReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let verdict = match self.score {
            s if s > 0 => "computer wins",
            s if s < 0 => "human wins",
            _ => "draw",
        };
        write!(
            f,
            "{} ({}) plays {}; best play: {} (score {}, {} nodes)",
            self.mover,
            self.mover.mark(),
            self.position,
            verdict,
            self.score,
            self.nodes
        )
    }
}

/// Status of a position.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EvaluationReport {
    /// Derived status.
    pub status: GameStatus,
    /// Empty squares in row-major order, none once the game is over.
    pub legal_moves: Vec<Position>,
    /// End-of-game announcement, if the game is over.
    pub message: Option<&'static str>,
}

/// Evaluates `board`.
///
/// A finished board has no legal moves, even if squares are still empty.
pub fn evaluation_report(board: &Board) -> EvaluationReport {
    let status = evaluate(board);
    let legal_moves = if status.is_terminal() {
        Vec::new()
    } else {
        legal_moves(board)
    };
    EvaluationReport {
        status,
        legal_moves,
        message: Outcome::from_status(status).map(|o| o.message()),
    }
}

impl fmt::Display for EvaluationReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.message {
            Some(message) => writeln!(f, "{}", message)?,
            None => writeln!(f, "{}", self.status)?,
        }
        if self.legal_moves.is_empty() {
            write!(f, "Legal moves: none")
        } else {
            let squares = self
                .legal_moves
                .iter()
                .map(|p| format!("{} {}", p.to_index() + 1, p.label()))
                .collect::<Vec<_>>()
                .join(", ");
            write!(f, "Legal moves: {}", squares)
        }
    }
}

/// One ply of a recorded game.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Ply {
    /// The move played.
    pub action: Move,
    /// Board after the move.
    pub board: Board,
}

/// Transcript of a finished self-play game.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SelfPlayReport {
    /// Side that opened.
    pub first: Player,
    /// Moves in order with the resulting boards.
    pub plies: Vec<Ply>,
    /// Final outcome.
    pub outcome: Outcome,
}

/// Plays both sides with the selector until the game ends.
#[instrument]
pub fn self_play(first: Player) -> Result<SelfPlayReport> {
    let mut game = GameSetup::new().start(first);
    let mut plies = Vec::new();

    let finished = loop {
        let result = match game.to_move() {
            Player::Computer => game.play_computer()?,
            Player::Human => {
                let best = best_move(game.board(), Player::Human)?;
                game.play_human(best.position)?
            }
        };

        let action = *result
            .history()
            .last()
            .ok_or_else(|| anyhow!("move missing from history"))?;
        debug!(%action, "Self-play move");
        plies.push(Ply {
            action,
            board: result.board().clone(),
        });

        match result {
            GameResult::InProgress(next) => game = next,
            GameResult::Finished(done) => break done,
        }
    };

    info!(outcome = %finished.outcome(), plies = plies.len(), "Self-play finished");
    Ok(SelfPlayReport {
        first,
        plies,
        outcome: *finished.outcome(),
    })
}

impl fmt::Display for SelfPlayReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (index, ply) in self.plies.iter().enumerate() {
            writeln!(f, "{}. {}", index + 1, ply.action)?;
            writeln!(f, "{}", ply.board)?;
            writeln!(f)?;
        }
        write!(f, "{}", self.outcome)
    }
}

/// State reached by replaying a move list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReplayReport {
    /// Moves applied.
    pub moves: Vec<Move>,
    /// Final board.
    pub board: Board,
    /// Final status.
    pub status: GameStatus,
    /// End-of-game announcement or turn prompt.
    pub message: String,
}

/// Replays `moves`, alternating sides starting with `first`.
#[instrument(skip(moves), fields(moves = moves.len()))]
pub fn replay<S: AsRef<str>>(first: Player, moves: &[S]) -> Result<ReplayReport> {
    let mut player = first;
    let mut actions = Vec::with_capacity(moves.len());
    for raw in moves {
        let raw = raw.as_ref();
        let position =
            Position::parse(raw).ok_or_else(|| anyhow!("Unrecognised square {:?}", raw))?;
        actions.push(Move::new(player, position));
        player = player.opponent();
    }

    let result = GameInProgress::replay(first, &actions).context("Replay rejected")?;
    if result.history().len() < actions.len() {
        bail!(
            "Game finished after {} of {} moves",
            result.history().len(),
            actions.len()
        );
    }

    let message = match &result {
        GameResult::InProgress(game) => game.turn_message(),
        GameResult::Finished(game) => game.outcome().message().to_string(),
    };

    Ok(ReplayReport {
        moves: result.history().to_vec(),
        board: result.board().clone(),
        status: evaluate(result.board()),
        message,
    })
}

impl fmt::Display for ReplayReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.board)?;
        write!(f, "{}", self.message)
    }
}
