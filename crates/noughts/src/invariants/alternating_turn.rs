//! Alternating turn invariant: the sides take turns, starting with the opener.

use super::Invariant;
use crate::GameInProgress;

/// Invariant: Players alternate turns.
///
/// The first recorded move belongs to the opening player, no player
/// moves twice in a row, and the side to move follows from the history
/// length.
pub struct AlternatingTurnInvariant;

impl Invariant<GameInProgress> for AlternatingTurnInvariant {
    fn holds(game: &GameInProgress) -> bool {
        let history = game.history();
        let first = game.first_player();

        if let Some(opening) = history.first()
            && opening.player != first
        {
            return false;
        }

        if history.windows(2).any(|w| w[0].player == w[1].player) {
            return false;
        }

        let expected_next = if history.len() % 2 == 0 {
            first
        } else {
            first.opponent()
        };

        game.to_move() == expected_next
    }

    fn description() -> &'static str {
        "Players alternate turns starting with the opener"
    }
}
