//! Game rules for tic-tac-toe.
//!
//! This module contains pure functions for evaluating game state
//! according to tic-tac-toe rules. Rules are separated from board
//! storage to enable composition into contract systems and the search.

pub mod draw;
pub mod moves;
pub mod status;
pub mod win;

pub use draw::is_draw;
pub use moves::{apply_move, legal_moves, new_game};
pub use status::evaluate;
pub use win::{is_win, winning_line};
