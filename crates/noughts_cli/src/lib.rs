//! Noughts CLI - analysis and self-play front end for the minimax engine.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod cli;
mod commands;
mod config;

pub use cli::{Cli, Command};
pub use commands::{
    BestMoveReport, EvaluationReport, Ply, ReplayReport, SelfPlayReport, best_move_report,
    evaluation_report, replay, self_play,
};
pub use config::{CliConfig, ConfigError};
