//! Noughts - command-line entry point.

#![warn(missing_docs)]

use anyhow::Result;
use clap::Parser;
use noughts::Player;
use noughts_cli::{
    Cli, CliConfig, Command, best_move_report, evaluation_report, replay, self_play,
};
use serde::Serialize;
use std::fmt::Display;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let config = CliConfig::load(cli.config.as_deref())?;

    let filter = cli.log_filter.as_deref().unwrap_or(config.log_filter());
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter)),
        )
        .with_writer(std::io::stderr)
        .init();

    debug!(?config, "Configuration resolved");

    match cli.command {
        Command::BestMove { board, human, json } => {
            let mover = if human { Player::Human } else { Player::Computer };
            let report = best_move_report(&board, mover)?;
            emit(&report, json)
        }
        Command::Evaluate { board, json } => emit(&evaluation_report(&board), json),
        Command::SelfPlay { first } => {
            let first = first.unwrap_or(*config.first_player());
            info!(%first, "Starting self-play");
            emit(&self_play(first)?, false)
        }
        Command::Replay { first, moves } => {
            let first = first.unwrap_or(*config.first_player());
            emit(&replay(first, &moves)?, false)
        }
    }
}

/// Prints a report as text or pretty JSON.
fn emit<T: Serialize + Display>(report: &T, json: bool) -> Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(report)?);
    } else {
        println!("{}", report);
    }
    Ok(())
}
