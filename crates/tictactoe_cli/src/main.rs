//! Tic-tac-toe - terminal game against an alpha-beta search engine.

#![warn(missing_docs)]

mod cli;

use anyhow::{Context, Result};
use clap::Parser;
use cli::{Cli, Command};
use std::io;
use std::path::Path;
use tictactoe_cli::{
    ComputerPlayer, FirstPlayer, GameConfig, GameSession, HumanPlayer, Orchestrator, analyze,
};
use tictactoe_core::Board;
use tracing::info;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    match cli.command {
        Command::Play {
            config,
            computer_first,
        } => run_game(&config, computer_first),
        Command::Analyze { board, json } => run_analyze(&board, json),
    }
}

/// Logs go to stderr so they never interleave with the board on stdout.
fn initialize_tracing(default_filter: &str) {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter)),
        )
        .with_writer(io::stderr)
        .init();
}

/// Play one interactive game on stdin/stdout
fn run_game(config_path: &Path, computer_first: bool) -> Result<()> {
    let mut config = GameConfig::load_or_default(config_path)?;
    if computer_first {
        config = config.with_first_player(FirstPlayer::Computer);
    }

    initialize_tracing(config.log_filter());
    info!(config = ?config, "Starting game");

    let human = HumanPlayer::new("You", io::stdin().lock(), io::stdout());
    let computer = ComputerPlayer::default();
    let session = GameSession::new(config.first_player().mark());

    let mut orchestrator =
        Orchestrator::new(session, Box::new(human), Box::new(computer), io::stdout());
    let status = orchestrator.run()?;

    info!(status = ?status, "Game finished");
    Ok(())
}

/// Analyze a single position
fn run_analyze(notation: &str, json: bool) -> Result<()> {
    initialize_tracing("warn");

    let board: Board = notation
        .parse()
        .with_context(|| format!("Invalid board {notation:?}"))?;
    let report = analyze(&board);

    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        print!("{report}");
    }
    Ok(())
}
