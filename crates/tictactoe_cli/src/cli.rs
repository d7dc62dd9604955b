//! Command-line interface for tictactoe.

use clap::{Parser, Subcommand};

/// Tic-tac-toe against a perfect alpha-beta opponent
#[derive(Parser, Debug)]
#[command(name = "tictactoe")]
#[command(about = "Play tic-tac-toe against a minimax engine", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Play an interactive game in the terminal
    Play {
        /// Path to game configuration file
        #[arg(short, long, default_value = "tictactoe.toml")]
        config: std::path::PathBuf,

        /// Let the computer make the opening move
        #[arg(long)]
        computer_first: bool,
    },

    /// Print the computer's best move for a position
    Analyze {
        /// Board in compact notation, e.g. "XX.OO...." (row-major, '.' for empty)
        #[arg(short, long)]
        board: String,

        /// Emit the report as JSON
        #[arg(long)]
        json: bool,
    },
}
