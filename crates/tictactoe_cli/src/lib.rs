//! Terminal front end for playing tic-tac-toe against the alpha-beta engine.
//!
//! # Architecture
//!
//! - **Config**: TOML game settings with defaults
//! - **Players**: line-based human input and the search-backed computer
//! - **Session**: the board and turn owned by one game
//! - **Orchestrator**: the render / ask / apply loop
//! - **Analysis**: one-shot evaluation of a given position

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod analysis;
mod config;
mod orchestrator;
mod players;
mod session;

// Crate-level exports - Configuration
pub use config::{ConfigError, FirstPlayer, GameConfig};

// Crate-level exports - Players
pub use players::{ComputerPlayer, HumanPlayer, InputError, Player, parse_move};

// Crate-level exports - Game flow
pub use orchestrator::Orchestrator;
pub use session::{GameSession, MoveError};

// Crate-level exports - Analysis
pub use analysis::{AnalysisReport, analyze};
