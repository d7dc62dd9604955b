//! Tic-tac-toe board model and alpha-beta search.
//!
//! The human plays [`Player::X`] and the computer plays [`Player::O`].
//! The computer picks its moves by exhaustive minimax search with
//! alpha-beta pruning, scoring positions from its own perspective:
//! `+1` for a win, `0` for a draw and `-1` for a loss.
//!
//! # Architecture
//!
//! - **Types**: squares, players and the 3x3 [`Board`]
//! - **Rules**: pure win and draw detection
//! - **Search**: minimax with alpha-beta pruning ([`Searcher`])
//! - **Engine**: the two entry points an interactive loop calls
//!
//! # Example
//!
//! ```
//! use tictactoe_core::{Board, apply_human_move, compute_ai_move};
//!
//! let mut board = Board::new();
//! apply_human_move(&mut board, 4).unwrap();
//! let reply = compute_ai_move(&mut board);
//! assert_eq!(reply, Some(0));
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod action;
mod engine;
mod position;
mod rules;
mod search;
mod types;

// Crate-level exports - Domain types
pub use types::{Board, GameStatus, LegalMoves, ParseBoardError, Player, Square};

// Crate-level exports - Moves and errors
pub use action::{InvalidMove, InvalidMoveReason, Move};
pub use position::Position;

// Crate-level exports - Rules
pub use rules::{WINNING_LINES, is_draw, is_full, status, winner};

// Crate-level exports - Search
pub use search::{
    DRAW, INFINITY, LOSS, Score, SearchResult, SearchStats, Searcher, WIN, evaluate_position,
    find_best_move, full_width_value,
};

// Crate-level exports - Entry points
pub use engine::{apply_computer_move, apply_human_move, compute_ai_move};
