//! First-class action types for tic-tac-toe.
//!
//! Moves are domain events, not side effects. They record the player's
//! intent and can be validated independently of execution.

use super::{Player, Position};
use serde::{Deserialize, Serialize};
use std::fmt;

/// A move in tic-tac-toe: a player placing their mark at a position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move {
    /// The player making the move.
    pub player: Player,
    /// The position where the player places their mark.
    pub position: Position,
}

impl Move {
    /// Creates a new move.
    pub fn new(player: Player, position: Position) -> Self {
        Self { player, position }
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} -> {}", self.player, self.position.label())
    }
}

/// Why a move was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_more::Display)]
pub enum InvalidMoveReason {
    /// The index is outside 0-8.
    #[display("index is outside 0-8")]
    OutOfRange,

    /// The square at the index is already occupied.
    #[display("square is already occupied")]
    Occupied,
}

/// A move targeting an occupied square or an index outside the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
#[display("Invalid move at {}: {}", index, reason)]
pub struct InvalidMove {
    /// The rejected index.
    pub index: usize,
    /// Why it was rejected.
    pub reason: InvalidMoveReason,
}

impl InvalidMove {
    /// Creates a new invalid-move error.
    pub fn new(index: usize, reason: InvalidMoveReason) -> Self {
        Self { index, reason }
    }
}
