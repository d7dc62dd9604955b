//! Player trait and implementations.

mod computer;
mod human;

pub use computer::ComputerPlayer;
pub use human::{HumanPlayer, InputError, parse_move};

use anyhow::Result;
use tictactoe_core::Board;

/// Trait for players that can make moves.
pub trait Player {
    /// Gets a move from this player.
    ///
    /// Returns the board index (0-8) for the next move. The caller validates
    /// it; a rejected move is asked for again.
    fn choose_move(&mut self, board: &Board) -> Result<usize>;

    /// Returns the player's display name.
    fn name(&self) -> &str;
}
