//! Computer player backed by the alpha-beta search.

use super::Player;
use anyhow::Result;
use tictactoe_core::{Board, compute_ai_move};
use tracing::{debug, instrument};

/// Computer player that plays O with perfect play.
pub struct ComputerPlayer {
    name: String,
}

impl ComputerPlayer {
    /// Creates a new computer player.
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

impl Default for ComputerPlayer {
    fn default() -> Self {
        Self::new("AI")
    }
}

impl Player for ComputerPlayer {
    #[instrument(skip(self, board), fields(ai = %self.name))]
    fn choose_move(&mut self, board: &Board) -> Result<usize> {
        // The search needs exclusive access; it works on its own copy so the
        // session's board is only changed through the session.
        let mut scratch = *board;
        let index =
            compute_ai_move(&mut scratch).ok_or_else(|| anyhow::anyhow!("No valid moves available"))?;
        debug!(position = index, "AI chose position");
        Ok(index)
    }

    fn name(&self) -> &str {
        &self.name
    }
}
