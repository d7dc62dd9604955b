//! Entry points for the interactive loop.
//!
//! The loop owns the board and performs exactly one durable mutation per
//! turn through these functions.

use super::search::find_best_move;
use super::{Board, InvalidMove, Player};
use tracing::{debug, info, instrument, warn};

/// Places the human's mark (X) at `index`.
///
/// # Errors
///
/// Returns [`InvalidMove`] for an occupied square or an index outside 0-8.
/// The board is unchanged on error.
#[instrument(skip(board), fields(board = %board.notation()))]
pub fn apply_human_move(board: &mut Board, index: usize) -> Result<(), InvalidMove> {
    board.place(index, Player::X).inspect_err(|e| {
        warn!(error = %e, "Rejected human move");
    })
}

/// Picks the computer's move without applying it.
///
/// Call only while the game is in progress. Returns `None` on a full board.
#[instrument(skip(board), fields(board = %board.notation()))]
pub fn compute_ai_move(board: &mut Board) -> Option<usize> {
    let choice = find_best_move(board);
    debug!(choice = ?choice, "Computer move chosen");
    choice
}

/// Picks the computer's move and places O there.
///
/// Returns the index played, or `None` if the board was already full.
#[instrument(skip(board), fields(board = %board.notation()))]
pub fn apply_computer_move(board: &mut Board) -> Option<usize> {
    let index = compute_ai_move(board)?;
    board.mark(index, Player::O);
    info!(index, "Computer played");
    Some(index)
}
