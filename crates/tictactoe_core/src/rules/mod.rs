//! Game rules for tic-tac-toe.
//!
//! Pure functions for evaluating board state. Rules are kept apart from
//! board storage so the search engine and the session share one definition
//! of "game over".

mod draw;
mod win;

pub use draw::{is_draw, is_full};
pub use win::{WINNING_LINES, winner};

use super::{Board, GameStatus};
use tracing::instrument;

/// Classifies the board as won, drawn or still in progress.
///
/// A completed line takes precedence over a full board.
#[instrument(skip(board), fields(board = %board.notation()))]
pub fn status(board: &Board) -> GameStatus {
    match winner(board) {
        Some(player) => GameStatus::Won(player),
        None if is_full(board) => GameStatus::Draw,
        None => GameStatus::InProgress,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Player;

    #[test]
    fn test_status_in_progress() {
        assert_eq!(status(&Board::new()), GameStatus::InProgress);
    }

    #[test]
    fn test_status_win_on_full_board() {
        // X completes the diagonal on the final square
        let board: Board = "XOXOXOOXX".parse().unwrap();
        assert_eq!(status(&board), GameStatus::Won(Player::X));
    }

    #[test]
    fn test_status_draw() {
        let board: Board = "XOXXOOOXX".parse().unwrap();
        assert_eq!(status(&board), GameStatus::Draw);
    }
}
