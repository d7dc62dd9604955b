//! A single game between the human (X) and the computer (O).

use derive_getters::Getters;
use derive_more::{Display, Error};
use tictactoe_core::{
    Board, GameStatus, InvalidMove, Move, Player as Mark, Position, apply_human_move, status,
};
use tracing::{info, instrument};

/// Error that can occur when applying a move to a session.
#[derive(Debug, Clone, PartialEq, Eq, Display, Error)]
pub enum MoveError {
    /// The board rejected the move.
    #[display("Rejected move")]
    Invalid(InvalidMove),

    /// The game is already over.
    #[display("Game is already over")]
    GameOver,
}

impl From<InvalidMove> for MoveError {
    fn from(err: InvalidMove) -> Self {
        Self::Invalid(err)
    }
}

/// Game state owned by the interactive loop.
#[derive(Debug, Clone, Getters)]
pub struct GameSession {
    /// The board.
    board: Board,
    /// Side to move next.
    to_move: Mark,
    /// Game status after the last move.
    status: GameStatus,
    /// Moves played so far, oldest first.
    history: Vec<Move>,
}

impl GameSession {
    /// Starts an empty game with `first` to move.
    #[instrument]
    pub fn new(first: Mark) -> Self {
        Self {
            board: Board::new(),
            to_move: first,
            status: GameStatus::InProgress,
            history: Vec::new(),
        }
    }

    /// Plays `index` for the side to move and returns the new status.
    ///
    /// Human moves go through [`apply_human_move`]. Computer moves are
    /// validated the same way even though the search only proposes empty
    /// squares.
    ///
    /// # Errors
    ///
    /// Returns [`MoveError::Invalid`] for an occupied or out-of-range square
    /// and [`MoveError::GameOver`] once the game has ended. The session is
    /// unchanged on error.
    #[instrument(skip(self), fields(player = %self.to_move))]
    pub fn play(&mut self, index: usize) -> Result<GameStatus, MoveError> {
        if self.status.is_over() {
            return Err(MoveError::GameOver);
        }

        match self.to_move {
            Mark::X => apply_human_move(&mut self.board, index)?,
            Mark::O => self.board.place(index, Mark::O)?,
        }

        // place() has already rejected anything outside 0-8
        if let Some(position) = Position::from_index(index) {
            self.history.push(Move::new(self.to_move, position));
        }

        self.status = status(&self.board);
        self.to_move = self.to_move.opponent();
        info!(index, status = ?self.status, "Move applied");
        Ok(self.status)
    }
}
