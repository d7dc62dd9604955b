//! Game orchestration between the human and the computer.

use crate::players::Player;
use crate::session::{GameSession, MoveError};
use anyhow::Result;
use std::io::Write;
use tictactoe_core::{GameStatus, Player as Mark};
use tracing::{debug, info, warn};

/// Runs one game: renders the board, asks the side to move, applies the
/// move and stops at a win or a full board.
pub struct Orchestrator<W> {
    session: GameSession,
    player_x: Box<dyn Player>,
    player_o: Box<dyn Player>,
    output: W,
}

impl<W: Write> Orchestrator<W> {
    /// Creates a new orchestrator. `player_x` is the human, `player_o` the
    /// computer.
    pub fn new(
        session: GameSession,
        player_x: Box<dyn Player>,
        player_o: Box<dyn Player>,
        output: W,
    ) -> Self {
        Self {
            session,
            player_x,
            player_o,
            output,
        }
    }

    /// The session being played.
    pub fn session(&self) -> &GameSession {
        &self.session
    }

    /// Consumes the orchestrator, returning the output sink.
    pub fn into_output(self) -> W {
        self.output
    }

    /// Runs the game loop until the game is over.
    ///
    /// Rejected moves are reported and asked for again.
    ///
    /// # Errors
    ///
    /// Fails if a player cannot produce a move (closed input, no moves left)
    /// or the output cannot be written.
    pub fn run(&mut self) -> Result<GameStatus> {
        info!(first = %self.session.to_move(), "Starting game orchestration");
        writeln!(self.output, "Welcome to Tic-Tac-Toe!")?;
        writeln!(
            self.output,
            "Playing 'X': {}. Playing 'O': {}.",
            self.player_x.name(),
            self.player_o.name()
        )?;
        self.render()?;

        loop {
            let status = *self.session.status();
            if status.is_over() {
                self.announce(status)?;
                return Ok(status);
            }

            let mark = *self.session.to_move();
            let player = match mark {
                Mark::X => &mut self.player_x,
                Mark::O => &mut self.player_o,
            };

            if mark == Mark::O {
                writeln!(self.output, "{} is making a move...", player.name())?;
            }

            debug!(player = %player.name(), "Waiting for move");
            let index = player.choose_move(self.session.board())?;

            match self.session.play(index) {
                Ok(_) => self.render()?,
                Err(MoveError::Invalid(e)) => {
                    warn!(error = %e, "Move rejected");
                    writeln!(self.output, "Invalid move! Try again. ({e})")?;
                }
                Err(e @ MoveError::GameOver) => return Err(e.into()),
            }
        }
    }

    fn render(&mut self) -> Result<()> {
        writeln!(self.output)?;
        write!(self.output, "{}", self.session.board())?;
        writeln!(self.output)?;
        Ok(())
    }

    fn announce(&mut self, status: GameStatus) -> Result<()> {
        let message = match status {
            GameStatus::Won(Mark::X) => "Congratulations! You win!",
            GameStatus::Won(Mark::O) => "AI wins! Better luck next time.",
            GameStatus::Draw => "It's a tie!",
            GameStatus::InProgress => return Ok(()),
        };
        info!(status = ?status, "Game over");
        writeln!(self.output, "{message}")?;
        Ok(())
    }
}
