//! Human player reading moves from a text stream.

use super::Player;
use anyhow::{Context, Result};
use derive_more::{Display, Error};
use std::io::{BufRead, Write};
use tictactoe_core::{Board, Position};
use tracing::{debug, instrument, warn};

/// Input that is neither a number nor a position label.
#[derive(Debug, Clone, PartialEq, Eq, Display, Error)]
#[display("Could not read a move from {:?}", input)]
pub struct InputError {
    /// The offending input, trimmed.
    pub input: String,
}

/// Parses a move as typed by a human.
///
/// Any unsigned number is returned as-is, even outside 0-8, so that range
/// checking stays with the board. Otherwise the text is matched against
/// position labels such as `center` or `top-left`.
#[instrument]
pub fn parse_move(input: &str) -> Result<usize, InputError> {
    let trimmed = input.trim();
    if let Ok(index) = trimmed.parse::<usize>() {
        return Ok(index);
    }
    Position::from_label(trimmed)
        .map(Position::to_index)
        .ok_or_else(|| InputError {
            input: trimmed.to_string(),
        })
}

/// Human player using line-based input.
pub struct HumanPlayer<R, W> {
    name: String,
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> HumanPlayer<R, W> {
    /// Creates a new human player reading from `input` and prompting on
    /// `output`.
    pub fn new(name: impl Into<String>, input: R, output: W) -> Self {
        Self {
            name: name.into(),
            input,
            output,
        }
    }

    /// Consumes the player, returning the prompt sink.
    pub fn into_output(self) -> W {
        self.output
    }
}

impl<R: BufRead, W: Write> Player for HumanPlayer<R, W> {
    #[instrument(skip(self, _board), fields(player = %self.name))]
    fn choose_move(&mut self, _board: &Board) -> Result<usize> {
        loop {
            write!(self.output, "Enter your move (0-8): ")?;
            self.output.flush()?;

            let mut line = String::new();
            let read = self
                .input
                .read_line(&mut line)
                .context("Failed to read move")?;
            if read == 0 {
                anyhow::bail!("Input closed before a move was entered");
            }

            match parse_move(&line) {
                Ok(index) => {
                    debug!(index, "Human entered move");
                    return Ok(index);
                }
                Err(e) => {
                    warn!(error = %e, "Unreadable move");
                    writeln!(self.output, "{e}. Enter a number 0-8 or a name like \"center\".")?;
                }
            }
        }
    }

    fn name(&self) -> &str {
        &self.name
    }
}
