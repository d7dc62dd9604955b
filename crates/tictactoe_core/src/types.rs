//! Core domain types for tic-tac-toe.

use super::action::{InvalidMove, InvalidMoveReason};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use tracing::instrument;

/// Player in the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Player {
    /// Player X, the human side (minimizing).
    X,
    /// Player O, the computer side (maximizing).
    O,
}

impl Player {
    /// Returns the opponent player.
    pub fn opponent(self) -> Self {
        match self {
            Player::X => Player::O,
            Player::O => Player::X,
        }
    }

    /// Returns the single-character symbol for this player.
    pub fn symbol(self) -> char {
        match self {
            Player::X => 'X',
            Player::O => 'O',
        }
    }
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// A square on the tic-tac-toe board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Square {
    /// Empty square.
    #[default]
    Empty,
    /// Square occupied by a player.
    Occupied(Player),
}

/// 3x3 tic-tac-toe board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Board {
    /// Squares in row-major order (0-8).
    squares: [Square; 9],
}

impl Board {
    /// Number of squares on the board.
    pub const SIZE: usize = 9;

    /// Creates a new empty board.
    pub fn new() -> Self {
        Self {
            squares: [Square::Empty; Self::SIZE],
        }
    }

    /// Gets the square at the given index (0-8).
    pub fn get(&self, index: usize) -> Option<Square> {
        self.squares.get(index).copied()
    }

    /// Checks if a square is empty. Out-of-range indices are never empty.
    pub fn is_empty(&self, index: usize) -> bool {
        matches!(self.get(index), Some(Square::Empty))
    }

    /// Returns all squares as a slice.
    pub fn squares(&self) -> &[Square; 9] {
        &self.squares
    }

    /// Number of occupied squares.
    pub fn occupied_count(&self) -> usize {
        self.squares.iter().filter(|s| **s != Square::Empty).count()
    }

    /// Places a mark for `player` at `index`.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidMove`] if the index is outside 0-8 or the square is
    /// already occupied. The board is left untouched in both cases.
    #[instrument(skip(self))]
    pub fn place(&mut self, index: usize, player: Player) -> Result<(), InvalidMove> {
        match self.get(index) {
            None => Err(InvalidMove::new(index, InvalidMoveReason::OutOfRange)),
            Some(Square::Occupied(_)) => Err(InvalidMove::new(index, InvalidMoveReason::Occupied)),
            Some(Square::Empty) => {
                self.squares[index] = Square::Occupied(player);
                Ok(())
            }
        }
    }

    /// Resets the square at `index` to empty.
    ///
    /// Undo step for a speculative move; the caller must have just set this
    /// square itself.
    pub fn clear(&mut self, index: usize) {
        self.squares[index] = Square::Empty;
    }

    /// Writes a mark without validation. Search only ever targets squares it
    /// took from [`Board::legal_moves`].
    pub(crate) fn mark(&mut self, index: usize, player: Player) {
        debug_assert!(self.is_empty(index), "speculative move onto occupied square {index}");
        self.squares[index] = Square::Occupied(player);
    }

    /// Empty squares in ascending index order.
    ///
    /// The iterator is a snapshot of the board at the time of the call, so the
    /// board may be mutated while iterating. Clone it to restart.
    pub fn legal_moves(&self) -> LegalMoves {
        let empty = self
            .squares
            .iter()
            .enumerate()
            .filter(|(_, s)| **s == Square::Empty)
            .fold(0u16, |mask, (i, _)| mask | (1 << i));
        LegalMoves { empty }
    }

    /// Compact one-line notation, e.g. `XX.OO....`.
    pub fn notation(&self) -> String {
        self.squares
            .iter()
            .map(|s| match s {
                Square::Empty => '.',
                Square::Occupied(p) => p.symbol(),
            })
            .collect()
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

/// Renders the board as a grid with empty squares showing their index.
impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..3 {
            let cells: Vec<String> = (0..3)
                .map(|col| {
                    let index = row * 3 + col;
                    match self.squares[index] {
                        Square::Empty => index.to_string(),
                        Square::Occupied(p) => p.symbol().to_string(),
                    }
                })
                .collect();
            writeln!(f, " {} ", cells.join(" | "))?;
            if row < 2 {
                writeln!(f, "---+---+---")?;
            }
        }
        Ok(())
    }
}

/// Error returned when board notation cannot be parsed.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum ParseBoardError {
    /// A character that is neither a mark nor an empty-square marker.
    #[display("Unexpected character {:?} in board notation", _0)]
    UnexpectedChar(#[error(not(source))] char),

    /// Notation did not describe exactly nine squares.
    #[display("Board notation has {} squares, expected 9", _0)]
    WrongLength(#[error(not(source))] usize),
}

/// Parses compact notation: `X`/`O` for marks, `.`, `_`, `-` or a space for
/// empty. `|`, `/` and line breaks are ignored so rows can be separated.
impl FromStr for Board {
    type Err = ParseBoardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut squares = Vec::with_capacity(Board::SIZE);
        for c in s.chars() {
            let square = match c {
                'X' | 'x' => Square::Occupied(Player::X),
                'O' | 'o' => Square::Occupied(Player::O),
                '.' | '_' | '-' | ' ' => Square::Empty,
                '|' | '/' | '\n' | '\r' => continue,
                other => return Err(ParseBoardError::UnexpectedChar(other)),
            };
            squares.push(square);
        }

        let squares: [Square; 9] = squares
            .try_into()
            .map_err(|v: Vec<Square>| ParseBoardError::WrongLength(v.len()))?;
        Ok(Self { squares })
    }
}

/// Lazy iterator over the empty squares of a board, lowest index first.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LegalMoves {
    empty: u16,
}

impl Iterator for LegalMoves {
    type Item = usize;

    fn next(&mut self) -> Option<usize> {
        if self.empty == 0 {
            return None;
        }
        let index = self.empty.trailing_zeros() as usize;
        self.empty &= self.empty - 1;
        Some(index)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let n = self.empty.count_ones() as usize;
        (n, Some(n))
    }
}

impl ExactSizeIterator for LegalMoves {}

/// Current status of the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameStatus {
    /// Game is ongoing.
    InProgress,
    /// Game ended in a win.
    Won(Player),
    /// Game ended in a draw.
    Draw,
}

impl GameStatus {
    /// Returns true once the game has a winner or the board is full.
    pub fn is_over(&self) -> bool {
        !matches!(self, GameStatus::InProgress)
    }
}
