//! Win detection logic for tic-tac-toe.

use super::super::{Board, Player, Square};

/// The eight lines that win the game: rows top to bottom, columns left to
/// right, then the two diagonals. [`winner`] scans them in this order.
pub const WINNING_LINES: [[usize; 3]; 8] = [
    [0, 1, 2],
    [3, 4, 5],
    [6, 7, 8], // rows
    [0, 3, 6],
    [1, 4, 7],
    [2, 5, 8], // columns
    [0, 4, 8],
    [2, 4, 6], // diagonals
];

/// Checks if there is a winner on the board.
///
/// Returns `Some(player)` for the first line in [`WINNING_LINES`] whose three
/// squares hold the same mark, `None` otherwise.
pub fn winner(board: &Board) -> Option<Player> {
    let squares = board.squares();
    WINNING_LINES.iter().find_map(|&[a, b, c]| match squares[a] {
        Square::Occupied(player) if squares[b] == squares[a] && squares[c] == squares[a] => {
            Some(player)
        }
        _ => None,
    })
}
