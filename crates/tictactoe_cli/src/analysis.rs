//! One-shot analysis of a board position.

use serde::Serialize;
use std::fmt;
use tictactoe_core::{Board, GameStatus, Player as Mark, Score, SearchStats, Searcher, status};
use tracing::instrument;

/// What the engine thinks of a position, computer to move.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AnalysisReport {
    /// Compact board notation.
    pub board: String,
    /// Status of the position as given.
    pub status: GameStatus,
    /// Index the computer would play, if the game is still on.
    pub best_move: Option<usize>,
    /// Value of the position after the best move.
    pub score: Option<Score>,
    /// Work done by the search.
    pub stats: SearchStats,
}

/// Analyzes `board` with the computer (O) to move.
///
/// Finished positions are reported without searching.
#[instrument(skip(board), fields(board = %board.notation()))]
pub fn analyze(board: &Board) -> AnalysisReport {
    let current = status(board);
    let mut searcher = Searcher::new();
    let result = if current.is_over() {
        None
    } else {
        let mut scratch = *board;
        searcher.best_move(&mut scratch)
    };

    AnalysisReport {
        board: board.notation(),
        status: current,
        best_move: result.map(|r| r.index),
        score: result.map(|r| r.score),
        stats: searcher.stats(),
    }
}

impl fmt::Display for AnalysisReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Board: {}", self.board)?;
        match self.status {
            GameStatus::InProgress => writeln!(f, "Status: in progress")?,
            GameStatus::Won(Mark::X) => writeln!(f, "Status: X has won")?,
            GameStatus::Won(Mark::O) => writeln!(f, "Status: O has won")?,
            GameStatus::Draw => writeln!(f, "Status: draw")?,
        }
        if let (Some(index), Some(score)) = (self.best_move, self.score) {
            let outlook = match score.signum() {
                1 => "computer wins",
                -1 => "computer loses",
                _ => "draw",
            };
            writeln!(f, "Best move for O: {index} (score {score:+}, {outlook})")?;
            writeln!(
                f,
                "Searched {} positions, {} cutoffs",
                self.stats.nodes, self.stats.cutoffs
            )?;
        }
        Ok(())
    }
}
