//! Minimax search with alpha-beta pruning.
//!
//! Scores are from the computer's point of view: [`WIN`] when O has a line,
//! [`LOSS`] when X has one, [`DRAW`] on a full board. Tic-tac-toe has no
//! intermediate scoring, so every finished search lands on one of those
//! three values.
//!
//! The search borrows the board mutably, places marks speculatively and
//! clears each one before trying the next sibling. No mutation survives a
//! call.

use super::rules::{is_full, winner};
use super::{Board, Player};
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// Position value from the computer's perspective.
pub type Score = i32;

/// Computer (O) has a completed line.
pub const WIN: Score = 1;

/// Board is full with no line.
pub const DRAW: Score = 0;

/// Human (X) has a completed line.
pub const LOSS: Score = -1;

/// Unbounded alpha-beta window edge. Larger than any reachable score.
pub const INFINITY: Score = i32::MAX / 2;

/// Best move at the root together with its value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchResult {
    /// Board index of the move (0-8).
    pub index: usize,
    /// Value of the position after the move.
    pub score: Score,
}

/// Counters collected while searching.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchStats {
    /// Positions visited, terminal ones included.
    pub nodes: u64,
    /// Times the remaining siblings were skipped because `beta <= alpha`.
    pub cutoffs: u64,
}

/// Alpha-beta searcher.
///
/// Holds no game state, only statistics for the searches it has run.
#[derive(Debug, Default)]
pub struct Searcher {
    stats: SearchStats,
}

impl Searcher {
    /// Creates a searcher with zeroed statistics.
    pub fn new() -> Self {
        Self::default()
    }

    /// Statistics accumulated so far.
    pub fn stats(&self) -> SearchStats {
        self.stats
    }

    /// Computes the value of `board` with `maximizing` to move, searching
    /// inside the `(alpha, beta)` window.
    ///
    /// The maximizing side places O and the minimizing side places X.
    /// Moves are tried in ascending index order.
    pub fn evaluate(
        &mut self,
        board: &mut Board,
        maximizing: bool,
        mut alpha: Score,
        mut beta: Score,
    ) -> Score {
        self.stats.nodes += 1;

        if let Some(score) = terminal_score(board) {
            return score;
        }

        if maximizing {
            let mut best = -INFINITY;
            for index in board.legal_moves() {
                board.mark(index, Player::O);
                let value = self.evaluate(board, false, alpha, beta);
                board.clear(index);

                best = best.max(value);
                alpha = alpha.max(best);
                if beta <= alpha {
                    self.stats.cutoffs += 1;
                    break;
                }
            }
            best
        } else {
            let mut best = INFINITY;
            for index in board.legal_moves() {
                board.mark(index, Player::X);
                let value = self.evaluate(board, true, alpha, beta);
                board.clear(index);

                best = best.min(value);
                beta = beta.min(best);
                if beta <= alpha {
                    self.stats.cutoffs += 1;
                    break;
                }
            }
            best
        }
    }

    /// Plain minimax over the whole tree, no pruning.
    ///
    /// Reference for [`Searcher::evaluate`]; both must agree on every board.
    pub fn evaluate_full_width(&mut self, board: &mut Board, maximizing: bool) -> Score {
        self.stats.nodes += 1;

        if let Some(score) = terminal_score(board) {
            return score;
        }

        let (mark, mut best) = if maximizing {
            (Player::O, -INFINITY)
        } else {
            (Player::X, INFINITY)
        };

        for index in board.legal_moves() {
            board.mark(index, mark);
            let value = self.evaluate_full_width(board, !maximizing);
            board.clear(index);

            best = if maximizing {
                best.max(value)
            } else {
                best.min(value)
            };
        }
        best
    }

    /// Finds the computer's best move on `board`.
    ///
    /// Each root move is scored with a fresh full window, the human replying
    /// next. Only a strictly greater score replaces the current pick, so ties
    /// go to the lowest index. Returns `None` when the board has no empty
    /// square.
    #[instrument(skip(self, board), fields(board = %board.notation()))]
    pub fn best_move(&mut self, board: &mut Board) -> Option<SearchResult> {
        let mut best: Option<SearchResult> = None;

        for index in board.legal_moves() {
            board.mark(index, Player::O);
            let score = self.evaluate(board, false, -INFINITY, INFINITY);
            board.clear(index);

            debug!(index, score, "Root move evaluated");
            if best.is_none_or(|b| score > b.score) {
                best = Some(SearchResult { index, score });
            }
        }

        debug!(
            best = ?best,
            nodes = self.stats.nodes,
            cutoffs = self.stats.cutoffs,
            "Search complete"
        );
        best
    }
}

/// Score for a finished game, `None` while moves remain.
fn terminal_score(board: &Board) -> Option<Score> {
    match winner(board) {
        Some(Player::O) => Some(WIN),
        Some(Player::X) => Some(LOSS),
        None if is_full(board) => Some(DRAW),
        None => None,
    }
}

/// Value of `board` with `maximizing` (the computer) or the human to move.
///
/// See [`Searcher::evaluate`].
pub fn evaluate_position(board: &mut Board, maximizing: bool, alpha: Score, beta: Score) -> Score {
    Searcher::new().evaluate(board, maximizing, alpha, beta)
}

/// Unpruned minimax value of `board`. See [`Searcher::evaluate_full_width`].
pub fn full_width_value(board: &mut Board, maximizing: bool) -> Score {
    Searcher::new().evaluate_full_width(board, maximizing)
}

/// Index of the computer's best move, lowest index on ties.
///
/// Returns `None` if the board is full.
pub fn find_best_move(board: &mut Board) -> Option<usize> {
    Searcher::new().best_move(board).map(|result| result.index)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn board(notation: &str) -> Board {
        notation.parse().unwrap()
    }

    #[test]
    fn test_terminal_scores() {
        assert_eq!(evaluate_position(&mut board("OOOXX.X.."), false, -INFINITY, INFINITY), WIN);
        assert_eq!(evaluate_position(&mut board("XXXOO.O.."), true, -INFINITY, INFINITY), LOSS);
        assert_eq!(evaluate_position(&mut board("XOXXOOOXX"), true, -INFINITY, INFINITY), DRAW);
    }

    #[test]
    fn test_empty_board_is_a_draw() {
        let mut b = Board::new();
        assert_eq!(evaluate_position(&mut b, false, -INFINITY, INFINITY), DRAW);
        assert_eq!(evaluate_position(&mut b, true, -INFINITY, INFINITY), DRAW);
    }

    #[test]
    fn test_takes_immediate_win() {
        // O to move with 3 and 4 taken: 5 completes the middle row
        let mut b = board("XX.OO.X..");
        assert_eq!(find_best_move(&mut b), Some(5));
    }

    #[test]
    fn test_blocks_when_index_two_also_forks() {
        // 2 blocks the top row and leaves O threatening 5 and 6
        let mut b = board("XX.OO....");
        let result = Searcher::new().best_move(&mut b).unwrap();
        assert_eq!(result, SearchResult { index: 2, score: WIN });
    }

    #[test]
    fn test_blocks_open_row() {
        let mut b = board("XX.O.....");
        assert_eq!(find_best_move(&mut b), Some(2));
    }

    #[test]
    fn test_ties_go_to_lowest_index() {
        // Every opening move draws under perfect play
        let mut b = Board::new();
        assert_eq!(find_best_move(&mut b), Some(0));
    }

    #[test]
    fn test_full_board_has_no_move() {
        let mut b = board("XOXXOOOXX");
        assert_eq!(find_best_move(&mut b), None);
    }

    #[test]
    fn test_board_restored_after_search() {
        for notation in [".........", "X........", "XX.OO....", "X.O.X...."] {
            let mut b = board(notation);
            let before = b;
            find_best_move(&mut b);
            assert_eq!(b, before);
            evaluate_position(&mut b, true, -INFINITY, INFINITY);
            evaluate_position(&mut b, false, -INFINITY, INFINITY);
            assert_eq!(b, before);
        }
    }

    #[test]
    fn test_pruning_visits_fewer_nodes() {
        let mut pruned = Searcher::new();
        let mut full = Searcher::new();
        let mut b = Board::new();

        let a = pruned.evaluate(&mut b, false, -INFINITY, INFINITY);
        let f = full.evaluate_full_width(&mut b, false);

        assert_eq!(a, f);
        assert!(pruned.stats().cutoffs > 0);
        assert_eq!(full.stats().cutoffs, 0);
        assert!(pruned.stats().nodes < full.stats().nodes);
        // 549,946 positions in the full tic-tac-toe game tree
        assert_eq!(full.stats().nodes, 549_946);
    }
}
