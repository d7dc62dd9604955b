//! End-to-end games through the orchestrator with scripted input.

use std::io::Cursor;
use tictactoe_cli::{ComputerPlayer, GameSession, HumanPlayer, Orchestrator, Player};
use tictactoe_core::{Board, GameStatus, Player as Mark};

/// Runs a game of scripted human input against the engine and returns the
/// final status, the final board and everything printed.
fn play_scripted(first: Mark, input: &str) -> (anyhow::Result<GameStatus>, Board, String) {
    let human = HumanPlayer::new("You", Cursor::new(input.to_string()), Vec::new());
    let mut orchestrator = Orchestrator::new(
        GameSession::new(first),
        Box::new(human),
        Box::new(ComputerPlayer::default()),
        Vec::new(),
    );
    let result = orchestrator.run();
    let board = *orchestrator.session().board();
    let output = String::from_utf8(orchestrator.into_output()).unwrap();
    (result, board, output)
}

#[test]
fn test_human_first_loses_after_careless_play() {
    let (result, board, output) = play_scripted(Mark::X, "4\n0\n1\n2\n3\n5\n6\n7\n8\n");

    assert_eq!(result.unwrap(), GameStatus::Won(Mark::O));
    assert_eq!(board.notation(), "OXXXX.OOO");
    assert!(output.starts_with("Welcome to Tic-Tac-Toe!"));
    assert!(output.contains("Playing 'X': You. Playing 'O': AI."));
    assert!(output.contains("AI is making a move..."));
    // 0 was taken by the computer's reply to the center opening
    assert!(output.contains("Invalid move! Try again. (Invalid move at 0: square is already occupied)"));
    assert!(output.trim_end().ends_with("AI wins! Better luck next time."));
}

#[test]
fn test_labels_are_accepted_as_moves() {
    let (result, board, _) = play_scripted(Mark::X, "center\n0\ntop-center\n2\n3\n5\n6\n7\n8\n");

    assert_eq!(result.unwrap(), GameStatus::Won(Mark::O));
    assert_eq!(board.notation(), "OXXXX.OOO");
}

#[test]
fn test_out_of_range_move_is_reported() {
    let (result, _, output) = play_scripted(Mark::X, "9\n4\n0\n1\n2\n3\n5\n6\n7\n8\n");

    assert!(result.is_ok());
    assert!(output.contains("Invalid move at 9: index is outside 0-8"));
}

#[test]
fn test_computer_first_holds_the_draw() {
    let (result, board, output) = play_scripted(Mark::O, "4\n0\n1\n2\n3\n5\n6\n7\n8\n");

    assert_eq!(result.unwrap(), GameStatus::Draw);
    assert_eq!(board.notation(), "OOXXXOOXO");
    assert!(output.trim_end().ends_with("It's a tie!"));
}

#[test]
fn test_closed_input_stops_the_game() {
    let (result, board, _) = play_scripted(Mark::X, "4\n");

    assert!(result.is_err());
    // Center from the human, corner reply from the computer
    assert_eq!(board.notation(), "O...X....");
}

/// Plays a fixed list of indices regardless of the board.
struct Scripted {
    moves: std::vec::IntoIter<usize>,
}

impl Player for Scripted {
    fn choose_move(&mut self, _board: &Board) -> anyhow::Result<usize> {
        self.moves
            .next()
            .ok_or_else(|| anyhow::anyhow!("script exhausted"))
    }

    fn name(&self) -> &str {
        "Scripted"
    }
}

#[test]
fn test_human_win_is_announced() {
    let human = HumanPlayer::new("You", Cursor::new("0\n1\n2\n"), Vec::new());
    let opponent = Scripted {
        moves: vec![3, 6].into_iter(),
    };
    let mut orchestrator = Orchestrator::new(
        GameSession::new(Mark::X),
        Box::new(human),
        Box::new(opponent),
        Vec::new(),
    );

    assert_eq!(orchestrator.run().unwrap(), GameStatus::Won(Mark::X));
    assert_eq!(orchestrator.session().history().len(), 5);
    let output = String::from_utf8(orchestrator.into_output()).unwrap();
    assert!(output.contains("Playing 'X': You. Playing 'O': Scripted."));
    assert!(output.contains("Scripted is making a move..."));
    assert!(output.trim_end().ends_with("Congratulations! You win!"));
}
