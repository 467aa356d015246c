//! Replaying and playing out games.

use crate::action::{Move, MoveError};
use crate::outcome::Outcome;
use crate::rules::{is_terminal, outcome};
use crate::search::optimal_move;
use crate::types::Board;
use derive_getters::Getters;
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument, trace};

impl Board {
    /// Replays moves from the empty board.
    ///
    /// # Errors
    ///
    /// Returns [`MoveError::InvalidMove`] for the first move that targets an
    /// occupied cell.
    #[instrument(skip(moves), fields(plies = moves.len()))]
    pub fn from_moves(moves: &[Move]) -> Result<Self, MoveError> {
        moves
            .iter()
            .try_fold(Board::new(), |board, &mv| board.apply_move(mv))
    }
}

/// A game played to the end by optimal search on both sides.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct Playout {
    /// Moves chosen, in order.
    moves: Vec<Move>,
    /// Terminal board the moves reach.
    final_board: Board,
    /// How the game ended.
    outcome: Outcome,
}

/// Plays optimal moves for whichever side is to move until the game ends.
///
/// A board that is already terminal yields an empty move list.
#[instrument(skip(board), fields(board = %board))]
pub fn play_out(board: &Board) -> Playout {
    let mut current = *board;
    let mut moves = Vec::new();

    while let Some(mv) = optimal_move(&current) {
        let next = current
            .apply_move(mv)
            .expect("optimal move targets an empty cell");
        trace!(player = %current.current_player(), %mv, board = %next, "Ply");
        moves.push(mv);
        current = next;
    }

    debug_assert!(is_terminal(&current), "playout stopped on a live board");
    let result = outcome(&current).unwrap_or(Outcome::Draw);
    debug!(plies = moves.len(), outcome = %result, "Playout finished");
    Playout {
        moves,
        final_board: current,
        outcome: result,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Mark;

    fn mv(row: u8, col: u8) -> Move {
        Move::new(row, col).expect("in range")
    }

    #[test]
    fn test_replay_alternates_marks() {
        let board = Board::from_moves(&[mv(1, 1), mv(0, 0), mv(2, 2)]).expect("valid replay");
        assert_eq!(board.to_string(), "O../.X./..X");
        assert_eq!(board.current_player(), Mark::O);
    }

    #[test]
    fn test_replay_rejects_repeated_cell() {
        assert_eq!(
            Board::from_moves(&[mv(1, 1), mv(1, 1)]),
            Err(MoveError::InvalidMove(mv(1, 1)))
        );
    }

    #[test]
    fn test_play_out_terminal_board() {
        let board: Board = "XXX/.../...".parse().expect("nine cells");
        let playout = play_out(&board);
        assert!(playout.moves().is_empty());
        assert_eq!(playout.final_board(), &board);
        assert_eq!(playout.outcome(), &Outcome::Winner(Mark::X));
    }

    #[test]
    fn test_play_out_finishes_winning_line() {
        let board: Board = "XX./OO./...".parse().expect("valid board");
        let playout = play_out(&board);
        assert_eq!(playout.moves(), &vec![mv(0, 2)]);
        assert_eq!(playout.outcome(), &Outcome::Winner(Mark::X));
    }

    #[test]
    fn test_play_out_always_ends_terminal() {
        for text in [".........", "X........", "XX./.../...", "O../.../...", "XOX/OXO/..."] {
            let board: Board = text.parse().expect("nine cells");
            let playout = play_out(&board);
            assert!(
                is_terminal(playout.final_board()),
                "{text} stopped at {}",
                playout.final_board()
            );
            assert_eq!(
                Some(*playout.outcome()),
                outcome(playout.final_board()),
                "{text}"
            );
            assert_eq!(
                playout.final_board().occupied(),
                board.occupied() + playout.moves().len()
            );
        }
    }
}
