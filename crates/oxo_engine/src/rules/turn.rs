//! Turn order and move generation.

use crate::action::Move;
use crate::types::{Board, Mark};

/// Returns the mark to move.
///
/// X moves whenever it has not played more marks than O. Defined for every
/// board, terminal ones included.
pub fn current_player(board: &Board) -> Mark {
    if board.count(Mark::X) <= board.count(Mark::O) {
        Mark::X
    } else {
        Mark::O
    }
}

/// Returns a move for every empty cell.
///
/// Each move appears once, in row-major order. The search breaks ties on
/// this order. An empty result means the board is full.
pub fn legal_actions(board: &Board) -> Vec<Move> {
    Move::ALL
        .iter()
        .copied()
        .filter(|&mv| board.is_empty(mv))
        .collect()
}
