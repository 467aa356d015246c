//! Terminal-state detection for tic-tac-toe.

use super::win::winner;
use crate::types::Board;

/// Checks if the board is full (all cells occupied).
pub fn is_full(board: &Board) -> bool {
    board.cells().iter().all(|c| !c.is_empty())
}

/// Checks if the game is over: someone owns a line, or no empty cell remains.
pub fn is_terminal(board: &Board) -> bool {
    winner(board).is_some() || is_full(board)
}
