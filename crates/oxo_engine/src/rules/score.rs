//! Outcome scoring.

use super::draw::is_terminal;
use super::win::winner;
use crate::outcome::Outcome;
use crate::types::{Board, Mark};

/// Scores a board from X's point of view.
///
/// +1 if X has won, -1 if O has won, 0 otherwise. Only meaningful on a
/// terminal board: a game still in progress also scores 0.
pub fn score(board: &Board) -> i8 {
    match winner(board) {
        Some(Mark::X) => 1,
        Some(Mark::O) => -1,
        None => 0,
    }
}

/// Returns the outcome of a finished game, or `None` while play continues.
pub fn outcome(board: &Board) -> Option<Outcome> {
    if !is_terminal(board) {
        return None;
    }
    Some(match winner(board) {
        Some(mark) => Outcome::Winner(mark),
        None => Outcome::Draw,
    })
}
