//! Mark balance invariant: X moves first, then the players alternate.

use super::Invariant;
use crate::types::{Board, Mark};

/// Invariant: X has as many marks as O, or exactly one more.
pub struct MarkBalanceInvariant;

impl Invariant<Board> for MarkBalanceInvariant {
    fn holds(board: &Board) -> bool {
        let x = board.count(Mark::X);
        let o = board.count(Mark::O);
        x == o || x == o + 1
    }

    fn description() -> &'static str {
        "X has as many marks as O, or exactly one more"
    }
}
