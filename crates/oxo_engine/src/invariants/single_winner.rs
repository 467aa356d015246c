//! Single winner invariant: legal play stops at the first completed line.

use super::Invariant;
use crate::rules::owns_line;
use crate::types::{Board, Mark};

/// Invariant: at most one mark owns a complete line.
///
/// Holds on every board reachable by alternating play that stops once the
/// game is over. A caller can still build a balanced board that breaks it.
pub struct SingleWinnerInvariant;

impl Invariant<Board> for SingleWinnerInvariant {
    fn holds(board: &Board) -> bool {
        !(owns_line(board, Mark::X) && owns_line(board, Mark::O))
    }

    fn description() -> &'static str {
        "At most one mark owns a complete line"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_line_holds() {
        let board: Board = "XXX/OO./...".parse().expect("valid board");
        assert!(SingleWinnerInvariant::holds(&board));
    }

    #[test]
    fn test_two_lines_violate() {
        let board: Board = "OOO/XXX/X..".parse().expect("balanced board");
        assert!(!SingleWinnerInvariant::holds(&board));
    }
}
