//! Win detection logic for tic-tac-toe.

use crate::action::Move;
use crate::types::{Board, Cell, Mark};
use strum::IntoEnumIterator;

/// The eight winning lines in scan order: rows, then columns, then the main
/// and anti diagonals.
pub const LINES: [[Move; 3]; 8] = [
    // Rows
    [Move::ALL[0], Move::ALL[1], Move::ALL[2]],
    [Move::ALL[3], Move::ALL[4], Move::ALL[5]],
    [Move::ALL[6], Move::ALL[7], Move::ALL[8]],
    // Columns
    [Move::ALL[0], Move::ALL[3], Move::ALL[6]],
    [Move::ALL[1], Move::ALL[4], Move::ALL[7]],
    [Move::ALL[2], Move::ALL[5], Move::ALL[8]],
    // Diagonals
    [Move::ALL[0], Move::ALL[4], Move::ALL[8]],
    [Move::ALL[2], Move::ALL[4], Move::ALL[6]],
];

/// Checks if `mark` occupies a complete row, column or diagonal.
pub fn owns_line(board: &Board, mark: Mark) -> bool {
    let cell = Cell::from(mark);
    LINES
        .iter()
        .any(|line| line.iter().all(|&mv| board.get(mv) == cell))
}

/// Returns the mark with a complete line, if any.
///
/// X is checked before O. Only one mark can complete a line in legal play;
/// on a board where both have, X is reported.
pub fn winner(board: &Board) -> Option<Mark> {
    Mark::iter().find(|&mark| owns_line(board, mark))
}
