//! Moves and move errors.

use serde::{Deserialize, Serialize};

/// A move: the (row, column) coordinates of an empty cell, each in `0..=2`.
///
/// Coordinates are validated on construction, so every `Move` value names a
/// real cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "(u8, u8)", into = "(u8, u8)")]
pub struct Move {
    row: u8,
    col: u8,
}

impl Move {
    /// All nine moves in row-major order.
    pub const ALL: [Move; 9] = [
        Move::at(0, 0),
        Move::at(0, 1),
        Move::at(0, 2),
        Move::at(1, 0),
        Move::at(1, 1),
        Move::at(1, 2),
        Move::at(2, 0),
        Move::at(2, 1),
        Move::at(2, 2),
    ];

    const fn at(row: u8, col: u8) -> Self {
        Self { row, col }
    }

    /// Creates a move, or `None` if either coordinate is out of range.
    pub fn new(row: u8, col: u8) -> Option<Self> {
        (row < 3 && col < 3).then_some(Self { row, col })
    }

    /// Creates a move from a row-major cell index (0-8).
    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    /// Row coordinate (0-2).
    pub fn row(self) -> u8 {
        self.row
    }

    /// Column coordinate (0-2).
    pub fn col(self) -> u8 {
        self.col
    }

    /// Row-major cell index (0-8).
    pub fn index(self) -> usize {
        usize::from(self.row) * 3 + usize::from(self.col)
    }
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

impl TryFrom<(u8, u8)> for Move {
    type Error = MoveError;

    fn try_from((row, col): (u8, u8)) -> Result<Self, Self::Error> {
        Move::new(row, col).ok_or(MoveError::OffBoard { row, col })
    }
}

impl From<Move> for (u8, u8) {
    fn from(mv: Move) -> Self {
        (mv.row, mv.col)
    }
}

/// Error that can occur when building or applying a move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum MoveError {
    /// The target cell is already occupied.
    #[display("Invalid move: cell {_0} is already occupied")]
    InvalidMove(#[error(not(source))] Move),

    /// A coordinate lies outside `0..=2`.
    #[display("Invalid move: ({row}, {col}) is off the board")]
    OffBoard {
        /// Requested row.
        row: u8,
        /// Requested column.
        col: u8,
    },
}
