//! Core domain types for tic-tac-toe.

use crate::action::{Move, MoveError};
use crate::invariants::{
    BoardInvariants, Invariant, InvariantSet, InvariantViolation, MarkBalanceInvariant,
};
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use tracing::{instrument, warn};

/// Player mark.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Display, Serialize, Deserialize,
    strum::EnumIter,
)]
pub enum Mark {
    /// Mark X (moves first).
    X,
    /// Mark O (moves second).
    O,
}

impl Mark {
    /// Returns the opposing mark.
    pub fn opponent(self) -> Self {
        match self {
            Mark::X => Mark::O,
            Mark::O => Mark::X,
        }
    }
}

/// A cell on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Cell {
    /// Nobody has played here.
    #[default]
    Empty,
    /// Occupied by X.
    X,
    /// Occupied by O.
    O,
}

impl Cell {
    /// Returns the mark occupying this cell, if any.
    pub fn mark(self) -> Option<Mark> {
        match self {
            Cell::Empty => None,
            Cell::X => Some(Mark::X),
            Cell::O => Some(Mark::O),
        }
    }

    /// Checks if the cell is empty.
    pub fn is_empty(self) -> bool {
        matches!(self, Cell::Empty)
    }

    fn symbol(self) -> char {
        match self {
            Cell::Empty => '.',
            Cell::X => 'X',
            Cell::O => 'O',
        }
    }
}

impl From<Mark> for Cell {
    fn from(mark: Mark) -> Self {
        match mark {
            Mark::X => Cell::X,
            Mark::O => Cell::O,
        }
    }
}

/// Error parsing a board from text.
#[derive(Debug, Clone, PartialEq, Eq, Display, Error)]
pub enum BoardError {
    /// Text did not contain exactly nine cells.
    #[display("Expected 9 cells, found {found}")]
    InvalidLength {
        /// Number of cell characters found.
        found: usize,
    },

    /// A character that is neither a mark, an empty marker nor a separator.
    #[display("Invalid cell character {character:?} at cell {index}")]
    InvalidCell {
        /// Offending character.
        character: char,
        /// Cell index (0-8) the character would have occupied.
        index: usize,
    },
}

/// 3x3 tic-tac-toe board.
///
/// Boards are values: nothing mutates a board after construction, and
/// [`Board::apply_move`] returns a fresh one. Any layout of nine cells is a
/// board; whether it can arise in legal play is reported by
/// [`Board::check_invariants`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Board {
    /// Cells in row-major order (0-8).
    cells: [Cell; 9],
}

impl Board {
    /// Creates the initial empty board.
    pub fn new() -> Self {
        Self {
            cells: [Cell::Empty; 9],
        }
    }

    /// Builds a board from three rows of cells.
    pub fn from_rows(rows: [[Cell; 3]; 3]) -> Self {
        let mut cells = [Cell::Empty; 9];
        for (row, line) in rows.iter().enumerate() {
            cells[row * 3..row * 3 + 3].copy_from_slice(line);
        }
        Self::from_cells(cells)
    }

    /// Builds a board from nine row-major cells.
    pub fn from_cells(cells: [Cell; 9]) -> Self {
        Self { cells }
    }

    /// Gets the cell at the given move's coordinates.
    pub fn get(&self, mv: Move) -> Cell {
        self.cells[mv.index()]
    }

    /// Checks if the cell at `mv` is empty.
    pub fn is_empty(&self, mv: Move) -> bool {
        self.get(mv).is_empty()
    }

    /// Returns all cells in row-major order.
    pub fn cells(&self) -> &[Cell; 9] {
        &self.cells
    }

    /// Counts the cells occupied by `mark`.
    pub fn count(&self, mark: Mark) -> usize {
        let target = Cell::from(mark);
        self.cells.iter().filter(|&&c| c == target).count()
    }

    /// Counts the occupied cells.
    pub fn occupied(&self) -> usize {
        self.cells.iter().filter(|c| !c.is_empty()).count()
    }

    /// Returns the board with the current player's mark placed at `mv`.
    ///
    /// # Errors
    ///
    /// Returns [`MoveError::InvalidMove`] if the target cell is occupied.
    pub fn apply_move(&self, mv: Move) -> Result<Board, MoveError> {
        if !self.is_empty(mv) {
            return Err(MoveError::InvalidMove(mv));
        }

        let mut next = *self;
        next.cells[mv.index()] = Cell::from(self.current_player());

        debug_assert!(
            !MarkBalanceInvariant::holds(self) || MarkBalanceInvariant::holds(&next),
            "{}",
            MarkBalanceInvariant::description()
        );
        Ok(next)
    }

    /// Checks every board invariant and returns the violated ones.
    #[instrument(skip(self), fields(board = %self))]
    pub fn check_invariants(&self) -> Result<(), Vec<InvariantViolation>> {
        BoardInvariants::check_all(self).inspect_err(|violations| {
            for v in violations {
                warn!(violation = %v.description, "Board invariant violated");
            }
        })
    }

    /// Formats the board as a human-readable grid.
    pub fn grid(&self) -> String {
        let mut result = String::new();
        for row in 0..3 {
            for col in 0..3 {
                result.push(self.cells[row * 3 + col].symbol());
                if col < 2 {
                    result.push('|');
                }
            }
            if row < 2 {
                result.push_str("\n-+-+-\n");
            }
        }
        result
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (i, cell) in self.cells.iter().enumerate() {
            if i > 0 && i % 3 == 0 {
                write!(f, "/")?;
            }
            write!(f, "{}", cell.symbol())?;
        }
        Ok(())
    }
}

impl FromStr for Board {
    type Err = BoardError;

    #[instrument]
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut cells = [Cell::Empty; 9];
        let mut found = 0;

        for character in s.chars() {
            if character.is_whitespace() || character == '/' || character == '|' {
                continue;
            }
            let cell = match character {
                'X' | 'x' => Cell::X,
                'O' | 'o' => Cell::O,
                '.' | '-' | '_' => Cell::Empty,
                _ => {
                    return Err(BoardError::InvalidCell {
                        character,
                        index: found,
                    });
                }
            };
            if found < 9 {
                cells[found] = cell;
            }
            found += 1;
        }

        if found != 9 {
            return Err(BoardError::InvalidLength { found });
        }
        Ok(Self::from_cells(cells))
    }
}

impl TryFrom<String> for Board {
    type Error = BoardError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Board> for String {
    fn from(board: Board) -> Self {
        board.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_board_is_empty() {
        let board = Board::new();
        assert_eq!(board.occupied(), 0);
        assert!(board.cells().iter().all(|c| c.is_empty()));
    }

    #[test]
    fn test_parse_and_display() {
        let board: Board = "XO./.X./..O".parse().expect("valid board");
        assert_eq!(board.to_string(), "XO./.X./..O");
        assert_eq!(board.count(Mark::X), 2);
        assert_eq!(board.count(Mark::O), 2);
    }

    #[test]
    fn test_parse_accepts_separators_and_lowercase() {
        let board: Board = "x|o|-\n_ x _\n- - o".parse().expect("valid board");
        assert_eq!(board.to_string(), "XO./.X./..O");
    }

    #[test]
    fn test_parse_rejects_wrong_length() {
        assert_eq!(
            "XO.".parse::<Board>(),
            Err(BoardError::InvalidLength { found: 3 })
        );
        assert_eq!(
            "XO./.X./..O/.".parse::<Board>(),
            Err(BoardError::InvalidLength { found: 10 })
        );
    }

    #[test]
    fn test_parse_rejects_unknown_character() {
        assert_eq!(
            "XO?......".parse::<Board>(),
            Err(BoardError::InvalidCell {
                character: '?',
                index: 2
            })
        );
    }

    #[test]
    fn test_unbalanced_layouts_parse() {
        let board: Board = "XXX......".parse().expect("any nine cells parse");
        assert_eq!(board.count(Mark::X), 3);
        assert_eq!(board.count(Mark::O), 0);

        let violations = board.check_invariants().unwrap_err();
        assert_eq!(
            violations,
            vec![InvariantViolation::new(MarkBalanceInvariant::description())]
        );
    }

    #[test]
    fn test_apply_move_on_unbalanced_board() {
        // O is behind, so O plays and the imbalance carries over.
        let board: Board = "XX./.../...".parse().expect("any nine cells parse");
        let next = board
            .apply_move(Move::new(1, 1).expect("in range"))
            .expect("empty cell");
        assert_eq!(next.to_string(), "XX./.O./...");
    }

    #[test]
    fn test_from_rows_is_row_major() {
        let board = Board::from_rows([
            [Cell::X, Cell::Empty, Cell::Empty],
            [Cell::Empty, Cell::O, Cell::Empty],
            [Cell::Empty, Cell::Empty, Cell::Empty],
        ]);
        assert_eq!(board.get(Move::new(0, 0).expect("in range")), Cell::X);
        assert_eq!(board.get(Move::new(1, 1).expect("in range")), Cell::O);
    }

    #[test]
    fn test_grid_rendering() {
        let board: Board = "XO./.X./..O".parse().expect("valid board");
        assert_eq!(board.grid(), "X|O|.\n-+-+-\n.|X|.\n-+-+-\n.|.|O");
    }

    #[test]
    fn test_cell_mark_conversion() {
        assert_eq!(Cell::from(Mark::X).mark(), Some(Mark::X));
        assert_eq!(Cell::from(Mark::O).mark(), Some(Mark::O));
        assert_eq!(Cell::Empty.mark(), None);
        assert_eq!(Mark::X.opponent(), Mark::O);
    }
}
