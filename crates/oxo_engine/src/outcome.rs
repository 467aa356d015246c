//! Game outcomes.

use crate::types::Mark;
use serde::{Deserialize, Serialize};

/// Outcome of a finished game.
///
/// Always derived from a board, never stored in one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Outcome {
    /// The mark completed a line.
    Winner(Mark),
    /// The board filled up with no line completed.
    Draw,
}

impl Outcome {
    /// Returns the winner if there is one.
    pub fn winner(&self) -> Option<Mark> {
        match self {
            Outcome::Winner(mark) => Some(*mark),
            Outcome::Draw => None,
        }
    }

    /// Returns true if the game was a draw.
    pub fn is_draw(&self) -> bool {
        matches!(self, Outcome::Draw)
    }
}

impl std::fmt::Display for Outcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Outcome::Winner(mark) => write!(f, "{} wins", mark),
            Outcome::Draw => write!(f, "Draw"),
        }
    }
}
