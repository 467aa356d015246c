//! Game rules for tic-tac-toe.
//!
//! Pure functions that evaluate a board. Rules are separated from board
//! storage so the search and the invariant checks can compose them freely.
//! The same queries are available as [`Board`] methods.

pub mod draw;
pub mod score;
pub mod turn;
pub mod win;

pub use draw::{is_full, is_terminal};
pub use score::{outcome, score};
pub use turn::{current_player, legal_actions};
pub use win::{LINES, owns_line, winner};

use crate::action::Move;
use crate::outcome::Outcome;
use crate::types::{Board, Mark};

impl Board {
    /// Returns the mark whose turn it is.
    pub fn current_player(&self) -> Mark {
        current_player(self)
    }

    /// Returns every empty cell as a move, in row-major order.
    pub fn legal_actions(&self) -> Vec<Move> {
        legal_actions(self)
    }

    /// Returns the winning mark, if any line is complete.
    pub fn winner(&self) -> Option<Mark> {
        winner(self)
    }

    /// Checks if the game is over.
    pub fn is_terminal(&self) -> bool {
        is_terminal(self)
    }

    /// Scores a terminal board: +1 for X, -1 for O, 0 for a draw.
    pub fn score(&self) -> i8 {
        score(self)
    }

    /// Returns the outcome of a terminal board, `None` while play continues.
    pub fn outcome(&self) -> Option<Outcome> {
        outcome(self)
    }
}
