//! oxo engine - pure tic-tac-toe logic with exhaustive minimax search.
//!
//! # Architecture
//!
//! - **Types**: [`Board`], [`Cell`], [`Mark`], [`Move`], [`Outcome`]
//! - **Rules**: pure board queries (turn, legal actions, winner, terminal, score)
//! - **Search**: minimax without pruning over the full game tree
//! - **Invariants**: composable board properties checked on construction and on request
//!
//! # Example
//!
//! ```
//! use oxo_engine::{Board, Move, optimal_move};
//!
//! let board: Board = "XX./OO./...".parse()?;
//! assert_eq!(optimal_move(&board), Move::new(0, 2));
//! # Ok::<(), oxo_engine::BoardError>(())
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod action;
mod game;
pub mod invariants;
mod outcome;
pub mod rules;
pub mod search;
mod types;

pub use action::{Move, MoveError};
pub use game::{Playout, play_out};
pub use outcome::Outcome;
pub use rules::{current_player, is_terminal, legal_actions, score, winner};
pub use search::{Analysis, analyze, minimax_value, optimal_move};
pub use types::{Board, BoardError, Cell, Mark};

/// Applies `mv` for the side to move, returning the new board.
///
/// # Errors
///
/// Returns [`MoveError::InvalidMove`] if the target cell is occupied.
pub fn apply_move(board: &Board, mv: Move) -> Result<Board, MoveError> {
    board.apply_move(mv)
}
