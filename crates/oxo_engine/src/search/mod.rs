//! Exhaustive adversarial search.
//!
//! No pruning and no memoisation: every call walks the whole game tree
//! below the given board, which for 3x3 tic-tac-toe is at most 549 946
//! nodes.

mod minimax;

pub use minimax::{Analysis, analyze, minimax_value, optimal_move};
