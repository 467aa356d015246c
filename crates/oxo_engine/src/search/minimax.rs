//! Minimax over the full game tree.
//!
//! X maximises the score and O minimises it. Ranking is split into two
//! mutually recursive functions, one per side.

use crate::action::Move;
use crate::rules::{current_player, is_terminal, legal_actions, score};
use crate::types::{Board, Mark};
use derive_getters::Getters;
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// Minimax value of a subtree and the move that first achieved it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Rank {
    score: i8,
    best: Option<Move>,
}

impl Rank {
    fn terminal(board: &Board) -> Self {
        Self {
            score: score(board),
            best: None,
        }
    }
}

/// Result of searching a position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct Analysis {
    /// Optimal move for the side to play, `None` on a terminal board.
    best_move: Option<Move>,
    /// Minimax value from X's point of view: +1 X wins, -1 O wins, 0 draw.
    value: i8,
    /// Boards visited, the root included.
    nodes: u64,
}

/// Every legal move paired with the board it produces.
fn successors(board: &Board) -> impl Iterator<Item = (Move, Board)> + '_ {
    legal_actions(board).into_iter().map(move |mv| {
        let next = board
            .apply_move(mv)
            .expect("legal actions target empty cells");
        (mv, next)
    })
}

/// Best outcome X can force from `board` with X to move.
///
/// Ties keep the first move seen.
fn max_rank(board: &Board, nodes: &mut u64) -> Rank {
    *nodes += 1;
    if is_terminal(board) {
        return Rank::terminal(board);
    }

    let mut rank = Rank {
        score: i8::MIN,
        best: None,
    };
    for (mv, next) in successors(board) {
        let value = min_rank(&next, nodes).score;
        if value > rank.score {
            rank = Rank {
                score: value,
                best: Some(mv),
            };
        }
    }
    rank
}

/// Best outcome O can force from `board` with O to move.
///
/// Ties keep the first move seen.
fn min_rank(board: &Board, nodes: &mut u64) -> Rank {
    *nodes += 1;
    if is_terminal(board) {
        return Rank::terminal(board);
    }

    let mut rank = Rank {
        score: i8::MAX,
        best: None,
    };
    for (mv, next) in successors(board) {
        let value = max_rank(&next, nodes).score;
        if value < rank.score {
            rank = Rank {
                score: value,
                best: Some(mv),
            };
        }
    }
    rank
}

/// Searches the full game tree below `board`.
///
/// The side to move picks the ranking function: X maximises, O minimises.
/// On a terminal board the search visits only the root and reports its score.
#[instrument(skip(board), fields(board = %board))]
pub fn analyze(board: &Board) -> Analysis {
    let mut nodes = 0;
    let rank = match current_player(board) {
        Mark::X => max_rank(board, &mut nodes),
        Mark::O => min_rank(board, &mut nodes),
    };

    debug!(
        best_move = ?rank.best,
        value = rank.score,
        nodes,
        "Search complete"
    );
    Analysis {
        best_move: rank.best,
        value: rank.score,
        nodes,
    }
}

/// Returns the optimal move for the side to play.
///
/// `None` if the board is terminal; that is not an error.
#[instrument(skip(board), fields(board = %board))]
pub fn optimal_move(board: &Board) -> Option<Move> {
    if is_terminal(board) {
        debug!("Board is terminal, no move to search");
        return None;
    }
    analyze(board).best_move
}

/// Returns the minimax value of `board` from X's point of view.
pub fn minimax_value(board: &Board) -> i8 {
    analyze(board).value
}

#[cfg(test)]
mod tests {
    use super::*;

    fn board(s: &str) -> Board {
        s.parse().expect("valid board")
    }

    #[test]
    fn test_terminal_board_visits_only_root() {
        let analysis = analyze(&board("XXX/OO./..."));
        assert_eq!(*analysis.best_move(), None);
        assert_eq!(*analysis.value(), 1);
        assert_eq!(*analysis.nodes(), 1);
    }

    #[test]
    fn test_last_cell_is_forced() {
        // X O X / X O O / O X .
        let b = board("XOX/XOO/OX.");
        let analysis = analyze(&b);
        assert_eq!(*analysis.best_move(), Move::new(2, 2));
        assert_eq!(*analysis.value(), 0);
        assert_eq!(*analysis.nodes(), 2);
    }

    #[test]
    fn test_o_blocks_column() {
        // X O X / X O O / . X .  : (2, 2) lets X finish the left column.
        let b = board("XOX/XOO/.X.");
        assert_eq!(current_player(&b), Mark::O);
        let analysis = analyze(&b);
        assert_eq!(*analysis.value(), 0);
        assert_eq!(*analysis.best_move(), Move::new(2, 0));
    }

    #[test]
    fn test_o_blocks_immediate_threat() {
        // X threatens the top row; O must take (0, 2).
        let b = board("XX./.O./...");
        assert_eq!(optimal_move(&b), Move::new(0, 2));
    }

    #[test]
    fn test_o_wins_when_possible() {
        let b = board("XX./OO./X..");
        assert_eq!(current_player(&b), Mark::O);
        assert_eq!(optimal_move(&b), Move::new(1, 2));
        assert_eq!(minimax_value(&b), -1);
    }
}
