//! Game-tree search: exhaustive minimax and its alpha-beta-pruned variant

pub mod alphabeta;
pub mod minimax;

use serde::Serialize;

use crate::board::{Mark, Outcome, Square};

pub use alphabeta::AlphaBeta;
pub use minimax::Minimax;

/// Terminal scores lie strictly inside `±SCORE_LIMIT`, so the limit doubles
/// as the "no candidate seen yet" sentinel and as the root pruning bound.
pub const SCORE_LIMIT: i32 = 10;

/// How a search breaks ties between equally scored candidates
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TieBreak {
    /// Keep the first candidate found with the best score
    First,
    /// Give each tied candidate an independent 50% chance to replace the
    /// incumbent, which structurally favors later candidates
    Coin,
}

/// Result of a full traversal from one position
#[derive(Debug, Clone, Serialize)]
pub struct SearchReport {
    /// Score of the position from the searching mark's perspective
    pub score: i32,
    /// Predicted continuation to a terminal position, oldest move first
    pub variation: Vec<Square>,
    /// Number of positions expanded during the traversal
    pub nodes: u64,
}

impl SearchReport {
    /// The recommended move: the first move of the principal variation
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::NoValidMoves`] if the searched position had
    /// no empty squares.
    pub fn best_move(&self) -> crate::Result<Square> {
        self.variation
            .first()
            .copied()
            .ok_or(crate::Error::NoValidMoves)
    }
}

/// Score a terminal outcome from `searching`'s perspective.
///
/// Wins are worth more the fewer plies they take and losses cost less the
/// longer they are delayed, so equally terminal branches reached at
/// different depths never tie. The raw score is computed from `node_mark`'s
/// point of view and negated when the node belongs to the opponent, keeping
/// the returned value in the searching mark's frame regardless of whose
/// turn it is.
pub fn evaluate(outcome: Outcome, node_mark: Mark, searching: Mark, depth: i32) -> i32 {
    debug_assert!(outcome.is_terminal(), "evaluate called on a live position");
    let score = match outcome {
        Outcome::Win => SCORE_LIMIT - depth,
        Outcome::Lose => -SCORE_LIMIT + depth,
        Outcome::Draw | Outcome::Continue => 0,
    };
    if node_mark == searching { score } else { -score }
}
