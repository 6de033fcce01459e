//! First-move selection from a fixed weighted distribution

use rand::Rng;

use crate::board::{BOARD_SIZE, Square};

/// Relative weight of the center square
const CENTER_WEIGHT: f64 = 0.2;
/// Relative weight of every other square
const OUTER_WEIGHT: f64 = 0.1;

/// Weighted first-move table.
///
/// An empty board is a draw under perfect play, so searching it buys no
/// information; the first move of an engine-first game is instead drawn
/// from a fixed distribution that favors the center, varying engine
/// behavior across games.
#[derive(Debug, Clone)]
pub struct OpeningBook {
    weights: Vec<(Square, f64)>,
}

impl OpeningBook {
    pub fn new() -> Self {
        let center = Square::center();
        let weights = (0..BOARD_SIZE * BOARD_SIZE)
            .map(|i| {
                let square = Square::new(i % BOARD_SIZE, i / BOARD_SIZE);
                let weight = if square == center {
                    CENTER_WEIGHT
                } else {
                    OUTER_WEIGHT
                };
                (square, weight)
            })
            .collect();
        OpeningBook { weights }
    }

    /// Draw an opening square.
    ///
    /// Threshold walk over the cumulative weights; the final entry backstops
    /// numerical drift in the running subtraction.
    pub fn draw<R: Rng>(&self, rng: &mut R) -> Square {
        let total: f64 = self.weights.iter().map(|(_, w)| w).sum();
        let mut threshold = rng.random::<f64>() * total;

        for &(square, weight) in &self.weights {
            if threshold < weight {
                return square;
            }
            threshold -= weight;
        }
        self.weights[self.weights.len() - 1].0
    }
}

impl Default for OpeningBook {
    fn default() -> Self {
        Self::new()
    }
}
