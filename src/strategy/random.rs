//! Uniform random baseline

use rand::{SeedableRng, prelude::IndexedRandom, rngs::StdRng};

use super::{Strategy, StrategyKind};
use crate::board::{Grid, Square};

/// Picks uniformly among empty squares. No state beyond the RNG and no
/// lookahead; the non-strategic baseline opponent.
#[derive(Debug)]
pub struct RandomMover {
    rng: StdRng,
}

impl RandomMover {
    /// Create a mover with an entropy-seeded RNG
    pub fn new() -> Self {
        Self::with_seed(rand::random::<u64>())
    }

    /// Create a mover with a fixed RNG seed
    pub fn with_seed(seed: u64) -> Self {
        RandomMover {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Choose an empty square uniformly at random
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::NoValidMoves`] if the grid is full.
    pub fn choose(&mut self, grid: &Grid) -> crate::Result<Square> {
        grid.empty_squares()
            .choose(&mut self.rng)
            .copied()
            .ok_or(crate::Error::NoValidMoves)
    }
}

impl Default for RandomMover {
    fn default() -> Self {
        Self::new()
    }
}

impl Strategy for RandomMover {
    fn kind(&self) -> StrategyKind {
        StrategyKind::Random
    }

    fn choose(&mut self, grid: &Grid, _moves_played: usize) -> crate::Result<Square> {
        RandomMover::choose(self, grid)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn proposes_only_empty_squares() {
        let grid = Grid::from_string("OXO X.X O..").unwrap();
        let mut mover = RandomMover::with_seed(42);

        for _ in 0..50 {
            let square = mover.choose(&grid).unwrap();
            assert!(grid.is_empty(square));
        }
    }

    #[test]
    fn full_grid_has_no_move() {
        let grid = Grid::from_string("OXO XXO OOX").unwrap();
        let mut mover = RandomMover::with_seed(42);
        assert!(matches!(
            mover.choose(&grid),
            Err(crate::Error::NoValidMoves)
        ));
    }

    #[test]
    fn same_seed_reproduces_the_sequence() {
        let grid = Grid::from_string("O.. .X. ...").unwrap();
        let mut a = RandomMover::with_seed(12345);
        let mut b = RandomMover::with_seed(12345);

        for _ in 0..20 {
            assert_eq!(a.choose(&grid).unwrap(), b.choose(&grid).unwrap());
        }
    }
}
