//! The unified move-selection entry point

use rand::{SeedableRng, rngs::StdRng};

use crate::{
    board::{Grid, Mark, Square},
    search::{AlphaBeta, SearchReport},
    strategy::OpeningBook,
};

/// Full engine: an opening book for the first move of an engine-first game,
/// alpha-beta search for everything else.
#[derive(Debug)]
pub struct Engine {
    mark: Mark,
    opening: OpeningBook,
    search: AlphaBeta,
    rng: StdRng,
}

impl Engine {
    /// Create an engine for `mark` with an entropy-seeded RNG
    pub fn new(mark: Mark) -> Self {
        Self::with_seed(mark, rand::random::<u64>())
    }

    /// Create an engine with a fixed RNG seed
    pub fn with_seed(mark: Mark, seed: u64) -> Self {
        Engine {
            mark,
            opening: OpeningBook::new(),
            search: AlphaBeta::with_seed(mark, seed),
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// The mark this engine plays
    pub fn mark(&self) -> Mark {
        self.mark
    }

    /// Select a move for the engine's mark.
    ///
    /// With `moves_played == 0` the engine is opening the game and draws
    /// from the weighted first-move table; otherwise it runs the full
    /// alpha-beta search. The returned square references an empty cell of
    /// `grid`, but the caller owns the authoritative board and should
    /// re-validate before committing, retrying on a stale proposal.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::NoValidMoves`] if the grid is full and
    /// [`crate::Error::GameOver`] if either side already owns a completed
    /// line.
    pub fn select_move(&mut self, grid: &Grid, moves_played: usize) -> crate::Result<Square> {
        if !grid.has_empty() {
            return Err(crate::Error::NoValidMoves);
        }
        if grid.classify(self.mark).is_terminal() {
            return Err(crate::Error::GameOver);
        }

        if moves_played == 0 {
            return Ok(self.opening.draw(&mut self.rng));
        }
        self.search.choose(grid)
    }

    /// Report score and principal variation for the position
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::NoValidMoves`] if the grid is full.
    pub fn analyze(&mut self, grid: &Grid) -> crate::Result<SearchReport> {
        self.search.analyze(grid)
    }
}
