//! Move-selection strategies and the trait seam between them
//!
//! This module defines the strategy vocabulary used by duels and by the
//! surrounding application: the full engine, the two bare searches, and the
//! uniform random baseline.

pub mod opening;
pub mod random;

use std::fmt;

use clap::ValueEnum;

use crate::{
    board::{Grid, Mark, Square},
    engine::Engine,
    search::{AlphaBeta, Minimax},
};

pub use opening::OpeningBook;
pub use random::RandomMover;

/// A move supplier for one side of a game
pub trait Strategy {
    /// Returns the kind of strategy
    fn kind(&self) -> StrategyKind;

    /// Choose an empty square of `grid`.
    ///
    /// `moves_played` is the number of moves already made in the game; the
    /// full engine uses it to recognize the opening. The proposal is
    /// advisory: the caller owns the authoritative board and re-validates
    /// the square before committing it.
    fn choose(&mut self, grid: &Grid, moves_played: usize) -> crate::Result<Square>;
}

/// The available strategies
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum StrategyKind {
    /// Uniform choice among empty squares
    Random,
    /// Exhaustive minimax without pruning
    Minimax,
    /// Alpha-beta-pruned minimax
    AlphaBeta,
    /// Opening book plus alpha-beta search
    Engine,
}

impl fmt::Display for StrategyKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            StrategyKind::Random => "random",
            StrategyKind::Minimax => "minimax",
            StrategyKind::AlphaBeta => "alpha-beta",
            StrategyKind::Engine => "engine",
        };
        write!(f, "{name}")
    }
}

impl StrategyKind {
    /// Creates a boxed strategy playing `mark`, seeded for reproducibility
    pub fn into_boxed_strategy(self, mark: Mark, seed: u64) -> Box<dyn Strategy> {
        match self {
            StrategyKind::Random => Box::new(RandomMover::with_seed(seed)),
            StrategyKind::Minimax => Box::new(Minimax::with_seed(mark, seed)),
            StrategyKind::AlphaBeta => Box::new(AlphaBeta::with_seed(mark, seed)),
            StrategyKind::Engine => Box::new(Engine::with_seed(mark, seed)),
        }
    }
}

impl Strategy for Minimax {
    fn kind(&self) -> StrategyKind {
        StrategyKind::Minimax
    }

    fn choose(&mut self, grid: &Grid, _moves_played: usize) -> crate::Result<Square> {
        Minimax::choose(self, grid)
    }
}

impl Strategy for AlphaBeta {
    fn kind(&self) -> StrategyKind {
        StrategyKind::AlphaBeta
    }

    fn choose(&mut self, grid: &Grid, _moves_played: usize) -> crate::Result<Square> {
        AlphaBeta::choose(self, grid)
    }
}

impl Strategy for Engine {
    fn kind(&self) -> StrategyKind {
        StrategyKind::Engine
    }

    fn choose(&mut self, grid: &Grid, moves_played: usize) -> crate::Result<Square> {
        self.select_move(grid, moves_played)
    }
}
