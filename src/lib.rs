//! Exhaustive game-tree search for small grid line games
//!
//! This crate provides:
//! - A signed-mark board representation where line sums double as win tests
//! - Exhaustive minimax and alpha-beta search with principal variations
//! - A weighted opening book and a uniform random baseline
//! - A unified engine entry point and an authoritative game record

pub mod board;
pub mod cli;
pub mod engine;
pub mod error;
pub mod game;
pub mod search;
pub mod strategy;

pub use board::{BOARD_SIZE, Cell, Grid, Mark, Outcome, Placement, Square};
pub use engine::Engine;
pub use error::{Error, Result};
pub use game::{Game, GameResult, Move};
pub use search::{AlphaBeta, Minimax, SCORE_LIMIT, SearchReport, TieBreak, evaluate};
pub use strategy::{OpeningBook, RandomMover, Strategy, StrategyKind};
