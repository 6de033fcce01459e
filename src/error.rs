//! Error types for the lookahead crate

use thiserror::Error;

/// Main error type for the lookahead crate
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum Error {
    #[error("invalid move: square ({col}, {row}) is already occupied")]
    SquareOccupied { col: usize, row: usize },

    #[error("square ({col}, {row}) is out of bounds (board is {size}x{size})")]
    SquareOutOfBounds { col: usize, row: usize, size: usize },

    #[error("game already over")]
    GameOver,

    #[error("no valid moves available")]
    NoValidMoves,

    #[error("board string too short: expected {expected} cells, got {got} in '{context}'")]
    InvalidBoardLength {
        expected: usize,
        got: usize,
        context: String,
    },

    #[error("invalid character '{character}' at cell {position} in '{context}'")]
    InvalidCellCharacter {
        character: char,
        position: usize,
        context: String,
    },

    #[error("invalid mark '{input}' (expected 'nought' or 'cross')")]
    ParseMark { input: String },
}

/// Convenience type alias for Results using the crate's Error type
pub type Result<T> = std::result::Result<T, Error>;
