//! High-level game management

use serde::{Deserialize, Serialize};

use crate::board::{Grid, Mark, Outcome, Square};

/// A move in the game record
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Move {
    pub square: Square,
    pub mark: Mark,
}

/// Terminal result of a game
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameResult {
    Win(Mark),
    Draw,
}

/// Authoritative game state: the grid, whose turn it is, and the move
/// history. Strategies receive the grid and propose squares; the game
/// validates and applies them, latching the result once the position turns
/// terminal.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Game {
    grid: Grid,
    to_move: Mark,
    moves: Vec<Move>,
    result: Option<GameResult>,
}

impl Game {
    /// Start a game with `first` to move on an empty grid
    pub fn new(first: Mark) -> Self {
        Game {
            grid: Grid::new(),
            to_move: first,
            moves: Vec::new(),
            result: None,
        }
    }

    /// The current grid
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// The mark to move next
    pub fn to_move(&self) -> Mark {
        self.to_move
    }

    /// Number of moves played so far
    pub fn moves_played(&self) -> usize {
        self.moves.len()
    }

    /// The move history, oldest first
    pub fn moves(&self) -> &[Move] {
        &self.moves
    }

    /// The result, once the game has ended
    pub fn result(&self) -> Option<GameResult> {
        self.result
    }

    /// Whether the game has ended
    pub fn is_over(&self) -> bool {
        self.result.is_some()
    }

    /// Apply a move for the side to move.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::GameOver`] if the game already ended,
    /// [`crate::Error::SquareOccupied`] if the square is taken, and
    /// [`crate::Error::SquareOutOfBounds`] if it is off the board.
    pub fn play(&mut self, square: Square) -> crate::Result<()> {
        if self.result.is_some() {
            return Err(crate::Error::GameOver);
        }

        let mark = self.to_move;
        self.grid.place(square, mark)?;
        self.moves.push(Move { square, mark });

        match self.grid.classify(mark) {
            Outcome::Win => self.result = Some(GameResult::Win(mark)),
            Outcome::Lose => self.result = Some(GameResult::Win(mark.opponent())),
            Outcome::Draw => self.result = Some(GameResult::Draw),
            Outcome::Continue => {}
        }
        self.to_move = mark.opponent();
        Ok(())
    }
}

impl Default for Game {
    fn default() -> Self {
        Self::new(Mark::Nought)
    }
}
