//! Terminal outcome classification

use serde::{Deserialize, Serialize};

use super::grid::{BOARD_SIZE, Grid, Mark, Square};

/// Classification of a grid from one mark's point of view.
///
/// Exactly one variant applies to a given grid and mark: under the game's
/// rules a full board cannot hold completed lines for both marks at once.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Outcome {
    /// The game goes on
    Continue,
    /// The mark owns a completed line
    Win,
    /// The opposing mark owns a completed line
    Lose,
    /// No empty square remains and neither side has a line
    Draw,
}

impl Outcome {
    /// Whether the game is over
    pub fn is_terminal(self) -> bool {
        self != Outcome::Continue
    }
}

impl Grid {
    /// Classify the grid relative to `mark`.
    ///
    /// Sums the signed cell values of every row, every column, and both
    /// diagonals; a sum of `±BOARD_SIZE` can only come from a completed
    /// line, so the sums double as the win test. The grid mutates between
    /// queries at the same tree position during search, so the result is
    /// recomputed on every call rather than cached.
    pub fn classify(&self, mark: Mark) -> Outcome {
        let win = BOARD_SIZE as i32 * i32::from(mark.signum());

        let mut sums = [0i32; 2 * BOARD_SIZE + 2];
        for i in 0..BOARD_SIZE {
            sums[2 * BOARD_SIZE] += i32::from(self.get(Square::new(i, i)).signum());
            sums[2 * BOARD_SIZE + 1] +=
                i32::from(self.get(Square::new(BOARD_SIZE - 1 - i, i)).signum());
            for j in 0..BOARD_SIZE {
                sums[i] += i32::from(self.get(Square::new(j, i)).signum());
                sums[BOARD_SIZE + i] += i32::from(self.get(Square::new(i, j)).signum());
            }
        }

        if sums.contains(&win) {
            Outcome::Win
        } else if sums.contains(&-win) {
            Outcome::Lose
        } else if !self.has_empty() {
            Outcome::Draw
        } else {
            Outcome::Continue
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify_row_win() {
        let grid = Grid::from_string("OOO XX. ...").unwrap();
        assert_eq!(grid.classify(Mark::Nought), Outcome::Win);
        assert_eq!(grid.classify(Mark::Cross), Outcome::Lose);
    }

    #[test]
    fn test_classify_column_win() {
        let grid = Grid::from_string("X.O X.O X..").unwrap();
        assert_eq!(grid.classify(Mark::Cross), Outcome::Win);
        assert_eq!(grid.classify(Mark::Nought), Outcome::Lose);
    }

    #[test]
    fn test_classify_main_diagonal() {
        let grid = Grid::from_string("O.X .OX ..O").unwrap();
        assert_eq!(grid.classify(Mark::Nought), Outcome::Win);
    }

    #[test]
    fn test_classify_anti_diagonal() {
        let grid = Grid::from_string("O.X .XO X..").unwrap();
        assert_eq!(grid.classify(Mark::Cross), Outcome::Win);
        assert_eq!(grid.classify(Mark::Nought), Outcome::Lose);
    }

    #[test]
    fn test_classify_draw() {
        // Full board, no line for either side
        let grid = Grid::from_string("OXO XXO OOX").unwrap();
        assert_eq!(grid.classify(Mark::Nought), Outcome::Draw);
        assert_eq!(grid.classify(Mark::Cross), Outcome::Draw);
    }

    #[test]
    fn test_classify_continue() {
        let grid = Grid::from_string("OX. .O. ...").unwrap();
        assert_eq!(grid.classify(Mark::Nought), Outcome::Continue);
        assert_eq!(grid.classify(Mark::Cross), Outcome::Continue);
    }

    #[test]
    fn test_classify_empty_grid() {
        let grid = Grid::new();
        assert_eq!(grid.classify(Mark::Nought), Outcome::Continue);
    }

    #[test]
    fn classification_is_symmetric() {
        // A win for one mark is always a loss for the other
        let grid = Grid::from_string("XXX OO. ...").unwrap();
        assert_eq!(grid.classify(Mark::Cross), Outcome::Win);
        assert_eq!(grid.classify(Mark::Nought), Outcome::Lose);
    }

    #[test]
    fn full_board_with_line_is_not_a_draw() {
        let grid = Grid::from_string("OOO XXO XOX").unwrap();
        assert_eq!(grid.classify(Mark::Nought), Outcome::Win);
        assert_eq!(grid.classify(Mark::Cross), Outcome::Lose);
    }
}
