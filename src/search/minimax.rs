//! Plain exhaustive minimax

use rand::{Rng, SeedableRng, rngs::StdRng};

use super::{SCORE_LIMIT, SearchReport, TieBreak, evaluate};
use crate::board::{Grid, Mark, Outcome, Placement, Square};

/// Exhaustive minimax over every reachable continuation.
///
/// Visits every legal move at every node with no pruning, so the cost is
/// exponential in the remaining empty squares; only tractable because the
/// board bounds the tree at 9! nodes, far fewer in practice after terminal
/// cuts. Kept alongside [`super::AlphaBeta`] as the reference
/// implementation.
#[derive(Debug)]
pub struct Minimax {
    mark: Mark,
    rng: StdRng,
    tie_break: TieBreak,
    nodes: u64,
}

impl Minimax {
    /// Create a searcher for `mark` with an entropy-seeded RNG
    pub fn new(mark: Mark) -> Self {
        Self::with_seed(mark, rand::random::<u64>())
    }

    /// Create a searcher with a fixed RNG seed for reproducible tie-breaks
    pub fn with_seed(mark: Mark, seed: u64) -> Self {
        Minimax {
            mark,
            rng: StdRng::seed_from_u64(seed),
            tie_break: TieBreak::Coin,
            nodes: 0,
        }
    }

    /// Replace the tie-break policy
    pub fn with_tie_break(mut self, tie_break: TieBreak) -> Self {
        self.tie_break = tie_break;
        self
    }

    /// The mark this searcher plays
    pub fn mark(&self) -> Mark {
        self.mark
    }

    /// Choose the best move for the position
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::NoValidMoves`] if the grid has no empty
    /// squares.
    pub fn choose(&mut self, grid: &Grid) -> crate::Result<Square> {
        self.analyze(grid)?.best_move()
    }

    /// Traverse the full tree below `grid` and report score, principal
    /// variation, and node count. The variation is built innermost-first
    /// during recursion and reversed once here.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::NoValidMoves`] if the grid has no empty
    /// squares.
    pub fn analyze(&mut self, grid: &Grid) -> crate::Result<SearchReport> {
        if !grid.has_empty() {
            return Err(crate::Error::NoValidMoves);
        }

        self.nodes = 0;
        let mut scratch = *grid;
        let (score, mut variation) = self.max_level(&mut scratch, self.mark, 0);
        variation.reverse();
        Ok(SearchReport {
            score,
            variation,
            nodes: self.nodes,
        })
    }

    fn replaces_on_tie(&mut self) -> bool {
        match self.tie_break {
            TieBreak::First => false,
            TieBreak::Coin => self.rng.random_bool(0.5),
        }
    }

    fn max_level(&mut self, grid: &mut Grid, current: Mark, depth: i32) -> (i32, Vec<Square>) {
        self.nodes += 1;
        let depth = depth + 1;
        let mut best_score = -SCORE_LIMIT;
        let mut best_line = Vec::new();

        for square in grid.empty_squares() {
            let mut placed = Placement::new(grid, square, current);
            let (score, line) = match placed.grid().classify(current) {
                Outcome::Continue => {
                    let (score, mut line) =
                        self.min_level(placed.grid(), current.opponent(), depth);
                    line.push(square);
                    (score, line)
                }
                outcome => (evaluate(outcome, current, self.mark, depth), vec![square]),
            };
            drop(placed);

            if score > best_score || (score == best_score && self.replaces_on_tie()) {
                best_score = score;
                best_line = line;
            }
        }

        (best_score, best_line)
    }

    fn min_level(&mut self, grid: &mut Grid, current: Mark, depth: i32) -> (i32, Vec<Square>) {
        self.nodes += 1;
        let depth = depth + 1;
        let mut best_score = SCORE_LIMIT;
        let mut best_line = Vec::new();

        for square in grid.empty_squares() {
            let mut placed = Placement::new(grid, square, current);
            let (score, line) = match placed.grid().classify(current) {
                Outcome::Continue => {
                    let (score, mut line) =
                        self.max_level(placed.grid(), current.opponent(), depth);
                    line.push(square);
                    (score, line)
                }
                outcome => (evaluate(outcome, current, self.mark, depth), vec![square]),
            };
            drop(placed);

            if score < best_score || (score == best_score && self.replaces_on_tie()) {
                best_score = score;
                best_line = line;
            }
        }

        (best_score, best_line)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn takes_immediate_win() {
        // Noughts complete the left column; the crosses threat at (2, 1)
        // never gets a turn
        let grid = Grid::from_string("O.X O.. ..X").unwrap();
        let mut search = Minimax::with_seed(Mark::Nought, 7);

        let report = search.analyze(&grid).unwrap();
        assert_eq!(report.best_move().unwrap(), Square::new(0, 2));
        assert_eq!(report.score, 9);
    }

    #[test]
    fn blocks_the_only_losing_threat() {
        // Crosses threaten the top row at (2, 0); every other reply loses
        let grid = Grid::from_string("XX. .O. ...").unwrap();
        let mut search = Minimax::with_seed(Mark::Nought, 11);

        let report = search.analyze(&grid).unwrap();
        assert_eq!(report.best_move().unwrap(), Square::new(2, 0));
        assert_eq!(report.score, 0);
    }

    #[test]
    fn variation_leads_with_recommended_move() {
        let grid = Grid::from_string("OX. .X. O..").unwrap();
        let mut search = Minimax::with_seed(Mark::Cross, 3);

        let report = search.analyze(&grid).unwrap();
        let chosen = search.choose(&grid).unwrap();
        assert_eq!(report.variation[0], report.best_move().unwrap());
        // Same seed position, fresh RNG state not required for a forced line
        assert!(grid.is_empty(chosen));
    }

    #[test]
    fn full_grid_has_no_move() {
        let grid = Grid::from_string("OXO XXO OOX").unwrap();
        let mut search = Minimax::with_seed(Mark::Nought, 1);
        assert!(matches!(
            search.analyze(&grid),
            Err(crate::Error::NoValidMoves)
        ));
    }

    #[test]
    fn input_grid_is_untouched() {
        let grid = Grid::from_string("O.X .X. ...").unwrap();
        let copy = grid;
        let mut search = Minimax::with_seed(Mark::Nought, 5);

        search.analyze(&grid).unwrap();
        assert_eq!(grid, copy);
    }

    #[test]
    fn repeated_analysis_is_consistent() {
        // The scratch grid is restored between candidates, so back-to-back
        // runs see the same tree and the same score
        let grid = Grid::from_string("OX. ..X O..").unwrap();
        let mut search = Minimax::with_seed(Mark::Nought, 42);

        let first = search.analyze(&grid).unwrap();
        let second = search.analyze(&grid).unwrap();
        assert_eq!(first.score, second.score);
        assert_eq!(first.nodes, second.nodes);
    }
}
