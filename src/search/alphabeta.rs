//! Alpha-beta-pruned minimax

use rand::{Rng, SeedableRng, rngs::StdRng};

use super::{SCORE_LIMIT, SearchReport, TieBreak, evaluate};
use crate::board::{Grid, Mark, Outcome, Placement, Square};

/// Minimax with alpha-beta pruning.
///
/// Node logic is identical to [`super::Minimax`]; in addition each level
/// carries the bound its parent has already secured elsewhere and returns
/// early once the running best crosses it, skipping sibling candidates that
/// can no longer influence the parent's choice. Produces the same move and
/// score as the plain search while visiting a subset of its nodes.
#[derive(Debug)]
pub struct AlphaBeta {
    mark: Mark,
    rng: StdRng,
    tie_break: TieBreak,
    nodes: u64,
}

impl AlphaBeta {
    /// Create a searcher for `mark` with an entropy-seeded RNG
    pub fn new(mark: Mark) -> Self {
        Self::with_seed(mark, rand::random::<u64>())
    }

    /// Create a searcher with a fixed RNG seed for reproducible tie-breaks
    pub fn with_seed(mark: Mark, seed: u64) -> Self {
        AlphaBeta {
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

    /// Traverse the tree below `grid` and report score, principal
    /// variation, and node count. The root runs with the maximizer's
    /// sentinel as its bound, meaning no cutoff is possible there.
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
        let (score, mut variation) = self.max_level(&mut scratch, self.mark, 0, SCORE_LIMIT);
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

    fn max_level(
        &mut self,
        grid: &mut Grid,
        current: Mark,
        depth: i32,
        beta: i32,
    ) -> (i32, Vec<Square>) {
        self.nodes += 1;
        let depth = depth + 1;
        let mut best_score = -SCORE_LIMIT;
        let mut best_line = Vec::new();

        for square in grid.empty_squares() {
            let mut placed = Placement::new(grid, square, current);
            let (score, line) = match placed.grid().classify(current) {
                Outcome::Continue => {
                    let (score, mut line) =
                        self.min_level(placed.grid(), current.opponent(), depth, best_score);
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
            // The minimizer above already holds beta elsewhere; once the
            // running best exceeds it the remaining siblings are moot.
            if best_score > beta {
                return (best_score, best_line);
            }
        }

        (best_score, best_line)
    }

    fn min_level(
        &mut self,
        grid: &mut Grid,
        current: Mark,
        depth: i32,
        alpha: i32,
    ) -> (i32, Vec<Square>) {
        self.nodes += 1;
        let depth = depth + 1;
        let mut best_score = SCORE_LIMIT;
        let mut best_line = Vec::new();

        for square in grid.empty_squares() {
            let mut placed = Placement::new(grid, square, current);
            let (score, line) = match placed.grid().classify(current) {
                Outcome::Continue => {
                    let (score, mut line) =
                        self.max_level(placed.grid(), current.opponent(), depth, best_score);
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
            if best_score < alpha {
                return (best_score, best_line);
            }
        }

        (best_score, best_line)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::search::Minimax;

    #[test]
    fn takes_immediate_win() {
        let grid = Grid::from_string("O.X O.. ..X").unwrap();
        let mut search = AlphaBeta::with_seed(Mark::Nought, 7);

        let report = search.analyze(&grid).unwrap();
        assert_eq!(report.best_move().unwrap(), Square::new(0, 2));
        assert_eq!(report.score, 9);
    }

    #[test]
    fn blocks_the_only_losing_threat() {
        let grid = Grid::from_string("XX. .O. ...").unwrap();
        let mut search = AlphaBeta::with_seed(Mark::Nought, 11);

        let report = search.analyze(&grid).unwrap();
        assert_eq!(report.best_move().unwrap(), Square::new(2, 0));
        assert_eq!(report.score, 0);
    }

    #[test]
    fn prunes_relative_to_plain_minimax() {
        let grid = Grid::from_string("O.. .X. ...").unwrap();
        let mut plain = Minimax::with_seed(Mark::Nought, 9).with_tie_break(TieBreak::First);
        let mut pruned = AlphaBeta::with_seed(Mark::Nought, 9).with_tie_break(TieBreak::First);

        let full = plain.analyze(&grid).unwrap();
        let cut = pruned.analyze(&grid).unwrap();
        assert_eq!(full.score, cut.score);
        assert_eq!(full.best_move().unwrap(), cut.best_move().unwrap());
        assert!(cut.nodes < full.nodes);
    }

    #[test]
    fn input_grid_is_untouched_despite_cutoffs() {
        // Pruning returns early mid-enumeration; the scoped placement must
        // still have restored every explored square
        let grid = Grid::from_string("OX. X.O ...").unwrap();
        let copy = grid;
        let mut search = AlphaBeta::with_seed(Mark::Nought, 13);

        search.analyze(&grid).unwrap();
        assert_eq!(grid, copy);

        let again = search.analyze(&grid).unwrap();
        assert!(grid.is_empty(again.best_move().unwrap()));
    }

    #[test]
    fn full_grid_has_no_move() {
        let grid = Grid::from_string("OXO XXO OOX").unwrap();
        let mut search = AlphaBeta::with_seed(Mark::Cross, 1);
        assert!(matches!(
            search.analyze(&grid),
            Err(crate::Error::NoValidMoves)
        ));
    }
}
