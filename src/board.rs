//! Board vocabulary: cells, marks, squares, the grid, and outcome classification

pub mod grid;
pub mod outcome;

pub use grid::{BOARD_SIZE, Cell, Grid, Mark, Placement, Square};
pub use outcome::Outcome;
