// THEORY:
// The cell filter decides which grid positions get painted. A position is kept
// when its byte value is even (zero included) and dropped when it is odd. Each
// kept cell remembers its original grid index, since the index alone decides
// where its rectangle lands on the canvas. Traversal is in index order and the
// output is never reordered.

use crate::core_modules::grid::Grid;

/// A retained grid position.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GridCell {
    /// The grid byte at this position. Always even.
    pub value: u8,
    /// Row-major position in the grid, 0..25.
    pub index: usize,
}

/// Keeps the even-valued cells of `grid`, in ascending index order.
pub fn filter_even(grid: &Grid) -> Vec<GridCell> {
    grid.cells()
        .iter()
        .enumerate()
        .filter(|(_, value)| **value % 2 == 0)
        .map(|(index, &value)| GridCell { value, index })
        .collect()
}
