// THEORY:
// The pixel mapper is the bridge between grid space and canvas space. A grid of
// 5x5 cells is laid over a 250x250 canvas, so every cell owns a 50x50 pixel
// square. A cell's index is split into a row (`index / 5`) and a column
// (`index % 5`), and the square's top-left corner sits at `(col * 50, row * 50)`.
//
// The 25 possible squares tile the canvas with no gaps and no overlaps. Corners
// follow the half-open convention: `bottom_right` is one past the last painted
// pixel on each axis, so a square covers `x in top_left.x..bottom_right.x`.

use crate::core_modules::cell::GridCell;
use crate::core_modules::grid::{GRID_CELLS, GRID_SIDE};

/// Edge length of one cell's square, in pixels.
pub const CELL_SIZE: u32 = 50;
/// Edge length of the whole canvas, in pixels.
pub const CANVAS_SIZE: u32 = CELL_SIZE * GRID_SIDE as u32;

/// A point in canvas pixel space.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Point {
    pub x: u32,
    pub y: u32,
}

/// A 50x50 square on the canvas.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rectangle {
    pub top_left: Point,
    pub bottom_right: Point,
}

impl Rectangle {
    /// The square owned by grid position `index`.
    ///
    /// `index` must be below 25. Upstream stages only ever produce such indices.
    pub fn from_index(index: usize) -> Self {
        debug_assert!(index < GRID_CELLS, "grid index {index} out of range");
        let row = (index / GRID_SIDE) as u32;
        let col = (index % GRID_SIDE) as u32;
        let x = col * CELL_SIZE;
        let y = row * CELL_SIZE;

        Rectangle {
            top_left: Point { x, y },
            bottom_right: Point {
                x: x + CELL_SIZE,
                y: y + CELL_SIZE,
            },
        }
    }

    pub fn width(&self) -> u32 {
        self.bottom_right.x - self.top_left.x
    }

    pub fn height(&self) -> u32 {
        self.bottom_right.y - self.top_left.y
    }

    /// True if the pixel at `(x, y)` lies inside this rectangle.
    pub fn contains(&self, x: u32, y: u32) -> bool {
        (self.top_left.x..self.bottom_right.x).contains(&x)
            && (self.top_left.y..self.bottom_right.y).contains(&y)
    }
}

/// One rectangle per cell, in the same order as `cells`.
pub fn map_to_rectangles(cells: &[GridCell]) -> Vec<Rectangle> {
    cells.iter().map(|cell| Rectangle::from_index(cell.index)).collect()
}
