// THEORY:
// `Identicon` is the aggregate result of the pure half of the system. It bundles
// every intermediate value of the transform (digest, color, grid, retained cells,
// rectangles) together with a name derived from the input. It is built once and
// never mutated; the renderer only reads its color and rectangles.
//
// Construction runs the five stages in order:
//   input bytes -> digest -> color
//                        \-> grid -> even cells -> rectangles

use crate::core_modules::cell::{GridCell, filter_even};
use crate::core_modules::color::color::{Color, extract_color};
use crate::core_modules::digest::digest::{self, Digest};
use crate::core_modules::grid::{Grid, build_grid};
use crate::core_modules::rectangle::{Rectangle, map_to_rectangles};

const FILE_EXTENSION: &str = "png";

/// A fully derived identicon, ready to render.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Identicon {
    /// The input decoded as UTF-8 (invalid sequences replaced). Names the output file.
    pub name: String,
    pub digest: Digest,
    pub color: Color,
    pub grid: Grid,
    /// Even-valued grid cells, ascending by index.
    pub cells: Vec<GridCell>,
    /// One 50x50 square per entry in `cells`, same order.
    pub rectangles: Vec<Rectangle>,
}

impl Identicon {
    pub fn new(input: &[u8]) -> Self {
        let name = String::from_utf8_lossy(input).into_owned();
        let digest = digest::digest(input);
        let color = extract_color(&digest);
        let grid = build_grid(&digest);
        let cells = filter_even(&grid);
        let rectangles = map_to_rectangles(&cells);

        log::debug!(
            "identicon {name:?}: digest {}, color ({}, {}, {}), {} of {} cells filled",
            digest::to_hex(&digest),
            color.red,
            color.green,
            color.blue,
            cells.len(),
            grid.len(),
        );

        Self {
            name,
            digest,
            color,
            grid,
            cells,
            rectangles,
        }
    }

    /// The output file name, `<name>.png`.
    pub fn file_name(&self) -> String {
        format!("{}.{FILE_EXTENSION}", self.name)
    }

    pub fn digest_hex(&self) -> String {
        digest::to_hex(&self.digest)
    }
}

impl From<&str> for Identicon {
    fn from(input: &str) -> Self {
        Identicon::new(input.as_bytes())
    }
}
