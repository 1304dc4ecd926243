// THEORY:
// The `Grid` is the 5x5 pattern of an identicon, stored as 25 bytes in row-major
// order (index = row * 5 + col). It is built from the digest in five rows. Each
// row reads three consecutive digest bytes `[b0, b1, b2]` and extends them with
// two copies of the middle byte, giving `[b0, b1, b2, b1, b1]`.
//
// Rows start at digest offsets 0, 3, 6, 9 and 12. A row may only start where three
// bytes remain before the final digest byte, so offset 15 never starts a row and
// the last digest byte is never read. The grid is therefore exactly 25 bytes for
// every input.

use crate::core_modules::digest::digest::{DIGEST_LEN, Digest};

/// Cells per grid side.
pub const GRID_SIDE: usize = 5;
/// Total cells in the grid.
pub const GRID_CELLS: usize = GRID_SIDE * GRID_SIDE;
/// Digest bytes consumed per row.
const ROW_SOURCE_LEN: usize = 3;

const _: () = assert!((GRID_SIDE - 1) * ROW_SOURCE_LEN + ROW_SOURCE_LEN <= DIGEST_LEN - 1);

pub type Row = [u8; GRID_SIDE];

/// The expanded 5x5 byte pattern.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    cells: [u8; GRID_CELLS],
}

impl Grid {
    /// The flat row-major cell values.
    pub fn cells(&self) -> &[u8] {
        &self.cells
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Iterates the grid one 5-byte row at a time.
    pub fn rows(&self) -> impl Iterator<Item = &[u8]> {
        self.cells.chunks_exact(GRID_SIDE)
    }
}

fn mirror_row(source: &[u8]) -> Row {
    let (b0, b1, b2) = (source[0], source[1], source[2]);
    [b0, b1, b2, b1, b1]
}

/// Expands a digest into the 25-byte grid.
pub fn build_grid(digest: &Digest) -> Grid {
    let mut cells = [0u8; GRID_CELLS];

    let starts = (0..DIGEST_LEN)
        .step_by(ROW_SOURCE_LEN)
        .take_while(|start| start + ROW_SOURCE_LEN <= DIGEST_LEN - 1);

    for (row, start) in cells.chunks_exact_mut(GRID_SIDE).zip(starts) {
        row.copy_from_slice(&mirror_row(&digest[start..start + ROW_SOURCE_LEN]));
    }

    Grid { cells }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core_modules::digest::digest::digest;

    fn sequential_digest() -> Digest {
        let mut bytes = [0u8; DIGEST_LEN];
        for (i, byte) in bytes.iter_mut().enumerate() {
            *byte = i as u8;
        }
        bytes
    }

    #[test]
    fn grid_has_twenty_five_cells() {
        for input in [&b""[..], b"bart", b"a much longer input string"] {
            assert_eq!(build_grid(&digest(input)).len(), GRID_CELLS);
        }
    }

    #[test]
    fn rows_read_offsets_zero_through_twelve() {
        let grid = build_grid(&sequential_digest());
        let expected: [u8; GRID_CELLS] = [
            0, 1, 2, 1, 1, //
            3, 4, 5, 4, 4, //
            6, 7, 8, 7, 7, //
            9, 10, 11, 10, 10, //
            12, 13, 14, 13, 13,
        ];
        assert_eq!(grid.cells(), &expected);
    }

    #[test]
    fn last_digest_byte_is_never_read() {
        let mut bytes = sequential_digest();
        let before = build_grid(&bytes);
        bytes[DIGEST_LEN - 1] = 0xff;
        assert_eq!(build_grid(&bytes), before);
    }

    #[test]
    fn every_row_repeats_its_middle_byte() {
        let grid = build_grid(&digest(b"bart"));
        assert_eq!(grid.rows().count(), GRID_SIDE);
        for row in grid.rows() {
            assert_eq!(row[3], row[1]);
            assert_eq!(row[4], row[1]);
        }
    }

    #[test]
    fn reference_grid() {
        // f54146 a3fc82 ab17e5 265695 b23f64 (6b unused)
        let grid = build_grid(&digest(b"bart"));
        let expected: [u8; GRID_CELLS] = [
            0xf5, 0x41, 0x46, 0x41, 0x41, //
            0xa3, 0xfc, 0x82, 0xfc, 0xfc, //
            0xab, 0x17, 0xe5, 0x17, 0x17, //
            0x26, 0x56, 0x95, 0x56, 0x56, //
            0xb2, 0x3f, 0x64, 0x3f, 0x3f,
        ];
        assert_eq!(grid.cells(), &expected);
    }
}
