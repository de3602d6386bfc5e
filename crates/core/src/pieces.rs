//! Pieces module - shape catalog
//!
//! Every (kind, rotation) pair maps to a square occupancy mask. Rotations are
//! successive clockwise quarter turns of the bounding box, so the I piece
//! walks row 1, column 2, row 2, column 1.
//!
//! Masks store one bit set per row: bit `c` of row `r` is set when column `c`
//! of the bounding box is filled. The collision engine shifts those rows
//! straight onto the grid's row bit sets.

use crate::types::{PieceKind, Rotation};

/// Largest bounding box in the catalog (the I piece)
pub const MAX_SHAPE_SIZE: usize = 4;

/// Occupancy mask of one piece orientation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ShapeMask {
    size: u8,
    rows: [u8; MAX_SHAPE_SIZE],
}

/// Build a mask from the offsets `(x, y)` of its four filled cells
const fn mask(size: u8, cells: [(u8, u8); 4]) -> ShapeMask {
    let mut rows = [0u8; MAX_SHAPE_SIZE];
    let mut i = 0;
    while i < 4 {
        let (x, y) = cells[i];
        rows[y as usize] |= 1 << x;
        i += 1;
    }
    ShapeMask { size, rows }
}

impl ShapeMask {
    /// Width (and height) of the bounding box
    #[inline]
    pub fn size(&self) -> usize {
        self.size as usize
    }

    /// Filled columns of `row` as a bit set; rows past the box are empty
    #[inline]
    pub fn row_bits(&self, row: usize) -> u8 {
        if row < self.size() {
            self.rows[row]
        } else {
            0
        }
    }

    pub fn is_filled(&self, col: usize, row: usize) -> bool {
        col < self.size() && self.row_bits(row) & (1 << col) != 0
    }

    /// Offsets `(col, row)` of every filled cell, row by row
    pub fn cells(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        let size = self.size();
        (0..size).flat_map(move |row| {
            (0..size)
                .filter(move |&col| self.is_filled(col, row))
                .map(move |col| (col, row))
        })
    }

    fn column_union(&self) -> u8 {
        self.rows.iter().fold(0, |acc, bits| acc | bits)
    }

    fn first_filled_row(&self) -> usize {
        (0..self.size())
            .find(|&row| self.rows[row] != 0)
            .unwrap_or(self.size())
    }

    fn last_filled_row(&self) -> usize {
        (0..self.size())
            .rev()
            .find(|&row| self.rows[row] != 0)
            .unwrap_or(0)
    }

    /// Empty columns on the left edge of the box
    pub fn leading_empty_cols(&self) -> usize {
        self.column_union().trailing_zeros() as usize
    }

    /// Empty columns on the right edge of the box
    pub fn trailing_empty_cols(&self) -> usize {
        let highest = 7 - self.column_union().leading_zeros() as usize;
        self.size() - 1 - highest
    }

    /// Empty rows on the top edge of the box
    pub fn leading_empty_rows(&self) -> usize {
        self.first_filled_row()
    }

    /// Empty rows on the bottom edge of the box
    pub fn trailing_empty_rows(&self) -> usize {
        self.size() - 1 - self.last_filled_row()
    }
}

/// Get the mask for a piece kind and rotation
pub fn shape_of(kind: PieceKind, rotation: Rotation) -> &'static ShapeMask {
    let by_rotation = match kind {
        PieceKind::I => &I_SHAPES,
        PieceKind::O => &O_SHAPES,
        PieceKind::T => &T_SHAPES,
        PieceKind::S => &S_SHAPES,
        PieceKind::Z => &Z_SHAPES,
        PieceKind::J => &J_SHAPES,
        PieceKind::L => &L_SHAPES,
    };
    &by_rotation[rotation.index()]
}

/// Bounding box size of a piece kind
pub fn shape_size(kind: PieceKind) -> usize {
    shape_of(kind, Rotation::North).size()
}

static I_SHAPES: [ShapeMask; 4] = [
    // N: horizontal on row 1
    mask(4, [(0, 1), (1, 1), (2, 1), (3, 1)]),
    // E: vertical on column 2
    mask(4, [(2, 0), (2, 1), (2, 2), (2, 3)]),
    // S: horizontal on row 2
    mask(4, [(0, 2), (1, 2), (2, 2), (3, 2)]),
    // W: vertical on column 1
    mask(4, [(1, 0), (1, 1), (1, 2), (1, 3)]),
];

// Same square for every rotation.
static O_SHAPES: [ShapeMask; 4] = [
    mask(2, [(0, 0), (1, 0), (0, 1), (1, 1)]),
    mask(2, [(0, 0), (1, 0), (0, 1), (1, 1)]),
    mask(2, [(0, 0), (1, 0), (0, 1), (1, 1)]),
    mask(2, [(0, 0), (1, 0), (0, 1), (1, 1)]),
];

static T_SHAPES: [ShapeMask; 4] = [
    mask(3, [(1, 0), (0, 1), (1, 1), (2, 1)]),
    mask(3, [(1, 0), (1, 1), (2, 1), (1, 2)]),
    mask(3, [(0, 1), (1, 1), (2, 1), (1, 2)]),
    mask(3, [(1, 0), (0, 1), (1, 1), (1, 2)]),
];

static S_SHAPES: [ShapeMask; 4] = [
    mask(3, [(1, 0), (2, 0), (0, 1), (1, 1)]),
    mask(3, [(1, 0), (1, 1), (2, 1), (2, 2)]),
    mask(3, [(1, 1), (2, 1), (0, 2), (1, 2)]),
    mask(3, [(0, 0), (0, 1), (1, 1), (1, 2)]),
];

static Z_SHAPES: [ShapeMask; 4] = [
    mask(3, [(0, 0), (1, 0), (1, 1), (2, 1)]),
    mask(3, [(2, 0), (1, 1), (2, 1), (1, 2)]),
    mask(3, [(0, 1), (1, 1), (1, 2), (2, 2)]),
    mask(3, [(1, 0), (0, 1), (1, 1), (0, 2)]),
];

static J_SHAPES: [ShapeMask; 4] = [
    mask(3, [(0, 0), (0, 1), (1, 1), (2, 1)]),
    mask(3, [(1, 0), (2, 0), (1, 1), (1, 2)]),
    mask(3, [(0, 1), (1, 1), (2, 1), (2, 2)]),
    mask(3, [(1, 0), (1, 1), (0, 2), (1, 2)]),
];

static L_SHAPES: [ShapeMask; 4] = [
    mask(3, [(2, 0), (0, 1), (1, 1), (2, 1)]),
    mask(3, [(1, 0), (1, 1), (1, 2), (2, 2)]),
    mask(3, [(0, 1), (1, 1), (2, 1), (0, 2)]),
    mask(3, [(0, 0), (1, 0), (1, 1), (1, 2)]),
];
