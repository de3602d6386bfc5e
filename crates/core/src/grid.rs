//! Grid module - the playing field
//!
//! The grid is a 10x22 array of cells stored flat in row-major order.
//! Coordinates: (col, row) where col ranges 0..9 (left to right) and row
//! ranges 0..21 (top to bottom).
//!
//! Accessors taking `usize` coordinates treat an out-of-range coordinate as a
//! bug in the caller and panic. The collision engine validates every
//! coordinate before it reaches the grid.

use arrayvec::ArrayVec;

use crate::config::ClearMode;
use crate::types::{Cell, GRID_DEPTH, GRID_WIDTH};

/// Total number of cells on the grid
const GRID_SIZE: usize = GRID_WIDTH * GRID_DEPTH;

/// Row bit set with every column occupied
const FULL_ROW: u16 = (1 << GRID_WIDTH) - 1;

/// The playing field - 10 columns x 22 rows using flat array storage
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Grid {
    /// Flat array of cells, row-major order (row * WIDTH + col)
    cells: [Cell; GRID_SIZE],
}

impl Grid {
    /// Create a new empty grid
    pub fn new() -> Self {
        Self {
            cells: [Cell::Empty; GRID_SIZE],
        }
    }

    #[inline(always)]
    fn index(col: usize, row: usize) -> usize {
        assert!(
            col < GRID_WIDTH && row < GRID_DEPTH,
            "grid access out of bounds: ({}, {})",
            col,
            row
        );
        row * GRID_WIDTH + col
    }

    /// Cell at (col, row). Panics when out of bounds.
    pub fn cell_at(&self, col: usize, row: usize) -> Cell {
        self.cells[Self::index(col, row)]
    }

    /// Set cell at (col, row). Panics when out of bounds.
    pub fn set_cell(&mut self, col: usize, row: usize, value: Cell) {
        self.cells[Self::index(col, row)] = value;
    }

    pub fn is_occupied(&self, col: usize, row: usize) -> bool {
        self.cell_at(col, row).is_occupied()
    }

    /// Occupied columns of `row` as a bit set (bit `c` = column `c`)
    pub fn row_bits(&self, row: usize) -> u16 {
        self.row(row)
            .iter()
            .enumerate()
            .filter(|(_, cell)| cell.is_occupied())
            .fold(0, |bits, (col, _)| bits | (1 << col))
    }

    /// Cells of one row. Panics when out of bounds.
    pub fn row(&self, row: usize) -> &[Cell] {
        let start = Self::index(0, row);
        &self.cells[start..start + GRID_WIDTH]
    }

    /// All rows, top to bottom
    pub fn rows(&self) -> impl Iterator<Item = &[Cell]> + '_ {
        self.cells.chunks_exact(GRID_WIDTH)
    }

    /// Flat view of every cell
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    pub fn occupied_count(&self) -> usize {
        self.cells.iter().filter(|cell| cell.is_occupied()).count()
    }

    /// Check if a row is completely filled
    pub fn row_is_full(&self, row: usize) -> bool {
        self.row_bits(row) == FULL_ROW
    }

    /// Empty every cell of `row`; rows above keep their contents
    pub fn clear_row(&mut self, row: usize) {
        let start = Self::index(0, row);
        self.cells[start..start + GRID_WIDTH].fill(Cell::Empty);
    }

    /// Remove `row`, shift all rows above down and empty the top row
    pub fn collapse_row(&mut self, row: usize) {
        let end = Self::index(0, row);
        // copy_within handles the overlapping ranges
        self.cells.copy_within(0..end, GRID_WIDTH);
        self.cells[..GRID_WIDTH].fill(Cell::Empty);
    }

    /// Clear every full row top to bottom and return the cleared row indices
    pub fn clear_full_rows(&mut self, mode: ClearMode) -> ArrayVec<usize, GRID_DEPTH> {
        let mut cleared = ArrayVec::new();
        // Collapsing a row only moves rows above it, so the rows still to be
        // scanned keep their indices.
        for row in 0..GRID_DEPTH {
            if !self.row_is_full(row) {
                continue;
            }
            match mode {
                ClearMode::InPlace => self.clear_row(row),
                ClearMode::Collapse => self.collapse_row(row),
            }
            cleared.push(row);
        }
        cleared
    }

    /// Clear the entire grid
    pub fn clear(&mut self) {
        self.cells.fill(Cell::Empty);
    }

    /// Replace the grid with rows of cell tokens
    ///
    /// Tokens outside the recognized set become empty cells, as do cells the
    /// input does not reach. Extra rows and columns are ignored.
    pub fn load_rows<R, T>(&mut self, rows: R)
    where
        R: IntoIterator<Item = T>,
        T: IntoIterator<Item = char>,
    {
        self.clear();
        for (row, tokens) in rows.into_iter().take(GRID_DEPTH).enumerate() {
            for (col, token) in tokens.into_iter().take(GRID_WIDTH).enumerate() {
                self.set_cell(col, row, Cell::from_token(token));
            }
        }
    }
}

impl Default for Grid {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fill_row(grid: &mut Grid, row: usize, cell: Cell) {
        for col in 0..GRID_WIDTH {
            grid.set_cell(col, row, cell);
        }
    }

    #[test]
    fn test_grid_index_calculation() {
        assert_eq!(Grid::index(0, 0), 0);
        assert_eq!(Grid::index(9, 0), 9);
        assert_eq!(Grid::index(0, 1), 10);
        assert_eq!(Grid::index(9, 21), 219);
    }

    #[test]
    #[should_panic(expected = "out of bounds")]
    fn test_index_col_out_of_bounds_panics() {
        Grid::index(GRID_WIDTH, 0);
    }

    #[test]
    #[should_panic(expected = "out of bounds")]
    fn test_set_row_out_of_bounds_panics() {
        Grid::new().set_cell(0, GRID_DEPTH, Cell::Red);
    }

    #[test]
    fn test_row_bits() {
        let mut grid = Grid::new();
        grid.set_cell(0, 3, Cell::Red);
        grid.set_cell(9, 3, Cell::Blue);
        assert_eq!(grid.row_bits(3), 0b10_0000_0001);
        assert_eq!(grid.row_bits(4), 0);

        fill_row(&mut grid, 5, Cell::Green);
        assert_eq!(grid.row_bits(5), FULL_ROW);
    }

    #[test]
    fn test_collapse_row_shifts_rows_above() {
        let mut grid = Grid::new();
        grid.set_cell(2, 0, Cell::Cyan);
        grid.set_cell(4, 19, Cell::Orange);
        fill_row(&mut grid, 20, Cell::Red);
        grid.set_cell(7, 21, Cell::Yellow);

        grid.collapse_row(20);

        assert_eq!(grid.cell_at(2, 0), Cell::Empty);
        assert_eq!(grid.cell_at(2, 1), Cell::Cyan);
        assert_eq!(grid.cell_at(4, 20), Cell::Orange);
        assert_eq!(grid.cell_at(7, 21), Cell::Yellow);
        assert_eq!(grid.occupied_count(), 3);
    }

    #[test]
    fn test_collapse_top_row() {
        let mut grid = Grid::new();
        fill_row(&mut grid, 0, Cell::Magenta);
        grid.collapse_row(0);
        assert_eq!(grid, Grid::new());
    }

    #[test]
    fn test_clear_full_rows_collapse_keeps_lower_indices() {
        let mut grid = Grid::new();
        fill_row(&mut grid, 10, Cell::Red);
        grid.set_cell(3, 11, Cell::Blue);
        fill_row(&mut grid, 12, Cell::Green);
        grid.set_cell(5, 9, Cell::Cyan);

        let cleared = grid.clear_full_rows(ClearMode::Collapse);

        assert_eq!(cleared.as_slice(), &[10, 12]);
        // Row 9 fell two rows, row 11 fell one.
        assert_eq!(grid.cell_at(5, 11), Cell::Cyan);
        assert_eq!(grid.cell_at(3, 12), Cell::Blue);
        assert_eq!(grid.occupied_count(), 2);
    }
}
