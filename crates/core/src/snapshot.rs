//! Read-only copies of session state handed to display code.

use crate::movement::ActivePiece;
use crate::pieces::MAX_SHAPE_SIZE;
use crate::types::{Cell, GRID_DEPTH, GRID_WIDTH};

/// Copy of the settled grid
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GridSnapshot {
    pub cells: [[Cell; GRID_WIDTH]; GRID_DEPTH],
}

impl GridSnapshot {
    pub fn rows(&self) -> impl Iterator<Item = &[Cell; GRID_WIDTH]> + '_ {
        self.cells.iter()
    }

    pub fn cell(&self, col: usize, row: usize) -> Cell {
        self.cells[row][col]
    }
}

impl Default for GridSnapshot {
    fn default() -> Self {
        Self {
            cells: [[Cell::Empty; GRID_WIDTH]; GRID_DEPTH],
        }
    }
}

/// A displayed cell plus whether it belongs to the falling piece
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Tile {
    pub cell: Cell,
    pub active: bool,
}

impl Tile {
    /// Text token: settled cells in lower case, active cells in upper case
    pub fn as_char(&self) -> char {
        let c = self.cell.as_char();
        if self.active {
            c.to_ascii_uppercase()
        } else {
            c
        }
    }
}

/// Grid with the active piece overlaid
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CompositeSnapshot {
    pub tiles: [[Tile; GRID_WIDTH]; GRID_DEPTH],
}

impl CompositeSnapshot {
    pub fn new(grid: &GridSnapshot, active: Option<&ActivePiece>) -> Self {
        let mut tiles = [[Tile::default(); GRID_WIDTH]; GRID_DEPTH];
        for (row, cells) in grid.rows().enumerate() {
            for (col, &cell) in cells.iter().enumerate() {
                tiles[row][col] = Tile {
                    cell,
                    active: false,
                };
            }
        }
        if let Some(piece) = active {
            let color = piece.kind.color();
            for (col, row) in piece.cells() {
                tiles[row as usize][col as usize] = Tile {
                    cell: color,
                    active: true,
                };
            }
        }
        Self { tiles }
    }

    pub fn rows(&self) -> impl Iterator<Item = &[Tile; GRID_WIDTH]> + '_ {
        self.tiles.iter()
    }

    pub fn tile(&self, col: usize, row: usize) -> Tile {
        self.tiles[row][col]
    }
}

/// Mask of the active piece in its own bounding box
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PieceSnapshot {
    pub piece: ActivePiece,
    size: usize,
    cells: [[Cell; MAX_SHAPE_SIZE]; MAX_SHAPE_SIZE],
}

impl From<ActivePiece> for PieceSnapshot {
    fn from(piece: ActivePiece) -> Self {
        let shape = piece.shape();
        let color = piece.kind.color();
        let mut cells = [[Cell::Empty; MAX_SHAPE_SIZE]; MAX_SHAPE_SIZE];
        for (col, row) in shape.cells() {
            cells[row][col] = color;
        }
        Self {
            piece,
            size: shape.size(),
            cells,
        }
    }
}

impl PieceSnapshot {
    pub fn size(&self) -> usize {
        self.size
    }

    /// Rows of the bounding box, each `size` cells wide
    pub fn rows(&self) -> impl Iterator<Item = &[Cell]> + '_ {
        self.cells[..self.size].iter().map(|row| &row[..self.size])
    }
}
