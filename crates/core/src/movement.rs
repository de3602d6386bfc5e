//! Movement module - the active piece and its collision rules
//!
//! An [`ActivePiece`] is a plain value: kind, rotation and the anchor of its
//! bounding box. Its occupancy is derived from the shape catalog on demand
//! and never written to the grid until the piece locks.
//!
//! The anchor is signed because a bounding box may hang past the left, right
//! or bottom edge as long as its filled cells stay inside the grid (the
//! "overhang" of the mask in that direction).
//!
//! Collision against settled cells works on row bit sets: each mask row is
//! shifted to its absolute columns and ANDed with the grid row underneath.
//! The same test covers all three nudge directions.

use tracing::trace;

use crate::grid::Grid;
use crate::pieces::{shape_of, shape_size, ShapeMask};
use crate::types::{Direction, PieceKind, Rotation, GRID_DEPTH, GRID_WIDTH};

/// Active falling piece
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ActivePiece {
    pub kind: PieceKind,
    pub rotation: Rotation,
    /// Left column of the bounding box
    pub x: i8,
    /// Top row of the bounding box
    pub y: i8,
}

/// Spawn anchor for a piece kind
///
/// The box is centered with its half width rounded up, so odd widths sit one
/// column left of center.
pub fn spawn_position(kind: PieceKind) -> (i8, i8) {
    let size = shape_size(kind);
    let x = GRID_WIDTH / 2 - (size + 1) / 2;
    (x as i8, 0)
}

/// Shift a mask row onto absolute grid columns
#[inline]
fn place_row(bits: u8, x: i8) -> u16 {
    let bits = bits as u16;
    if x >= 0 {
        bits << x
    } else {
        bits >> -x
    }
}

impl ActivePiece {
    /// Create a new piece at its spawn position
    pub fn new(kind: PieceKind) -> Self {
        let (x, y) = spawn_position(kind);
        Self {
            kind,
            rotation: Rotation::North,
            x,
            y,
        }
    }

    /// Get the mask for the current rotation
    pub fn shape(&self) -> &'static ShapeMask {
        shape_of(self.kind, self.rotation)
    }

    /// Absolute (col, row) of every filled cell
    pub fn cells(&self) -> impl Iterator<Item = (i32, i32)> + '_ {
        let (x, y) = (self.x as i32, self.y as i32);
        self.shape()
            .cells()
            .map(move |(col, row)| (x + col as i32, y + row as i32))
    }

    /// Check that every filled cell lies inside the grid
    pub fn in_bounds(&self) -> bool {
        self.cells().all(|(col, row)| {
            (0..GRID_WIDTH as i32).contains(&col) && (0..GRID_DEPTH as i32).contains(&row)
        })
    }

    /// Check if any filled cell overlaps a settled cell
    ///
    /// The piece must be in bounds.
    pub fn collides(&self, grid: &Grid) -> bool {
        let shape = self.shape();
        (0..shape.size()).any(|r| {
            let bits = shape.row_bits(r);
            if bits == 0 {
                return false;
            }
            let row = (self.y as i32 + r as i32) as usize;
            place_row(bits, self.x) & grid.row_bits(row) != 0
        })
    }

    /// Keep the filled cells inside the wall the piece is moving towards
    fn clamp_towards(&mut self, direction: Direction) {
        let shape = self.shape();
        let size = shape.size() as i8;
        match direction {
            Direction::Left => {
                let min_x = -(shape.leading_empty_cols() as i8);
                self.x = self.x.max(min_x);
            }
            Direction::Right => {
                let max_x = GRID_WIDTH as i8 - size + shape.trailing_empty_cols() as i8;
                self.x = self.x.min(max_x);
            }
            Direction::Down => {
                let max_y = GRID_DEPTH as i8 - size + shape.trailing_empty_rows() as i8;
                self.y = self.y.min(max_y);
            }
        }
    }

    /// The piece moved one cell in `direction`, or `None` if it cannot move
    pub fn nudged(&self, grid: &Grid, direction: Direction) -> Option<ActivePiece> {
        let (dx, dy) = direction.offset();
        let mut moved = ActivePiece {
            x: self.x + dx,
            y: self.y + dy,
            ..*self
        };
        moved.clamp_towards(direction);

        if moved == *self {
            return None;
        }
        if moved.collides(grid) {
            trace!(kind = ?self.kind, ?direction, "nudge blocked by settled cells");
            return None;
        }
        Some(moved)
    }

    /// The piece turned a quarter in place, or `None` if the new orientation
    /// would leave the grid
    ///
    /// Settled cells are not consulted and the anchor never moves.
    pub fn rotated(&self, clockwise: bool) -> Option<ActivePiece> {
        let rotation = if clockwise {
            self.rotation.rotate_cw()
        } else {
            self.rotation.rotate_ccw()
        };
        let turned = ActivePiece { rotation, ..*self };
        if turned.in_bounds() {
            Some(turned)
        } else {
            trace!(kind = ?self.kind, ?rotation, "rotation would leave the grid");
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Cell;

    #[test]
    fn test_spawn_positions() {
        assert_eq!(spawn_position(PieceKind::I), (3, 0));
        assert_eq!(spawn_position(PieceKind::O), (4, 0));
        for kind in [PieceKind::T, PieceKind::S, PieceKind::Z, PieceKind::J, PieceKind::L] {
            assert_eq!(spawn_position(kind), (3, 0), "{:?}", kind);
        }
    }

    #[test]
    fn test_place_row_negative_anchor() {
        // I piece East at x = -2 occupies column 0 only.
        assert_eq!(place_row(0b0100, -2), 0b1);
        assert_eq!(place_row(0b0111, 3), 0b11_1000);
    }

    #[test]
    fn test_cells_are_absolute() {
        let piece = ActivePiece::new(PieceKind::O);
        let cells: Vec<_> = piece.cells().collect();
        assert_eq!(cells, vec![(4, 0), (5, 0), (4, 1), (5, 1)]);
    }

    #[test]
    fn test_nudge_left_stops_at_wall_with_overhang() {
        let grid = Grid::new();
        let mut piece = ActivePiece {
            rotation: Rotation::East,
            ..ActivePiece::new(PieceKind::I)
        };
        while let Some(next) = piece.nudged(&grid, Direction::Left) {
            piece = next;
        }
        // The filled column (2) reached grid column 0.
        assert_eq!(piece.x, -2);
        assert!(piece.in_bounds());
    }

    #[test]
    fn test_nudge_down_blocked_by_settled_cell() {
        let mut grid = Grid::new();
        grid.set_cell(4, 2, Cell::Red);
        let piece = ActivePiece::new(PieceKind::O);
        assert!(piece.nudged(&grid, Direction::Down).is_none());
    }

    #[test]
    fn test_nudge_right_blocked_by_settled_cell() {
        let mut grid = Grid::new();
        grid.set_cell(6, 1, Cell::Blue);
        let piece = ActivePiece::new(PieceKind::O);
        assert!(piece.nudged(&grid, Direction::Right).is_none());
        assert!(piece.nudged(&grid, Direction::Left).is_some());
    }

    #[test]
    fn test_rotation_refused_outside_grid() {
        // I piece West hugging the left wall: filled column 1 at grid column 0.
        let piece = ActivePiece {
            kind: PieceKind::I,
            rotation: Rotation::West,
            x: -1,
            y: 5,
        };
        assert!(piece.in_bounds());
        assert!(piece.rotated(true).is_none());
        assert!(piece.rotated(false).is_none());
    }

    #[test]
    fn test_rotation_ignores_settled_cells() {
        let mut grid = Grid::new();
        grid.set_cell(5, 1, Cell::Red);
        let piece = ActivePiece::new(PieceKind::T);
        assert!(!piece.collides(&grid));

        let turned = piece.rotated(true).expect("in bounds");
        assert_eq!(turned.rotation, Rotation::East);
        assert_eq!((turned.x, turned.y), (piece.x, piece.y));
        // Turning into settled cells is allowed; only nudges consult the grid.
        assert!(turned.collides(&grid));
    }
}
