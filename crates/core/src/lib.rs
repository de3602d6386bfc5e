//! Core game logic module - pure, deterministic, and testable
//!
//! This module contains the rules of the falling-piece puzzle: the grid, the
//! piece shapes, movement and collision, locking and line clearing. It has
//! **zero dependencies** on terminals, input parsing or I/O.
//!
//! # Module Structure
//!
//! - [`pieces`]: shape catalog, one occupancy mask per kind and rotation
//! - [`grid`]: 10x22 cell store with row inspection and row clearing
//! - [`movement`]: the active piece, spawn placement, nudges and rotation
//! - [`session`]: the game session, locking, line clears and counters
//! - [`config`]: rule switches (how cleared rows are removed)
//! - [`snapshot`]: read-only copies for display code
//!
//! # Rules
//!
//! - Pieces spawn at the top, centered (half width rounded up)
//! - Rotation is a plain quarter turn: no wall kicks, settled cells are not
//!   consulted, only the grid edges
//! - Nudges are blocked by the grid edges and by settled cells
//! - A hard drop moves the piece down until it rests, then locks it
//! - A step clears every full row for a flat 100 points each
//!
//! # Example
//!
//! ```
//! use learntris_core::GameSession;
//! use learntris_types::PieceKind;
//!
//! let mut session = GameSession::default();
//! session.spawn(PieceKind::O);
//! session.nudge_left();
//! session.rotate_right();
//! assert!(session.hard_drop());
//!
//! assert!(session.active().is_none());
//! assert_eq!(session.grid().occupied_count(), 4);
//! assert_eq!(session.step(), 0);
//! ```

pub mod config;
pub mod grid;
pub mod movement;
pub mod pieces;
pub mod session;
pub mod snapshot;

pub use learntris_types as types;

// Re-export commonly used types for convenience
pub use config::{ClearMode, Rules};
pub use grid::Grid;
pub use movement::{spawn_position, ActivePiece};
pub use pieces::{shape_of, ShapeMask};
pub use session::GameSession;
pub use snapshot::{CompositeSnapshot, GridSnapshot, PieceSnapshot, Tile};
