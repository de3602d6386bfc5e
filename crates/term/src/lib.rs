//! Text rendering module.
//!
//! Renders grid, composite and piece snapshots as rows of single-character
//! cell tokens separated by spaces, the display format of the command
//! interface.
//!
//! - [`game_view`]: pure formatting into a `String`
//! - [`renderer`]: writes formatted views to any `io::Write`

pub mod game_view;
pub mod renderer;

pub use learntris_core as core;
pub use learntris_types as types;

pub use game_view::{push_composite, push_count, push_grid, push_piece};
pub use renderer::TextRenderer;
