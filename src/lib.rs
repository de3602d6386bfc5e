//! Learntris (workspace facade crate).
//!
//! Re-exports the workspace crates as `learntris::{core,input,term,types}` and
//! hosts the command dispatcher used by the `learntris` binary.

pub mod app;
pub mod config;

pub use learntris_core as core;
pub use learntris_input as input;
pub use learntris_term as term;
pub use learntris_types as types;
