//! Command input module.
//!
//! This module is independent of the game core. It turns a character stream
//! into [`crate::types::Command`] tokens and reads bulk grid text for the
//! grid load command.

pub mod map;
pub mod reader;

pub use learntris_types as types;

pub use map::{map_char, map_query, should_quit, Token};
pub use reader::{is_separator, CommandReader, GridRows, InputChars};
