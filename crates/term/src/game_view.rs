//! GameView: maps core snapshots into text.
//!
//! This module is pure (no I/O). Every routine appends to a caller-owned
//! `String` so one buffer can be reused across commands.

use crate::core::{CompositeSnapshot, GridSnapshot, PieceSnapshot};

/// Append one row of tokens, each followed by a space, plus a newline
fn push_row(buf: &mut String, tokens: impl IntoIterator<Item = char>) {
    for token in tokens {
        buf.push(token);
        buf.push(' ');
    }
    buf.push('\n');
}

/// Settled grid, lower case tokens
pub fn push_grid(buf: &mut String, snap: &GridSnapshot) {
    for row in snap.rows() {
        push_row(buf, row.iter().map(|cell| cell.as_char()));
    }
}

/// Grid with the active piece in upper case
pub fn push_composite(buf: &mut String, snap: &CompositeSnapshot) {
    for row in snap.rows() {
        push_row(buf, row.iter().map(|tile| tile.as_char()));
    }
}

/// Active piece mask in its own bounding box
pub fn push_piece(buf: &mut String, snap: &PieceSnapshot) {
    for row in snap.rows() {
        push_row(buf, row.iter().map(|cell| cell.as_char()));
    }
}

/// A counter on its own line
pub fn push_count(buf: &mut String, value: u32) {
    buf.push_str(&value.to_string());
    buf.push('\n');
}
