//! TextRenderer: writes game views to an output stream.
//!
//! Output is staged in a reusable buffer and written once per command.

use std::io::Write;

use anyhow::Result;

use crate::core::{CompositeSnapshot, GridSnapshot, PieceSnapshot};
use crate::game_view::{push_composite, push_count, push_grid, push_piece};

pub struct TextRenderer<W: Write> {
    out: W,
    buf: String,
}

impl<W: Write> TextRenderer<W> {
    pub fn new(out: W) -> Self {
        Self {
            out,
            buf: String::with_capacity(1024),
        }
    }

    fn write_buf(&mut self) -> Result<()> {
        self.out.write_all(self.buf.as_bytes())?;
        self.buf.clear();
        Ok(())
    }

    pub fn grid(&mut self, snap: &GridSnapshot) -> Result<()> {
        push_grid(&mut self.buf, snap);
        self.write_buf()
    }

    pub fn composite(&mut self, snap: &CompositeSnapshot) -> Result<()> {
        push_composite(&mut self.buf, snap);
        self.write_buf()
    }

    /// Active piece mask; nothing is written when no piece is falling
    pub fn piece(&mut self, snap: Option<&PieceSnapshot>) -> Result<()> {
        if let Some(snap) = snap {
            push_piece(&mut self.buf, snap);
        }
        self.write_buf()
    }

    pub fn count(&mut self, value: u32) -> Result<()> {
        push_count(&mut self.buf, value);
        self.write_buf()
    }

    pub fn newline(&mut self) -> Result<()> {
        self.buf.push('\n');
        self.write_buf()
    }

    pub fn unknown_command(&mut self, token: char) -> Result<()> {
        self.buf.push_str("unknown command ");
        self.buf.push(token);
        self.buf.push('\n');
        self.write_buf()
    }

    pub fn flush(&mut self) -> Result<()> {
        self.out.flush()?;
        Ok(())
    }

    /// Recover the underlying writer
    pub fn into_inner(self) -> W {
        self.out
    }
}
