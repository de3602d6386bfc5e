//! Command stream reader.
//!
//! Commands are single characters separated by optional ASCII whitespace,
//! except for the `?` queries whose letter is the character right after the
//! `?`, whitespace included. A grid load (`g`) consumes the next
//! `GRID_WIDTH * GRID_DEPTH` non-whitespace characters as cell tokens.

use std::io::{self, BufRead};

use arrayvec::ArrayVec;

use crate::map::{map_char, map_query, Token};
use crate::types::{GRID_DEPTH, GRID_WIDTH};

/// Cell tokens of a grid read from the stream, row by row
pub type GridRows = ArrayVec<ArrayVec<char, GRID_WIDTH>, GRID_DEPTH>;

/// Tokenizer over a character stream
pub struct CommandReader<I> {
    chars: I,
}

impl<I: Iterator<Item = char>> CommandReader<I> {
    pub fn new(chars: I) -> Self {
        Self { chars }
    }

    fn next_significant(&mut self) -> Option<char> {
        self.chars.by_ref().find(|&c| !is_separator(c))
    }

    /// Next command token, `None` at end of input
    pub fn next_token(&mut self) -> Option<Token> {
        let c = self.next_significant()?;
        if c == '?' {
            return self.chars.next().map(map_query);
        }
        Some(map_char(c))
    }

    /// Read one grid worth of cell tokens
    ///
    /// Stops early at end of input; the missing cells are simply absent from
    /// the returned rows.
    pub fn read_grid(&mut self) -> GridRows {
        let mut rows = GridRows::new();
        while !rows.is_full() {
            let mut row = ArrayVec::new();
            while !row.is_full() {
                match self.next_significant() {
                    Some(c) => row.push(c),
                    None => break,
                }
            }
            let short = !row.is_full();
            if !row.is_empty() {
                rows.push(row);
            }
            if short {
                break;
            }
        }
        rows
    }
}

/// Token separators: ASCII space, tab, line feed, vertical tab, form feed and
/// carriage return
pub fn is_separator(c: char) -> bool {
    c.is_ascii_whitespace() || c == '\x0b'
}

/// Characters of a buffered UTF-8 byte stream
///
/// Input is decoded line by line; invalid sequences become U+FFFD. Iteration
/// ends at end of input or at the first read error; the error is
/// kept for [`InputChars::take_error`] so callers can still report it.
pub struct InputChars<R> {
    input: R,
    buf: Vec<u8>,
    line: String,
    pos: usize,
    error: Option<io::Error>,
}

impl<R: BufRead> InputChars<R> {
    pub fn new(input: R) -> Self {
        Self {
            input,
            buf: Vec::with_capacity(256),
            line: String::with_capacity(256),
            pos: 0,
            error: None,
        }
    }

    /// The read error that ended iteration, if any
    pub fn take_error(&mut self) -> Option<io::Error> {
        self.error.take()
    }
}

impl<R: BufRead> Iterator for InputChars<R> {
    type Item = char;

    fn next(&mut self) -> Option<char> {
        if self.error.is_some() {
            return None;
        }
        while self.pos >= self.line.len() {
            self.buf.clear();
            self.line.clear();
            self.pos = 0;
            match self.input.read_until(b'\n', &mut self.buf) {
                Ok(0) => return None,
                Ok(_) => self.line.push_str(&String::from_utf8_lossy(&self.buf)),
                Err(e) if e.kind() == io::ErrorKind::Interrupted => {}
                Err(e) => {
                    self.error = Some(e);
                    return None;
                }
            }
        }
        let c = self.line[self.pos..].chars().next()?;
        self.pos += c.len_utf8();
        Some(c)
    }
}
