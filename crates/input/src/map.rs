//! Token mapping from input characters to commands.

use crate::types::Command;

/// What the reader produced for one command token
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Token {
    Command(Command),
    /// A character that names no command (reported, then ignored)
    Unknown(char),
}

/// Map a single command character.
pub fn map_char(c: char) -> Token {
    match Command::from_char(c) {
        Some(command) => Token::Command(command),
        None => Token::Unknown(c),
    }
}

/// Map the character following a `?` prefix.
pub fn map_query(c: char) -> Token {
    match Command::from_query(c) {
        Some(command) => Token::Command(command),
        None => Token::Unknown(c),
    }
}

/// Check if a token should stop the command loop.
pub fn should_quit(token: Token) -> bool {
    matches!(token, Token::Command(Command::Quit))
}
