//! Command dispatcher: reads tokens, drives the session, prints views.

use std::io::{BufRead, Write};

use anyhow::{Context, Result};
use tracing::debug;

use crate::core::{GameSession, Rules};
use crate::input::{should_quit, CommandReader, InputChars, Token};
use crate::term::TextRenderer;
use crate::types::Command;

pub struct App {
    session: GameSession,
}

impl App {
    pub fn new(rules: Rules) -> Self {
        Self {
            session: GameSession::new(rules),
        }
    }

    pub fn session(&self) -> &GameSession {
        &self.session
    }

    /// Process commands until `q` or end of input
    pub fn run<R: BufRead, W: Write>(&mut self, input: R, output: W) -> Result<()> {
        let mut chars = InputChars::new(input);
        let mut renderer = TextRenderer::new(output);

        let mut reader = CommandReader::new(chars.by_ref());
        while let Some(token) = reader.next_token() {
            if should_quit(token) {
                break;
            }
            match token {
                Token::Command(command) => self.dispatch(command, &mut reader, &mut renderer)?,
                Token::Unknown(c) => {
                    debug!(token = %c, "unknown command");
                    renderer.unknown_command(c)?;
                }
            }
            renderer.flush()?;
        }
        renderer.flush()?;

        if let Some(err) = chars.take_error() {
            return Err(err).context("failed to read commands");
        }
        Ok(())
    }

    fn dispatch<I, W>(
        &mut self,
        command: Command,
        reader: &mut CommandReader<I>,
        renderer: &mut TextRenderer<W>,
    ) -> Result<()>
    where
        I: Iterator<Item = char>,
        W: Write,
    {
        debug!(?command, "dispatch");
        let session = &mut self.session;
        match command {
            Command::Quit => {}
            Command::PrintGrid => renderer.grid(&session.dump_grid())?,
            Command::PrintComposite => renderer.composite(&session.render_composite())?,
            Command::LoadGrid => session.load_grid(reader.read_grid()),
            Command::ClearGrid => session.clear_grid(),
            Command::Step => {
                session.step();
            }
            Command::PrintActive => renderer.piece(session.render_active_piece().as_ref())?,
            Command::Spawn(kind) => session.spawn(kind),
            Command::RotateRight => {
                session.rotate_right();
            }
            Command::RotateLeft => {
                session.rotate_left();
            }
            Command::Nudge(direction) => {
                session.nudge(direction);
            }
            Command::HardDrop => {
                session.hard_drop();
            }
            Command::Newline => renderer.newline()?,
            Command::QueryScore => renderer.count(session.score())?,
            Command::QueryLines => renderer.count(session.line_count())?,
        }
        Ok(())
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new(Rules::default())
    }
}
