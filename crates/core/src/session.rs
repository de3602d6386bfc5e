//! Game session module - owns the complete game state
//!
//! A [`GameSession`] ties the grid, the active piece and the counters
//! together. Every operation runs to completion and reports its outcome as a
//! plain return value; nothing here is an error. Callers drive the session
//! one operation at a time, there is no clock.

use tracing::debug;

use crate::config::Rules;
use crate::grid::Grid;
use crate::movement::ActivePiece;
use crate::snapshot::{CompositeSnapshot, GridSnapshot, PieceSnapshot};
use crate::types::{Direction, PieceKind, LINE_CLEAR_SCORE};

/// Complete game state
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameSession {
    grid: Grid,
    active: Option<ActivePiece>,
    score: u32,
    lines: u32,
    rules: Rules,
}

impl GameSession {
    /// Create an empty session playing by `rules`
    pub fn new(rules: Rules) -> Self {
        Self {
            grid: Grid::new(),
            active: None,
            score: 0,
            lines: 0,
            rules,
        }
    }

    /// Empty the grid, drop the active piece and zero the counters
    pub fn reset(&mut self) {
        *self = Self::new(self.rules);
    }

    pub fn rules(&self) -> Rules {
        self.rules
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn line_count(&self) -> u32 {
        self.lines
    }

    pub fn active(&self) -> Option<ActivePiece> {
        self.active
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// Empty the grid without touching the piece or the counters
    pub fn clear_grid(&mut self) {
        self.grid.clear();
    }

    /// Replace the grid with rows of cell tokens
    ///
    /// Unknown tokens load as empty cells.
    pub fn load_grid<R, T>(&mut self, rows: R)
    where
        R: IntoIterator<Item = T>,
        T: IntoIterator<Item = char>,
    {
        self.grid.load_rows(rows);
        debug!(occupied = self.grid.occupied_count(), "grid loaded");
    }

    pub fn dump_grid(&self) -> GridSnapshot {
        let mut snap = GridSnapshot::default();
        for (dst, src) in snap.cells.iter_mut().zip(self.grid.rows()) {
            dst.copy_from_slice(src);
        }
        snap
    }

    /// Make a fresh piece of `kind` the active piece
    ///
    /// Any previous active piece is discarded. Settled cells under the spawn
    /// position are not checked.
    pub fn spawn(&mut self, kind: PieceKind) {
        let piece = ActivePiece::new(kind);
        debug!(?kind, x = piece.x, y = piece.y, "spawn");
        self.active = Some(piece);
    }

    pub fn rotate_right(&mut self) -> bool {
        self.rotate(true)
    }

    pub fn rotate_left(&mut self) -> bool {
        self.rotate(false)
    }

    fn rotate(&mut self, clockwise: bool) -> bool {
        let Some(active) = self.active else {
            return false;
        };
        match active.rotated(clockwise) {
            Some(turned) => {
                self.active = Some(turned);
                true
            }
            None => false,
        }
    }

    pub fn nudge_left(&mut self) -> bool {
        self.nudge(Direction::Left)
    }

    pub fn nudge_right(&mut self) -> bool {
        self.nudge(Direction::Right)
    }

    pub fn nudge_down(&mut self) -> bool {
        self.nudge(Direction::Down)
    }

    /// Try to move the active piece one cell; `true` if it moved
    pub fn nudge(&mut self, direction: Direction) -> bool {
        let Some(active) = self.active else {
            return false;
        };
        match active.nudged(&self.grid, direction) {
            Some(moved) => {
                self.active = Some(moved);
                true
            }
            None => false,
        }
    }

    /// Drop the active piece as far as it goes and lock it
    ///
    /// Returns `false` when there is no active piece.
    pub fn hard_drop(&mut self) -> bool {
        if self.active.is_none() {
            return false;
        }
        // Each successful nudge moves the piece one row down, so this ends
        // within GRID_DEPTH iterations.
        while self.nudge_down() {}
        self.lock_piece();
        true
    }

    /// Merge the active piece into the grid in its settled color
    pub fn lock_piece(&mut self) {
        let Some(active) = self.active.take() else {
            return;
        };
        let color = active.kind.color();
        for (col, row) in active.cells() {
            self.grid.set_cell(col as usize, row as usize, color);
        }
        debug!(kind = ?active.kind, x = active.x, y = active.y, "piece locked");
    }

    /// Clear every full row, scoring each one; returns the rows cleared
    pub fn step(&mut self) -> u32 {
        let cleared = self.grid.clear_full_rows(self.rules.clear_mode);
        let count = cleared.len() as u32;
        if count > 0 {
            // Counters saturate at u32::MAX.
            self.lines = self.lines.saturating_add(count);
            self.score = self
                .score
                .saturating_add(count.saturating_mul(LINE_CLEAR_SCORE));
            debug!(rows = ?cleared.as_slice(), lines = self.lines, score = self.score, "rows cleared");
        }
        count
    }

    /// Mask of the active piece, `None` when no piece is falling
    pub fn render_active_piece(&self) -> Option<PieceSnapshot> {
        self.active.map(PieceSnapshot::from)
    }

    /// Grid with the active piece overlaid; the grid itself is untouched
    pub fn render_composite(&self) -> CompositeSnapshot {
        CompositeSnapshot::new(&self.dump_grid(), self.active.as_ref())
    }

    #[cfg(test)]
    pub(crate) fn grid_mut(&mut self) -> &mut Grid {
        &mut self.grid
    }
}

impl Default for GameSession {
    fn default() -> Self {
        Self::new(Rules::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ClearMode;
    use crate::types::{Cell, Rotation, GRID_DEPTH, GRID_WIDTH};

    fn fill_row(session: &mut GameSession, row: usize) {
        for col in 0..GRID_WIDTH {
            session.grid_mut().set_cell(col, row, Cell::Green);
        }
    }

    #[test]
    fn test_new_session() {
        let session = GameSession::default();
        assert_eq!(session.score(), 0);
        assert_eq!(session.line_count(), 0);
        assert!(session.active().is_none());
        assert_eq!(session.grid().occupied_count(), 0);
        assert_eq!(session.rules().clear_mode, ClearMode::InPlace);
    }

    #[test]
    fn test_reset_keeps_rules() {
        let mut session = GameSession::new(Rules::new(ClearMode::Collapse));
        fill_row(&mut session, 21);
        session.step();
        session.spawn(PieceKind::T);

        session.reset();

        assert_eq!(session, GameSession::new(Rules::new(ClearMode::Collapse)));
    }

    #[test]
    fn test_spawn_replaces_active_piece() {
        let mut session = GameSession::default();
        session.spawn(PieceKind::I);
        session.nudge_down();
        session.spawn(PieceKind::O);

        let active = session.active().unwrap();
        assert_eq!(active.kind, PieceKind::O);
        assert_eq!((active.x, active.y), (4, 0));
        assert_eq!(active.rotation, Rotation::North);
    }

    #[test]
    fn test_operations_refused_without_piece() {
        let mut session = GameSession::default();
        assert!(!session.rotate_right());
        assert!(!session.rotate_left());
        assert!(!session.nudge_left());
        assert!(!session.nudge_right());
        assert!(!session.nudge_down());
        assert!(!session.hard_drop());
        assert!(session.render_active_piece().is_none());
    }

    #[test]
    fn test_hard_drop_locks_on_floor() {
        let mut session = GameSession::default();
        session.spawn(PieceKind::I);
        assert!(session.hard_drop());

        assert!(session.active().is_none());
        for col in 3..7 {
            assert_eq!(session.grid().cell_at(col, GRID_DEPTH - 1), Cell::Cyan);
        }
        assert_eq!(session.grid().occupied_count(), 4);
    }

    #[test]
    fn test_step_scores_every_full_row() {
        let mut session = GameSession::default();
        fill_row(&mut session, 3);
        fill_row(&mut session, 21);

        assert_eq!(session.step(), 2);
        assert_eq!(session.line_count(), 2);
        assert_eq!(session.score(), 200);

        assert_eq!(session.step(), 0);
        assert_eq!(session.score(), 200);
    }

    #[test]
    fn test_counters_saturate_near_limit() {
        let mut session = GameSession::default();
        session.score = u32::MAX - 150;
        session.lines = u32::MAX - 1;
        for row in 18..GRID_DEPTH {
            fill_row(&mut session, row);
        }

        assert_eq!(session.step(), 4);
        assert_eq!(session.score(), u32::MAX);
        assert_eq!(session.line_count(), u32::MAX);

        fill_row(&mut session, 21);
        assert_eq!(session.step(), 1);
        assert_eq!(session.score(), u32::MAX);
        assert_eq!(session.line_count(), u32::MAX);
    }

    #[test]
    fn test_render_composite_does_not_mutate() {
        let mut session = GameSession::default();
        session.spawn(PieceKind::L);
        let before = session.grid().clone();
        let composite = session.render_composite();
        assert_eq!(session.grid(), &before);
        assert!(composite.tile(5, 0).active);
    }
}
