//! Integration test for verifying settled pieces are rendered correctly
//!
//! Builds a session with several settled pieces, then checks the text the
//! renderer writes for the grid, composite and piece displays.

use learntris::core::GameSession;
use learntris::term::TextRenderer;
use learntris::types::{PieceKind, GRID_DEPTH, GRID_WIDTH};

/// Session with an O, an I and a T settled at the bottom
fn create_session_with_settled_pieces() -> GameSession {
    let mut session = GameSession::default();

    // O fills (4..6, 20..22).
    session.spawn(PieceKind::O);
    session.hard_drop();

    // I pushed to the left wall fills row 21, columns 0..4.
    session.spawn(PieceKind::I);
    while session.nudge_left() {}
    session.hard_drop();

    // T pushed to the right wall: stem at (8, 20), bar at (7..10, 21).
    session.spawn(PieceKind::T);
    while session.nudge_right() {}
    session.hard_drop();

    session
}

fn render_with<F>(f: F) -> Vec<String>
where
    F: FnOnce(&mut TextRenderer<&mut Vec<u8>>),
{
    let mut out = Vec::new();
    {
        let mut renderer = TextRenderer::new(&mut out);
        f(&mut renderer);
        renderer.flush().unwrap();
    }
    String::from_utf8(out)
        .unwrap()
        .lines()
        .map(String::from)
        .collect()
}

#[test]
fn test_settled_pieces_rendered_in_grid() {
    let session = create_session_with_settled_pieces();
    assert_eq!(session.grid().occupied_count(), 12);

    let lines = render_with(|r| r.grid(&session.dump_grid()).unwrap());

    assert_eq!(lines.len(), GRID_DEPTH);
    for line in &lines {
        // Every token is followed by one space, the last one included.
        assert_eq!(line.len(), 2 * GRID_WIDTH);
        assert_eq!(line.split_whitespace().count(), GRID_WIDTH);
    }
    assert_eq!(lines[20], ". . . . y y . . m . ");
    assert_eq!(lines[21], "c c c c y y . m m m ");
}

#[test]
fn test_row_with_single_gap_is_not_cleared() {
    let mut session = create_session_with_settled_pieces();
    assert_eq!(session.step(), 0);

    let lines = render_with(|r| r.grid(&session.dump_grid()).unwrap());
    assert_eq!(lines[21], "c c c c y y . m m m ");
}

#[test]
fn test_composite_mixes_settled_and_active() {
    let mut session = create_session_with_settled_pieces();
    session.spawn(PieceKind::J);
    for _ in 0..18 {
        session.nudge_down();
    }

    let lines = render_with(|r| r.composite(&session.render_composite()).unwrap());

    // J at x=3 stops above the O: corner at (3, 18), bar at (3..6, 19).
    assert_eq!(lines[18], ". . . B . . . . . . ");
    assert_eq!(lines[19], ". . . B B B . . . . ");
    assert_eq!(lines[20], ". . . . y y . . m . ");
    assert!(lines[..18].iter().all(|line| !line.contains(|c: char| c.is_alphabetic())));
}

#[test]
fn test_composite_without_active_piece_matches_grid() {
    let session = create_session_with_settled_pieces();
    let grid = render_with(|r| r.grid(&session.dump_grid()).unwrap());
    let composite = render_with(|r| r.composite(&session.render_composite()).unwrap());
    assert_eq!(grid, composite);
}

#[test]
fn test_piece_display_follows_rotation() {
    let mut session = GameSession::default();
    session.spawn(PieceKind::S);
    session.rotate_right();

    let lines = render_with(|r| r.piece(session.render_active_piece().as_ref()).unwrap());
    assert_eq!(lines, [". g . ", ". g g ", ". . g "]);
}
