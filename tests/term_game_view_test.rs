use tui_bingo::core::GameState;
use tui_bingo::session::PlaySession;
use tui_bingo::term::{FrameBuffer, GameView, Layout, Rgb, Viewport};
use tui_bingo::types::{BingoAction, TICKET_COUNT};

fn all_text(fb: &FrameBuffer) -> String {
    fb.to_text()
}

fn setup() -> (GameState, PlaySession) {
    (GameState::with_seed(80, 1).unwrap(), PlaySession::new())
}

#[test]
fn term_view_renders_ticket_frames() {
    let (game, session) = setup();
    let vp = Viewport::new(80, 24);
    let fb = GameView::default().render(&game.snapshot(), &session, vp);

    let layout = Layout::new(vp);
    for &(x, y) in &layout.tickets {
        assert_eq!(fb.get(x, y).unwrap().ch, '┌');
    }
}

#[test]
fn term_view_prints_every_ticket_number() {
    let (game, session) = setup();
    let snap = game.snapshot();
    let vp = Viewport::new(80, 24);
    let fb = GameView::default().render(&snap, &session, vp);
    let layout = Layout::new(vp);

    for t in 0..TICKET_COUNT {
        for (i, &n) in snap.tickets[t].iter().enumerate() {
            let (x, y) = layout.number_cell(t, i);
            let text: String = (x..x + 3).map(|cx| fb.get(cx, y).unwrap().ch).collect();
            assert_eq!(text.trim(), n.to_string());
        }
    }
}

#[test]
fn term_view_idle_shows_buy_in_and_empty_counter() {
    let (game, session) = setup();
    let fb = GameView::default().render(&game.snapshot(), &session, Viewport::new(80, 24));
    let all = all_text(&fb);

    assert!(all.contains("[ Buy In ]"));
    assert!(all.contains("CALLS 0/40"));
    assert!(all.contains("q quit"));
}

#[test]
fn term_view_round_shows_new_game_and_progress() {
    let (mut game, mut session) = setup();
    session.apply(BingoAction::BuyIn, &mut game);
    session.advance(250);

    let fb = GameView::default().render(&game.snapshot(), &session, Viewport::new(80, 24));
    let all = all_text(&fb);
    assert!(all.contains("[ New Game ]"));
    assert!(all.contains("CALLS 5/40"));

    let layout = Layout::new(Viewport::new(80, 24));
    let first = session.reveal().revealed()[0];
    let text: String = (layout.calls_x..layout.calls_x + 3)
        .map(|x| fb.get(x, layout.calls_y + 1).unwrap().ch)
        .collect();
    assert_eq!(text.trim(), first.to_string());
}

#[test]
fn term_view_highlights_hits() {
    let (mut game, mut session) = setup();
    session.apply(BingoAction::BuyIn, &mut game);
    session.advance(5_000);

    let snap = game.snapshot();
    let vp = Viewport::new(80, 24);
    let fb = GameView::default().render(&snap, &session, vp);
    let layout = Layout::new(vp);

    let mut hits = 0;
    for t in 0..TICKET_COUNT {
        for (i, &n) in snap.tickets[t].iter().enumerate() {
            let (x, y) = layout.number_cell(t, i);
            let cell = fb.get(x + 2, y).unwrap();
            if snap.calls.contains(&n) {
                assert_eq!(cell.style.bg, Rgb::hex(0x00ffff));
                hits += 1;
            } else {
                assert_ne!(cell.style.bg, Rgb::hex(0x00ffff));
            }
        }
    }
    assert!(hits > 0);
}

#[test]
fn term_view_covers_disabled_ticket() {
    let (mut game, mut session) = setup();
    session.apply(BingoAction::ToggleTicket(0), &mut game);

    let snap = game.snapshot();
    let vp = Viewport::new(80, 24);
    let fb = GameView::default().render(&snap, &session, vp);
    let all = all_text(&fb);
    assert!(all.contains("NOT IN"));
    assert!(all.contains("PLAY!"));
    assert!(all.contains("[+]"));

    // Ticket 1 is covered; ticket 2 still shows its numbers.
    let layout = Layout::new(vp);
    let (x, y) = layout.number_cell(0, 0);
    let covered: String = (x..x + 3).map(|cx| fb.get(cx, y).unwrap().ch).collect();
    assert_ne!(covered.trim(), snap.tickets[0][0].to_string());

    let (x, y) = layout.number_cell(1, 0);
    let shown: String = (x..x + 3).map(|cx| fb.get(cx, y).unwrap().ch).collect();
    assert_eq!(shown.trim(), snap.tickets[1][0].to_string());
}

#[test]
fn term_view_centers_content() {
    let (game, session) = setup();
    let vp = Viewport::new(100, 40);
    let layout = Layout::new(vp);
    assert_eq!(layout.origin_x, (100 - Layout::CONTENT_W) / 2);
    assert_eq!(layout.origin_y, (40 - Layout::CONTENT_H) / 2);

    let fb = GameView::default().render(&game.snapshot(), &session, vp);
    assert_eq!(fb.row_text(layout.origin_y).trim_start().get(..5), Some("BINGO"));
}

#[test]
fn term_view_survives_tiny_viewport() {
    let (game, session) = setup();
    let fb = GameView::default()
        .without_footer()
        .render(&game.snapshot(), &session, Viewport::new(10, 5));
    assert_eq!(fb.width(), 10);
    assert_eq!(fb.height(), 5);
}

#[test]
fn term_view_counter_matches_session_text() {
    let (mut game, mut session) = setup();
    let view = GameView::default();
    let vp = Viewport::new(80, 24);

    let idle = all_text(&view.render(&game.snapshot(), &session, vp));
    assert!(idle.contains(&session.counter_text()));

    session.apply(BingoAction::BuyIn, &mut game);
    session.advance(50 * 40);
    let done = all_text(&view.render(&game.snapshot(), &session, vp));
    assert!(done.contains(&session.counter_text()));
    assert!(done.contains("CALLS 40/40"));
}
