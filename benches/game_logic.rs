use criterion::{black_box, criterion_group, criterion_main, Criterion};
use tui_bingo::core::{GameSnapshot, GameState};
use tui_bingo::session::PlaySession;
use tui_bingo::term::{FrameBuffer, GameView, Viewport};
use tui_bingo::types::BingoAction;

fn bench_regenerate(c: &mut Criterion) {
    let mut state = GameState::with_seed(80, 12345).unwrap();

    c.bench_function("regenerate_tickets", |b| {
        b.iter(|| {
            black_box(state.regenerate_tickets());
        })
    });
}

fn bench_round_toggle(c: &mut Criterion) {
    let mut state = GameState::with_seed(80, 12345).unwrap();

    c.bench_function("buy_in_or_new_game", |b| {
        b.iter(|| {
            black_box(state.buy_in_or_new_game());
        })
    });
}

fn bench_snapshot_into(c: &mut Criterion) {
    let mut state = GameState::with_seed(80, 12345).unwrap();
    state.buy_in_or_new_game();
    let mut snap = GameSnapshot::default();

    c.bench_function("snapshot_into", |b| {
        b.iter(|| {
            state.snapshot_into(black_box(&mut snap));
        })
    });
}

fn bench_render(c: &mut Criterion) {
    let mut state = GameState::with_seed(80, 12345).unwrap();
    let mut session = PlaySession::new();
    session.apply(BingoAction::BuyIn, &mut state);
    session.advance(1_000);
    let snap = state.snapshot();
    let view = GameView::default();
    let mut fb = FrameBuffer::new(80, 24);

    c.bench_function("render_80x24", |b| {
        b.iter(|| {
            view.render_into(&snap, &session, Viewport::new(80, 24), black_box(&mut fb));
        })
    });
}

criterion_group!(
    benches,
    bench_regenerate,
    bench_round_toggle,
    bench_snapshot_into,
    bench_render
);
criterion_main!(benches);
