//! Terminal bingo runner (default binary).
//!
//! `tui-bingo` plays interactively. `tui-bingo snapshot` buys in once and
//! prints the resulting game state as JSON, without touching the terminal.
//! Configuration comes from the environment (see [`tui_bingo::config`]) and
//! command-line flags (see [`tui_bingo::cli`]).

use std::time::{Duration, Instant};

use anyhow::Result;
use clap::Parser;
use crossterm::event::{self, Event, KeyEventKind};
use tracing::info;

use tui_bingo::cli::{Cli, Command};
use tui_bingo::core::{GameSnapshot, GameState};
use tui_bingo::input::{handle_key_event, should_quit};
use tui_bingo::session::PlaySession;
use tui_bingo::term::{FrameBuffer, GameView, TerminalRenderer, Viewport};
use tui_bingo::types::{BingoAction, TICK_MS};
use tui_bingo::{logging, AppConfig};

fn main() -> Result<()> {
    let cli = Cli::parse();
    let mut config = AppConfig::from_env()?;
    cli.apply_overrides(&mut config);
    logging::init(config.log_path.as_deref())?;

    // Fail before the terminal switches to raw mode.
    let game = GameState::with_seed(config.pool_max, config.seed)?;
    info!(pool_max = config.pool_max, seed = config.seed, "game created");

    match cli.selected() {
        Command::Play => play(game, &config),
        Command::Snapshot => print_snapshot(game),
    }
}

fn print_snapshot(mut game: GameState) -> Result<()> {
    let snap = game.buy_in_or_new_game();
    println!("{}", serde_json::to_string_pretty(&snap)?);
    Ok(())
}

fn play(game: GameState, config: &AppConfig) -> Result<()> {
    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term, game, config);

    // Always try to restore terminal state.
    let _ = term.exit();
    info!("terminal restored");
    result
}

fn run(term: &mut TerminalRenderer, mut game: GameState, config: &AppConfig) -> Result<()> {
    let mut session = PlaySession::with_reveal_interval(config.reveal_interval_ms);
    let view = GameView::new();

    let mut snap = GameSnapshot::default();
    let mut fb = FrameBuffer::new(0, 0);
    let mut dirty = true;

    let mut last_tick = Instant::now();
    let tick_duration = Duration::from_millis(TICK_MS as u64);

    loop {
        if dirty {
            game.snapshot_into(&mut snap);
            let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
            view.render_into(&snap, &session, Viewport::new(w, h), &mut fb);
            term.draw(&fb)?;
            dirty = false;
        }

        // Input with timeout until next tick.
        let timeout = tick_duration
            .checked_sub(last_tick.elapsed())
            .unwrap_or(Duration::ZERO);

        if event::poll(timeout)? {
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => {
                    if should_quit(key) {
                        return Ok(());
                    }
                    if let Some(action) = handle_key_event(key) {
                        dirty |= apply(&mut session, &mut game, action);
                    }
                }
                Event::Resize(..) => {
                    term.invalidate();
                    dirty = true;
                }
                _ => {}
            }
        }

        // Tick.
        let elapsed = last_tick.elapsed();
        if elapsed >= tick_duration {
            last_tick = Instant::now();
            let was_running = session.reveal().is_running();
            if session.advance(elapsed.as_millis() as u32) {
                dirty = true;
                if was_running && session.reveal().is_complete() {
                    info!(counter = %session.counter_text(), "all calls revealed");
                }
            }
        }
    }
}

fn apply(session: &mut PlaySession, game: &mut GameState, action: BingoAction) -> bool {
    let changed = session.apply(action, game);
    info!(?action, phase = game.phase().as_str(), changed, "action");
    changed
}
