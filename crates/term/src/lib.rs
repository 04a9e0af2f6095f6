//! Terminal "game renderer" module.
//!
//! This is a small, game-oriented rendering layer for terminal play.
//! It avoids widget/layout libraries and instead renders into a simple
//! framebuffer that is flushed to the terminal with crossterm.
//!
//! Goals:
//! - Keep `core` deterministic and testable
//! - Keep the view pure: snapshot + session in, framebuffer out
//! - Redraw only the cells that changed (the reveal touches a few per tick)

pub mod fb;
pub mod game_view;
pub mod renderer;

pub use tui_bingo_core as core;
pub use tui_bingo_session as session;
pub use tui_bingo_types as types;

pub use fb::{Cell, CellStyle, FrameBuffer, Rgb};
pub use game_view::{GameView, Layout, Viewport};
pub use renderer::{encode_diff_into, encode_full_into, TerminalRenderer};
