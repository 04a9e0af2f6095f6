//! Terminal input module.
//!
//! Maps `crossterm` key events into [`crate::types::BingoAction`]. Bingo has
//! no held keys, so there is no repeat handling: every press is one action.

pub mod map;

pub use tui_bingo_types as types;

pub use map::{handle_key_event, should_quit};
