//! Core game logic module - pure, deterministic, and testable
//!
//! This module owns the bingo rules: dealing tickets, drawing calls and the
//! two-phase round. It has **zero dependencies** on UI or I/O, making it:
//!
//! - **Deterministic**: Same seed produces identical tickets and calls
//! - **Testable**: The random source is injected
//! - **Portable**: Can run in any environment (terminal, headless)
//!
//! # Module Structure
//!
//! - [`game_state`]: tickets, calls and the idle / showing-calls phase
//! - [`rng`]: seedable LCG and partial Fisher-Yates draws
//! - [`snapshot`]: owned copies of the state handed to callers
//! - [`error`]: configuration errors raised at construction
//!
//! # Game Rules
//!
//! - **Tickets**: 4 tickets of 16 numbers, cut from one draw of `1..=pool_max`,
//!   so no number is printed on two tickets. Each ticket is sorted.
//! - **Calls**: 40 numbers from a second, independent draw, sorted. A call
//!   may match a ticket number (a hit).
//! - **Phases**: buying in draws calls; the same action ends the round and
//!   clears them. Tickets can only be redealt while idle.
//!
//! # Example
//!
//! ```
//! use tui_bingo_core::GameState;
//! use tui_bingo_types::GamePhase;
//!
//! let mut game = GameState::with_seed(80, 12345).unwrap();
//! assert_eq!(game.tickets().len(), 4);
//!
//! let snap = game.buy_in_or_new_game();
//! assert_eq!(snap.phase, GamePhase::ShowingCalls);
//! assert_eq!(snap.calls.len(), 40);
//!
//! // Tickets are frozen while calls are showing.
//! assert!(!game.regenerate_tickets());
//!
//! let snap = game.buy_in_or_new_game();
//! assert_eq!(snap.phase, GamePhase::Idle);
//! assert!(snap.calls.is_empty());
//! ```

pub mod error;
pub mod game_state;
pub mod rng;
pub mod snapshot;

pub use tui_bingo_types as types;

// Re-export commonly used types for convenience
pub use error::ConfigError;
pub use game_state::GameState;
pub use rng::{draw_from_pool, RandomSource, SimpleRng};
pub use snapshot::{Calls, GameSnapshot};
