//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the application.
//! All types are plain data with no game logic, making them usable in any
//! context (core state, presentation session, terminal rendering).
//!
//! # Game Dimensions
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `TICKET_COUNT` | 4 | Tickets held by the player |
//! | `NUMBERS_PER_TICKET` | 16 | Numbers per ticket (4x4 grid) |
//! | `TICKET_GRID_SIZE` | 4 | Side length of a ticket grid |
//! | `CALLS_PER_GAME` | 40 | Calls drawn per round |
//! | `DEFAULT_POOL_MAX` | 80 | Pool is `1..=80` by default |
//!
//! # Timing Constants
//!
//! Timing values are in milliseconds:
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `TICK_MS` | 16 | Fixed timestep interval (~60 FPS) |
//! | `REVEAL_INTERVAL_MS` | 50 | One call revealed per interval |
//!
//! # Examples
//!
//! ```
//! use tui_bingo_types::{BingoAction, GamePhase, CALLS_PER_GAME, MIN_POOL_MAX};
//!
//! assert_eq!(GamePhase::from_str("showing-calls"), Some(GamePhase::ShowingCalls));
//! assert_eq!(GamePhase::Idle.as_str(), "idle");
//!
//! assert_eq!(BingoAction::from_str("buyIn"), Some(BingoAction::BuyIn));
//!
//! assert_eq!(CALLS_PER_GAME, 40);
//! assert_eq!(MIN_POOL_MAX, 64);
//! ```

use serde::{Deserialize, Serialize};

/// Number of tickets in a game.
pub const TICKET_COUNT: usize = 4;

/// Numbers printed on each ticket.
pub const NUMBERS_PER_TICKET: usize = 16;

/// Tickets are laid out as square grids of this side length.
pub const TICKET_GRID_SIZE: usize = 4;

/// Calls drawn each round (shown as a 2x20 panel).
pub const CALLS_PER_GAME: usize = 40;

/// Default inclusive upper bound of the number pool.
pub const DEFAULT_POOL_MAX: u32 = 80;

/// Smallest pool that can fill every ticket without repeating a number.
pub const MIN_POOL_MAX: u32 = (TICKET_COUNT * NUMBERS_PER_TICKET) as u32;

/// Fixed timestep interval in milliseconds (16ms ≈ 60 FPS)
pub const TICK_MS: u32 = 16;

/// Interval between two revealed calls.
pub const REVEAL_INTERVAL_MS: u32 = 50;

/// A ticket: sorted, distinct numbers from the pool.
pub type Ticket = [u32; NUMBERS_PER_TICKET];

/// Round phase.
///
/// - **Idle**: no active round; tickets may be regenerated
/// - **ShowingCalls**: calls are drawn and being revealed; tickets are frozen
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum GamePhase {
    #[default]
    Idle,
    ShowingCalls,
}

impl GamePhase {
    /// Parse phase from its wire form (`"idle"` or `"showing-calls"`).
    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "idle" => Some(GamePhase::Idle),
            "showing-calls" => Some(GamePhase::ShowingCalls),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            GamePhase::Idle => "idle",
            GamePhase::ShowingCalls => "showing-calls",
        }
    }

    /// Label of the single round button in this phase.
    ///
    /// ```
    /// use tui_bingo_types::GamePhase;
    ///
    /// assert_eq!(GamePhase::Idle.button_label(), "Buy In");
    /// assert_eq!(GamePhase::ShowingCalls.button_label(), "New Game");
    /// ```
    pub fn button_label(&self) -> &'static str {
        match self {
            GamePhase::Idle => "Buy In",
            GamePhase::ShowingCalls => "New Game",
        }
    }
}

/// Player actions.
///
/// These are produced by the input layer and applied by the play session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BingoAction {
    /// Start a round (Idle) or end it (ShowingCalls)
    BuyIn,
    /// Deal a new set of tickets (ignored while calls are showing)
    Regenerate,
    /// Take a ticket out of play, or put it back
    ToggleTicket(u8),
}

impl BingoAction {
    /// Parse action from string (case-insensitive).
    ///
    /// Ticket toggles are written `toggle1`..`toggle4` (one-based).
    ///
    /// ```
    /// use tui_bingo_types::BingoAction;
    ///
    /// assert_eq!(BingoAction::from_str("regenerate"), Some(BingoAction::Regenerate));
    /// assert_eq!(BingoAction::from_str("toggle2"), Some(BingoAction::ToggleTicket(1)));
    /// assert_eq!(BingoAction::from_str("toggle9"), None);
    /// ```
    pub fn from_str(s: &str) -> Option<Self> {
        let lower = s.to_lowercase();
        match lower.as_str() {
            "buyin" | "newgame" => Some(BingoAction::BuyIn),
            "regenerate" => Some(BingoAction::Regenerate),
            other => {
                let n: usize = other.strip_prefix("toggle")?.parse().ok()?;
                if (1..=TICKET_COUNT).contains(&n) {
                    Some(BingoAction::ToggleTicket((n - 1) as u8))
                } else {
                    None
                }
            }
        }
    }
}
