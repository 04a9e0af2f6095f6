//! Play session - presentation state that sits beside the game.
//!
//! The game owns tickets, calls and the phase. Everything the player sees
//! on top of that lives here:
//!
//! - [`reveal`]: the timer that shows calls one at a time
//! - [`mask`]: which tickets are out of play
//! - hit detection: a revealed call printed on a ticket that is in play
//!
//! [`PlaySession::apply`] is the one place player actions reach the game.
//! It keeps the reveal in step with the phase: a new round restarts it and
//! returning to idle cancels it.
//!
//! # Example
//!
//! ```
//! use tui_bingo_core::GameState;
//! use tui_bingo_session::PlaySession;
//! use tui_bingo_types::{BingoAction, GamePhase};
//!
//! let mut game = GameState::with_seed(80, 7).unwrap();
//! let mut session = PlaySession::new();
//!
//! session.apply(BingoAction::BuyIn, &mut game);
//! assert_eq!(game.phase(), GamePhase::ShowingCalls);
//!
//! session.advance(50 * 40);
//! assert_eq!(session.reveal().revealed_count(), 40);
//! assert_eq!(session.counter_text(), "CALLS 40/40");
//! ```

pub mod mask;
pub mod reveal;

use tracing::debug;

use tui_bingo_core::{GameSnapshot, GameState, RandomSource};

pub use tui_bingo_core as core;
pub use tui_bingo_types as types;

pub use mask::TicketMask;
pub use reveal::CallReveal;

use crate::types::{BingoAction, GamePhase, CALLS_PER_GAME, TICKET_COUNT};

/// Reveal progress and disabled tickets for one UI session.
#[derive(Debug, Clone, Default)]
pub struct PlaySession {
    reveal: CallReveal,
    mask: TicketMask,
}

impl PlaySession {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_reveal_interval(interval_ms: u32) -> Self {
        Self {
            reveal: CallReveal::with_interval(interval_ms),
            mask: TicketMask::new(),
        }
    }

    pub fn reveal(&self) -> &CallReveal {
        &self.reveal
    }

    pub fn mask(&self) -> &TicketMask {
        &self.mask
    }

    /// Apply a player action.
    ///
    /// Returns whether anything visible changed and a redraw is due.
    pub fn apply<R: RandomSource>(&mut self, action: BingoAction, game: &mut GameState<R>) -> bool {
        match action {
            BingoAction::BuyIn => {
                let snap = game.buy_in_or_new_game();
                self.sync_reveal(&snap);
                true
            }
            BingoAction::Regenerate => game.regenerate_tickets(),
            BingoAction::ToggleTicket(index) => match self.mask.toggle(index as usize) {
                Some(disabled) => {
                    debug!(ticket = index, disabled, "ticket toggled");
                    true
                }
                None => false,
            },
        }
    }

    /// Restart or cancel the reveal to match a phase transition.
    pub fn sync_reveal(&mut self, snap: &GameSnapshot) {
        match snap.phase {
            GamePhase::ShowingCalls => {
                self.reveal.start(&snap.calls);
                debug!(total = self.reveal.total(), "reveal started");
            }
            GamePhase::Idle => {
                self.reveal.cancel();
                debug!("reveal cancelled");
            }
        }
    }

    /// Advance the reveal timer. Returns whether a call was revealed.
    pub fn advance(&mut self, elapsed_ms: u32) -> bool {
        self.reveal.advance(elapsed_ms) > 0
    }

    /// A revealed call printed on ticket `ticket`, which is in play.
    pub fn is_hit(&self, ticket: usize, number: u32) -> bool {
        ticket < TICKET_COUNT && !self.mask.is_disabled(ticket) && self.reveal.is_revealed(number)
    }

    /// Hits so far on ticket `ticket` of `snap`.
    pub fn hit_count(&self, snap: &GameSnapshot, ticket: usize) -> usize {
        snap.tickets.get(ticket).map_or(0, |numbers| {
            numbers.iter().filter(|&&n| self.is_hit(ticket, n)).count()
        })
    }

    /// Denominator of the calls counter; a full round's worth while idle.
    pub fn counter_total(&self) -> usize {
        match self.reveal.total() {
            0 => CALLS_PER_GAME,
            n => n,
        }
    }

    /// Counter shown above the calls panel, e.g. `CALLS 12/40`.
    pub fn counter_text(&self) -> String {
        format!(
            "CALLS {}/{}",
            self.reveal.revealed_count(),
            self.counter_total()
        )
    }
}
