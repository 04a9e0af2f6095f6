//! Game state module - tickets, calls and the round phase
//!
//! `GameState` is the single owner of the canonical tickets and calls. The
//! only phase change is [`GameState::buy_in_or_new_game`], which toggles
//! between idle and showing calls.

use tracing::{debug, info};

use crate::error::ConfigError;
use crate::rng::{draw_from_pool, RandomSource, SimpleRng};
use crate::snapshot::{Calls, GameSnapshot};
use crate::types::*;

/// Complete game state
#[derive(Debug, Clone)]
pub struct GameState<R: RandomSource = SimpleRng> {
    tickets: [Ticket; TICKET_COUNT],
    calls: Calls,
    phase: GamePhase,
    /// Inclusive upper bound of the number pool `1..=pool_max`.
    pool_max: u32,
    rng: R,
}

impl GameState<SimpleRng> {
    /// Create a game seeded with `seed`.
    pub fn with_seed(pool_max: u32, seed: u32) -> Result<Self, ConfigError> {
        Self::new(pool_max, SimpleRng::new(seed))
    }

    /// Raw state of the RNG.
    ///
    /// `SimpleRng::new(game.seed())` continues the sequence this game would
    /// draw next. `with_seed` with the same value does not, since it deals
    /// tickets before returning.
    pub fn seed(&self) -> u32 {
        self.rng.state()
    }
}

impl<R: RandomSource> GameState<R> {
    /// Create a game and deal its tickets.
    ///
    /// Fails when `pool_max` is too small to fill every ticket with distinct
    /// numbers.
    pub fn new(pool_max: u32, rng: R) -> Result<Self, ConfigError> {
        if pool_max < MIN_POOL_MAX {
            return Err(ConfigError::InvalidConfiguration {
                pool_max,
                required: MIN_POOL_MAX,
            });
        }

        Ok(Self::deal(pool_max, rng))
    }

    fn deal(pool_max: u32, rng: R) -> Self {
        let mut state = Self {
            tickets: [[0; NUMBERS_PER_TICKET]; TICKET_COUNT],
            calls: Calls::new(),
            phase: GamePhase::Idle,
            pool_max,
            rng,
        };
        state.generate_tickets();
        state
    }

    pub fn phase(&self) -> GamePhase {
        self.phase
    }

    pub fn pool_max(&self) -> u32 {
        self.pool_max
    }

    /// Copy of the current tickets.
    pub fn tickets(&self) -> [Ticket; TICKET_COUNT] {
        self.tickets
    }

    /// Copy of the current calls (empty while idle).
    pub fn calls(&self) -> Calls {
        self.calls.clone()
    }

    pub fn snapshot_into(&self, out: &mut GameSnapshot) {
        out.tickets = self.tickets;
        out.calls.clear();
        out.calls.extend(self.calls.iter().copied());
        out.phase = self.phase;
    }

    pub fn snapshot(&self) -> GameSnapshot {
        let mut s = GameSnapshot::default();
        self.snapshot_into(&mut s);
        s
    }

    /// Deal new tickets.
    ///
    /// Ignored while calls are showing so a player cannot change numbers
    /// mid-round. Returns whether the tickets were replaced.
    pub fn regenerate_tickets(&mut self) -> bool {
        if self.phase != GamePhase::Idle {
            debug!("regenerate ignored while calls are showing");
            return false;
        }
        self.generate_tickets();
        true
    }

    /// Start a round from idle, or end the current one.
    ///
    /// Starting draws `CALLS_PER_GAME` numbers from the whole pool,
    /// independent of the ticket draw, so calls can hit tickets.
    /// Ending clears the calls and leaves the tickets alone.
    pub fn buy_in_or_new_game(&mut self) -> GameSnapshot {
        match self.phase {
            GamePhase::Idle => {
                let drawn = draw_from_pool(&mut self.rng, self.pool_max, CALLS_PER_GAME);
                let mut calls: Calls = drawn.into_iter().collect();
                calls.sort_unstable();
                self.calls = calls;
                self.phase = GamePhase::ShowingCalls;
                info!(calls = self.calls.len(), "round started");
            }
            GamePhase::ShowingCalls => {
                self.calls.clear();
                self.phase = GamePhase::Idle;
                info!("round ended");
            }
        }
        self.snapshot()
    }

    /// One draw of every ticket number, cut into consecutive ticket-sized chunks.
    fn generate_tickets(&mut self) {
        let drawn = draw_from_pool(
            &mut self.rng,
            self.pool_max,
            TICKET_COUNT * NUMBERS_PER_TICKET,
        );
        for (ticket, chunk) in self
            .tickets
            .iter_mut()
            .zip(drawn.chunks_exact(NUMBERS_PER_TICKET))
        {
            ticket.copy_from_slice(chunk);
            ticket.sort_unstable();
        }
        debug!(pool_max = self.pool_max, "tickets dealt");
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::deal(DEFAULT_POOL_MAX, SimpleRng::default())
    }
}
