//! Incremental call reveal.
//!
//! The game draws every call at once when a round starts; the reveal plays
//! them back one at a time on a fixed interval. It is driven by the caller's
//! tick (no threads or wall-clock reads), so it can be unit-tested with
//! synthetic elapsed times.

use arrayvec::ArrayVec;

use crate::types::{CALLS_PER_GAME, REVEAL_INTERVAL_MS};

/// Repeating reveal timer over a fixed list of calls.
#[derive(Debug, Clone)]
pub struct CallReveal {
    calls: ArrayVec<u32, CALLS_PER_GAME>,
    revealed: usize,
    interval_ms: u32,
    accumulator_ms: u32,
    running: bool,
}

impl CallReveal {
    pub fn new() -> Self {
        Self::with_interval(REVEAL_INTERVAL_MS)
    }

    /// A zero interval is treated as 1ms.
    pub fn with_interval(interval_ms: u32) -> Self {
        Self {
            calls: ArrayVec::new(),
            revealed: 0,
            interval_ms: interval_ms.max(1),
            accumulator_ms: 0,
            running: false,
        }
    }

    pub fn interval_ms(&self) -> u32 {
        self.interval_ms
    }

    /// Begin revealing `calls`, replacing any reveal in flight.
    ///
    /// `calls` must be strictly ascending; [`is_revealed`](Self::is_revealed)
    /// searches them by bisection.
    pub fn start(&mut self, calls: &[u32]) {
        debug_assert!(
            calls.windows(2).all(|w| w[0] < w[1]),
            "calls must be strictly ascending"
        );
        self.calls.clear();
        self.calls
            .extend(calls.iter().copied().take(CALLS_PER_GAME));
        self.revealed = 0;
        self.accumulator_ms = 0;
        self.running = !self.calls.is_empty();
    }

    /// Stop the reveal and forget its calls.
    pub fn cancel(&mut self) {
        self.calls.clear();
        self.revealed = 0;
        self.accumulator_ms = 0;
        self.running = false;
    }

    /// Advance the timer; reveals one call per elapsed interval.
    ///
    /// Returns how many calls became visible during this step.
    pub fn advance(&mut self, elapsed_ms: u32) -> usize {
        if !self.running {
            return 0;
        }

        self.accumulator_ms = self.accumulator_ms.saturating_add(elapsed_ms);
        let mut newly = 0;
        while self.accumulator_ms >= self.interval_ms && self.revealed < self.calls.len() {
            self.accumulator_ms -= self.interval_ms;
            self.revealed += 1;
            newly += 1;
        }

        if self.revealed >= self.calls.len() {
            self.running = false;
            self.accumulator_ms = 0;
        }
        newly
    }

    /// Calls visible so far, in reveal order.
    pub fn revealed(&self) -> &[u32] {
        &self.calls[..self.revealed]
    }

    pub fn revealed_count(&self) -> usize {
        self.revealed
    }

    /// Calls in the reveal (revealed or not).
    pub fn total(&self) -> usize {
        self.calls.len()
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    pub fn is_complete(&self) -> bool {
        !self.calls.is_empty() && self.revealed == self.calls.len()
    }

    /// Whether `number` has been revealed.
    pub fn is_revealed(&self, number: u32) -> bool {
        // Calls are stored ascending.
        self.revealed().binary_search(&number).is_ok()
    }
}

impl Default for CallReveal {
    fn default() -> Self {
        Self::new()
    }
}
