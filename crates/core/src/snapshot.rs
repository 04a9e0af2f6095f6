use arrayvec::ArrayVec;
use serde::{Deserialize, Serialize};

use crate::types::{GamePhase, Ticket, CALLS_PER_GAME, NUMBERS_PER_TICKET, TICKET_COUNT};

/// Calls drawn for a round, ascending. Empty while idle.
pub type Calls = ArrayVec<u32, CALLS_PER_GAME>;

/// Owned copy of the game state handed to callers.
///
/// Nothing in here borrows from [`GameState`](crate::GameState); editing a
/// snapshot has no effect on the game it came from.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GameSnapshot {
    pub tickets: [Ticket; TICKET_COUNT],
    pub calls: Calls,
    pub phase: GamePhase,
}

impl Default for GameSnapshot {
    fn default() -> Self {
        Self {
            tickets: [[0u32; NUMBERS_PER_TICKET]; TICKET_COUNT],
            calls: Calls::new(),
            phase: GamePhase::Idle,
        }
    }
}
