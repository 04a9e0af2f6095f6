//! Key mapping from terminal events to player actions.

use crate::types::{BingoAction, TICKET_COUNT};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Map keyboard input to player actions.
pub fn handle_key_event(key: KeyEvent) -> Option<BingoAction> {
    match key.code {
        // Round
        KeyCode::Enter | KeyCode::Char('b') | KeyCode::Char('B') | KeyCode::Char(' ') => {
            Some(BingoAction::BuyIn)
        }

        // Tickets
        KeyCode::Char('r') | KeyCode::Char('R') => Some(BingoAction::Regenerate),
        KeyCode::Char(c @ '1'..='9') => {
            let index = c as usize - '1' as usize;
            (index < TICKET_COUNT).then_some(BingoAction::ToggleTicket(index as u8))
        }

        _ => None,
    }
}

/// Check if key should quit the game.
pub fn should_quit(key: KeyEvent) -> bool {
    matches!(key.code, KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc)
        || (key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL))
}
