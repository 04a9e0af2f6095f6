use crate::types::TICKET_COUNT;

/// Tickets the player has taken out of play.
///
/// Disabled tickets keep their numbers but never score hits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TicketMask {
    disabled: [bool; TICKET_COUNT],
}

impl TicketMask {
    pub fn new() -> Self {
        Self::default()
    }

    /// Flip ticket `index`; out-of-range indices are ignored.
    ///
    /// Returns the new disabled state, or `None` when ignored.
    pub fn toggle(&mut self, index: usize) -> Option<bool> {
        let slot = self.disabled.get_mut(index)?;
        *slot = !*slot;
        Some(*slot)
    }

    pub fn is_disabled(&self, index: usize) -> bool {
        self.disabled.get(index).copied().unwrap_or(false)
    }

    pub fn disabled_count(&self) -> usize {
        self.disabled.iter().filter(|d| **d).count()
    }

    pub fn clear(&mut self) {
        self.disabled = [false; TICKET_COUNT];
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toggle_flips_and_flips_back() {
        let mut m = TicketMask::new();
        assert_eq!(m.toggle(2), Some(true));
        assert!(m.is_disabled(2));
        assert_eq!(m.disabled_count(), 1);

        assert_eq!(m.toggle(2), Some(false));
        assert!(!m.is_disabled(2));
    }

    #[test]
    fn out_of_range_is_ignored() {
        let mut m = TicketMask::new();
        assert_eq!(m.toggle(TICKET_COUNT), None);
        assert!(!m.is_disabled(TICKET_COUNT));
        assert_eq!(m, TicketMask::new());
    }

    #[test]
    fn clear_enables_everything() {
        let mut m = TicketMask::new();
        m.toggle(0);
        m.toggle(3);
        m.clear();
        assert_eq!(m.disabled_count(), 0);
    }
}
