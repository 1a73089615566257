//! Generation Counter
//!
//! Tickets for async work where only the most recent start may finish.

/// Hands out increasing tickets; only the latest one is current
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Generation {
    latest: u64,
}

impl Generation {
    /// Start new work, superseding every earlier ticket
    pub fn begin(&mut self) -> u64 {
        self.latest += 1;
        self.latest
    }

    pub fn is_current(&self, ticket: u64) -> bool {
        self.latest == ticket
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_latest_ticket_wins() {
        let mut generation = Generation::default();
        let first = generation.begin();
        assert!(generation.is_current(first));
        let second = generation.begin();
        assert!(!generation.is_current(first));
        assert!(generation.is_current(second));
    }

    #[test]
    fn test_reopened_confirmation_outlives_first_timer() {
        // × opens (ticket 1), ✗ closes, × opens again (ticket 3).
        // The timer from the first open must not close the second one.
        let mut confirm = Generation::default();
        let first_open = confirm.begin();
        confirm.begin();
        let second_open = confirm.begin();
        assert!(!confirm.is_current(first_open));
        assert!(confirm.is_current(second_open));
    }
}
