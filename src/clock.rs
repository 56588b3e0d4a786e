//! Simulated chain clock.
//!
//! The clock is the only source of "now" in the harness. It starts at a
//! configured genesis timestamp and only ever moves forward via explicit
//! `advance` calls; no API exists to rewind it.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SimulatedClock {
    now: u64,
}

impl SimulatedClock {
    pub fn new(genesis_timestamp: u64) -> Self {
        Self {
            now: genesis_timestamp,
        }
    }

    pub fn now(&self) -> u64 {
        self.now
    }

    /// Move the clock forward by `secs`. Saturates at `u64::MAX` rather than
    /// wrapping back past genesis.
    pub fn advance(&mut self, secs: u64) -> u64 {
        self.now = self.now.saturating_add(secs);
        self.now
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clock_advances_monotonically() {
        let mut clock = SimulatedClock::new(1_700_000_000);
        assert_eq!(clock.now(), 1_700_000_000);
        assert_eq!(clock.advance(30 * 86_400), 1_700_000_000 + 30 * 86_400);
        let before = clock.now();
        clock.advance(0);
        assert_eq!(clock.now(), before);
    }

    #[test]
    fn test_clock_saturates_instead_of_wrapping() {
        let mut clock = SimulatedClock::new(u64::MAX - 10);
        clock.advance(100);
        assert_eq!(clock.now(), u64::MAX);
    }
}
