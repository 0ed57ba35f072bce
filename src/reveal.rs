// Progress/reveal gate: fires once when playback position crosses the threshold.

use crate::types::Timestamp;

pub struct RevealGate {
    threshold: Timestamp,
    revealed: bool,
}

impl RevealGate {
    pub fn new(threshold: Timestamp) -> Self {
        RevealGate {
            threshold,
            revealed: false,
        }
    }

    pub fn revealed(&self) -> bool {
        self.revealed
    }

    pub fn threshold(&self) -> Timestamp {
        self.threshold
    }

    /// Observe a position tick. Returns `true` only on the tick that fires.
    pub fn observe(&mut self, position: Timestamp) -> bool {
        if self.revealed || position < self.threshold {
            return false;
        }
        self.revealed = true;
        true
    }
}
