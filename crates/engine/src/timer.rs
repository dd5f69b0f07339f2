//! Wall-clock gate for the forced gravity drop.

/// Fires when strictly more than `interval_ms` has passed since the last fire.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FallTimer {
    interval_ms: u64,
    last_fall_ms: u64,
}

impl FallTimer {
    pub fn new(interval_ms: u64, now_ms: u64) -> Self {
        Self {
            interval_ms,
            last_fall_ms: now_ms,
        }
    }

    pub fn interval_ms(&self) -> u64 {
        self.interval_ms
    }

    pub fn last_fall_ms(&self) -> u64 {
        self.last_fall_ms
    }

    /// Check the gate and, if open, restart the interval from `now_ms`.
    pub fn poll(&mut self, now_ms: u64) -> bool {
        if now_ms.saturating_sub(self.last_fall_ms) > self.interval_ms {
            self.last_fall_ms = now_ms;
            return true;
        }
        false
    }
}
