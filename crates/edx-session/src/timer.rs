//! Exam countdown.
//!
//! The timer is a plain accumulator driven by whoever owns it (the render
//! loop feeds it frame deltas). There is no background callback: dropping
//! the owning session is the cancellation guarantee, so nothing can mutate
//! state after the test view is torn down.

use std::time::Duration;

/// Remaining-time countdown that saturates at zero.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CountdownTimer {
    total: Duration,
    elapsed: Duration,
}

impl CountdownTimer {
    /// Grand Test duration: 3 hours.
    pub const GRAND_TEST: Duration = Duration::from_secs(3 * 60 * 60);

    pub fn new(total: Duration) -> Self {
        Self {
            total,
            elapsed: Duration::ZERO,
        }
    }

    /// Record elapsed time. Saturates once the total is used up; remaining
    /// time never goes negative however much is fed in.
    pub fn advance(&mut self, delta: Duration) {
        self.elapsed = (self.elapsed + delta).min(self.total);
    }

    pub fn remaining(&self) -> Duration {
        self.total - self.elapsed
    }

    pub fn remaining_secs(&self) -> u64 {
        self.remaining().as_secs()
    }

    pub fn is_expired(&self) -> bool {
        self.elapsed >= self.total
    }

    /// Remaining time as "HH:MM:SS".
    pub fn format_hms(&self) -> String {
        let secs = self.remaining_secs();
        format!(
            "{:02}:{:02}:{:02}",
            secs / 3600,
            (secs % 3600) / 60,
            secs % 60
        )
    }
}
