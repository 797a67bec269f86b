use std::time::{Duration, Instant};

/// One-shot deadline that the event loop re-arms after each refresh.
///
/// The next deadline is measured from when the refresh *finished*, so a
/// slow player pushes later refreshes back instead of piling them up.
#[derive(Debug, Clone)]
pub struct RefreshTimer {
    interval: Duration,
    deadline: Instant,
}

impl RefreshTimer {
    /// Starts out due, so the first refresh happens right away.
    pub fn new(interval: Duration, now: Instant) -> Self {
        Self {
            interval,
            deadline: now,
        }
    }

    pub fn is_due(&self, now: Instant) -> bool {
        now >= self.deadline
    }

    pub fn rearm(&mut self, completed_at: Instant) {
        self.deadline = completed_at + self.interval;
    }

    /// How long the loop may wait for input before the next refresh.
    pub fn time_until_due(&self, now: Instant) -> Duration {
        self.deadline.saturating_duration_since(now)
    }

    #[cfg(test)]
    pub fn deadline(&self) -> Instant {
        self.deadline
    }
}
