use std::time::{Duration, Instant};

use crate::config::Config;

/// Presentation delays. None of these affect correctness; tune freely.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Pacing {
    pub shake: Duration,
    pub match_delay: Duration,
    pub mismatch_delay: Duration,
    pub celebration: Duration,
}

impl Default for Pacing {
    fn default() -> Self {
        Self {
            shake: Duration::from_millis(500),
            match_delay: Duration::from_millis(500),
            mismatch_delay: Duration::from_millis(1000),
            celebration: Duration::from_millis(1500),
        }
    }
}

impl From<&Config> for Pacing {
    fn from(cfg: &Config) -> Self {
        Self {
            shake: Duration::from_millis(cfg.shake_ms),
            match_delay: Duration::from_millis(cfg.match_delay_ms),
            mismatch_delay: Duration::from_millis(cfg.mismatch_delay_ms),
            celebration: Duration::from_millis(cfg.celebration_ms),
        }
    }
}

/// A one-shot deadline owned by the caller and polled on every tick
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Delay {
    due: Option<Instant>,
}

impl Delay {
    pub fn arm(&mut self, now: Instant, after: Duration) {
        self.due = Some(now + after);
    }

    pub fn cancel(&mut self) {
        self.due = None;
    }

    pub fn is_armed(&self) -> bool {
        self.due.is_some()
    }

    /// Returns true exactly once, on the first poll at or past the deadline.
    pub fn fire(&mut self, now: Instant) -> bool {
        match self.due {
            Some(due) if now >= due => {
                self.due = None;
                true
            }
            _ => false,
        }
    }
}
