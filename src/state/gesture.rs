use std::time::{Duration, Instant};

pub const DEFAULT_TIMEOUT: Duration = Duration::from_millis(500);

/// Detects the same key pressed twice within a timeout (`gg`).
#[derive(Debug, Clone)]
pub struct DoublePress {
    timeout: Duration,
    last: Option<(char, Instant)>,
}

impl Default for DoublePress {
    fn default() -> Self {
        Self::new(DEFAULT_TIMEOUT)
    }
}

impl DoublePress {
    pub fn new(timeout: Duration) -> Self {
        Self { timeout, last: None }
    }

    /// Record a press of `key` at `now`. Returns `true` when it completes a
    /// double press; the memory is then cleared so a third press starts over.
    pub fn press(&mut self, key: char, now: Instant) -> bool {
        if let Some((prev, at)) = self.last {
            if prev == key && now.saturating_duration_since(at) < self.timeout {
                self.last = None;
                return true;
            }
        }
        self.last = Some((key, now));
        false
    }

    /// Forget any pending first press.
    pub fn reset(&mut self) {
        self.last = None;
    }
}
