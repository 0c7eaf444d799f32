// Cancel-and-restart single-shot timer

use std::time::Duration;

/// A single-shot deadline that restarts on every trigger.
///
/// The host polls it with a monotonic timestamp. Restarting drops the
/// pending deadline, so only the latest trigger within the delay window
/// ever fires.
#[derive(Debug, Clone)]
pub struct Debouncer {
    delay: Duration,
    deadline: Option<Duration>,
}

impl Debouncer {
    pub fn new(delay: Duration) -> Self {
        Self {
            delay,
            deadline: None,
        }
    }

    /// Change the delay. A pending deadline keeps its old due time.
    pub fn set_delay(&mut self, delay: Duration) {
        self.delay = delay;
    }

    /// Cancel any pending deadline and start a new one at `now + delay`.
    pub fn restart(&mut self, now: Duration) {
        self.deadline = Some(now + self.delay);
    }

    pub fn cancel(&mut self) {
        self.deadline = None;
    }

    pub fn is_pending(&self) -> bool {
        self.deadline.is_some()
    }

    /// Returns `true` exactly once when the pending deadline has passed.
    pub fn fire(&mut self, now: Duration) -> bool {
        match self.deadline {
            Some(due) if now >= due => {
                self.deadline = None;
                true
            }
            _ => false,
        }
    }
}
