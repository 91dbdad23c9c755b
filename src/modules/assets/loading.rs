//! Simulated-latency gate for table transitions.
//!
//! One pending deadline per view: re-arming supersedes the previous one, so
//! a stale deadline can never clear the loading state of a newer transition.
//! The gate is polled from the main-loop tick; dropping the view drops the
//! deadline with it.

use std::time::{Duration, Instant};

#[derive(Debug, Clone, Copy)]
pub struct LoadingGate {
    delay: Option<Duration>,
    deadline: Option<Instant>,
}

impl LoadingGate {
    /// `None` disables the gate; [`LoadingGate::arm`] then does nothing.
    pub fn new(delay: Option<Duration>) -> Self {
        Self {
            delay,
            deadline: None,
        }
    }

    pub fn disabled() -> Self {
        Self::new(None)
    }

    /// Start (or restart) the loading window at `now`.
    pub fn arm(&mut self, now: Instant) {
        if let Some(delay) = self.delay {
            self.deadline = Some(now + delay);
        }
    }

    /// Clear an expired deadline. Returns true when loading just finished.
    pub fn poll(&mut self, now: Instant) -> bool {
        match self.deadline {
            Some(deadline) if now >= deadline => {
                self.deadline = None;
                true
            }
            _ => false,
        }
    }

    pub fn is_loading(&self) -> bool {
        self.deadline.is_some()
    }

    pub fn cancel(&mut self) {
        self.deadline = None;
    }
}
