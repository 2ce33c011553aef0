#![forbid(unsafe_code)]

//! Single-slot cancellable deferred task.
//!
//! Rapid successive edits must coalesce into one filter evaluation per quiet
//! period. The slot holds at most one pending deadline: scheduling always
//! replaces any outstanding one, so at most one evaluation can ever be
//! pending. Time is injected by the caller, which keeps the state machine
//! deterministic and testable without sleeping.

use std::time::{Duration, Instant};

/// A single-slot deferred task deadline.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DebounceSlot {
    delay: Duration,
    deadline: Option<Instant>,
}

impl DebounceSlot {
    /// Create a slot firing `delay` after the most recent schedule.
    #[must_use]
    pub fn new(delay: Duration) -> Self {
        Self {
            delay,
            deadline: None,
        }
    }

    /// The configured quiet period.
    #[must_use]
    pub fn delay(&self) -> Duration {
        self.delay
    }

    /// Schedule (or reschedule) the task. Any outstanding deadline is
    /// cancelled and replaced.
    pub fn schedule(&mut self, now: Instant) {
        self.deadline = Some(now + self.delay);
    }

    /// Cancel the pending task, if any.
    pub fn cancel(&mut self) {
        self.deadline = None;
    }

    /// Whether a task is pending.
    #[must_use]
    pub fn is_pending(&self) -> bool {
        self.deadline.is_some()
    }

    /// The pending deadline, for hosts that schedule wakeups.
    #[must_use]
    pub fn deadline(&self) -> Option<Instant> {
        self.deadline
    }

    /// Consume the deadline if it has passed. Returns `true` exactly once
    /// per elapsed schedule.
    pub fn fire_if_due(&mut self, now: Instant) -> bool {
        match self.deadline {
            Some(deadline) if now >= deadline => {
                self.deadline = None;
                true
            }
            _ => false,
        }
    }
}
