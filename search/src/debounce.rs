//! Trailing debounce timer driven by explicit instants.

use std::time::Instant;

/// A single cancellable timer slot.
///
/// At most one deadline is outstanding; scheduling again replaces it. The
/// timer never fires on its own: the owner polls it with the current time.
#[derive(Debug, Default)]
pub struct DebounceTimer {
    deadline: Option<Instant>,
}

impl DebounceTimer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Arms the timer, cancelling any pending deadline.
    /// Returns true if a pending deadline was replaced.
    pub fn schedule(&mut self, deadline: Instant) -> bool {
        self.deadline.replace(deadline).is_some()
    }

    /// Clears the pending deadline. Clearing an idle timer is a no-op.
    /// Returns true if a deadline was pending.
    pub fn cancel(&mut self) -> bool {
        self.deadline.take().is_some()
    }

    pub fn deadline(&self) -> Option<Instant> {
        self.deadline
    }

    pub fn is_pending(&self) -> bool {
        self.deadline.is_some()
    }

    pub fn is_due(&self, now: Instant) -> bool {
        self.deadline.is_some_and(|deadline| now >= deadline)
    }

    /// Clears the timer and returns true if it was due at `now`.
    pub fn fire_if_due(&mut self, now: Instant) -> bool {
        if self.is_due(now) {
            self.deadline = None;
            true
        } else {
            false
        }
    }
}
