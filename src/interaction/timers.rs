use std::time::{Duration, Instant};

/// A single-shot deferred action deadline.
///
/// Stored as `Option<Deferred>` by its owner: replacing the option re-arms
/// the timer, `take()` cancels it, and both are idempotent. Firing happens by
/// polling from the frame tick rather than through an ambient timer handle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Deferred {
    deadline: Instant,
}

impl Deferred {
    pub fn after(now: Instant, delay: Duration) -> Self {
        Self {
            deadline: now + delay,
        }
    }

    #[inline]
    pub fn is_due(&self, now: Instant) -> bool {
        now >= self.deadline
    }
}

/// Clear and report a due deadline. Returns false when the slot is empty or
/// the deadline has not elapsed yet.
pub fn fire_due(slot: &mut Option<Deferred>, now: Instant) -> bool {
    match slot {
        Some(deferred) if deferred.is_due(now) => {
            *slot = None;
            true
        }
        _ => false,
    }
}
