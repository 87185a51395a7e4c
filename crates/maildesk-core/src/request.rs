//! Tickets for discarding stale asynchronous responses.
//!
//! Each fetch is tagged with a [`Ticket`]. When the response arrives the
//! owner asks its [`RequestTracker`] whether the ticket is still current;
//! responses for superseded or invalidated requests are dropped.

use std::sync::atomic::{AtomicU64, Ordering};

static NEXT_TICKET: AtomicU64 = AtomicU64::new(1);

/// Identifies one in-flight request. Unique within the process.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Ticket(u64);

/// Remembers the latest ticket issued for one kind of request.
#[derive(Debug, Clone, Default)]
pub struct RequestTracker {
    latest: Option<Ticket>,
}

impl RequestTracker {
    /// Creates a tracker with nothing in flight.
    #[must_use]
    pub const fn new() -> Self {
        Self { latest: None }
    }

    /// Issues a ticket, superseding any earlier one.
    pub fn issue(&mut self) -> Ticket {
        let ticket = Ticket(NEXT_TICKET.fetch_add(1, Ordering::Relaxed));
        self.latest = Some(ticket);
        ticket
    }

    /// Whether `ticket` is the latest one issued and not yet invalidated.
    #[must_use]
    pub fn is_current(&self, ticket: Ticket) -> bool {
        self.latest == Some(ticket)
    }

    /// Whether a request is outstanding.
    #[must_use]
    pub const fn is_pending(&self) -> bool {
        self.latest.is_some()
    }

    /// Accepts `ticket` as the response for the current request.
    ///
    /// Returns `false` for stale tickets. A current ticket is consumed, so a
    /// second delivery with the same ticket is rejected.
    pub fn complete(&mut self, ticket: Ticket) -> bool {
        if self.is_current(ticket) {
            self.latest = None;
            true
        } else {
            false
        }
    }

    /// Makes every outstanding ticket stale.
    pub fn invalidate(&mut self) {
        self.latest = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_latest_ticket_wins() {
        let mut tracker = RequestTracker::new();
        let first = tracker.issue();
        let second = tracker.issue();
        assert!(!tracker.is_current(first));
        assert!(tracker.is_current(second));
        assert!(!tracker.complete(first));
        assert!(tracker.complete(second));
        assert!(!tracker.is_pending());
    }

    #[test]
    fn test_complete_consumes_ticket() {
        let mut tracker = RequestTracker::new();
        let ticket = tracker.issue();
        assert!(tracker.complete(ticket));
        assert!(!tracker.complete(ticket));
    }

    #[test]
    fn test_invalidate() {
        let mut tracker = RequestTracker::new();
        let ticket = tracker.issue();
        tracker.invalidate();
        assert!(!tracker.is_current(ticket));
        assert!(!tracker.is_pending());
    }

    #[test]
    fn test_tickets_unique_across_trackers() {
        let mut a = RequestTracker::new();
        let mut b = RequestTracker::new();
        let ta = a.issue();
        let tb = b.issue();
        assert_ne!(ta, tb);
        assert!(!a.is_current(tb));
    }
}
