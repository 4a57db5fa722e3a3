//! Guard against overlapping list refreshes resolving out of order.
//!
//! A view's listing call may be superseded by a newer one (fast pagination
//! or filter changes); without sequencing, whichever response arrives last
//! would overwrite the page. Each outgoing refresh takes a ticket; a
//! response is applied only while its ticket is still the latest issued.

use std::sync::atomic::{AtomicU64, Ordering};

/// Issues monotonically increasing tickets for one view's refreshes.
#[derive(Debug, Default)]
pub struct RefreshSequencer {
    latest: AtomicU64,
}

/// Ticket tied to one outgoing refresh.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct RefreshTicket(u64);

impl RefreshSequencer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Issue the next ticket, superseding every earlier one.
    pub fn begin(&self) -> RefreshTicket {
        RefreshTicket(self.latest.fetch_add(1, Ordering::AcqRel) + 1)
    }

    /// Whether a response carrying this ticket may still be applied.
    pub fn is_current(&self, ticket: RefreshTicket) -> bool {
        self.latest.load(Ordering::Acquire) == ticket.0
    }

    /// Keep `result` only if `ticket` is still the latest; stale results
    /// are discarded rather than displayed.
    pub fn accept<T>(&self, ticket: RefreshTicket, result: T) -> Option<T> {
        self.is_current(ticket).then_some(result)
    }
}
