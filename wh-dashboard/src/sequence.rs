//! Per-field request sequencing.
//!
//! Every request for a field group takes a ticket before it goes out. When
//! the response comes back it is applied only if no newer ticket has been
//! applied already, so a slow, older response can never overwrite a newer one.

use std::cell::Cell;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Ticket(u64);

#[derive(Debug, Default)]
pub struct RequestSequence {
    issued: Cell<u64>,
    applied: Cell<u64>,
}

impl RequestSequence {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn issue(&self) -> Ticket {
        let next = self.issued.get() + 1;
        self.issued.set(next);
        Ticket(next)
    }

    /// Record `ticket` as applied if it is newer than the last applied one.
    /// Returns `false` for stale tickets, which must be discarded.
    pub fn accept(&self, ticket: Ticket) -> bool {
        if ticket.0 > self.applied.get() {
            self.applied.set(ticket.0);
            true
        } else {
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_in_order_responses_are_accepted() {
        let seq = RequestSequence::new();
        let first = seq.issue();
        assert!(seq.accept(first));
        let second = seq.issue();
        assert!(seq.accept(second));
    }

    #[test]
    fn test_older_response_after_newer_is_stale() {
        let seq = RequestSequence::new();
        let older = seq.issue();
        let newer = seq.issue();
        assert!(older < newer);
        assert!(seq.accept(newer));
        assert!(!seq.accept(older));
    }

    #[test]
    fn test_older_response_first_is_still_applied() {
        let seq = RequestSequence::new();
        let older = seq.issue();
        let newer = seq.issue();
        assert!(seq.accept(older));
        assert!(seq.accept(newer));
    }
}
