use std::fmt;

/// Monotonic tag attached to every fetch of one resource.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct RequestId(u64);

impl RequestId {
    pub fn value(&self) -> u64 {
        self.0
    }
}

impl fmt::Display for RequestId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Orders overlapping fetches of a single resource.
///
/// Requests are not deduplicated. Each gets a fresh id and only a response
/// newer than the last applied one is let through, so a slow early response
/// can never overwrite a faster later one. Failed responses are never
/// applied, so they do not hide an older success still in flight.
#[derive(Debug, Clone, Default)]
pub struct RequestSequencer {
    issued: u64,
    applied: u64,
}

impl RequestSequencer {
    pub fn issue(&mut self) -> RequestId {
        self.issued += 1;
        RequestId(self.issued)
    }

    /// True if `id` is newer than everything applied so far.
    pub fn is_fresh(&self, id: RequestId) -> bool {
        id.0 > self.applied
    }

    /// Marks `id` as applied if it is fresh.
    pub fn accept(&mut self, id: RequestId) -> bool {
        let fresh = self.is_fresh(id);
        if fresh {
            self.applied = id.0;
        }
        fresh
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ids_increase() {
        let mut seq = RequestSequencer::default();
        let a = seq.issue();
        let b = seq.issue();
        assert!(b > a);
        assert!(seq.is_fresh(a));
        assert!(seq.is_fresh(b));
    }

    #[test]
    fn stale_response_is_rejected_after_newer_one() {
        let mut seq = RequestSequencer::default();
        let old = seq.issue();
        let new = seq.issue();

        assert!(seq.accept(new), "newest response should apply");
        assert!(!seq.accept(old), "older response must be dropped");
        assert!(!seq.is_fresh(new));
    }

    #[test]
    fn in_order_responses_all_apply() {
        let mut seq = RequestSequencer::default();
        let a = seq.issue();
        let b = seq.issue();
        assert!(seq.accept(a));
        assert!(seq.accept(b));
        assert!(!seq.accept(b), "same response twice is not applied twice");
    }

    #[test]
    fn checking_freshness_does_not_apply() {
        let mut seq = RequestSequencer::default();
        let old = seq.issue();
        let new = seq.issue();

        // The newer request failed: it was checked but never accepted
        assert!(seq.is_fresh(new));
        assert!(seq.is_fresh(old), "older success must still get through");
        assert!(seq.accept(old));
        assert!(seq.is_fresh(new));
    }
}
