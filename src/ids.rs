//! Card id generation
//!
//! New cards get ids from an injected source instead of reading the clock at
//! the call site, so tests can pin them down.

use crate::model::CardId;

/// Source of fresh card ids
pub trait IdSource {
    /// Next unused id. Strictly greater than every id returned or reserved before.
    fn next_id(&mut self) -> CardId;

    /// Make sure future ids land above `id` (call after loading a document)
    fn reserve_above(&mut self, id: CardId);
}

/// Monotonic counter, typically seeded from the session start timestamp
#[derive(Debug, Clone)]
pub struct MonotonicIds {
    last: CardId,
}

impl MonotonicIds {
    /// The first id handed out will be `seed + 1`
    pub fn new(seed: CardId) -> Self {
        Self { last: seed }
    }

    /// Seed from a millisecond timestamp
    pub fn from_timestamp(now_ms: f64) -> Self {
        Self::new(now_ms.max(0.0) as CardId)
    }
}

impl IdSource for MonotonicIds {
    fn next_id(&mut self) -> CardId {
        self.last = self.last.saturating_add(1);
        self.last
    }

    fn reserve_above(&mut self, id: CardId) {
        self.last = self.last.max(id);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ids_are_strictly_increasing() {
        let mut ids = MonotonicIds::new(100);
        assert_eq!(ids.next_id(), 101);
        assert_eq!(ids.next_id(), 102);
    }

    #[test]
    fn test_reserve_above_skips_existing() {
        let mut ids = MonotonicIds::new(5);
        ids.reserve_above(50);
        assert_eq!(ids.next_id(), 51);
        // Reserving something lower never moves the counter back
        ids.reserve_above(10);
        assert_eq!(ids.next_id(), 52);
    }

    #[test]
    fn test_from_timestamp() {
        let mut ids = MonotonicIds::from_timestamp(1_700_000_000_000.7);
        assert_eq!(ids.next_id(), 1_700_000_000_001);
    }
}
