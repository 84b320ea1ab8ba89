use std::sync::atomic::{AtomicU64, Ordering};

use rp_types::ReceiptId;

/// Source of fresh receipt ids.
///
/// Production stores use [`UuidIdGenerator`]; tests inject
/// [`SequentialIdGenerator`] or a closure to get predictable ids.
pub trait IdGenerator: Send + Sync {
    fn next_id(&self) -> ReceiptId;
}

impl<F> IdGenerator for F
where
    F: Fn() -> ReceiptId + Send + Sync,
{
    fn next_id(&self) -> ReceiptId {
        self()
    }
}

/// Random (v4) UUIDs in hyphenated form. Not derivable from receipt content.
#[derive(Clone, Copy, Debug, Default)]
pub struct UuidIdGenerator;

impl IdGenerator for UuidIdGenerator {
    fn next_id(&self) -> ReceiptId {
        ReceiptId::from_uuid(uuid::Uuid::new_v4())
    }
}

/// Deterministic ids of the form `{prefix}-{n}`, starting at 1.
#[derive(Debug)]
pub struct SequentialIdGenerator {
    prefix: String,
    next: AtomicU64,
}

impl SequentialIdGenerator {
    pub fn new(prefix: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
            next: AtomicU64::new(1),
        }
    }
}

impl IdGenerator for SequentialIdGenerator {
    fn next_id(&self) -> ReceiptId {
        let n = self.next.fetch_add(1, Ordering::Relaxed);
        ReceiptId::new(format!("{}-{n}", self.prefix))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn uuid_ids_are_distinct_and_parseable() {
        let ids: HashSet<ReceiptId> = (0..100).map(|_| UuidIdGenerator.next_id()).collect();
        assert_eq!(ids.len(), 100);
        for id in &ids {
            assert!(ReceiptId::parse(id.as_str()).is_ok());
        }
    }

    #[test]
    fn sequential_ids() {
        let ids = SequentialIdGenerator::new("r");
        assert_eq!(ids.next_id().as_str(), "r-1");
        assert_eq!(ids.next_id().as_str(), "r-2");
        assert_eq!(ids.next_id().as_str(), "r-3");
    }

    #[test]
    fn closures_are_generators() {
        let fixed = || ReceiptId::new("always");
        assert_eq!(fixed.next_id().as_str(), "always");
    }
}
