use std::collections::HashMap;
use std::sync::RwLock;

use rp_scoring::ScoreCalculator;
use rp_types::{Points, Receipt, ReceiptId, ScoreRecord};

use crate::error::{StoreError, StoreResult};
use crate::id::{IdGenerator, UuidIdGenerator};
use crate::traits::ReceiptStore;

/// How many times `submit` asks the generator for an unused id.
const MAX_ID_ATTEMPTS: usize = 16;

/// In-memory, HashMap-based receipt store.
///
/// Records live behind a single `RwLock`: submissions take the write guard,
/// lookups share the read guard. Scoring happens before the write guard is
/// taken, so the critical section only covers id generation and the insert.
/// Everything is lost when the store is dropped.
pub struct InMemoryReceiptStore {
    records: RwLock<HashMap<ReceiptId, ScoreRecord>>,
    calculator: ScoreCalculator,
    ids: Box<dyn IdGenerator>,
}

impl InMemoryReceiptStore {
    /// Create an empty store with the default rules and random UUID ids.
    pub fn new() -> Self {
        Self::with_parts(ScoreCalculator::with_default_rules(), Box::new(UuidIdGenerator))
    }

    /// Create an empty store that draws ids from `ids`.
    pub fn with_id_generator(ids: impl IdGenerator + 'static) -> Self {
        Self::with_parts(ScoreCalculator::with_default_rules(), Box::new(ids))
    }

    pub fn with_parts(calculator: ScoreCalculator, ids: Box<dyn IdGenerator>) -> Self {
        Self {
            records: RwLock::new(HashMap::new()),
            calculator,
            ids,
        }
    }

    pub fn calculator(&self) -> &ScoreCalculator {
        &self.calculator
    }

    fn fresh_id(&self, records: &HashMap<ReceiptId, ScoreRecord>) -> StoreResult<ReceiptId> {
        for attempt in 1..=MAX_ID_ATTEMPTS {
            let id = self.ids.next_id();
            if !records.contains_key(&id) {
                return Ok(id);
            }
            tracing::warn!(%id, attempt, "generated receipt id already issued, retrying");
        }
        Err(StoreError::IdExhausted {
            attempts: MAX_ID_ATTEMPTS,
        })
    }
}

impl Default for InMemoryReceiptStore {
    fn default() -> Self {
        Self::new()
    }
}

impl ReceiptStore for InMemoryReceiptStore {
    fn submit(&self, receipt: Receipt) -> StoreResult<ReceiptId> {
        let points = self.calculator.compute(&receipt);

        let mut records = self.records.write().map_err(|_| StoreError::LockPoisoned)?;
        let id = self.fresh_id(&records)?;
        records.insert(id.clone(), ScoreRecord::new(id.clone(), receipt, points));
        drop(records);

        tracing::info!(%id, points, "receipt accepted");
        Ok(id)
    }

    fn lookup(&self, id: &ReceiptId) -> StoreResult<Option<Points>> {
        let records = self.records.read().map_err(|_| StoreError::LockPoisoned)?;
        let points = records.get(id).map(|record| record.points);
        tracing::debug!(%id, found = points.is_some(), "points lookup");
        Ok(points)
    }

    fn record(&self, id: &ReceiptId) -> StoreResult<Option<ScoreRecord>> {
        let records = self.records.read().map_err(|_| StoreError::LockPoisoned)?;
        Ok(records.get(id).cloned())
    }

    fn len(&self) -> StoreResult<usize> {
        let records = self.records.read().map_err(|_| StoreError::LockPoisoned)?;
        Ok(records.len())
    }
}

impl std::fmt::Debug for InMemoryReceiptStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let count = self.records.read().map(|r| r.len()).ok();
        f.debug_struct("InMemoryReceiptStore")
            .field("record_count", &count)
            .field("calculator", &self.calculator)
            .finish()
    }
}
