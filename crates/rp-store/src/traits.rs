use rp_types::{Points, Receipt, ReceiptId, ScoreRecord};

use crate::error::StoreResult;

/// Store of scored receipts keyed by issued id.
///
/// All implementations must satisfy these invariants:
/// - `submit` scores the receipt exactly once and commits the receipt and
///   its points together.
/// - Every id returned by `submit` is unique for the lifetime of the store.
/// - Once present, a record never changes and is never removed.
/// - `lookup` of an id that was never issued returns `Ok(None)`.
pub trait ReceiptStore: Send + Sync {
    /// Score and store a receipt, returning its new id.
    fn submit(&self, receipt: Receipt) -> StoreResult<ReceiptId>;

    /// Points for `id`, or `None` if no such receipt was submitted.
    fn lookup(&self, id: &ReceiptId) -> StoreResult<Option<Points>>;

    /// The full stored record for `id`.
    fn record(&self, id: &ReceiptId) -> StoreResult<Option<ScoreRecord>>;

    /// Number of stored receipts.
    fn len(&self) -> StoreResult<usize>;

    fn is_empty(&self) -> StoreResult<bool> {
        Ok(self.len()? == 0)
    }
}
