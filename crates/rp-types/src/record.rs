use serde::{Deserialize, Serialize};

use crate::id::ReceiptId;
use crate::receipt::Receipt;

/// Reward points awarded to a receipt.
pub type Points = u64;

/// A receipt as stored after acceptance, paired with its score.
///
/// Created exactly once per accepted receipt and never updated. Keeping the
/// receipt and its points in one value means a store can never hold one
/// without the other.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreRecord {
    pub id: ReceiptId,
    pub receipt: Receipt,
    pub points: Points,
}

impl ScoreRecord {
    pub fn new(id: ReceiptId, receipt: Receipt, points: Points) -> Self {
        Self {
            id,
            receipt,
            points,
        }
    }
}
