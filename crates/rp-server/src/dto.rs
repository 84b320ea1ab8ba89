//! Request and response bodies.

use rp_types::{Item, Points, ReceiptId};
use serde::{Deserialize, Serialize};

/// Body of `POST /receipts/process`.
///
/// Missing top-level fields decode as empty so validation can report them
/// as missing rather than as a decode failure.
#[derive(Clone, Debug, Default, Deserialize, Serialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ReceiptRequest {
    pub retailer: String,
    pub purchase_date: String,
    pub purchase_time: String,
    pub items: Vec<Item>,
    pub total: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub struct ProcessResponse {
    pub id: ReceiptId,
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub struct PointsResponse {
    pub points: Points,
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub struct HealthResponse {
    pub status: String,
}

impl Default for HealthResponse {
    fn default() -> Self {
        Self {
            status: "ok".into(),
        }
    }
}
