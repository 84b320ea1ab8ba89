use serde::{Deserialize, Serialize};

/// One purchased line item.
///
/// Prices travel as decimal strings (`"6.49"`) so that no precision is lost
/// before scoring.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Item {
    pub short_description: String,
    pub price: String,
}

impl Item {
    pub fn new(short_description: impl Into<String>, price: impl Into<String>) -> Self {
        Self {
            short_description: short_description.into(),
            price: price.into(),
        }
    }
}

/// A purchase submitted for scoring.
///
/// Immutable once accepted. Dates are `YYYY-MM-DD`, times are 24-hour
/// `HH:MM`, and money amounts are decimal strings.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Receipt {
    pub retailer: String,
    pub purchase_date: String,
    pub purchase_time: String,
    #[serde(default)]
    pub items: Vec<Item>,
    pub total: String,
}

impl Receipt {
    /// Number of line items.
    pub fn item_count(&self) -> usize {
        self.items.len()
    }
}
