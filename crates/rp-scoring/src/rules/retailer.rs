use rp_types::{Points, Receipt};

use crate::rule::ScoringRule;

/// One point for every ASCII letter or digit in the retailer name.
///
/// Spaces, punctuation and non-ASCII characters score nothing.
pub struct RetailerNameRule;

impl ScoringRule for RetailerNameRule {
    fn name(&self) -> &str {
        "retailer-name"
    }

    fn points(&self, receipt: &Receipt) -> Points {
        receipt
            .retailer
            .chars()
            .filter(char::is_ascii_alphanumeric)
            .count() as Points
    }
}
