//! Built-in scoring rules.

pub mod items;
pub mod purchase;
pub mod retailer;
pub mod total;

pub use items::{DescriptionLengthRule, ItemPairRule};
pub use purchase::{AfternoonWindowRule, OddDayRule};
pub use retailer::RetailerNameRule;
pub use total::{QuarterMultipleRule, RoundDollarRule};

use rust_decimal::Decimal;

/// Parse a money amount exactly, logging and returning `None` on failure.
pub(crate) fn parse_amount(rule: &str, field: &str, raw: &str) -> Option<Decimal> {
    match raw.parse::<Decimal>() {
        Ok(value) => Some(value),
        Err(e) => {
            tracing::debug!(rule, field, raw, error = %e, "unparseable amount, rule contributes 0");
            None
        }
    }
}
