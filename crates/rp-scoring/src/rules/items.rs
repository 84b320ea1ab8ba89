use rp_types::{Item, Points, Receipt};
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;

use crate::rule::ScoringRule;
use crate::rules::parse_amount;

const POINTS_PER_PAIR: Points = 5;

/// 5 points for every two items; an odd item out scores nothing.
pub struct ItemPairRule;

impl ScoringRule for ItemPairRule {
    fn name(&self) -> &str {
        "item-pairs"
    }

    fn points(&self, receipt: &Receipt) -> Points {
        let pairs = (receipt.item_count() / 2) as Points;
        pairs.saturating_mul(POINTS_PER_PAIR)
    }
}

/// `ceil(price * 0.2)` points for each item whose trimmed description length
/// is a positive multiple of 3.
///
/// Length is counted in characters after trimming leading and trailing
/// whitespace. Descriptions that trim to nothing never qualify.
pub struct DescriptionLengthRule;

impl DescriptionLengthRule {
    fn item_points(&self, item: &Item) -> Points {
        let len = item.short_description.trim().chars().count();
        if len == 0 || len % 3 != 0 {
            return 0;
        }
        let Some(price) = parse_amount(self.name(), "price", &item.price) else {
            return 0;
        };
        if price <= Decimal::ZERO {
            return 0;
        }
        // Bonuses beyond the points range saturate, like the total does.
        price
            .checked_mul(Decimal::new(2, 1))
            .map(|scaled| scaled.ceil())
            .and_then(|bonus| bonus.to_u64())
            .unwrap_or(Points::MAX)
    }
}

impl ScoringRule for DescriptionLengthRule {
    fn name(&self) -> &str {
        "description-length"
    }

    fn points(&self, receipt: &Receipt) -> Points {
        receipt
            .items
            .iter()
            .map(|item| self.item_points(item))
            .fold(0, Points::saturating_add)
    }
}
