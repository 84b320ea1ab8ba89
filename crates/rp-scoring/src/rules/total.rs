use rp_types::{Points, Receipt};
use rust_decimal::Decimal;

use crate::rule::ScoringRule;
use crate::rules::parse_amount;

const ROUND_DOLLAR_POINTS: Points = 50;
const QUARTER_MULTIPLE_POINTS: Points = 25;

/// 50 points if the total is a whole number of dollars.
pub struct RoundDollarRule;

impl ScoringRule for RoundDollarRule {
    fn name(&self) -> &str {
        "round-dollar"
    }

    fn points(&self, receipt: &Receipt) -> Points {
        match parse_amount(self.name(), "total", &receipt.total) {
            Some(total) if total.fract().is_zero() => ROUND_DOLLAR_POINTS,
            _ => 0,
        }
    }
}

/// 25 points if the total is a multiple of 0.25.
///
/// Evaluated in exact decimal arithmetic on the fractional part only, so
/// totals of any magnitude are handled: the cents must be 0, 25, 50 or 75.
/// Amounts with fractional cents never qualify.
pub struct QuarterMultipleRule;

impl ScoringRule for QuarterMultipleRule {
    fn name(&self) -> &str {
        "quarter-multiple"
    }

    fn points(&self, receipt: &Receipt) -> Points {
        let Some(total) = parse_amount(self.name(), "total", &receipt.total) else {
            return 0;
        };
        // fract() is below 1, so scaling it by 100 cannot overflow.
        let cents = total.fract() * Decimal::ONE_HUNDRED;
        if cents.fract().is_zero() && (cents % Decimal::from(25)).is_zero() {
            QUARTER_MULTIPLE_POINTS
        } else {
            0
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rules::fixtures::blank;

    fn with_total(total: &str) -> Receipt {
        Receipt {
            total: total.into(),
            ..blank()
        }
    }

    #[test]
    fn round_dollar_amounts() {
        assert_eq!(RoundDollarRule.points(&with_total("9.00")), 50);
        assert_eq!(RoundDollarRule.points(&with_total("9")), 50);
        assert_eq!(RoundDollarRule.points(&with_total("0.00")), 50);
        assert_eq!(RoundDollarRule.points(&with_total("9.01")), 0);
        assert_eq!(RoundDollarRule.points(&with_total("35.35")), 0);
    }

    #[test]
    fn quarter_multiples() {
        for total in ["9.00", "0.25", "0.50", "12.75", "100"] {
            assert_eq!(QuarterMultipleRule.points(&with_total(total)), 25, "{total}");
        }
        for total in ["35.35", "0.10", "12.74", "12.255"] {
            assert_eq!(QuarterMultipleRule.points(&with_total(total)), 0, "{total}");
        }
    }

    #[test]
    fn binary_float_edge_is_not_a_quarter() {
        assert_eq!(QuarterMultipleRule.points(&with_total("18.74")), 0);
        assert_eq!(RoundDollarRule.points(&with_total("18.74")), 0);
    }

    #[test]
    fn round_and_quarter_both_apply() {
        let receipt = with_total("20.00");
        assert_eq!(RoundDollarRule.points(&receipt) + QuarterMultipleRule.points(&receipt), 75);
    }

    #[test]
    fn malformed_total_scores_zero() {
        for total in ["", "abc", "1.2.3", "$5.00"] {
            assert_eq!(RoundDollarRule.points(&with_total(total)), 0, "{total:?}");
            assert_eq!(QuarterMultipleRule.points(&with_total(total)), 0, "{total:?}");
        }
    }

    #[test]
    fn huge_whole_totals_are_quarter_multiples() {
        for total in ["1000000000000000000000000000", "79228162514264337593543950335"] {
            let receipt = with_total(total);
            assert_eq!(QuarterMultipleRule.points(&receipt), 25, "{total}");
            assert_eq!(RoundDollarRule.points(&receipt), 50, "{total}");
        }
    }

    #[test]
    fn huge_totals_with_cents() {
        let quarter = with_total("100000000000000000000000000.75");
        assert_eq!(QuarterMultipleRule.points(&quarter), 25);
        assert_eq!(RoundDollarRule.points(&quarter), 0);

        let odd_cents = with_total("100000000000000000000000000.74");
        assert_eq!(QuarterMultipleRule.points(&odd_cents), 0);
    }
}
