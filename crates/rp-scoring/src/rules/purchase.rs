use chrono::{Datelike, NaiveDate, NaiveTime};
use rp_types::{Points, Receipt};

use crate::rule::ScoringRule;

/// Wire format of `purchaseDate`.
pub const DATE_FORMAT: &str = "%Y-%m-%d";
/// Wire format of `purchaseTime` (24-hour clock).
pub const TIME_FORMAT: &str = "%H:%M";

const ODD_DAY_POINTS: Points = 6;
const AFTERNOON_POINTS: Points = 10;

/// 6 points if the day of the month in the purchase date is odd.
pub struct OddDayRule;

impl ScoringRule for OddDayRule {
    fn name(&self) -> &str {
        "odd-day"
    }

    fn points(&self, receipt: &Receipt) -> Points {
        match NaiveDate::parse_from_str(&receipt.purchase_date, DATE_FORMAT) {
            Ok(date) if date.day() % 2 == 1 => ODD_DAY_POINTS,
            Ok(_) => 0,
            Err(e) => {
                tracing::debug!(
                    rule = self.name(),
                    raw = %receipt.purchase_date,
                    error = %e,
                    "unparseable purchase date, rule contributes 0"
                );
                0
            }
        }
    }
}

/// 10 points if the purchase time is strictly after 14:00 and strictly
/// before 16:00.
///
/// 14:00 and 16:00 themselves do not qualify; 14:01 and 15:59 do.
pub struct AfternoonWindowRule;

impl AfternoonWindowRule {
    fn in_window(time: NaiveTime) -> bool {
        let (Some(start), Some(end)) = (
            NaiveTime::from_hms_opt(14, 0, 0),
            NaiveTime::from_hms_opt(16, 0, 0),
        ) else {
            return false;
        };
        start < time && time < end
    }
}

impl ScoringRule for AfternoonWindowRule {
    fn name(&self) -> &str {
        "afternoon-window"
    }

    fn points(&self, receipt: &Receipt) -> Points {
        match NaiveTime::parse_from_str(&receipt.purchase_time, TIME_FORMAT) {
            Ok(time) if Self::in_window(time) => AFTERNOON_POINTS,
            Ok(_) => 0,
            Err(e) => {
                tracing::debug!(
                    rule = self.name(),
                    raw = %receipt.purchase_time,
                    error = %e,
                    "unparseable purchase time, rule contributes 0"
                );
                0
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rules::fixtures::blank;

    fn on(date: &str) -> Points {
        OddDayRule.points(&Receipt {
            purchase_date: date.into(),
            ..blank()
        })
    }

    fn at(time: &str) -> Points {
        AfternoonWindowRule.points(&Receipt {
            purchase_time: time.into(),
            ..blank()
        })
    }

    #[test]
    fn odd_days_score() {
        assert_eq!(on("2022-01-01"), 6);
        assert_eq!(on("2022-01-31"), 6);
        assert_eq!(on("2024-02-29"), 6);
    }

    #[test]
    fn even_days_do_not_score() {
        assert_eq!(on("2022-03-20"), 0);
        assert_eq!(on("2022-01-02"), 0);
    }

    #[test]
    fn invalid_dates_score_zero() {
        assert_eq!(on("2023-02-29"), 0);
        assert_eq!(on("01/01/2022"), 0);
        assert_eq!(on(""), 0);
    }

    #[test]
    fn window_excludes_both_edges() {
        assert_eq!(at("14:00"), 0);
        assert_eq!(at("16:00"), 0);
    }

    #[test]
    fn window_includes_interior() {
        assert_eq!(at("14:01"), 10);
        assert_eq!(at("14:33"), 10);
        assert_eq!(at("15:00"), 10);
        assert_eq!(at("15:59"), 10);
    }

    #[test]
    fn outside_window() {
        assert_eq!(at("13:59"), 0);
        assert_eq!(at("13:01"), 0);
        assert_eq!(at("16:01"), 0);
        assert_eq!(at("02:30"), 0);
    }

    #[test]
    fn invalid_times_score_zero() {
        assert_eq!(at("25:00"), 0);
        assert_eq!(at("2:30pm"), 0);
        assert_eq!(at(""), 0);
    }
}
