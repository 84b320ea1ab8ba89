//! Reward point calculator for receipts.
//!
//! A receipt's score is the sum of a fixed set of independent rules. Each
//! rule looks at one aspect of the receipt (retailer name, total, items,
//! purchase date or time) and contributes a non-negative number of points.
//!
//! # Built-in Rules
//!
//! | Rule                       | Points                                      |
//! |----------------------------|---------------------------------------------|
//! | [`RetailerNameRule`]       | 1 per ASCII letter or digit in the retailer |
//! | [`RoundDollarRule`]        | 50 if the total has no cents                |
//! | [`QuarterMultipleRule`]    | 25 if the total is a multiple of 0.25       |
//! | [`ItemPairRule`]           | 5 per complete pair of items                |
//! | [`DescriptionLengthRule`]  | `ceil(price * 0.2)` per item whose trimmed description length is a multiple of 3 |
//! | [`OddDayRule`]             | 6 if the purchase day is odd                |
//! | [`AfternoonWindowRule`]    | 10 if purchased after 14:00 and before 16:00 |
//!
//! # Leniency
//!
//! The calculator is total: a date, time or amount that fails to parse makes
//! its rule contribute zero instead of failing the whole computation. Inputs
//! are expected to have been validated before scoring.

pub mod calculator;
pub mod rule;
pub mod rules;

pub use calculator::{ScoreBreakdown, ScoreCalculator};
pub use rule::{RuleScore, ScoringRule};
pub use rules::purchase::{DATE_FORMAT, TIME_FORMAT};
pub use rules::{
    AfternoonWindowRule, DescriptionLengthRule, ItemPairRule, OddDayRule, QuarterMultipleRule,
    RetailerNameRule, RoundDollarRule,
};
