use rp_types::{Points, Receipt};
use serde::{Deserialize, Serialize};

use crate::rule::{RuleScore, ScoringRule};
use crate::rules::{
    AfternoonWindowRule, DescriptionLengthRule, ItemPairRule, OddDayRule, QuarterMultipleRule,
    RetailerNameRule, RoundDollarRule,
};

// ---------------------------------------------------------------------------
// ScoreBreakdown
// ---------------------------------------------------------------------------

/// Per-rule contributions for one receipt, in rule order.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreBreakdown {
    pub rules: Vec<RuleScore>,
    pub total: Points,
}

impl ScoreBreakdown {
    /// Points awarded by the named rule, if it ran.
    pub fn points_for(&self, rule: &str) -> Option<Points> {
        self.rules.iter().find(|r| r.rule == rule).map(|r| r.points)
    }
}

// ---------------------------------------------------------------------------
// ScoreCalculator
// ---------------------------------------------------------------------------

/// A configurable set of scoring rules whose contributions are summed.
///
/// The calculator holds no mutable state; a single instance can score
/// receipts from many threads at once.
pub struct ScoreCalculator {
    rules: Vec<Box<dyn ScoringRule>>,
}

impl ScoreCalculator {
    /// Create a calculator with no rules. Every receipt scores 0.
    pub fn new() -> Self {
        Self { rules: Vec::new() }
    }

    /// Create a calculator with the seven built-in rules.
    pub fn with_default_rules() -> Self {
        let mut calculator = Self::new();
        calculator.add_rule(Box::new(RetailerNameRule));
        calculator.add_rule(Box::new(RoundDollarRule));
        calculator.add_rule(Box::new(QuarterMultipleRule));
        calculator.add_rule(Box::new(ItemPairRule));
        calculator.add_rule(Box::new(DescriptionLengthRule));
        calculator.add_rule(Box::new(OddDayRule));
        calculator.add_rule(Box::new(AfternoonWindowRule));
        calculator
    }

    pub fn add_rule(&mut self, rule: Box<dyn ScoringRule>) {
        self.rules.push(rule);
    }

    pub fn rule_count(&self) -> usize {
        self.rules.len()
    }

    /// Total points for `receipt`.
    pub fn compute(&self, receipt: &Receipt) -> Points {
        self.rules
            .iter()
            .map(|rule| rule.points(receipt))
            .fold(0, Points::saturating_add)
    }

    /// Points per rule plus the total.
    pub fn breakdown(&self, receipt: &Receipt) -> ScoreBreakdown {
        let rules: Vec<RuleScore> = self
            .rules
            .iter()
            .map(|rule| RuleScore {
                rule: rule.name().to_string(),
                points: rule.points(receipt),
            })
            .collect();
        let total = rules.iter().map(|r| r.points).fold(0, Points::saturating_add);
        ScoreBreakdown { rules, total }
    }
}

impl Default for ScoreCalculator {
    fn default() -> Self {
        Self::with_default_rules()
    }
}

impl std::fmt::Debug for ScoreCalculator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let names: Vec<&str> = self.rules.iter().map(|r| r.name()).collect();
        f.debug_struct("ScoreCalculator").field("rules", &names).finish()
    }
}
