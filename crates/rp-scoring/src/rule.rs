use rp_types::{Points, Receipt};
use serde::{Deserialize, Serialize};

/// A single independent scoring rule.
///
/// Rules never fail: a rule that cannot interpret the part of the receipt it
/// inspects returns `0`. Because the final score is a plain sum, the order in
/// which rules are evaluated does not matter.
///
/// The trait is object-safe and `Send + Sync` so rules can be stored in a
/// `Vec<Box<dyn ScoringRule>>` shared across request handlers.
pub trait ScoringRule: Send + Sync {
    /// Short, stable name of the rule (e.g. "retailer-name").
    fn name(&self) -> &str;

    /// Points this rule awards to `receipt`.
    fn points(&self, receipt: &Receipt) -> Points;
}

/// Points awarded by one rule for one receipt.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RuleScore {
    pub rule: String,
    pub points: Points,
}
