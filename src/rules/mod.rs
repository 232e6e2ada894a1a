//! Data-driven SEO rules.
//!
//! Every rule is a plain [`Rule`] record: identity, metadata
//! (category/severity/impact/effort), the observation keys it reads and a
//! pure check function. There is no rule trait hierarchy; a single generic
//! evaluator ([`evaluator::evaluate`]) runs them all.
//!
//! A check returns `Err(Missing)` through `?` as soon as an observation it
//! needs is absent, which the evaluator records as a skipped rule.

pub mod catalog;
pub mod content;
pub mod evaluator;
pub mod offpage;
pub mod technical;

use crate::config::{AuditOptions, Thresholds};
use crate::core::{Category, Effort, Finding, Impact, Severity};
use crate::observation::{Missing, ObservationSet};

pub use catalog::RuleCatalog;
pub use evaluator::{evaluate, Evaluation};

/// Result of a check that could be evaluated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Check {
    /// The page passes; carries the pass message
    Pass(String),
    /// The rule triggers; carries the issue message
    Trigger(String),
}

impl Check {
    pub fn pass(message: impl Into<String>) -> Self {
        Check::Pass(message.into())
    }

    pub fn trigger(message: impl Into<String>) -> Self {
        Check::Trigger(message.into())
    }
}

/// Everything a check may consult besides observations.
#[derive(Debug, Clone, Copy)]
pub struct RuleContext<'a> {
    pub thresholds: &'a Thresholds,
    pub options: &'a AuditOptions,
}

pub type CheckFn = fn(&ObservationSet, &RuleContext<'_>) -> Result<Check, Missing>;

#[derive(Debug, Clone, Copy)]
pub struct Rule {
    pub id: &'static str,
    pub version: u32,
    pub name: &'static str,
    pub category: Category,
    pub severity: Severity,
    pub impact: Impact,
    pub effort: Effort,
    /// Observation keys the check may read
    pub reads: &'static [&'static str],
    /// Short imperative remediation, e.g. "Add a meta description"
    pub remedy: &'static str,
    pub check: CheckFn,
}

impl Rule {
    pub fn run(&self, observations: &ObservationSet, ctx: &RuleContext<'_>) -> Result<Check, Missing> {
        (self.check)(observations, ctx)
    }

    /// Build the finding for this rule at catalog `position`.
    pub fn finding(&self, position: usize, check: Check) -> Finding {
        let (triggered, message) = match check {
            Check::Pass(message) => (false, message),
            Check::Trigger(message) => (true, message),
        };
        Finding {
            rule_id: self.id.to_string(),
            name: self.name.to_string(),
            category: self.category,
            severity: self.severity,
            impact: self.impact,
            effort: self.effort,
            triggered,
            message,
            remedy: self.remedy.to_string(),
            position,
        }
    }
}

/// `"1 image"` / `"3 images"`
pub(crate) fn plural(count: i64, singular: &str, plural: &str) -> String {
    if count == 1 {
        format!("{count} {singular}")
    } else {
        format!("{count} {plural}")
    }
}
