pub mod errors;

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::observation::AbsentReason;

pub use errors::{Error, NormalizationError, Result};

/// Severity a rule reports when it triggers.
///
/// Variant order is priority order: `Critical` sorts before `Warning`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Critical,
    Warning,
}

/// Expected benefit of fixing a finding. `High` sorts first.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Impact {
    High,
    Medium,
    Low,
}

/// Expected cost of fixing a finding. `Low` sorts first so cheaper fixes
/// surface ahead of expensive ones with the same impact.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Effort {
    Low,
    Medium,
    High,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Technical,
    Content,
}

impl Severity {
    pub fn label(&self) -> &'static str {
        match self {
            Severity::Critical => "critical",
            Severity::Warning => "warning",
        }
    }
}

impl Impact {
    pub fn label(&self) -> &'static str {
        match self {
            Impact::High => "high",
            Impact::Medium => "medium",
            Impact::Low => "low",
        }
    }
}

impl Effort {
    pub fn label(&self) -> &'static str {
        match self {
            Effort::Low => "low",
            Effort::Medium => "medium",
            Effort::High => "high",
        }
    }
}

impl Category {
    pub fn label(&self) -> &'static str {
        match self {
            Category::Technical => "technical",
            Category::Content => "content",
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl fmt::Display for Impact {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl fmt::Display for Effort {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Outcome of evaluating one applicable rule against one observation set.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Finding {
    pub rule_id: String,
    pub name: String,
    pub category: Category,
    pub severity: Severity,
    pub impact: Impact,
    pub effort: Effort,
    /// `false` when the page passes the check
    pub triggered: bool,
    pub message: String,
    pub remedy: String,
    /// Declaration index of the rule in its catalog
    pub position: usize,
}

impl Finding {
    pub fn is_triggered(&self) -> bool {
        self.triggered
    }
}

/// A rule that could not be evaluated because an observation it reads is absent.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SkippedRule {
    pub rule_id: String,
    pub name: String,
    /// Observation key that was absent
    pub key: String,
    pub reason: AbsentReason,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_enum_order_matches_priority() {
        assert!(Severity::Critical < Severity::Warning);
        assert!(Impact::High < Impact::Medium && Impact::Medium < Impact::Low);
        assert!(Effort::Low < Effort::Medium && Effort::Medium < Effort::High);
    }

    #[test]
    fn test_enums_serialize_lowercase() {
        assert_eq!(
            serde_json::to_string(&Severity::Critical).unwrap(),
            "\"critical\""
        );
        assert_eq!(serde_json::to_string(&Effort::Medium).unwrap(), "\"medium\"");
        assert_eq!(Category::Technical.to_string(), "technical");
    }
}
