use serde::{Deserialize, Serialize};

use super::stats::PageStats;
use crate::core::{Category, Finding, SkippedRule};
use crate::observation::AbsentReason;
use crate::priority::{Buckets, PrioritizedAction};

/// The assembled audit of one page. Immutable once built.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AuditResult {
    pub url: String,
    pub catalog_version: String,
    pub score: u8,
    pub critical: Vec<Finding>,
    pub warning: Vec<Finding>,
    pub passing: Vec<Finding>,
    pub actions: Vec<PrioritizedAction>,
    pub skipped: Vec<SkippedRule>,
    pub notes: Vec<String>,
    #[serde(default)]
    pub page: PageStats,
}

/// Counts per bucket and per category of triggered findings.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditSummary {
    pub score: u8,
    pub critical: usize,
    pub warning: usize,
    pub passing: usize,
    pub skipped: usize,
    pub technical_issues: usize,
    pub content_issues: usize,
}

/// Compose the result from the engine's stage outputs (pure).
pub fn assemble(
    url: &str,
    catalog_version: &str,
    score: u8,
    buckets: Buckets,
    actions: Vec<PrioritizedAction>,
    skipped: Vec<SkippedRule>,
    page: PageStats,
) -> AuditResult {
    let notes = skip_notes(&skipped);
    let Buckets {
        critical,
        warning,
        passing,
    } = buckets;

    AuditResult {
        url: url.to_string(),
        catalog_version: catalog_version.to_string(),
        score,
        critical,
        warning,
        passing,
        actions,
        skipped,
        notes,
        page,
    }
}

/// One note per distinct reason, in the order reasons first appear.
///
/// Rules skipped because a precondition failed get no note: the failing
/// precondition is already reported by another finding.
fn skip_notes(skipped: &[SkippedRule]) -> Vec<String> {
    let mut groups: Vec<(&AbsentReason, Vec<&str>, &str)> = Vec::new();
    for rule in skipped {
        if matches!(rule.reason, AbsentReason::NotApplicable { .. }) {
            continue;
        }
        // Unmeasured facts are reported per key, everything else per reason
        let same_group = |reason: &AbsentReason, key: &str| {
            *reason == rule.reason
                && (rule.reason != AbsentReason::NotCollected || key == rule.key)
        };
        match groups.iter_mut().find(|(reason, _, key)| same_group(reason, key)) {
            Some((_, names, _)) => names.push(rule.name.as_str()),
            None => groups.push((&rule.reason, vec![rule.name.as_str()], rule.key.as_str())),
        }
    }

    groups
        .into_iter()
        .map(|(reason, names, key)| match reason {
            AbsentReason::SignalUnavailable { .. } => {
                format!("Advanced checks omitted: {reason}")
            }
            AbsentReason::NotConfigured { .. } => {
                format!("{} skipped: {reason}", names.join(", "))
            }
            _ => format!("{} not checked: {key} {reason}", names.join(", ")),
        })
        .collect()
}

impl AuditResult {
    pub fn applicable_count(&self) -> usize {
        self.critical.len() + self.warning.len() + self.passing.len()
    }

    pub fn triggered(&self) -> impl Iterator<Item = &Finding> {
        self.critical.iter().chain(self.warning.iter())
    }

    /// Cheapest fix among the top three actions; the better-ranked one wins
    /// a tie.
    pub fn quick_win(&self) -> Option<&PrioritizedAction> {
        self.actions.iter().take(3).min_by_key(|action| action.effort)
    }

    pub fn summary(&self) -> AuditSummary {
        let by_category =
            |category: Category| self.triggered().filter(|f| f.category == category).count();
        AuditSummary {
            score: self.score,
            critical: self.critical.len(),
            warning: self.warning.len(),
            passing: self.passing.len(),
            skipped: self.skipped.len(),
            technical_issues: by_category(Category::Technical),
            content_issues: by_category(Category::Content),
        }
    }

    pub fn is_triggered(&self, rule_id: &str) -> bool {
        self.triggered().any(|finding| finding.rule_id == rule_id)
    }

    pub fn is_skipped(&self, rule_id: &str) -> bool {
        self.skipped.iter().any(|rule| rule.rule_id == rule_id)
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}
