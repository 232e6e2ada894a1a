use serde::{Deserialize, Serialize};

use super::{AuditResult, Auditor};
use crate::config::AuditOptions;
use crate::core::NormalizationError;
use crate::facts::PageFacts;
use crate::signals::Signals;

/// Side-by-side audit of a page and a competitor page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Comparison {
    pub subject: AuditResult,
    pub competitor: AuditResult,
    /// `subject.score - competitor.score`
    pub score_delta: i16,
    /// Rule ids triggered on the subject but not on the competitor
    pub only_subject_fails: Vec<String>,
    /// Rule ids triggered on the competitor but not on the subject
    pub only_competitor_fails: Vec<String>,
}

/// Audit both pages concurrently and diff the outcomes.
pub fn compare(
    auditor: &Auditor<'_>,
    subject: (&PageFacts, &Signals),
    competitor: (&PageFacts, &Signals),
    options: &AuditOptions,
) -> Result<Comparison, NormalizationError> {
    let (subject, competitor) = rayon::join(
        || auditor.audit(subject.0, subject.1, options),
        || auditor.audit(competitor.0, competitor.1, options),
    );
    let (subject, competitor) = (subject?, competitor?);

    let only_subject_fails = failing_only_in(&subject, &competitor);
    let only_competitor_fails = failing_only_in(&competitor, &subject);

    Ok(Comparison {
        score_delta: i16::from(subject.score) - i16::from(competitor.score),
        only_subject_fails,
        only_competitor_fails,
        subject,
        competitor,
    })
}

/// Triggered in `left`, not triggered in `right`, in `left`'s action order.
fn failing_only_in(left: &AuditResult, right: &AuditResult) -> Vec<String> {
    left.actions
        .iter()
        .map(|action| &action.finding.rule_id)
        .filter(|rule_id| !right.is_triggered(rule_id))
        .cloned()
        .collect()
}
