use serde::{Deserialize, Serialize};

use crate::core::{Effort, Finding, Impact, Severity};

/// One step of the action plan.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PrioritizedAction {
    /// Dense, 1-based
    pub rank: usize,
    pub finding: Finding,
    pub impact: Impact,
    pub effort: Effort,
}

/// Total sort key: severity, then impact, then effort, then declaration
/// position. Lower sorts first.
pub fn priority_key(finding: &Finding) -> (Severity, Impact, Effort, usize) {
    (
        finding.severity,
        finding.impact,
        finding.effort,
        finding.position,
    )
}

/// Rank triggered findings (pure). Passing findings are ignored.
pub fn prioritize<'a, I>(findings: I) -> Vec<PrioritizedAction>
where
    I: IntoIterator<Item = &'a Finding>,
{
    let mut triggered: Vec<&Finding> = findings
        .into_iter()
        .filter(|finding| finding.triggered)
        .collect();
    triggered.sort_by_key(|finding| priority_key(finding));

    triggered
        .into_iter()
        .enumerate()
        .map(|(index, finding)| PrioritizedAction {
            rank: index + 1,
            finding: finding.clone(),
            impact: finding.impact,
            effort: finding.effort,
        })
        .collect()
}
