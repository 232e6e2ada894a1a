use serde::{Deserialize, Serialize};

use crate::core::{Finding, Severity};

/// Findings split by outcome. Every finding lands in exactly one bucket.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Buckets {
    pub critical: Vec<Finding>,
    pub warning: Vec<Finding>,
    pub passing: Vec<Finding>,
}

impl Buckets {
    pub fn len(&self) -> usize {
        self.critical.len() + self.warning.len() + self.passing.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Triggered findings, critical first, each group in declaration order
    pub fn triggered(&self) -> impl Iterator<Item = &Finding> {
        self.critical.iter().chain(self.warning.iter())
    }
}

/// Split findings into critical / warning / passing (pure).
///
/// Input order is preserved inside every bucket, so findings produced by the
/// evaluator stay in catalog declaration order.
pub fn categorize(findings: &[Finding]) -> Buckets {
    findings
        .iter()
        .fold(Buckets::default(), |mut buckets, finding| {
            let bucket = match (finding.triggered, finding.severity) {
                (false, _) => &mut buckets.passing,
                (true, Severity::Critical) => &mut buckets.critical,
                (true, Severity::Warning) => &mut buckets.warning,
            };
            bucket.push(finding.clone());
            buckets
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Category, Effort, Impact};

    fn finding(position: usize, severity: Severity, triggered: bool) -> Finding {
        Finding {
            rule_id: format!("rule-{position}"),
            name: format!("Rule {position}"),
            category: Category::Technical,
            severity,
            impact: Impact::Medium,
            effort: Effort::Low,
            triggered,
            message: String::new(),
            remedy: String::new(),
            position,
        }
    }

    #[test]
    fn test_categorize_preserves_order() {
        let findings = vec![
            finding(0, Severity::Warning, true),
            finding(1, Severity::Critical, false),
            finding(2, Severity::Critical, true),
            finding(3, Severity::Warning, true),
            finding(4, Severity::Warning, false),
        ];
        let buckets = categorize(&findings);

        let positions = |v: &[Finding]| v.iter().map(|f| f.position).collect::<Vec<_>>();
        assert_eq!(positions(&buckets.critical), vec![2]);
        assert_eq!(positions(&buckets.warning), vec![0, 3]);
        assert_eq!(positions(&buckets.passing), vec![1, 4]);
        assert_eq!(buckets.len(), findings.len());
    }

    #[test]
    fn test_passing_critical_rule_is_passing() {
        let buckets = categorize(&[finding(0, Severity::Critical, false)]);
        assert!(buckets.critical.is_empty());
        assert_eq!(buckets.passing.len(), 1);
    }
}
