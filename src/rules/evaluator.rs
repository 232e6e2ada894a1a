use super::{RuleCatalog, RuleContext};
use crate::core::{Finding, SkippedRule};
use crate::observation::ObservationSet;

/// Findings for every applicable rule plus the rules that were skipped.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Evaluation {
    /// In catalog declaration order
    pub findings: Vec<Finding>,
    pub skipped: Vec<SkippedRule>,
}

/// Run every catalog rule against `observations`.
///
/// A rule whose check hits an absent observation yields no finding; it is
/// recorded in `skipped` with the key and reason instead.
pub fn evaluate(
    observations: &ObservationSet,
    catalog: &RuleCatalog,
    ctx: &RuleContext<'_>,
) -> Evaluation {
    let mut evaluation = Evaluation::default();

    for (position, rule) in catalog.iter().enumerate() {
        match rule.run(observations, ctx) {
            Ok(check) => evaluation.findings.push(rule.finding(position, check)),
            Err(missing) => {
                tracing::debug!(
                    rule = rule.id,
                    key = %missing.key,
                    reason = %missing.reason,
                    "rule skipped"
                );
                evaluation.skipped.push(SkippedRule {
                    rule_id: rule.id.to_string(),
                    name: rule.name.to_string(),
                    key: missing.key,
                    reason: missing.reason,
                });
            }
        }
    }

    evaluation
}
