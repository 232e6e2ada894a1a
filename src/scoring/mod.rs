//! Score a page from its triggered findings.
//!
//! Each triggered finding costs `base_weight(severity) × impact_multiplier(impact)`
//! points off a starting 100. With the default weights:
//!
//! | severity \ impact | high | medium | low |
//! |-------------------|------|--------|-----|
//! | critical (15)     | 22.5 | 15     | 7.5 |
//! | warning (5)       | 7.5  | 5      | 2.5 |
//!
//! The result is clamped to `0..=100` and rounded half away from zero.

use crate::config::ScoringWeights;
use crate::core::Finding;

/// Points a single finding costs; zero when it did not trigger.
pub fn penalty(finding: &Finding, weights: &ScoringWeights) -> f64 {
    if !finding.triggered {
        return 0.0;
    }
    weights.base_weight(finding.severity) * weights.impact_multiplier(finding.impact)
}

pub fn total_penalty(findings: &[Finding], weights: &ScoringWeights) -> f64 {
    findings.iter().map(|finding| penalty(finding, weights)).sum()
}

/// Integer score in `0..=100`. Skipped rules never reach this function, so
/// they neither add nor remove points.
pub fn score(findings: &[Finding], weights: &ScoringWeights) -> u8 {
    let raw = 100.0 - total_penalty(findings, weights);
    // f64::round rounds half away from zero
    raw.clamp(0.0, 100.0).round() as u8
}
