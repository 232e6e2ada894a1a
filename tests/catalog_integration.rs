//! Custom catalogs and settings injected through the public API.

mod common;

use common::{healthy_page, neglected_page};
use pretty_assertions::assert_eq;
use seoaudit::audit::Auditor;
use seoaudit::config::{AuditOptions, AuditSettings, ScoringWeights};
use seoaudit::core::Error;
use seoaudit::rules::{content, technical, RuleCatalog};
use seoaudit::signals::Signals;

#[test]
fn test_custom_catalog_limits_evaluation() {
    let catalog = RuleCatalog::from_rules(
        "custom-1",
        vec![technical::HTTPS, content::H1_MISSING, content::TITLE_MISSING],
    )
    .unwrap();
    let settings = AuditSettings::default();
    let result = Auditor::new(&catalog, &settings)
        .audit(&neglected_page(), &Signals::new(), &AuditOptions::default())
        .unwrap();

    assert_eq!(result.catalog_version, "custom-1");
    assert_eq!(result.applicable_count(), 3);
    let order: Vec<&str> = result
        .actions
        .iter()
        .map(|a| a.finding.rule_id.as_str())
        .collect();
    // Same severity, impact and effort: declaration order decides
    assert_eq!(order, vec!["h1-missing", "title-missing"]);
    assert_eq!(result.score, 55);
}

#[test]
fn test_duplicate_rule_ids_are_rejected() {
    let result = RuleCatalog::from_rules("dup", vec![technical::HTTPS, technical::HTTPS]);
    assert!(matches!(result, Err(Error::Catalog(message)) if message.contains("https")));
}

#[test]
fn test_scoring_weights_are_injected() {
    let settings = AuditSettings {
        scoring: ScoringWeights {
            critical: 30.0,
            ..ScoringWeights::default()
        },
        ..AuditSettings::default()
    };
    let result = Auditor::new(RuleCatalog::global(), &settings)
        .audit(&neglected_page(), &Signals::new(), &AuditOptions::default())
        .unwrap();
    assert_eq!(result.score, 0);

    let healthy = Auditor::new(RuleCatalog::global(), &settings)
        .audit(&healthy_page(), &Signals::new(), &AuditOptions::default())
        .unwrap();
    assert_eq!(healthy.score, 100);
}
