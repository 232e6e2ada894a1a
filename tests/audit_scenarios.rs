//! End-to-end audits of representative pages through the public API.

mod common;

use common::{healthy_document, healthy_page, neglected_page, page};
use pretty_assertions::assert_eq;
use seoaudit::audit::{audit_page, Auditor, PageStats};
use seoaudit::config::{AuditOptions, AuditSettings, PresetLevel};
use seoaudit::core::Severity;
use seoaudit::rules::RuleCatalog;
use seoaudit::signals::{Signal, SignalKind, SignalUnavailable, Signals, UnavailableReason};

fn messages(findings: &[seoaudit::core::Finding]) -> Vec<&str> {
    findings.iter().map(|f| f.message.as_str()).collect()
}

#[test]
fn test_neglected_page_reports_critical_gaps() {
    let result = audit_page(&neglected_page(), &Signals::new(), &AuditOptions::default()).unwrap();

    let critical = messages(&result.critical);
    assert!(critical.contains(&"Missing page title"));
    assert!(critical.contains(&"Missing meta description"));
    assert!(critical.contains(&"No H1 tag found"));
    assert!(critical.contains(&"7 images missing alt attribute"));

    assert!(messages(&result.warning).contains(&"Low word count (234 words, aim for 300+)"));

    let passing: Vec<&str> = result.passing.iter().map(|f| f.rule_id.as_str()).collect();
    for rule_id in ["https", "sitemap", "robots-txt"] {
        assert!(passing.contains(&rule_id), "{rule_id} should pass");
    }

    // 100 - (3 * 22.5 + 15 + 5) = 12.5, rounded away from zero
    assert_eq!(result.score, 13);
    assert!(result.score < 70);
}

#[test]
fn test_result_carries_page_stats() {
    let result = audit_page(&healthy_page(), &Signals::new(), &AuditOptions::default()).unwrap();
    assert_eq!(
        result.page,
        PageStats {
            title: Some("Fresh Espresso Beans Roasted Weekly | Example Roastery".into()),
            h1_count: 1,
            images: 1,
            images_missing_alt: 0,
            internal_links: 3,
            external_links: 1,
        }
    );

    let neglected = audit_page(&neglected_page(), &Signals::new(), &AuditOptions::default()).unwrap();
    assert_eq!(neglected.page.title, None);
    assert_eq!(neglected.page.h1_count, 0);
    assert_eq!(neglected.page.images_missing_alt, 7);
}

#[test]
fn test_inline_styles_over_threshold_warn() {
    let document = seoaudit::facts::Document {
        inline_style_count: 14,
        ..healthy_document()
    };
    let result = audit_page(&page(document), &Signals::new(), &AuditOptions::default()).unwrap();

    assert!(result.critical.is_empty());
    assert_eq!(
        messages(&result.warning),
        vec!["14 inline styles, consider external CSS"]
    );
    assert_eq!(result.score, 98);
}

#[test]
fn test_short_title_is_the_only_warning() {
    let document = seoaudit::facts::Document {
        title: Some("Espresso Beans | Roastery Co".into()),
        ..healthy_document()
    };
    let result = audit_page(&page(document), &Signals::new(), &AuditOptions::default()).unwrap();

    assert!(result.critical.is_empty());
    assert_eq!(
        messages(&result.warning),
        vec!["Title tag too short (28 chars, aim for 50-60)"]
    );
    assert_eq!(result.score, 95);
    assert!((85..=99).contains(&result.score));
    assert_eq!(result.actions.len(), 1);
    assert_eq!(result.actions[0].finding.rule_id, "title-length");
}

#[test]
fn test_keyword_gaps_need_configured_keywords() {
    let without_keywords =
        audit_page(&healthy_page(), &Signals::new(), &AuditOptions::default()).unwrap();
    assert!(without_keywords.is_skipped("keyword-placement"));
    assert!(!without_keywords.is_triggered("keyword-placement"));
    assert!(without_keywords
        .notes
        .contains(&"Target keyword placement skipped: keywords not configured".to_string()));

    let options = AuditOptions {
        keywords: vec!["cold brew".into()],
        ..AuditOptions::default()
    };
    let with_keywords = audit_page(&healthy_page(), &Signals::new(), &options).unwrap();
    let finding = with_keywords
        .warning
        .iter()
        .find(|f| f.rule_id == "keyword-placement")
        .unwrap();
    assert_eq!(
        finding.message,
        "Target keywords missing from title/H1/first paragraph: \
         cold brew (title, h1, first paragraph)"
    );
    assert_eq!(finding.severity, Severity::Warning);
}

#[test]
fn test_unavailable_backlinks_are_skipped_without_penalty() {
    let mut signals = Signals::new();
    signals.insert(
        SignalKind::Backlinks,
        Err(SignalUnavailable::new(
            SignalKind::Backlinks,
            UnavailableReason::NoCredential,
        )),
    );

    let baseline = audit_page(&healthy_page(), &Signals::new(), &AuditOptions::default()).unwrap();
    let result = audit_page(&healthy_page(), &signals, &AuditOptions::default()).unwrap();

    assert!(result.is_skipped("backlinks"));
    assert!(!result
        .critical
        .iter()
        .chain(&result.warning)
        .chain(&result.passing)
        .any(|f| f.rule_id == "backlinks"));
    assert_eq!(result.score, 100);
    assert_eq!(result.score, baseline.score);
    assert!(result.notes.contains(
        &"Advanced checks omitted: backlinks signal unavailable (no API credential)".to_string()
    ));
}

#[test]
fn test_available_signals_feed_offpage_rules() {
    let mut signals = Signals::new();
    signals.insert(
        SignalKind::Backlinks,
        Ok(Signal::Backlinks {
            referring_domains: 4,
            total_backlinks: 31,
        }),
    );
    signals.insert(
        SignalKind::CoreWebVitals,
        Ok(Signal::CoreWebVitals {
            lcp_ms: 1800,
            cls: 0.05,
            inp_ms: 120,
        }),
    );
    let options = AuditOptions {
        deep: true,
        ..AuditOptions::default()
    };

    let result = audit_page(&healthy_page(), &signals, &options).unwrap();

    assert!(result.is_triggered("backlinks"));
    assert!(result.passing.iter().any(|f| f.rule_id == "core-web-vitals"));
    // Warning with medium impact: 5 points
    assert_eq!(result.score, 95);
}

#[test]
fn test_every_rule_is_accounted_for_once() {
    let result = audit_page(&neglected_page(), &Signals::new(), &AuditOptions::default()).unwrap();
    let mut ids: Vec<&str> = result
        .critical
        .iter()
        .chain(&result.warning)
        .chain(&result.passing)
        .map(|f| f.rule_id.as_str())
        .chain(result.skipped.iter().map(|s| s.rule_id.as_str()))
        .collect();
    ids.sort_unstable();
    ids.dedup();
    assert_eq!(ids.len(), RuleCatalog::global().len());
}

#[test]
fn test_strict_preset_flags_more_than_lenient() {
    let document = seoaudit::facts::Document {
        word_count: 420,
        ..healthy_document()
    };
    let mut facts = page(document);
    facts.transport.load_time_ms = Some(2600);

    let run = |preset: PresetLevel| {
        let settings = AuditSettings {
            thresholds: preset.thresholds(),
            ..AuditSettings::default()
        };
        Auditor::new(RuleCatalog::global(), &settings)
            .audit(&facts, &Signals::new(), &AuditOptions::default())
            .unwrap()
    };

    let strict = run(PresetLevel::Strict);
    let lenient = run(PresetLevel::Lenient);
    assert!(strict.is_triggered("page-load-time"));
    assert!(!lenient.is_triggered("page-load-time"));
    assert!(strict.score < lenient.score);
}

#[test]
fn test_actions_follow_priority_order() {
    let result = audit_page(&neglected_page(), &Signals::new(), &AuditOptions::default()).unwrap();
    let order: Vec<&str> = result
        .actions
        .iter()
        .map(|a| a.finding.rule_id.as_str())
        .collect();
    assert_eq!(
        order,
        vec![
            "title-missing",
            "meta-description-missing",
            "h1-missing",
            "image-alt-missing",
            "word-count",
        ]
    );
    let ranks: Vec<usize> = result.actions.iter().map(|a| a.rank).collect();
    assert_eq!(ranks, vec![1, 2, 3, 4, 5]);
    assert_eq!(
        result.quick_win().map(|a| a.finding.rule_id.as_str()),
        Some("title-missing")
    );
}
