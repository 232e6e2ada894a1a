//! Property tests over generated pages: whatever the input, the audit keeps
//! its structural guarantees.

mod common;

use common::{healthy_document, page};
use proptest::prelude::*;
use seoaudit::audit::audit_page;
use seoaudit::config::{AuditOptions, ScoringWeights};
use seoaudit::core::Severity;
use seoaudit::facts::{Document, Heading, Image, Link};
use seoaudit::rules::RuleCatalog;
use seoaudit::scoring::score;
use seoaudit::signals::Signals;

fn arb_heading() -> impl Strategy<Value = Heading> {
    (1u8..=6, "[a-z ]{0,20}").prop_map(|(level, text)| Heading::new(level, text))
}

fn arb_image() -> impl Strategy<Value = Image> {
    prop_oneof![
        Just(None),
        Just(Some(String::new())),
        "[a-z ]{1,20}".prop_map(Some),
    ]
    .prop_map(|alt| Image {
        src: Some("/img/x.png".into()),
        alt,
    })
}

fn arb_link() -> impl Strategy<Value = Link> {
    prop_oneof![
        Just("/about"),
        Just("https://example.com/contact"),
        Just("https://other.example/page"),
        Just("mailto:hi@example.com"),
        Just("#top"),
        Just("page.html"),
    ]
    .prop_map(Link::new)
}

fn arb_document() -> impl Strategy<Value = Document> {
    (
        prop::option::of("[A-Za-z ]{0,90}"),
        prop::option::of("[A-Za-z ]{0,200}"),
        prop::collection::vec(arb_heading(), 0..8),
        prop::collection::vec(arb_image(), 0..10),
        prop::collection::vec(arb_link(), 0..12),
        0u64..2000,
        prop::option::of(0.0f64..100.0),
    )
        .prop_map(
            |(title, meta_description, headings, images, links, word_count, readability)| {
                Document {
                    title,
                    meta_description,
                    headings,
                    images,
                    links,
                    word_count,
                    readability_score: readability,
                    ..healthy_document()
                }
            },
        )
}

fn arb_options() -> impl Strategy<Value = AuditOptions> {
    (
        any::<bool>(),
        prop::collection::vec("[a-z]{3,10}", 0..3),
    )
        .prop_map(|(deep, keywords)| AuditOptions {
            deep,
            keywords,
            ..AuditOptions::default()
        })
}

proptest! {
    #[test]
    fn every_rule_lands_in_one_place(document in arb_document(), options in arb_options()) {
        let result = audit_page(&page(document), &Signals::new(), &options).unwrap();

        prop_assert_eq!(
            result.applicable_count() + result.skipped.len(),
            RuleCatalog::global().len()
        );
        prop_assert!(result.critical.iter().all(|f| f.triggered && f.severity == Severity::Critical));
        prop_assert!(result.warning.iter().all(|f| f.triggered && f.severity == Severity::Warning));
        prop_assert!(result.passing.iter().all(|f| !f.triggered));
        prop_assert!(result.skipped.iter().all(|s| !result.is_triggered(&s.rule_id)));
    }

    #[test]
    fn actions_are_a_ranking_of_triggered_findings(document in arb_document(), options in arb_options()) {
        let result = audit_page(&page(document), &Signals::new(), &options).unwrap();

        prop_assert_eq!(result.actions.len(), result.critical.len() + result.warning.len());
        for (index, action) in result.actions.iter().enumerate() {
            prop_assert_eq!(action.rank, index + 1);
        }
        for pair in result.actions.windows(2) {
            let key = |f: &seoaudit::core::Finding| (f.severity, f.impact, f.effort, f.position);
            prop_assert!(key(&pair[0].finding) < key(&pair[1].finding));
        }
    }

    #[test]
    fn score_matches_triggered_findings(document in arb_document(), options in arb_options()) {
        let result = audit_page(&page(document), &Signals::new(), &options).unwrap();

        let findings: Vec<_> = result.triggered().cloned().collect();
        prop_assert_eq!(result.score, score(&findings, &ScoringWeights::default()));
        prop_assert!(result.score <= 100);
        if result.actions.is_empty() {
            prop_assert_eq!(result.score, 100);
        }
    }

    #[test]
    fn audits_are_deterministic(document in arb_document(), options in arb_options()) {
        let facts = page(document);
        let first = audit_page(&facts, &Signals::new(), &options).unwrap();
        let second = audit_page(&facts, &Signals::new(), &options).unwrap();
        prop_assert_eq!(first, second);
    }
}
