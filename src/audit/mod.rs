//! The audit pipeline: normalize → evaluate → score / categorize →
//! prioritize → assemble.

mod compare;
mod result;
mod stats;

pub use compare::{compare, Comparison};
pub use result::{assemble, AuditResult, AuditSummary};
pub use stats::{PageStats, TITLE_PREVIEW_CHARS};

use rayon::prelude::*;
use tracing::{debug, info_span};

use crate::config::{AuditOptions, AuditSettings};
use crate::core::NormalizationError;
use crate::facts::PageFacts;
use crate::normalize::normalize;
use crate::priority::{categorize, prioritize};
use crate::rules::{evaluate, RuleCatalog, RuleContext};
use crate::scoring::score;
use crate::signals::Signals;

/// Runs audits against an injected catalog and settings.
///
/// Holds only shared references, so one auditor can serve any number of
/// concurrent audits.
#[derive(Debug, Clone, Copy)]
pub struct Auditor<'a> {
    catalog: &'a RuleCatalog,
    settings: &'a AuditSettings,
}

impl<'a> Auditor<'a> {
    pub fn new(catalog: &'a RuleCatalog, settings: &'a AuditSettings) -> Self {
        Self { catalog, settings }
    }

    pub fn catalog(&self) -> &'a RuleCatalog {
        self.catalog
    }

    pub fn settings(&self) -> &'a AuditSettings {
        self.settings
    }

    /// Audit one page. Fails only when the page facts are malformed.
    pub fn audit(
        &self,
        facts: &PageFacts,
        signals: &Signals,
        options: &AuditOptions,
    ) -> Result<AuditResult, NormalizationError> {
        let span = info_span!("audit", url = %facts.url, deep = options.deep);
        let _guard = span.enter();

        let observations = normalize(facts, signals, options)?;
        let ctx = RuleContext {
            thresholds: &self.settings.thresholds,
            options,
        };
        let evaluation = evaluate(&observations, self.catalog, &ctx);

        let score = score(&evaluation.findings, &self.settings.scoring);
        let buckets = categorize(&evaluation.findings);
        let actions = prioritize(buckets.triggered());
        debug!(
            score,
            critical = buckets.critical.len(),
            warning = buckets.warning.len(),
            passing = buckets.passing.len(),
            skipped = evaluation.skipped.len(),
            "audit complete"
        );

        Ok(assemble(
            &facts.url,
            self.catalog.version(),
            score,
            buckets,
            actions,
            evaluation.skipped,
            PageStats::from_observations(&observations),
        ))
    }

    /// Audit many pages in parallel. Results keep the input order and one
    /// malformed page does not affect the others.
    pub fn audit_batch(
        &self,
        pages: &[(PageFacts, Signals)],
        options: &AuditOptions,
    ) -> Vec<Result<AuditResult, NormalizationError>> {
        pages
            .par_iter()
            .map(|(facts, signals)| self.audit(facts, signals, options))
            .collect()
    }
}

/// Audit with the standard catalog and default settings.
pub fn audit_page(
    facts: &PageFacts,
    signals: &Signals,
    options: &AuditOptions,
) -> Result<AuditResult, NormalizationError> {
    let settings = AuditSettings::default();
    Auditor::new(RuleCatalog::global(), &settings).audit(facts, signals, options)
}
