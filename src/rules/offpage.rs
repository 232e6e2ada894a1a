//! Rules fed by external signals. These are skipped whenever the signal
//! behind them could not be obtained.

use super::{plural, Check, Rule, RuleContext};
use crate::core::{Category, Effort, Impact, Severity};
use crate::observation::{keys, Missing, ObservationSet};

pub const CORE_WEB_VITALS: Rule = Rule {
    id: "core-web-vitals",
    version: 1,
    name: "Core Web Vitals",
    category: Category::Technical,
    severity: Severity::Warning,
    impact: Impact::High,
    effort: Effort::High,
    reads: &[keys::CWV_LCP_MS, keys::CWV_CLS, keys::CWV_INP_MS],
    remedy: "Optimise the largest contentful element, reserve layout space and trim main-thread work",
    check: check_core_web_vitals,
};

fn check_core_web_vitals(obs: &ObservationSet, ctx: &RuleContext<'_>) -> Result<Check, Missing> {
    let lcp = obs.int(keys::CWV_LCP_MS)?;
    let cls = obs.float(keys::CWV_CLS)?;
    let inp = obs.int(keys::CWV_INP_MS)?;
    let t = ctx.thresholds;

    let mut failing = Vec::new();
    if lcp > t.max_lcp_ms as i64 {
        failing.push(format!("LCP {lcp} ms > {} ms", t.max_lcp_ms));
    }
    if cls > t.max_cls {
        failing.push(format!("CLS {cls:.2} > {:.2}", t.max_cls));
    }
    if inp > t.max_inp_ms as i64 {
        failing.push(format!("INP {inp} ms > {} ms", t.max_inp_ms));
    }

    Ok(if failing.is_empty() {
        Check::pass(format!(
            "Core Web Vitals good (LCP {lcp} ms, CLS {cls:.2}, INP {inp} ms)"
        ))
    } else {
        Check::trigger(format!(
            "Core Web Vitals need improvement ({})",
            failing.join(", ")
        ))
    })
}

pub const BACKLINKS: Rule = Rule {
    id: "backlinks",
    version: 1,
    name: "Backlink profile",
    category: Category::Technical,
    severity: Severity::Warning,
    impact: Impact::Medium,
    effort: Effort::High,
    reads: &[keys::REFERRING_DOMAINS],
    remedy: "Earn links from relevant, authoritative sites",
    check: check_backlinks,
};

fn check_backlinks(obs: &ObservationSet, ctx: &RuleContext<'_>) -> Result<Check, Missing> {
    let domains = obs.int(keys::REFERRING_DOMAINS)?;
    let minimum = ctx.thresholds.min_referring_domains;
    Ok(if domains < minimum as i64 {
        Check::trigger(format!(
            "Few referring domains ({domains}, aim for {minimum}+)"
        ))
    } else {
        Check::pass(format!(
            "{} link here",
            plural(domains, "referring domain", "referring domains")
        ))
    })
}

pub const COMPETITOR_KEYWORDS: Rule = Rule {
    id: "competitor-keywords",
    version: 1,
    name: "Competitor keyword coverage",
    category: Category::Content,
    severity: Severity::Warning,
    impact: Impact::Medium,
    effort: Effort::Medium,
    reads: &[keys::COMPETITOR_KEYWORD_GAPS],
    remedy: "Cover the topics competitors rank for",
    check: check_competitor_keywords,
};

fn check_competitor_keywords(
    obs: &ObservationSet,
    _ctx: &RuleContext<'_>,
) -> Result<Check, Missing> {
    let gaps = obs.list(keys::COMPETITOR_KEYWORD_GAPS)?;
    Ok(if gaps.is_empty() {
        Check::pass("Page covers every competitor keyword")
    } else {
        Check::trigger(format!(
            "Competitor covers {} missing here: {}",
            plural(gaps.len() as i64, "keyword", "keywords"),
            gaps.join(", ")
        ))
    })
}
