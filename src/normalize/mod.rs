//! Signal normalizer: `PageFacts` + signals → `ObservationSet`.
//!
//! A pure transform. Missing optional data becomes an absent observation
//! with the reason it is missing; only structurally invalid facts fail.

pub mod keywords;
pub mod links;
pub mod url;

use crate::config::AuditOptions;
use crate::core::NormalizationError;
use crate::facts::{Document, PageFacts};
use crate::observation::{keys, AbsentReason, ObservationSet, ObservationValue};
use crate::signals::{Signal, SignalKind, SignalOutcome, Signals, UnavailableReason};

use self::keywords::{clean_keywords, competitor_gaps, keyword_placements};
use self::links::count_links;
use self::url::PageUrl;

pub fn normalize(
    facts: &PageFacts,
    signals: &Signals,
    options: &AuditOptions,
) -> Result<ObservationSet, NormalizationError> {
    let document = facts
        .document
        .as_ref()
        .ok_or_else(|| NormalizationError::MissingDocument {
            url: facts.url.clone(),
        })?;
    let page_url = PageUrl::parse(&facts.url)?;
    validate_headings(document)?;
    validate_signals(signals)?;

    let mut set = ObservationSet::new();
    observe_title(&mut set, document)?;
    observe_meta_description(&mut set, document)?;
    observe_headings(&mut set, document)?;
    observe_images(&mut set, document)?;
    observe_url(&mut set, &facts.url, &page_url)?;
    observe_viewport(&mut set, document)?;
    observe_performance(&mut set, facts, document)?;
    observe_site(&mut set, facts, document)?;
    observe_content(&mut set, facts, document)?;
    observe_links(&mut set, document, &page_url)?;
    observe_keywords(&mut set, document, options)?;
    observe_signals(&mut set, document, signals, options)?;

    tracing::trace!(observations = set.len(), url = %facts.url, "normalized page facts");
    Ok(set)
}

fn validate_headings(document: &Document) -> Result<(), NormalizationError> {
    match document
        .headings
        .iter()
        .find(|heading| !(1..=6).contains(&heading.level))
    {
        Some(heading) => Err(NormalizationError::InvalidHeadingLevel {
            level: heading.level,
            text: heading.text.clone(),
        }),
        None => Ok(()),
    }
}

/// Every stored signal must match the kind it is stored under, whether or
/// not this audit reads it.
fn validate_signals(signals: &Signals) -> Result<(), NormalizationError> {
    for (kind, outcome) in signals {
        if let Ok(signal) = outcome {
            if signal.kind() != *kind {
                return Err(NormalizationError::SignalKindMismatch {
                    expected: kind.label().to_string(),
                    found: signal.kind().label().to_string(),
                });
            }
        }
    }
    Ok(())
}

fn not_applicable(requires: &str) -> ObservationValue {
    ObservationValue::Absent(AbsentReason::NotApplicable {
        requires: requires.to_string(),
    })
}

fn not_collected() -> ObservationValue {
    ObservationValue::Absent(AbsentReason::NotCollected)
}

fn not_configured(option: &str) -> ObservationValue {
    ObservationValue::Absent(AbsentReason::NotConfigured {
        option: option.to_string(),
    })
}

/// Trimmed text, or `None` when missing or blank
fn non_blank(value: Option<&String>) -> Option<&str> {
    value.map(|s| s.trim()).filter(|s| !s.is_empty())
}

fn observe_title(set: &mut ObservationSet, document: &Document) -> Result<(), NormalizationError> {
    match non_blank(document.title.as_ref()) {
        Some(title) => {
            set.insert(keys::TITLE_PRESENT, true)?;
            set.insert(keys::TITLE_LENGTH, title.chars().count())?;
            set.insert(keys::TITLE_TEXT, title.to_string())?;
        }
        None => {
            set.insert(keys::TITLE_PRESENT, false)?;
            set.insert(keys::TITLE_LENGTH, not_applicable("a page title"))?;
            set.insert(keys::TITLE_TEXT, not_applicable("a page title"))?;
        }
    }
    Ok(())
}

fn observe_meta_description(
    set: &mut ObservationSet,
    document: &Document,
) -> Result<(), NormalizationError> {
    match non_blank(document.meta_description.as_ref()) {
        Some(description) => {
            set.insert(keys::META_DESCRIPTION_PRESENT, true)?;
            set.insert(keys::META_DESCRIPTION_LENGTH, description.chars().count())?;
        }
        None => {
            set.insert(keys::META_DESCRIPTION_PRESENT, false)?;
            set.insert(
                keys::META_DESCRIPTION_LENGTH,
                not_applicable("a meta description"),
            )?;
        }
    }
    Ok(())
}

/// Count places where the outline jumps down more than one level
/// (`H1` followed by `H3`). Moving back up any number of levels is fine.
fn heading_gaps(document: &Document) -> (usize, Option<String>) {
    let mut gaps = 0;
    let mut first_gap = None;
    let mut previous: Option<u8> = None;

    for heading in &document.headings {
        if let Some(prev) = previous {
            if heading.level > prev + 1 {
                gaps += 1;
                first_gap.get_or_insert_with(|| format!("H{} → H{}", prev, heading.level));
            }
        }
        previous = Some(heading.level);
    }

    (gaps, first_gap)
}

fn observe_headings(set: &mut ObservationSet, document: &Document) -> Result<(), NormalizationError> {
    let h1_count = document
        .headings
        .iter()
        .filter(|heading| heading.level == 1)
        .count();
    set.insert(keys::H1_COUNT, h1_count)?;

    let (gaps, first_gap) = heading_gaps(document);
    set.insert(keys::HEADING_LEVEL_GAPS, gaps)?;
    match first_gap {
        Some(gap) => set.insert(keys::HEADING_FIRST_GAP, gap)?,
        None => set.insert(keys::HEADING_FIRST_GAP, not_applicable("a heading gap"))?,
    }
    Ok(())
}

fn observe_images(set: &mut ObservationSet, document: &Document) -> Result<(), NormalizationError> {
    let missing = document
        .images
        .iter()
        .filter(|image| image.alt.is_none())
        .count();
    let empty = document
        .images
        .iter()
        .filter(|image| matches!(&image.alt, Some(alt) if alt.trim().is_empty()))
        .count();

    set.insert(keys::IMAGE_COUNT, document.images.len())?;
    set.insert(keys::IMAGE_ALT_MISSING, missing)?;
    set.insert(keys::IMAGE_ALT_EMPTY, empty)?;
    Ok(())
}

fn observe_url(
    set: &mut ObservationSet,
    raw: &str,
    url: &PageUrl<'_>,
) -> Result<(), NormalizationError> {
    set.insert(keys::HTTPS_ENABLED, url.is_https())?;
    set.insert(keys::URL_LENGTH, raw.chars().count())?;
    set.insert(keys::URL_HAS_QUERY, url.has_query())?;
    set.insert(keys::URL_NON_ASCII, !raw.is_ascii())?;
    Ok(())
}

fn observe_viewport(set: &mut ObservationSet, document: &Document) -> Result<(), NormalizationError> {
    match &document.viewport {
        Some(content) => {
            let compact: String = content
                .chars()
                .filter(|c| !c.is_whitespace())
                .collect::<String>()
                .to_ascii_lowercase();
            set.insert(keys::VIEWPORT_PRESENT, true)?;
            set.insert(
                keys::VIEWPORT_DEVICE_WIDTH,
                compact.contains("width=device-width"),
            )?;
        }
        None => {
            set.insert(keys::VIEWPORT_PRESENT, false)?;
            set.insert(keys::VIEWPORT_DEVICE_WIDTH, not_applicable("a viewport tag"))?;
        }
    }
    Ok(())
}

fn observe_performance(
    set: &mut ObservationSet,
    facts: &PageFacts,
    document: &Document,
) -> Result<(), NormalizationError> {
    match facts.transport.load_time_ms {
        Some(ms) => set.insert(keys::LOAD_TIME_MS, ms)?,
        None => set.insert(keys::LOAD_TIME_MS, not_collected())?,
    }
    match facts.transport.html_bytes {
        Some(bytes) => set.insert(keys::HTML_KB, bytes as f64 / 1024.0)?,
        None => set.insert(keys::HTML_KB, not_collected())?,
    }
    let blocking = document
        .scripts
        .iter()
        .filter(|script| script.is_render_blocking())
        .count();
    set.insert(keys::BLOCKING_SCRIPTS, blocking)?;
    set.insert(keys::INLINE_STYLES, document.inline_style_count)?;
    Ok(())
}

fn observe_site(
    set: &mut ObservationSet,
    facts: &PageFacts,
    document: &Document,
) -> Result<(), NormalizationError> {
    match facts.site.sitemap_present {
        Some(present) => set.insert(keys::SITEMAP_PRESENT, present)?,
        None => set.insert(keys::SITEMAP_PRESENT, not_collected())?,
    }

    match facts.site.robots {
        Some(robots) if robots.present => {
            set.insert(keys::ROBOTS_PRESENT, true)?;
            set.insert(keys::ROBOTS_VALID, robots.valid)?;
        }
        Some(_) => {
            set.insert(keys::ROBOTS_PRESENT, false)?;
            set.insert(keys::ROBOTS_VALID, not_applicable("a robots.txt file"))?;
        }
        None => {
            set.insert(keys::ROBOTS_PRESENT, not_collected())?;
            set.insert(keys::ROBOTS_VALID, not_collected())?;
        }
    }

    set.insert(
        keys::CANONICAL_PRESENT,
        non_blank(document.canonical.as_ref()).is_some(),
    )?;
    set.insert(keys::STRUCTURED_DATA_COUNT, document.json_ld_blocks)?;
    set.insert(keys::OPEN_GRAPH_COUNT, document.open_graph_tags)?;
    set.insert(keys::TWITTER_COUNT, document.twitter_tags)?;
    Ok(())
}

fn observe_content(
    set: &mut ObservationSet,
    facts: &PageFacts,
    document: &Document,
) -> Result<(), NormalizationError> {
    set.insert(keys::WORD_COUNT, document.word_count)?;

    match document.readability_score {
        Some(score) if score.is_finite() => set.insert(keys::READABILITY_SCORE, score)?,
        _ => set.insert(keys::READABILITY_SCORE, not_collected())?,
    }

    match facts.transport.last_modified {
        Some(modified) => {
            let age_days = (facts.fetched_at - modified).num_days().max(0);
            set.insert(keys::CONTENT_AGE_DAYS, age_days)?;
        }
        None => set.insert(keys::CONTENT_AGE_DAYS, not_collected())?,
    }
    Ok(())
}

fn observe_links(
    set: &mut ObservationSet,
    document: &Document,
    page_url: &PageUrl<'_>,
) -> Result<(), NormalizationError> {
    let counts = count_links(&document.links, page_url);
    set.insert(keys::INTERNAL_LINKS, counts.internal)?;
    set.insert(keys::EXTERNAL_LINKS, counts.external)?;
    set.insert(keys::UNUSUAL_LINKS, counts.unusual)?;
    Ok(())
}

fn observe_keywords(
    set: &mut ObservationSet,
    document: &Document,
    options: &AuditOptions,
) -> Result<(), NormalizationError> {
    let keywords = clean_keywords(&options.keywords);
    if keywords.is_empty() {
        set.insert(keys::KEYWORD_COUNT, not_configured("keywords"))?;
        set.insert(keys::KEYWORD_GAPS, not_configured("keywords"))?;
        return Ok(());
    }

    let gaps: Vec<String> = keyword_placements(document, &keywords)
        .iter()
        .filter(|placement| placement.is_gap())
        .map(|placement| placement.describe_gap())
        .collect();
    set.insert(keys::KEYWORD_COUNT, keywords.len())?;
    set.insert(keys::KEYWORD_GAPS, gaps)?;
    Ok(())
}

/// Absent value for a signal slot that holds no usable payload.
///
/// A slot holding a payload of another kind is malformed input.
fn absent_signal(
    kind: SignalKind,
    entry: Option<&SignalOutcome>,
) -> Result<ObservationValue, NormalizationError> {
    let reason = match entry {
        Some(Ok(signal)) => {
            return Err(NormalizationError::SignalKindMismatch {
                expected: kind.label().to_string(),
                found: signal.kind().label().to_string(),
            })
        }
        Some(Err(unavailable)) => unavailable.reason.to_string(),
        None => UnavailableReason::NotRequested.to_string(),
    };
    Ok(ObservationValue::Absent(AbsentReason::SignalUnavailable {
        kind,
        detail: reason,
    }))
}

fn observe_signals(
    set: &mut ObservationSet,
    document: &Document,
    signals: &Signals,
    options: &AuditOptions,
) -> Result<(), NormalizationError> {
    let backlinks = signals.get(&SignalKind::Backlinks);
    match backlinks {
        Some(Ok(Signal::Backlinks {
            referring_domains, ..
        })) => set.insert(keys::REFERRING_DOMAINS, *referring_domains)?,
        _ => set.insert(
            keys::REFERRING_DOMAINS,
            absent_signal(SignalKind::Backlinks, backlinks)?,
        )?,
    }

    let competitor = signals.get(&SignalKind::CompetitorKeywords);
    let gaps = match (&options.compare_url, competitor) {
        (None, _) => not_configured("compare_url"),
        (Some(_), Some(Ok(Signal::CompetitorKeywords { keywords, .. }))) => {
            ObservationValue::List(competitor_gaps(document, keywords))
        }
        (Some(_), _) => absent_signal(SignalKind::CompetitorKeywords, competitor)?,
    };
    set.insert(keys::COMPETITOR_KEYWORD_GAPS, gaps)?;

    let vitals = signals.get(&SignalKind::CoreWebVitals);
    match (options.deep, vitals) {
        (
            true,
            Some(Ok(Signal::CoreWebVitals {
                lcp_ms,
                cls,
                inp_ms,
            })),
        ) => {
            set.insert(keys::CWV_LCP_MS, *lcp_ms)?;
            set.insert(keys::CWV_CLS, *cls)?;
            set.insert(keys::CWV_INP_MS, *inp_ms)?;
        }
        (deep, _) => {
            let absent = if deep {
                absent_signal(SignalKind::CoreWebVitals, vitals)?
            } else {
                not_configured("deep")
            };
            set.insert(keys::CWV_LCP_MS, absent.clone())?;
            set.insert(keys::CWV_CLS, absent.clone())?;
            set.insert(keys::CWV_INP_MS, absent)?;
        }
    }
    Ok(())
}
