//! On-page content rules: title, description, headings, images, copy and links.

use super::{plural, Check, Rule, RuleContext};
use crate::core::{Category, Effort, Impact, Severity};
use crate::observation::{keys, Missing, ObservationSet};

pub const TITLE_MISSING: Rule = Rule {
    id: "title-missing",
    version: 1,
    name: "Page title present",
    category: Category::Content,
    severity: Severity::Critical,
    impact: Impact::High,
    effort: Effort::Low,
    reads: &[keys::TITLE_PRESENT],
    remedy: "Add a descriptive <title> tag",
    check: check_title_missing,
};

fn check_title_missing(obs: &ObservationSet, _ctx: &RuleContext<'_>) -> Result<Check, Missing> {
    Ok(if obs.bool(keys::TITLE_PRESENT)? {
        Check::pass("Page title present")
    } else {
        Check::trigger("Missing page title")
    })
}

pub const TITLE_LENGTH: Rule = Rule {
    id: "title-length",
    version: 1,
    name: "Title length",
    category: Category::Content,
    severity: Severity::Warning,
    impact: Impact::Medium,
    effort: Effort::Low,
    reads: &[keys::TITLE_LENGTH],
    remedy: "Rewrite the title to fit the recommended length",
    check: check_title_length,
};

fn check_title_length(obs: &ObservationSet, ctx: &RuleContext<'_>) -> Result<Check, Missing> {
    let length = obs.int(keys::TITLE_LENGTH)?;
    let t = ctx.thresholds;
    Ok(if length < t.title_min_length as i64 {
        Check::trigger(format!(
            "Title tag too short ({length} chars, aim for {}-{})",
            t.title_target_min, t.title_target_max
        ))
    } else if length > t.title_max_length as i64 {
        Check::trigger(format!(
            "Title tag too long ({length} chars, may be truncated in search results)"
        ))
    } else {
        Check::pass(format!("Title length good ({length} chars)"))
    })
}

pub const META_DESCRIPTION_MISSING: Rule = Rule {
    id: "meta-description-missing",
    version: 1,
    name: "Meta description present",
    category: Category::Content,
    severity: Severity::Critical,
    impact: Impact::High,
    effort: Effort::Low,
    reads: &[keys::META_DESCRIPTION_PRESENT],
    remedy: "Add a meta description",
    check: check_meta_description_missing,
};

fn check_meta_description_missing(
    obs: &ObservationSet,
    _ctx: &RuleContext<'_>,
) -> Result<Check, Missing> {
    Ok(if obs.bool(keys::META_DESCRIPTION_PRESENT)? {
        Check::pass("Meta description present")
    } else {
        Check::trigger("Missing meta description")
    })
}

pub const META_DESCRIPTION_LENGTH: Rule = Rule {
    id: "meta-description-length",
    version: 1,
    name: "Meta description length",
    category: Category::Content,
    severity: Severity::Warning,
    impact: Impact::Medium,
    effort: Effort::Low,
    reads: &[keys::META_DESCRIPTION_LENGTH],
    remedy: "Rewrite the meta description to fit the recommended length",
    check: check_meta_description_length,
};

fn check_meta_description_length(
    obs: &ObservationSet,
    ctx: &RuleContext<'_>,
) -> Result<Check, Missing> {
    let length = obs.int(keys::META_DESCRIPTION_LENGTH)?;
    let t = ctx.thresholds;
    Ok(if length < t.meta_description_min_length as i64 {
        Check::trigger(format!(
            "Meta description too short ({length} chars, aim for {}-{})",
            t.meta_description_target_min, t.meta_description_target_max
        ))
    } else if length > t.meta_description_max_length as i64 {
        Check::trigger(format!(
            "Meta description too long ({length} chars, will be truncated)"
        ))
    } else {
        Check::pass(format!("Meta description length good ({length} chars)"))
    })
}

pub const H1_MISSING: Rule = Rule {
    id: "h1-missing",
    version: 1,
    name: "H1 heading present",
    category: Category::Content,
    severity: Severity::Critical,
    impact: Impact::High,
    effort: Effort::Low,
    reads: &[keys::H1_COUNT],
    remedy: "Add an H1 tag describing the page",
    check: check_h1_missing,
};

fn check_h1_missing(obs: &ObservationSet, _ctx: &RuleContext<'_>) -> Result<Check, Missing> {
    Ok(if obs.int(keys::H1_COUNT)? == 0 {
        Check::trigger("No H1 tag found")
    } else {
        Check::pass("H1 heading present")
    })
}

pub const H1_MULTIPLE: Rule = Rule {
    id: "h1-multiple",
    version: 1,
    name: "Single H1 heading",
    category: Category::Content,
    severity: Severity::Warning,
    impact: Impact::Medium,
    effort: Effort::Low,
    reads: &[keys::H1_COUNT],
    remedy: "Keep one H1 and demote the others to H2",
    check: check_h1_multiple,
};

fn check_h1_multiple(obs: &ObservationSet, _ctx: &RuleContext<'_>) -> Result<Check, Missing> {
    let count = obs.int(keys::H1_COUNT)?;
    Ok(if count > 1 {
        Check::trigger(format!("Multiple H1 tags ({count}), use only one per page"))
    } else {
        Check::pass("No duplicate H1 headings")
    })
}

pub const HEADING_HIERARCHY: Rule = Rule {
    id: "heading-hierarchy",
    version: 1,
    name: "Heading hierarchy",
    category: Category::Content,
    severity: Severity::Warning,
    impact: Impact::Low,
    effort: Effort::Medium,
    reads: &[keys::HEADING_LEVEL_GAPS, keys::HEADING_FIRST_GAP],
    remedy: "Restructure headings so levels are not skipped",
    check: check_heading_hierarchy,
};

fn check_heading_hierarchy(obs: &ObservationSet, _ctx: &RuleContext<'_>) -> Result<Check, Missing> {
    let gaps = obs.int(keys::HEADING_LEVEL_GAPS)?;
    if gaps == 0 {
        return Ok(Check::pass("Heading hierarchy is consistent"));
    }
    let first_gap = obs.text(keys::HEADING_FIRST_GAP)?;
    Ok(Check::trigger(format!(
        "Heading hierarchy skips {} (first gap: {first_gap})",
        plural(gaps, "level", "levels")
    )))
}

pub const IMAGE_ALT_MISSING: Rule = Rule {
    id: "image-alt-missing",
    version: 1,
    name: "Image alt attributes",
    category: Category::Content,
    severity: Severity::Critical,
    impact: Impact::Medium,
    effort: Effort::Low,
    reads: &[keys::IMAGE_ALT_MISSING, keys::IMAGE_COUNT],
    remedy: "Add alt attributes to every image",
    check: check_image_alt_missing,
};

fn check_image_alt_missing(obs: &ObservationSet, _ctx: &RuleContext<'_>) -> Result<Check, Missing> {
    let missing = obs.int(keys::IMAGE_ALT_MISSING)?;
    if missing > 0 {
        return Ok(Check::trigger(format!(
            "{} missing alt attribute",
            plural(missing, "image", "images")
        )));
    }
    let total = obs.int(keys::IMAGE_COUNT)?;
    Ok(Check::pass(if total == 0 {
        "No images to check".to_string()
    } else {
        format!("All {} have an alt attribute", plural(total, "image", "images"))
    }))
}

pub const IMAGE_ALT_EMPTY: Rule = Rule {
    id: "image-alt-empty",
    version: 1,
    name: "Image alt text",
    category: Category::Content,
    severity: Severity::Warning,
    impact: Impact::Low,
    effort: Effort::Low,
    reads: &[keys::IMAGE_ALT_EMPTY],
    remedy: "Describe informative images in their alt text",
    check: check_image_alt_empty,
};

fn check_image_alt_empty(obs: &ObservationSet, _ctx: &RuleContext<'_>) -> Result<Check, Missing> {
    let empty = obs.int(keys::IMAGE_ALT_EMPTY)?;
    Ok(if empty > 0 {
        let verb = if empty == 1 { "has" } else { "have" };
        Check::trigger(format!(
            "{} {verb} empty alt text",
            plural(empty, "image", "images")
        ))
    } else {
        Check::pass("No images with empty alt text")
    })
}

pub const SOCIAL_OPEN_GRAPH: Rule = Rule {
    id: "social-open-graph",
    version: 1,
    name: "Open Graph tags",
    category: Category::Content,
    severity: Severity::Warning,
    impact: Impact::Low,
    effort: Effort::Low,
    reads: &[keys::OPEN_GRAPH_COUNT],
    remedy: "Add og:title, og:description and og:image tags",
    check: check_open_graph,
};

fn check_open_graph(obs: &ObservationSet, _ctx: &RuleContext<'_>) -> Result<Check, Missing> {
    let count = obs.int(keys::OPEN_GRAPH_COUNT)?;
    Ok(if count == 0 {
        Check::trigger("Missing Open Graph tags")
    } else {
        Check::pass(format!(
            "Found {}",
            plural(count, "Open Graph tag", "Open Graph tags")
        ))
    })
}

pub const SOCIAL_TWITTER_CARD: Rule = Rule {
    id: "social-twitter-card",
    version: 1,
    name: "Twitter Card tags",
    category: Category::Content,
    severity: Severity::Warning,
    impact: Impact::Low,
    effort: Effort::Low,
    reads: &[keys::TWITTER_COUNT],
    remedy: "Add twitter:card tags",
    check: check_twitter_card,
};

fn check_twitter_card(obs: &ObservationSet, _ctx: &RuleContext<'_>) -> Result<Check, Missing> {
    let count = obs.int(keys::TWITTER_COUNT)?;
    Ok(if count == 0 {
        Check::trigger("Missing Twitter Card tags")
    } else {
        Check::pass(format!(
            "Found {}",
            plural(count, "Twitter Card tag", "Twitter Card tags")
        ))
    })
}

pub const WORD_COUNT: Rule = Rule {
    id: "word-count",
    version: 1,
    name: "Word count",
    category: Category::Content,
    severity: Severity::Warning,
    impact: Impact::Medium,
    effort: Effort::Medium,
    reads: &[keys::WORD_COUNT],
    remedy: "Expand the copy with useful, relevant content",
    check: check_word_count,
};

fn check_word_count(obs: &ObservationSet, ctx: &RuleContext<'_>) -> Result<Check, Missing> {
    let words = obs.int(keys::WORD_COUNT)?;
    let minimum = ctx.options.min_word_count as i64;
    let ideal = ctx.thresholds.word_count_ideal as i64;
    Ok(if words < minimum {
        Check::trigger(format!(
            "Low word count ({words} words, aim for {minimum}+)"
        ))
    } else if words < ideal {
        Check::pass(format!(
            "Word count acceptable ({words} words, {ideal}+ is ideal)"
        ))
    } else {
        Check::pass(format!("Word count good ({words} words)"))
    })
}

pub const KEYWORD_PLACEMENT: Rule = Rule {
    id: "keyword-placement",
    version: 1,
    name: "Target keyword placement",
    category: Category::Content,
    severity: Severity::Warning,
    impact: Impact::High,
    effort: Effort::Low,
    reads: &[keys::KEYWORD_COUNT, keys::KEYWORD_GAPS],
    remedy: "Work target keywords into the title, H1 and opening paragraph",
    check: check_keyword_placement,
};

fn check_keyword_placement(obs: &ObservationSet, _ctx: &RuleContext<'_>) -> Result<Check, Missing> {
    let count = obs.int(keys::KEYWORD_COUNT)?;
    let gaps = obs.list(keys::KEYWORD_GAPS)?;
    Ok(if gaps.is_empty() {
        Check::pass(format!(
            "{} placed in title, H1 and first paragraph",
            plural(count, "target keyword", "target keywords")
        ))
    } else {
        Check::trigger(format!(
            "Target keywords missing from title/H1/first paragraph: {}",
            gaps.join("; ")
        ))
    })
}

pub const INTERNAL_LINKS: Rule = Rule {
    id: "internal-links",
    version: 1,
    name: "Internal linking",
    category: Category::Content,
    severity: Severity::Warning,
    impact: Impact::Medium,
    effort: Effort::Low,
    reads: &[keys::INTERNAL_LINKS],
    remedy: "Link to related pages on the same site",
    check: check_internal_links,
};

fn check_internal_links(obs: &ObservationSet, ctx: &RuleContext<'_>) -> Result<Check, Missing> {
    let count = obs.int(keys::INTERNAL_LINKS)?;
    let minimum = ctx.thresholds.min_internal_links as i64;
    Ok(if count < minimum {
        Check::trigger(format!(
            "Few internal links ({count}, aim for {minimum}+)"
        ))
    } else {
        Check::pass(format!(
            "Found {}",
            plural(count, "internal link", "internal links")
        ))
    })
}

pub const EXTERNAL_LINKS: Rule = Rule {
    id: "external-links",
    version: 1,
    name: "External link volume",
    category: Category::Content,
    severity: Severity::Warning,
    impact: Impact::Low,
    effort: Effort::Low,
    reads: &[keys::EXTERNAL_LINKS],
    remedy: "Trim outbound links to the most relevant sources",
    check: check_external_links,
};

fn check_external_links(obs: &ObservationSet, ctx: &RuleContext<'_>) -> Result<Check, Missing> {
    let count = obs.int(keys::EXTERNAL_LINKS)?;
    let maximum = ctx.thresholds.max_external_links as i64;
    Ok(if count > maximum {
        Check::trigger(format!(
            "Too many external links ({count}, keep under {maximum})"
        ))
    } else {
        Check::pass(format!(
            "Found {}",
            plural(count, "external link", "external links")
        ))
    })
}

pub const READABILITY: Rule = Rule {
    id: "readability",
    version: 1,
    name: "Readability",
    category: Category::Content,
    severity: Severity::Warning,
    impact: Impact::Medium,
    effort: Effort::Medium,
    reads: &[keys::READABILITY_SCORE],
    remedy: "Shorten sentences and prefer plain words",
    check: check_readability,
};

fn check_readability(obs: &ObservationSet, ctx: &RuleContext<'_>) -> Result<Check, Missing> {
    let score = obs.float(keys::READABILITY_SCORE)?;
    let minimum = ctx.thresholds.min_readability;
    Ok(if score < minimum {
        Check::trigger(format!(
            "Low readability score ({score:.1}, aim for {minimum:.0}+)"
        ))
    } else {
        Check::pass(format!("Readability score good ({score:.1})"))
    })
}

pub const CONTENT_FRESHNESS: Rule = Rule {
    id: "content-freshness",
    version: 1,
    name: "Content freshness",
    category: Category::Content,
    severity: Severity::Warning,
    impact: Impact::Low,
    effort: Effort::Medium,
    reads: &[keys::CONTENT_AGE_DAYS],
    remedy: "Review and update the page content",
    check: check_content_freshness,
};

fn check_content_freshness(obs: &ObservationSet, ctx: &RuleContext<'_>) -> Result<Check, Missing> {
    let age = obs.int(keys::CONTENT_AGE_DAYS)?;
    let maximum = ctx.thresholds.max_content_age_days;
    Ok(if age > maximum {
        Check::trigger(format!(
            "Content not updated in {age} days (refresh at least every {maximum} days)"
        ))
    } else {
        Check::pass(format!(
            "Content updated {} ago",
            plural(age, "day", "days")
        ))
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{AuditOptions, Thresholds};
    use crate::observation::AbsentReason;

    fn run(rule: &Rule, entries: &[(&str, crate::observation::ObservationValue)]) -> Result<Check, Missing> {
        let mut obs = ObservationSet::new();
        for (key, value) in entries {
            obs.insert(key, value.clone()).unwrap();
        }
        let thresholds = Thresholds::default();
        let options = AuditOptions::default();
        rule.run(
            &obs,
            &RuleContext {
                thresholds: &thresholds,
                options: &options,
            },
        )
    }

    #[test]
    fn test_title_length_messages() {
        assert_eq!(
            run(&TITLE_LENGTH, &[(keys::TITLE_LENGTH, 28i64.into())]),
            Ok(Check::trigger("Title tag too short (28 chars, aim for 50-60)"))
        );
        assert_eq!(
            run(&TITLE_LENGTH, &[(keys::TITLE_LENGTH, 72i64.into())]),
            Ok(Check::trigger(
                "Title tag too long (72 chars, may be truncated in search results)"
            ))
        );
        assert_eq!(
            run(&TITLE_LENGTH, &[(keys::TITLE_LENGTH, 55i64.into())]),
            Ok(Check::pass("Title length good (55 chars)"))
        );
    }

    #[test]
    fn test_title_length_skipped_without_title() {
        let missing = run(
            &TITLE_LENGTH,
            &[(
                keys::TITLE_LENGTH,
                AbsentReason::NotApplicable {
                    requires: "a page title".into(),
                }
                .into(),
            )],
        )
        .unwrap_err();
        assert_eq!(missing.key, keys::TITLE_LENGTH);
    }

    #[test]
    fn test_h1_rules() {
        assert_eq!(
            run(&H1_MISSING, &[(keys::H1_COUNT, 0i64.into())]),
            Ok(Check::trigger("No H1 tag found"))
        );
        assert_eq!(
            run(&H1_MULTIPLE, &[(keys::H1_COUNT, 3i64.into())]),
            Ok(Check::trigger("Multiple H1 tags (3), use only one per page"))
        );
    }

    #[test]
    fn test_image_alt_missing_message() {
        assert_eq!(
            run(
                &IMAGE_ALT_MISSING,
                &[
                    (keys::IMAGE_ALT_MISSING, 7i64.into()),
                    (keys::IMAGE_COUNT, 9i64.into())
                ]
            ),
            Ok(Check::trigger("7 images missing alt attribute"))
        );
    }

    #[test]
    fn test_word_count_uses_option_minimum() {
        assert_eq!(
            run(&WORD_COUNT, &[(keys::WORD_COUNT, 234i64.into())]),
            Ok(Check::trigger("Low word count (234 words, aim for 300+)"))
        );
        assert_eq!(
            run(&WORD_COUNT, &[(keys::WORD_COUNT, 350i64.into())]),
            Ok(Check::pass("Word count acceptable (350 words, 500+ is ideal)"))
        );
    }

    #[test]
    fn test_heading_hierarchy_message() {
        assert_eq!(
            run(
                &HEADING_HIERARCHY,
                &[
                    (keys::HEADING_LEVEL_GAPS, 1i64.into()),
                    (keys::HEADING_FIRST_GAP, "H1 → H3".to_string().into())
                ]
            ),
            Ok(Check::trigger(
                "Heading hierarchy skips 1 level (first gap: H1 → H3)"
            ))
        );
    }

    #[test]
    fn test_keyword_placement_gaps() {
        assert_eq!(
            run(
                &KEYWORD_PLACEMENT,
                &[
                    (keys::KEYWORD_COUNT, 2i64.into()),
                    (
                        keys::KEYWORD_GAPS,
                        vec!["espresso (title, h1)".to_string()].into()
                    )
                ]
            ),
            Ok(Check::trigger(
                "Target keywords missing from title/H1/first paragraph: espresso (title, h1)"
            ))
        );
    }
}
