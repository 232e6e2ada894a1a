//! Technical rules: transport, crawlability, markup plumbing.

use super::{plural, Check, Rule, RuleContext};
use crate::core::{Category, Effort, Impact, Severity};
use crate::observation::{keys, Missing, ObservationSet};

pub const HTTPS: Rule = Rule {
    id: "https",
    version: 1,
    name: "HTTPS",
    category: Category::Technical,
    severity: Severity::Critical,
    impact: Impact::High,
    effort: Effort::Medium,
    reads: &[keys::HTTPS_ENABLED],
    remedy: "Serve the page over HTTPS and redirect HTTP traffic",
    check: check_https,
};

fn check_https(obs: &ObservationSet, _ctx: &RuleContext<'_>) -> Result<Check, Missing> {
    Ok(if obs.bool(keys::HTTPS_ENABLED)? {
        Check::pass("Page is served over HTTPS")
    } else {
        Check::trigger("Page is not served over HTTPS")
    })
}

pub const VIEWPORT_MISSING: Rule = Rule {
    id: "viewport-missing",
    version: 1,
    name: "Viewport meta tag",
    category: Category::Technical,
    severity: Severity::Critical,
    impact: Impact::High,
    effort: Effort::Low,
    reads: &[keys::VIEWPORT_PRESENT],
    remedy: "Add <meta name=\"viewport\" content=\"width=device-width, initial-scale=1\">",
    check: check_viewport_missing,
};

fn check_viewport_missing(obs: &ObservationSet, _ctx: &RuleContext<'_>) -> Result<Check, Missing> {
    Ok(if obs.bool(keys::VIEWPORT_PRESENT)? {
        Check::pass("Viewport meta tag present")
    } else {
        Check::trigger("Missing viewport meta tag, page may not be mobile-friendly")
    })
}

pub const VIEWPORT_CONFIG: Rule = Rule {
    id: "viewport-config",
    version: 1,
    name: "Viewport configuration",
    category: Category::Technical,
    severity: Severity::Warning,
    impact: Impact::Medium,
    effort: Effort::Low,
    reads: &[keys::VIEWPORT_DEVICE_WIDTH],
    remedy: "Set width=device-width in the viewport meta tag",
    check: check_viewport_config,
};

fn check_viewport_config(obs: &ObservationSet, _ctx: &RuleContext<'_>) -> Result<Check, Missing> {
    Ok(if obs.bool(keys::VIEWPORT_DEVICE_WIDTH)? {
        Check::pass("Viewport configured for device width")
    } else {
        Check::trigger("Viewport meta tag is not configured with width=device-width")
    })
}

pub const URL_STRUCTURE: Rule = Rule {
    id: "url-structure",
    version: 1,
    name: "URL structure",
    category: Category::Technical,
    severity: Severity::Warning,
    impact: Impact::Low,
    effort: Effort::High,
    reads: &[keys::URL_LENGTH, keys::URL_HAS_QUERY, keys::URL_NON_ASCII],
    remedy: "Use short, readable, lowercase URLs without query strings",
    check: check_url_structure,
};

fn check_url_structure(obs: &ObservationSet, ctx: &RuleContext<'_>) -> Result<Check, Missing> {
    let length = obs.int(keys::URL_LENGTH)?;
    let has_query = obs.bool(keys::URL_HAS_QUERY)?;
    let non_ascii = obs.bool(keys::URL_NON_ASCII)?;

    let mut problems = Vec::new();
    if length > ctx.thresholds.max_url_length as i64 {
        problems.push(format!("too long: {length} chars"));
    }
    if has_query {
        problems.push("has query parameters".to_string());
    }
    if non_ascii {
        problems.push("contains non-ASCII characters".to_string());
    }

    Ok(if problems.is_empty() {
        Check::pass("URL structure is clean")
    } else {
        Check::trigger(format!("URL structure needs work ({})", problems.join(", ")))
    })
}

pub const PAGE_LOAD_TIME: Rule = Rule {
    id: "page-load-time",
    version: 1,
    name: "Page load time",
    category: Category::Technical,
    severity: Severity::Warning,
    impact: Impact::High,
    effort: Effort::High,
    reads: &[keys::LOAD_TIME_MS],
    remedy: "Reduce server response time and page weight",
    check: check_page_load_time,
};

fn check_page_load_time(obs: &ObservationSet, ctx: &RuleContext<'_>) -> Result<Check, Missing> {
    let ms = obs.int(keys::LOAD_TIME_MS)?;
    let maximum = ctx.thresholds.max_load_time_ms;
    Ok(if ms > maximum as i64 {
        Check::trigger(format!("Slow page load ({ms} ms, aim for under {maximum} ms)"))
    } else {
        Check::pass(format!("Page loaded in {ms} ms"))
    })
}

pub const HTML_SIZE: Rule = Rule {
    id: "html-size",
    version: 1,
    name: "HTML size",
    category: Category::Technical,
    severity: Severity::Warning,
    impact: Impact::Low,
    effort: Effort::Medium,
    reads: &[keys::HTML_KB],
    remedy: "Remove inline styles and unused markup",
    check: check_html_size,
};

fn check_html_size(obs: &ObservationSet, ctx: &RuleContext<'_>) -> Result<Check, Missing> {
    let kb = obs.float(keys::HTML_KB)?;
    let maximum = ctx.thresholds.max_html_kb;
    Ok(if kb > maximum {
        Check::trigger(format!(
            "Large HTML size ({kb:.1}KB, keep under {maximum:.0}KB)"
        ))
    } else {
        Check::pass(format!("HTML size OK ({kb:.1}KB)"))
    })
}

pub const RENDER_BLOCKING_SCRIPTS: Rule = Rule {
    id: "render-blocking-scripts",
    version: 1,
    name: "Render-blocking scripts",
    category: Category::Technical,
    severity: Severity::Warning,
    impact: Impact::Medium,
    effort: Effort::Medium,
    reads: &[keys::BLOCKING_SCRIPTS],
    remedy: "Load scripts with async or defer",
    check: check_render_blocking,
};

fn check_render_blocking(obs: &ObservationSet, ctx: &RuleContext<'_>) -> Result<Check, Missing> {
    let count = obs.int(keys::BLOCKING_SCRIPTS)?;
    Ok(if count > ctx.thresholds.max_blocking_scripts as i64 {
        Check::trigger(format!(
            "{}, consider async/defer",
            plural(count, "render-blocking script", "render-blocking scripts")
        ))
    } else {
        Check::pass(format!(
            "{} render-blocking",
            plural(count, "script", "scripts")
        ))
    })
}

pub const INLINE_STYLES: Rule = Rule {
    id: "inline-styles",
    version: 1,
    name: "Inline styles",
    category: Category::Technical,
    severity: Severity::Warning,
    impact: Impact::Low,
    effort: Effort::Low,
    reads: &[keys::INLINE_STYLES],
    remedy: "Move style attributes into an external stylesheet",
    check: check_inline_styles,
};

fn check_inline_styles(obs: &ObservationSet, ctx: &RuleContext<'_>) -> Result<Check, Missing> {
    let count = obs.int(keys::INLINE_STYLES)?;
    Ok(if count > ctx.thresholds.max_inline_styles as i64 {
        Check::trigger(format!(
            "{}, consider external CSS",
            plural(count, "inline style", "inline styles")
        ))
    } else {
        Check::pass(format!("{} in markup", plural(count, "inline style", "inline styles")))
    })
}

pub const SITEMAP: Rule = Rule {
    id: "sitemap",
    version: 1,
    name: "XML sitemap",
    category: Category::Technical,
    severity: Severity::Warning,
    impact: Impact::Medium,
    effort: Effort::Low,
    reads: &[keys::SITEMAP_PRESENT],
    remedy: "Publish /sitemap.xml and reference it from robots.txt",
    check: check_sitemap,
};

fn check_sitemap(obs: &ObservationSet, _ctx: &RuleContext<'_>) -> Result<Check, Missing> {
    Ok(if obs.bool(keys::SITEMAP_PRESENT)? {
        Check::pass("sitemap.xml found")
    } else {
        Check::trigger("No sitemap.xml found")
    })
}

pub const ROBOTS_TXT: Rule = Rule {
    id: "robots-txt",
    version: 1,
    name: "robots.txt",
    category: Category::Technical,
    severity: Severity::Warning,
    impact: Impact::Medium,
    effort: Effort::Low,
    reads: &[keys::ROBOTS_PRESENT, keys::ROBOTS_VALID],
    remedy: "Serve a valid /robots.txt",
    check: check_robots_txt,
};

fn check_robots_txt(obs: &ObservationSet, _ctx: &RuleContext<'_>) -> Result<Check, Missing> {
    if !obs.bool(keys::ROBOTS_PRESENT)? {
        return Ok(Check::trigger("robots.txt not found"));
    }
    Ok(if obs.bool(keys::ROBOTS_VALID)? {
        Check::pass("robots.txt found and valid")
    } else {
        Check::trigger("robots.txt is invalid")
    })
}

pub const CANONICAL: Rule = Rule {
    id: "canonical",
    version: 1,
    name: "Canonical URL",
    category: Category::Technical,
    severity: Severity::Warning,
    impact: Impact::Medium,
    effort: Effort::Low,
    reads: &[keys::CANONICAL_PRESENT],
    remedy: "Add <link rel=\"canonical\"> pointing at the preferred URL",
    check: check_canonical,
};

fn check_canonical(obs: &ObservationSet, _ctx: &RuleContext<'_>) -> Result<Check, Missing> {
    Ok(if obs.bool(keys::CANONICAL_PRESENT)? {
        Check::pass("Canonical URL set")
    } else {
        Check::trigger("No canonical URL set, may cause duplicate content issues")
    })
}

pub const STRUCTURED_DATA: Rule = Rule {
    id: "structured-data",
    version: 1,
    name: "Structured data",
    category: Category::Technical,
    severity: Severity::Warning,
    impact: Impact::Low,
    effort: Effort::Medium,
    reads: &[keys::STRUCTURED_DATA_COUNT],
    remedy: "Describe the page with schema.org JSON-LD",
    check: check_structured_data,
};

fn check_structured_data(obs: &ObservationSet, _ctx: &RuleContext<'_>) -> Result<Check, Missing> {
    let count = obs.int(keys::STRUCTURED_DATA_COUNT)?;
    Ok(if count == 0 {
        Check::trigger("No structured data (JSON-LD) found")
    } else {
        Check::pass(format!(
            "Found {}",
            plural(count, "JSON-LD block", "JSON-LD blocks")
        ))
    })
}

pub const LINK_FORMAT: Rule = Rule {
    id: "link-format",
    version: 1,
    name: "Link format",
    category: Category::Technical,
    severity: Severity::Warning,
    impact: Impact::Low,
    effort: Effort::Low,
    reads: &[keys::UNUSUAL_LINKS],
    remedy: "Use absolute or root-relative hrefs",
    check: check_link_format,
};

fn check_link_format(obs: &ObservationSet, _ctx: &RuleContext<'_>) -> Result<Check, Missing> {
    let count = obs.int(keys::UNUSUAL_LINKS)?;
    Ok(if count > 0 {
        Check::trigger(format!(
            "{} with unusual format",
            plural(count, "link", "links")
        ))
    } else {
        Check::pass("All links use a recognised format")
    })
}
