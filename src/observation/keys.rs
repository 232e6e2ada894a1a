//! Stable observation keys shared by the normalizer and the rule catalog.

pub const TITLE_PRESENT: &str = "title.present";
pub const TITLE_LENGTH: &str = "title.length";
pub const TITLE_TEXT: &str = "title.text";

pub const META_DESCRIPTION_PRESENT: &str = "meta_description.present";
pub const META_DESCRIPTION_LENGTH: &str = "meta_description.length";

pub const H1_COUNT: &str = "h1.count";
pub const HEADING_LEVEL_GAPS: &str = "heading.level_gaps";
pub const HEADING_FIRST_GAP: &str = "heading.first_gap";

pub const IMAGE_COUNT: &str = "image.count";
pub const IMAGE_ALT_MISSING: &str = "image.alt_missing_count";
pub const IMAGE_ALT_EMPTY: &str = "image.alt_empty_count";

pub const HTTPS_ENABLED: &str = "https.enabled";
pub const VIEWPORT_PRESENT: &str = "viewport.present";
pub const VIEWPORT_DEVICE_WIDTH: &str = "viewport.device_width";

pub const URL_LENGTH: &str = "url.length";
pub const URL_HAS_QUERY: &str = "url.has_query";
pub const URL_NON_ASCII: &str = "url.non_ascii";

pub const LOAD_TIME_MS: &str = "performance.load_time_ms";
pub const HTML_KB: &str = "performance.html_kb";
pub const BLOCKING_SCRIPTS: &str = "performance.blocking_scripts";
pub const INLINE_STYLES: &str = "performance.inline_styles";

pub const SITEMAP_PRESENT: &str = "sitemap.present";
pub const ROBOTS_PRESENT: &str = "robots.present";
pub const ROBOTS_VALID: &str = "robots.valid";
pub const CANONICAL_PRESENT: &str = "canonical.present";
pub const STRUCTURED_DATA_COUNT: &str = "structured_data.count";
pub const OPEN_GRAPH_COUNT: &str = "social.open_graph_count";
pub const TWITTER_COUNT: &str = "social.twitter_count";

pub const WORD_COUNT: &str = "content.word_count";
pub const CONTENT_AGE_DAYS: &str = "content.age_days";
pub const READABILITY_SCORE: &str = "readability.score";

pub const KEYWORD_COUNT: &str = "keyword.count";
pub const KEYWORD_GAPS: &str = "keyword.gaps";

pub const INTERNAL_LINKS: &str = "links.internal";
pub const EXTERNAL_LINKS: &str = "links.external";
pub const UNUSUAL_LINKS: &str = "links.unusual";

pub const REFERRING_DOMAINS: &str = "signal.backlinks.referring_domains";
pub const COMPETITOR_KEYWORD_GAPS: &str = "signal.competitor.keyword_gaps";
pub const CWV_LCP_MS: &str = "signal.cwv.lcp_ms";
pub const CWV_CLS: &str = "signal.cwv.cls";
pub const CWV_INP_MS: &str = "signal.cwv.inp_ms";
