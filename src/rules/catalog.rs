//! The versioned, ordered rule catalog.

use once_cell::sync::Lazy;
use std::collections::HashSet;

use super::{content, offpage, technical, Rule};
use crate::core::{Error, Result};

pub const CATALOG_VERSION: &str = "2024.2";

static STANDARD: Lazy<RuleCatalog> = Lazy::new(|| RuleCatalog {
    version: CATALOG_VERSION,
    rules: standard_rules(),
});

fn standard_rules() -> Vec<Rule> {
    vec![
        content::TITLE_MISSING,
        content::TITLE_LENGTH,
        content::META_DESCRIPTION_MISSING,
        content::META_DESCRIPTION_LENGTH,
        content::H1_MISSING,
        content::H1_MULTIPLE,
        content::HEADING_HIERARCHY,
        content::IMAGE_ALT_MISSING,
        content::IMAGE_ALT_EMPTY,
        technical::HTTPS,
        technical::VIEWPORT_MISSING,
        technical::VIEWPORT_CONFIG,
        technical::URL_STRUCTURE,
        technical::PAGE_LOAD_TIME,
        technical::HTML_SIZE,
        technical::RENDER_BLOCKING_SCRIPTS,
        technical::INLINE_STYLES,
        technical::SITEMAP,
        technical::ROBOTS_TXT,
        technical::CANONICAL,
        technical::STRUCTURED_DATA,
        content::SOCIAL_OPEN_GRAPH,
        content::SOCIAL_TWITTER_CARD,
        content::WORD_COUNT,
        content::KEYWORD_PLACEMENT,
        content::INTERNAL_LINKS,
        content::EXTERNAL_LINKS,
        technical::LINK_FORMAT,
        content::READABILITY,
        content::CONTENT_FRESHNESS,
        offpage::CORE_WEB_VITALS,
        offpage::BACKLINKS,
        offpage::COMPETITOR_KEYWORDS,
    ]
}

/// Ordered rule records. Declaration order breaks prioritization ties, so
/// it is part of the catalog's contract.
#[derive(Debug, Clone)]
pub struct RuleCatalog {
    version: &'static str,
    rules: Vec<Rule>,
}

impl RuleCatalog {
    /// Shared instance of the standard catalog.
    pub fn global() -> &'static RuleCatalog {
        &STANDARD
    }

    pub fn standard() -> Self {
        STANDARD.clone()
    }

    /// Build a custom catalog. Rule ids must be unique.
    pub fn from_rules(version: &'static str, rules: Vec<Rule>) -> Result<Self> {
        let mut seen = HashSet::new();
        for rule in &rules {
            if !seen.insert(rule.id) {
                return Err(Error::Catalog(format!("duplicate rule id '{}'", rule.id)));
            }
        }
        Ok(Self { version, rules })
    }

    pub fn version(&self) -> &'static str {
        self.version
    }

    pub fn rules(&self) -> &[Rule] {
        &self.rules
    }

    pub fn iter(&self) -> impl Iterator<Item = &Rule> {
        self.rules.iter()
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    pub fn get(&self, id: &str) -> Option<&Rule> {
        self.rules.iter().find(|rule| rule.id == id)
    }

    /// Declaration index of `id`
    pub fn position(&self, id: &str) -> Option<usize> {
        self.rules.iter().position(|rule| rule.id == id)
    }
}
