use regex::Regex;

use crate::facts::Document;

/// Where a target keyword appears on the page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeywordPlacement {
    pub keyword: String,
    pub in_title: bool,
    pub in_h1: bool,
    pub in_first_paragraph: bool,
}

impl KeywordPlacement {
    pub fn missing_from(&self) -> Vec<&'static str> {
        [
            (self.in_title, "title"),
            (self.in_h1, "h1"),
            (self.in_first_paragraph, "first paragraph"),
        ]
        .into_iter()
        .filter(|(found, _)| !found)
        .map(|(_, place)| place)
        .collect()
    }

    pub fn is_gap(&self) -> bool {
        !(self.in_title && self.in_h1 && self.in_first_paragraph)
    }

    /// `espresso (title, h1)` lists the placements the keyword is missing from
    pub fn describe_gap(&self) -> String {
        format!("{} ({})", self.keyword, self.missing_from().join(", "))
    }
}

/// Trim keywords, collapse inner whitespace and drop empties and duplicates.
pub fn clean_keywords(keywords: &[String]) -> Vec<String> {
    let mut cleaned: Vec<String> = Vec::new();
    for keyword in keywords {
        let normalized = keyword.split_whitespace().collect::<Vec<_>>().join(" ");
        if normalized.is_empty() || cleaned.iter().any(|k| k.eq_ignore_ascii_case(&normalized)) {
            continue;
        }
        cleaned.push(normalized);
    }
    cleaned
}

/// Case-insensitive whole-word match; inner whitespace matches any run of
/// whitespace in the haystack.
pub struct KeywordMatcher {
    pattern: Option<Regex>,
    fallback: String,
}

impl KeywordMatcher {
    pub fn new(keyword: &str) -> Self {
        let body = keyword
            .split_whitespace()
            .map(regex::escape)
            .collect::<Vec<_>>()
            .join(r"\s+");
        let pattern = Regex::new(&format!(r"(?i)(?:^|\W){body}(?:$|\W)")).ok();
        Self {
            pattern,
            fallback: keyword.to_lowercase(),
        }
    }

    pub fn is_match(&self, haystack: &str) -> bool {
        match &self.pattern {
            Some(pattern) => pattern.is_match(haystack),
            None => haystack.to_lowercase().contains(&self.fallback),
        }
    }
}

pub fn keyword_placements(document: &Document, keywords: &[String]) -> Vec<KeywordPlacement> {
    let title = document.title.as_deref().unwrap_or("");
    let first_paragraph = document.first_paragraph.as_deref().unwrap_or("");
    let h1s: Vec<&str> = document
        .headings
        .iter()
        .filter(|heading| heading.level == 1)
        .map(|heading| heading.text.as_str())
        .collect();

    keywords
        .iter()
        .map(|keyword| {
            let matcher = KeywordMatcher::new(keyword);
            KeywordPlacement {
                keyword: keyword.clone(),
                in_title: matcher.is_match(title),
                in_h1: h1s.iter().any(|h1| matcher.is_match(h1)),
                in_first_paragraph: matcher.is_match(first_paragraph),
            }
        })
        .collect()
}

/// Competitor keywords that appear nowhere in the page's title, headings or
/// first paragraph.
pub fn competitor_gaps(document: &Document, competitor_keywords: &[String]) -> Vec<String> {
    let mut texts: Vec<&str> = Vec::new();
    texts.extend(document.title.as_deref());
    texts.extend(document.headings.iter().map(|heading| heading.text.as_str()));
    texts.extend(document.first_paragraph.as_deref());

    clean_keywords(competitor_keywords)
        .into_iter()
        .filter(|keyword| {
            let matcher = KeywordMatcher::new(keyword);
            !texts.iter().any(|text| matcher.is_match(text))
        })
        .collect()
}
