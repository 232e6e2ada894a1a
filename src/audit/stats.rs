use serde::{Deserialize, Serialize};

use crate::observation::{keys, ObservationSet};

/// Title characters shown in report summaries
pub const TITLE_PREVIEW_CHARS: usize = 50;

/// Page facts echoed in the report summary.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageStats {
    pub title: Option<String>,
    pub h1_count: usize,
    pub images: usize,
    pub images_missing_alt: usize,
    pub internal_links: usize,
    pub external_links: usize,
}

impl PageStats {
    pub fn from_observations(obs: &ObservationSet) -> Self {
        let count = |key: &str| obs.int(key).map_or(0, |n| n.max(0) as usize);
        Self {
            title: obs.text(keys::TITLE_TEXT).ok().map(str::to_string),
            h1_count: count(keys::H1_COUNT),
            images: count(keys::IMAGE_COUNT),
            images_missing_alt: count(keys::IMAGE_ALT_MISSING),
            internal_links: count(keys::INTERNAL_LINKS),
            external_links: count(keys::EXTERNAL_LINKS),
        }
    }

    /// The title cut to [`TITLE_PREVIEW_CHARS`], or `None` when the page has none.
    pub fn title_preview(&self) -> Option<String> {
        let title = self.title.as_deref()?;
        if title.chars().count() <= TITLE_PREVIEW_CHARS {
            return Some(title.to_string());
        }
        let cut: String = title.chars().take(TITLE_PREVIEW_CHARS).collect();
        Some(format!("{}...", cut.trim_end()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::observation::AbsentReason;

    #[test]
    fn test_stats_from_observations() {
        let mut obs = ObservationSet::new();
        obs.insert(keys::TITLE_TEXT, "Espresso beans".to_string()).unwrap();
        obs.insert(keys::H1_COUNT, 2usize).unwrap();
        obs.insert(keys::IMAGE_COUNT, 5usize).unwrap();
        obs.insert(keys::IMAGE_ALT_MISSING, 1usize).unwrap();
        obs.insert(keys::INTERNAL_LINKS, 7usize).unwrap();
        obs.insert(keys::EXTERNAL_LINKS, 3usize).unwrap();

        assert_eq!(
            PageStats::from_observations(&obs),
            PageStats {
                title: Some("Espresso beans".into()),
                h1_count: 2,
                images: 5,
                images_missing_alt: 1,
                internal_links: 7,
                external_links: 3,
            }
        );
    }

    #[test]
    fn test_absent_title_has_no_preview() {
        let mut obs = ObservationSet::new();
        obs.insert(
            keys::TITLE_TEXT,
            AbsentReason::NotApplicable {
                requires: "a page title".into(),
            },
        )
        .unwrap();
        let stats = PageStats::from_observations(&obs);
        assert_eq!(stats.title, None);
        assert_eq!(stats.title_preview(), None);
    }

    #[test]
    fn test_long_title_is_truncated() {
        let stats = PageStats {
            title: Some("a".repeat(72)),
            ..PageStats::default()
        };
        assert_eq!(stats.title_preview(), Some(format!("{}...", "a".repeat(50))));

        let short = PageStats {
            title: Some("Short title".into()),
            ..PageStats::default()
        };
        assert_eq!(short.title_preview().as_deref(), Some("Short title"));
    }
}
