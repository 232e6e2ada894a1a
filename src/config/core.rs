use serde::{Deserialize, Serialize};

use super::presets::PresetLevel;
use super::scoring::ScoringWeights;
use super::thresholds::{ThresholdOverrides, Thresholds};

/// Options for a single audit invocation, supplied by the caller.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AuditOptions {
    /// Enables slower checks that need extra signals (Core Web Vitals)
    pub deep: bool,
    /// Target keywords, in priority order
    pub keywords: Vec<String>,
    /// Competitor page to compare keyword coverage against
    pub compare_url: Option<String>,
    /// Pages below this word count trigger `word-count`
    pub min_word_count: u64,
}

impl Default for AuditOptions {
    fn default() -> Self {
        Self {
            deep: false,
            keywords: Vec::new(),
            compare_url: None,
            min_word_count: default_min_word_count(),
        }
    }
}

pub fn default_min_word_count() -> u64 {
    300
}

/// Root configuration structure for seoaudit (`.seoaudit.toml`)
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct SeoAuditConfig {
    /// Named threshold preset applied before `[thresholds]` overrides
    #[serde(default)]
    pub preset: Option<PresetLevel>,

    /// Per-field threshold overrides
    #[serde(default)]
    pub thresholds: Option<ThresholdOverrides>,

    /// Penalty weights
    #[serde(default)]
    pub scoring: Option<ScoringWeights>,

    /// Default audit options
    #[serde(default)]
    pub audit: Option<AuditDefaults>,

    /// Output configuration
    #[serde(default)]
    pub output: Option<OutputConfig>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AuditDefaults {
    #[serde(default)]
    pub deep: Option<bool>,
    #[serde(default)]
    pub keywords: Vec<String>,
    #[serde(default)]
    pub min_word_count: Option<u64>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct OutputConfig {
    pub default_format: Option<String>,
    #[serde(default)]
    pub plain: bool,
}

/// Thresholds and weights an audit runs with.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AuditSettings {
    pub thresholds: Thresholds,
    pub scoring: ScoringWeights,
}

impl SeoAuditConfig {
    /// Resolve thresholds: the configured preset (balanced when unset) with
    /// the `[thresholds]` fields layered on top.
    pub fn thresholds(&self) -> Thresholds {
        self.thresholds_with_preset(self.preset)
    }

    /// Like [`thresholds`](Self::thresholds), but starting from `preset`.
    pub fn thresholds_with_preset(&self, preset: Option<PresetLevel>) -> Thresholds {
        let base = preset.map(PresetLevel::thresholds).unwrap_or_default();
        match &self.thresholds {
            Some(overrides) => overrides.apply(base),
            None => base,
        }
    }

    pub fn scoring(&self) -> ScoringWeights {
        self.scoring.clone().unwrap_or_default()
    }

    pub fn settings(&self) -> AuditSettings {
        AuditSettings {
            thresholds: self.thresholds(),
            scoring: self.scoring(),
        }
    }

    /// Audit options from the `[audit]` section, falling back to defaults.
    pub fn audit_options(&self) -> AuditOptions {
        let defaults = self.audit.clone().unwrap_or_default();
        AuditOptions {
            deep: defaults.deep.unwrap_or(false),
            keywords: defaults.keywords,
            compare_url: None,
            min_word_count: defaults
                .min_word_count
                .unwrap_or_else(default_min_word_count),
        }
    }

    pub fn default_format(&self) -> Option<&str> {
        self.output
            .as_ref()
            .and_then(|output| output.default_format.as_deref())
    }
}
