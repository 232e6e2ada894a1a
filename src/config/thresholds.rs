use serde::{Deserialize, Serialize};

/// Numeric thresholds the rule catalog checks observations against.
///
/// The defaults are the audit's recommended targets; every field can be
/// overridden from the `[thresholds]` section of `.seoaudit.toml`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Thresholds {
    /// Titles shorter than this trigger `title-length`
    pub title_min_length: usize,
    /// Titles longer than this trigger `title-length`
    pub title_max_length: usize,
    /// Ideal title range shown in messages
    pub title_target_min: usize,
    pub title_target_max: usize,

    pub meta_description_min_length: usize,
    pub meta_description_max_length: usize,
    pub meta_description_target_min: usize,
    pub meta_description_target_max: usize,

    /// Word count considered ideal; the minimum comes from the audit options
    pub word_count_ideal: u64,

    pub max_url_length: usize,
    pub max_load_time_ms: u64,
    pub max_html_kb: f64,
    pub max_blocking_scripts: usize,
    pub max_inline_styles: usize,

    pub min_internal_links: usize,
    pub max_external_links: usize,

    pub min_readability: f64,
    pub max_content_age_days: i64,
    pub min_referring_domains: u64,

    pub max_lcp_ms: u64,
    pub max_cls: f64,
    pub max_inp_ms: u64,
}

impl Default for Thresholds {
    fn default() -> Self {
        Self {
            title_min_length: 30,
            title_max_length: 60,
            title_target_min: 50,
            title_target_max: 60,
            meta_description_min_length: 120,
            meta_description_max_length: 160,
            meta_description_target_min: 150,
            meta_description_target_max: 160,
            word_count_ideal: 500,
            max_url_length: 75,
            max_load_time_ms: 3000,
            max_html_kb: 100.0,
            max_blocking_scripts: 3,
            max_inline_styles: 10,
            min_internal_links: 3,
            max_external_links: 100,
            min_readability: 60.0,
            max_content_age_days: 365,
            min_referring_domains: 10,
            max_lcp_ms: 2500,
            max_cls: 0.1,
            max_inp_ms: 200,
        }
    }
}

impl Thresholds {
    /// Tighter targets for sites competing on crowded queries
    pub fn strict() -> Self {
        Self {
            title_min_length: 40,
            meta_description_min_length: 140,
            word_count_ideal: 800,
            max_url_length: 60,
            max_load_time_ms: 2000,
            max_html_kb: 75.0,
            max_blocking_scripts: 1,
            max_inline_styles: 5,
            min_internal_links: 5,
            max_external_links: 50,
            min_readability: 65.0,
            max_content_age_days: 180,
            min_referring_domains: 25,
            ..Default::default()
        }
    }

    pub fn balanced() -> Self {
        Self::default()
    }

    /// Relaxed targets for small or legacy sites
    pub fn lenient() -> Self {
        Self {
            title_min_length: 20,
            title_max_length: 70,
            meta_description_min_length: 80,
            meta_description_max_length: 180,
            word_count_ideal: 300,
            max_url_length: 100,
            max_load_time_ms: 5000,
            max_html_kb: 200.0,
            max_blocking_scripts: 6,
            max_inline_styles: 20,
            min_internal_links: 1,
            max_external_links: 200,
            min_readability: 50.0,
            max_content_age_days: 730,
            min_referring_domains: 3,
            ..Default::default()
        }
    }

    /// Reject thresholds that would make a rule impossible to pass.
    pub fn validate(&self) -> Result<(), String> {
        if self.title_min_length > self.title_max_length {
            return Err(format!(
                "title_min_length ({}) exceeds title_max_length ({})",
                self.title_min_length, self.title_max_length
            ));
        }
        if self.meta_description_min_length > self.meta_description_max_length {
            return Err(format!(
                "meta_description_min_length ({}) exceeds meta_description_max_length ({})",
                self.meta_description_min_length, self.meta_description_max_length
            ));
        }
        let non_negative = [
            ("max_html_kb", self.max_html_kb),
            ("min_readability", self.min_readability),
            ("max_cls", self.max_cls),
        ];
        for (name, value) in non_negative {
            if !value.is_finite() || value < 0.0 {
                return Err(format!("{name} must be a non-negative number, got {value}"));
            }
        }
        if self.max_content_age_days < 0 {
            return Err("max_content_age_days must not be negative".to_string());
        }
        Ok(())
    }
}

/// The `[thresholds]` section of `.seoaudit.toml`. Only the fields that
/// are present replace the value of the preset underneath.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ThresholdOverrides {
    pub title_min_length: Option<usize>,
    pub title_max_length: Option<usize>,
    pub title_target_min: Option<usize>,
    pub title_target_max: Option<usize>,
    pub meta_description_min_length: Option<usize>,
    pub meta_description_max_length: Option<usize>,
    pub meta_description_target_min: Option<usize>,
    pub meta_description_target_max: Option<usize>,
    pub word_count_ideal: Option<u64>,
    pub max_url_length: Option<usize>,
    pub max_load_time_ms: Option<u64>,
    pub max_html_kb: Option<f64>,
    pub max_blocking_scripts: Option<usize>,
    pub max_inline_styles: Option<usize>,
    pub min_internal_links: Option<usize>,
    pub max_external_links: Option<usize>,
    pub min_readability: Option<f64>,
    pub max_content_age_days: Option<i64>,
    pub min_referring_domains: Option<u64>,
    pub max_lcp_ms: Option<u64>,
    pub max_cls: Option<f64>,
    pub max_inp_ms: Option<u64>,
}

impl ThresholdOverrides {
    /// Layer the present fields over `base`.
    pub fn apply(&self, base: Thresholds) -> Thresholds {
        let mut thresholds = base;
        macro_rules! overlay {
            ($($field:ident),* $(,)?) => {
                $(
                    if let Some(value) = self.$field {
                        thresholds.$field = value;
                    }
                )*
            };
        }
        overlay!(
            title_min_length,
            title_max_length,
            title_target_min,
            title_target_max,
            meta_description_min_length,
            meta_description_max_length,
            meta_description_target_min,
            meta_description_target_max,
            word_count_ideal,
            max_url_length,
            max_load_time_ms,
            max_html_kb,
            max_blocking_scripts,
            max_inline_styles,
            min_internal_links,
            max_external_links,
            min_readability,
            max_content_age_days,
            min_referring_domains,
            max_lcp_ms,
            max_cls,
            max_inp_ms,
        );
        thresholds
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_presets_are_valid() {
        assert!(Thresholds::strict().validate().is_ok());
        assert!(Thresholds::balanced().validate().is_ok());
        assert!(Thresholds::lenient().validate().is_ok());
    }

    #[test]
    fn test_inverted_title_bounds_rejected() {
        let thresholds = Thresholds {
            title_min_length: 80,
            ..Default::default()
        };
        assert!(thresholds.validate().unwrap_err().contains("title_min_length"));
    }

    #[test]
    fn test_overrides_keep_the_base_for_unset_fields() {
        let overrides: ThresholdOverrides = toml::from_str("max_load_time_ms = 1500").unwrap();
        let thresholds = overrides.apply(Thresholds::strict());
        assert_eq!(thresholds.max_load_time_ms, 1500);
        assert_eq!(thresholds.min_internal_links, 5);
        assert_eq!(thresholds.max_inline_styles, 5);
    }

    #[test]
    fn test_empty_overrides_are_identity() {
        assert_eq!(
            ThresholdOverrides::default().apply(Thresholds::lenient()),
            Thresholds::lenient()
        );
    }
}
