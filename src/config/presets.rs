//! Threshold presets for common audit scenarios.
//!
//! - **Strict**: competitive queries, tight targets
//! - **Balanced**: reasonable defaults for most sites
//! - **Lenient**: small or legacy sites

use serde::{Deserialize, Serialize};

use super::thresholds::Thresholds;

/// Preset configuration levels for auditing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PresetLevel {
    Strict,
    Balanced,
    Lenient,
}

impl PresetLevel {
    pub fn thresholds(self) -> Thresholds {
        match self {
            PresetLevel::Strict => Thresholds::strict(),
            PresetLevel::Balanced => Thresholds::balanced(),
            PresetLevel::Lenient => Thresholds::lenient(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strict_is_tighter_than_lenient() {
        let strict = PresetLevel::Strict.thresholds();
        let lenient = PresetLevel::Lenient.thresholds();
        assert!(strict.max_load_time_ms < lenient.max_load_time_ms);
        assert!(strict.min_internal_links > lenient.min_internal_links);
    }
}
