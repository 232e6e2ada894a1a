use serde::{Deserialize, Serialize};

use crate::core::{Impact, Severity};

/// Penalty weights used by the scorer.
///
/// A triggered finding costs `base_weight(severity) * impact_multiplier(impact)`
/// points off a starting score of 100.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoringWeights {
    #[serde(default = "default_critical_weight")]
    pub critical: f64,

    #[serde(default = "default_warning_weight")]
    pub warning: f64,

    #[serde(default = "default_high_multiplier")]
    pub high_impact: f64,

    #[serde(default = "default_medium_multiplier")]
    pub medium_impact: f64,

    #[serde(default = "default_low_multiplier")]
    pub low_impact: f64,
}

impl Default for ScoringWeights {
    fn default() -> Self {
        Self {
            critical: default_critical_weight(),
            warning: default_warning_weight(),
            high_impact: default_high_multiplier(),
            medium_impact: default_medium_multiplier(),
            low_impact: default_low_multiplier(),
        }
    }
}

impl ScoringWeights {
    pub fn base_weight(&self, severity: Severity) -> f64 {
        match severity {
            Severity::Critical => self.critical,
            Severity::Warning => self.warning,
        }
    }

    pub fn impact_multiplier(&self, impact: Impact) -> f64 {
        match impact {
            Impact::High => self.high_impact,
            Impact::Medium => self.medium_impact,
            Impact::Low => self.low_impact,
        }
    }

    // Pure function: Check a single weight is usable as a penalty factor
    pub fn validate_weight(weight: f64, name: &str) -> Result<(), String> {
        if weight.is_finite() && weight >= 0.0 {
            Ok(())
        } else {
            Err(format!("{} weight must be a non-negative number", name))
        }
    }

    pub fn validate(&self) -> Result<(), String> {
        Self::validate_weight(self.critical, "Critical")?;
        Self::validate_weight(self.warning, "Warning")?;
        Self::validate_weight(self.high_impact, "High impact")?;
        Self::validate_weight(self.medium_impact, "Medium impact")?;
        Self::validate_weight(self.low_impact, "Low impact")?;
        Ok(())
    }
}

pub fn default_critical_weight() -> f64 {
    15.0
}

pub fn default_warning_weight() -> f64 {
    5.0
}

pub fn default_high_multiplier() -> f64 {
    1.5
}

pub fn default_medium_multiplier() -> f64 {
    1.0
}

pub fn default_low_multiplier() -> f64 {
    0.5
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_weights() {
        let weights = ScoringWeights::default();
        assert_eq!(weights.base_weight(Severity::Critical), 15.0);
        assert_eq!(weights.base_weight(Severity::Warning), 5.0);
        assert_eq!(weights.impact_multiplier(Impact::High), 1.5);
        assert_eq!(weights.impact_multiplier(Impact::Low), 0.5);
        assert!(weights.validate().is_ok());
    }

    #[test]
    fn test_negative_weight_rejected() {
        let weights = ScoringWeights {
            warning: -1.0,
            ..Default::default()
        };
        assert_eq!(
            weights.validate().unwrap_err(),
            "Warning weight must be a non-negative number"
        );
    }
}
