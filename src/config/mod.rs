// Sub-modules
mod core;
mod loader;
pub mod presets;
mod scoring;
mod thresholds;

pub use self::core::{
    default_min_word_count, AuditDefaults, AuditOptions, AuditSettings, OutputConfig,
    SeoAuditConfig,
};

pub use loader::{
    directory_ancestors, load_config, load_config_from, load_config_from_path,
    parse_and_validate_config, CONFIG_FILE_NAME,
};

pub use presets::PresetLevel;

pub use scoring::{
    default_critical_weight, default_high_multiplier, default_low_multiplier,
    default_medium_multiplier, default_warning_weight, ScoringWeights,
};

pub use thresholds::{ThresholdOverrides, Thresholds};
