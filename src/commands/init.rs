use crate::config::CONFIG_FILE_NAME;
use crate::io;
use anyhow::Result;
use std::path::{Path, PathBuf};

const DEFAULT_CONFIG: &str = r#"# seoaudit configuration

# Threshold preset: "strict", "balanced" or "lenient" (default "balanced").
# preset = "balanced"

# Fields set here override the preset one by one. The values shown are the
# balanced defaults.
[thresholds]
# title_min_length = 30
# title_max_length = 60
# meta_description_min_length = 120
# meta_description_max_length = 160
# max_url_length = 75
# max_load_time_ms = 3000
# max_html_kb = 100.0
# max_blocking_scripts = 3
# max_inline_styles = 10
# min_internal_links = 3
# max_external_links = 100
# min_readability = 60.0
# max_content_age_days = 365
# min_referring_domains = 10

# Points deducted per triggered finding: severity weight * impact multiplier
[scoring]
critical = 15.0
warning = 5.0
high_impact = 1.5
medium_impact = 1.0
low_impact = 0.5

[audit]
deep = false
keywords = []
min_word_count = 300

[output]
default_format = "terminal"
plain = false
"#;

/// Write the default configuration to `path`.
pub fn write_default_config(path: &Path, force: bool) -> Result<()> {
    if path.exists() && !force {
        anyhow::bail!("Configuration file already exists. Use --force to overwrite.");
    }
    io::write_file(path, DEFAULT_CONFIG)
}

pub fn init_config(force: bool) -> Result<()> {
    let config_path = PathBuf::from(CONFIG_FILE_NAME);
    write_default_config(&config_path, force)?;
    println!("Created {CONFIG_FILE_NAME} configuration file");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{parse_and_validate_config, ScoringWeights, Thresholds};
    use tempfile::TempDir;

    #[test]
    fn test_default_config_matches_built_in_defaults() {
        let config = parse_and_validate_config(DEFAULT_CONFIG).unwrap();
        assert_eq!(config.thresholds(), Thresholds::default());
        assert_eq!(config.scoring(), ScoringWeights::default());
        assert_eq!(config.default_format(), Some("terminal"));
    }

    #[test]
    fn test_uncommented_preset_takes_effect() {
        let contents = DEFAULT_CONFIG.replace("# preset = \"balanced\"", "preset = \"strict\"");
        let config = parse_and_validate_config(&contents).unwrap();
        assert_eq!(config.thresholds(), Thresholds::strict());
    }

    #[test]
    fn test_existing_file_requires_force() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join(CONFIG_FILE_NAME);
        std::fs::write(&path, "[audit]\ndeep = true\n").unwrap();

        assert!(write_default_config(&path, false).is_err());
        write_default_config(&path, true).unwrap();
        assert_eq!(std::fs::read_to_string(&path).unwrap(), DEFAULT_CONFIG);
    }
}
