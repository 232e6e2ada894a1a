use std::fs;
use std::io::{BufReader, Read};
use std::path::{Path, PathBuf};

use super::core::SeoAuditConfig;
use super::scoring::ScoringWeights;
use crate::core::{Error, Result};

pub const CONFIG_FILE_NAME: &str = ".seoaudit.toml";

/// Pure function to read config file contents
pub(crate) fn read_config_file(path: &Path) -> std::result::Result<String, std::io::Error> {
    let file = fs::File::open(path)?;
    let mut reader = BufReader::new(file);
    let mut contents = String::new();
    reader.read_to_string(&mut contents)?;
    Ok(contents)
}

/// Pure function to parse and validate config from TOML string
///
/// Invalid scoring weights or thresholds fall back to defaults with a
/// warning instead of failing the whole configuration.
pub fn parse_and_validate_config(contents: &str) -> std::result::Result<SeoAuditConfig, String> {
    let mut config = toml::from_str::<SeoAuditConfig>(contents)
        .map_err(|e| format!("Failed to parse {}: {}", CONFIG_FILE_NAME, e))?;

    if let Some(ref scoring) = config.scoring {
        if let Err(e) = scoring.validate() {
            log::warn!("Invalid scoring weights: {}. Using defaults.", e);
            config.scoring = Some(ScoringWeights::default());
        }
    }

    if config.thresholds.is_some() {
        if let Err(e) = config.thresholds().validate() {
            log::warn!("Invalid thresholds: {}. Ignoring [thresholds] overrides.", e);
            config.thresholds = None;
        }
    }

    Ok(config)
}

/// Load a config file the user named explicitly. Unlike discovery, any
/// failure here is an error.
pub fn load_config_from_path(path: &Path) -> Result<SeoAuditConfig> {
    let contents = read_config_file(path).map_err(|e| Error::FileSystem {
        message: "Failed to read config file".to_string(),
        path: Some(path.to_path_buf()),
        source: Some(e),
    })?;
    let config = parse_and_validate_config(&contents).map_err(Error::Configuration)?;
    log::debug!("Loaded config from {}", path.display());
    Ok(config)
}

/// Pure function to try loading config from a specific path
pub(crate) fn try_load_config_from_path(config_path: &Path) -> Option<SeoAuditConfig> {
    let contents = match read_config_file(config_path) {
        Ok(contents) => contents,
        Err(e) => {
            handle_read_error(config_path, &e);
            return None;
        }
    };

    match parse_and_validate_config(&contents) {
        Ok(config) => {
            log::debug!("Loaded config from {}", config_path.display());
            Some(config)
        }
        Err(e) => {
            log::warn!("{}. Using defaults.", e);
            None
        }
    }
}

/// Handle file read errors with appropriate logging
pub(crate) fn handle_read_error(config_path: &Path, error: &std::io::Error) {
    // Only log actual errors, not "file not found"
    if error.kind() != std::io::ErrorKind::NotFound {
        log::warn!(
            "Failed to read config file {}: {}",
            config_path.display(),
            error
        );
    }
}

/// Pure function to generate directory ancestors up to a depth limit
pub fn directory_ancestors(start: PathBuf, max_depth: usize) -> impl Iterator<Item = PathBuf> {
    std::iter::successors(Some(start), |dir| {
        let mut parent = dir.clone();
        if parent.pop() {
            Some(parent)
        } else {
            None
        }
    })
    .take(max_depth)
}

/// Search `start` and its ancestors for `.seoaudit.toml`.
pub fn load_config_from(start: PathBuf) -> SeoAuditConfig {
    const MAX_TRAVERSAL_DEPTH: usize = 10;

    directory_ancestors(start, MAX_TRAVERSAL_DEPTH)
        .map(|dir| dir.join(CONFIG_FILE_NAME))
        .find_map(|path| try_load_config_from_path(&path))
        .unwrap_or_else(|| {
            log::debug!(
                "No config found after checking {} directories. Using default config.",
                MAX_TRAVERSAL_DEPTH
            );
            SeoAuditConfig::default()
        })
}

pub fn load_config() -> SeoAuditConfig {
    match std::env::current_dir() {
        Ok(dir) => load_config_from(dir),
        Err(e) => {
            log::warn!(
                "Failed to get current directory: {}. Using default config.",
                e
            );
            SeoAuditConfig::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Thresholds;
    use indoc::indoc;
    use tempfile::TempDir;

    #[test]
    fn test_parse_full_config() {
        let config = parse_and_validate_config(indoc! {r#"
            preset = "lenient"

            [scoring]
            critical = 20.0

            [audit]
            keywords = ["coffee beans", "espresso"]
            min_word_count = 450

            [output]
            default_format = "json"
        "#})
        .unwrap();

        assert_eq!(config.scoring().critical, 20.0);
        assert_eq!(config.scoring().warning, 5.0);
        assert_eq!(config.thresholds(), Thresholds::lenient());
        assert_eq!(config.audit_options().min_word_count, 450);
        assert_eq!(config.default_format(), Some("json"));
    }

    #[test]
    fn test_preset_and_threshold_override_combine() {
        let config = parse_and_validate_config(indoc! {r#"
            preset = "strict"

            [thresholds]
            max_url_length = 50
        "#})
        .unwrap();

        let thresholds = config.thresholds();
        assert_eq!(thresholds.max_url_length, 50);
        assert_eq!(thresholds.max_load_time_ms, 2000);
        assert_eq!(thresholds.min_internal_links, 5);
    }

    #[test]
    fn test_invalid_overrides_are_dropped() {
        let config = parse_and_validate_config(indoc! {r#"
            preset = "lenient"

            [thresholds]
            title_min_length = 90
        "#})
        .unwrap();
        assert!(config.thresholds.is_none());
        assert_eq!(config.thresholds(), Thresholds::lenient());
    }

    #[test]
    fn test_invalid_weights_fall_back_to_defaults() {
        let config = parse_and_validate_config("[scoring]\nwarning = -3.0\n").unwrap();
        assert_eq!(config.scoring(), ScoringWeights::default());
    }

    #[test]
    fn test_malformed_toml_is_an_error() {
        let err = parse_and_validate_config("[scoring\ncritical = 1").unwrap_err();
        assert!(err.starts_with("Failed to parse .seoaudit.toml"));
    }

    #[test]
    fn test_directory_ancestors_respects_depth() {
        let dirs: Vec<_> = directory_ancestors(PathBuf::from("/a/b/c/d"), 3).collect();
        assert_eq!(
            dirs,
            vec![
                PathBuf::from("/a/b/c/d"),
                PathBuf::from("/a/b/c"),
                PathBuf::from("/a/b")
            ]
        );
    }

    #[test]
    fn test_load_config_from_finds_parent_file() {
        let temp = TempDir::new().unwrap();
        let nested = temp.path().join("site").join("pages");
        std::fs::create_dir_all(&nested).unwrap();
        std::fs::write(
            temp.path().join(CONFIG_FILE_NAME),
            "[thresholds]\nmax_load_time_ms = 1200\n",
        )
        .unwrap();

        let config = load_config_from(nested);
        assert_eq!(config.thresholds().max_load_time_ms, 1200);
    }

    #[test]
    fn test_explicit_missing_path_is_error() {
        let temp = TempDir::new().unwrap();
        let result = load_config_from_path(&temp.path().join("missing.toml"));
        assert!(matches!(result, Err(Error::FileSystem { .. })));
    }
}
