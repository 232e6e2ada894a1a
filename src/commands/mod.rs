//! CLI command implementations.
//!
//! - **audit**: audit one page and render the report
//! - **batch**: audit many pages in parallel
//! - **compare**: audit a page against a competitor page
//! - **rules**: list the rule catalog
//! - **init**: write a default `.seoaudit.toml`
//!
//! Handlers return `anyhow::Result`; the engine's typed errors are wrapped
//! with context here, at the edge.

pub mod audit;
pub mod batch;
pub mod compare;
pub mod init;
pub mod rules;

pub use audit::{run_audit, AuditCommand};
pub use batch::{run_batch, BatchCommand};
pub use compare::{run_compare, CompareCommand};
pub use init::init_config;
pub use rules::list_rules;

use anyhow::{Context, Result};
use std::path::Path;

use crate::cli::AuditArgs;
use crate::config::{load_config, load_config_from_path, AuditOptions, AuditSettings, PresetLevel, SeoAuditConfig};
use crate::facts::PageFacts;
use crate::formatting::{ColorMode, EmojiMode, FormattingConfig};
use crate::signals::{collect_signals, NoCredentials, SignalFile, SignalProvider, Signals};

/// How a command finished when it did not fail outright.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommandOutcome {
    Success,
    /// A `--fail-under` gate was not met
    BelowThreshold,
}

impl CommandOutcome {
    pub fn exit_code(self) -> i32 {
        match self {
            CommandOutcome::Success => 0,
            CommandOutcome::BelowThreshold => 2,
        }
    }

    pub(crate) fn gate(scores: impl IntoIterator<Item = u8>, fail_under: Option<u8>) -> Self {
        match fail_under {
            Some(minimum) if scores.into_iter().any(|score| score < minimum) => {
                CommandOutcome::BelowThreshold
            }
            _ => CommandOutcome::Success,
        }
    }
}

/// Settings and options after layering defaults, config file and CLI flags.
#[derive(Debug, Clone)]
pub struct ResolvedAudit {
    pub config: SeoAuditConfig,
    pub settings: AuditSettings,
    pub options: AuditOptions,
}

pub fn resolve_audit(args: &AuditArgs, compare_url: Option<String>) -> Result<ResolvedAudit> {
    let config = match &args.config {
        Some(path) => load_config_from_path(path)?,
        None => load_config(),
    };

    let mut settings = config.settings();
    if let Some(preset) = args.threshold_preset {
        let preset = PresetLevel::from(preset);
        settings.thresholds = config.thresholds_with_preset(Some(preset));
        if let Err(e) = settings.thresholds.validate() {
            log::warn!("Invalid thresholds over the {preset:?} preset: {e}. Ignoring [thresholds] overrides.");
            settings.thresholds = preset.thresholds();
        }
    }

    let mut options = config.audit_options();
    options.deep |= args.deep;
    if !args.keywords.is_empty() {
        options.keywords = args.keywords.clone();
    }
    if let Some(min_word_count) = args.min_word_count {
        options.min_word_count = min_word_count;
    }
    options.compare_url = compare_url;

    Ok(ResolvedAudit {
        config,
        settings,
        options,
    })
}

pub fn load_facts(path: &Path) -> Result<PageFacts> {
    PageFacts::load(path).with_context(|| format!("Failed to load page facts from {}", path.display()))
}

/// Signals for `url`: from the signals file when given, otherwise every
/// requested signal is unavailable for lack of credentials.
pub fn load_signals(path: Option<&Path>, options: &AuditOptions, url: &str) -> Result<Signals> {
    let file;
    let provider: &dyn SignalProvider = match path {
        Some(path) => {
            file = SignalFile::load(path)
                .with_context(|| format!("Failed to load signals from {}", path.display()))?;
            &file
        }
        None => &NoCredentials,
    };
    Ok(collect_signals(provider, options, url))
}

pub fn formatting_config(plain: bool, config: &SeoAuditConfig) -> FormattingConfig {
    let plain = plain || config.output.as_ref().is_some_and(|output| output.plain);
    if plain {
        FormattingConfig::new(ColorMode::Never, EmojiMode::Never)
    } else {
        FormattingConfig::from_env()
    }
}
