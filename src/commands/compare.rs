use anyhow::{Context, Result};
use std::path::PathBuf;

use super::audit::choose_format;
use super::{formatting_config, load_facts, load_signals, resolve_audit};
use crate::audit::{compare, Auditor};
use crate::cli::AuditArgs;
use crate::io;
use crate::output::{create_writer, OutputFormat};
use crate::rules::RuleCatalog;

#[derive(Debug, Clone)]
pub struct CompareCommand {
    pub facts: PathBuf,
    pub competitor: PathBuf,
    pub competitor_signals: Option<PathBuf>,
    pub audit: AuditArgs,
    pub format: Option<OutputFormat>,
    pub output: Option<PathBuf>,
    pub plain: bool,
}

pub fn run_compare(command: CompareCommand) -> Result<()> {
    let subject = load_facts(&command.facts)?;
    let competitor = load_facts(&command.competitor)?;

    // Keyword gaps for the subject are measured against the competitor page
    let resolved = resolve_audit(&command.audit, Some(competitor.url.clone()))?;
    let subject_signals = load_signals(
        command.audit.signals.as_deref(),
        &resolved.options,
        &subject.url,
    )?;
    let competitor_signals = load_signals(
        command.competitor_signals.as_deref(),
        &resolved.options,
        &competitor.url,
    )?;

    let auditor = Auditor::new(RuleCatalog::global(), &resolved.settings);
    let comparison = compare(
        &auditor,
        (&subject, &subject_signals),
        (&competitor, &competitor_signals),
        &resolved.options,
    )
    .with_context(|| {
        format!(
            "Failed to compare {} with {}",
            command.facts.display(),
            command.competitor.display()
        )
    })?;

    let format = choose_format(
        command.format,
        command.output.as_deref(),
        resolved.config.default_format(),
    );
    let formatting = formatting_config(command.plain, &resolved.config);
    let out = io::open_output(command.output.as_deref())?;
    let mut writer = create_writer(format, out, formatting);
    writer.write_comparison(&comparison)?;

    log::debug!(
        "{} scored {} vs {} for {}",
        subject.url,
        comparison.subject.score,
        comparison.competitor.score,
        competitor.url
    );
    Ok(())
}
