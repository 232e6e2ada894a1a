use anyhow::Result;
use serde::Serialize;
use std::io::Write;
use std::path::{Path, PathBuf};

use super::{load_facts, load_signals, resolve_audit, CommandOutcome};
use crate::audit::{AuditResult, Auditor};
use crate::cli::AuditArgs;
use crate::config::AuditOptions;
use crate::facts::PageFacts;
use crate::rules::RuleCatalog;
use crate::signals::Signals;

#[derive(Debug, Clone)]
pub struct BatchCommand {
    pub facts: Vec<PathBuf>,
    pub audit: AuditArgs,
    pub json: bool,
    pub fail_under: Option<u8>,
}

/// Outcome for one input file.
#[derive(Debug, Serialize)]
pub struct BatchEntry {
    pub path: PathBuf,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub result: Option<AuditResult>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl BatchEntry {
    fn failed(path: &Path, error: String) -> Self {
        Self {
            path: path.to_path_buf(),
            result: None,
            error: Some(error),
        }
    }

    /// `" 72/100  2 critical  5 warnings  https://example.com/"`
    pub fn summary_line(&self) -> String {
        match (&self.result, &self.error) {
            (Some(result), _) => {
                let summary = result.summary();
                format!(
                    "{:>3}/100  {} critical  {} warnings  {}",
                    result.score, summary.critical, summary.warning, result.url
                )
            }
            (None, error) => format!(
                "  ERROR  {}: {}",
                self.path.display(),
                error.as_deref().unwrap_or("no result")
            ),
        }
    }
}

fn load_page(path: &Path, args: &AuditArgs, options: &AuditOptions) -> Result<(PageFacts, Signals)> {
    let facts = load_facts(path)?;
    let signals = load_signals(args.signals.as_deref(), options, &facts.url)?;
    Ok((facts, signals))
}

pub fn run_batch(command: BatchCommand) -> Result<CommandOutcome> {
    let resolved = resolve_audit(&command.audit, None)?;

    // A file that fails to load is reported and does not stop the batch
    let mut entries = Vec::with_capacity(command.facts.len());
    let mut pages = Vec::new();
    let mut slots = Vec::new();
    for path in &command.facts {
        match load_page(path, &command.audit, &resolved.options) {
            Ok(page) => {
                slots.push(entries.len());
                pages.push(page);
                entries.push(BatchEntry {
                    path: path.clone(),
                    result: None,
                    error: None,
                });
            }
            Err(e) => {
                log::warn!("Skipping {}: {e:#}", path.display());
                entries.push(BatchEntry::failed(path, format!("{e:#}")));
            }
        }
    }

    let auditor = Auditor::new(RuleCatalog::global(), &resolved.settings);
    let results = auditor.audit_batch(&pages, &resolved.options);
    for (slot, outcome) in slots.into_iter().zip(results) {
        match outcome {
            Ok(result) => entries[slot].result = Some(result),
            Err(e) => entries[slot].error = Some(e.to_string()),
        }
    }

    let mut out = std::io::stdout().lock();
    if command.json {
        writeln!(out, "{}", serde_json::to_string_pretty(&entries)?)?;
    } else {
        for entry in &entries {
            writeln!(out, "{}", entry.summary_line())?;
        }
    }
    out.flush()?;

    let failed = entries.iter().filter(|entry| entry.result.is_none()).count();
    if failed > 0 {
        anyhow::bail!("{failed} of {} pages could not be audited", entries.len());
    }

    Ok(CommandOutcome::gate(
        entries
            .iter()
            .filter_map(|entry| entry.result.as_ref().map(|result| result.score)),
        command.fail_under,
    ))
}
