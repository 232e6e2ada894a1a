use anyhow::{Context, Result};
use std::path::PathBuf;

use super::{formatting_config, load_facts, load_signals, resolve_audit, CommandOutcome};
use crate::audit::Auditor;
use crate::cli::AuditArgs;
use crate::io;
use crate::output::{create_writer, OutputFormat};
use crate::rules::RuleCatalog;

#[derive(Debug, Clone)]
pub struct AuditCommand {
    pub facts: PathBuf,
    pub audit: AuditArgs,
    pub compare_url: Option<String>,
    pub format: Option<OutputFormat>,
    pub output: Option<PathBuf>,
    pub plain: bool,
    pub fail_under: Option<u8>,
}

/// Format precedence: flag, output file extension, config file, terminal.
pub(crate) fn choose_format(
    flag: Option<OutputFormat>,
    output: Option<&std::path::Path>,
    configured: Option<&str>,
) -> OutputFormat {
    flag.or_else(|| output.and_then(OutputFormat::from_extension))
        .or_else(|| configured.and_then(OutputFormat::parse))
        .unwrap_or(OutputFormat::Terminal)
}

pub fn run_audit(command: AuditCommand) -> Result<CommandOutcome> {
    let resolved = resolve_audit(&command.audit, command.compare_url.clone())?;
    let facts = load_facts(&command.facts)?;
    let signals = load_signals(
        command.audit.signals.as_deref(),
        &resolved.options,
        &facts.url,
    )?;

    let auditor = Auditor::new(RuleCatalog::global(), &resolved.settings);
    let result = auditor
        .audit(&facts, &signals, &resolved.options)
        .with_context(|| format!("Failed to audit {}", command.facts.display()))?;

    let format = choose_format(
        command.format,
        command.output.as_deref(),
        resolved.config.default_format(),
    );
    let formatting = formatting_config(command.plain, &resolved.config);
    let out = io::open_output(command.output.as_deref())?;
    let mut writer = create_writer(format, out, formatting);
    writer.write_audit(&result)?;
    drop(writer);

    if let Some(path) = &command.output {
        log::info!("Wrote {format:?} report to {}", path.display());
    }

    Ok(CommandOutcome::gate([result.score], command.fail_under))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::Path;

    #[test]
    fn test_choose_format_precedence() {
        assert_eq!(
            choose_format(Some(OutputFormat::Json), Some(Path::new("r.md")), Some("html")),
            OutputFormat::Json
        );
        assert_eq!(
            choose_format(None, Some(Path::new("r.md")), Some("html")),
            OutputFormat::Markdown
        );
        assert_eq!(choose_format(None, None, Some("html")), OutputFormat::Html);
        assert_eq!(choose_format(None, None, None), OutputFormat::Terminal);
    }
}
