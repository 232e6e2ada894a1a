use std::io::Write;

use super::{score_label, OutputWriter};
use crate::audit::{AuditResult, Comparison};
use crate::core::Finding;

pub struct MarkdownWriter<W: Write> {
    writer: W,
}

impl<W: Write> MarkdownWriter<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    fn write_header(&mut self, result: &AuditResult) -> anyhow::Result<()> {
        writeln!(self.writer, "# SEO Audit Report")?;
        writeln!(self.writer)?;
        writeln!(self.writer, "- **URL:** {}", result.url)?;
        writeln!(
            self.writer,
            "- **Score:** {}/100 ({})",
            result.score,
            score_label(result.score)
        )?;
        writeln!(self.writer, "- **Rule catalog:** {}", result.catalog_version)?;
        writeln!(self.writer)?;
        Ok(())
    }

    fn write_summary(&mut self, result: &AuditResult) -> anyhow::Result<()> {
        let summary = result.summary();
        writeln!(self.writer, "## Summary")?;
        writeln!(self.writer)?;
        writeln!(self.writer, "| Metric | Value |")?;
        writeln!(self.writer, "|--------|-------|")?;
        let page = &result.page;
        let title = page.title_preview().unwrap_or_else(|| "None".to_string());
        let rows = [
            ("Title", escape_cell(&title)),
            ("H1 tags", page.h1_count.to_string()),
            (
                "Images",
                format!("{} ({} missing alt)", page.images, page.images_missing_alt),
            ),
            (
                "Links",
                format!(
                    "{} internal, {} external",
                    page.internal_links, page.external_links
                ),
            ),
            ("Critical issues", summary.critical.to_string()),
            ("Warnings", summary.warning.to_string()),
            ("Passed checks", summary.passing.to_string()),
            ("Skipped checks", summary.skipped.to_string()),
            ("Technical issues", summary.technical_issues.to_string()),
            ("Content issues", summary.content_issues.to_string()),
        ];
        for (metric, value) in rows {
            writeln!(self.writer, "| {metric} | {value} |")?;
        }
        writeln!(self.writer)?;
        Ok(())
    }

    fn write_findings(&mut self, title: &str, findings: &[Finding]) -> anyhow::Result<()> {
        if findings.is_empty() {
            return Ok(());
        }
        writeln!(self.writer, "## {title}")?;
        writeln!(self.writer)?;
        for finding in findings {
            writeln!(self.writer, "- {} (`{}`)", finding.message, finding.rule_id)?;
        }
        writeln!(self.writer)?;
        Ok(())
    }

    fn write_action_plan(&mut self, result: &AuditResult) -> anyhow::Result<()> {
        if result.actions.is_empty() {
            return Ok(());
        }
        writeln!(self.writer, "## Action Plan")?;
        writeln!(self.writer)?;
        writeln!(self.writer, "| Rank | Severity | Impact | Effort | Issue | Fix |")?;
        writeln!(self.writer, "|------|----------|--------|--------|-------|-----|")?;
        for action in &result.actions {
            writeln!(
                self.writer,
                "| {} | {} | {} | {} | {} | {} |",
                action.rank,
                action.finding.severity,
                action.impact,
                action.effort,
                escape_cell(&action.finding.message),
                escape_cell(&action.finding.remedy)
            )?;
        }
        writeln!(self.writer)?;
        if let Some(win) = result.quick_win() {
            writeln!(
                self.writer,
                "**Quick win:** {} ({} effort)",
                win.finding.remedy, win.effort
            )?;
            writeln!(self.writer)?;
        }
        Ok(())
    }

    fn write_skipped(&mut self, result: &AuditResult) -> anyhow::Result<()> {
        if result.skipped.is_empty() && result.notes.is_empty() {
            return Ok(());
        }
        writeln!(self.writer, "## Not Evaluated")?;
        writeln!(self.writer)?;
        for note in &result.notes {
            writeln!(self.writer, "> {note}")?;
        }
        if !result.notes.is_empty() {
            writeln!(self.writer)?;
        }
        for skipped in &result.skipped {
            writeln!(
                self.writer,
                "- `{}`: {} ({})",
                skipped.rule_id, skipped.name, skipped.reason
            )?;
        }
        writeln!(self.writer)?;
        Ok(())
    }
}

impl<W: Write> OutputWriter for MarkdownWriter<W> {
    fn write_audit(&mut self, result: &AuditResult) -> anyhow::Result<()> {
        self.write_header(result)?;
        self.write_summary(result)?;
        self.write_findings("Critical Issues", &result.critical)?;
        self.write_findings("Warnings", &result.warning)?;
        self.write_findings("Passed Checks", &result.passing)?;
        self.write_action_plan(result)?;
        self.write_skipped(result)?;
        self.writer.flush()?;
        Ok(())
    }

    fn write_comparison(&mut self, comparison: &Comparison) -> anyhow::Result<()> {
        writeln!(self.writer, "# SEO Comparison")?;
        writeln!(self.writer)?;
        writeln!(self.writer, "| Page | Score |")?;
        writeln!(self.writer, "|------|-------|")?;
        writeln!(
            self.writer,
            "| {} | {} |",
            comparison.subject.url, comparison.subject.score
        )?;
        writeln!(
            self.writer,
            "| {} | {} |",
            comparison.competitor.url, comparison.competitor.score
        )?;
        writeln!(self.writer)?;
        writeln!(self.writer, "**Score delta:** {:+}", comparison.score_delta)?;
        writeln!(self.writer)?;

        for (title, ids) in [
            ("Failing only on this page", &comparison.only_subject_fails),
            ("Failing only on the competitor", &comparison.only_competitor_fails),
        ] {
            writeln!(self.writer, "## {title}")?;
            writeln!(self.writer)?;
            if ids.is_empty() {
                writeln!(self.writer, "_None_")?;
            }
            for id in ids {
                writeln!(self.writer, "- `{id}`")?;
            }
            writeln!(self.writer)?;
        }
        self.writer.flush()?;
        Ok(())
    }
}

fn escape_cell(text: &str) -> String {
    text.replace('|', "\\|").replace('\n', " ")
}
