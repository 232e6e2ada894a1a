use comfy_table::{presets, ContentArrangement, Table};
use std::io::Write;

use super::{score_label, OutputWriter};
use crate::audit::{AuditResult, Comparison};
use crate::core::{Finding, Severity};
use crate::formatting::{formatter_for, FormattingConfig, OutputFormatter};

const RULE: &str = "════════════════════════════════════════════════════════════";
const THIN_RULE: &str = "────────────────────────────────────────";

fn rule(plain: bool) -> &'static str {
    if plain {
        "============================================================"
    } else {
        RULE
    }
}

fn thin_rule(plain: bool) -> &'static str {
    if plain {
        "----------------------------------------"
    } else {
        THIN_RULE
    }
}

pub struct TerminalWriter<W: Write> {
    writer: W,
    formatter: Box<dyn OutputFormatter>,
    plain: bool,
}

impl<W: Write> TerminalWriter<W> {
    pub fn new(writer: W, config: FormattingConfig) -> Self {
        Self {
            writer,
            formatter: formatter_for(config),
            plain: config.is_plain(),
        }
    }

    fn styled_score(&self, score: u8) -> String {
        let text = format!("{score}/100 ({})", score_label(score));
        match score {
            70..=100 => self.formatter.success(&text),
            50..=69 => self.formatter.warning(&text),
            _ => self.formatter.error(&text),
        }
    }

    fn write_header(&mut self, result: &AuditResult) -> anyhow::Result<()> {
        let score = self.styled_score(result.score);
        writeln!(self.writer, "{}", rule(self.plain))?;
        writeln!(
            self.writer,
            "{} {}",
            self.formatter.emoji("🔍", "[SEARCH]"),
            self.formatter.header("SEO AUDIT REPORT")
        )?;
        writeln!(self.writer, "{}", rule(self.plain))?;
        writeln!(self.writer, "URL:   {}", result.url)?;
        writeln!(self.writer, "Score: {score}")?;
        writeln!(self.writer, "{}", rule(self.plain))?;
        writeln!(self.writer)?;
        Ok(())
    }

    fn write_section(
        &mut self,
        title: String,
        findings: &[Finding],
        marker: String,
    ) -> anyhow::Result<()> {
        if findings.is_empty() {
            return Ok(());
        }
        writeln!(self.writer, "{title}")?;
        writeln!(self.writer, "{}", thin_rule(self.plain))?;
        for finding in findings {
            let message = match (finding.triggered, finding.severity) {
                (false, _) => self.formatter.success(&finding.message),
                (true, Severity::Critical) => self.formatter.error(&finding.message),
                (true, Severity::Warning) => self.formatter.warning(&finding.message),
            };
            writeln!(self.writer, "  {marker} {message}")?;
        }
        writeln!(self.writer)?;
        Ok(())
    }

    fn action_table(&self, result: &AuditResult) -> Table {
        let mut table = Table::new();
        table
            .load_preset(if self.plain {
                presets::ASCII_FULL
            } else {
                presets::UTF8_FULL
            })
            .set_content_arrangement(ContentArrangement::Dynamic)
            .set_header(vec!["#", "Severity", "Impact", "Effort", "Issue", "Fix"]);
        for action in &result.actions {
            table.add_row(vec![
                action.rank.to_string(),
                action.finding.severity.to_string(),
                action.impact.to_string(),
                action.effort.to_string(),
                action.finding.message.clone(),
                action.finding.remedy.clone(),
            ]);
        }
        table
    }

    fn write_action_plan(&mut self, result: &AuditResult) -> anyhow::Result<()> {
        if result.actions.is_empty() {
            return Ok(());
        }
        let title = format!(
            "{} {}",
            self.formatter.emoji("🎯", "[TARGET]"),
            self.formatter.bold("ACTION PLAN")
        );
        let table = self.action_table(result);
        writeln!(self.writer, "{title}")?;
        writeln!(self.writer, "{table}")?;
        if let Some(win) = result.quick_win() {
            writeln!(
                self.writer,
                "{} Quick win: {}",
                self.formatter.emoji("💡", "[IDEA]"),
                self.formatter.info(&win.finding.remedy)
            )?;
        }
        writeln!(self.writer)?;
        Ok(())
    }

    fn write_summary(&mut self, result: &AuditResult) -> anyhow::Result<()> {
        let summary = result.summary();
        writeln!(
            self.writer,
            "{} {}",
            self.formatter.emoji("📊", "[STATS]"),
            self.formatter.bold("SUMMARY")
        )?;
        writeln!(self.writer, "{}", thin_rule(self.plain))?;
        let page = &result.page;
        let title = page.title_preview().unwrap_or_else(|| "None".to_string());
        writeln!(self.writer, "  Title: {title}")?;
        writeln!(self.writer, "  H1 tags: {}", page.h1_count)?;
        writeln!(
            self.writer,
            "  Images: {} ({} missing alt)",
            page.images, page.images_missing_alt
        )?;
        writeln!(
            self.writer,
            "  Links: {} internal, {} external",
            page.internal_links, page.external_links
        )?;
        writeln!(
            self.writer,
            "  {} critical, {} warnings, {} passed, {} not evaluated",
            summary.critical, summary.warning, summary.passing, summary.skipped
        )?;
        writeln!(
            self.writer,
            "  Issues: {} technical, {} content",
            summary.technical_issues, summary.content_issues
        )?;
        for note in &result.notes {
            writeln!(
                self.writer,
                "  {} {}",
                self.formatter.emoji("ℹ", "[INFO]"),
                self.formatter.dim(note)
            )?;
        }
        writeln!(self.writer, "{}", rule(self.plain))?;
        Ok(())
    }
}

impl<W: Write> OutputWriter for TerminalWriter<W> {
    fn write_audit(&mut self, result: &AuditResult) -> anyhow::Result<()> {
        self.write_header(result)?;

        let critical = format!(
            "{} {}",
            self.formatter.emoji("❌", "[CRITICAL]"),
            self.formatter.bold("CRITICAL ISSUES")
        );
        let marker = self.formatter.emoji("✗", "-");
        self.write_section(critical, &result.critical, marker)?;

        let warnings = format!(
            "{} {}",
            self.formatter.emoji("⚠️ ", "[WARN]"),
            self.formatter.bold("WARNINGS")
        );
        let marker = self.formatter.emoji("⚠", "-");
        self.write_section(warnings, &result.warning, marker)?;

        let passing = format!(
            "{} {}",
            self.formatter.emoji("✅", "[OK]"),
            self.formatter.bold("PASSED CHECKS")
        );
        let marker = self.formatter.emoji("✓", "-");
        self.write_section(passing, &result.passing, marker)?;

        self.write_action_plan(result)?;
        self.write_summary(result)?;
        self.writer.flush()?;
        Ok(())
    }

    fn write_comparison(&mut self, comparison: &Comparison) -> anyhow::Result<()> {
        writeln!(self.writer, "{}", rule(self.plain))?;
        writeln!(
            self.writer,
            "{} {}",
            self.formatter.emoji("🔍", "[SEARCH]"),
            self.formatter.header("SEO COMPARISON")
        )?;
        writeln!(self.writer, "{}", rule(self.plain))?;
        for result in [&comparison.subject, &comparison.competitor] {
            let score = self.styled_score(result.score);
            writeln!(self.writer, "  {score}  {}", result.url)?;
        }
        let delta = format!("{:+}", comparison.score_delta);
        let delta = if comparison.score_delta >= 0 {
            self.formatter.success(&delta)
        } else {
            self.formatter.error(&delta)
        };
        writeln!(self.writer, "  Score delta: {delta}")?;
        writeln!(self.writer)?;

        for (title, ids) in [
            ("Failing only on this page", &comparison.only_subject_fails),
            ("Failing only on the competitor", &comparison.only_competitor_fails),
        ] {
            writeln!(self.writer, "{}", self.formatter.bold(title))?;
            writeln!(self.writer, "{}", thin_rule(self.plain))?;
            if ids.is_empty() {
                writeln!(self.writer, "  {}", self.formatter.dim("none"))?;
            }
            for id in ids {
                writeln!(self.writer, "  - {id}")?;
            }
            writeln!(self.writer)?;
        }
        self.writer.flush()?;
        Ok(())
    }
}
