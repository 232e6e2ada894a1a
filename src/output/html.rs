use html_escape::encode_text;
use std::fmt::Write as _;
use std::io::Write;

use super::{score_label, OutputWriter};
use crate::audit::{AuditResult, Comparison};
use crate::core::Finding;

const TEMPLATE: &str = include_str!("templates/report.html");

/// Standalone HTML page. Every piece of page-derived text is escaped.
pub struct HtmlWriter<W: Write> {
    writer: W,
}

impl<W: Write> HtmlWriter<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    fn emit(&mut self, title: &str, body: &str) -> anyhow::Result<()> {
        let html = TEMPLATE
            .replace("{{{TITLE}}}", &encode_text(title))
            .replace("{{{BODY}}}", body);
        write!(self.writer, "{html}")?;
        self.writer.flush()?;
        Ok(())
    }
}

fn render_findings(body: &mut String, title: &str, class: &str, findings: &[Finding]) {
    if findings.is_empty() {
        return;
    }
    let _ = writeln!(body, "<h2 class=\"{class}\">{}</h2>\n<ul>", encode_text(title));
    for finding in findings {
        let _ = writeln!(
            body,
            "  <li>{} <code>{}</code></li>",
            encode_text(&finding.message),
            encode_text(&finding.rule_id)
        );
    }
    body.push_str("</ul>\n");
}

fn render_audit(result: &AuditResult) -> String {
    let mut body = String::new();
    let label = score_label(result.score);
    let summary = result.summary();

    let _ = writeln!(body, "<h1>SEO Audit Report</h1>");
    let _ = writeln!(body, "<p class=\"url\">{}</p>", encode_text(&result.url));
    let _ = writeln!(
        body,
        "<p class=\"score band-{}\">{}/100 <small>{}</small></p>",
        label.replace(' ', "-"),
        result.score,
        label
    );
    let page = &result.page;
    let title = page.title_preview().unwrap_or_else(|| "None".to_string());
    let _ = writeln!(
        body,
        "<ul class=\"stats\">\n  <li>Title: {}</li>\n  <li>H1 tags: {}</li>\n  <li>Images: {} ({} missing alt)</li>\n  <li>Links: {} internal, {} external</li>\n</ul>",
        encode_text(&title),
        page.h1_count,
        page.images,
        page.images_missing_alt,
        page.internal_links,
        page.external_links
    );
    let _ = writeln!(
        body,
        "<p>{} critical, {} warnings, {} passed, {} not evaluated</p>",
        summary.critical, summary.warning, summary.passing, summary.skipped
    );

    render_findings(&mut body, "Critical Issues", "critical", &result.critical);
    render_findings(&mut body, "Warnings", "warning", &result.warning);
    render_findings(&mut body, "Passed Checks", "passing", &result.passing);

    if !result.actions.is_empty() {
        body.push_str("<h2>Action Plan</h2>\n<table>\n");
        body.push_str(
            "<tr><th>#</th><th>Severity</th><th>Impact</th><th>Effort</th><th>Issue</th><th>Fix</th></tr>\n",
        );
        for action in &result.actions {
            let _ = writeln!(
                body,
                "<tr><td>{}</td><td class=\"{sev}\">{sev}</td><td>{}</td><td>{}</td><td>{}</td><td>{}</td></tr>",
                action.rank,
                action.impact,
                action.effort,
                encode_text(&action.finding.message),
                encode_text(&action.finding.remedy),
                sev = action.finding.severity,
            );
        }
        body.push_str("</table>\n");
    }

    if let Some(win) = result.quick_win() {
        let _ = writeln!(
            body,
            "<p><strong>Quick win:</strong> {}</p>",
            encode_text(&win.finding.remedy)
        );
    }

    for note in &result.notes {
        let _ = writeln!(body, "<p class=\"note\">{}</p>", encode_text(note));
    }
    let _ = writeln!(
        body,
        "<p><small>Rule catalog {}</small></p>",
        encode_text(&result.catalog_version)
    );
    body
}

impl<W: Write> OutputWriter for HtmlWriter<W> {
    fn write_audit(&mut self, result: &AuditResult) -> anyhow::Result<()> {
        let body = render_audit(result);
        self.emit(&format!("SEO audit: {}", result.url), &body)
    }

    fn write_comparison(&mut self, comparison: &Comparison) -> anyhow::Result<()> {
        let mut body = String::new();
        let _ = writeln!(body, "<h1>SEO Comparison</h1>\n<table>");
        body.push_str("<tr><th>Page</th><th>Score</th></tr>\n");
        for result in [&comparison.subject, &comparison.competitor] {
            let _ = writeln!(
                body,
                "<tr><td>{}</td><td>{}</td></tr>",
                encode_text(&result.url),
                result.score
            );
        }
        body.push_str("</table>\n");
        let _ = writeln!(body, "<p>Score delta: {:+}</p>", comparison.score_delta);

        for (title, ids) in [
            ("Failing only on this page", &comparison.only_subject_fails),
            ("Failing only on the competitor", &comparison.only_competitor_fails),
        ] {
            let _ = writeln!(body, "<h2>{title}</h2>\n<ul>");
            for id in ids {
                let _ = writeln!(body, "  <li><code>{}</code></li>", encode_text(id));
            }
            body.push_str("</ul>\n");
        }

        self.emit("SEO comparison", &body)
    }
}
