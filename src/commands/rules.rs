use anyhow::Result;
use comfy_table::{presets::UTF8_FULL, ContentArrangement, Table};
use serde::Serialize;
use std::io::Write;

use crate::core::{Category, Effort, Impact, Severity};
use crate::rules::{Rule, RuleCatalog};

/// Catalog entry as listed by `seoaudit rules`.
#[derive(Debug, Serialize)]
struct RuleListing<'a> {
    id: &'a str,
    version: u32,
    name: &'a str,
    category: Category,
    severity: Severity,
    impact: Impact,
    effort: Effort,
    reads: &'a [&'a str],
    remedy: &'a str,
}

impl<'a> From<&'a Rule> for RuleListing<'a> {
    fn from(rule: &'a Rule) -> Self {
        Self {
            id: rule.id,
            version: rule.version,
            name: rule.name,
            category: rule.category,
            severity: rule.severity,
            impact: rule.impact,
            effort: rule.effort,
            reads: rule.reads,
            remedy: rule.remedy,
        }
    }
}

fn render_table(catalog: &RuleCatalog) -> String {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(vec!["#", "Rule", "Name", "Category", "Severity", "Impact", "Effort"]);

    for (position, rule) in catalog.iter().enumerate() {
        table.add_row(vec![
            (position + 1).to_string(),
            rule.id.to_string(),
            rule.name.to_string(),
            rule.category.to_string(),
            rule.severity.to_string(),
            rule.impact.to_string(),
            rule.effort.to_string(),
        ]);
    }

    format!(
        "Rule catalog {} ({} rules)\n{table}",
        catalog.version(),
        catalog.len()
    )
}

pub fn list_rules(json: bool) -> Result<()> {
    let catalog = RuleCatalog::global();
    let mut out = std::io::stdout().lock();
    if json {
        let listings: Vec<RuleListing<'_>> = catalog.iter().map(RuleListing::from).collect();
        writeln!(out, "{}", serde_json::to_string_pretty(&listings)?)?;
    } else {
        writeln!(out, "{}", render_table(catalog))?;
    }
    out.flush()?;
    Ok(())
}
