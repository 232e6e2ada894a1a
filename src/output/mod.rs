//! Report writers over an [`AuditResult`]. Pure presentation: no writer
//! changes, re-ranks or filters what the engine produced.

pub mod html;
pub mod json;
pub mod markdown;
pub mod terminal;

use std::io::Write;

use crate::audit::{AuditResult, Comparison};
use crate::formatting::FormattingConfig;

pub use html::HtmlWriter;
pub use json::JsonWriter;
pub use markdown::MarkdownWriter;
pub use terminal::TerminalWriter;

#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    Terminal,
    Json,
    Markdown,
    Html,
}

impl OutputFormat {
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "terminal" => Some(Self::Terminal),
            "json" => Some(Self::Json),
            "markdown" | "md" => Some(Self::Markdown),
            "html" => Some(Self::Html),
            _ => None,
        }
    }

    /// Guess the format from an output file extension.
    pub fn from_extension(path: &std::path::Path) -> Option<Self> {
        match path.extension()?.to_str()?.to_lowercase().as_str() {
            "json" => Some(Self::Json),
            "md" | "markdown" => Some(Self::Markdown),
            "html" | "htm" => Some(Self::Html),
            _ => None,
        }
    }
}

pub trait OutputWriter {
    fn write_audit(&mut self, result: &AuditResult) -> anyhow::Result<()>;
    fn write_comparison(&mut self, comparison: &Comparison) -> anyhow::Result<()>;
}

pub fn create_writer<'w>(
    format: OutputFormat,
    writer: Box<dyn Write + 'w>,
    formatting: FormattingConfig,
) -> Box<dyn OutputWriter + 'w> {
    match format {
        OutputFormat::Terminal => Box::new(TerminalWriter::new(writer, formatting)),
        OutputFormat::Json => Box::new(JsonWriter::new(writer)),
        OutputFormat::Markdown => Box::new(MarkdownWriter::new(writer)),
        OutputFormat::Html => Box::new(HtmlWriter::new(writer)),
    }
}

/// Score band shown next to the number.
pub fn score_label(score: u8) -> &'static str {
    match score {
        90..=100 => "excellent",
        70..=89 => "good",
        50..=69 => "needs work",
        _ => "poor",
    }
}
