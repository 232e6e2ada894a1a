use std::io::Write;

use super::OutputWriter;
use crate::audit::{AuditResult, Comparison};

/// Pretty JSON; an `AuditResult` is serialized verbatim.
pub struct JsonWriter<W: Write> {
    writer: W,
}

impl<W: Write> JsonWriter<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    fn emit(&mut self, json: &str) -> anyhow::Result<()> {
        writeln!(self.writer, "{json}")?;
        self.writer.flush()?;
        Ok(())
    }
}

impl<W: Write> OutputWriter for JsonWriter<W> {
    fn write_audit(&mut self, result: &AuditResult) -> anyhow::Result<()> {
        self.emit(&result.to_json()?)
    }

    fn write_comparison(&mut self, comparison: &Comparison) -> anyhow::Result<()> {
        self.emit(&serde_json::to_string_pretty(comparison)?)
    }
}
