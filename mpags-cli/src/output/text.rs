//! Plain text output formatter

use super::{CipherReport, OutputFormatter};
use anyhow::Result;
use std::io::Write;

/// Plain text formatter - outputs the processed text followed by a newline
pub struct TextFormatter<W: Write> {
    writer: W,
}

impl<W: Write> TextFormatter<W> {
    /// Create a new text formatter
    pub fn new(writer: W) -> Self {
        Self { writer }
    }
}

impl<W: Write> OutputFormatter for TextFormatter<W> {
    fn write_report(&mut self, report: &CipherReport) -> Result<()> {
        writeln!(self.writer, "{}", report.text)?;
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        self.writer.flush()?;
        Ok(())
    }
}
