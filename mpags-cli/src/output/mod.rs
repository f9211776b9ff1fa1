//! Output formatting module

use anyhow::{Context, Result};
use serde::Serialize;
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

/// Everything a formatter may report about a finished run
#[derive(Debug, Clone, Serialize)]
pub struct CipherReport {
    /// Cipher name
    pub cipher: String,
    /// "encrypt" or "decrypt"
    pub mode: String,
    /// Number of chunks the text was processed in
    pub chunks: usize,
    /// The transformed text
    pub text: String,
}

/// Trait for output formatters
pub trait OutputFormatter {
    /// Format and write the result of a run
    fn write_report(&mut self, report: &CipherReport) -> Result<()>;

    /// Flush any buffered output
    fn finish(&mut self) -> Result<()>;
}

pub mod json;
pub mod text;

pub use json::JsonFormatter;
pub use text::TextFormatter;

/// Supported output formats
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// The processed text on a single line
    Text,
    /// A JSON object with the text and run details
    Json,
}

impl std::str::FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "text" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            other => Err(format!("unknown output format '{other}'")),
        }
    }
}

/// Open the destination: the given file, or stdout
pub fn open_writer(path: Option<&Path>) -> Result<Box<dyn Write>> {
    match path {
        Some(path) => {
            let file = File::create(path)
                .with_context(|| format!("Failed to create output file: {}", path.display()))?;
            Ok(Box::new(BufWriter::new(file)))
        }
        None => Ok(Box::new(io::stdout().lock())),
    }
}

/// Build the formatter for `format` around `writer`
pub fn formatter_for<'a>(
    format: OutputFormat,
    writer: Box<dyn Write + 'a>,
) -> Box<dyn OutputFormatter + 'a> {
    match format {
        OutputFormat::Text => Box::new(TextFormatter::new(writer)),
        OutputFormat::Json => Box::new(JsonFormatter::new(writer)),
    }
}
