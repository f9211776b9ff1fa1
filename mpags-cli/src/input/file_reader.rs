//! File and stdin reading utilities

use anyhow::{Context, Result};
use mpags_core::sanitize_bytes;
use std::fs;
use std::io::{self, Read};
use std::path::{Path, PathBuf};

/// Where the raw input comes from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputSource {
    /// Standard input
    Stdin,
    /// A file on disk
    File(PathBuf),
}

impl InputSource {
    /// Stdin when no path is given
    pub fn from_option(path: Option<&Path>) -> Self {
        match path {
            Some(path) => InputSource::File(path.to_path_buf()),
            None => InputSource::Stdin,
        }
    }

    /// Human-readable name for logging
    pub fn display_name(&self) -> String {
        match self {
            InputSource::Stdin => "<stdin>".to_string(),
            InputSource::File(path) => path.display().to_string(),
        }
    }
}

/// Reads raw input and reduces it to sanitized text
pub struct FileReader;

impl FileReader {
    /// Read all raw bytes from a source
    pub fn read_bytes(source: &InputSource) -> Result<Vec<u8>> {
        match source {
            InputSource::Stdin => {
                let mut buffer = Vec::new();
                io::stdin()
                    .lock()
                    .read_to_end(&mut buffer)
                    .context("Failed to read from stdin")?;
                Ok(buffer)
            }
            InputSource::File(path) => fs::read(path)
                .with_context(|| format!("Failed to read file: {}", path.display())),
        }
    }

    /// Read a source and sanitize it
    pub fn read_sanitized(source: &InputSource) -> Result<String> {
        let raw = Self::read_bytes(source)?;
        let text = sanitize_bytes(&raw);
        log::debug!(
            "read {} bytes from {}, {} characters after sanitizing",
            raw.len(),
            source.display_name(),
            text.len()
        );
        Ok(text)
    }
}
