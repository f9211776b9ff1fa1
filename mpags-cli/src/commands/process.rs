//! Process command implementation

use crate::{
    commands::generate_config,
    config::CliConfig,
    error::{CliError, CliResult},
    input::{FileReader, InputSource},
    output::{formatter_for, open_writer, CipherReport, OutputFormat},
};
use clap::Parser;
use mpags_core::{CipherFactory, CipherMode, CipherType};
use mpags_engine::CipherProcessor;
use std::io::{self, Write};
use std::path::PathBuf;

/// Encrypts/Decrypts input alphanumeric text using classical ciphers
#[derive(Debug, Parser)]
#[command(name = "mpags-cipher", version, about)]
pub struct ProcessArgs {
    /// Read text to be processed from FILE (stdin if not supplied)
    #[arg(short, long, value_name = "FILE")]
    pub input: Option<PathBuf>,

    /// Write processed text to FILE (stdout if not supplied)
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Cipher used to perform the encryption/decryption
    #[arg(short, long, value_enum, default_value = "caesar")]
    pub cipher: CipherArg,

    /// Cipher key; a null key (no encryption for caesar) is used if not supplied
    #[arg(short, long, value_name = "KEY", default_value = "", env = "MPAGS_CIPHER_KEY")]
    pub key: String,

    /// Encrypt the input text (default behaviour)
    #[arg(long, conflicts_with = "decrypt")]
    pub encrypt: bool,

    /// Decrypt the input text
    #[arg(long)]
    pub decrypt: bool,

    /// Number of concurrent workers (0 = one per CPU)
    #[arg(short = 'j', long = "workers", value_name = "N")]
    pub workers: Option<usize>,

    /// Configuration file
    #[arg(long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum)]
    pub format: Option<OutputFormat>,

    /// Print a configuration template and exit
    #[arg(long)]
    pub generate_config: bool,

    /// Suppress log output
    #[arg(short, long)]
    pub quiet: bool,

    /// Increase verbosity
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

/// Supported ciphers
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum CipherArg {
    /// Caesar shift; KEY is a non-negative integer
    Caesar,
    /// Playfair digraph cipher; KEY is a keyword
    Playfair,
    /// Vigenère keyword cipher; KEY is a keyword
    Vigenere,
}

impl From<CipherArg> for CipherType {
    fn from(arg: CipherArg) -> Self {
        match arg {
            CipherArg::Caesar => CipherType::Caesar,
            CipherArg::Playfair => CipherType::Playfair,
            CipherArg::Vigenere => CipherType::Vigenere,
        }
    }
}

impl ProcessArgs {
    /// Execute the command
    pub fn execute(&self) -> CliResult<()> {
        // Initialize logging based on verbosity
        self.init_logging()?;

        log::debug!("Arguments: {:?}", self);

        let config = match &self.config {
            Some(path) => CliConfig::from_file(path)?,
            None => CliConfig::default(),
        };

        if self.generate_config {
            let mut stdout = io::stdout().lock();
            stdout.write_all(generate_config::render_template(&config)?.as_bytes())?;
            stdout.flush()?;
            return Ok(());
        }

        let engine_config = config.to_engine_config(self.workers)?;
        let format = match self.format {
            Some(format) => format,
            None => config.output.format.parse().map_err(CliError::Config)?,
        };

        // A bad key must stop the run before any input is read
        let cipher_type = CipherType::from(self.cipher);
        let cipher = CipherFactory::create(cipher_type, &self.key).map_err(CliError::from)?;
        let processor = CipherProcessor::with_config(engine_config).map_err(CliError::from)?;

        let source = InputSource::from_option(self.input.as_deref());
        let text = FileReader::read_sanitized(&source)?;

        let mode = self.cipher_mode();
        let output = processor
            .process(&text, &cipher, mode)
            .map_err(CliError::from)?;

        log::info!(
            "{mode}ed {} characters in {} chunk(s), {:?} execution, {:?}",
            output.metadata.chars_processed,
            output.metadata.chunks_processed,
            output.metadata.mode_used,
            output.metadata.processing_time
        );

        let report = CipherReport {
            cipher: cipher_type.to_string(),
            mode: mode.to_string(),
            chunks: output.metadata.chunks_processed,
            text: output.text,
        };

        // Nothing is written until processing has fully succeeded
        let writer = open_writer(self.output.as_deref())?;
        let mut formatter = formatter_for(format, writer);
        formatter.write_report(&report)?;
        formatter.finish()?;

        Ok(())
    }

    /// Encrypt unless `--decrypt` was given
    pub fn cipher_mode(&self) -> CipherMode {
        if self.decrypt {
            CipherMode::Decrypt
        } else {
            CipherMode::Encrypt
        }
    }

    /// Initialize logging based on verbosity level
    fn init_logging(&self) -> CliResult<()> {
        let log_level = match self.verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        };

        if !self.quiet {
            env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level))
                .try_init()?;
        }

        Ok(())
    }
}
