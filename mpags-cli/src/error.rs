//! Error handling for the CLI application

use mpags_core::ConstructionError;
use mpags_engine::EngineError;
use thiserror::Error;

/// CLI-level errors, one variant per failure category
#[derive(Debug, Error)]
pub enum CliError {
    /// The cipher could not be built from the supplied key
    #[error("cipher construction failed: {0}")]
    Construction(#[from] ConstructionError),

    /// Applying the cipher failed
    #[error("processing failed: {0}")]
    Processing(EngineError),

    /// Configuration error
    #[error("configuration error: {0}")]
    Config(String),
}

impl From<EngineError> for CliError {
    fn from(err: EngineError) -> Self {
        if err.is_processing_failure() {
            CliError::Processing(err)
        } else {
            CliError::Config(err.to_string())
        }
    }
}

/// Result type alias for CLI operations
pub type CliResult<T> = Result<T, anyhow::Error>;
