//! Engine error types

use std::time::Duration;
use thiserror::Error;

/// Errors raised while applying a cipher to chunked text
#[derive(Error, Debug)]
pub enum EngineError {
    /// Invalid engine configuration
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    /// Thread pool could not be created
    #[error("failed to build worker pool: {0}")]
    ThreadPool(String),

    /// A worker panicked while transforming its chunk
    #[error("worker for chunk {index} panicked: {message}")]
    WorkerPanicked {
        /// Index of the chunk the worker was processing
        index: usize,
        /// Panic payload, if it was a string
        message: String,
    },

    /// A worker went away without reporting a result
    #[error("worker exited without producing a result ({received} of {expected} chunks received)")]
    WorkerLost {
        /// Results received before the channel closed
        received: usize,
        /// Results expected
        expected: usize,
    },

    /// Not every worker finished within the configured timeout
    #[error("timed out after {elapsed:?} waiting for workers")]
    Timeout {
        /// Time spent waiting
        elapsed: Duration,
    },

    /// Chunk outputs could not be put back together
    #[error("failed to assemble chunk outputs: {reason}")]
    AssemblyFailed {
        /// What was wrong with the outputs
        reason: String,
    },
}

impl EngineError {
    /// Whether the error came from the concurrent run itself rather than
    /// from the configuration
    pub fn is_processing_failure(&self) -> bool {
        !matches!(self, EngineError::InvalidConfig(_))
    }
}

/// Result type for engine operations
pub type Result<T> = std::result::Result<T, EngineError>;
