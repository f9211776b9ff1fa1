//! Execution strategies for applying a cipher

use crate::error::Result;
use mpags_core::{Cipher, CipherMode};

#[cfg(feature = "parallel")]
pub mod parallel;
pub mod sequential;

// Re-export executors
#[cfg(feature = "parallel")]
pub use parallel::ParallelExecutor;
pub use sequential::SequentialExecutor;

/// Execution mode selector
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ExecutionMode {
    /// Single-threaded sequential processing
    Sequential,
    /// Chunked processing on concurrent workers
    Parallel,
    /// Pick sequential or parallel by input length
    Adaptive,
}

/// Output of a single executor run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExecutionOutput {
    /// The transformed text
    pub text: String,
    /// Number of chunks the text was split into
    pub chunks_processed: usize,
}

/// Trait for execution strategies
pub trait Executor: Send + Sync {
    /// Apply `cipher` to sanitized `text`
    fn process<C>(&self, text: &str, cipher: &C, mode: CipherMode) -> Result<ExecutionOutput>
    where
        C: Cipher + Clone + 'static;

    /// Get the execution mode
    fn mode(&self) -> ExecutionMode;
}

/// Automatically select execution mode based on text length
pub fn auto_select(text_len: usize, threshold: usize) -> ExecutionMode {
    if text_len < threshold {
        ExecutionMode::Sequential
    } else {
        #[cfg(feature = "parallel")]
        return ExecutionMode::Parallel;

        #[cfg(not(feature = "parallel"))]
        ExecutionMode::Sequential
    }
}
