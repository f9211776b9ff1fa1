//! Configuration types for the engine

use crate::error::{EngineError, Result};
use crate::ExecutionMode;
use std::time::Duration;

/// Default number of concurrent workers
pub const DEFAULT_WORKER_COUNT: usize = 4;

/// Largest accepted worker count; each chunk gets its own pool thread
pub const MAX_WORKER_COUNT: usize = 1024;

/// Default upper bound on how long to wait for all workers
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(300);

/// Engine configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EngineConfig {
    /// Execution mode selector
    pub execution_mode: ExecutionMode,
    /// Number of chunks (and worker threads) for parallel execution
    pub worker_count: usize,
    /// Minimum text length (in characters) for adaptive mode to go parallel
    pub parallel_threshold: usize,
    /// Overall deadline for a parallel run (None = wait indefinitely)
    pub timeout: Option<Duration>,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            execution_mode: ExecutionMode::Parallel,
            worker_count: DEFAULT_WORKER_COUNT,
            parallel_threshold: 64 * 1024, // 64K characters
            timeout: Some(DEFAULT_TIMEOUT),
        }
    }
}

impl EngineConfig {
    /// Single-threaded configuration
    pub fn sequential() -> Self {
        Self {
            execution_mode: ExecutionMode::Sequential,
            worker_count: 1,
            ..Default::default()
        }
    }

    /// Always chunk across `workers` threads
    pub fn parallel(workers: usize) -> Self {
        Self {
            execution_mode: ExecutionMode::Parallel,
            worker_count: workers,
            ..Default::default()
        }
    }

    /// Choose between sequential and parallel by input length
    pub fn adaptive() -> Self {
        Self {
            execution_mode: ExecutionMode::Adaptive,
            ..Default::default()
        }
    }

    /// Check the configuration for values the engine cannot run with
    pub fn validate(&self) -> Result<()> {
        if self.worker_count == 0 {
            return Err(EngineError::InvalidConfig(
                "worker_count must be at least 1".to_string(),
            ));
        }
        if self.worker_count > MAX_WORKER_COUNT {
            return Err(EngineError::InvalidConfig(format!(
                "worker_count must be at most {MAX_WORKER_COUNT}, got {}",
                self.worker_count
            )));
        }
        if self.timeout == Some(Duration::ZERO) {
            return Err(EngineError::InvalidConfig(
                "timeout must be greater than zero".to_string(),
            ));
        }
        Ok(())
    }
}
