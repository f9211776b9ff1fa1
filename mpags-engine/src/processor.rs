//! Main cipher processor and builder
//!
//! Entry point for applying a constructed cipher to sanitized text. Picks an
//! executor from the [`EngineConfig`] and reports what was actually used.

use crate::{
    config::EngineConfig,
    error::Result,
    executor::{auto_select, ExecutionMode, ExecutionOutput, Executor, SequentialExecutor},
};
use mpags_core::{AnyCipher, Cipher, CipherMode};
use std::time::{Duration, Instant};

#[cfg(feature = "parallel")]
use crate::executor::ParallelExecutor;

/// Main cipher processor
#[derive(Debug, Clone, Default)]
pub struct CipherProcessor {
    config: EngineConfig,
}

/// Rich output with metadata
#[derive(Debug, Clone)]
pub struct ProcessingOutput {
    /// The transformed text
    pub text: String,
    /// Processing metadata
    pub metadata: ProcessingMetadata,
}

/// Processing metadata
#[derive(Debug, Clone)]
pub struct ProcessingMetadata {
    /// Execution mode that was actually used
    pub mode_used: ExecutionMode,
    /// Number of chunks the text was split into
    pub chunks_processed: usize,
    /// Characters of sanitized input
    pub chars_processed: usize,
    /// Wall-clock time spent
    pub processing_time: Duration,
}

impl CipherProcessor {
    /// Create a processor with the default configuration
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a processor with a custom configuration
    pub fn with_config(config: EngineConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    /// Start building a processor
    pub fn builder() -> CipherProcessorBuilder {
        CipherProcessorBuilder::new()
    }

    /// The active configuration
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Apply `cipher` to sanitized `text` and return the output with metadata
    pub fn process<C>(
        &self,
        text: &str,
        cipher: &C,
        mode: CipherMode,
    ) -> Result<ProcessingOutput>
    where
        C: Cipher + Clone + 'static,
    {
        let started = Instant::now();
        let chars = text.chars().count();
        let execution_mode = self.select_mode(chars);

        log::info!(
            "applying {} cipher ({mode}) to {chars} characters, {execution_mode:?} execution",
            cipher.cipher_type()
        );

        let ExecutionOutput {
            text,
            chunks_processed,
        } = self.run(execution_mode, text, cipher, mode)?;

        Ok(ProcessingOutput {
            text,
            metadata: ProcessingMetadata {
                mode_used: execution_mode,
                chunks_processed,
                chars_processed: chars,
                processing_time: started.elapsed(),
            },
        })
    }

    /// Apply a cipher built by the factory and return only the text
    pub fn process_text(
        &self,
        text: &str,
        cipher: &AnyCipher,
        mode: CipherMode,
    ) -> Result<String> {
        Ok(self.process(text, cipher, mode)?.text)
    }

    fn select_mode(&self, chars: usize) -> ExecutionMode {
        if self.config.worker_count == 1 {
            return ExecutionMode::Sequential;
        }
        match self.config.execution_mode {
            ExecutionMode::Adaptive => auto_select(chars, self.config.parallel_threshold),
            #[cfg(not(feature = "parallel"))]
            ExecutionMode::Parallel => ExecutionMode::Sequential,
            other => other,
        }
    }

    fn run<C>(
        &self,
        execution_mode: ExecutionMode,
        text: &str,
        cipher: &C,
        mode: CipherMode,
    ) -> Result<ExecutionOutput>
    where
        C: Cipher + Clone + 'static,
    {
        match execution_mode {
            #[cfg(feature = "parallel")]
            ExecutionMode::Parallel => {
                ParallelExecutor::new(self.config.worker_count, self.config.timeout)
                    .process(text, cipher, mode)
            }
            _ => SequentialExecutor.process(text, cipher, mode),
        }
    }
}

/// Builder for CipherProcessor
///
/// Provides a fluent interface for configuring the processor.
#[derive(Debug, Clone, Default)]
pub struct CipherProcessorBuilder {
    config: EngineConfig,
}

impl CipherProcessorBuilder {
    /// Create a new builder
    pub fn new() -> Self {
        Self::default()
    }

    /// Start from an existing configuration
    pub fn from_config(config: EngineConfig) -> Self {
        Self { config }
    }

    /// Set the number of concurrent workers
    pub fn worker_count(mut self, count: usize) -> Self {
        self.config.worker_count = count;
        self
    }

    /// Set the execution mode
    pub fn execution_mode(mut self, mode: ExecutionMode) -> Self {
        self.config.execution_mode = mode;
        self
    }

    /// Set the adaptive threshold in characters
    pub fn parallel_threshold(mut self, threshold: usize) -> Self {
        self.config.parallel_threshold = threshold;
        self
    }

    /// Set the overall worker timeout
    pub fn timeout(mut self, timeout: Option<Duration>) -> Self {
        self.config.timeout = timeout;
        self
    }

    /// Build the processor
    pub fn build(self) -> Result<CipherProcessor> {
        CipherProcessor::with_config(self.config)
    }
}
