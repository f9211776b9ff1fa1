//! Sequential execution strategy

use crate::{
    error::Result,
    executor::{ExecutionMode, ExecutionOutput, Executor},
};
use mpags_core::{Cipher, CipherMode};

/// Sequential single-threaded executor
#[derive(Debug, Clone, Default)]
pub struct SequentialExecutor;

impl Executor for SequentialExecutor {
    fn process<C>(&self, text: &str, cipher: &C, mode: CipherMode) -> Result<ExecutionOutput>
    where
        C: Cipher + Clone + 'static,
    {
        Ok(ExecutionOutput {
            text: cipher.apply_cipher(text, mode),
            chunks_processed: usize::from(!text.is_empty()),
        })
    }

    fn mode(&self) -> ExecutionMode {
        ExecutionMode::Sequential
    }
}
