//! Parallel execution strategy

use crate::{
    assembler::ResultAssembler,
    chunker::{ChunkManager, TextChunk},
    error::{EngineError, Result},
    executor::{ExecutionMode, ExecutionOutput, Executor},
};
use mpags_core::{Cipher, CipherMode};
use std::any::Any;
use std::panic::{self, AssertUnwindSafe};
use std::sync::mpsc::{self, Receiver, RecvTimeoutError};
use std::sync::Arc;
use std::time::{Duration, Instant};

/// What a worker sends back: its chunk index and either the output or the
/// panic message
type WorkerReport = (usize, std::result::Result<String, String>);

/// Parallel multi-threaded executor
#[derive(Debug)]
pub struct ParallelExecutor {
    chunk_manager: ChunkManager,
    assembler: ResultAssembler,
    timeout: Option<Duration>,
}

impl ParallelExecutor {
    /// Create a new parallel executor
    pub fn new(worker_count: usize, timeout: Option<Duration>) -> Self {
        Self {
            chunk_manager: ChunkManager::new(worker_count),
            assembler: ResultAssembler::new(),
            timeout,
        }
    }

    /// Prepare, chunk, dispatch, join and assemble
    fn process_parallel<C>(
        &self,
        text: &str,
        cipher: &C,
        mode: CipherMode,
    ) -> Result<ExecutionOutput>
    where
        C: Cipher + Clone + 'static,
    {
        // Phase 1: context-dependent rewriting over the whole text
        let prepared = cipher.prepare(text, mode);

        // Phase 2: split at cipher-aligned boundaries
        let chunks = self.chunk_manager.chunk_text(&prepared, cipher.alignment())?;
        if chunks.is_empty() {
            return Ok(ExecutionOutput {
                text: String::new(),
                chunks_processed: 0,
            });
        }
        let expected = chunks.len();

        // Phase 3: one worker per chunk
        let pool = rayon::ThreadPoolBuilder::new()
            .num_threads(expected)
            .thread_name(|i| format!("mpags-worker-{i}"))
            .build()
            .map_err(|e| EngineError::ThreadPool(e.to_string()))?;

        let cipher = Arc::new(cipher.clone());
        let (tx, rx) = mpsc::channel::<WorkerReport>();

        for chunk in chunks {
            let tx = tx.clone();
            let cipher = Arc::clone(&cipher);
            pool.spawn(move || {
                let TextChunk {
                    index, text, phase, ..
                } = chunk;
                log::debug!("chunk {index}: start ({} chars, phase {phase})", text.len());

                let result = panic::catch_unwind(AssertUnwindSafe(|| {
                    cipher.apply_segment(&text, phase, mode)
                }))
                .map_err(|payload| panic_message(payload.as_ref()));

                log::debug!("chunk {index}: done");
                // The receiver only hangs up after a timeout
                let _ = tx.send((index, result));
            });
        }
        drop(tx);

        // Phase 4: wait for every worker
        let outputs = self.join(&rx, expected)?;

        // Phase 5: concatenate by slice index
        let text = self.assembler.assemble(outputs, expected)?;

        Ok(ExecutionOutput {
            text,
            chunks_processed: expected,
        })
    }

    /// Block until `expected` reports arrive or the deadline passes
    ///
    /// When several workers fail, the lowest chunk index is reported.
    fn join(&self, rx: &Receiver<WorkerReport>, expected: usize) -> Result<Vec<(usize, String)>> {
        let started = Instant::now();
        let deadline = self.timeout.map(|t| started + t);

        let mut outputs = Vec::with_capacity(expected);
        let mut failures: Vec<(usize, String)> = Vec::new();

        while outputs.len() + failures.len() < expected {
            let received = outputs.len() + failures.len();
            let report = match deadline {
                Some(deadline) => {
                    let remaining = deadline.saturating_duration_since(Instant::now());
                    rx.recv_timeout(remaining).map_err(|e| match e {
                        RecvTimeoutError::Timeout => EngineError::Timeout {
                            elapsed: started.elapsed(),
                        },
                        RecvTimeoutError::Disconnected => {
                            EngineError::WorkerLost { received, expected }
                        }
                    })?
                }
                None => rx
                    .recv()
                    .map_err(|_| EngineError::WorkerLost { received, expected })?,
            };

            match report {
                (index, Ok(text)) => outputs.push((index, text)),
                (index, Err(message)) => {
                    log::error!("chunk {index}: worker panicked: {message}");
                    failures.push((index, message));
                }
            }
        }

        if let Some((index, message)) = failures.into_iter().min_by_key(|(index, _)| *index) {
            return Err(EngineError::WorkerPanicked { index, message });
        }

        Ok(outputs)
    }
}

impl Executor for ParallelExecutor {
    fn process<C>(&self, text: &str, cipher: &C, mode: CipherMode) -> Result<ExecutionOutput>
    where
        C: Cipher + Clone + 'static,
    {
        self.process_parallel(text, cipher, mode)
    }

    fn mode(&self) -> ExecutionMode {
        ExecutionMode::Parallel
    }
}

/// Extract a readable message from a panic payload
fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(message) = payload.downcast_ref::<&str>() {
        (*message).to_string()
    } else if let Some(message) = payload.downcast_ref::<String>() {
        message.clone()
    } else {
        "unknown panic payload".to_string()
    }
}
