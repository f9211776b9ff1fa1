//! Chunked concurrent application of classical ciphers
//!
//! This crate splits sanitized text into chunks, applies a cipher to each
//! chunk on its own worker thread and reassembles the outputs in order. The
//! result is always identical to applying the cipher in one sequential pass:
//! - Playfair padding is computed over the whole text before any split
//! - cuts only fall on digraph boundaries for Playfair
//! - each chunk carries its letter offset so Vigenère starts at the right
//!   keyword position

#![warn(missing_docs)]

pub mod assembler;
pub mod chunker;
pub mod config;
pub mod error;
pub mod executor;
pub mod processor;

// Re-export key types
pub use assembler::ResultAssembler;
pub use chunker::{ChunkManager, TextChunk};
pub use config::{EngineConfig, MAX_WORKER_COUNT};
pub use error::{EngineError, Result};
pub use executor::{ExecutionMode, ExecutionOutput, Executor};
pub use processor::{
    CipherProcessor, CipherProcessorBuilder, ProcessingMetadata, ProcessingOutput,
};

// Re-export from core for convenience
pub use mpags_core::{AnyCipher, Cipher, CipherFactory, CipherMode, CipherType};
