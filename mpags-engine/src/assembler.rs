//! Result assembly module
//!
//! Puts per-chunk outputs back together in slice order, independent of the
//! order in which workers finished.

use crate::error::{EngineError, Result};

/// Assembler for combining partial results
#[derive(Debug, Default)]
pub struct ResultAssembler;

impl ResultAssembler {
    /// Create a new result assembler
    pub fn new() -> Self {
        Self
    }

    /// Concatenate `(index, output)` pairs by index
    ///
    /// Fails unless every index in `0..expected` appears exactly once.
    pub fn assemble(&self, mut parts: Vec<(usize, String)>, expected: usize) -> Result<String> {
        if parts.len() != expected {
            return Err(EngineError::AssemblyFailed {
                reason: format!("expected {expected} chunk outputs, got {}", parts.len()),
            });
        }

        parts.sort_unstable_by_key(|(index, _)| *index);

        for (position, (index, _)) in parts.iter().enumerate() {
            if *index != position {
                return Err(EngineError::AssemblyFailed {
                    reason: format!("missing or duplicate output for chunk {position}"),
                });
            }
        }

        let capacity = parts.iter().map(|(_, text)| text.len()).sum();
        let mut output = String::with_capacity(capacity);
        for (_, text) in parts {
            output.push_str(&text);
        }
        Ok(output)
    }
}
