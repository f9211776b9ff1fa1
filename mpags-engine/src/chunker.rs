//! Text chunking utilities
//!
//! Splits prepared text into contiguous chunks, one per worker. Cut points
//! are only placed where the number of preceding letters is a multiple of
//! the cipher's alignment, and every chunk records that letter count as its
//! phase.

use crate::error::{EngineError, Result};
use std::iter;

/// A chunk of text with metadata
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextChunk {
    /// Position of this chunk in the original order
    pub index: usize,
    /// The text content
    pub text: String,
    /// Character offset in the chunked text
    pub start: usize,
    /// Character length
    pub len: usize,
    /// Number of letters (A-Z) preceding this chunk
    pub phase: usize,
}

/// Splits text into at most `worker_count` aligned chunks
#[derive(Debug, Clone)]
pub struct ChunkManager {
    worker_count: usize,
}

impl ChunkManager {
    /// Create a new chunk manager
    pub fn new(worker_count: usize) -> Self {
        Self { worker_count }
    }

    /// Number of slices for text of `char_len` characters
    ///
    /// Text shorter than the worker count is not split at all.
    pub fn effective_chunks(&self, char_len: usize) -> usize {
        if char_len < self.worker_count {
            1
        } else {
            self.worker_count
        }
    }

    /// Chunk text so that every cut falls on a multiple of `alignment` letters
    ///
    /// Slices are roughly equal in length; the final slice absorbs the
    /// remainder. A cut that is moved forward to reach alignment may leave
    /// a later slice empty, in which case it is dropped.
    pub fn chunk_text(&self, text: &str, alignment: usize) -> Result<Vec<TextChunk>> {
        if self.worker_count == 0 {
            return Err(EngineError::InvalidConfig(
                "worker_count must be at least 1".to_string(),
            ));
        }
        if alignment == 0 {
            return Err(EngineError::InvalidConfig(
                "chunk alignment must be at least 1".to_string(),
            ));
        }

        // Byte offset of every char position, plus the end of the text
        let byte_offsets: Vec<usize> = text
            .char_indices()
            .map(|(i, _)| i)
            .chain(iter::once(text.len()))
            .collect();
        let char_len = byte_offsets.len() - 1;
        if char_len == 0 {
            return Ok(Vec::new());
        }

        // letters_before[i] = letters in the first i chars
        let mut letters_before = Vec::with_capacity(char_len + 1);
        letters_before.push(0);
        for ch in text.chars() {
            let last = letters_before[letters_before.len() - 1];
            letters_before.push(last + usize::from(ch.is_ascii_uppercase()));
        }

        let count = self.effective_chunks(char_len);
        if count < self.worker_count {
            log::debug!(
                "text has {char_len} characters; using {count} of {} workers",
                self.worker_count
            );
        }

        let base = char_len / count;
        let mut cuts = Vec::with_capacity(count + 1);
        cuts.push(0);
        for k in 1..count {
            let mut cut = (k * base).max(cuts[cuts.len() - 1]);
            while cut < char_len && letters_before[cut] % alignment != 0 {
                cut += 1;
            }
            cuts.push(cut);
        }
        cuts.push(char_len);

        let chunks = cuts
            .windows(2)
            .filter(|w| w[1] > w[0])
            .enumerate()
            .map(|(index, w)| TextChunk {
                index,
                text: text[byte_offsets[w[0]]..byte_offsets[w[1]]].to_string(),
                start: w[0],
                len: w[1] - w[0],
                phase: letters_before[w[0]],
            })
            .collect();

        Ok(chunks)
    }
}
