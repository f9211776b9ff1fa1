//! Caesar shift cipher

use super::{shift_letter, Cipher, CipherMode, CipherType, ALPHABET_SIZE};
use crate::error::{ConstructionError, Result};

/// Shifts every letter by a fixed amount; digits pass through
///
/// Each character is transformed on its own, so any substring can be
/// processed independently.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CaesarCipher {
    shift: u8,
}

impl CaesarCipher {
    /// Build a Caesar cipher from a numeric key
    ///
    /// An empty key gives the identity cipher. Larger keys wrap modulo 26.
    pub fn new(key: &str) -> Result<Self> {
        let key = key.trim();
        if key.is_empty() {
            return Ok(Self::with_shift(0));
        }

        if !key.bytes().all(|b| b.is_ascii_digit()) {
            return Err(ConstructionError::InvalidCaesarKey {
                key: key.to_string(),
            });
        }

        let value: u64 = key
            .parse()
            .map_err(|_| ConstructionError::InvalidCaesarKey {
                key: key.to_string(),
            })?;

        Ok(Self::with_shift((value % u64::from(ALPHABET_SIZE)) as u8))
    }

    /// Build a Caesar cipher with an explicit shift
    pub fn with_shift(shift: u8) -> Self {
        Self {
            shift: shift % ALPHABET_SIZE,
        }
    }

    /// The shift in the range 0..26
    pub fn shift(&self) -> u8 {
        self.shift
    }
}

impl Cipher for CaesarCipher {
    fn cipher_type(&self) -> CipherType {
        CipherType::Caesar
    }

    fn apply_segment(&self, segment: &str, _phase: usize, mode: CipherMode) -> String {
        segment
            .chars()
            .map(|ch| {
                if ch.is_ascii_uppercase() {
                    shift_letter(ch, self.shift, mode)
                } else {
                    ch
                }
            })
            .collect()
    }
}
