//! Vigenère keyword cipher

use super::{shift_letter, Cipher, CipherMode, CipherType};
use crate::error::{ConstructionError, Result};

/// Shifts each letter by the matching letter of a repeating keyword
///
/// The keyword position only advances on letters, so digits never change the
/// phase for the letters that follow them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VigenereCipher {
    keyword: String,
    shifts: Vec<u8>,
}

impl VigenereCipher {
    /// Build a Vigenère cipher from an alphabetic keyword
    pub fn new(key: &str) -> Result<Self> {
        let keyword = validate_keyword(CipherType::Vigenere, key)?;
        let shifts = keyword.bytes().map(|b| b - b'A').collect();
        Ok(Self { keyword, shifts })
    }

    /// The upper-cased keyword
    pub fn keyword(&self) -> &str {
        &self.keyword
    }
}

impl Cipher for VigenereCipher {
    fn cipher_type(&self) -> CipherType {
        CipherType::Vigenere
    }

    fn apply_segment(&self, segment: &str, phase: usize, mode: CipherMode) -> String {
        let mut position = phase % self.shifts.len();
        let mut out = String::with_capacity(segment.len());

        for ch in segment.chars() {
            if ch.is_ascii_uppercase() {
                out.push(shift_letter(ch, self.shifts[position], mode));
                position = (position + 1) % self.shifts.len();
            } else {
                out.push(ch);
            }
        }

        out
    }
}

/// Check that a keyword is non-empty and alphabetic, returning it upper-cased
pub(crate) fn validate_keyword(cipher: CipherType, key: &str) -> Result<String> {
    let key = key.trim();
    if key.is_empty() {
        return Err(ConstructionError::EmptyKey { cipher });
    }
    if !key.chars().all(|c| c.is_ascii_alphabetic()) {
        return Err(ConstructionError::NonAlphabeticKey {
            cipher,
            key: key.to_string(),
        });
    }
    Ok(key.to_ascii_uppercase())
}
