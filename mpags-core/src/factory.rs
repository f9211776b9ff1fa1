//! Cipher construction

use crate::cipher::{AnyCipher, CaesarCipher, CipherType, PlayfairCipher, VigenereCipher};
use crate::error::Result;

/// Builds a validated cipher from a type and a key
#[derive(Debug, Clone, Copy, Default)]
pub struct CipherFactory;

impl CipherFactory {
    /// Validate `key` for `cipher_type` and construct the cipher
    ///
    /// Nothing is constructed when the key is rejected; callers should treat
    /// the error as fatal for the run.
    pub fn create(cipher_type: CipherType, key: &str) -> Result<AnyCipher> {
        let cipher: AnyCipher = match cipher_type {
            CipherType::Caesar => CaesarCipher::new(key)?.into(),
            CipherType::Playfair => PlayfairCipher::new(key)?.into(),
            CipherType::Vigenere => VigenereCipher::new(key)?.into(),
        };
        Ok(cipher)
    }
}
