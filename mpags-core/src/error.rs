//! Error types for cipher construction

use crate::cipher::CipherType;
use thiserror::Error;

/// Raised when a cipher cannot be built from the supplied key
///
/// All cipher failures happen here; applying a constructed cipher never fails.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConstructionError {
    /// The cipher needs a keyword but none was given
    #[error("empty key supplied for {cipher} cipher")]
    EmptyKey {
        /// The cipher that rejected the key
        cipher: CipherType,
    },

    /// Caesar keys must be non-negative integers
    #[error("caesar key '{key}' is not a non-negative integer")]
    InvalidCaesarKey {
        /// The rejected key
        key: String,
    },

    /// Keyword ciphers accept letters only
    #[error("{cipher} key '{key}' must contain only letters A-Z")]
    NonAlphabeticKey {
        /// The cipher that rejected the key
        cipher: CipherType,
        /// The rejected key
        key: String,
    },
}

/// Result type for cipher construction
pub type Result<T> = std::result::Result<T, ConstructionError>;
