//! Classical substitution ciphers for the MPAGS cipher tool
//!
//! This crate holds the pure, single-threaded part of the system:
//! - **Sanitizer**: reduces raw input to the cipher-safe alphabet (A-Z, 0-9)
//! - **Ciphers**: Caesar, Playfair and Vigenère behind the [`Cipher`] trait
//! - **Factory**: validates a key and builds the matching [`AnyCipher`]
//!
//! Every cipher also exposes the hooks the engine needs to split work into
//! chunks without changing the result: a whole-text [`Cipher::prepare`] step,
//! a per-segment [`Cipher::apply_segment`] that starts at a given phase, and
//! an [`Cipher::alignment`] that says where segments may be cut.
//!
//! # Example
//!
//! ```rust
//! use mpags_core::{sanitize, Cipher, CipherFactory, CipherMode, CipherType};
//!
//! let cipher = CipherFactory::create(CipherType::Caesar, "3").unwrap();
//! let text = sanitize("Attack at Dawn!");
//! assert_eq!(text, "ATTACKATDAWN");
//! assert_eq!(cipher.apply_cipher(&text, CipherMode::Encrypt), "DWWDFNDWGDZQ");
//! ```

#![warn(missing_docs)]

pub mod cipher;
pub mod error;
pub mod factory;
pub mod sanitizer;

pub use cipher::{
    count_letters, AnyCipher, CaesarCipher, Cipher, CipherMode, CipherType, PlayfairCipher,
    VigenereCipher,
};
pub use error::{ConstructionError, Result};
pub use factory::CipherFactory;
pub use sanitizer::{sanitize, sanitize_bytes, sanitize_char};
