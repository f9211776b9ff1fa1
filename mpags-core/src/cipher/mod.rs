//! Cipher abstraction and the closed set of cipher variants

use std::borrow::Cow;
use std::fmt;

pub mod caesar;
pub mod playfair;
pub mod vigenere;

pub use caesar::CaesarCipher;
pub use playfair::PlayfairCipher;
pub use vigenere::VigenereCipher;

/// Number of letters in the cipher alphabet
pub const ALPHABET_SIZE: u8 = 26;

/// Which cipher to use
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum CipherType {
    /// Fixed alphabet shift
    #[default]
    Caesar,
    /// Digraph substitution on a 5x5 key square
    Playfair,
    /// Repeating-keyword shift
    Vigenere,
}

impl CipherType {
    /// All supported cipher types
    pub const ALL: [CipherType; 3] = [
        CipherType::Caesar,
        CipherType::Playfair,
        CipherType::Vigenere,
    ];

    /// Lowercase name, as accepted on the command line
    pub fn name(&self) -> &'static str {
        match self {
            CipherType::Caesar => "caesar",
            CipherType::Playfair => "playfair",
            CipherType::Vigenere => "vigenere",
        }
    }
}

impl fmt::Display for CipherType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Direction of a cipher transform
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum CipherMode {
    /// Plaintext to ciphertext
    #[default]
    Encrypt,
    /// Ciphertext to plaintext
    Decrypt,
}

impl fmt::Display for CipherMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CipherMode::Encrypt => f.write_str("encrypt"),
            CipherMode::Decrypt => f.write_str("decrypt"),
        }
    }
}

/// Capability shared by every cipher variant
///
/// A cipher is immutable once built. `apply_cipher` is the whole-text,
/// single-pass transform. The remaining methods let a caller split the work:
///
/// 1. run [`prepare`](Cipher::prepare) once over the whole text,
/// 2. cut the prepared text only where the number of preceding letters is a
///    multiple of [`alignment`](Cipher::alignment),
/// 3. run [`apply_segment`](Cipher::apply_segment) on each piece, passing the
///    number of letters that precede it as `phase`,
/// 4. concatenate the pieces in order.
///
/// The concatenation is always equal to `apply_cipher` on the whole text.
pub trait Cipher: Send + Sync {
    /// The variant this cipher implements
    fn cipher_type(&self) -> CipherType;

    /// Whole-text rewrite that must happen before any split
    ///
    /// Only ciphers whose output depends on surrounding context need this.
    fn prepare<'a>(&self, text: &'a str, _mode: CipherMode) -> Cow<'a, str> {
        Cow::Borrowed(text)
    }

    /// Letter granularity at which prepared text may be cut
    fn alignment(&self) -> usize {
        1
    }

    /// Transform a segment of prepared text
    ///
    /// `phase` is the number of letters (A-Z) preceding `segment` in the
    /// prepared text.
    fn apply_segment(&self, segment: &str, phase: usize, mode: CipherMode) -> String;

    /// Transform sanitized text in a single sequential pass
    fn apply_cipher(&self, text: &str, mode: CipherMode) -> String {
        let prepared = self.prepare(text, mode);
        self.apply_segment(&prepared, 0, mode)
    }
}

/// Any of the supported ciphers
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AnyCipher {
    /// Caesar shift
    Caesar(CaesarCipher),
    /// Playfair digraph cipher
    Playfair(PlayfairCipher),
    /// Vigenère keyword cipher
    Vigenere(VigenereCipher),
}

impl AnyCipher {
    fn inner(&self) -> &dyn Cipher {
        match self {
            AnyCipher::Caesar(c) => c,
            AnyCipher::Playfair(c) => c,
            AnyCipher::Vigenere(c) => c,
        }
    }
}

impl Cipher for AnyCipher {
    fn cipher_type(&self) -> CipherType {
        self.inner().cipher_type()
    }

    fn prepare<'a>(&self, text: &'a str, mode: CipherMode) -> Cow<'a, str> {
        self.inner().prepare(text, mode)
    }

    fn alignment(&self) -> usize {
        self.inner().alignment()
    }

    fn apply_segment(&self, segment: &str, phase: usize, mode: CipherMode) -> String {
        self.inner().apply_segment(segment, phase, mode)
    }

    fn apply_cipher(&self, text: &str, mode: CipherMode) -> String {
        self.inner().apply_cipher(text, mode)
    }
}

impl From<CaesarCipher> for AnyCipher {
    fn from(cipher: CaesarCipher) -> Self {
        AnyCipher::Caesar(cipher)
    }
}

impl From<PlayfairCipher> for AnyCipher {
    fn from(cipher: PlayfairCipher) -> Self {
        AnyCipher::Playfair(cipher)
    }
}

impl From<VigenereCipher> for AnyCipher {
    fn from(cipher: VigenereCipher) -> Self {
        AnyCipher::Vigenere(cipher)
    }
}

/// Shift an uppercase letter by `shift` places, wrapping around the alphabet
#[inline]
pub(crate) fn shift_letter(letter: char, shift: u8, mode: CipherMode) -> char {
    let index = letter as u8 - b'A';
    let shift = shift % ALPHABET_SIZE;
    let shifted = match mode {
        CipherMode::Encrypt => (index + shift) % ALPHABET_SIZE,
        CipherMode::Decrypt => (index + ALPHABET_SIZE - shift) % ALPHABET_SIZE,
    };
    char::from(b'A' + shifted)
}

/// Count the letters (A-Z) in sanitized or prepared text
pub fn count_letters(text: &str) -> usize {
    text.bytes().filter(u8::is_ascii_uppercase).count()
}
