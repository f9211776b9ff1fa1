//! Input sanitization
//!
//! Every character is mapped into the cipher-safe alphabet before a cipher
//! sees it: letters are upper-cased, digits pass through, everything else
//! is dropped.

/// Map a single character into the cipher-safe alphabet
///
/// Returns `None` for anything that is not an ASCII letter or digit.
#[inline]
pub fn sanitize_char(ch: char) -> Option<char> {
    if ch.is_ascii_alphabetic() {
        Some(ch.to_ascii_uppercase())
    } else if ch.is_ascii_digit() {
        Some(ch)
    } else {
        None
    }
}

/// Sanitize a whole string
pub fn sanitize(input: &str) -> String {
    input.chars().filter_map(sanitize_char).collect()
}

/// Sanitize raw bytes
///
/// Bytes outside ASCII can never survive sanitization, so the input does not
/// need to be valid UTF-8.
pub fn sanitize_bytes(input: &[u8]) -> String {
    input
        .iter()
        .filter_map(|&b| sanitize_char(char::from(b)))
        .collect()
}
