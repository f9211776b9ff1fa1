//! Playfair digraph cipher

use std::borrow::Cow;

use super::vigenere::validate_keyword;
use super::{Cipher, CipherMode, CipherType};
use crate::error::Result;

const GRID_SIZE: usize = 5;

/// Inserted between two identical letters of a digraph
const PAD: char = 'X';
/// Inserted instead of [`PAD`] when the doubled letter is itself `X`
const PAD_FOR_X: char = 'Q';
/// Appended when the letter count is odd
const TRAILING_PAD: char = 'Z';
/// Appended instead of [`TRAILING_PAD`] when the last letter is `Z`
const TRAILING_PAD_FOR_Z: char = 'X';

/// Substitutes letter pairs using a 5x5 key square
///
/// Digraph formation depends on the letters that came before, so padding is
/// computed once over the whole text in [`Cipher::prepare`]. The prepared
/// text can then be cut at any even letter count.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlayfairCipher {
    key_square: [char; GRID_SIZE * GRID_SIZE],
    /// (row, col) of each letter, indexed by `letter - 'A'`; `J` maps to `I`
    positions: [(usize, usize); 26],
}

impl PlayfairCipher {
    /// Build a Playfair cipher from an alphabetic keyword
    pub fn new(key: &str) -> Result<Self> {
        let keyword = validate_keyword(CipherType::Playfair, key)?;

        let mut key_square = [' '; GRID_SIZE * GRID_SIZE];
        let mut seen = [false; 26];
        let mut filled = 0;

        for ch in keyword.chars().chain('A'..='Z') {
            let ch = fold_j(ch);
            let index = letter_index(ch);
            if seen[index] {
                continue;
            }
            seen[index] = true;
            key_square[filled] = ch;
            filled += 1;
        }
        debug_assert_eq!(filled, GRID_SIZE * GRID_SIZE);

        let mut positions = [(0, 0); 26];
        for (i, &ch) in key_square.iter().enumerate() {
            positions[letter_index(ch)] = (i / GRID_SIZE, i % GRID_SIZE);
        }
        positions[letter_index('J')] = positions[letter_index('I')];

        Ok(Self {
            key_square,
            positions,
        })
    }

    /// The key square, row by row
    pub fn key_square(&self) -> String {
        self.key_square.iter().collect()
    }

    fn at(&self, row: usize, col: usize) -> char {
        self.key_square[row * GRID_SIZE + col]
    }

    fn transform_pair(&self, a: char, b: char, mode: CipherMode) -> (char, char) {
        let (row_a, col_a) = self.positions[letter_index(a)];
        let (row_b, col_b) = self.positions[letter_index(b)];
        let step = match mode {
            CipherMode::Encrypt => 1,
            CipherMode::Decrypt => GRID_SIZE - 1,
        };

        if row_a == row_b {
            (
                self.at(row_a, (col_a + step) % GRID_SIZE),
                self.at(row_b, (col_b + step) % GRID_SIZE),
            )
        } else if col_a == col_b {
            (
                self.at((row_a + step) % GRID_SIZE, col_a),
                self.at((row_b + step) % GRID_SIZE, col_b),
            )
        } else {
            (self.at(row_a, col_b), self.at(row_b, col_a))
        }
    }
}

impl Cipher for PlayfairCipher {
    fn cipher_type(&self) -> CipherType {
        CipherType::Playfair
    }

    /// Fold `J` into `I`, break up doubled digraphs (encrypt only) and pad
    /// an odd letter count
    ///
    /// Digits keep their place among the letters and never take part in
    /// digraph formation.
    fn prepare<'a>(&self, text: &'a str, mode: CipherMode) -> Cow<'a, str> {
        let mut out = String::with_capacity(text.len() + text.len() / 2 + 1);
        let mut pending: Option<char> = None;

        for ch in text.chars() {
            if !ch.is_ascii_uppercase() {
                out.push(ch);
                continue;
            }

            let ch = fold_j(ch);
            match pending {
                None => pending = Some(ch),
                Some(first) if first == ch && mode == CipherMode::Encrypt => {
                    out.push(if ch == 'X' { PAD_FOR_X } else { PAD });
                    pending = Some(ch);
                }
                Some(_) => pending = None,
            }
            out.push(ch);
        }

        if let Some(last) = pending {
            out.push(if last == TRAILING_PAD {
                TRAILING_PAD_FOR_Z
            } else {
                TRAILING_PAD
            });
        }

        Cow::Owned(out)
    }

    fn alignment(&self) -> usize {
        2
    }

    fn apply_segment(&self, segment: &str, _phase: usize, mode: CipherMode) -> String {
        let mut out: Vec<char> = segment.chars().collect();
        let letters: Vec<usize> = out
            .iter()
            .enumerate()
            .filter(|(_, c)| c.is_ascii_uppercase())
            .map(|(i, _)| i)
            .collect();

        // An unpaired trailing letter only happens for text that skipped
        // `prepare`; leave it as is.
        for pair in letters.chunks_exact(2) {
            let (a, b) = self.transform_pair(out[pair[0]], out[pair[1]], mode);
            out[pair[0]] = a;
            out[pair[1]] = b;
        }

        out.into_iter().collect()
    }
}

#[inline]
fn fold_j(ch: char) -> char {
    if ch == 'J' {
        'I'
    } else {
        ch
    }
}

#[inline]
fn letter_index(ch: char) -> usize {
    (ch as u8 - b'A') as usize
}
