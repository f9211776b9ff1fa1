//! Basic tests for mpags-core

use mpags_core::*;

#[test]
fn test_caesar_attack_at_dawn() {
    let cipher = CipherFactory::create(CipherType::Caesar, "3").unwrap();
    let text = sanitize("Attack at Dawn!");
    assert_eq!(text, "ATTACKATDAWN");
    assert_eq!(cipher.apply_cipher(&text, CipherMode::Encrypt), "DWWDFNDWGDZQ");
}

#[test]
fn test_playfair_hello_textbook() {
    let cipher = CipherFactory::create(CipherType::Playfair, "playfair").unwrap();
    assert_eq!(cipher.prepare("HELLO", CipherMode::Encrypt), "HELXLO");
    assert_eq!(cipher.apply_cipher("HELLO", CipherMode::Encrypt), "KGYVRV");
}

#[test]
fn test_playfair_empty_key_fails() {
    let result = CipherFactory::create(CipherType::Playfair, "");
    assert!(matches!(result, Err(ConstructionError::EmptyKey { .. })));
}

#[test]
fn test_vigenere_digit_skipping() {
    let cipher = CipherFactory::create(CipherType::Vigenere, "LEMON").unwrap();
    let without = cipher.apply_cipher("ATTACKATDAWN", CipherMode::Encrypt);
    let with = cipher.apply_cipher("ATTACK2024ATDAWN", CipherMode::Encrypt);
    assert_eq!(with.replace("2024", ""), without);
}

#[test]
fn test_alignment_per_variant() {
    let caesar = CipherFactory::create(CipherType::Caesar, "1").unwrap();
    let vigenere = CipherFactory::create(CipherType::Vigenere, "A").unwrap();
    let playfair = CipherFactory::create(CipherType::Playfair, "A").unwrap();
    assert_eq!(caesar.alignment(), 1);
    assert_eq!(vigenere.alignment(), 1);
    assert_eq!(playfair.alignment(), 2);
}

#[test]
fn test_cipher_is_shareable_across_threads() {
    fn assert_send_sync<T: Send + Sync + 'static>() {}
    assert_send_sync::<AnyCipher>();
}
