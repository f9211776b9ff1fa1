//! Chunked application must match one sequential pass for every cipher

use mpags_engine::{
    ChunkManager, Cipher, CipherFactory, CipherMode, CipherProcessor, CipherType, ExecutionMode,
};
use proptest::prelude::*;

fn key_for(cipher_type: CipherType, keyword: &str, shift: u8) -> String {
    match cipher_type {
        CipherType::Caesar => shift.to_string(),
        _ => keyword.to_string(),
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn chunked_apply_equals_sequential(
        text in "[A-Z0-9]{0,300}",
        keyword in "[A-Z]{1,10}",
        shift in 0u8..26,
        workers in 1usize..=9,
        cipher_type in prop::sample::select(CipherType::ALL.to_vec()),
        decrypt in any::<bool>(),
    ) {
        let mode = if decrypt { CipherMode::Decrypt } else { CipherMode::Encrypt };
        let cipher = CipherFactory::create(cipher_type, &key_for(cipher_type, &keyword, shift))
            .unwrap();

        let processor = CipherProcessor::builder()
            .worker_count(workers)
            .execution_mode(ExecutionMode::Parallel)
            .build()
            .unwrap();

        let chunked = processor.process_text(&text, &cipher, mode).unwrap();
        prop_assert_eq!(chunked, cipher.apply_cipher(&text, mode));
    }

    #[test]
    fn chunked_round_trip(
        text in "[A-Z0-9]{0,300}",
        keyword in "[A-Z]{1,10}",
        workers in 1usize..=9,
    ) {
        let cipher = CipherFactory::create(CipherType::Vigenere, &keyword).unwrap();
        let processor = CipherProcessor::builder().worker_count(workers).build().unwrap();

        let encrypted = processor.process_text(&text, &cipher, CipherMode::Encrypt).unwrap();
        let decrypted = processor.process_text(&encrypted, &cipher, CipherMode::Decrypt).unwrap();
        prop_assert_eq!(decrypted, text);
    }

    #[test]
    fn chunks_cover_text_with_correct_phase(
        text in "[A-Z0-9]{0,300}",
        workers in 1usize..=9,
        alignment in 1usize..=2,
    ) {
        // Pad to an even letter count, as prepared Playfair text always is
        let mut text = text;
        if text.bytes().filter(u8::is_ascii_uppercase).count() % alignment != 0 {
            text.push('Z');
        }

        let chunks = ChunkManager::new(workers).chunk_text(&text, alignment).unwrap();
        prop_assert!(chunks.len() <= workers);
        if text.len() < workers {
            prop_assert!(chunks.len() <= 1);
        }

        let rejoined: String = chunks.iter().map(|c| c.text.as_str()).collect();
        prop_assert_eq!(&rejoined, &text);

        let mut expected_start = 0;
        for (i, chunk) in chunks.iter().enumerate() {
            prop_assert_eq!(chunk.index, i);
            prop_assert_eq!(chunk.start, expected_start);
            let letters = text[..chunk.start].bytes().filter(u8::is_ascii_uppercase).count();
            prop_assert_eq!(chunk.phase, letters);
            prop_assert_eq!(chunk.phase % alignment, 0);
            expected_start += chunk.len;
        }
    }
}
