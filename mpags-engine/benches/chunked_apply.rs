//! Benchmarks for chunked versus sequential cipher application
//!
//! Run with: cargo bench --bench chunked_apply

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use mpags_engine::{CipherFactory, CipherMode, CipherProcessor, CipherType, EngineConfig};
use std::hint::black_box;

/// Generate sanitized text of the specified length
fn generate_text(size: usize) -> String {
    let base = "THEQUICKBROWNFOX1JUMPSOVERTHELAZYDOG2";
    let mut text = base.repeat(size / base.len() + 1);
    text.truncate(size);
    text
}

/// Compare worker counts for each cipher on a 1M character input
fn bench_worker_counts(c: &mut Criterion) {
    let text = generate_text(1_000_000);

    for (cipher_type, key) in [
        (CipherType::Caesar, "13"),
        (CipherType::Vigenere, "LEMON"),
        (CipherType::Playfair, "PLAYFAIR"),
    ] {
        let cipher = CipherFactory::create(cipher_type, key).unwrap();
        let mut group = c.benchmark_group(format!("{cipher_type}_workers"));
        group.throughput(Throughput::Bytes(text.len() as u64));

        for workers in [1, 2, 4, 8] {
            let processor = CipherProcessor::with_config(EngineConfig::parallel(workers)).unwrap();
            group.bench_with_input(BenchmarkId::new("workers", workers), &text, |b, text| {
                b.iter(|| {
                    processor
                        .process_text(black_box(text), &cipher, CipherMode::Encrypt)
                        .unwrap()
                });
            });
        }

        group.finish();
    }
}

/// Benchmark different text sizes with the default configuration
fn bench_text_sizes(c: &mut Criterion) {
    let mut group = c.benchmark_group("text_sizes");
    let cipher = CipherFactory::create(CipherType::Vigenere, "LEMON").unwrap();
    let processor = CipherProcessor::new();

    for size in [1_024, 102_400, 1_024_000] {
        let text = generate_text(size);
        group.throughput(Throughput::Bytes(size as u64));
        group.bench_with_input(BenchmarkId::new("process", size), &text, |b, text| {
            b.iter(|| {
                processor
                    .process_text(black_box(text), &cipher, CipherMode::Encrypt)
                    .unwrap()
            });
        });
    }

    group.finish();
}

criterion_group!(benches, bench_worker_counts, bench_text_sizes);
criterion_main!(benches);
