use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use pairwise_bpe::Tokenizer;

/// Generate repetitive text data
fn generate_repetitive_text(size: usize) -> String {
    let pattern = "the quick brown fox jumps over the lazy dog ";
    pattern.repeat(size / pattern.len())
}

/// Generate low-repetition data (simulating base64)
fn generate_low_repetition(size: usize) -> String {
    let chars: Vec<char> = "ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789+/"
        .chars()
        .collect();
    let mut seed = 12345u64;

    (0..size)
        .map(|_| {
            // Simple LCG random
            seed = seed.wrapping_mul(1103515245).wrapping_add(12345);
            chars[(seed % chars.len() as u64) as usize]
        })
        .collect()
}

fn trained(text: &str, merges: usize) -> Tokenizer {
    let mut tokenizer = Tokenizer::new(256, merges).unwrap();
    tokenizer.train(text).unwrap();
    tokenizer
}

fn bench_training(c: &mut Criterion) {
    let sizes = [1_000, 10_000];
    let mut group = c.benchmark_group("training");

    for size in sizes.iter() {
        let repetitive = generate_repetitive_text(*size);
        let random = generate_low_repetition(*size);

        group.bench_with_input(BenchmarkId::new("repetitive", size), &repetitive, |b, data| {
            b.iter(|| black_box(trained(black_box(data), 50)));
        });

        group.bench_with_input(BenchmarkId::new("low_repetition", size), &random, |b, data| {
            b.iter(|| black_box(trained(black_box(data), 50)));
        });
    }

    group.finish();
}

fn bench_encode_decode(c: &mut Criterion) {
    let sizes = [1_000, 10_000, 100_000];
    let tokenizer = trained(&generate_repetitive_text(10_000), 100);
    let mut group = c.benchmark_group("encode_decode");

    for size in sizes.iter() {
        let data = generate_repetitive_text(*size);
        let encoded = tokenizer.encode(&data).unwrap();

        group.bench_with_input(BenchmarkId::new("encode", size), &data, |b, data| {
            b.iter(|| black_box(tokenizer.encode(black_box(data)).unwrap()));
        });

        group.bench_with_input(BenchmarkId::new("decode", size), &encoded, |b, encoded| {
            b.iter(|| black_box(tokenizer.decode(black_box(encoded)).unwrap()));
        });
    }

    group.finish();
}

criterion_group!(benches, bench_training, bench_encode_decode);
criterion_main!(benches);
