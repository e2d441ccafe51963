//! Benchmarks the dominant cost of this crate: scanning a text buffer for every occurrence of a
//! set of stored patterns.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use triedict::{symbols, Dict};

/// A handful of English words chosen to overlap and share prefixes, the case suffix links exist
/// to make cheap.
const PATTERNS: &[&str] = &[
    "he", "she", "his", "hers", "him", "her", "this", "these", "those", "the",
];

fn build_dict() -> Dict {
    let mut dict = Dict::new();
    for (index, pattern) in PATTERNS.iter().enumerate() {
        dict.assign(symbols::encode_str(pattern), index as u32).unwrap();
    }
    dict.prepare();
    dict
}

fn repeated_text(len: usize) -> Vec<u32> {
    let source = "she sells sea shells by the sea shore and his hers and these";
    symbols::encode_str(source).cycle().take(len).collect()
}

fn bench_match_text(c: &mut Criterion) {
    let dict = build_dict();
    let mut group = c.benchmark_group("match_text");

    for size in [1_000usize, 10_000, 100_000] {
        let text = repeated_text(size);
        group.bench_with_input(BenchmarkId::from_parameter(size), &text, |b, text| {
            let mut dict = dict.clone();
            b.iter(|| {
                let count = dict.match_text(black_box(text)).count();
                black_box(count)
            });
        });
    }

    group.finish();
}

fn bench_prepare(c: &mut Criterion) {
    c.bench_function("prepare_from_scratch", |b| {
        b.iter(|| {
            let mut dict = Dict::new();
            for (index, pattern) in PATTERNS.iter().enumerate() {
                dict.assign(symbols::encode_str(pattern), index as u32).unwrap();
            }
            dict.prepare();
            black_box(dict)
        });
    });
}

criterion_group!(benches, bench_match_text, bench_prepare);
criterion_main!(benches);
