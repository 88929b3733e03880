// ============================================================================
// Numeral Encoder Benchmarks
// ============================================================================
//
// Benchmark Categories:
// 1. Encode - Greedy additive encoding across magnitudes
// 2. Tally - Run-length decomposition of the same inputs
// 3. Decode - Additive decoding of pre-encoded numerals
// ============================================================================

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use roman_numeral::prelude::*;
use std::hint::black_box;

const INPUTS: [i64; 4] = [8, 2019, 3999, 12019];

fn benchmark_encode(c: &mut Criterion) {
    let mut group = c.benchmark_group("encode");

    for n in INPUTS.iter() {
        group.bench_with_input(BenchmarkId::new("greedy", n), n, |b, &n| {
            b.iter(|| black_box(encode(black_box(n))))
        });
    }

    // Output length grows linearly past 1000
    group.bench_function("large_100000", |b| {
        b.iter(|| black_box(encode(black_box(100_000))))
    });

    group.finish();
}

fn benchmark_tally(c: &mut Criterion) {
    let mut group = c.benchmark_group("tally");

    for n in INPUTS.iter() {
        group.bench_with_input(BenchmarkId::new("runs", n), n, |b, &n| {
            b.iter(|| black_box(tally(black_box(n))))
        });
    }

    group.finish();
}

fn benchmark_decode(c: &mut Criterion) {
    let mut group = c.benchmark_group("decode");

    for n in INPUTS.iter() {
        let numeral = encode(*n);
        group.bench_with_input(BenchmarkId::new("additive", n), &numeral, |b, numeral| {
            b.iter(|| black_box(decode(black_box(numeral))))
        });
    }

    group.finish();
}

criterion_group!(benches, benchmark_encode, benchmark_tally, benchmark_decode);
criterion_main!(benches);
