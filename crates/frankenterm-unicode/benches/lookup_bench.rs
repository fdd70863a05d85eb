//! Benchmarks for code point classification.
//!
//! Run with: cargo bench -p frankenterm-unicode

use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use frankenterm_unicode::{WidthPolicy, cell_width, combining_class, compose, width_class};
use std::hint::black_box;

// =============================================================================
// Test Data
// =============================================================================

fn ascii_text(len: usize) -> Vec<u32> {
    "The quick brown fox jumps over the lazy dog. "
        .chars()
        .cycle()
        .take(len)
        .map(u32::from)
        .collect()
}

fn cjk_text(len: usize) -> Vec<u32> {
    "\u{4E2D}\u{6587}\u{6D4B}\u{8BD5}\u{3042}\u{30A2}"
        .chars()
        .cycle()
        .take(len)
        .map(u32::from)
        .collect()
}

fn combining_text(len: usize) -> Vec<u32> {
    "e\u{0301}a\u{0300}o\u{0302}\u{0915}\u{094D}\u{1F44B}\u{1F3FD}"
        .chars()
        .cycle()
        .take(len)
        .map(u32::from)
        .collect()
}

// =============================================================================
// Benchmarks
// =============================================================================

fn bench_width_class(c: &mut Criterion) {
    let mut group = c.benchmark_group("classify/width_class");

    for (name, text) in [
        ("ascii", ascii_text(1000)),
        ("cjk", cjk_text(1000)),
        ("combining", combining_text(1000)),
    ] {
        group.throughput(Throughput::Elements(text.len() as u64));
        group.bench_with_input(BenchmarkId::from_parameter(name), &text, |b, text| {
            b.iter(|| {
                text.iter()
                    .map(|&cp| width_class(black_box(cp)) as u8 as usize)
                    .sum::<usize>()
            })
        });
    }

    group.finish();
}

fn bench_cell_width(c: &mut Criterion) {
    let mut group = c.benchmark_group("classify/cell_width");
    let policy = WidthPolicy::CJK;

    for (name, text) in [("ascii", ascii_text(1000)), ("cjk", cjk_text(1000))] {
        group.throughput(Throughput::Elements(text.len() as u64));
        group.bench_with_input(BenchmarkId::from_parameter(name), &text, |b, text| {
            b.iter(|| {
                text.iter()
                    .map(|&cp| cell_width(black_box(cp), &policy))
                    .sum::<usize>()
            })
        });
    }

    group.finish();
}

fn bench_combining_and_compose(c: &mut Criterion) {
    let text = combining_text(1000);
    c.bench_function("classify/combining_class", |b| {
        b.iter(|| {
            text.iter()
                .filter(|&&cp| combining_class(black_box(cp)).is_combining())
                .count()
        })
    });
    c.bench_function("compose/kana_pairs", |b| {
        b.iter(|| {
            (0x3041u16..0x3097)
                .filter_map(|base| compose(black_box(base), 0x3099))
                .count()
        })
    });
}

criterion_group!(
    benches,
    bench_width_class,
    bench_cell_width,
    bench_combining_and_compose
);
criterion_main!(benches);
