//! Benchmarks for bulk conversion.
//!
//! Run with: cargo bench -p frankenterm-charset

use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use frankenterm_charset::{
    Charset, ConvertOptions, Iso8859Part, decode, encode, utf8_to_utf16, utf16_to_utf8,
};
use std::hint::black_box;

// =============================================================================
// Test Data
// =============================================================================

fn text(sample: &str, len: usize) -> String {
    sample.chars().cycle().take(len).collect()
}

fn ascii_text(len: usize) -> String {
    text("The quick brown fox jumps over the lazy dog. ", len)
}

fn japanese_text(len: usize) -> String {
    text("\u{65E5}\u{672C}\u{8A9E}\u{306E}\u{30C6}\u{30AD}\u{30B9}\u{30C8}\u{FF76}\u{FF85} ", len)
}

fn latin2_text(len: usize) -> String {
    text("Za\u{17C}\u{F3}\u{142}\u{107} g\u{119}\u{15B}l\u{105} ja\u{17A}\u{144}. ", len)
}

// =============================================================================
// Benchmarks
// =============================================================================

fn bench_decode(c: &mut Criterion) {
    let mut group = c.benchmark_group("convert/decode");
    let latin2 = Charset::Iso8859(Iso8859Part::new(2).unwrap_or(Iso8859Part::LATIN_1));

    for (name, charset, sample) in [
        ("utf8_ascii", Charset::Utf8, ascii_text(1000)),
        ("utf8_japanese", Charset::Utf8, japanese_text(1000)),
        ("cp932_japanese", Charset::Cp932, japanese_text(1000)),
        ("iso8859_2", latin2, latin2_text(1000)),
    ] {
        let bytes = encode(charset, &sample, &ConvertOptions::STRICT).unwrap_or_default();
        group.throughput(Throughput::Bytes(bytes.len() as u64));
        group.bench_with_input(BenchmarkId::from_parameter(name), &bytes, |b, bytes| {
            b.iter(|| decode(charset, black_box(bytes), &ConvertOptions::STRICT))
        });
    }

    group.finish();
}

fn bench_encode(c: &mut Criterion) {
    let mut group = c.benchmark_group("convert/encode");
    let latin2 = Charset::Iso8859(Iso8859Part::new(2).unwrap_or(Iso8859Part::LATIN_1));

    for (name, charset, sample) in [
        ("cp932_japanese", Charset::Cp932, japanese_text(1000)),
        ("iso8859_2", latin2, latin2_text(1000)),
        ("iso8859_2_lossy", latin2, japanese_text(1000)),
    ] {
        group.throughput(Throughput::Elements(1000));
        group.bench_with_input(BenchmarkId::from_parameter(name), &sample, |b, sample| {
            b.iter(|| encode(charset, black_box(sample), &ConvertOptions::LENIENT))
        });
    }

    group.finish();
}

fn bench_utf16(c: &mut Criterion) {
    let sample = japanese_text(1000);
    let units: Vec<u16> = sample.encode_utf16().collect();
    c.bench_function("convert/utf8_to_utf16", |b| {
        b.iter(|| utf8_to_utf16(black_box(sample.as_bytes()), &ConvertOptions::STRICT))
    });
    c.bench_function("convert/utf16_to_utf8", |b| {
        b.iter(|| utf16_to_utf8(black_box(&units), &ConvertOptions::STRICT))
    });
}

criterion_group!(benches, bench_decode, bench_encode, bench_utf16);
criterion_main!(benches);
