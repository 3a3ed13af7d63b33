//! Performance benchmarks for the value codecs.
//!
//! These benchmarks measure:
//! - Phone number canonicalization from E.164 and national input
//! - Display rendering, which re-parses the stored number
//! - Quoted scalar and timestamp decoding
//! - Price formatting

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use twilio_values::decode::{decode_null_time, decode_unsigned};
use twilio_values::{format_price, PhoneNumber};

/// Benchmark canonicalization for the input shapes the API and users send.
fn bench_phone_canonicalize(c: &mut Criterion) {
    let mut group = c.benchmark_group("phone_canonicalize");

    for raw in ["+14105554092", "(410) 555-4092", "+44 20 7946 0958"] {
        group.bench_with_input(BenchmarkId::from_parameter(raw), raw, |b, raw| {
            b.iter(|| PhoneNumber::new(black_box(raw)))
        });
    }

    group.finish();
}

/// Benchmark the display renderings.
fn bench_phone_render(c: &mut Criterion) {
    let phone = PhoneNumber::new("+14105554092").unwrap();

    c.bench_function("phone_friendly", |b| b.iter(|| black_box(&phone).friendly()));
    c.bench_function("phone_local", |b| b.iter(|| black_box(&phone).local()));
}

/// Benchmark the string-encoded scalar decoders.
fn bench_scalar_decode(c: &mut Criterion) {
    c.bench_function("decode_unsigned", |b| {
        b.iter(|| decode_unsigned(black_box("\"12\"")))
    });

    c.bench_function("decode_null_time", |b| {
        b.iter(|| decode_null_time(black_box(Some("\"Mon, 2 Jan 2006 15:04:05 -0700\""))))
    });
}

/// Benchmark price formatting with and without trailing zeros.
fn bench_format_price(c: &mut Criterion) {
    let mut group = c.benchmark_group("format_price");

    for amount in ["-0.00750", "12", "-100.000000"] {
        group.bench_with_input(BenchmarkId::from_parameter(amount), amount, |b, amount| {
            b.iter(|| format_price(black_box("usd"), black_box(amount)))
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_phone_canonicalize,
    bench_phone_render,
    bench_scalar_decode,
    bench_format_price
);
criterion_main!(benches);
