// ============================================================================
// Decimal Arithmetic Benchmarks
// ============================================================================
//
// Benchmark Categories:
// 1. Text Boundary - Parsing and formatting
// 2. Arithmetic - Aligned addition and schoolbook multiplication
// 3. Series - Long-division reciprocal and Euler's constant
// ============================================================================

use bcd_decimal::prelude::*;
use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use std::hint::black_box;

// ============================================================================
// Text Boundary Benchmarks
// ============================================================================

fn benchmark_parse_format(c: &mut Criterion) {
    let mut group = c.benchmark_group("text");

    for text in ["42", "-1234567890.0987654321", "0.000000000000000000000000000001"] {
        group.bench_with_input(BenchmarkId::new("parse", text.len()), text, |b, text| {
            b.iter(|| black_box(text.parse::<Bcd>().unwrap()));
        });

        let value: Bcd = text.parse().unwrap();
        group.bench_with_input(BenchmarkId::new("format", text.len()), &value, |b, value| {
            b.iter(|| black_box(value.to_string()));
        });
    }

    group.finish();
}

// ============================================================================
// Arithmetic Benchmarks
// ============================================================================

fn benchmark_arithmetic(c: &mut Criterion) {
    let mut group = c.benchmark_group("arithmetic");

    // Operands with growing fractional parts
    for fraction_len in [4usize, 32, 128] {
        let fraction: String = "142857".chars().cycle().take(fraction_len).collect();
        let a: Bcd = format!("1234567.{}", fraction).parse().unwrap();
        let b: Bcd = format!("-98.{}", fraction).parse().unwrap();

        group.bench_with_input(
            BenchmarkId::new("add", fraction_len),
            &(&a, &b),
            |bench, (a, b)| {
                bench.iter(|| black_box(*a + *b));
            },
        );

        group.bench_with_input(
            BenchmarkId::new("mul", fraction_len),
            &(&a, &b),
            |bench, (a, b)| {
                bench.iter(|| black_box(*a * *b));
            },
        );

        group.bench_with_input(
            BenchmarkId::new("cmp", fraction_len),
            &(&a, &b),
            |bench, (a, b)| {
                bench.iter(|| black_box(a.cmp(b)));
            },
        );
    }

    group.finish();
}

// ============================================================================
// Series Benchmarks
// ============================================================================

fn benchmark_reciprocal(c: &mut Criterion) {
    let mut group = c.benchmark_group("reciprocal");

    for precision in [10usize, 50, 200] {
        group.bench_with_input(
            BenchmarkId::new("1/7", precision),
            &precision,
            |b, &precision| {
                b.iter(|| black_box(reciprocal(7, precision).unwrap()));
            },
        );
    }

    group.finish();
}

fn benchmark_compute_e(c: &mut Criterion) {
    let mut group = c.benchmark_group("compute_e");
    group.sample_size(20);

    for precision in [5usize, 20, 50] {
        group.bench_with_input(
            BenchmarkId::from_parameter(precision),
            &precision,
            |b, &precision| {
                b.iter(|| black_box(compute_e(precision).unwrap()));
            },
        );
    }

    group.finish();
}

criterion_group!(
    benches,
    benchmark_parse_format,
    benchmark_arithmetic,
    benchmark_reciprocal,
    benchmark_compute_e,
);
criterion_main!(benches);
