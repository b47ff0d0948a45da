//! Benchmarks for skeleton construction and confusable distance.
//!
//! Scenarios:
//! - String length variations (short, medium, long)
//! - Similarity patterns (identical, confusable, different)
//! - Character sets (ASCII, mixed-script)

use confusable_distance::distance::standard_distance;
use confusable_distance::prelude::*;
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};

fn generate_test_pairs() -> Vec<(&'static str, &'static str, &'static str)> {
    vec![
        // (name, source, target)
        ("empty", "", ""),
        ("short_confusable", "HELLO", "HELL0"),
        ("short_1edit", "admin", "adm1n"),
        ("short_different", "hello", "world"),
        ("medium_homoglyph", "github.com/rust-lang", "g\u{0456}thub.c\u{043E}m/rust-lang"),
        ("medium_prefix", "commonprefix_abc", "commonprefix_xyz"),
        (
            "long_similar",
            "The quick brown fox jumps over the lazy dog",
            "The qu1ck br0wn fox jumped 0ver the lazy d0g",
        ),
        (
            "long_different",
            "Pack my box with five dozen liquor jugs",
            "How vexingly quick daft zebras jump",
        ),
        ("math_alphanumeric", "PAYPAL", "𝐏𝐀𝐘𝐏𝐀𝐋"),
    ]
}

fn bench_confusable_distance(c: &mut Criterion) {
    let mut group = c.benchmark_group("confusable_distance");
    let engine = ConfusableDistance::new();

    for (name, a, b) in generate_test_pairs() {
        group.bench_with_input(BenchmarkId::new("engine", name), &(a, b), |bench, (a, b)| {
            bench.iter(|| engine.distance(black_box(a), black_box(b)))
        });
        group.bench_with_input(BenchmarkId::new("plain", name), &(a, b), |bench, (a, b)| {
            bench.iter(|| standard_distance(black_box(a), black_box(b)))
        });
    }

    group.finish();
}

fn bench_skeleton(c: &mut Criterion) {
    let mut group = c.benchmark_group("skeleton");

    for len in [8usize, 64, 512, 4096] {
        let ascii: String = "adm1n-HELL0|".chars().cycle().take(len).collect();
        let mixed: String = "p\u{0430}yp\u{0430}l-𝟎".chars().cycle().take(len).collect();

        group.throughput(Throughput::Elements(len as u64));
        group.bench_with_input(BenchmarkId::new("ascii", len), &ascii, |bench, s| {
            bench.iter(|| Skeleton::new(black_box(s)))
        });
        group.bench_with_input(BenchmarkId::new("mixed_script", len), &mixed, |bench, s| {
            bench.iter(|| Skeleton::new(black_box(s)))
        });
    }

    group.finish();
}

fn bench_scaling(c: &mut Criterion) {
    let mut group = c.benchmark_group("distance_scaling");
    let engine = ConfusableDistance::new();

    for len in [16usize, 128, 1024] {
        let a: String = "abcdefgh".chars().cycle().take(len).collect();
        let b: String = "hgfedcba".chars().cycle().take(len).collect();

        group.throughput(Throughput::Elements((len * len) as u64));
        group.bench_with_input(BenchmarkId::from_parameter(len), &(a, b), |bench, (a, b)| {
            bench.iter(|| engine.distance(black_box(a), black_box(b)))
        });
    }

    group.finish();
}

criterion_group!(benches, bench_confusable_distance, bench_skeleton, bench_scaling);
criterion_main!(benches);
