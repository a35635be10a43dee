//! Benchmarks for Cargo requirement parsing.
//!
//! Performance targets:
//! - Single requirement: < 5μs
//! - Conjunction of three terms: < 15μs

use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use semrange_cargo::parse_requirement;
use std::hint::black_box;

fn bench_requirement_parsing(c: &mut Criterion) {
    let mut group = c.benchmark_group("cargo_requirement");

    for input in ["1.0", "^0.2.3", "~1.2.3", "1.2.*", ">=1.2, <1.5, >1.3"] {
        group.bench_with_input(BenchmarkId::from_parameter(input), input, |b, text| {
            b.iter(|| parse_requirement(black_box(text)))
        });
    }

    group.finish();
}

criterion_group!(benches, bench_requirement_parsing);
criterion_main!(benches);
