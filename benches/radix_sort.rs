use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use rand::prelude::*;

use rdxsort_core::alloc::DefaultAllocator;
use rdxsort_core::api::sort;
use rdxsort_core::direction::Direction;
use rdxsort_core::mode::{FloatMode, Signed, Unsigned};

fn random_u32(n: usize, seed: u64) -> Vec<u32> {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..n).map(|_| rng.random()).collect()
}

fn random_i32(n: usize, seed: u64) -> Vec<i32> {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..n).map(|_| rng.random()).collect()
}

fn random_f64(n: usize, seed: u64) -> Vec<f64> {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..n).map(|_| rng.random_range(-1e6..1e6)).collect()
}

fn bench_unsigned(c: &mut Criterion) {
    let mut group = c.benchmark_group("sort_u32_unsigned");
    for n in [1_000usize, 100_000, 1_000_000] {
        let data = random_u32(n, 0xC0FFEE);
        group.bench_with_input(BenchmarkId::from_parameter(n), &data, |b, data| {
            b.iter(|| {
                let mut scratch = data.clone();
                sort::<u32, Unsigned>(black_box(&mut scratch), Direction::ASCENDING, &DefaultAllocator).unwrap();
            });
        });
    }
    group.finish();
}

fn bench_signed(c: &mut Criterion) {
    let mut group = c.benchmark_group("sort_i32_signed");
    for n in [1_000usize, 100_000, 1_000_000] {
        let data = random_i32(n, 0xBEEF);
        group.bench_with_input(BenchmarkId::from_parameter(n), &data, |b, data| {
            b.iter(|| {
                let mut scratch = data.clone();
                sort::<i32, Signed>(black_box(&mut scratch), Direction::ASCENDING, &DefaultAllocator).unwrap();
            });
        });
    }
    group.finish();
}

fn bench_float(c: &mut Criterion) {
    let mut group = c.benchmark_group("sort_f64_float");
    for n in [1_000usize, 100_000, 1_000_000] {
        let data = random_f64(n, 0xFEED);
        group.bench_with_input(BenchmarkId::from_parameter(n), &data, |b, data| {
            b.iter(|| {
                let mut scratch = data.clone();
                sort::<f64, FloatMode>(black_box(&mut scratch), Direction::ASCENDING, &DefaultAllocator).unwrap();
            });
        });
    }
    group.finish();
}

criterion_group!(benches, bench_unsigned, bench_signed, bench_float);
criterion_main!(benches);
