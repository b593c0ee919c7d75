//! Benchmarks for root finding, companion construction and singularity checks.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use frobenius_core::prelude::*;
use rand::prelude::*;

fn random_coefficients(len: usize, rng: &mut StdRng) -> Vec<f64> {
    let mut coef: Vec<f64> = (0..len).map(|_| rng.gen_range(-10.0..10.0)).collect();
    if let Some(last) = coef.last_mut() {
        *last = 1.0;
    }
    coef
}

fn bench_find_roots(c: &mut Criterion) {
    let mut group = c.benchmark_group("find_roots");
    let mut rng = StdRng::seed_from_u64(42);

    for degree in [4, 16, 64] {
        let coef = random_coefficients(degree + 1, &mut rng);
        group.bench_with_input(BenchmarkId::from_parameter(degree), &coef, |b, coef| {
            let mut noise_rng = StdRng::seed_from_u64(7);
            b.iter(|| find_roots_with_rng(black_box(coef), &mut noise_rng))
        });
    }

    group.finish();
}

fn bench_build_companion(c: &mut Criterion) {
    let mut group = c.benchmark_group("build_companion");
    let mut rng = StdRng::seed_from_u64(42);

    for degree in [4, 64, 256] {
        let coef = random_coefficients(degree + 1, &mut rng);
        group.bench_with_input(BenchmarkId::from_parameter(degree), &coef, |b, coef| {
            b.iter(|| build_companion(black_box(coef)))
        });
    }

    group.finish();
}

fn bench_is_nonsingular(c: &mut Criterion) {
    let mut group = c.benchmark_group("is_nonsingular");
    let mut rng = StdRng::seed_from_u64(42);

    for size in [4, 32, 128] {
        let matrix = DMatrix::<f64>::from_fn(size, size, |_, _| rng.gen_range(-1.0..1.0));
        group.bench_with_input(BenchmarkId::from_parameter(size), &matrix, |b, matrix| {
            b.iter(|| is_nonsingular(black_box(matrix)))
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_find_roots,
    bench_build_companion,
    bench_is_nonsingular
);
criterion_main!(benches);
