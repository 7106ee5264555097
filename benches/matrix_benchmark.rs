use cauchy_erasure::{
    compute_parity_matrix, invert_stepwise, BigRational, Field256Element, Field257Element, Matrix,
};
use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use std::hint::black_box;

fn bench_inverse_gf256(c: &mut Criterion) {
    let mut group = c.benchmark_group("inverse_gf256");

    // Square Cauchy matrices are always invertible
    for size in [4usize, 16, 64].iter() {
        let m = compute_parity_matrix::<Field256Element>(*size, *size).unwrap();

        group.bench_with_input(BenchmarkId::new("gauss_jordan", size), &m, |b, m| {
            b.iter(|| black_box(m.inverse().unwrap()));
        });
        group.bench_with_input(BenchmarkId::new("stepwise", size), &m, |b, m| {
            b.iter(|| black_box(invert_stepwise(m).unwrap()));
        });
    }

    group.finish();
}

fn bench_inverse_other_fields(c: &mut Criterion) {
    let mut group = c.benchmark_group("inverse_other_fields");

    let gf257 = compute_parity_matrix::<Field257Element>(16, 16).unwrap();
    group.bench_function("gf257_16x16", |b| {
        b.iter(|| black_box(gf257.inverse().unwrap()));
    });

    let rational = compute_parity_matrix::<BigRational>(8, 8).unwrap();
    group.bench_function("rational_8x8", |b| {
        b.iter(|| black_box(rational.inverse().unwrap()));
    });

    group.finish();
}

fn bench_times(c: &mut Criterion) {
    let a = Matrix::from_fn(64, 64, |i, j| Field256Element::from((i * 7 + j) as u8)).unwrap();
    c.bench_function("times_gf256_64x64", |b| {
        b.iter(|| black_box(a.times(black_box(&a)).unwrap()));
    });
}

criterion_group!(
    benches,
    bench_inverse_gf256,
    bench_inverse_other_fields,
    bench_times
);
criterion_main!(benches);
