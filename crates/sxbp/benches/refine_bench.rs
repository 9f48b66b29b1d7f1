//! Criterion benchmarks for the refinement engine.
//! Focus sizes: input byte counts in {0, 1, 4, 8}.

use criterion::{criterion_group, criterion_main, BatchSize, BenchmarkId, Criterion};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use sxbp::{begin_figure, refine_with_defaults};

fn random_bytes(n: usize, seed: u64) -> Vec<u8> {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..n).map(|_| rng.gen::<u8>()).collect()
}

fn bench_refine(c: &mut Criterion) {
    let mut group = c.benchmark_group("refine");
    for &n in &[0usize, 1, 4, 8] {
        group.bench_with_input(BenchmarkId::new("shrink_from_end", n), &n, |b, &n| {
            b.iter_batched(
                || begin_figure(&random_bytes(n, 37)).unwrap(),
                |mut figure| {
                    refine_with_defaults(&mut figure).unwrap();
                },
                BatchSize::SmallInput,
            );
        });
    }
    group.finish();
}

criterion_group!(benches, bench_refine);
criterion_main!(benches);
