//! Criterion benchmarks for u-localsearch.
//!
//! Minimizes the sphere function at several dimensions to compare the
//! per-run cost of the three searches under the same budget.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use u_localsearch::{sphere, Algorithm, Bounds};

fn bench_sphere(c: &mut Criterion) {
    let mut group = c.benchmark_group("sphere");
    group.sample_size(20);

    for &dim in &[2usize, 10, 50] {
        let bounds = Bounds::uniform(dim, -5.0, 5.0).expect("valid bounds");
        for algorithm in Algorithm::all() {
            let algorithm = algorithm.with_seed(42);
            group.bench_with_input(
                BenchmarkId::new(algorithm.name(), dim),
                &(algorithm.clone(), bounds.clone()),
                |b, (a, bounds)| {
                    b.iter(|| {
                        let result = a.run(&sphere, black_box(bounds));
                        black_box(result)
                    })
                },
            );
        }
    }
    group.finish();
}

fn bench_seed_sweep(c: &mut Criterion) {
    let mut group = c.benchmark_group("seed_sweep");
    group.sample_size(10);

    let bounds = Bounds::uniform(10, -5.0, 5.0).expect("valid bounds");
    let seeds: Vec<u64> = (0..32).collect();
    for algorithm in Algorithm::all() {
        group.bench_function(algorithm.name(), |b| {
            b.iter(|| {
                let results = algorithm.run_seeds(&sphere, black_box(&bounds), &seeds);
                black_box(results)
            })
        });
    }
    group.finish();
}

criterion_group!(benches, bench_sphere, bench_seed_sweep);
criterion_main!(benches);
