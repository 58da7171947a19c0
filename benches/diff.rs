use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use zhang_shasha::{diff, UnitCost};

/// A complete `r`-ary tree over the vertices `0..n`, rooted at `0`.
fn tree(n: usize, r: usize) -> Vec<Vec<usize>> {
    (0..n)
        .map(|v| (v * r + 1..(v * r + r + 1).min(n)).collect())
        .collect()
}

/// A tree over the vertices `0..n` where every vertex has a single child.
fn chain(n: usize) -> Vec<Vec<usize>> {
    (0..n).map(|v| (v + 1..(v + 2).min(n)).collect()).collect()
}

fn bench(c: &mut Criterion) {
    let mut group = c.benchmark_group("n-tree diff");
    for r in [2, 4, 8, 16] {
        group.bench_with_input(BenchmarkId::from_parameter(r), &tree(100, r), |b, t| {
            b.iter(|| diff(t, &0, t, &0, UnitCost))
        });
    }
    group.finish();

    let mut group = c.benchmark_group("chain diff");
    for n in [25, 50, 100] {
        group.bench_with_input(BenchmarkId::from_parameter(n), &chain(n), |b, t| {
            b.iter(|| diff(t, &0, t, &0, UnitCost))
        });
    }
    group.finish();
}

criterion_group!(benches, bench);
criterion_main!(benches);
