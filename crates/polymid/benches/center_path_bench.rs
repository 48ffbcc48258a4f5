//! Criterion benches for skeleton construction and center-path extraction.
//! Sizes: boundary samples in {150, 300, 600, 1200} on a fixed ribbon.
//! Results live under `target/criterion`.

use criterion::{criterion_group, criterion_main, BatchSize, BenchmarkId, Criterion};
use polymid::api::{
    draw_ribbon, extract_center_path, PolyReplay, RibbonCfg, SkeletonProvider, VoronoiSkeleton,
};

fn bench_center_path(c: &mut Criterion) {
    let mut group = c.benchmark_group("center_path");
    let poly = draw_ribbon(RibbonCfg::default(), PolyReplay { seed: 7, index: 0 }).oriented();
    for &samples in &[150usize, 300, 600, 1200] {
        let provider = VoronoiSkeleton { samples };
        group.bench_with_input(BenchmarkId::new("voronoi_skeleton", samples), &samples, |b, _| {
            b.iter(|| provider.skeleton(&poly))
        });

        let Ok(graph) = provider.skeleton(&poly) else {
            continue;
        };
        group.bench_with_input(BenchmarkId::new("extract", samples), &samples, |b, _| {
            b.iter_batched(
                || graph.clone(),
                |g| extract_center_path(&g),
                BatchSize::SmallInput,
            )
        });
    }
    group.finish();
}

criterion_group!(benches, bench_center_path);
criterion_main!(benches);
