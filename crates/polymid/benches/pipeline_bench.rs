//! Criterion benches for the full per-polygon pipeline and batch runs.
//!
//! - `process`: ribbons and elongated radial blobs, default config.
//! - `batch`: 32 ribbons on 1 vs. all workers.

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use polymid::api::{
    draw_polygon_radial, draw_ribbon, run_batch, Feature, MedialCfg, Pipeline, PolyReplay,
    RadialCfg, RibbonCfg,
};

fn bench_process(c: &mut Criterion) {
    let mut group = c.benchmark_group("process");
    let Ok(pipeline) = Pipeline::new(MedialCfg::default()) else {
        return;
    };
    let ribbon = draw_ribbon(RibbonCfg::default(), PolyReplay { seed: 1, index: 0 });
    let blob = draw_polygon_radial(RadialCfg::default(), PolyReplay { seed: 1, index: 0 });
    group.bench_function(BenchmarkId::new("ribbon", 40), |b| {
        b.iter(|| pipeline.process(&ribbon))
    });
    group.bench_function(BenchmarkId::new("radial", 24), |b| {
        b.iter(|| pipeline.process(&blob))
    });
    group.finish();
}

fn bench_batch(c: &mut Criterion) {
    let mut group = c.benchmark_group("batch");
    group.sample_size(10);
    let features: Vec<Feature<u64>> = (0..32u64)
        .map(|index| Feature {
            polygon: draw_ribbon(RibbonCfg::default(), PolyReplay { seed: 2, index }),
            properties: index,
        })
        .collect();
    let all = MedialCfg::default().workers;
    for workers in [1usize, all] {
        let Ok(pipeline) = Pipeline::new(MedialCfg {
            workers,
            ..MedialCfg::default()
        }) else {
            continue;
        };
        group.bench_with_input(BenchmarkId::new("ribbons32", workers), &workers, |b, _| {
            b.iter(|| run_batch(&pipeline, features.clone()))
        });
    }
    group.finish();
}

criterion_group!(benches, bench_process, bench_batch);
criterion_main!(benches);
