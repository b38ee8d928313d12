//! Criterion benchmarks for triangulation and concave surfaces.
//! Focus sizes: n in {4, 8, 16, 32} vertices of random star polygons.

use criterion::{criterion_group, criterion_main, BatchSize, BenchmarkId, Criterion};
use planar::prelude::*;
use rand::{rngs::StdRng, Rng, SeedableRng};

fn star(n: usize, index: u64) -> Polygon {
    let cfg = RadialCfg {
        vertex_count: VertexCount::Fixed(n),
        radial_jitter: 0.6,
        ..RadialCfg::default()
    };
    draw_polygon_radial(cfg, ReplayToken { seed: 43, index }).unwrap()
}

fn bench_surface(c: &mut Criterion) {
    let mut group = c.benchmark_group("surface");
    for &n in &[4usize, 8, 16, 32] {
        group.bench_with_input(BenchmarkId::new("triangulate", n), &n, |b, &n| {
            b.iter_batched(
                || star(n, 0),
                |poly| {
                    let _ix = poly.triangulate().unwrap();
                },
                BatchSize::SmallInput,
            )
        });

        group.bench_with_input(BenchmarkId::new("construct", n), &n, |b, &n| {
            b.iter_batched(
                || star(n, 1),
                |poly| {
                    let _s = ConcaveSurface::new(poly).unwrap();
                },
                BatchSize::SmallInput,
            )
        });

        group.bench_with_input(BenchmarkId::new("query", n), &n, |b, &n| {
            let s = ConcaveSurface::new(star(n, 2)).unwrap();
            let mut rng = StdRng::seed_from_u64(44);
            b.iter(|| {
                let (t0, t1): (f64, f64) = (rng.gen(), rng.gen());
                s.surface_point(t0, t1).unwrap()
            })
        });
    }
    group.finish();
}

criterion_group!(benches, bench_surface);
criterion_main!(benches);
