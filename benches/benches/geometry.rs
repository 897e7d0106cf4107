// Copyright 2025 the Tessera Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Benchmarks for `tessera_geom` geometry-level transforms.

use criterion::{BatchSize, BenchmarkId, Criterion, black_box, criterion_group, criterion_main};
use kurbo::Point;
use tessera_geom::{FlatGeometry, GeometryLayout, SimpleGeometry};

fn bench_scale_geometry(c: &mut Criterion) {
    let mut group = c.benchmark_group("geom/scale");

    // Default origin pays for an extent pass before the transform.
    for tuples in [256_usize, 4_096, 65_536] {
        let coords: Vec<f64> = (0..tuples * 3).map(|i| (i % 251) as f64).collect();
        let geom = FlatGeometry::new(GeometryLayout::Xyz, coords).unwrap();

        group.bench_with_input(BenchmarkId::new("extent_origin", tuples), &geom, |b, geom| {
            b.iter_batched(
                || geom.clone(),
                |mut g| {
                    g.scale(2.0, 0.5, None).unwrap();
                    black_box(g);
                },
                BatchSize::LargeInput,
            );
        });

        group.bench_with_input(
            BenchmarkId::new("explicit_origin", tuples),
            &geom,
            |b, geom| {
                b.iter_batched(
                    || geom.clone(),
                    |mut g| {
                        g.scale(2.0, 0.5, Some(Point::ZERO)).unwrap();
                        black_box(g);
                    },
                    BatchSize::LargeInput,
                );
            },
        );
    }

    group.finish();
}

criterion_group!(benches, bench_scale_geometry);
criterion_main!(benches);
