// Copyright 2025 the Tessera Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Benchmarks for the `tessera_flat` buffer transforms.

use criterion::{
    BatchSize, BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main,
};
use kurbo::{Point, Vec2};
use tessera_flat::{
    FlatRange, ScaleParams, extent, scale, scale_in_place, scale_into, translate_slice_in_place,
};

fn coords(tuples: usize, stride: usize) -> Vec<f64> {
    (0..tuples * stride).map(|i| (i % 997) as f64 * 0.5).collect()
}

fn bench_scale_destinations(c: &mut Criterion) {
    let mut group = c.benchmark_group("flat/scale");
    let params = ScaleParams::new(1.5, 0.75).about(Point::new(10.0, -4.0));

    // Fresh allocation vs. reusing a destination vs. writing back into the source.
    for tuples in [64_usize, 1_024, 16_384] {
        for stride in [2_usize, 4] {
            let src = coords(tuples, stride);
            let range = FlatRange::full(src.len(), stride).unwrap();
            let id = format!("{tuples}x{stride}");
            group.throughput(Throughput::Elements(tuples as u64));

            group.bench_with_input(BenchmarkId::new("fresh", &id), &src, |b, src| {
                b.iter(|| black_box(scale(src, range, params).unwrap()));
            });

            group.bench_with_input(BenchmarkId::new("into", &id), &src, |b, src| {
                let mut dest = Vec::with_capacity(src.len());
                b.iter(|| {
                    scale_into(src, range, params, &mut dest).unwrap();
                    black_box(&dest);
                });
            });

            group.bench_with_input(BenchmarkId::new("in_place", &id), &src, |b, src| {
                b.iter_batched(
                    || src.clone(),
                    |mut buf| {
                        scale_in_place(&mut buf, range, params).unwrap();
                        black_box(buf);
                    },
                    BatchSize::LargeInput,
                );
            });
        }
    }

    group.finish();
}

fn bench_in_place_compaction(c: &mut Criterion) {
    let mut group = c.benchmark_group("flat/scale_in_place_offset");
    let params = ScaleParams::uniform(2.0);

    for tuples in [1_024_usize, 16_384] {
        let src = coords(tuples, 3);
        let range = FlatRange::new(3 * (tuples / 2), src.len(), 3).unwrap();
        group.throughput(Throughput::Elements((tuples / 2) as u64));
        group.bench_with_input(BenchmarkId::from_parameter(tuples), &src, |b, src| {
            b.iter_batched(
                || src.clone(),
                |mut buf| {
                    scale_in_place(&mut buf, range, params).unwrap();
                    black_box(buf);
                },
                BatchSize::LargeInput,
            );
        });
    }

    group.finish();
}

fn bench_translate_and_extent(c: &mut Criterion) {
    let mut group = c.benchmark_group("flat/misc");
    let src = coords(16_384, 2);
    let range = FlatRange::full(src.len(), 2).unwrap();
    group.throughput(Throughput::Elements(16_384));

    group.bench_function("translate_slice_in_place", |b| {
        let mut buf = src.clone();
        b.iter(|| {
            translate_slice_in_place(&mut buf, 2, Vec2::new(0.25, -0.25)).unwrap();
            black_box(&buf);
        });
    });

    group.bench_function("extent", |b| {
        b.iter(|| black_box(extent(&src, range).unwrap()));
    });

    group.finish();
}

criterion_group!(
    benches,
    bench_scale_destinations,
    bench_in_place_compaction,
    bench_translate_and_extent
);
criterion_main!(benches);
