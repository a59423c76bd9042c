// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};
use hotspot_hit::{HitIndex, HitMode};
use hotspot_region::{LayoutVariant, Region, Shape};
use hotspot_view::{ImageBox, ImageTransform};
use kurbo::{Point, Size};

/// `n * n` regions on a 1000px square image, alternating rects and diamonds.
fn grid_variant(n: usize) -> LayoutVariant {
    let cell = 1000.0 / n as f64;
    let mut regions = Vec::with_capacity(n * n);
    for y in 0..n {
        for x in 0..n {
            let x0 = x as f64 * cell;
            let y0 = y as f64 * cell;
            let shape = if (x + y) % 2 == 0 {
                Shape::rect(x0, y0, x0 + cell * 0.8, y0 + cell * 0.8).unwrap()
            } else {
                let h = cell * 0.4;
                Shape::polygon([
                    (x0 + h, y0),
                    (x0 + 2.0 * h, y0 + h),
                    (x0 + h, y0 + 2.0 * h),
                    (x0, y0 + h),
                ])
                .unwrap()
            };
            let id = format!("r{x}_{y}");
            regions.push(Region::new(id.clone(), id, shape, String::new()));
        }
    }
    LayoutVariant::new("bench", 0.0, (1000.0, 1000.0), regions)
}

/// Deterministic sample points spread over the rendered image.
fn points(count: usize, extent: f64) -> Vec<Point> {
    let mut state = 0x9e37_79b9_7f4a_7c15_u64;
    let mut next = || {
        state ^= state << 13;
        state ^= state >> 7;
        state ^= state << 17;
        (state >> 11) as f64 / (1_u64 << 53) as f64
    };
    (0..count)
        .map(|_| Point::new(next() * extent, next() * extent))
        .collect()
}

fn bench_hit(c: &mut Criterion) {
    let transform = ImageTransform::new(
        Size::new(1000.0, 1000.0),
        ImageBox::new(0.0, 0.0, 600.0, 600.0),
    )
    .unwrap();
    let pts = points(1_000, 600.0);

    let mut group = c.benchmark_group("hit");
    for n in [4_usize, 16, 32] {
        let variant = grid_variant(n);
        group.bench_function(BenchmarkId::new("build", n * n), |b| {
            b.iter(|| black_box(HitIndex::build(&variant, &transform, HitMode::BoundingBox)));
        });

        group.throughput(Throughput::Elements(pts.len() as u64));
        for (name, mode) in [
            ("bounding_box", HitMode::BoundingBox),
            ("precise", HitMode::Precise),
        ] {
            let index = HitIndex::build(&variant, &transform, mode);
            group.bench_with_input(BenchmarkId::new(name, n * n), &index, |b, index| {
                b.iter(|| {
                    for &p in &pts {
                        black_box(index.resolve_screen(black_box(p)));
                    }
                });
            });
        }
    }
    group.finish();
}

criterion_group!(benches, bench_hit);
criterion_main!(benches);
