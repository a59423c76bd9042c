// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{Criterion, Throughput, black_box, criterion_group, criterion_main};
use hotspot_popup::{PopupConfig, PopupPlacer};
use kurbo::{Point, Size};

fn bench_placement(c: &mut Criterion) {
    let mut group = c.benchmark_group("placement");
    for (name, viewport) in [
        ("desktop", Size::new(1280.0, 800.0)),
        ("phone", Size::new(390.0, 844.0)),
    ] {
        let placer = PopupPlacer::new(PopupConfig::default());
        // Anchors on a grid that reaches past every edge, so all fallbacks run.
        let anchors: Vec<Point> = (0..=40)
            .flat_map(|i| {
                (0..=40).map(move |j| {
                    Point::new(
                        -40.0 + f64::from(i) * (viewport.width + 80.0) / 40.0,
                        -40.0 + f64::from(j) * (viewport.height + 80.0) / 40.0,
                    )
                })
            })
            .collect();
        group.throughput(Throughput::Elements(anchors.len() as u64));
        group.bench_function(name, |b| {
            b.iter(|| {
                for &a in &anchors {
                    black_box(placer.place(black_box(a), viewport));
                }
            });
        });
    }
    group.finish();
}

criterion_group!(benches, bench_placement);
criterion_main!(benches);
