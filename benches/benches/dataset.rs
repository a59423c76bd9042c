// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{BatchSize, Criterion, black_box, criterion_group, criterion_main};
use hotspot_region::{LayoutVariant, VariantSet};
use hotspot_state::{DeviceKind, HotspotConfig, HotspotController, ImageBox, RenderState};
use kurbo::{Point, Size};

const DATASET: &str = include_str!("../../hotspot_state/tests/data/dholera.json");

fn variants() -> VariantSet {
    let variants: Vec<LayoutVariant> = serde_json::from_str(DATASET).unwrap();
    VariantSet::new(variants).unwrap()
}

fn bench_dataset(c: &mut Criterion) {
    let mut group = c.benchmark_group("dataset");
    group.bench_function("parse_and_validate", |b| {
        b.iter(|| {
            let variants: Vec<LayoutVariant> = serde_json::from_str(black_box(DATASET)).unwrap();
            black_box(VariantSet::new(variants).unwrap())
        });
    });

    // One full interaction: load, click, then resize across the breakpoint.
    group.bench_function("load_click_resize", |b| {
        b.iter_batched(
            || {
                let viewport = Size::new(1024.0, 768.0);
                HotspotController::new(variants(), HotspotConfig::default(), viewport)
            },
            |mut map| {
                map.on_load(RenderState::new(
                    (1080.0, 1080.0),
                    ImageBox::new(0.0, 0.0, 540.0, 540.0),
                ));
                black_box(map.on_activate(Point::new(320.0, 30.0), DeviceKind::Pointer));
                map.on_resize(Size::new(390.0, 844.0), None, 0);
                black_box(map.flush_resize())
            },
            BatchSize::SmallInput,
        );
    });
    group.finish();
}

criterion_group!(benches, bench_dataset);
criterion_main!(benches);
