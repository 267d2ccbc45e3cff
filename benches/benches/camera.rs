// Copyright 2025 the Rackview Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{BatchSize, Criterion, black_box, criterion_group, criterion_main};
use rackview_camera::{Aspect, CameraConfig, Focus, Viewer, synthesize};
use rackview_layout::{Direction, LayoutConfig, generate};

fn bench_synthesize(c: &mut Criterion) {
    let warehouse = generate(&LayoutConfig::default());
    let config = CameraConfig::framed(&warehouse);
    let Ok(aspect) = Aspect::new(16.0 / 9.0) else {
        return;
    };
    let Some(platform) = warehouse.zone_platform(1, 12) else {
        return;
    };
    let mut group = c.benchmark_group("synthesize");
    for (name, focus) in [
        ("free", Focus::Free),
        ("plan", Focus::Plan),
        ("platform", Focus::Platform(platform)),
    ] {
        group.bench_function(name, |b| {
            let mut now = 0.0;
            b.iter(|| {
                now += 16.0;
                black_box(synthesize(&warehouse, focus, aspect, now, &config))
            });
        });
    }
    group.finish();
}

fn bench_transition_frames(c: &mut Criterion) {
    let warehouse = generate(&LayoutConfig::default());
    let Ok(aspect) = Aspect::new(16.0 / 9.0) else {
        return;
    };
    let Some(from) = warehouse.zone_platform(0, 12) else {
        return;
    };
    let mut group = c.benchmark_group("viewer");
    group.bench_function("platform_transition_30_frames", |b| {
        b.iter_batched(
            || Viewer::new(Focus::Platform(from), CameraConfig::default()),
            |mut viewer| {
                viewer.step(&warehouse, Direction::Up, 0.0);
                let mut now = 0.0;
                while viewer.needs_redraw() {
                    now += 1000.0 / 60.0;
                    if black_box(viewer.frame(&warehouse, aspect, now)).is_err() {
                        break;
                    }
                }
                viewer
            },
            BatchSize::SmallInput,
        );
    });
    group.finish();
}

criterion_group!(benches, bench_synthesize, bench_transition_frames);
criterion_main!(benches);
