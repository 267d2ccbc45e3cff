// Copyright 2025 the Rackview Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{BatchSize, Criterion, Throughput, black_box, criterion_group, criterion_main};
use rackview_layout::{Direction, LayoutConfig, generate};

fn config(zones: usize, side: usize) -> LayoutConfig {
    LayoutConfig {
        zones,
        rows: side,
        columns: side,
        ..LayoutConfig::default()
    }
}

fn bench_generate(c: &mut Criterion) {
    let mut group = c.benchmark_group("generate");
    for &(zones, side) in &[(3_usize, 5_usize), (10, 10), (20, 20)] {
        let cfg = config(zones, side);
        let trays = zones * side * side * cfg.stacks_per_platform * cfg.trays_per_stack;
        group.throughput(Throughput::Elements(trays as u64));
        group.bench_function(format!("zones{zones}_grid{side}"), |b| {
            b.iter(|| black_box(generate(&cfg)));
        });
    }
    group.finish();
}

fn bench_draw_list(c: &mut Criterion) {
    let mut group = c.benchmark_group("draw_list");
    for &(zones, side) in &[(3_usize, 5_usize), (10, 10), (20, 20)] {
        let warehouse = generate(&config(zones, side));
        let trays = warehouse.trays().count();
        group.throughput(Throughput::Elements(trays as u64));
        group.bench_function(format!("collect_n{trays}"), |b| {
            b.iter(|| black_box(warehouse.draw_list().collect::<Vec<_>>()));
        });
        group.bench_function(format!("world_matrix_n{trays}"), |b| {
            b.iter(|| {
                warehouse
                    .trays()
                    .filter_map(|t| warehouse.world_matrix(t))
                    .fold(0.0_f32, |acc, m| acc + m.w_axis.x)
            });
        });
    }
    group.finish();
}

fn bench_navigation(c: &mut Criterion) {
    let warehouse = generate(&config(10, 10));
    let mut group = c.benchmark_group("navigation");
    group.bench_function("walk_row_and_back", |b| {
        b.iter_batched(
            || warehouse.zone_platform(5, 0),
            |start| {
                let mut at = start;
                while let Some(next) = at.and_then(|p| warehouse.platform_neighbor(p, Direction::Left)) {
                    at = Some(next);
                }
                while let Some(next) = at.and_then(|p| warehouse.platform_neighbor(p, Direction::Right)) {
                    at = Some(next);
                }
                black_box(at)
            },
            BatchSize::SmallInput,
        );
    });
    group.bench_function("verify_links", |b| {
        b.iter(|| black_box(warehouse.verify_links()));
    });
    group.finish();
}

criterion_group!(benches, bench_generate, bench_draw_list, bench_navigation);
criterion_main!(benches);
