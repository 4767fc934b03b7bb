//! Criterion benchmarks for whole-map, rectangle and positioning sweeps.

use std::hint::black_box;

use criterion::{criterion_group, criterion_main, BatchSize, Criterion};
use keeper_bench::{full_map, room_block, settled_map};
use keeper_core::{SlabKind, TilePos, TileRect};
use keeper_sync::ThingSync;

fn bench_whole_map(c: &mut Criterion) {
    let mut group = c.benchmark_group("whole_map");

    group.bench_function("first_sweep_85x85", |b| {
        b.iter_batched(
            || full_map(42),
            |mut level| {
                let mut sync = ThingSync::default();
                black_box(sync.sweep_whole_map(&mut level))
            },
            BatchSize::LargeInput,
        );
    });

    let mut settled = settled_map(42);
    let mut sync = ThingSync::default();
    group.bench_function("settled_sweep_85x85", |b| {
        b.iter(|| black_box(sync.sweep_whole_map(&mut settled)));
    });

    group.bench_function("positioning_85x85", |b| {
        b.iter(|| black_box(sync.position_whole_map(&mut settled)));
    });

    group.finish();
}

fn bench_local(c: &mut Criterion) {
    let mut group = c.benchmark_group("local");

    let mut level = settled_map(7);
    let mut sync = ThingSync::default();
    let centre = TilePos::new(42, 42);
    group.bench_function("radius1", |b| {
        b.iter(|| black_box(sync.sweep_radius1(&mut level, black_box(centre))));
    });

    let area = TileRect::around(centre, 8);
    group.bench_function("rect_17x17", |b| {
        b.iter(|| black_box(sync.sweep_rect(&mut level, black_box(area))));
    });

    group.finish();
}

fn bench_rooms(c: &mut Criterion) {
    let mut group = c.benchmark_group("rooms");

    for kind in [SlabKind::Graveyard, SlabKind::PrisonCase, SlabKind::DungeonHeart] {
        group.bench_function(format!("{kind:?}_15x15"), |b| {
            b.iter_batched(
                || room_block(kind, 15),
                |mut level| {
                    let mut sync = ThingSync::default();
                    black_box(sync.sweep_whole_map(&mut level))
                },
                BatchSize::SmallInput,
            );
        });
    }

    group.finish();
}

criterion_group!(benches, bench_whole_map, bench_local, bench_rooms);
criterion_main!(benches);
