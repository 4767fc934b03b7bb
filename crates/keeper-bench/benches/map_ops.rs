//! Criterion micro-benchmarks for level reads and thing list edits.

use std::hint::black_box;

use criterion::{criterion_group, criterion_main, Criterion};
use keeper_bench::settled_map;
use keeper_core::{ItemKind, Owner, SubtilePos, Thing, ThingKind, TilePos};
use keeper_sync::census;

fn bench_reads(c: &mut Criterion) {
    let level = settled_map(3);

    c.bench_function("surround_all_tiles", |b| {
        b.iter(|| {
            for tile in level.bounds().tiles() {
                black_box(level.surround(tile));
            }
        });
    });

    c.bench_function("column_surround_all_subtiles", |b| {
        b.iter(|| {
            for tile in level.bounds().tiles() {
                for sub in tile.subtiles() {
                    black_box(level.column_surround(sub));
                }
            }
        });
    });

    c.bench_function("heart_census", |b| {
        b.iter(|| {
            black_box(census::owned_things_count(&level, |t| {
                t.item_kind() == Some(ItemKind::DungeonHeart)
            }))
        });
    });

    c.bench_function("lit_radius1", |b| {
        b.iter(|| black_box(census::find_lit_thing_radius1(&level, TilePos::new(40, 40))));
    });
}

fn bench_edits(c: &mut Criterion) {
    let mut level = settled_map(3);
    let sub = SubtilePos::new(100, 100);

    c.bench_function("add_delete_thing", |b| {
        b.iter(|| {
            let thing = Thing::new(ThingKind::Item(ItemKind::Torch), Owner::Red, sub);
            let id = level.add_thing(thing).unwrap();
            level.delete_thing(black_box(id)).unwrap();
        });
    });
}

criterion_group!(benches, bench_reads, bench_edits);
criterion_main!(benches);
