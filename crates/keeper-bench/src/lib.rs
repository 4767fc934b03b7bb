//! Benchmark levels for the Keeper thing synchronization engine.
//!
//! - [`full_map`]: an 85x85 random level, the size of a classic map
//! - [`settled_map`]: the same level after one whole-map sweep
//! - [`room_block`]: a square of one room kind ringed by earth

#![forbid(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]

use keeper_core::{Owner, Slab, SlabKind, TilePos};
use keeper_map::{Level, LevelConfig};
use keeper_sync::ThingSync;
use keeper_test_utils::{column_height_for, random_level, LevelBuilder};

/// Unswept random level of classic size.
pub fn full_map(seed: u64) -> Level {
    let side = LevelConfig::DEFAULT_TILES;
    random_level(seed, side, side)
}

/// [`full_map`] after one whole-map sweep, so every further sweep is a
/// no-op.
pub fn settled_map(seed: u64) -> Level {
    let mut level = full_map(seed);
    ThingSync::default().sweep_whole_map(&mut level);
    level
}

/// A `side` x `side` room of `kind` with a one-tile earth ring.
pub fn room_block(kind: SlabKind, side: i32) -> Level {
    let n = side + 2;
    let row = "#".repeat(n as usize);
    let map = vec![row; n as usize].join("\n");
    let mut level = LevelBuilder::new(&map).build();
    for y in 1..=side {
        for x in 1..=side {
            let tile = TilePos::new(x, y);
            level
                .set_slab(tile, Slab::new(kind, Owner::Red))
                .expect("tile on map");
            for sub in tile.subtiles() {
                level
                    .set_column_height(sub, column_height_for(kind))
                    .expect("subtile on map");
            }
        }
    }
    level
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn settled_map_resweeps_clean() {
        let mut level = settled_map(1);
        assert!(ThingSync::default().sweep_whole_map(&mut level).is_noop());
    }

    #[test]
    fn room_block_has_the_room() {
        let level = room_block(SlabKind::Workshop, 4);
        assert_eq!(level.tiles_x(), 6);
        assert_eq!(level.slab(TilePos::new(1, 1)).kind, SlabKind::Workshop);
        assert_eq!(level.slab(TilePos::new(5, 5)).kind, SlabKind::Earth);
    }
}
