//! The sweep driver.
//!
//! [`ThingSync`] runs the rules over a region of a level in three passes:
//!
//! 1. every tile in row-major order: misplaced cleanup, then the room or
//!    door rule for its slab;
//! 2. every torch wall in the region places its torches, judging light
//!    against the furniture pass 1 settled;
//! 3. the positioning pass over the region grown by one tile, which also
//!    reaches torches hung on floor just outside it.

use std::time::Instant;

use keeper_core::{TilePos, TileRect};
use keeper_map::Level;

use crate::cleanup;
use crate::config::SyncConfig;
use crate::context::SweepContext;
use crate::doors;
use crate::error::VerifyFailure;
use crate::height;
use crate::metrics::SweepMetrics;
use crate::rooms;
use crate::torches;
use crate::verify;

/// Keeps a level's things in step with its slabs.
///
/// Holds no level state between calls; every sweep takes the level it
/// works on.
#[derive(Debug, Default)]
pub struct ThingSync {
    config: SyncConfig,
    last_metrics: SweepMetrics,
}

impl ThingSync {
    /// A driver with the given passes enabled.
    pub fn new(config: SyncConfig) -> Self {
        Self {
            config,
            last_metrics: SweepMetrics::default(),
        }
    }

    /// The configuration in use.
    pub fn config(&self) -> &SyncConfig {
        &self.config
    }

    /// Metrics of the most recent sweep or positioning run.
    pub fn last_metrics(&self) -> &SweepMetrics {
        &self.last_metrics
    }

    /// Sweep every tile of the level.
    pub fn sweep_whole_map(&mut self, level: &mut Level) -> SweepMetrics {
        let area = level.bounds();
        self.sweep_rect(level, area)
    }

    /// Sweep the tiles of `area`, clipped to the map.
    pub fn sweep_rect(&mut self, level: &mut Level, area: TileRect) -> SweepMetrics {
        let start = Instant::now();
        let mut metrics = SweepMetrics::default();
        if let Some(area) = area.clip(level.tiles_x(), level.tiles_y()) {
            let mut ctx = SweepContext::new(level, &mut metrics);
            for tile in area.tiles() {
                self.sync_tile(&mut ctx, tile);
            }
            for tile in area.tiles() {
                if ctx.slab(tile).kind.needs_adjacent_torch() {
                    torches::place_torches(&mut ctx, tile);
                }
            }
            if self.config.position_things {
                height::position_rect(&mut ctx, grow(area));
            }
        }
        self.finish("sweep", area, start, metrics)
    }

    /// Sweep `tile` and its 8 neighbours.
    pub fn sweep_radius1(&mut self, level: &mut Level, tile: TilePos) -> SweepMetrics {
        self.sweep_rect(level, TileRect::around(tile, 1))
    }

    /// Run only the positioning pass over the whole level.
    pub fn position_whole_map(&mut self, level: &mut Level) -> SweepMetrics {
        let area = level.bounds();
        self.position_rect(level, area)
    }

    /// Run only the positioning pass over `area`, clipped to the map.
    pub fn position_rect(&mut self, level: &mut Level, area: TileRect) -> SweepMetrics {
        let start = Instant::now();
        let mut metrics = SweepMetrics::default();
        let mut ctx = SweepContext::new(level, &mut metrics);
        height::position_rect(&mut ctx, area);
        self.finish("positioning", area, start, metrics)
    }

    /// Run only the positioning pass over `tile` and its 8 neighbours.
    pub fn position_radius1(&mut self, level: &mut Level, tile: TilePos) -> SweepMetrics {
        self.position_rect(level, TileRect::around(tile, 1))
    }

    /// Validate the level's things; see [`verify::verify_things`].
    pub fn verify(&self, level: &Level) -> Result<(), VerifyFailure> {
        verify::verify_things(level)
    }

    fn sync_tile(&self, ctx: &mut SweepContext<'_>, tile: TilePos) {
        if self.config.remove_misplaced {
            cleanup::remove_misplaced(ctx, tile);
        }
        ctx.visit_tile();
        let kind = ctx.slab(tile).kind;
        if kind.is_room() {
            rooms::sync_room_tile(ctx, tile);
        } else if kind.is_door() {
            doors::sync_door_tile(ctx, tile);
        }
    }

    fn finish(
        &mut self,
        pass: &str,
        area: TileRect,
        start: Instant,
        mut metrics: SweepMetrics,
    ) -> SweepMetrics {
        metrics.elapsed_us = start.elapsed().as_micros() as u64;
        log::debug!(
            "{pass} {}..{}: {} tiles, {} created, {} updated, {} deleted, {} repositioned in {}us",
            area.min,
            area.max,
            metrics.tiles_visited,
            metrics.things_created,
            metrics.things_updated,
            metrics.things_deleted,
            metrics.things_repositioned,
            metrics.elapsed_us,
        );
        self.last_metrics = metrics.clone();
        metrics
    }
}

fn grow(area: TileRect) -> TileRect {
    TileRect::new(area.min.offset(-1, -1), area.max.offset(1, 1))
}

#[cfg(test)]
mod tests {
    use super::*;
    use keeper_core::{Door, DoorOrientation, ItemKind, Owner, Thing, ThingKind};
    use keeper_test_utils::{count_things, LevelBuilder};

    fn sample() -> Level {
        LevelBuilder::new(
            "#######
             #kkk..#
             #kkk.W#
             #kkk..#
             ##1####
             #.....#
             #######",
        )
        .build()
    }

    #[test]
    fn whole_map_sweep_then_noop() {
        let mut level = sample();
        let mut sync = ThingSync::default();
        let first = sync.sweep_whole_map(&mut level);
        assert_eq!(first.tiles_visited, 49);
        assert!(first.things_created > 0);
        assert_eq!(sync.last_metrics(), &first);
        assert_eq!(count_things(&level, |t| t.is_door()), 1);
        assert_eq!(
            count_things(&level, |t| t.item_kind() == Some(ItemKind::Anvil)),
            4
        );
        let second = sync.sweep_whole_map(&mut level);
        assert!(second.is_noop(), "{second:?}");
        assert_eq!(sync.verify(&level), Ok(()));
    }

    #[test]
    fn rect_outside_the_map_does_nothing() {
        let mut level = sample();
        let mut sync = ThingSync::default();
        let far = TileRect::new(TilePos::new(20, 20), TilePos::new(30, 30));
        let metrics = sync.sweep_rect(&mut level, far);
        assert_eq!(metrics.tiles_visited, 0);
        assert!(metrics.is_noop());
        assert_eq!(level.thing_count(), 0);
    }

    #[test]
    fn radius_sweep_touches_only_its_block() {
        let mut level = sample();
        let mut sync = ThingSync::default();
        let metrics = sync.sweep_radius1(&mut level, TilePos::new(0, 0));
        // clipped to the 2x2 corner of the map
        assert_eq!(metrics.tiles_visited, 4);
        let metrics = sync.sweep_radius1(&mut level, TilePos::new(2, 2));
        assert_eq!(metrics.tiles_visited, 9);
        assert_eq!(
            count_things(&level, |t| t.item_kind() == Some(ItemKind::WorkshopMachine)),
            1
        );
        assert_eq!(count_things(&level, |t| t.is_door()), 0);
    }

    #[test]
    fn positioning_can_be_switched_off() {
        let mut level = sample();
        let mut sync = ThingSync::new(SyncConfig {
            position_things: false,
            ..SyncConfig::default()
        });
        let metrics = sync.sweep_whole_map(&mut level);
        assert_eq!(metrics.things_repositioned, 0);
        let positioned = sync.position_whole_map(&mut level);
        assert!(positioned.things_repositioned > 0);
        assert_eq!(positioned.tiles_visited, 0);
        assert!(sync.position_whole_map(&mut level).is_noop());
    }

    #[test]
    fn misplaced_cleanup_can_be_switched_off() {
        let mut level = sample();
        let stray = TilePos::new(3, 5).centre_subtile();
        level
            .add_thing(Thing::new(ThingKind::Door(Door::default()), Owner::Red, stray))
            .unwrap();
        let mut keep = ThingSync::new(SyncConfig {
            remove_misplaced: false,
            ..SyncConfig::default()
        });
        keep.sweep_whole_map(&mut level);
        assert_eq!(count_things(&level, |t| t.is_door()), 2);
        let mut clean = ThingSync::default();
        clean.sweep_whole_map(&mut level);
        assert_eq!(count_things(&level, |t| t.is_door()), 1);
    }

    #[test]
    fn door_between_walls_keeps_its_orientation() {
        let mut level = sample();
        let mut sync = ThingSync::default();
        sync.sweep_whole_map(&mut level);
        let door = level.all_things().find(|(_, t)| t.is_door()).unwrap().1;
        assert_eq!(
            door.door().map(|d| d.orientation),
            Some(DoorOrientation::NorthSouthPass)
        );
        assert_eq!(door.height, 4);
    }
}
