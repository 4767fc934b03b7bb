//! Removal of things that no longer belong where they stand.

use keeper_arena::ThingId;
use keeper_core::TilePos;
use keeper_map::Level;

use crate::context::SweepContext;
use crate::metrics::SweepMetrics;

/// Delete every thing on `tile` whose expected ground rejects the tile's
/// slab: room furniture on the wrong room, doors and keys off a door,
/// floor things buried in a wall. Returns how many went.
pub fn remove_misplaced(ctx: &mut SweepContext<'_>, tile: TilePos) -> usize {
    let slab = ctx.slab(tile).kind;
    delete_where(ctx, tile, |ctx, id| {
        ctx.thing(id)
            .is_some_and(|t| !t.expected_ground().allows(slab))
    })
}

/// Delete the room things on `tile` that the level can do without,
/// keeping dungeon hearts. Returns how many went.
pub fn remove_noncrucial_room_things(level: &mut Level, tile: TilePos) -> usize {
    let mut metrics = SweepMetrics::default();
    let mut ctx = SweepContext::new(level, &mut metrics);
    delete_where(&mut ctx, tile, |ctx, id| {
        ctx.thing(id)
            .is_some_and(|t| t.is_room_thing() && !t.is_crucial())
    })
}

fn delete_where(
    ctx: &mut SweepContext<'_>,
    tile: TilePos,
    doomed: impl Fn(&SweepContext<'_>, ThingId) -> bool,
) -> usize {
    let mut removed = 0;
    for sub in tile.subtiles() {
        for id in ctx.things_at(sub) {
            if doomed(ctx, id) && ctx.delete(id) {
                removed += 1;
            }
        }
    }
    removed
}
