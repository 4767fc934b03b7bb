//! Door tiles: one door per tile, pinned to the centre, with its key.
//!
//! The orientation rule has hysteresis. A door keeps its passable axis as
//! long as the walls flanking that axis are both tall, and flips otherwise.
//! A door with no tall pair on either axis therefore flips on every sweep.

use keeper_arena::ThingId;
use keeper_core::{DoorKind, DoorLock, DoorOrientation, Owner, SubtilePos, TilePos};
use keeper_map::{Level, MapError};

use crate::context::SweepContext;
use crate::factory;
use crate::metrics::SweepMetrics;

/// Passable axis for a door on `tile` that was previously `previous`.
pub fn compute_orientation(
    level: &Level,
    tile: TilePos,
    previous: DoorOrientation,
) -> DoorOrientation {
    let tall = |dx: i32, dy: i32| level.slab(tile.offset(dx, dy)).kind.is_tall();
    match previous {
        DoorOrientation::NorthSouthPass if tall(1, 0) && tall(-1, 0) => {
            DoorOrientation::NorthSouthPass
        }
        DoorOrientation::NorthSouthPass => DoorOrientation::EastWestPass,
        DoorOrientation::EastWestPass if tall(0, -1) && tall(0, 1) => {
            DoorOrientation::EastWestPass
        }
        DoorOrientation::EastWestPass => DoorOrientation::NorthSouthPass,
    }
}

/// Make `tile` carry exactly one door, matching its slab, at its centre.
pub fn sync_door_tile(ctx: &mut SweepContext<'_>, tile: TilePos) {
    let slab = ctx.slab(tile);
    let kind = DoorKind::for_slab(slab.kind).unwrap_or_default();
    let centre = tile.centre_subtile();

    let mut kept = None;
    for sub in tile.subtiles() {
        for id in ctx.things_at(sub) {
            if !ctx.thing(id).is_some_and(|t| t.is_door()) {
                continue;
            }
            if kept.is_none() {
                kept = Some(id);
            } else {
                ctx.delete(id);
            }
        }
    }
    purge_stray_keys(ctx, tile);

    let door = match kept {
        None => {
            let door = factory::door(ctx.level(), centre, kind);
            ctx.create(door)
        }
        Some(id) => {
            let moved = ctx.relocate(id, centre);
            if let Some(id) = moved {
                refresh_door(ctx, id, tile, kind, slab.owner);
            }
            moved
        }
    };

    if let Some(id) = door {
        let lock = door_lock(ctx.level(), id).unwrap_or_default();
        apply_door_lock(ctx, id, lock);
    }
}

fn refresh_door(
    ctx: &mut SweepContext<'_>,
    id: ThingId,
    tile: TilePos,
    kind: DoorKind,
    owner: Owner,
) {
    let Some(previous) = ctx.thing(id).and_then(|t| t.door()).map(|d| d.orientation) else {
        return;
    };
    let orientation = compute_orientation(ctx.level(), tile, previous);
    ctx.update(id, |t| {
        t.owner = owner;
        if let Some(door) = t.door_mut() {
            door.kind = kind;
            door.orientation = orientation;
        }
    });
}

/// Keys belong only on the central subtile, and only one of them.
fn purge_stray_keys(ctx: &mut SweepContext<'_>, tile: TilePos) {
    let centre = tile.centre_subtile();
    for sub in tile.subtiles() {
        let keys: Vec<ThingId> = ctx
            .things_at(sub)
            .into_iter()
            .filter(|&id| ctx.thing(id).is_some_and(|t| t.is_key()))
            .collect();
        // the lock protocol looks from the back, so the last key stays
        let keep = if sub == centre { keys.last().copied() } else { None };
        for id in keys {
            if Some(id) != keep {
                ctx.delete(id);
            }
        }
    }
}

/// Lock state of the door behind `id`; `None` if it is not a door.
pub fn door_lock(level: &Level, id: ThingId) -> Option<DoorLock> {
    level.thing(id).ok()?.door().map(|d| d.lock)
}

/// Lock or unlock a door, adding or removing its spinning key.
pub fn set_door_lock(level: &mut Level, id: ThingId, lock: DoorLock) -> Result<(), MapError> {
    level.thing(id)?;
    let mut metrics = SweepMetrics::default();
    let mut ctx = SweepContext::new(level, &mut metrics);
    apply_door_lock(&mut ctx, id, lock);
    Ok(())
}

pub(crate) fn apply_door_lock(ctx: &mut SweepContext<'_>, id: ThingId, lock: DoorLock) {
    let Some(subtile) = ctx.thing(id).filter(|t| t.is_door()).map(|t| t.subtile) else {
        return;
    };
    let key = last_key(ctx, subtile);
    match (lock, key) {
        (DoorLock::Unlocked, Some(key)) => {
            ctx.delete(key);
        }
        (DoorLock::Locked, None) => {
            let key = factory::spinning_key(ctx.level(), subtile);
            ctx.create(key);
        }
        _ => {}
    }
    ctx.update(id, |t| {
        if let Some(door) = t.door_mut() {
            door.lock = lock;
        }
    });
}

fn last_key(ctx: &SweepContext<'_>, subtile: SubtilePos) -> Option<ThingId> {
    ctx.things_at(subtile)
        .into_iter()
        .rev()
        .find(|&id| ctx.thing(id).is_some_and(|t| t.is_key()))
}
