//! The "keep exactly one" primitive behind every room rule.
//!
//! [`reconcile_tile`] scans the 9 subtiles of a tile and, for each wanted
//! [`Slot`], keeps the first matching room thing, deletes every other room
//! thing, and creates the wanted thing at the tile centre when it is
//! missing. [`reconcile_subtile`] does the same for a single subtile.
//!
//! Two kinds of thing are never collateral damage:
//!
//! - things that are not room things are left alone, and one sitting on
//!   the creation subtile blocks creation;
//! - torches survive reconciliation toward anything other than a torch,
//!   and also block creation on their subtile.

use keeper_arena::ThingId;
use keeper_core::{RoomThing, SubtilePos, TilePos};
use keeper_map::Level;
use smallvec::SmallVec;

use crate::context::SweepContext;
use crate::factory;

/// One wanted room thing within a reconciliation scope.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Slot {
    /// What to keep.
    pub want: RoomThing,
    /// Whether a missing instance may be created.
    pub create: bool,
}

impl Slot {
    /// A slot created when missing.
    pub fn create(want: RoomThing) -> Self {
        Self { want, create: true }
    }

    /// A slot only kept and re-owned, never created.
    pub fn keep(want: RoomThing) -> Self {
        Self {
            want,
            create: false,
        }
    }
}

/// Kept or created ids, one per slot.
pub type Kept = SmallVec<[Option<ThingId>; 2]>;

/// Reconcile all room things of `tile` against `slots`.
pub fn reconcile_tile(ctx: &mut SweepContext<'_>, tile: TilePos, slots: &[Slot]) -> Kept {
    let centre = tile.centre_subtile();
    let wants_torch = slots.iter().any(|s| s.want.is_torch());
    let mut kept: Kept = SmallVec::from_elem(None, slots.len());
    let mut blocked = false;

    for sub in tile.subtiles() {
        for id in ctx.things_at(sub) {
            let Some(thing) = ctx.thing(id) else { continue };
            if !thing.is_room_thing() {
                blocked |= sub == centre;
                continue;
            }
            let free_slot = slots
                .iter()
                .zip(kept.iter())
                .position(|(slot, k)| k.is_none() && slot.want.matches(&thing.kind));
            if let Some(i) = free_slot {
                kept[i] = Some(id);
            } else if thing.is_torch() && !wants_torch {
                blocked |= sub == centre;
            } else {
                ctx.delete(id);
            }
        }
    }

    let owner = ctx.slab(tile).owner;
    for (slot, k) in slots.iter().zip(kept.iter_mut()) {
        match *k {
            Some(id) => {
                ctx.update(id, |t| t.owner = owner);
            }
            None if slot.create && !blocked => {
                let thing = factory::room_thing(ctx.level(), centre, slot.want);
                *k = ctx.create(thing);
            }
            None => {}
        }
    }
    kept
}

/// Reconcile a tile toward one central thing.
pub fn reconcile_central(
    ctx: &mut SweepContext<'_>,
    tile: TilePos,
    want: RoomThing,
    allow_create: bool,
) -> Option<ThingId> {
    let slot = Slot {
        want,
        create: allow_create,
    };
    reconcile_tile(ctx, tile, &[slot])[0]
}

/// Reconcile one subtile toward one thing of `want`.
///
/// Other room things on the subtile are deleted only when `allow_delete`
/// is set; when kept they do not block creation.
pub fn reconcile_subtile(
    ctx: &mut SweepContext<'_>,
    subtile: SubtilePos,
    want: RoomThing,
    allow_delete: bool,
) -> Option<ThingId> {
    let mut kept = None;
    let mut blocked = false;
    for id in ctx.things_at(subtile) {
        let Some(thing) = ctx.thing(id) else { continue };
        if !thing.is_room_thing() {
            blocked = true;
        } else if kept.is_none() && want.matches(&thing.kind) {
            kept = Some(id);
        } else if thing.is_torch() && !want.is_torch() {
            blocked = true;
        } else if allow_delete {
            ctx.delete(id);
        }
    }

    match kept {
        Some(id) => {
            let owner = ctx.slab(subtile.tile()).owner;
            ctx.update(id, |t| t.owner = owner);
            Some(id)
        }
        None if !blocked => {
            let thing = factory::room_thing(ctx.level(), subtile, want);
            ctx.create(thing)
        }
        None => None,
    }
}

/// Delete every room thing on `tile`, sparing torches that hang on a wall.
pub fn delete_room_things(ctx: &mut SweepContext<'_>, tile: TilePos) {
    for sub in tile.subtiles() {
        delete_room_things_subtile(ctx, sub);
    }
}

/// Delete every room thing on `subtile`, sparing torches that hang on a wall.
pub fn delete_room_things_subtile(ctx: &mut SweepContext<'_>, subtile: SubtilePos) {
    let spare_torches = subtile_near_tall_slab(ctx.level(), subtile);
    for id in ctx.things_at(subtile) {
        let doomed = ctx
            .thing(id)
            .is_some_and(|t| t.is_room_thing() && !(spare_torches && t.is_torch()));
        if doomed {
            ctx.delete(id);
        }
    }
}

/// Whether an edge or corner subtile borders a tall slab on its outer side.
/// Always false for the central subtile.
pub fn subtile_near_tall_slab(level: &Level, subtile: SubtilePos) -> bool {
    let tile = subtile.tile();
    let (sx, sy) = subtile.within_tile();
    let (dx, dy) = (sx - 1, sy - 1);
    let mut neighbours: SmallVec<[TilePos; 3]> = SmallVec::new();
    if dx != 0 {
        neighbours.push(tile.offset(dx, 0));
    }
    if dy != 0 {
        neighbours.push(tile.offset(0, dy));
    }
    if dx != 0 && dy != 0 {
        neighbours.push(tile.offset(dx, dy));
    }
    neighbours.iter().any(|&t| level.slab(t).kind.is_tall())
}
