//! Room rule table.
//!
//! Each room slab kind maps to [`RoomRules`]: either one handler per
//! [`ShapeRole`] or a single handler that ignores shape. A handler
//! reconciles the tile toward the furniture the role wants.

use keeper_core::{
    Direction, EffectKind, ItemKind, Owner, RoomThing, SlabKind, Thing, TilePos,
};
use keeper_map::{Level, SlabSurround};

use crate::classify::{classify, ShapeRole};
use crate::context::SweepContext;
use crate::reconcile::{
    delete_room_things, delete_room_things_subtile, reconcile_central, reconcile_subtile,
    reconcile_tile, Slot,
};

/// A handler for one tile.
pub type TileRule = fn(&mut SweepContext<'_>, TilePos, &SlabSurround);

/// One handler per shape role.
#[derive(Clone, Copy)]
pub struct ShapedRules {
    /// [`ShapeRole::Floor`].
    pub floor: TileRule,
    /// [`ShapeRole::Edge`].
    pub edge: TileRule,
    /// [`ShapeRole::Corner`].
    pub corner: TileRule,
    /// [`ShapeRole::Inside`].
    pub inside: TileRule,
    /// [`ShapeRole::NearInside`].
    pub near_inside: TileRule,
}

impl ShapedRules {
    /// Every role deletes room things; rows override what they furnish.
    const BARE: ShapedRules = ShapedRules {
        floor: clear,
        edge: clear,
        corner: clear,
        inside: clear,
        near_inside: clear,
    };

    /// The handler for `role`.
    pub fn for_role(&self, role: ShapeRole) -> TileRule {
        match role {
            ShapeRole::Floor => self.floor,
            ShapeRole::Edge => self.edge,
            ShapeRole::Corner => self.corner,
            ShapeRole::Inside => self.inside,
            ShapeRole::NearInside => self.near_inside,
        }
    }
}

/// How a room kind furnishes its tiles.
#[derive(Clone, Copy)]
pub enum RoomRules {
    /// Handler chosen by the tile's shape role.
    Shaped(ShapedRules),
    /// One handler whatever the shape.
    Simple(TileRule),
}

const PORTAL: ShapedRules = ShapedRules {
    inside: portal_inside,
    ..ShapedRules::BARE
};

const TREASURE: ShapedRules = ShapedRules {
    corner: candlestick,
    ..ShapedRules::BARE
};

const TORTURE: ShapedRules = ShapedRules {
    floor: torture_spike,
    edge: torture_spike,
    corner: torture_spike,
    inside: torturer,
    near_inside: torturer,
};

const TRAINING: ShapedRules = ShapedRules {
    corner: central_torch,
    inside: training_post,
    ..ShapedRules::BARE
};

const DUNGEON_HEART: ShapedRules = ShapedRules {
    corner: heart_flame,
    inside: dungeon_heart,
    ..ShapedRules::BARE
};

const WORKSHOP: ShapedRules = ShapedRules {
    corner: anvil,
    inside: workshop_machine,
    ..ShapedRules::BARE
};

const SCAVENGER: ShapedRules = ShapedRules {
    corner: central_torch,
    inside: scavenger_eye,
    ..ShapedRules::BARE
};

const TEMPLE: ShapedRules = ShapedRules {
    corner: temple_statue,
    ..ShapedRules::BARE
};

const GRAVEYARD: ShapedRules = ShapedRules {
    floor: gravestone,
    edge: gravestone,
    corner: graveyard_corner,
    inside: gravestone,
    near_inside: gravestone,
};

const HATCHERY: ShapedRules = ShapedRules {
    corner: central_torch,
    ..ShapedRules::BARE
};

/// Rules for a room slab kind. Non-room kinds get the clearing rule.
pub fn rules_for(kind: SlabKind) -> RoomRules {
    match kind {
        SlabKind::Portal => RoomRules::Shaped(PORTAL),
        SlabKind::Treasure => RoomRules::Shaped(TREASURE),
        SlabKind::PrisonCase => RoomRules::Simple(prison_bars),
        SlabKind::Torture => RoomRules::Shaped(TORTURE),
        SlabKind::Training => RoomRules::Shaped(TRAINING),
        SlabKind::DungeonHeart => RoomRules::Shaped(DUNGEON_HEART),
        SlabKind::Workshop => RoomRules::Shaped(WORKSHOP),
        SlabKind::Scavenger => RoomRules::Shaped(SCAVENGER),
        SlabKind::Temple => RoomRules::Shaped(TEMPLE),
        SlabKind::Graveyard => RoomRules::Shaped(GRAVEYARD),
        SlabKind::Hatchery => RoomRules::Shaped(HATCHERY),
        SlabKind::GuardPost => RoomRules::Simple(guard_flag),
        _ => RoomRules::Simple(clear),
    }
}

/// Apply the room rule for the slab at `tile`.
pub fn sync_room_tile(ctx: &mut SweepContext<'_>, tile: TilePos) {
    let surround = ctx.surround(tile);
    let rule = match rules_for(surround.centre().kind) {
        RoomRules::Shaped(rules) => rules.for_role(classify(&surround)),
        RoomRules::Simple(rule) => rule,
    };
    rule(ctx, tile, &surround);
}

// ── Handlers ───────────────────────────────────────────────────────

fn clear(ctx: &mut SweepContext<'_>, tile: TilePos, _: &SlabSurround) {
    delete_room_things(ctx, tile);
}

fn central(ctx: &mut SweepContext<'_>, tile: TilePos, kind: ItemKind) {
    reconcile_central(ctx, tile, RoomThing::Item(kind), true);
}

fn portal_inside(ctx: &mut SweepContext<'_>, tile: TilePos, _: &SlabSurround) {
    let ice = RoomThing::Effect(EffectKind::EntranceIce);
    reconcile_tile(ctx, tile, &[Slot::create(ice), Slot::keep(ice)]);
}

fn candlestick(ctx: &mut SweepContext<'_>, tile: TilePos, _: &SlabSurround) {
    central(ctx, tile, ItemKind::Candlestick);
}

fn torture_spike(ctx: &mut SweepContext<'_>, tile: TilePos, _: &SlabSurround) {
    central(ctx, tile, ItemKind::TortureSpike);
}

fn torturer(ctx: &mut SweepContext<'_>, tile: TilePos, _: &SlabSurround) {
    central(ctx, tile, ItemKind::Torturer);
}

fn central_torch(ctx: &mut SweepContext<'_>, tile: TilePos, _: &SlabSurround) {
    central(ctx, tile, ItemKind::Torch);
}

fn training_post(ctx: &mut SweepContext<'_>, tile: TilePos, _: &SlabSurround) {
    central(ctx, tile, ItemKind::TrainingPost);
}

fn anvil(ctx: &mut SweepContext<'_>, tile: TilePos, _: &SlabSurround) {
    central(ctx, tile, ItemKind::Anvil);
}

fn workshop_machine(ctx: &mut SweepContext<'_>, tile: TilePos, _: &SlabSurround) {
    central(ctx, tile, ItemKind::WorkshopMachine);
}

fn scavenger_eye(ctx: &mut SweepContext<'_>, tile: TilePos, _: &SlabSurround) {
    central(ctx, tile, ItemKind::ScavengerEye);
}

fn temple_statue(ctx: &mut SweepContext<'_>, tile: TilePos, _: &SlabSurround) {
    central(ctx, tile, ItemKind::TempleStatue);
}

fn gravestone(ctx: &mut SweepContext<'_>, tile: TilePos, _: &SlabSurround) {
    central(ctx, tile, ItemKind::Gravestone);
}

fn graveyard_corner(ctx: &mut SweepContext<'_>, tile: TilePos, _: &SlabSurround) {
    reconcile_tile(
        ctx,
        tile,
        &[
            Slot::create(RoomThing::Item(ItemKind::Gravestone)),
            Slot::create(RoomThing::Effect(EffectKind::DryIce)),
        ],
    );
}

fn guard_flag(ctx: &mut SweepContext<'_>, tile: TilePos, surround: &SlabSurround) {
    central(ctx, tile, ItemKind::guard_flag_for(surround.centre().owner));
}

fn heart_flame(ctx: &mut SweepContext<'_>, tile: TilePos, surround: &SlabSurround) {
    match ItemKind::heart_flame_for(surround.centre().owner) {
        Some(flame) => central(ctx, tile, flame),
        None => delete_room_things(ctx, tile),
    }
}

/// One heart per owner across the whole map. A tile keeps or creates its
/// heart only while no other heart room of the owner holds one, so on a
/// map without hearts the first tile in sweep order gets it.
fn dungeon_heart(ctx: &mut SweepContext<'_>, tile: TilePos, surround: &SlabSurround) {
    let owner = surround.centre().owner;
    if owner == Owner::Unset {
        delete_room_things(ctx, tile);
        return;
    }
    let heart = RoomThing::Item(ItemKind::DungeonHeart);
    if hearts_elsewhere(ctx.level(), tile, owner) == 0 {
        reconcile_central(ctx, tile, heart, true);
    } else if let Some(surplus) = reconcile_central(ctx, tile, heart, false) {
        ctx.delete(surplus);
    }
}

/// Hearts of `owner` standing on the inside tile of one of its heart
/// rooms, other than `tile`. Hearts anywhere else are about to be cleared
/// by their own tile's rule and do not count.
/// Narrower than a map-wide per-owner count on purpose, so re-sweeps settle.
fn hearts_elsewhere(level: &Level, tile: TilePos, owner: Owner) -> usize {
    let is_heart = |t: &Thing| t.item_kind() == Some(ItemKind::DungeonHeart);
    level
        .all_things()
        .filter(|(_, t)| is_heart(t) && t.tile() != tile)
        .filter(|(_, t)| {
            let home = level.surround(t.tile());
            home.centre().kind == SlabKind::DungeonHeart
                && home.centre().owner == owner
                && classify(&home) == ShapeRole::Inside
        })
        .count()
}

/// Bars along every side of the cell that opens onto something other
/// than the same prison or a wall, and on the corners next to them.
fn prison_bars(ctx: &mut SweepContext<'_>, tile: TilePos, surround: &SlabSurround) {
    let open = |dir: Direction| !surround.matches(dir) && !surround.get(dir).kind.is_tall();
    let bar = RoomThing::Item(ItemKind::PrisonBar);
    for dir in Direction::ALL {
        let (dx, dy) = dir.offset();
        let barred = match (dx, dy) {
            (0, 0) => false,
            (0, _) | (_, 0) => open(dir),
            _ => open(cardinal(dx, 0)) || open(cardinal(0, dy)),
        };
        let sub = tile.subtile_toward(dir);
        if barred {
            reconcile_subtile(ctx, sub, bar, true);
        } else {
            delete_room_things_subtile(ctx, sub);
        }
    }
}

fn cardinal(dx: i32, dy: i32) -> Direction {
    match (dx, dy) {
        (0, -1) => Direction::North,
        (1, 0) => Direction::East,
        (0, 1) => Direction::South,
        (-1, 0) => Direction::West,
        _ => Direction::Centre,
    }
}
