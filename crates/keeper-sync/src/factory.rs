//! Thing factories.
//!
//! Each factory builds a [`Thing`] ready to be added at a subtile, owned by
//! the owner of the tile it lands on and carrying the kind's initial
//! placement and sensitive tile. Height and sub-position of doors, keys,
//! heart flames and torches are refined afterwards by the positioning pass.

use keeper_core::{
    CreatureKind, Door, DoorKind, DoorLock, DoorOrientation, EffectKind, ItemKind, Owner,
    RoomThing, SubPos, SubtilePos, Thing, ThingKind, TilePos, TrapKind,
};
use keeper_map::Level;

use crate::census;
use crate::doors;

fn owned(level: &Level, kind: ThingKind, subtile: SubtilePos) -> Thing {
    Thing::new(kind, level.slab(subtile.tile()).owner, subtile)
}

/// A door of `kind`, unlocked, oriented for its surroundings.
pub fn door(level: &Level, subtile: SubtilePos, kind: DoorKind) -> Thing {
    let orientation = doors::compute_orientation(
        level,
        subtile.tile(),
        DoorOrientation::NorthSouthPass,
    );
    let mut thing = owned(
        level,
        ThingKind::Door(Door {
            kind,
            orientation,
            lock: DoorLock::Unlocked,
        }),
        subtile,
    );
    thing.height = 5;
    thing
}

/// A torch leaning toward the tile edge its subtile lies on.
pub fn torch(level: &Level, subtile: SubtilePos) -> Thing {
    let mut thing = owned(level, ThingKind::Item(ItemKind::Torch), subtile);
    let (dx, dy) = subtile.within_tile();
    let mut sub_pos = SubPos::CENTRE;
    match (dx, dy) {
        (0, _) => sub_pos.x = 0x40,
        (2, _) => sub_pos.x = 0xC0,
        (_, 0) => sub_pos.y = 0x40,
        (_, 2) => sub_pos.y = 0xC0,
        _ => {}
    }
    thing.sub_pos = sub_pos;
    if subtile.is_tile_centre() {
        thing.height = 3;
        thing.sub_height = 0;
    } else {
        thing.height = 2;
        thing.sub_height = 224;
    }
    thing.sensitive_tile = torch_sensitive_tile(level, subtile);
    thing
}

/// The tile a torch on `subtile` hangs from.
///
/// Prefers a neighbouring torch wall, then any tall slab, checking the
/// east-west neighbour, the north-south neighbour, then the diagonal. A
/// torch on the central subtile belongs to its own tile.
pub fn torch_sensitive_tile(level: &Level, subtile: SubtilePos) -> Option<TilePos> {
    let tile = subtile.tile();
    let (dx, dy) = subtile.within_tile();
    let nx = (tile.x + dx - 1).clamp(0, level.tiles_x() - 1);
    let ny = (tile.y + dy - 1).clamp(0, level.tiles_y() - 1);
    if nx == tile.x && ny == tile.y {
        return Some(tile);
    }
    let candidates = [
        TilePos::new(nx, tile.y),
        TilePos::new(tile.x, ny),
        TilePos::new(nx, ny),
    ];
    candidates
        .iter()
        .find(|t| level.slab(**t).kind.needs_adjacent_torch())
        .or_else(|| candidates.iter().find(|t| level.slab(**t).kind.is_tall()))
        .copied()
}

/// A spinning key marking a locked door.
pub fn spinning_key(level: &Level, subtile: SubtilePos) -> Thing {
    let mut thing = owned(level, ThingKind::Item(ItemKind::SpinningKey), subtile);
    thing.height = 4;
    thing.sub_height = 0;
    thing.sensitive_tile = Some(subtile.tile());
    thing
}

/// A dungeon heart, raised a little above the floor.
pub fn dungeon_heart(level: &Level, subtile: SubtilePos) -> Thing {
    let mut thing = owned(level, ThingKind::Item(ItemKind::DungeonHeart), subtile);
    thing.height = 3;
    thing.sensitive_tile = None;
    thing
}

/// A prison bar.
pub fn prison_bar(level: &Level, subtile: SubtilePos) -> Thing {
    let mut thing = owned(level, ThingKind::Item(ItemKind::PrisonBar), subtile);
    thing.sub_pos = SubPos::CENTRE;
    thing.sensitive_tile = Some(subtile.tile());
    thing
}

/// A hero gate owned by the heroes, taking the lowest free number.
pub fn hero_gate(level: &Level, subtile: SubtilePos) -> Thing {
    let number = census::free_hero_gate_number(level);
    Thing::new(ThingKind::HeroGate { number }, Owner::Good, subtile)
}

/// A room effect generator.
pub fn room_effect(level: &Level, subtile: SubtilePos, kind: EffectKind) -> Thing {
    let mut thing = owned(level, ThingKind::RoomEffect(kind), subtile);
    thing.sensitive_tile = Some(subtile.tile());
    thing
}

/// A creature at experience `level_no`.
pub fn creature(level: &Level, subtile: SubtilePos, kind: CreatureKind, level_no: u8) -> Thing {
    owned(
        level,
        ThingKind::Creature {
            kind,
            level: level_no,
        },
        subtile,
    )
}

/// A trap.
pub fn trap(level: &Level, subtile: SubtilePos, kind: TrapKind) -> Thing {
    owned(level, ThingKind::Trap(kind), subtile)
}

/// Any item, routed to the specialised factory where one exists.
pub fn item(level: &Level, subtile: SubtilePos, kind: ItemKind) -> Thing {
    match kind {
        ItemKind::Torch => torch(level, subtile),
        ItemKind::DungeonHeart => dungeon_heart(level, subtile),
        ItemKind::PrisonBar => prison_bar(level, subtile),
        ItemKind::SpinningKey => spinning_key(level, subtile),
        _ => {
            let mut thing = owned(level, ThingKind::Item(kind), subtile);
            if kind.is_room_item() {
                thing.sensitive_tile = Some(subtile.tile());
            }
            thing
        }
    }
}

/// A room thing as wanted by a room rule.
pub fn room_thing(level: &Level, subtile: SubtilePos, want: RoomThing) -> Thing {
    match want {
        RoomThing::Item(kind) => item(level, subtile, kind),
        RoomThing::Effect(kind) => room_effect(level, subtile, kind),
    }
}
