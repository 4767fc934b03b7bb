//! Height positioning.
//!
//! Runs after reconciliation and places doors, keys, heart flames and
//! torches vertically from the column heights around their subtile.
//! Torches also lean toward the first neighbouring column that rises
//! above them. Every other kind keeps the placement it was created with.

use keeper_core::{Direction, SubPos, Thing, ThingKind, TilePos, TileRect, MAX_HEIGHT};

use crate::context::SweepContext;

/// Where a thing should sit inside its subtile.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Placement {
    /// Horizontal position inside the subtile.
    pub sub_pos: SubPos,
    /// Height slot.
    pub height: u8,
    /// Offset inside the height slot.
    pub sub_height: u8,
}

impl Placement {
    fn apply(self, thing: &mut Thing) {
        thing.sub_pos = self.sub_pos;
        thing.height = self.height;
        thing.sub_height = self.sub_height;
    }
}

const TORCH_SUB_HEIGHT: u8 = 224;

/// Torch lean, tried in order: the neighbour to look at and where to go.
const TORCH_LEAN: [(Direction, SubPos); 8] = [
    (Direction::West, SubPos::new(0x40, 0x80)),
    (Direction::North, SubPos::new(0x80, 0x40)),
    (Direction::East, SubPos::new(0xC0, 0x80)),
    (Direction::South, SubPos::new(0x80, 0xC0)),
    (Direction::NorthWest, SubPos::new(0x40, 0x40)),
    (Direction::NorthEast, SubPos::new(0xC0, 0x40)),
    (Direction::SouthEast, SubPos::new(0xC0, 0xC0)),
    (Direction::SouthWest, SubPos::new(0x40, 0xC0)),
];

/// Clamp `height` into `lo..=hi`. Clamping to the floor zeroes the
/// sub-height and clamping to the ceiling maxes it.
fn clamp(height: i32, sub_height: u8, lo: u8, hi: u8) -> (u8, u8) {
    if height < i32::from(lo) {
        (lo, 0)
    } else if height > i32::from(hi) {
        (hi, u8::MAX)
    } else {
        (height as u8, sub_height)
    }
}

fn centred(height: i32, lo: u8) -> Placement {
    let (height, sub_height) = clamp(height, 0, lo, MAX_HEIGHT);
    Placement {
        sub_pos: SubPos::CENTRE,
        height,
        sub_height,
    }
}

/// Placement of `thing` given the column heights around its subtile, in
/// [`Direction`] order. `None` for kinds that are not positioned.
pub fn placement_for(thing: &Thing, columns: &[u16; 9]) -> Option<Placement> {
    let floor = i32::from(columns[Direction::Centre.index()]);
    match thing.kind {
        ThingKind::Door(_) => Some(centred(floor, 4)),
        _ if thing.is_key() => Some(centred(floor - 1, 1)),
        _ if thing.is_heart_flame() => Some(centred(floor, 1)),
        _ if thing.is_torch() => Some(torch_placement(thing, columns, floor)),
        _ => None,
    }
}

/// The lean is judged one slot above the floor for every torch; a central
/// torch is only raised afterwards.
fn torch_placement(thing: &Thing, columns: &[u16; 9], floor: i32) -> Placement {
    let wall_height = floor + 1;
    let sub_pos = TORCH_LEAN
        .iter()
        .find(|(dir, _)| i32::from(columns[dir.index()]) > wall_height)
        .map_or(SubPos::CENTRE, |&(_, pos)| pos);
    let (height, sub_height) = if thing.subtile.is_tile_centre() {
        (floor + 2, 0)
    } else {
        (wall_height, TORCH_SUB_HEIGHT)
    };
    let (height, sub_height) = clamp(height, sub_height, 2, MAX_HEIGHT);
    Placement {
        sub_pos,
        height,
        sub_height,
    }
}

/// Position every thing on `tile`.
pub fn position_tile(ctx: &mut SweepContext<'_>, tile: TilePos) {
    for subtile in tile.subtiles() {
        let columns = ctx.level().column_surround(subtile);
        for id in ctx.things_at(subtile) {
            let placement = ctx.thing(id).and_then(|t| placement_for(t, &columns));
            if let Some(placement) = placement {
                ctx.reposition(id, |t| placement.apply(t));
            }
        }
    }
}

/// Position every thing in `area`, clipped to the map.
pub fn position_rect(ctx: &mut SweepContext<'_>, area: TileRect) {
    let Some(area) = area.clip(ctx.level().tiles_x(), ctx.level().tiles_y()) else {
        return;
    };
    for tile in area.tiles() {
        position_tile(ctx, tile);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::metrics::SweepMetrics;
    use keeper_core::{Door, ItemKind, Owner, SubtilePos};
    use keeper_map::{Level, LevelConfig};

    fn thing(kind: ThingKind, sub: SubtilePos) -> Thing {
        Thing::new(kind, Owner::Red, sub)
    }

    fn columns(centre: u16, around: u16) -> [u16; 9] {
        let mut c = [around; 9];
        c[Direction::Centre.index()] = centre;
        c
    }

    const EDGE: SubtilePos = SubtilePos::new(3, 4);
    const CENTRE: SubtilePos = SubtilePos::new(4, 4);

    #[test]
    fn door_clamps_to_four_through_seven() {
        let door = thing(ThingKind::Door(Door::default()), CENTRE);
        let at = |h| placement_for(&door, &columns(h, h)).unwrap();
        assert_eq!((at(1).height, at(1).sub_height), (4, 0));
        assert_eq!((at(5).height, at(5).sub_height), (5, 0));
        assert_eq!((at(9).height, at(9).sub_height), (7, 255));
        assert_eq!(at(5).sub_pos, SubPos::CENTRE);
    }

    #[test]
    fn key_sits_one_below_the_floor_column() {
        let key = thing(ThingKind::Item(ItemKind::SpinningKey), CENTRE);
        let at = |h| placement_for(&key, &columns(h, 0)).unwrap();
        assert_eq!((at(0).height, at(0).sub_height), (1, 0));
        assert_eq!((at(5).height, at(5).sub_height), (4, 0));
        assert_eq!((at(15).height, at(15).sub_height), (7, 255));
    }

    #[test]
    fn flame_follows_the_column() {
        let flame = thing(ThingKind::Item(ItemKind::HeartFlameGreen), CENTRE);
        let p = placement_for(&flame, &columns(3, 0)).unwrap();
        assert_eq!((p.height, p.sub_height), (3, 0));
    }

    #[test]
    fn torch_leans_toward_taller_neighbour() {
        let torch = thing(ThingKind::Item(ItemKind::Torch), EDGE);
        let mut c = columns(1, 1);
        c[Direction::East.index()] = 5;
        c[Direction::NorthWest.index()] = 5;
        let p = placement_for(&torch, &c).unwrap();
        assert_eq!(p.sub_pos, SubPos::new(0xC0, 0x80));
        assert_eq!((p.height, p.sub_height), (2, 224));

        // a neighbour level with the torch does not count
        let p = placement_for(&torch, &columns(1, 2)).unwrap();
        assert_eq!(p.sub_pos, SubPos::CENTRE);

        let mut c = columns(1, 1);
        c[Direction::SouthWest.index()] = 6;
        let p = placement_for(&torch, &c).unwrap();
        assert_eq!(p.sub_pos, SubPos::new(0x40, 0xC0));
    }

    #[test]
    fn central_torch_stands_higher() {
        let torch = thing(ThingKind::Item(ItemKind::Torch), CENTRE);
        let p = placement_for(&torch, &columns(1, 1)).unwrap();
        assert_eq!((p.height, p.sub_height), (3, 0));
        let p = placement_for(&torch, &columns(0, 0)).unwrap();
        assert_eq!((p.height, p.sub_height), (2, 0));
        let p = placement_for(&torch, &columns(7, 0)).unwrap();
        assert_eq!((p.height, p.sub_height), (7, 255));
    }

    #[test]
    fn central_torch_leans_from_one_above_the_floor() {
        let torch = thing(ThingKind::Item(ItemKind::Torch), CENTRE);
        let mut c = columns(1, 1);
        c[Direction::West.index()] = 3;
        let p = placement_for(&torch, &c).unwrap();
        assert_eq!(p.sub_pos, SubPos::new(0x40, 0x80));
        assert_eq!((p.height, p.sub_height), (3, 0));

        // level with the raised torch is still not taller than the wall slot
        let p = placement_for(&torch, &columns(1, 2)).unwrap();
        assert_eq!(p.sub_pos, SubPos::CENTRE);
    }

    #[test]
    fn other_kinds_are_left_alone() {
        let anvil = thing(ThingKind::Item(ItemKind::Anvil), CENTRE);
        assert_eq!(placement_for(&anvil, &columns(3, 3)), None);
    }

    #[test]
    fn positioning_twice_changes_nothing() {
        let mut level = Level::new(LevelConfig::new(3, 3)).unwrap();
        for sub in TilePos::new(1, 1).subtiles() {
            level.set_column_height(sub, 1).unwrap();
        }
        level
            .add_thing(thing(ThingKind::Item(ItemKind::Torch), SubtilePos::new(3, 4)))
            .unwrap();
        level
            .add_thing(thing(ThingKind::Item(ItemKind::Anvil), SubtilePos::new(4, 4)))
            .unwrap();

        let mut metrics = SweepMetrics::default();
        let mut ctx = SweepContext::new(&mut level, &mut metrics);
        position_rect(&mut ctx, TileRect::around(TilePos::new(1, 1), 5));
        assert_eq!(ctx.metrics().things_repositioned, 1);
        position_rect(&mut ctx, TileRect::around(TilePos::new(1, 1), 5));
        assert_eq!(metrics.things_repositioned, 1);

        // the west column is border height 5, taller than the torch
        let torch = level.all_things().find(|(_, t)| t.is_torch()).unwrap().1;
        assert_eq!(torch.sub_pos, SubPos::new(0x40, 0x80));
        assert_eq!((torch.height, torch.sub_height), (2, 224));
    }
}
