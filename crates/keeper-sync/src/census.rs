//! Read-only queries over the things of a level.

use indexmap::IndexMap;
use keeper_arena::ThingId;
use keeper_core::{Owner, Thing, ThingKind, TilePos, TileRect};
use keeper_map::Level;

/// Count the things accepted by `matches`, per owner.
///
/// Every owner is present in the result, in [`Owner::ALL`] order.
pub fn owned_things_count(
    level: &Level,
    matches: impl Fn(&Thing) -> bool,
) -> IndexMap<Owner, usize> {
    let mut counts: IndexMap<Owner, usize> = Owner::ALL.iter().map(|&o| (o, 0)).collect();
    for (_, thing) in level.all_things() {
        if matches(thing) {
            *counts.entry(thing.owner).or_insert(0) += 1;
        }
    }
    counts
}

/// First thing on `tile` accepted by `matches`, scanning subtiles
/// row-major and each list front to back.
pub fn find_thing_on_tile(
    level: &Level,
    tile: TilePos,
    matches: impl Fn(&Thing) -> bool,
) -> Option<ThingId> {
    tile.subtiles().into_iter().find_map(|sub| {
        level
            .things_at(sub)
            .iter()
            .copied()
            .find(|&id| level.thing(id).is_ok_and(&matches))
    })
}

/// A light source on `tile` or any of its 8 neighbours.
pub fn find_lit_thing_radius1(level: &Level, tile: TilePos) -> Option<ThingId> {
    let area = TileRect::around(tile, 1).clip(level.tiles_x(), level.tiles_y())?;
    area.tiles()
        .find_map(|t| find_thing_on_tile(level, t, Thing::is_lit))
}

/// Smallest positive number not used by any hero gate on the level.
pub fn free_hero_gate_number(level: &Level) -> u16 {
    let numbers: Vec<u16> = level
        .all_things()
        .filter_map(|(_, thing)| match thing.kind {
            ThingKind::HeroGate { number } => Some(number),
            _ => None,
        })
        .collect();
    // n gates can occupy at most n of the numbers 1..=n+1
    let mut used = vec![false; numbers.len() + 2];
    for number in numbers {
        if let Some(slot) = used.get_mut(number as usize) {
            *slot = true;
        }
    }
    (1..used.len())
        .find(|&n| !used[n])
        .map_or(1, |n| n as u16)
}
