//! Integration test: whole-map properties over random levels.
//!
//! Random levels mix every room kind, walls, liquids, walled doors and a
//! scattering of things (many of them misplaced). After one whole-map
//! sweep every property below must hold, and a second sweep must be a
//! no-op.

use keeper_core::{DoorLock, DoorOrientation, ItemKind, Owner, Slab, SlabKind, TilePos};
use keeper_map::Level;
use keeper_sync::{census, door_lock, set_door_lock, ThingSync};
use keeper_test_utils::{count_on_tile, count_things, random_level, snapshot, LevelBuilder};
use proptest::prelude::*;

fn swept(seed: u64, w: u32, h: u32) -> Level {
    let mut level = random_level(seed, w, h);
    ThingSync::default().sweep_whole_map(&mut level);
    level
}

// ── Idempotence ──────────────────────────────────────────────────────

proptest! {
    #![proptest_config(ProptestConfig::with_cases(48))]

    #[test]
    fn second_sweep_is_noop(seed in any::<u64>(), w in 3u32..28, h in 3u32..28) {
        let mut level = random_level(seed, w, h);
        let mut sync = ThingSync::default();
        sync.sweep_whole_map(&mut level);
        let before = snapshot(&level);
        let again = sync.sweep_whole_map(&mut level);
        prop_assert!(again.is_noop(), "seed {}: {:?}", seed, again);
        prop_assert_eq!(snapshot(&level), before);
    }

    #[test]
    fn swept_levels_verify(seed in any::<u64>()) {
        let level = swept(seed, 20, 20);
        // random creatures and traps are always in range, so nothing is
        // left for the validator to flag
        prop_assert_eq!(keeper_sync::verify_things(&level), Ok(()));
    }
}

#[test]
fn radius_sweeps_after_whole_map_are_noops() {
    let mut level = swept(11, 24, 24);
    let mut sync = ThingSync::default();
    for tile in level.bounds().tiles().step_by(7) {
        assert!(sync.sweep_radius1(&mut level, tile).is_noop(), "{tile}");
    }
}

// ── Doors ────────────────────────────────────────────────────────────

#[test]
fn every_door_tile_has_one_central_door() {
    for seed in 0..24 {
        let level = swept(seed, 24, 24);
        for tile in level.bounds().tiles() {
            let doors = count_on_tile(&level, tile, |t| t.is_door());
            if level.slab(tile).kind.is_door() {
                assert_eq!(doors, 1, "seed {seed} tile {tile}");
                let centre = level.things_at(tile.centre_subtile());
                assert!(centre
                    .iter()
                    .any(|&id| level.thing(id).is_ok_and(|t| t.is_door())));
            } else {
                assert_eq!(doors, 0, "seed {seed} tile {tile}");
            }
        }
    }
}

#[test]
fn lock_state_matches_keys() {
    for seed in 0..24 {
        let level = swept(seed, 24, 24);
        for (id, door) in level.all_things().filter(|(_, t)| t.is_door()) {
            let keys = count_on_tile(&level, door.tile(), |t| t.is_key());
            let locked = door_lock(&level, id) == Some(DoorLock::Locked);
            assert_eq!(keys, usize::from(locked), "seed {seed} door at {}", door.tile());
        }
        // no key outlives its door
        let keys = count_things(&level, |t| t.is_key());
        let locked = level
            .all_things()
            .filter(|(id, _)| door_lock(&level, *id) == Some(DoorLock::Locked))
            .count();
        assert_eq!(keys, locked);
    }
}

#[test]
fn locking_through_the_api_survives_a_sweep() {
    let mut level = LevelBuilder::new(
        "#.#
         #2#
         #.#",
    )
    .build();
    let mut sync = ThingSync::default();
    sync.sweep_whole_map(&mut level);
    let door = level.all_things().find(|(_, t)| t.is_door()).unwrap().0;
    set_door_lock(&mut level, door, DoorLock::Locked).unwrap();
    assert!(sync.sweep_whole_map(&mut level).is_noop());
    assert_eq!(count_things(&level, |t| t.is_key()), 1);
    set_door_lock(&mut level, door, DoorLock::Unlocked).unwrap();
    assert_eq!(count_things(&level, |t| t.is_key()), 0);
}

#[test]
fn orientation_hysteresis() {
    // an orientation is kept while its walls stand, otherwise it flips
    let cases = [
        ("#.#\n#1#\n#.#", DoorOrientation::NorthSouthPass, DoorOrientation::NorthSouthPass),
        ("#.#\n#1#\n#.#", DoorOrientation::EastWestPass, DoorOrientation::NorthSouthPass),
        ("###\n.1.\n###", DoorOrientation::NorthSouthPass, DoorOrientation::EastWestPass),
        ("###\n.1.\n###", DoorOrientation::EastWestPass, DoorOrientation::EastWestPass),
        ("###\n#1#\n###", DoorOrientation::EastWestPass, DoorOrientation::EastWestPass),
        ("###\n#1#\n###", DoorOrientation::NorthSouthPass, DoorOrientation::NorthSouthPass),
    ];
    for (map, before, after) in cases {
        let mut level = LevelBuilder::new(map).build();
        let tile = TilePos::new(1, 1);
        let door = keeper_core::Door {
            orientation: before,
            ..Default::default()
        };
        level
            .add_thing(keeper_core::Thing::new(
                keeper_core::ThingKind::Door(door),
                Owner::Red,
                tile.centre_subtile(),
            ))
            .unwrap();
        ThingSync::default().sweep_whole_map(&mut level);
        let found = level
            .all_things()
            .find_map(|(_, t)| t.door().map(|d| d.orientation));
        assert_eq!(found, Some(after), "{map:?} from {before:?}");
    }
}

// ── Hearts ───────────────────────────────────────────────────────────

#[test]
fn at_most_one_heart_per_owner() {
    for seed in 0..32 {
        let level = swept(seed, 28, 28);
        let hearts = census::owned_things_count(&level, |t| {
            t.item_kind() == Some(ItemKind::DungeonHeart)
        });
        for (owner, count) in hearts {
            assert!(count <= 1, "seed {seed}: {owner} has {count} hearts");
        }
    }
}

#[test]
fn heart_moves_when_its_room_is_dug_out() {
    let mut level = LevelBuilder::new(
        "#########
         #HHH#HHH#
         #HHH#HHH#
         #HHH#HHH#
         #########",
    )
    .build();
    let mut sync = ThingSync::default();
    sync.sweep_whole_map(&mut level);
    for y in 1..4 {
        for x in 1..4 {
            level
                .set_slab(TilePos::new(x, y), Slab::new(SlabKind::Claimed, Owner::Red))
                .unwrap();
        }
    }
    sync.sweep_whole_map(&mut level);
    let is_heart = |t: &keeper_core::Thing| t.item_kind() == Some(ItemKind::DungeonHeart);
    assert_eq!(count_things(&level, is_heart), 1);
    assert_eq!(count_on_tile(&level, TilePos::new(6, 2), is_heart), 1);
}

// ── Torches ──────────────────────────────────────────────────────────

#[test]
fn torches_never_double_up_on_lit_ground() {
    let mut level = LevelBuilder::new(
        "#######
         #.....#
         #..W..#
         #.....#
         #######",
    )
    .build();
    // a loose torch south-east of the wall lights its east and south sides
    level
        .add_thing(keeper_core::Thing::new(
            keeper_core::ThingKind::Item(ItemKind::Torch),
            Owner::Red,
            TilePos::new(4, 3).centre_subtile(),
        ))
        .unwrap();
    let mut sync = ThingSync::default();
    let metrics = sync.sweep_whole_map(&mut level);
    assert_eq!(metrics.things_created, 2);
    assert_eq!(count_on_tile(&level, TilePos::new(3, 1), |t| t.is_torch()), 1);
    assert_eq!(count_on_tile(&level, TilePos::new(2, 2), |t| t.is_torch()), 1);
    assert_eq!(count_on_tile(&level, TilePos::new(4, 2), |t| t.is_torch()), 0);
    assert_eq!(count_on_tile(&level, TilePos::new(3, 3), |t| t.is_torch()), 0);
    assert!(sync.sweep_whole_map(&mut level).is_noop());
}
