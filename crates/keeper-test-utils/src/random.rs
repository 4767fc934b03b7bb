//! Seeded random levels.
//!
//! Same seed, same level. Levels mix rooms, walls, liquids and doors with
//! a scattering of things of every kind, some of them misplaced, so a
//! sweep has plenty to fix.

use keeper_core::{
    CreatureKind, Door, DoorKind, DoorLock, DoorOrientation, EffectKind, ItemKind, Owner, Slab,
    SlabKind, Thing, ThingKind, TilePos, TrapKind,
};
use keeper_map::{Level, LevelConfig};
use rand_chacha::rand_core::{RngCore, SeedableRng};
use rand_chacha::ChaCha8Rng;

use crate::{column_height_for, is_claimable};

const ROOMS: [SlabKind; 17] = [
    SlabKind::Claimed,
    SlabKind::Portal,
    SlabKind::Treasure,
    SlabKind::Library,
    SlabKind::PrisonCase,
    SlabKind::Torture,
    SlabKind::Training,
    SlabKind::DungeonHeart,
    SlabKind::Workshop,
    SlabKind::Scavenger,
    SlabKind::Temple,
    SlabKind::Graveyard,
    SlabKind::Hatchery,
    SlabKind::Lair,
    SlabKind::Barracks,
    SlabKind::Bridge,
    SlabKind::GuardPost,
];

const SCATTER: [SlabKind; 13] = [
    SlabKind::Rock,
    SlabKind::Gold,
    SlabKind::TorchDirt,
    SlabKind::WallTorch,
    SlabKind::WallDrape,
    SlabKind::Path,
    SlabKind::Lava,
    SlabKind::Water,
    SlabKind::Claimed,
    SlabKind::DoorWood1,
    SlabKind::DoorBraced2,
    SlabKind::DoorIron1,
    SlabKind::DoorMagic2,
];

const ITEMS: [ItemKind; 14] = [
    ItemKind::Torch,
    ItemKind::Candlestick,
    ItemKind::Anvil,
    ItemKind::TortureSpike,
    ItemKind::Gravestone,
    ItemKind::TrainingPost,
    ItemKind::DungeonHeart,
    ItemKind::HeartFlameRed,
    ItemKind::HeartFlameBlue,
    ItemKind::GuardFlagBlue,
    ItemKind::FlagPost,
    ItemKind::PrisonBar,
    ItemKind::SpinningKey,
    ItemKind::Other(12),
];

const DOOR_KINDS: [DoorKind; 4] = [DoorKind::Wood, DoorKind::Braced, DoorKind::Iron, DoorKind::Magic];

struct Dice(ChaCha8Rng);

impl Dice {
    fn below(&mut self, n: u32) -> u32 {
        self.0.next_u32() % n
    }

    fn one_in(&mut self, n: u32) -> bool {
        self.below(n) == 0
    }

    fn pick<T: Copy>(&mut self, from: &[T]) -> T {
        from[self.below(from.len() as u32) as usize]
    }
}

/// A `tiles_x` × `tiles_y` level generated from `seed`.
///
/// Doors only ever stand between a pair of walls, so their orientation
/// settles after one sweep.
pub fn random_level(seed: u64, tiles_x: u32, tiles_y: u32) -> Level {
    let mut dice = Dice(ChaCha8Rng::seed_from_u64(seed));
    let mut level = Level::new(LevelConfig::new(tiles_x, tiles_y)).expect("valid map size");
    let (w, h) = (level.tiles_x(), level.tiles_y());

    let mut slabs = vec![Slab::new(SlabKind::Earth, Owner::Unset); (w * h) as usize];
    let rooms = 1 + (w * h) as u32 / 24;
    for _ in 0..rooms {
        let kind = dice.pick(&ROOMS);
        let owner = dice.pick(&Owner::ALL);
        let (rw, rh) = (1 + dice.below(5) as i32, 1 + dice.below(5) as i32);
        let (x0, y0) = (dice.below(w as u32) as i32, dice.below(h as u32) as i32);
        for y in y0..(y0 + rh).min(h) {
            for x in x0..(x0 + rw).min(w) {
                slabs[(y * w + x) as usize] = Slab::new(kind, owner);
            }
        }
    }
    for slab in &mut slabs {
        if dice.one_in(10) {
            let kind = dice.pick(&SCATTER);
            *slab = Slab::new(kind, dice.pick(&Owner::ALL));
        }
        if !is_claimable(slab.kind) {
            slab.owner = Owner::Unset;
        }
    }

    let tall = |slabs: &[Slab], x: i32, y: i32| {
        x < 0 || y < 0 || x >= w || y >= h || slabs[(y * w + x) as usize].kind.is_tall()
    };
    for y in 0..h {
        for x in 0..w {
            let i = (y * w + x) as usize;
            let walled = (tall(&slabs, x - 1, y) && tall(&slabs, x + 1, y))
                || (tall(&slabs, x, y - 1) && tall(&slabs, x, y + 1));
            if slabs[i].kind.is_door() && !walled {
                slabs[i].kind = SlabKind::Claimed;
            }
        }
    }

    for (i, slab) in slabs.iter().enumerate() {
        let tile = TilePos::new(i as i32 % w, i as i32 / w);
        level.set_slab(tile, *slab).expect("tile on map");
        for sub in tile.subtiles() {
            level
                .set_column_height(sub, column_height_for(slab.kind))
                .expect("subtile on map");
        }
    }

    for tile in level.bounds().tiles() {
        for sub in tile.subtiles() {
            if dice.one_in(14) {
                let thing = Thing::new(random_kind(&mut dice), dice.pick(&Owner::ALL), sub);
                level.add_thing(thing).expect("subtile on map");
            }
        }
    }
    level
}

fn random_kind(dice: &mut Dice) -> ThingKind {
    match dice.below(8) {
        0 => ThingKind::Door(Door {
            kind: dice.pick(&DOOR_KINDS),
            orientation: if dice.one_in(2) {
                DoorOrientation::NorthSouthPass
            } else {
                DoorOrientation::EastWestPass
            },
            lock: if dice.one_in(3) {
                DoorLock::Locked
            } else {
                DoorLock::Unlocked
            },
        }),
        1 => ThingKind::Creature {
            kind: CreatureKind(1 + dice.below(u32::from(CreatureKind::MAX_CODE)) as u8),
            level: 1 + dice.below(10) as u8,
        },
        2 => ThingKind::Trap(TrapKind(1 + dice.below(u32::from(TrapKind::MAX_CODE)) as u8)),
        3 => ThingKind::RoomEffect(dice.pick(&[
            EffectKind::EntranceIce,
            EffectKind::DryIce,
            EffectKind::Lava,
        ])),
        4 => ThingKind::HeroGate {
            number: 1 + dice.below(6) as u16,
        },
        _ => ThingKind::Item(dice.pick(&ITEMS)),
    }
}
