//! Test utilities for Keeper development.
//!
//! [`LevelBuilder`] turns an ASCII map into a [`Level`], one glyph per
//! tile, and [`random_level`] produces seeded random levels for property
//! tests and benchmarks.

#![forbid(unsafe_code)]
#![allow(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

mod random;

pub use random::random_level;

use keeper_core::{Owner, Slab, SlabKind, Thing, TilePos};
use keeper_map::{Level, LevelConfig};

/// Slab kind for an ASCII glyph.
///
/// ```text
/// #  earth        X  rock         g  gold        *  gems
/// T  torch dirt   W  wall+torch   w  wall drape  .  claimed
/// ,  path         ~  lava         =  water       P  portal
/// $  treasure     L  library      p  prison      x  torture
/// r  training     H  heart        k  workshop    s  scavenger
/// e  temple       G  graveyard    h  hatchery    l  lair
/// b  barracks     B  bridge       u  guard post
/// 1  wood door    2  braced door  3  iron door   4  magic door
/// ```
pub fn glyph_kind(glyph: char) -> Option<SlabKind> {
    let kind = match glyph {
        '#' => SlabKind::Earth,
        'X' => SlabKind::Rock,
        'g' => SlabKind::Gold,
        '*' => SlabKind::Gems,
        'T' => SlabKind::TorchDirt,
        'W' => SlabKind::WallTorch,
        'w' => SlabKind::WallDrape,
        '.' => SlabKind::Claimed,
        ',' => SlabKind::Path,
        '~' => SlabKind::Lava,
        '=' => SlabKind::Water,
        'P' => SlabKind::Portal,
        '$' => SlabKind::Treasure,
        'L' => SlabKind::Library,
        'p' => SlabKind::PrisonCase,
        'x' => SlabKind::Torture,
        'r' => SlabKind::Training,
        'H' => SlabKind::DungeonHeart,
        'k' => SlabKind::Workshop,
        's' => SlabKind::Scavenger,
        'e' => SlabKind::Temple,
        'G' => SlabKind::Graveyard,
        'h' => SlabKind::Hatchery,
        'l' => SlabKind::Lair,
        'b' => SlabKind::Barracks,
        'B' => SlabKind::Bridge,
        'u' => SlabKind::GuardPost,
        '1' => SlabKind::DoorWood1,
        '2' => SlabKind::DoorBraced1,
        '3' => SlabKind::DoorIron1,
        '4' => SlabKind::DoorMagic1,
        _ => return None,
    };
    Some(kind)
}

/// Whether a slab of `kind` carries an owner when built.
pub fn is_claimable(kind: SlabKind) -> bool {
    !matches!(
        kind,
        SlabKind::Rock
            | SlabKind::Gold
            | SlabKind::Earth
            | SlabKind::TorchDirt
            | SlabKind::Gems
            | SlabKind::Path
            | SlabKind::Lava
            | SlabKind::Water
    )
}

/// Column height the builder gives every subtile of a `kind` slab.
pub fn column_height_for(kind: SlabKind) -> u16 {
    if kind.is_tall() {
        LevelConfig::DEFAULT_BORDER_HEIGHT
    } else if matches!(kind, SlabKind::Lava | SlabKind::Water) {
        0
    } else {
        1
    }
}

/// Builds a level from an ASCII map.
///
/// Leading and trailing whitespace on each row is ignored, as are blank
/// rows, so maps can be written as indented raw strings.
pub struct LevelBuilder {
    rows: Vec<Vec<char>>,
    owner: Owner,
    overrides: Vec<(TilePos, Owner)>,
}

impl LevelBuilder {
    pub fn new(map: &str) -> Self {
        let rows: Vec<Vec<char>> = map
            .lines()
            .map(str::trim)
            .filter(|row| !row.is_empty())
            .map(|row| row.chars().collect())
            .collect();
        assert!(!rows.is_empty(), "empty map");
        let width = rows[0].len();
        assert!(
            rows.iter().all(|r| r.len() == width),
            "ragged map: every row needs {width} glyphs"
        );
        Self {
            rows,
            owner: Owner::Red,
            overrides: Vec::new(),
        }
    }

    /// Owner of every claimable slab (default red).
    pub fn owner(mut self, owner: Owner) -> Self {
        self.owner = owner;
        self
    }

    /// Owner of one tile, whatever its kind.
    pub fn owner_at(mut self, x: i32, y: i32, owner: Owner) -> Self {
        self.overrides.push((TilePos::new(x, y), owner));
        self
    }

    pub fn build(self) -> Level {
        let config = LevelConfig::new(self.rows[0].len() as u32, self.rows.len() as u32);
        let mut level = Level::new(config).expect("valid map size");
        for (y, row) in self.rows.iter().enumerate() {
            for (x, &glyph) in row.iter().enumerate() {
                let kind = glyph_kind(glyph)
                    .unwrap_or_else(|| panic!("unknown glyph {glyph:?} at {x},{y}"));
                let owner = if is_claimable(kind) {
                    self.owner
                } else {
                    Owner::Unset
                };
                let tile = TilePos::new(x as i32, y as i32);
                level.set_slab(tile, Slab::new(kind, owner)).expect("tile on map");
                let height = column_height_for(kind);
                for sub in tile.subtiles() {
                    level.set_column_height(sub, height).expect("subtile on map");
                }
            }
        }
        for (tile, owner) in self.overrides {
            let kind = level.slab(tile).kind;
            level.set_slab(tile, Slab::new(kind, owner)).expect("tile on map");
        }
        level
    }
}

/// Number of things on the level accepted by `matches`.
pub fn count_things(level: &Level, matches: impl Fn(&Thing) -> bool) -> usize {
    level.all_things().filter(|(_, t)| matches(t)).count()
}

/// Number of things on `tile` accepted by `matches`.
pub fn count_on_tile(level: &Level, tile: TilePos, matches: impl Fn(&Thing) -> bool) -> usize {
    count_things(level, |t| t.tile() == tile && matches(t))
}

/// Every thing on the level, in scan order. Handy for before/after diffs.
pub fn snapshot(level: &Level) -> Vec<Thing> {
    level.all_things().map(|(_, t)| t.clone()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builds_slabs_owners_and_columns() {
        let level = LevelBuilder::new(
            "#X#
             .x~",
        )
        .owner(Owner::Blue)
        .owner_at(1, 1, Owner::Green)
        .build();
        assert_eq!((level.tiles_x(), level.tiles_y()), (3, 2));
        assert_eq!(level.slab(TilePos::new(1, 0)).kind, SlabKind::Rock);
        assert_eq!(level.slab(TilePos::new(0, 0)).owner, Owner::Unset);
        assert_eq!(level.slab(TilePos::new(0, 1)).owner, Owner::Blue);
        assert_eq!(
            level.slab(TilePos::new(1, 1)),
            Slab::new(SlabKind::Torture, Owner::Green)
        );
        assert_eq!(level.slab(TilePos::new(2, 1)).owner, Owner::Unset);
        let wall = TilePos::new(0, 0).centre_subtile();
        let lava = TilePos::new(2, 1).subtile(0, 2);
        assert_eq!(level.column_height(wall), 5);
        assert_eq!(level.column_height(lava), 0);
        assert_eq!(level.thing_count(), 0);
    }

    #[test]
    #[should_panic(expected = "ragged map")]
    fn ragged_rows_are_rejected() {
        LevelBuilder::new("###\n##");
    }
}
