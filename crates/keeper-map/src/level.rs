//! Level storage.
//!
//! [`Level`] owns three grids:
//!
//! - slabs, one per tile;
//! - column heights, one per subtile;
//! - thing lists, one ordered list of [`ThingId`]s per subtile, over a
//!   [`ThingArena`].
//!
//! Reads that take a coordinate are total: off-map tiles read as
//! [`Slab::BORDER`], off-map columns as the configured border height and
//! off-map thing lists as empty. Writes and id lookups return
//! [`MapError`].

use keeper_arena::{ArenaConfig, ThingArena, ThingId};
use keeper_core::{Direction, Slab, SubtilePos, Thing, TilePos, TileRect, SUBTILES_PER_TILE};
use smallvec::SmallVec;

use crate::config::{ConfigError, LevelConfig};
use crate::error::MapError;
use crate::surround::SlabSurround;

/// Ordered ids of the things on one subtile.
pub type ThingList = SmallVec<[ThingId; 4]>;

/// Slab grid, column grid and per-subtile thing lists of one level.
#[derive(Clone, Debug)]
pub struct Level {
    config: LevelConfig,
    slabs: Vec<Slab>,
    columns: Vec<u16>,
    lists: Vec<ThingList>,
    arena: ThingArena,
}

impl Level {
    /// Create a level of solid rock with every column at the border height.
    pub fn new(config: LevelConfig) -> Result<Self, ConfigError> {
        Self::with_arena_config(config, &ArenaConfig::default())
    }

    /// Like [`Level::new`], pre-sizing thing storage with `arena`.
    pub fn with_arena_config(
        config: LevelConfig,
        arena: &ArenaConfig,
    ) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self {
            slabs: vec![Slab::BORDER; config.tile_count()],
            columns: vec![config.border_column_height; config.subtile_count()],
            lists: vec![ThingList::new(); config.subtile_count()],
            arena: ThingArena::with_config(arena),
            config,
        })
    }

    // ── Dimensions ─────────────────────────────────────────────────

    /// The configuration the level was built from.
    pub fn config(&self) -> &LevelConfig {
        &self.config
    }

    /// Width in tiles.
    pub fn tiles_x(&self) -> i32 {
        self.config.tiles_x as i32
    }

    /// Height in tiles.
    pub fn tiles_y(&self) -> i32 {
        self.config.tiles_y as i32
    }

    /// Width in subtiles.
    pub fn subtiles_x(&self) -> i32 {
        self.tiles_x() * SUBTILES_PER_TILE
    }

    /// Height in subtiles.
    pub fn subtiles_y(&self) -> i32 {
        self.tiles_y() * SUBTILES_PER_TILE
    }

    /// The whole map as a rectangle.
    pub fn bounds(&self) -> TileRect {
        TileRect::new(
            TilePos::new(0, 0),
            TilePos::new(self.tiles_x() - 1, self.tiles_y() - 1),
        )
    }

    /// Whether `tile` lies on the map.
    pub fn contains_tile(&self, tile: TilePos) -> bool {
        tile.x >= 0 && tile.y >= 0 && tile.x < self.tiles_x() && tile.y < self.tiles_y()
    }

    /// Whether `subtile` lies on the map.
    pub fn contains_subtile(&self, subtile: SubtilePos) -> bool {
        subtile.x >= 0
            && subtile.y >= 0
            && subtile.x < self.subtiles_x()
            && subtile.y < self.subtiles_y()
    }

    /// The 9 subtiles of `tile`, row-major.
    pub fn subtiles_of(&self, tile: TilePos) -> SmallVec<[SubtilePos; 9]> {
        tile.subtiles()
    }

    fn tile_index(&self, tile: TilePos) -> Option<usize> {
        self.contains_tile(tile)
            .then(|| tile.y as usize * self.config.tiles_x as usize + tile.x as usize)
    }

    fn subtile_index(&self, subtile: SubtilePos) -> Option<usize> {
        self.contains_subtile(subtile)
            .then(|| subtile.y as usize * self.subtiles_x() as usize + subtile.x as usize)
    }

    // ── Slabs ──────────────────────────────────────────────────────

    /// Slab at `tile`; rock owned by nobody off the map.
    pub fn slab(&self, tile: TilePos) -> Slab {
        self.tile_index(tile).map_or(Slab::BORDER, |i| self.slabs[i])
    }

    /// Replace the slab at `tile`.
    pub fn set_slab(&mut self, tile: TilePos, slab: Slab) -> Result<(), MapError> {
        let i = self
            .tile_index(tile)
            .ok_or(MapError::TileOutOfBounds { tile })?;
        self.slabs[i] = slab;
        Ok(())
    }

    /// `tile` and its 8 neighbours.
    pub fn surround(&self, tile: TilePos) -> SlabSurround {
        SlabSurround::new(Direction::ALL.map(|d| self.slab(tile.step(d))))
    }

    // ── Columns ────────────────────────────────────────────────────

    /// Floor height of the column at `subtile`; the border height off the map.
    pub fn column_height(&self, subtile: SubtilePos) -> u16 {
        self.subtile_index(subtile)
            .map_or(self.config.border_column_height, |i| self.columns[i])
    }

    /// Replace the column height at `subtile`.
    pub fn set_column_height(&mut self, subtile: SubtilePos, height: u16) -> Result<(), MapError> {
        let i = self
            .subtile_index(subtile)
            .ok_or(MapError::SubtileOutOfBounds { subtile })?;
        self.columns[i] = height;
        Ok(())
    }

    /// Column heights of `subtile` and its 8 neighbours, in [`Direction`] order.
    pub fn column_surround(&self, subtile: SubtilePos) -> [u16; 9] {
        Direction::ALL.map(|d| self.column_height(subtile.step(d)))
    }

    // ── Things ─────────────────────────────────────────────────────

    /// Ids of the things on `subtile`, in list order. Empty off the map.
    pub fn things_at(&self, subtile: SubtilePos) -> &[ThingId] {
        match self.subtile_index(subtile) {
            Some(i) => &self.lists[i],
            None => &[],
        }
    }

    /// Borrow a thing.
    pub fn thing(&self, id: ThingId) -> Result<&Thing, MapError> {
        Ok(self.arena.get(id)?)
    }

    /// Mutably borrow a thing.
    ///
    /// The list a thing is filed under is fixed when it is added; move a
    /// thing between subtiles with [`detach_thing`](Self::detach_thing)
    /// followed by [`add_thing`](Self::add_thing), never by editing
    /// `subtile` in place.
    pub fn thing_mut(&mut self, id: ThingId) -> Result<&mut Thing, MapError> {
        Ok(self.arena.get_mut(id)?)
    }

    /// Append `thing` to the list of the subtile it names.
    pub fn add_thing(&mut self, thing: Thing) -> Result<ThingId, MapError> {
        let subtile = thing.subtile;
        let i = self
            .subtile_index(subtile)
            .ok_or(MapError::SubtileOutOfBounds { subtile })?;
        let id = self.arena.insert(thing);
        self.lists[i].push(id);
        Ok(id)
    }

    /// Remove a thing from its list and from storage, handing it back.
    pub fn detach_thing(&mut self, id: ThingId) -> Result<Thing, MapError> {
        let subtile = self.arena.get(id)?.subtile;
        if let Some(i) = self.subtile_index(subtile) {
            self.lists[i].retain(|other| *other != id);
        }
        Ok(self.arena.remove(id)?)
    }

    /// Remove a thing for good.
    pub fn delete_thing(&mut self, id: ThingId) -> Result<(), MapError> {
        self.detach_thing(id).map(drop)
    }

    /// Every thing, in row-major subtile order then list order.
    pub fn all_things(&self) -> impl Iterator<Item = (ThingId, &Thing)> + '_ {
        self.lists.iter().flatten().filter_map(move |&id| {
            self.arena.get(id).ok().map(|thing| (id, thing))
        })
    }

    /// Ids of every thing, in the order of [`all_things`](Self::all_things).
    pub fn thing_ids(&self) -> Vec<ThingId> {
        self.lists.iter().flatten().copied().collect()
    }

    /// Number of things on the level.
    pub fn thing_count(&self) -> usize {
        self.arena.len()
    }
}
