//! Tile and subtile coordinates and the 9-direction neighbourhood table.
//!
//! A level is a grid of tiles (one slab each); every tile is split into
//! [`SUBTILES_PER_TILE`] × [`SUBTILES_PER_TILE`] subtiles, which is the
//! granularity at which things are placed and columns are stored.
//!
//! Coordinates are signed so that neighbour arithmetic at the map border
//! never underflows; storage decides what an out-of-map read returns.

use smallvec::SmallVec;
use std::fmt;

/// Number of subtiles per tile along each axis.
pub const SUBTILES_PER_TILE: i32 = 3;

/// One of the 9 cells of a 3×3 neighbourhood, centre included.
///
/// The discriminant is the row-major index into a 3×3 block, so
/// `Direction::ALL[d.index()] == d` and the offsets of a direction are
/// also the subtile offsets of the matching subtile inside a tile
/// (minus one).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Direction {
    /// `(-1, -1)`
    NorthWest = 0,
    /// `(0, -1)`
    North = 1,
    /// `(1, -1)`
    NorthEast = 2,
    /// `(-1, 0)`
    West = 3,
    /// `(0, 0)`
    Centre = 4,
    /// `(1, 0)`
    East = 5,
    /// `(-1, 1)`
    SouthWest = 6,
    /// `(0, 1)`
    South = 7,
    /// `(1, 1)`
    SouthEast = 8,
}

impl Direction {
    /// All 9 directions in index order.
    pub const ALL: [Direction; 9] = [
        Direction::NorthWest,
        Direction::North,
        Direction::NorthEast,
        Direction::West,
        Direction::Centre,
        Direction::East,
        Direction::SouthWest,
        Direction::South,
        Direction::SouthEast,
    ];

    /// The 4 cardinal directions, clockwise from north.
    pub const CARDINALS: [Direction; 4] = [
        Direction::North,
        Direction::East,
        Direction::South,
        Direction::West,
    ];

    /// The 4 diagonal directions, clockwise from north-east.
    pub const DIAGONALS: [Direction; 4] = [
        Direction::NorthEast,
        Direction::SouthEast,
        Direction::SouthWest,
        Direction::NorthWest,
    ];

    /// Row-major index of this direction in a 3×3 block.
    pub fn index(self) -> usize {
        self as usize
    }

    /// `(dx, dy)` offset; north is negative y.
    pub fn offset(self) -> (i32, i32) {
        let i = self as i32;
        (i % 3 - 1, i / 3 - 1)
    }

    /// The direction pointing the other way.
    pub fn opposite(self) -> Direction {
        Direction::ALL[8 - self.index()]
    }

    /// Whether this is one of the 4 cardinal directions.
    pub fn is_cardinal(self) -> bool {
        matches!(
            self,
            Direction::North | Direction::East | Direction::South | Direction::West
        )
    }
}

/// Position of a tile (slab) in the level grid.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct TilePos {
    /// Column, growing east.
    pub x: i32,
    /// Row, growing south.
    pub y: i32,
}

impl TilePos {
    /// Create a tile position.
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// The tile `dx`, `dy` away from this one.
    pub fn offset(self, dx: i32, dy: i32) -> Self {
        Self::new(self.x + dx, self.y + dy)
    }

    /// The neighbouring tile in `dir`.
    pub fn step(self, dir: Direction) -> Self {
        let (dx, dy) = dir.offset();
        self.offset(dx, dy)
    }

    /// Subtile `(dx, dy)` inside this tile, with `dx, dy` in `0..3`.
    pub fn subtile(self, dx: i32, dy: i32) -> SubtilePos {
        SubtilePos::new(
            self.x * SUBTILES_PER_TILE + dx,
            self.y * SUBTILES_PER_TILE + dy,
        )
    }

    /// The central subtile of this tile.
    pub fn centre_subtile(self) -> SubtilePos {
        self.subtile(1, 1)
    }

    /// The subtile of this tile lying on the side given by `dir`
    /// (the centre subtile for [`Direction::Centre`]).
    pub fn subtile_toward(self, dir: Direction) -> SubtilePos {
        let (dx, dy) = dir.offset();
        self.subtile(dx + 1, dy + 1)
    }

    /// All 9 subtiles of this tile in row-major order.
    pub fn subtiles(self) -> SmallVec<[SubtilePos; 9]> {
        Direction::ALL
            .iter()
            .map(|&d| self.subtile_toward(d))
            .collect()
    }
}

impl fmt::Display for TilePos {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{}", self.x, self.y)
    }
}

/// Position of a subtile in the level's subtile grid.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct SubtilePos {
    /// Subtile column, growing east.
    pub x: i32,
    /// Subtile row, growing south.
    pub y: i32,
}

impl SubtilePos {
    /// Create a subtile position.
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// The tile containing this subtile.
    pub fn tile(self) -> TilePos {
        TilePos::new(
            self.x.div_euclid(SUBTILES_PER_TILE),
            self.y.div_euclid(SUBTILES_PER_TILE),
        )
    }

    /// Position inside the containing tile, each axis in `0..3`.
    pub fn within_tile(self) -> (i32, i32) {
        (
            self.x.rem_euclid(SUBTILES_PER_TILE),
            self.y.rem_euclid(SUBTILES_PER_TILE),
        )
    }

    /// Whether this is the central subtile of its tile.
    pub fn is_tile_centre(self) -> bool {
        self.within_tile() == (1, 1)
    }

    /// The neighbouring subtile in `dir`.
    pub fn step(self, dir: Direction) -> Self {
        let (dx, dy) = dir.offset();
        Self::new(self.x + dx, self.y + dy)
    }
}

impl fmt::Display for SubtilePos {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{}", self.x, self.y)
    }
}

/// Fixed-point position inside a subtile; 128 is the middle.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct SubPos {
    /// East-west offset.
    pub x: u8,
    /// North-south offset.
    pub y: u8,
}

impl SubPos {
    /// The middle of the subtile.
    pub const CENTRE: SubPos = SubPos { x: 0x80, y: 0x80 };

    /// Create a sub-position.
    pub const fn new(x: u8, y: u8) -> Self {
        Self { x, y }
    }
}

impl Default for SubPos {
    fn default() -> Self {
        Self::CENTRE
    }
}

/// Inclusive rectangle of tiles.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TileRect {
    /// Top-left corner (inclusive).
    pub min: TilePos,
    /// Bottom-right corner (inclusive).
    pub max: TilePos,
}

impl TileRect {
    /// Rectangle spanning `a` and `b`, whichever order they come in.
    pub fn new(a: TilePos, b: TilePos) -> Self {
        Self {
            min: TilePos::new(a.x.min(b.x), a.y.min(b.y)),
            max: TilePos::new(a.x.max(b.x), a.y.max(b.y)),
        }
    }

    /// Square of side `2 * radius + 1` centred on `centre`.
    pub fn around(centre: TilePos, radius: i32) -> Self {
        Self::new(
            centre.offset(-radius, -radius),
            centre.offset(radius, radius),
        )
    }

    /// Intersect with a `tiles_x` × `tiles_y` map. `None` if disjoint.
    pub fn clip(self, tiles_x: i32, tiles_y: i32) -> Option<Self> {
        let min = TilePos::new(self.min.x.max(0), self.min.y.max(0));
        let max = TilePos::new(self.max.x.min(tiles_x - 1), self.max.y.min(tiles_y - 1));
        if min.x > max.x || min.y > max.y {
            return None;
        }
        Some(Self { min, max })
    }

    /// Whether `tile` lies inside the rectangle.
    pub fn contains(&self, tile: TilePos) -> bool {
        tile.x >= self.min.x && tile.x <= self.max.x && tile.y >= self.min.y && tile.y <= self.max.y
    }

    /// Number of tiles covered.
    pub fn area(&self) -> usize {
        ((self.max.x - self.min.x + 1) as usize) * ((self.max.y - self.min.y + 1) as usize)
    }

    /// Tiles in row-major order (y outer, x inner).
    pub fn tiles(self) -> impl Iterator<Item = TilePos> {
        (self.min.y..=self.max.y)
            .flat_map(move |y| (self.min.x..=self.max.x).map(move |x| TilePos::new(x, y)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn direction_offsets_match_index_layout() {
        assert_eq!(Direction::NorthWest.offset(), (-1, -1));
        assert_eq!(Direction::North.offset(), (0, -1));
        assert_eq!(Direction::Centre.offset(), (0, 0));
        assert_eq!(Direction::East.offset(), (1, 0));
        assert_eq!(Direction::SouthEast.offset(), (1, 1));
        for d in Direction::ALL {
            assert_eq!(Direction::ALL[d.index()], d);
        }
    }

    #[test]
    fn opposite_is_involution() {
        for d in Direction::ALL {
            assert_eq!(d.opposite().opposite(), d);
            let (dx, dy) = d.offset();
            assert_eq!(d.opposite().offset(), (-dx, -dy));
        }
        assert_eq!(Direction::Centre.opposite(), Direction::Centre);
    }

    #[test]
    fn tile_subtiles_are_row_major() {
        let subs = TilePos::new(2, 5).subtiles();
        assert_eq!(subs.len(), 9);
        assert_eq!(subs[0], SubtilePos::new(6, 15));
        assert_eq!(subs[4], SubtilePos::new(7, 16));
        assert_eq!(subs[8], SubtilePos::new(8, 17));
        assert!(subs[4].is_tile_centre());
    }

    #[test]
    fn subtile_toward_edges() {
        let t = TilePos::new(1, 1);
        assert_eq!(t.subtile_toward(Direction::West), SubtilePos::new(3, 4));
        assert_eq!(t.subtile_toward(Direction::East), SubtilePos::new(5, 4));
        assert_eq!(t.subtile_toward(Direction::North), SubtilePos::new(4, 3));
        assert_eq!(t.subtile_toward(Direction::South), SubtilePos::new(4, 5));
    }

    #[test]
    fn negative_subtile_maps_to_negative_tile() {
        assert_eq!(SubtilePos::new(-1, 0).tile(), TilePos::new(-1, 0));
        assert_eq!(SubtilePos::new(-1, 0).within_tile(), (2, 0));
    }

    #[test]
    fn rect_clip_and_iterate() {
        let r = TileRect::around(TilePos::new(0, 0), 1);
        let clipped = r.clip(10, 10).unwrap();
        assert_eq!(clipped.min, TilePos::new(0, 0));
        assert_eq!(clipped.max, TilePos::new(1, 1));
        let tiles: Vec<_> = clipped.tiles().collect();
        assert_eq!(
            tiles,
            vec![
                TilePos::new(0, 0),
                TilePos::new(1, 0),
                TilePos::new(0, 1),
                TilePos::new(1, 1)
            ]
        );
        assert!(TileRect::around(TilePos::new(-5, -5), 1).clip(10, 10).is_none());
    }

    proptest! {
        #[test]
        fn subtile_tile_roundtrip(tx in -5i32..50, ty in -5i32..50, dx in 0i32..3, dy in 0i32..3) {
            let tile = TilePos::new(tx, ty);
            let sub = tile.subtile(dx, dy);
            prop_assert_eq!(sub.tile(), tile);
            prop_assert_eq!(sub.within_tile(), (dx, dy));
        }

        #[test]
        fn rect_area_matches_iteration(ax in 0i32..20, ay in 0i32..20, bx in 0i32..20, by in 0i32..20) {
            let r = TileRect::new(TilePos::new(ax, ay), TilePos::new(bx, by));
            prop_assert_eq!(r.tiles().count(), r.area());
            prop_assert!(r.tiles().all(|t| r.contains(t)));
        }
    }
}
