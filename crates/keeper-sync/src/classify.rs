//! Local shape of a room tile.
//!
//! A tile's [`ShapeRole`] depends only on which of its 8 neighbours share
//! its slab kind and owner. Rules are tried in precedence order, first
//! match wins:
//!
//! 1. **Inside**: all 8 neighbours match.
//! 2. **Near-inside**: all 4 cardinals match but some diagonal does not.
//! 3. **Edge**: some half of the ring matches, i.e. a cardinal, the next
//!    diagonal, the next cardinal, the next diagonal and the next cardinal,
//!    going clockwise.
//! 4. **Corner**: two adjacent cardinals match and the other two do not.
//! 5. **Floor**: anything else.

use keeper_core::Direction;
use keeper_map::SlabSurround;

/// Shape role of a tile within its room.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ShapeRole {
    /// Default role; nothing more specific matched.
    Floor,
    /// Along one side of a room.
    Edge,
    /// At a convex corner.
    Corner,
    /// Fully surrounded.
    Inside,
    /// Surrounded on all 4 sides but not on every diagonal.
    NearInside,
}

impl ShapeRole {
    /// Every role, in precedence order from least to most specific.
    pub const ALL: [ShapeRole; 5] = [
        ShapeRole::Floor,
        ShapeRole::Edge,
        ShapeRole::Corner,
        ShapeRole::Inside,
        ShapeRole::NearInside,
    ];
}

/// Neighbours clockwise from north; cardinals sit at even positions.
const RING: [Direction; 8] = [
    Direction::North,
    Direction::NorthEast,
    Direction::East,
    Direction::SouthEast,
    Direction::South,
    Direction::SouthWest,
    Direction::West,
    Direction::NorthWest,
];

/// Classify the tile at the centre of `surround`.
pub fn classify(surround: &SlabSurround) -> ShapeRole {
    classify_mask(surround.match_mask())
}

/// Classify from a neighbour match mask, bit `i` set when
/// `Direction::ALL[i]` matches the centre. The centre bit is ignored.
pub fn classify_mask(mask: u16) -> ShapeRole {
    let at = |ring: usize| mask & (1 << RING[ring % 8].index()) != 0;

    let cardinals = (0..8).step_by(2).all(at);
    if cardinals {
        let diagonals = (1..8).step_by(2).all(at);
        return if diagonals {
            ShapeRole::Inside
        } else {
            ShapeRole::NearInside
        };
    }

    let edge = (0..8)
        .step_by(2)
        .any(|start| (start..start + 5).all(at));
    if edge {
        return ShapeRole::Edge;
    }

    let corner = (0..8).step_by(2).any(|start| {
        at(start) && at(start + 2) && !at(start + 4) && !at(start + 6)
    });
    if corner {
        return ShapeRole::Corner;
    }

    ShapeRole::Floor
}
