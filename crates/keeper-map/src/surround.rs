//! The 3×3 slab neighbourhood of one tile.

use keeper_core::{Direction, Slab};

/// Slabs of a tile and its 8 neighbours, indexed by [`Direction`].
///
/// Built by [`Level::surround`](crate::Level::surround); neighbours off the
/// map read as [`Slab::BORDER`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SlabSurround {
    slabs: [Slab; 9],
}

impl SlabSurround {
    /// Wrap 9 slabs given in [`Direction`] index order.
    pub fn new(slabs: [Slab; 9]) -> Self {
        Self { slabs }
    }

    /// The centre slab.
    pub fn centre(&self) -> Slab {
        self.slabs[Direction::Centre.index()]
    }

    /// The slab in `dir`.
    pub fn get(&self, dir: Direction) -> Slab {
        self.slabs[dir.index()]
    }

    /// Whether the slab in `dir` has the centre's kind and owner.
    pub fn matches(&self, dir: Direction) -> bool {
        self.get(dir).matches(&self.centre())
    }

    /// Bitmask of matching neighbours, bit `i` for `Direction::ALL[i]`.
    /// The centre bit is always set.
    pub fn match_mask(&self) -> u16 {
        Direction::ALL
            .iter()
            .filter(|&&d| self.matches(d))
            .fold(0, |mask, d| mask | (1 << d.index()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use keeper_core::{Owner, SlabKind};

    #[test]
    fn matching_needs_owner_too() {
        let lib = Slab::new(SlabKind::Library, Owner::Red);
        let mut slabs = [lib; 9];
        slabs[Direction::North.index()] = Slab::new(SlabKind::Library, Owner::Blue);
        slabs[Direction::East.index()] = Slab::new(SlabKind::Earth, Owner::Red);
        let s = SlabSurround::new(slabs);
        assert!(s.matches(Direction::South));
        assert!(!s.matches(Direction::North));
        assert!(!s.matches(Direction::East));
        assert!(s.matches(Direction::Centre));
        assert_eq!(s.match_mask().count_ones(), 7);
    }
}
