//! Thing handles.
//!
//! A [`ThingId`] names one occupancy of one arena slot. The generation
//! makes staleness an O(1) comparison.

use std::fmt;

/// Handle to a thing stored in a [`ThingArena`](crate::ThingArena).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[must_use]
pub struct ThingId {
    pub(crate) index: u32,
    pub(crate) generation: u32,
}

impl ThingId {
    /// Create a handle from raw parts.
    pub(crate) fn new(index: u32, generation: u32) -> Self {
        Self { index, generation }
    }

    /// Slot index.
    pub fn index(&self) -> u32 {
        self.index
    }

    /// Occupancy generation of the slot when the handle was issued.
    pub fn generation(&self) -> u32 {
        self.generation
    }
}

impl fmt::Display for ThingId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "thing#{}v{}", self.index, self.generation)
    }
}
