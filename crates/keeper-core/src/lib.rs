//! Core types for the Keeper level engine.
//!
//! This is the leaf crate with zero internal dependencies. It defines
//! the vocabulary shared by the rest of the workspace: tile and subtile
//! coordinates, the 9-direction neighbourhood table, slab kinds and
//! owners, and the tagged [`Thing`] model with its classification
//! predicates.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod coord;
pub mod slab;
pub mod thing;

pub use coord::{Direction, SubPos, SubtilePos, TilePos, TileRect, SUBTILES_PER_TILE};
pub use slab::{Owner, Slab, SlabKind};
pub use thing::{
    CreatureKind, Door, DoorKind, DoorLock, DoorOrientation, EffectKind, ExpectedGround, ItemKind,
    RoomThing, Thing, ThingKind, TrapKind, MAX_HEIGHT,
};
