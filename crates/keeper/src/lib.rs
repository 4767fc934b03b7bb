//! Keeper: slab-driven thing synchronization for dungeon level editing.
//!
//! This is the top-level facade crate that re-exports the public API of
//! the Keeper sub-crates. For most users, adding `keeper` as a single
//! dependency is sufficient.
//!
//! # Quick start
//!
//! ```rust
//! use keeper::prelude::*;
//!
//! // A 5x5 level of rock with a 3x3 workshop in the middle.
//! let mut level = Level::new(LevelConfig::new(5, 5)).unwrap();
//! for y in 1..4 {
//!     for x in 1..4 {
//!         let slab = Slab::new(SlabKind::Workshop, Owner::Red);
//!         level.set_slab(TilePos::new(x, y), slab).unwrap();
//!     }
//! }
//!
//! let mut sync = ThingSync::default();
//! let metrics = sync.sweep_whole_map(&mut level);
//! // an anvil in each corner and a machine in the middle
//! assert_eq!(metrics.things_created, 5);
//! assert!(sync.sweep_whole_map(&mut level).is_noop());
//! assert_eq!(sync.verify(&level), Ok(()));
//! ```
//!
//! # Modules
//!
//! | Module | Sub-crate | Contents |
//! |--------|-----------|----------|
//! | [`types`] | `keeper-core` | Coordinates, slabs, owners, things |
//! | [`arena`] | `keeper-arena` | Generational thing storage and [`arena::ThingId`] |
//! | [`map`] | `keeper-map` | The [`map::Level`] grids |
//! | [`sync`] | `keeper-sync` | Sweeps, door locks, validation |

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

/// Coordinates, slabs, owners and things (`keeper-core`).
pub use keeper_core as types;

/// Generational thing storage (`keeper-arena`).
///
/// Things are addressed by [`arena::ThingId`]; a deleted thing's id goes
/// stale instead of being reused.
pub use keeper_arena as arena;

/// Level storage (`keeper-map`).
///
/// [`map::Level`] holds the slab, column and thing list grids.
pub use keeper_map as map;

/// Thing synchronization (`keeper-sync`).
///
/// [`sync::ThingSync`] drives sweeps; [`sync::set_door_lock`] and
/// [`sync::verify_things`] are the editor-facing extras.
pub use keeper_sync as sync;

/// Common imports for typical Keeper usage.
///
/// ```rust
/// use keeper::prelude::*;
/// ```
pub mod prelude {
    // Core types
    pub use keeper_core::{
        Direction, Door, DoorKind, DoorLock, DoorOrientation, ItemKind, Owner, Slab, SlabKind,
        SubtilePos, Thing, ThingKind, TilePos, TileRect,
    };

    // Storage
    pub use keeper_arena::ThingId;
    pub use keeper_map::{Level, LevelConfig, MapError};

    // Sync
    pub use keeper_sync::{
        door_lock, set_door_lock, SweepMetrics, SyncConfig, ThingSync, VerifyFailure,
    };
}
