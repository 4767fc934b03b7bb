//! Slab-driven thing synchronization for Keeper levels.
//!
//! Given a [`Level`](keeper_map::Level)'s slabs and columns, a sweep
//! derives the things that belong on each tile and brings the level in
//! line: missing furniture is created, duplicates and leftovers are
//! deleted, kept things are re-owned, and doors, keys, heart flames and
//! torches are placed at heights taken from the surrounding columns.
//!
//! # Architecture
//!
//! - [`classify`] gives each room tile a [`ShapeRole`] from its 8
//!   neighbours.
//! - [`rooms`] maps each room kind to its per-role handlers, which lean on
//!   the keep-one primitive in [`reconcile`].
//! - [`doors`] keeps one door per door tile with its lock and orientation.
//! - [`torches`] lights the floor next to torch walls.
//! - [`height`] positions things vertically.
//! - [`sweep`] drives all of the above over a region through
//!   [`ThingSync`], recording [`SweepMetrics`].
//! - [`verify`] is a separate read-only validator.
//!
//! Sweeps over a region that is already in step change nothing, so a
//! second whole-map sweep always reports [`SweepMetrics::is_noop`].

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod census;
pub mod classify;
pub mod cleanup;
pub mod config;
pub mod context;
pub mod doors;
pub mod error;
pub mod factory;
pub mod height;
pub mod metrics;
pub mod reconcile;
pub mod rooms;
pub mod sweep;
pub mod torches;
pub mod verify;

pub use classify::{classify, ShapeRole};
pub use cleanup::remove_noncrucial_room_things;
pub use config::SyncConfig;
pub use context::SweepContext;
pub use doors::{door_lock, set_door_lock};
pub use error::{Severity, ThingFault, VerifyFailure};
pub use metrics::SweepMetrics;
pub use sweep::ThingSync;
pub use verify::verify_things;
