//! Level storage for the Keeper level engine.
//!
//! A [`Level`] is the contract the synchronization engine works
//! against: slab reads and writes at tile resolution, column heights and
//! ordered thing lists at subtile resolution, and add/detach/delete of
//! things through stable [`ThingId`](keeper_arena::ThingId)s.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod config;
pub mod error;
pub mod level;
pub mod surround;

pub use config::{ConfigError, LevelConfig};
pub use error::MapError;
pub use level::{Level, ThingList};
pub use surround::SlabSurround;
