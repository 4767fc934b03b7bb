//! Generational arena of placed things.
//!
//! Things live in index-stable slots; a level's per-subtile lists hold
//! [`ThingId`]s into the arena. Deleting one thing never moves another,
//! so a scan can snapshot a list of ids and mutate freely while walking it.
//!
//! # Architecture
//!
//! ```text
//! ThingArena
//! ├── slots: Vec<Slot>      (generation + optional Thing)
//! └── free_list: Vec<u32>   (vacant slot indices, reused LIFO)
//! ```
//!
//! Each removal bumps the slot's generation. A [`ThingId`] captured before
//! the removal no longer matches and every accessor reports
//! [`ArenaError::StaleHandle`].

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod arena;
pub mod config;
pub mod error;
pub mod handle;

pub use arena::ThingArena;
pub use config::ArenaConfig;
pub use error::ArenaError;
pub use handle::ThingId;
