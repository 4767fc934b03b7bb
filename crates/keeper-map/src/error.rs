//! Storage-layer error types.

use std::error::Error;
use std::fmt;

use keeper_arena::ArenaError;
use keeper_core::{SubtilePos, TilePos};

/// Errors from [`Level`](crate::Level) accessors taking caller coordinates or ids.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum MapError {
    /// Tile coordinate outside the map.
    TileOutOfBounds {
        /// The offending tile.
        tile: TilePos,
    },
    /// Subtile coordinate outside the map.
    SubtileOutOfBounds {
        /// The offending subtile.
        subtile: SubtilePos,
    },
    /// A thing id that no longer names a live thing.
    Arena(ArenaError),
}

impl fmt::Display for MapError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::TileOutOfBounds { tile } => write!(f, "tile {tile} is outside the map"),
            Self::SubtileOutOfBounds { subtile } => {
                write!(f, "subtile {subtile} is outside the map")
            }
            Self::Arena(e) => write!(f, "thing storage: {e}"),
        }
    }
}

impl Error for MapError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Arena(e) => Some(e),
            _ => None,
        }
    }
}

impl From<ArenaError> for MapError {
    fn from(e: ArenaError) -> Self {
        Self::Arena(e)
    }
}
