//! Level dimensions and their validation.

use std::error::Error;
use std::fmt;

// ── ConfigError ────────────────────────────────────────────────────

/// Errors detected during [`LevelConfig::validate()`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ConfigError {
    /// One of the dimensions is zero.
    EmptyMap,
    /// A dimension exceeds [`LevelConfig::MAX_TILES`].
    MapTooLarge {
        /// Configured width in tiles.
        tiles_x: u32,
        /// Configured height in tiles.
        tiles_y: u32,
    },
    /// Border column height exceeds [`LevelConfig::MAX_COLUMN_HEIGHT`].
    BorderTooTall {
        /// The configured height.
        height: u16,
    },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyMap => write!(f, "level must be at least 1x1 tiles"),
            Self::MapTooLarge { tiles_x, tiles_y } => write!(
                f,
                "level {tiles_x}x{tiles_y} exceeds maximum of {max}x{max} tiles",
                max = LevelConfig::MAX_TILES
            ),
            Self::BorderTooTall { height } => write!(
                f,
                "border column height {height} exceeds maximum of {}",
                LevelConfig::MAX_COLUMN_HEIGHT
            ),
        }
    }
}

impl Error for ConfigError {}

// ── LevelConfig ────────────────────────────────────────────────────

/// Dimensions of a level and the column height reported off the map.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LevelConfig {
    /// Width in tiles. Default: 85.
    pub tiles_x: u32,
    /// Height in tiles. Default: 85.
    pub tiles_y: u32,
    /// Column height read for subtiles outside the map. Default: 5,
    /// the height of the rock surrounding every level.
    pub border_column_height: u16,
}

impl LevelConfig {
    /// Classic level side length.
    pub const DEFAULT_TILES: u32 = 85;
    /// Largest accepted side length.
    pub const MAX_TILES: u32 = 1024;
    /// Height of the rock at the map border.
    pub const DEFAULT_BORDER_HEIGHT: u16 = 5;
    /// Tallest column the level format can describe.
    pub const MAX_COLUMN_HEIGHT: u16 = 15;

    /// A `tiles_x` × `tiles_y` level with the default border height.
    pub fn new(tiles_x: u32, tiles_y: u32) -> Self {
        Self {
            tiles_x,
            tiles_y,
            border_column_height: Self::DEFAULT_BORDER_HEIGHT,
        }
    }

    /// Check all structural invariants.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.tiles_x == 0 || self.tiles_y == 0 {
            return Err(ConfigError::EmptyMap);
        }
        if self.tiles_x > Self::MAX_TILES || self.tiles_y > Self::MAX_TILES {
            return Err(ConfigError::MapTooLarge {
                tiles_x: self.tiles_x,
                tiles_y: self.tiles_y,
            });
        }
        if self.border_column_height > Self::MAX_COLUMN_HEIGHT {
            return Err(ConfigError::BorderTooTall {
                height: self.border_column_height,
            });
        }
        Ok(())
    }

    /// Number of tiles.
    pub fn tile_count(&self) -> usize {
        self.tiles_x as usize * self.tiles_y as usize
    }

    /// Number of subtiles.
    pub fn subtile_count(&self) -> usize {
        self.tile_count() * 9
    }
}

impl Default for LevelConfig {
    fn default() -> Self {
        Self::new(Self::DEFAULT_TILES, Self::DEFAULT_TILES)
    }
}
