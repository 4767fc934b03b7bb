//! Validation failure types.

use std::error::Error;
use std::fmt;

use keeper_core::TilePos;

/// How bad a validation finding is.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Severity {
    /// The level loads but something looks off.
    Warning,
    /// The level would not load correctly.
    Error,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Warning => f.write_str("warning"),
            Self::Error => f.write_str("error"),
        }
    }
}

/// What is wrong with a thing.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ThingFault {
    /// Item subtype code outside the known range.
    UnknownItem {
        /// The code.
        code: u8,
    },
    /// Creature code outside the known range.
    UnknownCreature {
        /// The code.
        code: u8,
    },
    /// Trap code outside the known range.
    UnknownTrap {
        /// The code.
        code: u8,
    },
    /// Creature experience level outside `1..=10`.
    CreatureLevel {
        /// The level.
        level: u8,
    },
    /// Hero gate numbered 0.
    HeroGateUnnumbered,
    /// Height slot above the ceiling.
    TooHigh {
        /// The height slot.
        height: u8,
    },
    /// Door not standing on its tile's central subtile.
    DoorOffCentre,
    /// Sensitive tile outside the map.
    SensitiveTileOffMap {
        /// The sensitive tile.
        tile: TilePos,
    },
}

impl fmt::Display for ThingFault {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnknownItem { code } => write!(f, "Unknown item subtype {code}"),
            Self::UnknownCreature { code } => write!(f, "Unknown creature kind {code}"),
            Self::UnknownTrap { code } => write!(f, "Unknown trap kind {code}"),
            Self::CreatureLevel { level } => {
                write!(f, "Creature level {level} outside 1..10")
            }
            Self::HeroGateUnnumbered => write!(f, "Hero gate has no number"),
            Self::TooHigh { height } => write!(f, "Thing height {height} above the ceiling"),
            Self::DoorOffCentre => write!(f, "Door not on central subtile"),
            Self::SensitiveTileOffMap { tile } => {
                write!(f, "Sensitive tile {tile} outside the map")
            }
        }
    }
}

/// First inconsistency found by [`verify_things`](crate::verify::verify_things).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct VerifyFailure {
    /// Warning or error.
    pub severity: Severity,
    /// Tile the offending thing stands on.
    pub tile: TilePos,
    /// What is wrong.
    pub fault: ThingFault,
}

impl fmt::Display for VerifyFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} at slab {},{}.", self.fault, self.tile.x, self.tile.y)
    }
}

impl Error for VerifyFailure {}
