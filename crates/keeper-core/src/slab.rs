//! Slab kinds, owners and the slab predicates used by the sync engine.

use std::fmt;

/// Terrain, room or door kind of a tile.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SlabKind {
    /// Impenetrable rock.
    Rock,
    /// Gold seam.
    Gold,
    /// Diggable earth.
    Earth,
    /// Earth with a torch mounted on it.
    TorchDirt,
    /// Reinforced wall with drapes.
    WallDrape,
    /// Reinforced wall with a torch.
    WallTorch,
    /// Reinforced wall, twins carving.
    WallTwins,
    /// Reinforced wall, woman carving.
    WallWoman,
    /// Reinforced wall, pair carving.
    WallPair,
    /// Gem seam.
    Gems,
    /// Unclaimed path.
    Path,
    /// Claimed floor.
    Claimed,
    /// Lava.
    Lava,
    /// Water.
    Water,
    /// Portal room.
    Portal,
    /// Treasure room.
    Treasure,
    /// Library.
    Library,
    /// Prison.
    PrisonCase,
    /// Torture chamber.
    Torture,
    /// Training room.
    Training,
    /// Dungeon heart room.
    DungeonHeart,
    /// Workshop.
    Workshop,
    /// Scavenger room.
    Scavenger,
    /// Temple.
    Temple,
    /// Graveyard.
    Graveyard,
    /// Hatchery.
    Hatchery,
    /// Lair.
    Lair,
    /// Barracks.
    Barracks,
    /// Bridge.
    Bridge,
    /// Guard post.
    GuardPost,
    /// Wooden door, first variant.
    DoorWood1,
    /// Wooden door, second variant.
    DoorWood2,
    /// Braced door, first variant.
    DoorBraced1,
    /// Braced door, second variant.
    DoorBraced2,
    /// Iron door, first variant.
    DoorIron1,
    /// Iron door, second variant.
    DoorIron2,
    /// Magic door, first variant.
    DoorMagic1,
    /// Magic door, second variant.
    DoorMagic2,
}

impl SlabKind {
    /// Every slab kind, in declaration order.
    pub const ALL: [SlabKind; 38] = [
        SlabKind::Rock,
        SlabKind::Gold,
        SlabKind::Earth,
        SlabKind::TorchDirt,
        SlabKind::WallDrape,
        SlabKind::WallTorch,
        SlabKind::WallTwins,
        SlabKind::WallWoman,
        SlabKind::WallPair,
        SlabKind::Gems,
        SlabKind::Path,
        SlabKind::Claimed,
        SlabKind::Lava,
        SlabKind::Water,
        SlabKind::Portal,
        SlabKind::Treasure,
        SlabKind::Library,
        SlabKind::PrisonCase,
        SlabKind::Torture,
        SlabKind::Training,
        SlabKind::DungeonHeart,
        SlabKind::Workshop,
        SlabKind::Scavenger,
        SlabKind::Temple,
        SlabKind::Graveyard,
        SlabKind::Hatchery,
        SlabKind::Lair,
        SlabKind::Barracks,
        SlabKind::Bridge,
        SlabKind::GuardPost,
        SlabKind::DoorWood1,
        SlabKind::DoorWood2,
        SlabKind::DoorBraced1,
        SlabKind::DoorBraced2,
        SlabKind::DoorIron1,
        SlabKind::DoorIron2,
        SlabKind::DoorMagic1,
        SlabKind::DoorMagic2,
    ];

    /// Full-height slabs: rock, earth, seams and walls.
    pub fn is_tall(self) -> bool {
        matches!(
            self,
            SlabKind::Rock
                | SlabKind::Gold
                | SlabKind::Earth
                | SlabKind::TorchDirt
                | SlabKind::WallDrape
                | SlabKind::WallTorch
                | SlabKind::WallTwins
                | SlabKind::WallWoman
                | SlabKind::WallPair
                | SlabKind::Gems
        )
    }

    /// Floor-level slabs a torch may stand on. Doors are neither tall nor short.
    pub fn is_short(self) -> bool {
        !self.is_tall() && !self.is_door()
    }

    /// Room slabs, governed by the room rule table.
    pub fn is_room(self) -> bool {
        matches!(
            self,
            SlabKind::Portal
                | SlabKind::Treasure
                | SlabKind::Library
                | SlabKind::PrisonCase
                | SlabKind::Torture
                | SlabKind::Training
                | SlabKind::DungeonHeart
                | SlabKind::Workshop
                | SlabKind::Scavenger
                | SlabKind::Temple
                | SlabKind::Graveyard
                | SlabKind::Hatchery
                | SlabKind::Lair
                | SlabKind::Barracks
                | SlabKind::Bridge
                | SlabKind::GuardPost
        )
    }

    /// Door slabs, any material and variant.
    pub fn is_door(self) -> bool {
        matches!(
            self,
            SlabKind::DoorWood1
                | SlabKind::DoorWood2
                | SlabKind::DoorBraced1
                | SlabKind::DoorBraced2
                | SlabKind::DoorIron1
                | SlabKind::DoorIron2
                | SlabKind::DoorMagic1
                | SlabKind::DoorMagic2
        )
    }

    /// Walls carrying a torch, which want lit floor next to them.
    pub fn needs_adjacent_torch(self) -> bool {
        matches!(self, SlabKind::TorchDirt | SlabKind::WallTorch)
    }
}

/// Owner of a slab or a thing.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Owner {
    /// Keeper 0.
    Red,
    /// Keeper 1.
    Blue,
    /// Keeper 2.
    Green,
    /// Keeper 3.
    Yellow,
    /// The heroes.
    Good,
    /// Nobody.
    #[default]
    Unset,
}

impl Owner {
    /// Number of distinct owners.
    pub const COUNT: usize = 6;

    /// Every owner, keepers first.
    pub const ALL: [Owner; Owner::COUNT] = [
        Owner::Red,
        Owner::Blue,
        Owner::Green,
        Owner::Yellow,
        Owner::Good,
        Owner::Unset,
    ];

    /// Dense index in `0..Owner::COUNT`.
    pub fn index(self) -> usize {
        self as usize
    }

    /// Whether the owner is one of the 4 keepers.
    pub fn is_keeper(self) -> bool {
        matches!(self, Owner::Red | Owner::Blue | Owner::Green | Owner::Yellow)
    }
}

impl fmt::Display for Owner {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Owner::Red => "red",
            Owner::Blue => "blue",
            Owner::Green => "green",
            Owner::Yellow => "yellow",
            Owner::Good => "good",
            Owner::Unset => "unset",
        };
        f.write_str(name)
    }
}

/// A tile's slab: kind plus owner.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Slab {
    /// Terrain/room/door kind.
    pub kind: SlabKind,
    /// Who owns the tile.
    pub owner: Owner,
}

impl Slab {
    /// What reads outside the map return.
    pub const BORDER: Slab = Slab {
        kind: SlabKind::Rock,
        owner: Owner::Unset,
    };

    /// Create a slab.
    pub const fn new(kind: SlabKind, owner: Owner) -> Self {
        Self { kind, owner }
    }

    /// Same kind and same owner.
    pub fn matches(&self, other: &Slab) -> bool {
        self.kind == other.kind && self.owner == other.owner
    }
}

impl Default for Slab {
    fn default() -> Self {
        Self::BORDER
    }
}
