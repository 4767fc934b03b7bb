//! The placed-entity model.
//!
//! A [`Thing`] is a door, item, hero gate, creature, trap or room effect
//! placed on a subtile. The legacy level format reuses one scalar field
//! for kind-specific data (door lock, hero gate number, creature level);
//! here each kind carries its own typed payload in [`ThingKind`].
//!
//! The classification predicates on [`Thing`] decide which things the
//! sync engine governs:
//!
//! - **room things** are owned by room rules and may be created,
//!   re-owned or deleted by reconciliation;
//! - **lit things** suppress extra torches nearby;
//! - **crucial things** survive [non-crucial cleanup];
//! - the **expected ground** drives misplaced-object cleanup.
//!
//! [non-crucial cleanup]: Thing::is_crucial

use crate::coord::{SubPos, SubtilePos, TilePos};
use crate::slab::{Owner, SlabKind};

/// Highest height slot a thing may occupy.
pub const MAX_HEIGHT: u8 = 7;

/// Door material, implied by the door slab.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum DoorKind {
    /// Wooden door.
    #[default]
    Wood,
    /// Braced door.
    Braced,
    /// Iron door.
    Iron,
    /// Magic door.
    Magic,
}

impl DoorKind {
    /// Door material for a door slab; `None` for any other slab.
    pub fn for_slab(kind: SlabKind) -> Option<DoorKind> {
        match kind {
            SlabKind::DoorWood1 | SlabKind::DoorWood2 => Some(DoorKind::Wood),
            SlabKind::DoorBraced1 | SlabKind::DoorBraced2 => Some(DoorKind::Braced),
            SlabKind::DoorIron1 | SlabKind::DoorIron2 => Some(DoorKind::Iron),
            SlabKind::DoorMagic1 | SlabKind::DoorMagic2 => Some(DoorKind::Magic),
            _ => None,
        }
    }
}

/// Which way a door lets creatures through.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum DoorOrientation {
    /// Passable north-south (walls to the east and west).
    #[default]
    NorthSouthPass,
    /// Passable east-west (walls to the north and south).
    EastWestPass,
}

/// Lock state of a door; the legacy format stores it as the door's level.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum DoorLock {
    /// Open to everyone allowed through.
    #[default]
    Unlocked,
    /// Locked; marked on the map by a spinning key.
    Locked,
}

/// Door payload.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Door {
    /// Material.
    pub kind: DoorKind,
    /// Passable axis.
    pub orientation: DoorOrientation,
    /// Lock state.
    pub lock: DoorLock,
}

/// Item subtypes the engine knows by name; everything else is `Other`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ItemKind {
    /// Wall torch (also the hatchery/training/scavenger corner marker).
    Torch,
    /// Treasure room candlestick.
    Candlestick,
    /// Training room post.
    TrainingPost,
    /// Scavenger room eye.
    ScavengerEye,
    /// Graveyard gravestone.
    Gravestone,
    /// Workshop machine.
    WorkshopMachine,
    /// Workshop anvil.
    Anvil,
    /// Torture room torturer statue.
    Torturer,
    /// Torture room spike.
    TortureSpike,
    /// Temple statue.
    TempleStatue,
    /// The dungeon heart itself.
    DungeonHeart,
    /// Heart flame, red keeper.
    HeartFlameRed,
    /// Heart flame, blue keeper.
    HeartFlameBlue,
    /// Heart flame, green keeper.
    HeartFlameGreen,
    /// Heart flame, yellow keeper.
    HeartFlameYellow,
    /// Guard post flag, red keeper.
    GuardFlagRed,
    /// Guard post flag, blue keeper.
    GuardFlagBlue,
    /// Guard post flag, green keeper.
    GuardFlagGreen,
    /// Guard post flag, yellow keeper.
    GuardFlagYellow,
    /// Bare guard post flagpole for heroes or nobody.
    FlagPost,
    /// Prison bar.
    PrisonBar,
    /// Spinning key marking a locked door.
    SpinningKey,
    /// Any other item, by legacy subtype code.
    Other(u8),
}

impl ItemKind {
    /// Highest legacy item subtype code.
    pub const MAX_CODE: u8 = 134;

    /// Owner-coloured heart flame; `None` for heroes and nobody.
    pub fn heart_flame_for(owner: Owner) -> Option<ItemKind> {
        match owner {
            Owner::Red => Some(ItemKind::HeartFlameRed),
            Owner::Blue => Some(ItemKind::HeartFlameBlue),
            Owner::Green => Some(ItemKind::HeartFlameGreen),
            Owner::Yellow => Some(ItemKind::HeartFlameYellow),
            Owner::Good | Owner::Unset => None,
        }
    }

    /// Owner-coloured guard flag, falling back to a bare flagpost.
    pub fn guard_flag_for(owner: Owner) -> ItemKind {
        match owner {
            Owner::Red => ItemKind::GuardFlagRed,
            Owner::Blue => ItemKind::GuardFlagBlue,
            Owner::Green => ItemKind::GuardFlagGreen,
            Owner::Yellow => ItemKind::GuardFlagYellow,
            Owner::Good | Owner::Unset => ItemKind::FlagPost,
        }
    }

    /// Torch subtype.
    pub fn is_torch(self) -> bool {
        self == ItemKind::Torch
    }

    /// One of the 4 heart flames.
    pub fn is_heart_flame(self) -> bool {
        matches!(
            self,
            ItemKind::HeartFlameRed
                | ItemKind::HeartFlameBlue
                | ItemKind::HeartFlameGreen
                | ItemKind::HeartFlameYellow
        )
    }

    /// Items that give off light.
    pub fn is_lit(self) -> bool {
        self.is_torch() || self.is_heart_flame() || self == ItemKind::Candlestick
    }

    /// Items governed by room rules.
    pub fn is_room_item(self) -> bool {
        !matches!(self, ItemKind::SpinningKey | ItemKind::Other(_))
    }

    /// The ground this item belongs on.
    pub fn expected_ground(self) -> ExpectedGround {
        use ExpectedGround::{Floor, Slab};
        match self {
            ItemKind::Torch | ItemKind::Other(_) => Floor,
            ItemKind::Candlestick => Slab(SlabKind::Treasure),
            ItemKind::TrainingPost => Slab(SlabKind::Training),
            ItemKind::ScavengerEye => Slab(SlabKind::Scavenger),
            ItemKind::Gravestone => Slab(SlabKind::Graveyard),
            ItemKind::WorkshopMachine | ItemKind::Anvil => Slab(SlabKind::Workshop),
            ItemKind::Torturer | ItemKind::TortureSpike => Slab(SlabKind::Torture),
            ItemKind::TempleStatue => Slab(SlabKind::Temple),
            ItemKind::DungeonHeart
            | ItemKind::HeartFlameRed
            | ItemKind::HeartFlameBlue
            | ItemKind::HeartFlameGreen
            | ItemKind::HeartFlameYellow => Slab(SlabKind::DungeonHeart),
            ItemKind::GuardFlagRed
            | ItemKind::GuardFlagBlue
            | ItemKind::GuardFlagGreen
            | ItemKind::GuardFlagYellow
            | ItemKind::FlagPost => Slab(SlabKind::GuardPost),
            ItemKind::PrisonBar => Slab(SlabKind::PrisonCase),
            ItemKind::SpinningKey => ExpectedGround::Door,
        }
    }
}

/// Room effect subtypes.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum EffectKind {
    /// Bubbling lava.
    Lava,
    /// Dripping water.
    DrippingWater,
    /// Falling rocks.
    RockFall,
    /// Portal entrance ice.
    EntranceIce,
    /// Graveyard dry ice.
    DryIce,
}

impl EffectKind {
    /// Effects owned by room rules.
    pub fn is_room_effect(self) -> bool {
        matches!(self, EffectKind::EntranceIce | EffectKind::DryIce)
    }

    /// The ground this effect belongs on.
    pub fn expected_ground(self) -> ExpectedGround {
        match self {
            EffectKind::EntranceIce => ExpectedGround::Slab(SlabKind::Portal),
            EffectKind::DryIce => ExpectedGround::Slab(SlabKind::Graveyard),
            EffectKind::Lava | EffectKind::DrippingWater | EffectKind::RockFall => {
                ExpectedGround::Any
            }
        }
    }
}

/// Creature model, by legacy code.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct CreatureKind(pub u8);

impl CreatureKind {
    /// Highest legacy creature code.
    pub const MAX_CODE: u8 = 31;

    /// Whether the code names a real creature.
    pub fn is_known(self) -> bool {
        (1..=Self::MAX_CODE).contains(&self.0)
    }
}

/// Trap model, by legacy code.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct TrapKind(pub u8);

impl TrapKind {
    /// Highest legacy trap code.
    pub const MAX_CODE: u8 = 8;

    /// Whether the code names a real trap.
    pub fn is_known(self) -> bool {
        (1..=Self::MAX_CODE).contains(&self.0)
    }
}

/// What a thing is, with the kind-specific payload.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ThingKind {
    /// A door, with material, orientation and lock.
    Door(Door),
    /// An item.
    Item(ItemKind),
    /// A hero gate. The legacy format stores `-number` in the level
    /// scalar; here the number is kept positive.
    HeroGate {
        /// Gate number, starting at 1.
        number: u16,
    },
    /// A creature and its experience level.
    Creature {
        /// Creature model.
        kind: CreatureKind,
        /// Experience level, `1..=10`.
        level: u8,
    },
    /// A trap.
    Trap(TrapKind),
    /// A room effect generator.
    RoomEffect(EffectKind),
}

/// Where a thing is allowed to stand.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ExpectedGround {
    /// Anywhere.
    Any,
    /// Claimed-ground style: any slab that is not tall.
    Floor,
    /// Exactly this slab kind.
    Slab(SlabKind),
    /// Any door slab.
    Door,
}

impl ExpectedGround {
    /// Whether a thing with this expectation may stay on `slab`.
    pub fn allows(self, slab: SlabKind) -> bool {
        match self {
            ExpectedGround::Any => true,
            ExpectedGround::Floor => !slab.is_tall(),
            ExpectedGround::Slab(kind) => kind == slab,
            ExpectedGround::Door => slab.is_door(),
        }
    }
}

/// A room-governed thing kind that reconciliation can look for and create.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum RoomThing {
    /// An item subtype.
    Item(ItemKind),
    /// A room effect subtype.
    Effect(EffectKind),
}

impl RoomThing {
    /// Whether `kind` is an instance of this room thing.
    pub fn matches(self, kind: &ThingKind) -> bool {
        match (self, kind) {
            (RoomThing::Item(want), ThingKind::Item(have)) => want == *have,
            (RoomThing::Effect(want), ThingKind::RoomEffect(have)) => want == *have,
            _ => false,
        }
    }

    /// Whether this is the torch item.
    pub fn is_torch(self) -> bool {
        matches!(self, RoomThing::Item(ItemKind::Torch))
    }
}

/// A placed entity.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Thing {
    /// Kind and kind-specific payload.
    pub kind: ThingKind,
    /// Owner.
    pub owner: Owner,
    /// Subtile the thing is stored on.
    pub subtile: SubtilePos,
    /// Position inside the subtile.
    pub sub_pos: SubPos,
    /// Height slot.
    pub height: u8,
    /// Offset inside the height slot.
    pub sub_height: u8,
    /// Tile whose changes should re-evaluate this thing.
    pub sensitive_tile: Option<TilePos>,
}

impl Thing {
    /// A thing centred on `subtile`, standing on the floor slot.
    pub fn new(kind: ThingKind, owner: Owner, subtile: SubtilePos) -> Self {
        Self {
            kind,
            owner,
            subtile,
            sub_pos: SubPos::CENTRE,
            height: 1,
            sub_height: 0,
            sensitive_tile: None,
        }
    }

    /// The tile the thing stands on.
    pub fn tile(&self) -> TilePos {
        self.subtile.tile()
    }

    /// Item subtype, if this is an item.
    pub fn item_kind(&self) -> Option<ItemKind> {
        match self.kind {
            ThingKind::Item(kind) => Some(kind),
            _ => None,
        }
    }

    /// Door payload, if this is a door.
    pub fn door(&self) -> Option<&Door> {
        match &self.kind {
            ThingKind::Door(door) => Some(door),
            _ => None,
        }
    }

    /// Mutable door payload, if this is a door.
    pub fn door_mut(&mut self) -> Option<&mut Door> {
        match &mut self.kind {
            ThingKind::Door(door) => Some(door),
            _ => None,
        }
    }

    /// Whether this is a door.
    pub fn is_door(&self) -> bool {
        matches!(self.kind, ThingKind::Door(_))
    }

    /// Whether this is a torch item.
    pub fn is_torch(&self) -> bool {
        self.item_kind().is_some_and(ItemKind::is_torch)
    }

    /// Whether this is a spinning door key.
    pub fn is_key(&self) -> bool {
        self.item_kind() == Some(ItemKind::SpinningKey)
    }

    /// Whether this is a heart flame.
    pub fn is_heart_flame(&self) -> bool {
        self.item_kind().is_some_and(ItemKind::is_heart_flame)
    }

    /// Whether this is a hero gate.
    pub fn is_hero_gate(&self) -> bool {
        matches!(self.kind, ThingKind::HeroGate { .. })
    }

    /// Whether the thing gives off light.
    pub fn is_lit(&self) -> bool {
        self.item_kind().is_some_and(ItemKind::is_lit)
    }

    /// Whether room rules govern this thing.
    pub fn is_room_thing(&self) -> bool {
        match self.kind {
            ThingKind::Item(kind) => kind.is_room_item(),
            ThingKind::RoomEffect(kind) => kind.is_room_effect(),
            _ => false,
        }
    }

    /// Things a level cannot lose without breaking the game.
    pub fn is_crucial(&self) -> bool {
        self.is_hero_gate() || self.item_kind() == Some(ItemKind::DungeonHeart)
    }

    /// Where this thing is allowed to stand.
    pub fn expected_ground(&self) -> ExpectedGround {
        match self.kind {
            ThingKind::Door(_) => ExpectedGround::Door,
            ThingKind::Item(kind) => kind.expected_ground(),
            ThingKind::RoomEffect(kind) => kind.expected_ground(),
            ThingKind::HeroGate { .. } | ThingKind::Creature { .. } | ThingKind::Trap(_) => {
                ExpectedGround::Floor
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(kind: ItemKind) -> Thing {
        Thing::new(ThingKind::Item(kind), Owner::Red, SubtilePos::new(4, 4))
    }

    #[test]
    fn door_kind_from_both_variants() {
        assert_eq!(DoorKind::for_slab(SlabKind::DoorIron1), Some(DoorKind::Iron));
        assert_eq!(DoorKind::for_slab(SlabKind::DoorIron2), Some(DoorKind::Iron));
        assert_eq!(DoorKind::for_slab(SlabKind::DoorMagic2), Some(DoorKind::Magic));
        assert_eq!(DoorKind::for_slab(SlabKind::Claimed), None);
        for kind in SlabKind::ALL {
            assert_eq!(DoorKind::for_slab(kind).is_some(), kind.is_door());
        }
    }

    #[test]
    fn owner_coloured_items() {
        assert_eq!(ItemKind::heart_flame_for(Owner::Green), Some(ItemKind::HeartFlameGreen));
        assert_eq!(ItemKind::heart_flame_for(Owner::Good), None);
        assert_eq!(ItemKind::guard_flag_for(Owner::Blue), ItemKind::GuardFlagBlue);
        assert_eq!(ItemKind::guard_flag_for(Owner::Unset), ItemKind::FlagPost);
    }

    #[test]
    fn classification() {
        assert!(item(ItemKind::Torch).is_room_thing());
        assert!(item(ItemKind::Torch).is_lit());
        assert!(item(ItemKind::Candlestick).is_lit());
        assert!(!item(ItemKind::SpinningKey).is_room_thing());
        assert!(!item(ItemKind::Other(6)).is_room_thing());
        assert!(item(ItemKind::DungeonHeart).is_crucial());
        assert!(item(ItemKind::DungeonHeart).is_room_thing());

        let gate = Thing::new(ThingKind::HeroGate { number: 1 }, Owner::Good, SubtilePos::new(1, 1));
        assert!(gate.is_crucial());
        assert!(!gate.is_room_thing());

        let ice = Thing::new(
            ThingKind::RoomEffect(EffectKind::EntranceIce),
            Owner::Red,
            SubtilePos::new(1, 1),
        );
        assert!(ice.is_room_thing());
        assert!(!ice.is_lit());
    }

    #[test]
    fn expected_ground_rules() {
        assert!(ExpectedGround::Floor.allows(SlabKind::Library));
        assert!(!ExpectedGround::Floor.allows(SlabKind::Earth));
        assert!(ExpectedGround::Door.allows(SlabKind::DoorWood2));
        assert!(!ExpectedGround::Door.allows(SlabKind::Claimed));
        assert!(ExpectedGround::Slab(SlabKind::Temple).allows(SlabKind::Temple));
        assert!(!ExpectedGround::Slab(SlabKind::Temple).allows(SlabKind::Claimed));
        assert_eq!(
            item(ItemKind::Anvil).expected_ground(),
            ExpectedGround::Slab(SlabKind::Workshop)
        );
    }

    #[test]
    fn room_thing_matching() {
        let want = RoomThing::Item(ItemKind::Anvil);
        assert!(want.matches(&ThingKind::Item(ItemKind::Anvil)));
        assert!(!want.matches(&ThingKind::Item(ItemKind::Torch)));
        assert!(!want.matches(&ThingKind::RoomEffect(EffectKind::DryIce)));
        assert!(RoomThing::Effect(EffectKind::DryIce)
            .matches(&ThingKind::RoomEffect(EffectKind::DryIce)));
        assert!(RoomThing::Item(ItemKind::Torch).is_torch());
    }
}
