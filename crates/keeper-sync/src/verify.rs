//! Read-only structural validation of a level's things.

use keeper_core::{ItemKind, Thing, ThingKind, MAX_HEIGHT};
use keeper_map::Level;

use crate::error::{Severity, ThingFault, VerifyFailure};

/// Highest creature experience level.
pub const MAX_CREATURE_LEVEL: u8 = 10;

/// Walk every thing in scan order and report the first problem found.
pub fn verify_things(level: &Level) -> Result<(), VerifyFailure> {
    for (_, thing) in level.all_things() {
        if let Some((severity, fault)) = check_thing(level, thing) {
            return Err(VerifyFailure {
                severity,
                tile: thing.tile(),
                fault,
            });
        }
    }
    Ok(())
}

/// Check one thing. Errors are reported ahead of warnings.
pub fn check_thing(level: &Level, thing: &Thing) -> Option<(Severity, ThingFault)> {
    if let Some(fault) = kind_fault(&thing.kind) {
        return Some((Severity::Error, fault));
    }
    placement_fault(level, thing).map(|fault| (Severity::Warning, fault))
}

fn kind_fault(kind: &ThingKind) -> Option<ThingFault> {
    match *kind {
        ThingKind::Item(ItemKind::Other(code)) if code == 0 || code > ItemKind::MAX_CODE => {
            Some(ThingFault::UnknownItem { code })
        }
        ThingKind::Creature { kind, .. } if !kind.is_known() => {
            Some(ThingFault::UnknownCreature { code: kind.0 })
        }
        ThingKind::Creature { level, .. } if !(1..=MAX_CREATURE_LEVEL).contains(&level) => {
            Some(ThingFault::CreatureLevel { level })
        }
        ThingKind::Trap(kind) if !kind.is_known() => {
            Some(ThingFault::UnknownTrap { code: kind.0 })
        }
        ThingKind::HeroGate { number: 0 } => Some(ThingFault::HeroGateUnnumbered),
        _ => None,
    }
}

fn placement_fault(level: &Level, thing: &Thing) -> Option<ThingFault> {
    if thing.height > MAX_HEIGHT {
        return Some(ThingFault::TooHigh {
            height: thing.height,
        });
    }
    if thing.is_door() && !thing.subtile.is_tile_centre() {
        return Some(ThingFault::DoorOffCentre);
    }
    match thing.sensitive_tile {
        Some(tile) if !level.contains_tile(tile) => {
            Some(ThingFault::SensitiveTileOffMap { tile })
        }
        _ => None,
    }
}
