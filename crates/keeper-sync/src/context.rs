//! Mutable view of a level for the duration of one sweep.
//!
//! Every change a rule makes goes through [`SweepContext`], which applies
//! it to the level, bumps the matching [`SweepMetrics`] counter and emits
//! a `trace` record. Updates are counted only when a field really changes,
//! which keeps repeated sweeps over a consistent level at zero.

use keeper_arena::ThingId;
use keeper_core::{Slab, SubtilePos, Thing, TilePos};
use keeper_map::{Level, SlabSurround, ThingList};

use crate::metrics::SweepMetrics;

/// Level plus change counters, handed to every rule.
pub struct SweepContext<'a> {
    level: &'a mut Level,
    metrics: &'a mut SweepMetrics,
}

impl<'a> SweepContext<'a> {
    /// Wrap a level and the metrics record it reports into.
    pub fn new(level: &'a mut Level, metrics: &'a mut SweepMetrics) -> Self {
        Self { level, metrics }
    }

    /// Read-only access to the level.
    pub fn level(&self) -> &Level {
        self.level
    }

    /// Counters so far.
    pub fn metrics(&self) -> &SweepMetrics {
        self.metrics
    }

    pub(crate) fn visit_tile(&mut self) {
        self.metrics.tiles_visited += 1;
    }

    /// Slab at `tile`.
    pub fn slab(&self, tile: TilePos) -> Slab {
        self.level.slab(tile)
    }

    /// `tile` and its 8 neighbours.
    pub fn surround(&self, tile: TilePos) -> SlabSurround {
        self.level.surround(tile)
    }

    /// Snapshot of the ids on `subtile`, safe to hold across mutations.
    pub fn things_at(&self, subtile: SubtilePos) -> ThingList {
        ThingList::from_slice(self.level.things_at(subtile))
    }

    /// The thing behind `id`, if it is still live.
    pub fn thing(&self, id: ThingId) -> Option<&Thing> {
        self.level.thing(id).ok()
    }

    /// Add a new thing.
    pub fn create(&mut self, thing: Thing) -> Option<ThingId> {
        let kind = thing.kind;
        let subtile = thing.subtile;
        match self.level.add_thing(thing) {
            Ok(id) => {
                self.metrics.things_created += 1;
                log::trace!("created {kind:?} at {subtile} as {id}");
                Some(id)
            }
            Err(e) => {
                log::warn!("could not place {kind:?} at {subtile}: {e}");
                None
            }
        }
    }

    /// Delete a thing. Returns whether anything was removed.
    pub fn delete(&mut self, id: ThingId) -> bool {
        match self.level.detach_thing(id) {
            Ok(thing) => {
                self.metrics.things_deleted += 1;
                log::trace!("deleted {:?} at {}", thing.kind, thing.subtile);
                true
            }
            Err(_) => false,
        }
    }

    /// Change a thing in place during reconciliation.
    pub fn update(&mut self, id: ThingId, f: impl FnOnce(&mut Thing)) -> bool {
        let changed = self.modify(id, f);
        if changed {
            self.metrics.things_updated += 1;
            log::trace!("updated {id}");
        }
        changed
    }

    /// Change a thing's placement during the positioning pass.
    pub fn reposition(&mut self, id: ThingId, f: impl FnOnce(&mut Thing)) -> bool {
        let changed = self.modify(id, f);
        if changed {
            self.metrics.things_repositioned += 1;
            log::trace!("repositioned {id}");
        }
        changed
    }

    /// Move a thing to another subtile by detaching and re-adding it.
    /// Counts as one update; the returned id replaces `id`.
    pub fn relocate(&mut self, id: ThingId, to: SubtilePos) -> Option<ThingId> {
        if self.thing(id)?.subtile == to {
            return Some(id);
        }
        let mut thing = self.level.detach_thing(id).ok()?;
        let from = thing.subtile;
        thing.subtile = to;
        match self.level.add_thing(thing) {
            Ok(moved) => {
                self.metrics.things_updated += 1;
                log::trace!("moved {id} from {from} to {to} as {moved}");
                Some(moved)
            }
            Err(e) => {
                self.metrics.things_deleted += 1;
                log::warn!("dropped {id} while moving it from {from} to {to}: {e}");
                None
            }
        }
    }

    fn modify(&mut self, id: ThingId, f: impl FnOnce(&mut Thing)) -> bool {
        let Ok(thing) = self.level.thing_mut(id) else {
            return false;
        };
        let before = thing.clone();
        f(thing);
        *thing != before
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use keeper_core::{ItemKind, Owner, ThingKind};
    use keeper_map::LevelConfig;

    fn torch_at(sub: SubtilePos) -> Thing {
        Thing::new(ThingKind::Item(ItemKind::Torch), Owner::Red, sub)
    }

    #[test]
    fn changes_are_counted() {
        let mut level = Level::new(LevelConfig::new(3, 3)).unwrap();
        let mut metrics = SweepMetrics::default();
        let mut ctx = SweepContext::new(&mut level, &mut metrics);

        let id = ctx.create(torch_at(SubtilePos::new(1, 1))).unwrap();
        assert!(!ctx.update(id, |t| t.owner = Owner::Red));
        assert!(ctx.update(id, |t| t.owner = Owner::Blue));
        assert!(ctx.reposition(id, |t| t.height = 4));
        let moved = ctx.relocate(id, SubtilePos::new(4, 4)).unwrap();
        assert!(ctx.thing(id).is_none());
        assert_eq!(ctx.thing(moved).unwrap().subtile, SubtilePos::new(4, 4));
        assert!(ctx.delete(moved));
        assert!(!ctx.delete(moved));

        assert_eq!(metrics.things_created, 1);
        assert_eq!(metrics.things_updated, 2);
        assert_eq!(metrics.things_repositioned, 1);
        assert_eq!(metrics.things_deleted, 1);
    }

    #[test]
    fn off_map_create_is_refused() {
        let mut level = Level::new(LevelConfig::new(1, 1)).unwrap();
        let mut metrics = SweepMetrics::default();
        let mut ctx = SweepContext::new(&mut level, &mut metrics);
        assert!(ctx.create(torch_at(SubtilePos::new(3, 0))).is_none());
        assert_eq!(ctx.metrics().things_created, 0);
    }

    #[test]
    fn relocating_in_place_keeps_id() {
        let mut level = Level::new(LevelConfig::new(2, 2)).unwrap();
        let mut metrics = SweepMetrics::default();
        let mut ctx = SweepContext::new(&mut level, &mut metrics);
        let id = ctx.create(torch_at(SubtilePos::new(1, 1))).unwrap();
        assert_eq!(ctx.relocate(id, SubtilePos::new(1, 1)), Some(id));
        assert_eq!(ctx.metrics().things_updated, 0);
    }
}
