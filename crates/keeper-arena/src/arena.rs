//! Slot storage with free-list reuse.
//!
//! [`ThingArena`] keeps every slot ever allocated. Removing a thing marks
//! its slot vacant, bumps the slot generation and pushes the index on the
//! free list; the next insert pops it. Slot indices therefore stay dense
//! for levels that churn things during repeated sweeps.

use crate::config::ArenaConfig;
use crate::error::ArenaError;
use crate::handle::ThingId;

use keeper_core::Thing;

#[derive(Clone, Debug)]
struct Slot {
    generation: u32,
    thing: Option<Thing>,
}

/// Index-stable generational storage for [`Thing`]s.
#[derive(Clone, Debug, Default)]
pub struct ThingArena {
    slots: Vec<Slot>,
    free_list: Vec<u32>,
    live: usize,
}

impl ThingArena {
    /// Create an empty arena with the default configuration.
    pub fn new() -> Self {
        Self::with_config(&ArenaConfig::default())
    }

    /// Create an empty arena sized by `config`.
    pub fn with_config(config: &ArenaConfig) -> Self {
        Self {
            slots: Vec::with_capacity(config.initial_capacity),
            free_list: Vec::new(),
            live: 0,
        }
    }

    /// Store `thing`, reusing a vacant slot if one exists.
    pub fn insert(&mut self, thing: Thing) -> ThingId {
        self.live += 1;
        if let Some(index) = self.free_list.pop() {
            let slot = &mut self.slots[index as usize];
            slot.thing = Some(thing);
            return ThingId::new(index, slot.generation);
        }
        let index = self.slots.len() as u32;
        self.slots.push(Slot {
            generation: 0,
            thing: Some(thing),
        });
        ThingId::new(index, 0)
    }

    /// Borrow the thing behind `id`.
    pub fn get(&self, id: ThingId) -> Result<&Thing, ArenaError> {
        self.slots
            .get(id.index as usize)
            .filter(|slot| slot.generation == id.generation)
            .and_then(|slot| slot.thing.as_ref())
            .ok_or_else(|| stale(id))
    }

    /// Mutably borrow the thing behind `id`.
    pub fn get_mut(&mut self, id: ThingId) -> Result<&mut Thing, ArenaError> {
        self.slots
            .get_mut(id.index as usize)
            .filter(|slot| slot.generation == id.generation)
            .and_then(|slot| slot.thing.as_mut())
            .ok_or_else(|| stale(id))
    }

    /// Take the thing out of the arena and retire its slot.
    pub fn remove(&mut self, id: ThingId) -> Result<Thing, ArenaError> {
        let slot = self
            .slots
            .get_mut(id.index as usize)
            .filter(|slot| slot.generation == id.generation && slot.thing.is_some())
            .ok_or_else(|| stale(id))?;
        let thing = slot.thing.take().ok_or_else(|| stale(id))?;
        slot.generation = slot.generation.wrapping_add(1);
        self.free_list.push(id.index);
        self.live -= 1;
        Ok(thing)
    }

    /// Whether `id` still names a live thing.
    pub fn contains(&self, id: ThingId) -> bool {
        self.get(id).is_ok()
    }

    /// Number of live things.
    pub fn len(&self) -> usize {
        self.live
    }

    /// Whether no thing is stored.
    pub fn is_empty(&self) -> bool {
        self.live == 0
    }

    /// Total slots (live + vacant).
    pub fn total_slots(&self) -> usize {
        self.slots.len()
    }

    /// Number of vacant slots available for reuse.
    pub fn free_count(&self) -> usize {
        self.free_list.len()
    }

    /// Live things in slot order.
    pub fn iter(&self) -> impl Iterator<Item = (ThingId, &Thing)> {
        self.slots.iter().enumerate().filter_map(|(index, slot)| {
            slot.thing
                .as_ref()
                .map(|thing| (ThingId::new(index as u32, slot.generation), thing))
        })
    }

    /// Drop every thing. Outstanding ids become stale.
    pub fn clear(&mut self) {
        self.free_list.clear();
        for (index, slot) in self.slots.iter_mut().enumerate().rev() {
            if slot.thing.take().is_some() {
                slot.generation = slot.generation.wrapping_add(1);
            }
            self.free_list.push(index as u32);
        }
        self.live = 0;
    }
}

fn stale(id: ThingId) -> ArenaError {
    ArenaError::StaleHandle {
        index: id.index,
        generation: id.generation,
    }
}
