//! The formation registry: grid construction, slot assignment, release,
//! and occupancy compaction.

use crate::config::{ConfigError, GridConfig};
use crate::events::{EventBus, FormationEvent};
use crate::lattice::lattice;
use crate::slot::Slot;
use flotilla_core::{ObserverId, SlotId, UnitId};
use glam::Quat;
use std::fmt;

/// An ordered registry of formation slots.
///
/// Slots are laid out eagerly at construction in row-major order and hold
/// dense identifiers `SlotId(0)..SlotId(N-1)`. The grid is immutable until
/// [`rebuild`](Formation::rebuild) is called; occupancy is the only mutable
/// state in between.
///
/// Units are assigned front-to-back:
/// [`acquire_free_slot`](Formation::acquire_free_slot) binds the first free
/// slot in identifier order, and [`release`](Formation::release) compacts
/// survivors toward the front so the formation never flies with a hole in it.
pub struct Formation {
    config: GridConfig,
    slots: Vec<Slot>,
    events: EventBus,
}

impl Formation {
    /// Build a formation from `config`.
    ///
    /// Construction is eager and infallible: degenerate configs (zero or
    /// negative width/depth) yield an empty formation whose queries all
    /// return `None`. Use [`try_new`](Formation::try_new) to reject such
    /// configs instead.
    pub fn new(config: GridConfig) -> Self {
        let slots = build_slots(&config);
        Self {
            config,
            slots,
            events: EventBus::new(),
        }
    }

    /// Build a formation, failing fast on a degenerate or malformed config.
    pub fn try_new(config: GridConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self::new(config))
    }

    /// The config the grid was built from.
    pub fn config(&self) -> &GridConfig {
        &self.config
    }

    /// Total slot count.
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    /// True if the grid has no slots at all.
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// Number of slots currently holding an occupant.
    pub fn occupied_count(&self) -> usize {
        self.slots.iter().filter(|s| !s.is_free()).count()
    }

    /// All slots in identifier order.
    pub fn slots(&self) -> &[Slot] {
        &self.slots
    }

    /// Look up a slot by id.
    pub fn slot(&self, id: SlotId) -> Option<&Slot> {
        self.slots.get(id.0 as usize)
    }

    /// Discard all slots and occupants, then regenerate the grid from the
    /// current config. Notifies observers with [`FormationEvent::Rebuilt`].
    pub fn rebuild(&mut self) {
        self.slots = build_slots(&self.config);
        self.events.emit(&FormationEvent::Rebuilt {
            slot_count: self.slots.len(),
        });
    }

    /// Bind `unit` to the first free slot in identifier order.
    ///
    /// Returns `None` when the formation is full (or has no slots), in
    /// which case nothing is mutated. Never hands out an occupied slot.
    ///
    /// Callers are expected to check
    /// [`find_slot_of`](Formation::find_slot_of) before acquiring again for
    /// the same unit; acquiring twice binds a second slot.
    pub fn acquire_free_slot(&mut self, unit: UnitId) -> Option<SlotId> {
        let slot = self.slots.iter_mut().find(|s| s.is_free())?;
        slot.occupant = Some(unit);
        Some(slot.id)
    }

    /// Find the slot currently bound to `unit`, if any. No mutation.
    pub fn find_slot_of(&self, unit: UnitId) -> Option<SlotId> {
        self.slots
            .iter()
            .find(|s| s.occupant == Some(unit))
            .map(|s| s.id)
    }

    /// Clear `unit` from its slot, compact survivors toward the front, and
    /// notify observers.
    ///
    /// Returns the slot the unit vacated, or `None` (with no compaction and
    /// no events) if the unit held no slot. Compaction runs to fixpoint so
    /// a removal never leaves a gap behind.
    pub fn release(&mut self, unit: UnitId) -> Option<SlotId> {
        let slot = self.slots.iter_mut().find(|s| s.occupant == Some(unit))?;
        let vacated = slot.id;
        slot.occupant = None;

        self.events.emit(&FormationEvent::Released {
            unit,
            slot: vacated,
        });
        let moves = self.compact();
        self.events.emit(&FormationEvent::Compacted { moves });
        Some(vacated)
    }

    /// One left-to-right compaction pass over adjacent slot pairs.
    ///
    /// For each `i`, if slot `i` is empty and slot `i+1` is occupied, the
    /// occupant moves from `i+1` to `i`. A single pass fully closes one
    /// gap, but a run of consecutive gaps only narrows by one slot per
    /// pass — see [`compact`](Formation::compact) for the fixpoint loop.
    ///
    /// Returns the number of occupants moved.
    pub fn compact_pass(&mut self) -> usize {
        let mut moves = 0;
        for i in 0..self.slots.len().saturating_sub(1) {
            if self.slots[i].is_free() && !self.slots[i + 1].is_free() {
                self.slots[i].occupant = self.slots[i + 1].occupant.take();
                moves += 1;
            }
        }
        moves
    }

    /// Run [`compact_pass`](Formation::compact_pass) until no occupant
    /// moves. Returns the total number of moves.
    ///
    /// The loop terminates: every pass that moves anything strictly
    /// decreases the index sum of occupied slots.
    pub fn compact(&mut self) -> usize {
        let mut total = 0;
        loop {
            let moves = self.compact_pass();
            if moves == 0 {
                return total;
            }
            total += moves;
        }
    }

    /// Externally-triggered occupancy recompute: runs one compaction pass
    /// and notifies observers with [`FormationEvent::Compacted`].
    ///
    /// This is the hook for systems that clear occupants directly instead
    /// of going through [`release`](Formation::release); each trigger
    /// closes at most one slot of each gap run.
    pub fn recompute(&mut self) {
        let moves = self.compact_pass();
        self.events.emit(&FormationEvent::Compacted { moves });
    }

    /// Register an observer for formation events.
    pub fn subscribe(&mut self, callback: impl FnMut(&FormationEvent) + 'static) -> ObserverId {
        self.events.subscribe(callback)
    }

    /// Remove a previously registered observer.
    pub fn unsubscribe(&mut self, id: ObserverId) -> bool {
        self.events.unsubscribe(id)
    }

    /// Number of registered observers.
    pub fn observer_count(&self) -> usize {
        self.events.observer_count()
    }
}

impl fmt::Debug for Formation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Formation")
            .field("config", &self.config)
            .field("slots", &self.slots.len())
            .field("occupied", &self.occupied_count())
            .field("observers", &self.events.observer_count())
            .finish()
    }
}

/// Materialize the slot list for `config` in row-major identifier order.
fn build_slots(config: &GridConfig) -> Vec<Slot> {
    let mut slots = Vec::with_capacity(config.slot_count());
    for (count, (_, _, position)) in lattice(config).enumerate() {
        slots.push(Slot::new(position, Quat::IDENTITY, SlotId(count as u32)));
    }
    slots
}
