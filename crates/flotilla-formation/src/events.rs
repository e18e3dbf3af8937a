//! Formation events and the observer bus.
//!
//! The bus replaces the ambient broadcast callback that gameplay code would
//! otherwise reach for: observers are registered explicitly on the owning
//! [`Formation`](crate::Formation), keyed by [`ObserverId`], and notified
//! synchronously in subscription order. There is no shared or static state.
//!
//! Observers receive `&FormationEvent` only — they cannot reach back into
//! the registry mid-delivery, so notification cannot re-enter a mutation.

use flotilla_core::{ObserverId, SlotId, UnitId};
use indexmap::IndexMap;
use std::fmt;

/// A change in formation occupancy.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FormationEvent {
    /// A unit vacated its slot.
    Released {
        /// The unit that was released.
        unit: UnitId,
        /// The slot it vacated.
        slot: SlotId,
    },
    /// A compaction pass ran.
    Compacted {
        /// Number of occupants moved toward the front. May be zero.
        moves: usize,
    },
    /// The grid was rebuilt; all prior occupancy was discarded.
    Rebuilt {
        /// Slot count of the new grid.
        slot_count: usize,
    },
}

type Callback = Box<dyn FnMut(&FormationEvent)>;

/// Insertion-ordered observer list for [`FormationEvent`]s.
///
/// Delivery is synchronous and follows subscription order; unsubscribing
/// one observer preserves the relative order of the rest.
#[derive(Default)]
pub struct EventBus {
    observers: IndexMap<ObserverId, Callback>,
    next_id: u64,
}

impl EventBus {
    /// Create an empty bus.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register an observer. Returns the id to unsubscribe with.
    pub fn subscribe(&mut self, callback: impl FnMut(&FormationEvent) + 'static) -> ObserverId {
        let id = ObserverId(self.next_id);
        self.next_id += 1;
        self.observers.insert(id, Box::new(callback));
        id
    }

    /// Remove an observer. Returns false if the id was never subscribed or
    /// was already removed. Remaining observers keep their delivery order.
    pub fn unsubscribe(&mut self, id: ObserverId) -> bool {
        self.observers.shift_remove(&id).is_some()
    }

    /// Number of registered observers.
    pub fn observer_count(&self) -> usize {
        self.observers.len()
    }

    /// Deliver an event to every observer in subscription order.
    pub fn emit(&mut self, event: &FormationEvent) {
        for callback in self.observers.values_mut() {
            callback(event);
        }
    }
}

impl fmt::Debug for EventBus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EventBus")
            .field("observers", &self.observers.len())
            .field("next_id", &self.next_id)
            .finish()
    }
}
