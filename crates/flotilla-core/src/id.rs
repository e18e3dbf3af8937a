//! Strongly-typed identifiers.

use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};

/// Identifies a slot within a formation.
///
/// Slots are created when the grid is built and assigned sequential IDs
/// in row-major order. `SlotId(n)` corresponds to the n-th slot of the
/// formation; IDs are dense `0..N` and never reused or reassigned for
/// the lifetime of a grid.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SlotId(pub u32);

impl fmt::Display for SlotId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u32> for SlotId {
    fn from(v: u32) -> Self {
        Self(v)
    }
}

/// Counter for unique [`UnitId`] allocation.
static UNIT_COUNTER: AtomicU64 = AtomicU64::new(1);

/// Non-owning handle to an externally-owned unit.
///
/// A formation slot stores a `UnitId` rather than a reference to the unit
/// object itself, so occupancy comparisons are plain integer equality and
/// remain stable across serialization boundaries. Two distinct units always
/// have different IDs.
///
/// Allocate fresh handles with [`UnitId::next`], or wrap an existing
/// external identifier via `From<u64>` when the embedding game already
/// assigns unit IDs.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct UnitId(u64);

impl UnitId {
    /// Allocate a fresh, unique unit handle.
    ///
    /// Each call returns an ID that has never been returned before within
    /// this process. Thread-safe.
    pub fn next() -> Self {
        Self(UNIT_COUNTER.fetch_add(1, Ordering::Relaxed))
    }

    /// The raw identifier value.
    pub fn raw(self) -> u64 {
        self.0
    }
}

impl fmt::Display for UnitId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u64> for UnitId {
    fn from(v: u64) -> Self {
        Self(v)
    }
}

/// Identifies a subscription on a formation event bus.
///
/// Returned by subscribe, consumed by unsubscribe. IDs are unique per bus
/// and never reused, so a stale `ObserverId` unsubscribes nothing rather
/// than removing someone else's observer.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ObserverId(pub u64);

impl fmt::Display for ObserverId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
