//! The [`Slot`] value type.

use flotilla_core::{SlotId, UnitId};
use glam::{Quat, Vec3};

/// A fixed position and orientation in the formation grid that can hold at
/// most one occupant.
///
/// Position and rotation are in the formation's local space; the embedding
/// game applies the owning transform to get world coordinates. The occupant
/// is a non-owning handle — releasing a slot says nothing about the unit
/// object itself.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Slot {
    /// Local-space position of the slot.
    pub position: Vec3,
    /// Local-space orientation of the slot.
    pub rotation: Quat,
    /// Dense identifier, assigned in creation order.
    pub id: SlotId,
    /// The unit bound to this slot, if any.
    pub occupant: Option<UnitId>,
}

impl Slot {
    /// Create an unoccupied slot.
    pub fn new(position: Vec3, rotation: Quat, id: SlotId) -> Self {
        Self {
            position,
            rotation,
            id,
            occupant: None,
        }
    }

    /// True if no unit is bound to this slot.
    pub fn is_free(&self) -> bool {
        self.occupant.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_slot_is_free() {
        let slot = Slot::new(Vec3::ZERO, Quat::IDENTITY, SlotId(0));
        assert!(slot.is_free());
        assert_eq!(slot.occupant, None);
    }

    #[test]
    fn occupied_slot_is_not_free() {
        let mut slot = Slot::new(Vec3::ZERO, Quat::IDENTITY, SlotId(0));
        slot.occupant = Some(UnitId::next());
        assert!(!slot.is_free());
    }
}
