//! Canned configs and pre-populated formations.

use flotilla_core::UnitId;
use flotilla_formation::{Formation, GridConfig};

/// A single-row formation of `width` slots, unit spacing, no offsets.
pub fn line_config(width: i32) -> GridConfig {
    GridConfig {
        width,
        depth: 1,
        spacing: 1.0,
        x_offset: 0.0,
        z_offset: 0.0,
    }
}

/// A `side` x `side` formation, unit spacing, no offsets.
pub fn square_config(side: i32) -> GridConfig {
    GridConfig {
        width: side,
        depth: side,
        spacing: 1.0,
        x_offset: 0.0,
        z_offset: 0.0,
    }
}

/// A formation with every slot occupied by a fresh unit.
///
/// Returns the formation together with the assigned units in slot order,
/// so tests can release specific members of the wing.
pub fn filled_formation(config: GridConfig) -> (Formation, Vec<UnitId>) {
    let mut formation = Formation::new(config);
    let mut units = Vec::with_capacity(formation.len());
    for _ in 0..formation.len() {
        let unit = UnitId::next();
        let slot = formation.acquire_free_slot(unit);
        debug_assert!(slot.is_some());
        units.push(unit);
    }
    (formation, units)
}
