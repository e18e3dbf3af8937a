//! Slot position math shared by the grid builder and the debug overlay.
//!
//! Both the registry builder and the overlay emitter must place slots with
//! identical math, so there is exactly one implementation of it here.

use crate::config::GridConfig;
use glam::Vec3;

/// Compute the local-space position of the slot in column `x`, row `z`.
///
/// The grid is centered on the x axis (the `-(width-1)/2` term) but pushed
/// forward on the z axis (the `+(depth-1)/2` term), so row 0 sits half the
/// grid depth in front of the local origin. The asymmetry is deliberate:
/// the formation trails behind its anchor along -z.
///
/// ```rust
/// use flotilla_formation::{slot_position, GridConfig};
///
/// let cfg = GridConfig { width: 2, depth: 2, spacing: 1.0, x_offset: 0.0, z_offset: 0.0 };
/// assert_eq!(slot_position(&cfg, 0, 0).to_array(), [-0.5, 0.0, 0.5]);
/// assert_eq!(slot_position(&cfg, 1, 0).to_array(), [0.5, 0.0, 0.5]);
/// ```
pub fn slot_position(config: &GridConfig, x: i32, z: i32) -> Vec3 {
    let x_pos = (x as f32 - (config.width as f32 - 1.0) / 2.0) * config.spacing + config.x_offset;
    let z_pos = (z as f32 + (config.depth as f32 - 1.0) / 2.0) * config.spacing + config.z_offset;
    Vec3::new(x_pos, 0.0, z_pos)
}

/// Walk the grid in row-major creation order: `(x, z, position)` with z
/// outer, x inner. Running enumeration order is slot-identifier order.
///
/// Non-positive `width` or `depth` yields an empty iterator — degenerate
/// configs are not an error, they are an empty formation.
pub fn lattice(config: &GridConfig) -> impl Iterator<Item = (i32, i32, Vec3)> + '_ {
    (0..config.depth.max(0))
        .flat_map(move |z| (0..config.width.max(0)).map(move |x| (x, z, slot_position(config, x, z))))
}
