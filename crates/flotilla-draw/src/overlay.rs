//! Grid overlay emission.

use crate::command::{DrawCommand, DrawStyle};
use crate::sink::DrawSink;
use flotilla_formation::{lattice, GridConfig};
use glam::Vec3;
use smallvec::SmallVec;

/// The three markers for one slot: wire box, `"Slot [x,z]"` label, and a
/// forward (+z) arrow.
pub fn slot_markers(position: Vec3, x: i32, z: i32, style: &DrawStyle) -> SmallVec<[DrawCommand; 3]> {
    let mut commands: SmallVec<[DrawCommand; 3]> = SmallVec::new();
    commands.push(DrawCommand::WireBox {
        center: position,
        size: Vec3::splat(style.box_size),
        color: style.color,
    });
    commands.push(DrawCommand::Label {
        position,
        text: format!("Slot [{x},{z}]"),
        size: style.label_size,
    });
    commands.push(DrawCommand::Arrow {
        start: position,
        end: position + Vec3::Z * style.arrow_length,
        color: style.color,
    });
    commands
}

/// Emit the full grid overlay for `config` into `sink`.
///
/// Uses the same [`lattice`] walk as the registry builder, so the overlay
/// is always congruent with the slots units are actually assigned to.
/// Degenerate configs emit nothing.
pub fn draw_grid(config: &GridConfig, style: &DrawStyle, sink: &mut dyn DrawSink) {
    for (x, z, position) in lattice(config) {
        for command in slot_markers(position, x, z, style) {
            sink.submit(command);
        }
    }
}
