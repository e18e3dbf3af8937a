//! Draw commands and overlay styling.

use glam::Vec3;

/// A straight-alpha linear RGBA color.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Rgba {
    /// Red channel, 0.0..=1.0.
    pub r: f32,
    /// Green channel, 0.0..=1.0.
    pub g: f32,
    /// Blue channel, 0.0..=1.0.
    pub b: f32,
    /// Alpha channel, 0.0..=1.0.
    pub a: f32,
}

impl Rgba {
    /// Opaque white.
    pub const WHITE: Self = Self::new(1.0, 1.0, 1.0, 1.0);

    /// Construct a color from channel values.
    pub const fn new(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }
}

/// One debug-draw primitive, in formation-local space.
///
/// The enum is the seam between the overlay and the game's renderer: a sink
/// translates each variant into whatever immediate-mode drawing API is
/// available, or drops the ones it cannot express (e.g. labels on a
/// line-only backend).
#[derive(Clone, Debug, PartialEq)]
pub enum DrawCommand {
    /// An axis-aligned wireframe box.
    WireBox {
        /// Center of the box.
        center: Vec3,
        /// Full side lengths along each axis.
        size: Vec3,
        /// Line color.
        color: Rgba,
    },
    /// A screen-facing text label.
    Label {
        /// Anchor position.
        position: Vec3,
        /// Text content.
        text: String,
        /// Font size in points.
        size: f32,
    },
    /// A line with an arrowhead at the end.
    Arrow {
        /// Tail position.
        start: Vec3,
        /// Head position.
        end: Vec3,
        /// Line color.
        color: Rgba,
    },
}

/// Styling knobs for the grid overlay.
///
/// Only [`color`](DrawStyle::color) is part of the configuration surface
/// the embedding game usually exposes; the rest default to the overlay's
/// standard proportions.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DrawStyle {
    /// Color for boxes and arrows. Purely cosmetic.
    pub color: Rgba,
    /// Side length of each slot's wire box. Default: 0.5.
    pub box_size: f32,
    /// Font size for slot labels. Default: 12.0.
    pub label_size: f32,
    /// Length of the forward arrow. Default: 0.7.
    pub arrow_length: f32,
}

impl Default for DrawStyle {
    fn default() -> Self {
        Self {
            color: Rgba::WHITE,
            box_size: 0.5,
            label_size: 12.0,
            arrow_length: 0.7,
        }
    }
}
