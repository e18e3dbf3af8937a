//! Backend-agnostic debug-draw overlay for formation grids.
//!
//! [`draw_grid`] walks the same lattice the registry was built from and
//! submits one wire box, one label, and one forward arrow per slot to a
//! [`DrawSink`]. Commands are in the formation's local space; the consumer
//! applies the owning transform and forwards them to whatever line/text
//! renderer the game uses. Nothing here reads occupancy — the overlay shows
//! geometry, not assignment.
//!
//! ```rust
//! use flotilla_draw::{draw_grid, DrawStyle, RecordingSink};
//! use flotilla_formation::GridConfig;
//!
//! let cfg = GridConfig { width: 2, depth: 2, spacing: 1.0, x_offset: 0.0, z_offset: 0.0 };
//! let mut sink = RecordingSink::new();
//! draw_grid(&cfg, &DrawStyle::default(), &mut sink);
//! assert_eq!(sink.commands.len(), 4 * 3); // box + label + arrow per slot
//! ```

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

mod command;
mod overlay;
mod sink;

pub use command::{DrawCommand, DrawStyle, Rgba};
pub use overlay::{draw_grid, slot_markers};
pub use sink::{DrawSink, RecordingSink};
