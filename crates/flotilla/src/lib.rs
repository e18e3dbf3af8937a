//! Flotilla: formation grid layout, slot assignment, and occupancy
//! compaction for fleet-style games.
//!
//! This is the top-level facade crate that re-exports the public API from
//! the Flotilla sub-crates. For most users, adding `flotilla` as a single
//! dependency is sufficient.
//!
//! # Quick start
//!
//! ```rust
//! use flotilla::prelude::*;
//!
//! // Lay out a 3-wide, 2-deep wing behind the flagship.
//! let mut formation = Formation::new(GridConfig {
//!     width: 3,
//!     depth: 2,
//!     spacing: 2.0,
//!     x_offset: 0.0,
//!     z_offset: -4.0,
//! });
//!
//! // Assign escorts front-to-back.
//! let escort = UnitId::next();
//! let slot = formation.acquire_free_slot(escort).unwrap();
//! let anchor = formation.slot(slot).unwrap().position;
//!
//! // When an escort is destroyed, the wing closes ranks.
//! formation.release(escort);
//! assert_eq!(formation.find_slot_of(escort), None);
//!
//! // Emit the debug overlay for whatever renderer the game uses.
//! let mut sink = RecordingSink::new();
//! draw_grid(formation.config(), &DrawStyle::default(), &mut sink);
//! assert_eq!(sink.commands.len(), 6 * 3);
//! # let _ = anchor;
//! ```
//!
//! # Modules
//!
//! Each module corresponds to a sub-crate:
//!
//! | Module | Sub-crate | Contents |
//! |--------|-----------|----------|
//! | [`types`] | `flotilla-core` | Typed identifiers (`UnitId`, `SlotId`, `ObserverId`) |
//! | [`formation`] | `flotilla-formation` | Grid config, lattice math, slot registry, event bus |
//! | [`draw`] | `flotilla-draw` | Draw commands, sink trait, grid overlay |

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

/// Typed identifiers (`flotilla-core`).
pub use flotilla_core as types;

/// Grid config, lattice math, slot registry, and events (`flotilla-formation`).
pub use flotilla_formation as formation;

/// Draw commands, sink trait, and the grid overlay (`flotilla-draw`).
pub use flotilla_draw as draw;

/// Common imports for typical Flotilla usage.
///
/// ```rust
/// use flotilla::prelude::*;
/// ```
pub mod prelude {
    // Identifiers
    pub use flotilla_core::{ObserverId, SlotId, UnitId};

    // Formation registry
    pub use flotilla_formation::{
        ConfigError, Formation, FormationEvent, GridConfig, Slot,
    };

    // Debug overlay
    pub use flotilla_draw::{
        draw_grid, DrawCommand, DrawSink, DrawStyle, RecordingSink, Rgba,
    };
}
