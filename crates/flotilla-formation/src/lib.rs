//! Formation grid layout, slot registry, and occupancy compaction.
//!
//! A [`Formation`] lays out a rectangular lattice of slots in local space
//! from a [`GridConfig`], hands slots out to externally-owned units in
//! identifier order, and shifts occupants toward the front of the formation
//! when a unit is released. Interested systems subscribe to the formation's
//! event bus to hear about releases, compaction passes, and rebuilds.
//!
//! # Quick start
//!
//! ```rust
//! use flotilla_core::UnitId;
//! use flotilla_formation::{Formation, GridConfig};
//!
//! let mut formation = Formation::new(GridConfig {
//!     width: 3,
//!     depth: 2,
//!     spacing: 1.5,
//!     x_offset: 0.0,
//!     z_offset: 0.0,
//! });
//! assert_eq!(formation.len(), 6);
//!
//! let unit = UnitId::next();
//! let slot = formation.acquire_free_slot(unit).unwrap();
//! assert_eq!(formation.find_slot_of(unit), Some(slot));
//!
//! formation.release(unit);
//! assert_eq!(formation.find_slot_of(unit), None);
//! ```

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

mod config;
mod events;
mod formation;
mod lattice;
mod slot;

pub use config::{ConfigError, GridConfig};
pub use events::{EventBus, FormationEvent};
pub use formation::Formation;
pub use lattice::{lattice, slot_position};
pub use slot::Slot;
