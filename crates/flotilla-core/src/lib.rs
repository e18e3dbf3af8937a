//! Core identifier types for the Flotilla formation library.
//!
//! This is the leaf crate with zero internal dependencies. It defines the
//! strongly-typed handles used throughout the workspace: [`UnitId`] for
//! externally-owned units, [`SlotId`] for formation slots, and
//! [`ObserverId`] for event-bus subscriptions.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

mod id;

pub use id::{ObserverId, SlotId, UnitId};
