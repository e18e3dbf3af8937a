//! Test fixtures for Flotilla development.
//!
//! Pre-built grid configs and populated formations shared by unit tests,
//! integration tests, and benches.

#![forbid(unsafe_code)]
#![allow(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

mod fixtures;

pub use fixtures::{filled_formation, line_config, square_config};
