//! Benchmark profiles for the Flotilla formation library.
//!
//! Provides pre-built grid configs at the sizes the benches exercise:
//!
//! - [`wing_profile`]: 8x4 grid (32 slots), a typical escort wing
//! - [`armada_profile`]: 64x64 grid (4096 slots) for scan-heavy stress runs

#![forbid(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]

use flotilla_formation::GridConfig;

/// A typical escort-wing layout: 8 columns, 4 rows, 2.0 spacing.
pub fn wing_profile() -> GridConfig {
    GridConfig {
        width: 8,
        depth: 4,
        spacing: 2.0,
        x_offset: 0.0,
        z_offset: -6.0,
    }
}

/// A deliberately oversized 64x64 layout to stress the linear scans.
pub fn armada_profile() -> GridConfig {
    GridConfig {
        width: 64,
        depth: 64,
        spacing: 1.0,
        x_offset: 0.0,
        z_offset: 0.0,
    }
}
