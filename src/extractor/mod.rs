//! Narrow-band neighborhood extraction
//!
//! This module provides the scan operations with dependency inversion,
//! allowing for different driver implementations (serial/parallel).

pub mod estimate;
pub mod neighborhood;
pub mod serial;
pub mod traits;

#[cfg(feature = "parallel")]
pub mod parallel;

// Re-export core types
pub use estimate::{DistanceEstimate, ProbeContext};
pub use neighborhood::LevelSetNeighborhoodExtractor;
pub use serial::SerialScanOps;
pub use traits::{ScanOps, ScanSink};

#[cfg(feature = "parallel")]
pub use parallel::ParallelScanOps;

/// Which candidates an extraction run visits.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ScanMode {
    /// Every index of the field's buffered region.
    #[default]
    Full,
    /// Only the caller's narrow-band nodes within half the bandwidth.
    NarrowBand,
}
