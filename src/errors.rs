//! Extraction errors

use crate::float_types::Real;

/// Result type alias for extraction operations.
pub type ExtractResult<T> = Result<T, ExtractError>;

/// Everything that can stop an extraction run before it touches its outputs.
///
/// Per-point outcomes (no crossing found, neighbors outside the region) are
/// not errors and never show up here.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ExtractError {
    /// No input level set was supplied
    #[error("input level set is not set")]
    MissingLevelSet,
    /// Narrow-band mode was requested without a candidate node container
    #[error("input narrow band has not been set")]
    MissingNarrowBand,
    /// The narrow bandwidth is negative or not finite
    #[error("invalid narrow bandwidth: {0}")]
    InvalidBandwidth(Real),
    /// A single-point query named an index outside the buffered region
    #[error("index {0:?} lies outside the buffered region")]
    IndexOutsideRegion(Vec<i64>),
    /// A sample buffer does not match the size of its region
    #[error("buffer holds {actual} samples but the region needs {expected}")]
    BufferSizeMismatch { expected: usize, actual: usize },
}
