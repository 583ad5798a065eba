//! Configuration for a neighborhood extraction run.

use crate::errors::{ExtractError, ExtractResult};
use crate::float_types::Real;

/// Tunables of a [`LevelSetNeighborhoodExtractor`](crate::LevelSetNeighborhoodExtractor).
///
/// # Example
///
/// ```
/// use levelset_neighborhood::ExtractorParams;
///
/// let params = ExtractorParams::default();
/// assert_eq!(params.level_set_value, 0.0);
/// assert!(!params.narrow_banding);
///
/// let banded = ExtractorParams::default()
///     .level_set_value(0.5)
///     .narrow_bandwidth(4.0)
///     .narrow_banding(true);
/// assert_eq!(banded.narrow_bandwidth, 4.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ExtractorParams {
    /// Field value the level set is taken at.
    pub level_set_value: Real,

    /// Restrict [`locate`](crate::LevelSetNeighborhoodExtractor::locate) to
    /// the caller's narrow band instead of scanning the whole grid.
    pub narrow_banding: bool,

    /// Full width of the band; candidates farther than half of it from the
    /// level set are skipped.
    pub narrow_bandwidth: Real,
}

impl Default for ExtractorParams {
    fn default() -> Self {
        Self {
            level_set_value: 0.0,
            narrow_banding: false,
            narrow_bandwidth: 12.0,
        }
    }
}

impl ExtractorParams {
    #[must_use]
    pub const fn level_set_value(mut self, value: Real) -> Self {
        self.level_set_value = value;
        self
    }

    #[must_use]
    pub const fn narrow_banding(mut self, enabled: bool) -> Self {
        self.narrow_banding = enabled;
        self
    }

    #[must_use]
    pub const fn narrow_bandwidth(mut self, width: Real) -> Self {
        self.narrow_bandwidth = width;
        self
    }

    /// Half of the bandwidth, the largest admitted `|value - level_set_value|`.
    pub fn half_bandwidth(&self) -> ExtractResult<Real> {
        if !self.narrow_bandwidth.is_finite() || self.narrow_bandwidth < 0.0 {
            return Err(ExtractError::InvalidBandwidth(self.narrow_bandwidth));
        }
        Ok(self.narrow_bandwidth / 2.0)
    }
}
