//! Traits defining scan operations for dependency inversion

use super::estimate::{DistanceEstimate, ProbeContext};
use crate::float_types::Real;
use crate::grid::{GridIndex, LevelSetGrid};
use crate::node::{LevelSetNode, NodeContainer};

/// Where a scan delivers its results and progress.
pub struct ScanSink<'s, 'a, const D: usize> {
    pub inside_points: &'s mut NodeContainer<D>,
    pub outside_points: &'s mut NodeContainer<D>,
    pub last_point_is_inside: &'s mut bool,
    pub progress: Option<&'s mut (dyn FnMut(f32) + 'a)>,
}

impl<const D: usize> ScanSink<'_, '_, D> {
    /// Append one estimate to the matching container.
    ///
    /// Undetermined points are dropped and count as not inside.
    pub fn record(&mut self, index: GridIndex<D>, estimate: DistanceEstimate) {
        match estimate {
            DistanceEstimate::OnLevelSet => {
                self.inside_points.push(LevelSetNode::new(index, 0.0));
                *self.last_point_is_inside = true;
            },
            DistanceEstimate::Inside(distance) => {
                self.inside_points.push(LevelSetNode::new(index, distance));
                *self.last_point_is_inside = true;
            },
            DistanceEstimate::Outside(distance) => {
                self.outside_points.push(LevelSetNode::new(index, distance));
                *self.last_point_is_inside = false;
            },
            DistanceEstimate::Undetermined => {
                *self.last_point_is_inside = false;
            },
        }
    }

    pub fn progress(&mut self, fraction: f32) {
        if let Some(observer) = self.progress.as_deref_mut() {
            observer(fraction);
        }
    }
}

/// Number of candidates between two progress updates.
#[inline]
pub fn update_visits(total: usize) -> usize {
    (total / 10).max(1)
}

#[inline]
pub fn progress_fraction(visited: usize, total: usize) -> f32 {
    visited as f32 / total as f32
}

/// Core scan operations trait
pub trait ScanOps {
    /// Estimate every index of the context's region, in region order.
    fn scan_full<G, const D: usize>(
        &self,
        context: &ProbeContext<'_, G, D>,
        sink: &mut ScanSink<'_, '_, D>,
    ) where
        G: LevelSetGrid<D>;

    /// Estimate the candidates of `band` whose centered value is within
    /// `half_bandwidth`, in stored order.
    fn scan_narrow_band<G, const D: usize>(
        &self,
        context: &ProbeContext<'_, G, D>,
        band: &NodeContainer<D>,
        half_bandwidth: Real,
        sink: &mut ScanSink<'_, '_, D>,
    ) where
        G: LevelSetGrid<D>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn update_visits_never_zero() {
        assert_eq!(update_visits(0), 1);
        assert_eq!(update_visits(7), 1);
        assert_eq!(update_visits(25), 2);
        assert_eq!(update_visits(1000), 100);
    }

    #[test]
    fn record_routes_by_classification() {
        let mut inside = NodeContainer::new();
        let mut outside = NodeContainer::new();
        let mut last_inside = false;
        let mut sink = ScanSink {
            inside_points: &mut inside,
            outside_points: &mut outside,
            last_point_is_inside: &mut last_inside,
            progress: None,
        };

        sink.record([0], DistanceEstimate::OnLevelSet);
        sink.record([1], DistanceEstimate::Outside(0.5));
        sink.record([2], DistanceEstimate::Inside(0.25));
        sink.record([3], DistanceEstimate::Undetermined);
        sink.progress(0.5);

        assert!(!last_inside);
        assert_eq!(
            inside.as_slice(),
            &[LevelSetNode::new([0], 0.0), LevelSetNode::new([2], 0.25)]
        );
        assert_eq!(outside.as_slice(), &[LevelSetNode::new([1], 0.5)]);
    }
}
