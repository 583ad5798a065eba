//! Per-point distance estimation.
//!
//! Along each axis the crossing of the level set is located by linear
//! interpolation between the point and whichever one-step neighbor lies on
//! the other side. The per-axis distances are then combined as the legs of a
//! right simplex: `d = sqrt(1 / sum(1 / d_j^2))`, the distance from the corner
//! to the face through the crossings.

use crate::float_types::Real;
use crate::grid::{GridIndex, LevelSetGrid, Region};
use crate::node::LevelSetNode;
use crate::pixel::LevelSetPixel;
use nalgebra::SVector;

/// Outcome of estimating one point.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum DistanceEstimate {
    /// The sample equals the level-set value exactly.
    OnLevelSet,
    /// Below the level-set value, at the given distance.
    Inside(Real),
    /// Above the level-set value, at the given distance.
    Outside(Real),
    /// No axis found a neighbor across the level set.
    Undetermined,
}

impl DistanceEstimate {
    /// Distance magnitude, with `large_value` standing in for "undetermined".
    pub const fn distance(&self, large_value: Real) -> Real {
        match *self {
            Self::OnLevelSet => 0.0,
            Self::Inside(distance) | Self::Outside(distance) => distance,
            Self::Undetermined => large_value,
        }
    }

    pub const fn is_inside(&self) -> bool {
        matches!(self, Self::OnLevelSet | Self::Inside(_))
    }
}

/// Everything a point estimate reads, captured once at the start of a run.
pub struct ProbeContext<'g, G, const D: usize>
where
    G: LevelSetGrid<D>,
{
    grid: &'g G,
    region: Region<D>,
    spacing: SVector<Real, D>,
    level_set_value: Real,
    large_value: Real,
}

impl<'g, G, const D: usize> ProbeContext<'g, G, D>
where
    G: LevelSetGrid<D>,
{
    pub fn new(grid: &'g G, region: Region<D>, level_set_value: Real) -> Self {
        Self {
            grid,
            region,
            spacing: grid.spacing(),
            level_set_value,
            large_value: G::Pixel::large_value(),
        }
    }

    pub const fn region(&self) -> &Region<D> {
        &self.region
    }

    pub const fn large_value(&self) -> Real {
        self.large_value
    }

    /// Sample minus the level-set value.
    #[inline]
    pub fn centered_value(&self, index: &GridIndex<D>) -> Real {
        self.grid.pixel(index).to_real() - self.level_set_value
    }

    /// Whether a narrow-band candidate is inside the region and no farther
    /// than `half_bandwidth` from the level set in value.
    #[inline]
    pub fn within_band(&self, index: &GridIndex<D>, half_bandwidth: Real) -> bool {
        self.region.contains(index) && self.centered_value(index).abs() <= half_bandwidth
    }

    /// Estimate the distance from `index` to the level set.
    ///
    /// `index` must lie inside the region.
    pub fn estimate(&self, index: &GridIndex<D>) -> DistanceEstimate {
        let center_value = self.centered_value(index);
        if center_value == 0.0 {
            return DistanceEstimate::OnLevelSet;
        }

        let inside = center_value <= 0.0;

        let mut nodes_used = [LevelSetNode::new(*index, self.large_value); D];
        let mut neighbor_index = *index;

        for axis in 0..D {
            let mut nearest = LevelSetNode::new(*index, self.large_value);
            let spacing = self.spacing[axis];

            for step in [-1, 1] {
                neighbor_index[axis] = index[axis] + step;
                if !self.region.contains(&neighbor_index) {
                    continue;
                }

                let neighbor_value = self.centered_value(&neighbor_index);
                if (neighbor_value > 0.0 && inside) || (neighbor_value < 0.0 && !inside) {
                    let distance = center_value / (center_value - neighbor_value) * spacing;
                    if nearest.value > distance {
                        nearest = LevelSetNode::new(neighbor_index, distance);
                    }
                }
            }

            nodes_used[axis] = nearest;
            neighbor_index[axis] = index[axis];
        }

        // Axes without a crossing keep the sentinel and sort last.
        nodes_used.sort_unstable_by(LevelSetNode::cmp_by_value);

        let sum_inverse_squares: Real = nodes_used
            .iter()
            .take_while(|node| node.value < self.large_value)
            .map(|node| 1.0 / (node.value * node.value))
            .sum();

        if sum_inverse_squares == 0.0 {
            return DistanceEstimate::Undetermined;
        }

        let distance = (1.0 / sum_inverse_squares).sqrt();
        if inside {
            DistanceEstimate::Inside(distance)
        } else {
            DistanceEstimate::Outside(distance)
        }
    }
}
