//! Test support library
//! Provides field builders and comparison helpers shared by the integration suites.

#![allow(dead_code)]

use levelset_neighborhood::{
    DenseGrid, LevelSetGrid, LevelSetNode, NodeContainer, Real,
    extractor::{DistanceEstimate, ProbeContext},
};

/// Quick helper to compare floating-point results with an acceptable tolerance.
pub fn approx_eq(a: Real, b: Real, eps: Real) -> bool {
    (a - b).abs() < eps
}

/// Signed distance to a circle of `radius` around `center`, sampled on a unit grid.
pub fn circle_field(size: [usize; 2], center: [Real; 2], radius: Real) -> DenseGrid<Real, 2> {
    DenseGrid::from_fn(size, |index| {
        let dx = index[0] as Real - center[0];
        let dy = index[1] as Real - center[1];
        (dx * dx + dy * dy).sqrt() - radius
    })
}

/// Signed distance to a sphere, sampled on a unit grid.
pub fn sphere_field(size: [usize; 3], center: [Real; 3], radius: Real) -> DenseGrid<Real, 3> {
    DenseGrid::from_fn(size, |index| {
        let squared: Real = (0..3)
            .map(|axis| {
                let d = index[axis] as Real - center[axis];
                d * d
            })
            .sum();
        squared.sqrt() - radius
    })
}

/// A narrow band holding every index of the grid, in region order.
pub fn band_of_all<G: LevelSetGrid<D>, const D: usize>(grid: &G) -> NodeContainer<D> {
    grid.buffered_region()
        .iter()
        .map(|index| LevelSetNode::new(index, 0.0))
        .collect()
}

/// How many indices of the grid have no crossing neighbor on any axis.
pub fn count_undetermined<G: LevelSetGrid<D>, const D: usize>(
    grid: &G,
    level_set_value: Real,
) -> usize {
    let context = ProbeContext::new(grid, grid.buffered_region(), level_set_value);
    grid.buffered_region()
        .iter()
        .filter(|index| context.estimate(index) == DistanceEstimate::Undetermined)
        .count()
}

/// Interpolated distance to the nearest strictly-across neighbor along each
/// axis of `index`, skipping axes without one. Unit spacing.
pub fn axis_crossings<const D: usize>(
    grid: &DenseGrid<Real, D>,
    index: &[i64; D],
    level_set_value: Real,
) -> Vec<Real> {
    let center = grid.pixel(index) - level_set_value;
    (0..D)
        .filter_map(|axis| {
            [-1, 1]
                .into_iter()
                .filter_map(|step| {
                    let mut neighbor = *index;
                    neighbor[axis] += step;
                    let value = grid.get(&neighbor)? - level_set_value;
                    let across = if center <= 0.0 { value > 0.0 } else { value < 0.0 };
                    across.then(|| center / (center - value))
                })
                .min_by(|a, b| a.total_cmp(b))
        })
        .collect()
}
