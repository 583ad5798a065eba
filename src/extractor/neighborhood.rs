//! The stateful extraction front end.

use super::ScanMode;
use super::estimate::ProbeContext;
use super::traits::{ScanOps, ScanSink};
use crate::errors::{ExtractError, ExtractResult};
use crate::float_types::Real;
use crate::grid::{GridIndex, LevelSetGrid, Region};
use crate::node::NodeContainer;
use crate::params::ExtractorParams;
use crate::pixel::LevelSetPixel;
use tracing::{debug, warn};

#[cfg(not(feature = "parallel"))]
use super::serial::SerialScanOps;

#[cfg(feature = "parallel")]
use super::parallel::ParallelScanOps;

/// Locates the grid points next to the level set of a field and estimates
/// their distance to it.
///
/// Each run rebuilds two containers from empty: points at or below the
/// level-set value go to [`inside_points`](Self::inside_points), points above
/// it to [`outside_points`](Self::outside_points). Both hold unsigned
/// distances; the container carries the sign.
///
/// The field and the optional narrow band are borrowed for `'a` and never
/// modified.
///
/// # Example
///
/// ```
/// use levelset_neighborhood::{DenseGrid, LevelSetNeighborhoodExtractor};
///
/// let field = DenseGrid::from_vec([4], vec![-1.5, -0.5, 0.5, 1.5]).unwrap();
/// let mut extractor = LevelSetNeighborhoodExtractor::new();
/// extractor.set_input_level_set(&field);
/// extractor.locate().unwrap();
///
/// assert_eq!(extractor.inside_points().len(), 1);
/// assert_eq!(extractor.outside_points().len(), 1);
/// assert_eq!(extractor.inside_points().as_slice()[0].value, 0.5);
/// ```
pub struct LevelSetNeighborhoodExtractor<'a, G, const D: usize>
where
    G: LevelSetGrid<D>,
{
    params: ExtractorParams,
    input_level_set: Option<&'a G>,
    input_narrow_band: Option<&'a NodeContainer<D>>,
    inside_points: NodeContainer<D>,
    outside_points: NodeContainer<D>,
    image_region: Option<Region<D>>,
    last_point_is_inside: bool,
    progress: Option<Box<dyn FnMut(f32) + 'a>>,
}

impl<'a, G, const D: usize> Default for LevelSetNeighborhoodExtractor<'a, G, D>
where
    G: LevelSetGrid<D>,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<'a, G, const D: usize> LevelSetNeighborhoodExtractor<'a, G, D>
where
    G: LevelSetGrid<D>,
{
    pub fn new() -> Self {
        Self::with_params(ExtractorParams::default())
    }

    pub fn with_params(params: ExtractorParams) -> Self {
        Self {
            params,
            input_level_set: None,
            input_narrow_band: None,
            inside_points: NodeContainer::new(),
            outside_points: NodeContainer::new(),
            image_region: None,
            last_point_is_inside: false,
            progress: None,
        }
    }

    pub fn set_input_level_set(&mut self, level_set: &'a G) {
        self.input_level_set = Some(level_set);
        self.image_region = None;
    }

    pub const fn input_level_set(&self) -> Option<&'a G> {
        self.input_level_set
    }

    /// Candidate nodes for [`ScanMode::NarrowBand`]. Only their indices are read.
    pub fn set_input_narrow_band(&mut self, band: &'a NodeContainer<D>) {
        self.input_narrow_band = Some(band);
    }

    pub const fn input_narrow_band(&self) -> Option<&'a NodeContainer<D>> {
        self.input_narrow_band
    }

    pub const fn params(&self) -> &ExtractorParams {
        &self.params
    }

    pub fn set_level_set_value(&mut self, value: Real) {
        self.params.level_set_value = value;
    }

    pub const fn level_set_value(&self) -> Real {
        self.params.level_set_value
    }

    pub fn set_narrow_banding(&mut self, enabled: bool) {
        self.params.narrow_banding = enabled;
    }

    pub const fn narrow_banding(&self) -> bool {
        self.params.narrow_banding
    }

    pub fn set_narrow_bandwidth(&mut self, width: Real) {
        self.params.narrow_bandwidth = width;
    }

    pub const fn narrow_bandwidth(&self) -> Real {
        self.params.narrow_bandwidth
    }

    /// Receive the fraction of candidates visited, in `[0, 1]`, during each run.
    pub fn set_progress_observer<F>(&mut self, observer: F)
    where
        F: FnMut(f32) + 'a,
    {
        self.progress = Some(Box::new(observer));
    }

    pub fn clear_progress_observer(&mut self) {
        self.progress = None;
    }

    /// The "no crossing found" distance: the maximum value of the field's pixel type.
    pub fn large_value(&self) -> Real {
        G::Pixel::large_value()
    }

    pub const fn inside_points(&self) -> &NodeContainer<D> {
        &self.inside_points
    }

    pub const fn outside_points(&self) -> &NodeContainer<D> {
        &self.outside_points
    }

    /// Classification of the most recently processed point.
    pub const fn last_point_is_inside(&self) -> bool {
        self.last_point_is_inside
    }

    /// Run in the mode selected by [`ExtractorParams::narrow_banding`].
    pub fn locate(&mut self) -> ExtractResult<()> {
        let mode = if self.params.narrow_banding {
            ScanMode::NarrowBand
        } else {
            ScanMode::Full
        };
        self.run(mode)
    }

    /// Perform one extraction.
    ///
    /// Missing inputs and a bad bandwidth are reported before either output
    /// container is touched.
    pub fn run(&mut self, mode: ScanMode) -> ExtractResult<()> {
        let Some(level_set) = self.input_level_set else {
            warn!("Level-set neighborhood extraction without an input level set");
            return Err(ExtractError::MissingLevelSet);
        };

        let band = match mode {
            ScanMode::Full => None,
            ScanMode::NarrowBand => {
                let Some(band) = self.input_narrow_band else {
                    warn!("Narrow-band extraction without an input narrow band");
                    return Err(ExtractError::MissingNarrowBand);
                };
                let half_bandwidth = self.params.half_bandwidth().inspect_err(|_| {
                    warn!(
                        bandwidth = self.params.narrow_bandwidth,
                        "Rejecting narrow bandwidth"
                    );
                })?;
                Some((band, half_bandwidth))
            },
        };

        let region = self.initialize(level_set);
        let candidates = band.map_or_else(|| region.num_points(), |(band, _)| band.len());
        debug!(
            mode = ?mode,
            candidates,
            level_set_value = self.params.level_set_value,
            "Starting level-set neighborhood extraction"
        );

        let context = ProbeContext::new(level_set, region, self.params.level_set_value);
        let mut sink = ScanSink {
            inside_points: &mut self.inside_points,
            outside_points: &mut self.outside_points,
            last_point_is_inside: &mut self.last_point_is_inside,
            progress: self.progress.as_deref_mut(),
        };

        #[cfg(not(feature = "parallel"))]
        let ops = SerialScanOps::new();
        #[cfg(feature = "parallel")]
        let ops = ParallelScanOps::new();

        match band {
            None => ops.scan_full(&context, &mut sink),
            Some((band, half_bandwidth)) => {
                ops.scan_narrow_band(&context, band, half_bandwidth, &mut sink)
            },
        }
        sink.progress(1.0);

        debug!(
            inside = self.inside_points.len(),
            outside = self.outside_points.len(),
            "Finished level-set neighborhood extraction"
        );
        Ok(())
    }

    /// Estimate a single point and append it to the current containers.
    ///
    /// Returns the distance, or [`large_value`](Self::large_value) when no
    /// axis has a neighbor across the level set. Containers are started
    /// fresh if no run has happened since the level set was set.
    pub fn calculate_distance(&mut self, index: &GridIndex<D>) -> ExtractResult<Real> {
        let Some(level_set) = self.input_level_set else {
            return Err(ExtractError::MissingLevelSet);
        };
        let region = match self.image_region {
            Some(region) => region,
            None => self.initialize(level_set),
        };
        if !region.contains(index) {
            return Err(ExtractError::IndexOutsideRegion(index.to_vec()));
        }

        let context = ProbeContext::new(level_set, region, self.params.level_set_value);
        let estimate = context.estimate(index);
        let mut sink = ScanSink {
            inside_points: &mut self.inside_points,
            outside_points: &mut self.outside_points,
            last_point_is_inside: &mut self.last_point_is_inside,
            progress: None,
        };
        sink.record(*index, estimate);

        Ok(estimate.distance(context.large_value()))
    }

    fn initialize(&mut self, level_set: &G) -> Region<D> {
        self.inside_points = NodeContainer::new();
        self.outside_points = NodeContainer::new();

        let region = level_set.buffered_region();
        self.image_region = Some(region);
        region
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grid::DenseGrid;
    use crate::node::LevelSetNode;
    use std::cell::RefCell;

    fn ramp() -> DenseGrid<f64, 1> {
        DenseGrid::from_vec([6], vec![-2.5, -1.5, -0.5, 0.5, 1.5, 2.5]).unwrap()
    }

    #[test]
    fn missing_level_set_is_reported() {
        let mut extractor: LevelSetNeighborhoodExtractor<'_, DenseGrid<f64, 1>, 1> =
            LevelSetNeighborhoodExtractor::new();
        assert_eq!(extractor.locate(), Err(ExtractError::MissingLevelSet));
        assert_eq!(
            extractor.calculate_distance(&[0]),
            Err(ExtractError::MissingLevelSet)
        );
        assert!(extractor.inside_points().is_empty());
    }

    #[test]
    fn missing_band_leaves_previous_outputs() {
        let field = ramp();
        let mut extractor = LevelSetNeighborhoodExtractor::new();
        extractor.set_input_level_set(&field);
        extractor.run(ScanMode::Full).unwrap();
        let inside = extractor.inside_points().clone();

        extractor.set_narrow_banding(true);
        assert_eq!(extractor.locate(), Err(ExtractError::MissingNarrowBand));
        assert_eq!(extractor.inside_points(), &inside);
    }

    #[test]
    fn negative_bandwidth_is_rejected() {
        let field = ramp();
        let band = NodeContainer::from(vec![LevelSetNode::new([2], 0.0)]);
        let mut extractor = LevelSetNeighborhoodExtractor::new();
        extractor.set_input_level_set(&field);
        extractor.set_input_narrow_band(&band);
        extractor.set_narrow_bandwidth(-1.0);
        assert_eq!(
            extractor.run(ScanMode::NarrowBand),
            Err(ExtractError::InvalidBandwidth(-1.0))
        );
    }

    #[test]
    fn single_point_queries_accumulate() {
        let field = ramp();
        let mut extractor = LevelSetNeighborhoodExtractor::new();
        extractor.set_input_level_set(&field);

        assert_eq!(extractor.calculate_distance(&[3]), Ok(0.5));
        assert!(!extractor.last_point_is_inside());
        assert_eq!(extractor.calculate_distance(&[2]), Ok(0.5));
        assert!(extractor.last_point_is_inside());
        assert_eq!(extractor.calculate_distance(&[0]), Ok(extractor.large_value()));
        assert!(!extractor.last_point_is_inside());

        assert_eq!(extractor.inside_points().len(), 1);
        assert_eq!(extractor.outside_points().len(), 1);
        assert_eq!(
            extractor.calculate_distance(&[6]),
            Err(ExtractError::IndexOutsideRegion(vec![6]))
        );
    }

    #[test]
    fn inputs_and_params_are_reported_back() {
        let field = ramp();
        let band = NodeContainer::from(vec![LevelSetNode::new([2], 0.0)]);
        let mut extractor = LevelSetNeighborhoodExtractor::with_params(
            ExtractorParams::default().narrow_bandwidth(3.0),
        );
        assert!(extractor.input_level_set().is_none());

        extractor.set_input_level_set(&field);
        assert!(extractor.input_level_set().is_some());
        assert!(extractor.input_narrow_band().is_none());
        assert_eq!(extractor.params().narrow_bandwidth, 3.0);
        assert!(!extractor.params().narrow_banding);

        extractor.set_input_narrow_band(&band);
        extractor.set_narrow_banding(true);
        assert_eq!(extractor.input_narrow_band().map(NodeContainer::len), Some(1));
        assert!(extractor.params().narrow_banding);
    }

    #[test]
    fn cleared_observer_is_not_called() {
        let field = ramp();
        let seen = RefCell::new(Vec::new());
        let mut extractor = LevelSetNeighborhoodExtractor::new();
        extractor.set_input_level_set(&field);
        extractor.set_progress_observer(|fraction| seen.borrow_mut().push(fraction));
        extractor.clear_progress_observer();
        extractor.locate().unwrap();
        drop(extractor);

        assert!(seen.into_inner().is_empty());
    }

    #[test]
    fn progress_ends_at_one() {
        let field = ramp();
        let seen = RefCell::new(Vec::new());
        let mut extractor = LevelSetNeighborhoodExtractor::new();
        extractor.set_input_level_set(&field);
        extractor.set_progress_observer(|fraction| seen.borrow_mut().push(fraction));
        extractor.locate().unwrap();
        drop(extractor);

        let seen = seen.into_inner();
        assert_eq!(seen.first(), Some(&0.0));
        assert_eq!(seen.last(), Some(&1.0));
        assert_eq!(seen.len(), 7);
    }
}
