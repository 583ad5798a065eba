//! Serial implementation of level-set scans

use super::estimate::ProbeContext;
use super::traits::{ScanOps, ScanSink, progress_fraction, update_visits};
use crate::float_types::Real;
use crate::grid::LevelSetGrid;
use crate::node::NodeContainer;

/// Serial implementation of `ScanOps`
pub struct SerialScanOps;

impl SerialScanOps {
    pub const fn new() -> Self {
        Self
    }
}

impl Default for SerialScanOps {
    fn default() -> Self {
        Self::new()
    }
}

impl ScanOps for SerialScanOps {
    fn scan_full<G, const D: usize>(
        &self,
        context: &ProbeContext<'_, G, D>,
        sink: &mut ScanSink<'_, '_, D>,
    ) where
        G: LevelSetGrid<D>,
    {
        let total = context.region().num_points();
        let update = update_visits(total);

        for (visited, index) in context.region().iter().enumerate() {
            if visited % update == 0 {
                sink.progress(progress_fraction(visited, total));
            }
            sink.record(index, context.estimate(&index));
        }
    }

    fn scan_narrow_band<G, const D: usize>(
        &self,
        context: &ProbeContext<'_, G, D>,
        band: &NodeContainer<D>,
        half_bandwidth: Real,
        sink: &mut ScanSink<'_, '_, D>,
    ) where
        G: LevelSetGrid<D>,
    {
        let total = band.len();
        let update = update_visits(total);

        for (visited, node) in band.iter().enumerate() {
            if visited % update == 0 {
                sink.progress(progress_fraction(visited, total));
            }
            if context.within_band(&node.index, half_bandwidth) {
                sink.record(node.index, context.estimate(&node.index));
            }
        }
    }
}
