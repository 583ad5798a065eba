//! Parallel implementation of level-set scans
//!
//! Candidates are estimated with rayon one progress step at a time. Each
//! step's estimates come back in candidate order and are recorded serially,
//! so the containers end up exactly as a serial scan would leave them.

use super::estimate::ProbeContext;
use super::traits::{ScanOps, ScanSink, progress_fraction, update_visits};
use crate::float_types::Real;
use crate::grid::LevelSetGrid;
use crate::node::NodeContainer;
use rayon::prelude::*;

/// Parallel implementation of `ScanOps`
pub struct ParallelScanOps;

impl ParallelScanOps {
    pub const fn new() -> Self {
        Self
    }
}

impl Default for ParallelScanOps {
    fn default() -> Self {
        Self::new()
    }
}

impl ScanOps for ParallelScanOps {
    fn scan_full<G, const D: usize>(
        &self,
        context: &ProbeContext<'_, G, D>,
        sink: &mut ScanSink<'_, '_, D>,
    ) where
        G: LevelSetGrid<D>,
    {
        let region = *context.region();
        let total = region.num_points();
        let update = update_visits(total);

        for chunk_start in (0..total).step_by(update) {
            sink.progress(progress_fraction(chunk_start, total));

            let chunk_end = (chunk_start + update).min(total);
            let estimates: Vec<_> = (chunk_start..chunk_end)
                .into_par_iter()
                .map(|offset| {
                    let index = region.delinearize(offset);
                    (index, context.estimate(&index))
                })
                .collect();

            for (index, estimate) in estimates {
                sink.record(index, estimate);
            }
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

        for (step, chunk) in band.as_slice().chunks(update).enumerate() {
            sink.progress(progress_fraction(step * update, total));

            let estimates: Vec<_> = chunk
                .par_iter()
                .filter(|node| context.within_band(&node.index, half_bandwidth))
                .map(|node| (node.index, context.estimate(&node.index)))
                .collect();

            for (index, estimate) in estimates {
                sink.record(index, estimate);
            }
        }
    }
}
