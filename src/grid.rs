//! Grid shape, index region and field access for level-set images.
//!
//! Indices are signed so a neighbor one step outside the region can be
//! formed and rejected by [`Region::contains`]. Regions iterate with axis 0
//! varying fastest, the natural order of a row-major image buffer.

use crate::errors::{ExtractError, ExtractResult};
use crate::float_types::Real;
use crate::pixel::LevelSetPixel;
use nalgebra::SVector;

/// An N-dimensional sample coordinate.
pub type GridIndex<const D: usize> = [i64; D];

/// A bounded, axis-aligned block of grid indices.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Region<const D: usize> {
    pub start: GridIndex<D>,
    pub size: [usize; D],
}

impl<const D: usize> Region<D> {
    #[inline]
    pub const fn new(start: GridIndex<D>, size: [usize; D]) -> Self {
        Self { start, size }
    }

    /// A region of the given size starting at the origin index.
    #[inline]
    pub const fn from_size(size: [usize; D]) -> Self {
        Self {
            start: [0; D],
            size,
        }
    }

    /// Total number of indices in the region.
    pub fn num_points(&self) -> usize {
        self.size.iter().product()
    }

    pub fn is_empty(&self) -> bool {
        self.num_points() == 0
    }

    #[inline]
    pub fn contains(&self, index: &GridIndex<D>) -> bool {
        (0..D).all(|axis| match index[axis].checked_sub(self.start[axis]) {
            Some(offset) => offset >= 0 && (offset as u64) < self.size[axis] as u64,
            None => false,
        })
    }

    /// Buffer offset of `index`, or `None` when it lies outside the region.
    pub fn linearize(&self, index: &GridIndex<D>) -> Option<usize> {
        if !self.contains(index) {
            return None;
        }
        let mut offset = 0;
        let mut stride = 1;
        for axis in 0..D {
            offset += (index[axis] - self.start[axis]) as usize * stride;
            stride *= self.size[axis];
        }
        Some(offset)
    }

    /// Inverse of [`Region::linearize`] for `offset < num_points()`.
    pub fn delinearize(&self, mut offset: usize) -> GridIndex<D> {
        let mut index = self.start;
        for axis in 0..D {
            index[axis] += (offset % self.size[axis]) as i64;
            offset /= self.size[axis];
        }
        index
    }

    /// Every index of the region exactly once, axis 0 fastest.
    pub fn iter(&self) -> impl ExactSizeIterator<Item = GridIndex<D>> + '_ {
        (0..self.num_points()).map(move |offset| self.delinearize(offset))
    }
}

/// Read-only access to a sampled level-set field.
pub trait LevelSetGrid<const D: usize>: Sync {
    type Pixel: LevelSetPixel;

    /// Sample at `index`. Only called for indices inside [`LevelSetGrid::buffered_region`].
    fn pixel(&self, index: &GridIndex<D>) -> Self::Pixel;

    fn buffered_region(&self) -> Region<D>;

    /// Physical distance between neighboring samples along each axis.
    fn spacing(&self) -> SVector<Real, D>;

    fn region_contains(&self, index: &GridIndex<D>) -> bool {
        self.buffered_region().contains(index)
    }
}

/// A field stored as a dense buffer over a [`Region`].
#[derive(Clone, Debug, PartialEq)]
pub struct DenseGrid<P: LevelSetPixel, const D: usize> {
    data: Vec<P>,
    region: Region<D>,
    spacing: SVector<Real, D>,
    origin: SVector<Real, D>,
}

impl<P: LevelSetPixel, const D: usize> DenseGrid<P, D> {
    /// A grid of `size` samples all set to `fill`, unit spacing, origin at zero.
    pub fn new(size: [usize; D], fill: P) -> Self {
        let region = Region::from_size(size);
        Self {
            data: vec![fill; region.num_points()],
            region,
            spacing: SVector::repeat(1.0),
            origin: SVector::zeros(),
        }
    }

    /// Wrap an existing buffer laid out with axis 0 fastest.
    pub fn from_vec(size: [usize; D], data: Vec<P>) -> ExtractResult<Self> {
        let region = Region::from_size(size);
        if data.len() != region.num_points() {
            return Err(ExtractError::BufferSizeMismatch {
                expected: region.num_points(),
                actual: data.len(),
            });
        }
        Ok(Self {
            data,
            region,
            spacing: SVector::repeat(1.0),
            origin: SVector::zeros(),
        })
    }

    /// Sample `f` at every index of a region of `size`.
    pub fn from_fn<F>(size: [usize; D], mut f: F) -> Self
    where
        F: FnMut(&GridIndex<D>) -> P,
    {
        let region = Region::from_size(size);
        let data = region.iter().map(|index| f(&index)).collect();
        Self {
            data,
            region,
            spacing: SVector::repeat(1.0),
            origin: SVector::zeros(),
        }
    }

    pub fn with_spacing(mut self, spacing: [Real; D]) -> Self {
        self.spacing = SVector::from(spacing);
        self
    }

    pub fn with_origin(mut self, origin: [Real; D]) -> Self {
        self.origin = SVector::from(origin);
        self
    }

    /// Shift the region so it starts at `start` instead of the zero index.
    pub fn with_region_start(mut self, start: GridIndex<D>) -> Self {
        self.region.start = start;
        self
    }

    pub const fn region(&self) -> &Region<D> {
        &self.region
    }

    pub fn as_slice(&self) -> &[P] {
        &self.data
    }

    pub fn get(&self, index: &GridIndex<D>) -> Option<P> {
        self.region.linearize(index).map(|offset| self.data[offset])
    }

    pub fn get_mut(&mut self, index: &GridIndex<D>) -> Option<&mut P> {
        let offset = self.region.linearize(index)?;
        self.data.get_mut(offset)
    }

    /// Physical position of a sample: `origin + index * spacing` per axis.
    pub fn index_to_point(&self, index: &GridIndex<D>) -> SVector<Real, D> {
        self.origin + SVector::from_fn(|axis, _| index[axis] as Real * self.spacing[axis])
    }

    /// A grid of the same geometry with every sample passed through `f`.
    pub fn map<Q, F>(&self, f: F) -> DenseGrid<Q, D>
    where
        Q: LevelSetPixel,
        F: FnMut(P) -> Q,
    {
        DenseGrid {
            data: self.data.iter().copied().map(f).collect(),
            region: self.region,
            spacing: self.spacing,
            origin: self.origin,
        }
    }
}

impl<P: LevelSetPixel, const D: usize> LevelSetGrid<D> for DenseGrid<P, D> {
    type Pixel = P;

    /// # Panics
    /// If `index` lies outside the buffered region.
    #[inline]
    fn pixel(&self, index: &GridIndex<D>) -> P {
        match self.region.linearize(index) {
            Some(offset) => self.data[offset],
            None => panic!(
                "index {index:?} outside buffered region {:?}",
                self.region
            ),
        }
    }

    fn buffered_region(&self) -> Region<D> {
        self.region
    }

    fn spacing(&self) -> SVector<Real, D> {
        self.spacing
    }
}
