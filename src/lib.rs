//! Narrow-band distance extraction around the zero crossing of a sampled
//! **level-set** field.
//!
//! For every relevant grid point the crate estimates the distance to the
//! level set, by linear interpolation along each axis combined across axes,
//! and sorts the point into an *inside* or *outside* set. Level-set
//! segmentation uses the two sets to reinitialize or advance its evolution.
//!
//! Fields are read through the [`LevelSetGrid`] trait; [`DenseGrid`] is a
//! ready-made owned implementation. Extraction is driven by
//! [`LevelSetNeighborhoodExtractor`], either over the whole buffered region
//! or restricted to a caller-supplied narrow band of candidate nodes.
//!
//! # Features
//! #### Default
//! - **f64**: use f64 as Real
//!
//! #### Optional
//! - **f32**: use f32 as Real, this conflicts with f64
//! - **parallel**: use rayon to estimate candidates concurrently; output order is unchanged

#![forbid(unsafe_code)]
#![deny(unused)]
#![warn(clippy::missing_const_for_fn, clippy::all)]

pub mod errors;
pub mod extractor;
pub mod float_types;
pub mod grid;
pub mod node;
pub mod params;
pub mod pixel;

#[cfg(any(all(feature = "f64", feature = "f32"), not(any(feature = "f64", feature = "f32"))))]
compile_error!("Either 'f64' or 'f32' feature must be specified, but not both");

pub use errors::{ExtractError, ExtractResult};
pub use extractor::{DistanceEstimate, LevelSetNeighborhoodExtractor, ScanMode};
pub use float_types::Real;
pub use grid::{DenseGrid, GridIndex, LevelSetGrid, Region};
pub use node::{LevelSetNode, NodeContainer};
pub use params::ExtractorParams;
pub use pixel::LevelSetPixel;
