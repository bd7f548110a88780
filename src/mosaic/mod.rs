//! Mosaic grid, thumbnails and assembly
//!
//! This module contains the output side of the pipeline:
//! - Grid geometry and source sampling
//! - Fuzzing of sampled colors
//! - The per-build thumbnail cache
//! - The assembler that ties matching and pasting together

/// Matching and compositing over the grid
pub mod assembler;
/// Thumbnail resizing and memoization
pub mod cache;
/// Random color jitter
pub mod fuzz;
/// Canvas geometry and cell iteration
pub mod grid;
/// Source raster sampling
pub mod source;

pub use assembler::{MosaicAssembler, build_mosaic, build_mosaic_to_file};
pub use grid::Grid;
