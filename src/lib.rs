//! Photomosaic generation by average-color matching
//!
//! A collection of candidate images is reduced to an ordered index of mean
//! colors. Each cell of a zoomed output grid is then filled with the
//! candidate whose mean color is closest to the corresponding source pixel.

#![forbid(unsafe_code)]

/// Mean color extraction and nearest-color matching
pub mod color;
/// Candidate color index, collection scanning and persistence
pub mod colormap;
/// Input/output operations, configuration and error handling
pub mod io;
/// Grid geometry, thumbnails and mosaic assembly
pub mod mosaic;

pub use color::Color;
pub use colormap::{ColorIndex, ColorSample, ColormapBuilder};
pub use io::configuration::MosaicConfig;
pub use io::error::{MosaicError, Result};
pub use mosaic::{MosaicAssembler, build_mosaic, build_mosaic_to_file};
