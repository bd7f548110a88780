//! Color extraction and matching
//!
//! This module contains the color-space side of the mosaic pipeline:
//! - Reducing candidate images to one mean color
//! - Finding the candidate closest to a sampled source color

/// Mean color extraction from decoded images
pub mod average;
/// Linear nearest-color search with stable tie-breaking
pub mod matching;

pub use average::{Color, average_color};
pub use matching::{MatchTarget, nearest_match, nearest_position, squared_distance};
