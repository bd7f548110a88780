//! Color index of a candidate collection
//!
//! This module contains:
//! - The ordered index of candidate colors
//! - Collection scanning and cache reuse
//! - The persisted colormap artifact

/// Collection scanning and load-or-build logic
pub mod builder;
/// Ordered color samples
pub mod index;
/// Versioned colormap artifact
pub mod persistence;

pub use builder::ColormapBuilder;
pub use index::{ColorIndex, ColorSample};
