//! Mosaic constants and runtime configuration defaults

use crate::io::error::{Result, invalid_parameter};
use image::imageops::FilterType;

// Default values for configurable parameters
/// Scale factor between source resolution and canvas resolution
pub const DEFAULT_ZOOM: u32 = 20;
/// Edge length of one grid cell in canvas pixels
pub const DEFAULT_THUMB_SIZE: u32 = 60;
/// Maximum per-channel jitter applied to sampled source colors
pub const DEFAULT_FUZZ: u32 = 0;

// Collection settings
/// Name of the persisted colormap inside a collection directory
pub const COLORMAP_FILE_NAME: &str = ".colormap";
/// File extensions treated as candidate images (case-insensitive)
pub const CANDIDATE_EXTENSIONS: &[&str] = &["jpg", "jpeg"];

/// Format tag written into every colormap artifact
pub const COLORMAP_FORMAT: &str = "colormosaic-colormap";
// Bump whenever the artifact layout changes; older files are rebuilt
/// Schema version of the colormap artifact
pub const COLORMAP_VERSION: u32 = 1;

// Output settings
/// Suffix added to output filenames when no output path is given
pub const OUTPUT_SUFFIX: &str = "_mosaic";
/// Extension of generated mosaics
pub const OUTPUT_EXTENSION: &str = "png";

// Progress bar display settings
/// Width of progress bars in characters
pub const PROGRESS_BAR_WIDTH: u16 = 40;

/// Resampling filter used when shrinking candidates to thumbnails
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum ResizeFilter {
    /// Nearest neighbour, fastest and blockiest
    #[default]
    Nearest,
    /// Bilinear
    Triangle,
    /// Bicubic
    CatmullRom,
    /// Windowed sinc, slowest
    Lanczos3,
}

impl From<ResizeFilter> for FilterType {
    fn from(filter: ResizeFilter) -> Self {
        match filter {
            ResizeFilter::Nearest => Self::Nearest,
            ResizeFilter::Triangle => Self::Triangle,
            ResizeFilter::CatmullRom => Self::CatmullRom,
            ResizeFilter::Lanczos3 => Self::Lanczos3,
        }
    }
}

/// Parameters controlling a single mosaic build
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MosaicConfig {
    /// Canvas pixels per source pixel along each axis
    pub zoom: u32,
    /// Edge length of a grid cell
    pub thumb_size: u32,
    /// Per-channel jitter magnitude, 0 disables fuzzing
    pub fuzz: u32,
    /// Seed for the fuzz generator; `None` draws from OS entropy
    pub seed: Option<u64>,
    /// Rescan the collection even when a colormap artifact exists
    pub rebuild_colormap: bool,
    /// Filter used to resize thumbnails
    pub filter: ResizeFilter,
}

impl Default for MosaicConfig {
    fn default() -> Self {
        Self {
            zoom: DEFAULT_ZOOM,
            thumb_size: DEFAULT_THUMB_SIZE,
            fuzz: DEFAULT_FUZZ,
            seed: None,
            rebuild_colormap: false,
            filter: ResizeFilter::default(),
        }
    }
}

impl MosaicConfig {
    /// Check parameter ranges before any image work starts
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - `zoom` or `thumb_size` is zero
    /// - `fuzz` does not fit in an `i32`
    pub fn validate(&self) -> Result<()> {
        if self.zoom == 0 {
            return Err(invalid_parameter("zoom", &self.zoom, &"must be at least 1"));
        }
        if self.thumb_size == 0 {
            return Err(invalid_parameter(
                "thumb_size",
                &self.thumb_size,
                &"must be at least 1",
            ));
        }
        if i32::try_from(self.fuzz).is_err() {
            return Err(invalid_parameter(
                "fuzz",
                &self.fuzz,
                &format!("must be at most {}", i32::MAX),
            ));
        }
        Ok(())
    }
}
