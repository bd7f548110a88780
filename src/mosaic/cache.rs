use crate::io::configuration::ResizeFilter;
use crate::io::error::Result;
use crate::io::image::open_candidate;
use image::imageops::{self, FilterType};
use image::{DynamicImage, RgbImage};
use std::collections::HashMap;
use std::path::{Path, PathBuf};

/// Target size of a thumbnail for a `width` x `height` candidate
///
/// The shorter side becomes `thumb_size` and the longer side is scaled in
/// proportion (rounded half away from zero), so the result covers a
/// `thumb_size` square and overflows it along the longer axis.
pub fn thumbnail_dimensions(width: u32, height: u32, thumb_size: u32) -> (u32, u32) {
    if width == 0 || height == 0 {
        return (thumb_size, thumb_size);
    }

    let thumb = f64::from(thumb_size);
    let scaled_height = (f64::from(height) / f64::from(width) * thumb).round() as u32;

    // Wider than tall: fill the height instead and let the width overflow
    if thumb_size > scaled_height {
        let scaled_width = (f64::from(width) / f64::from(height) * thumb).round() as u32;
        (scaled_width.max(1), thumb_size)
    } else {
        (thumb_size, scaled_height.max(1))
    }
}

/// Resize a decoded candidate to its thumbnail
pub fn make_thumbnail(image: &DynamicImage, thumb_size: u32, filter: FilterType) -> RgbImage {
    let (width, height) = thumbnail_dimensions(image.width(), image.height(), thumb_size);
    imageops::resize(&image.to_rgb8(), width, height, filter)
}

/// Performance metrics for cache effectiveness
#[derive(Default, Debug, Clone, Copy, PartialEq, Eq)]
pub struct CacheStats {
    /// Number of cache hits
    pub hits: usize,
    /// Number of cache misses
    pub misses: usize,
}

/// Resized candidates memoized for the duration of one mosaic build
///
/// Each candidate is decoded and resized at most once; later requests get
/// the stored thumbnail back.
pub struct ThumbnailCache {
    thumb_size: u32,
    filter: FilterType,
    thumbnails: HashMap<PathBuf, RgbImage>,

    /// Cache performance statistics
    pub stats: CacheStats,
}

impl ThumbnailCache {
    /// Create an empty cache producing `thumb_size` thumbnails
    pub fn new(thumb_size: u32, filter: ResizeFilter) -> Self {
        Self {
            thumb_size,
            filter: filter.into(),
            thumbnails: HashMap::new(),
            stats: CacheStats::default(),
        }
    }

    /// Thumbnail edge length this cache produces
    pub const fn thumb_size(&self) -> u32 {
        self.thumb_size
    }

    /// Number of distinct thumbnails held
    pub fn len(&self) -> usize {
        self.thumbnails.len()
    }

    /// Whether no thumbnail has been created yet
    pub fn is_empty(&self) -> bool {
        self.thumbnails.is_empty()
    }

    /// Retrieve the stored thumbnail for `path` or create and store it
    ///
    /// `create` runs only on a miss. A failed creation stores nothing.
    ///
    /// # Errors
    ///
    /// Propagates the error returned by `create`
    pub fn get_or_try_insert_with<F>(&mut self, path: &Path, create: F) -> Result<&RgbImage>
    where
        F: FnOnce() -> Result<RgbImage>,
    {
        use std::collections::hash_map::Entry;

        match self.thumbnails.entry(path.to_path_buf()) {
            Entry::Occupied(entry) => {
                self.stats.hits += 1;
                Ok(entry.into_mut())
            }
            Entry::Vacant(entry) => {
                self.stats.misses += 1;
                Ok(entry.insert(create()?))
            }
        }
    }

    /// Thumbnail of the candidate at `path`, decoding it on first use
    ///
    /// # Errors
    ///
    /// Returns an error if the candidate cannot be decoded
    pub fn get_or_load(&mut self, path: &Path) -> Result<&RgbImage> {
        let (thumb_size, filter) = (self.thumb_size, self.filter);
        self.get_or_try_insert_with(path, || {
            let image = open_candidate(path)?;
            Ok(make_thumbnail(&image, thumb_size, filter))
        })
    }
}
