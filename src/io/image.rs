//! Image decoding and PNG export for sources, candidates and mosaics

use crate::io::error::{MosaicError, Result, file_system};
use image::{DynamicImage, ImageFormat, RgbImage};
use std::path::Path;

/// Decode a candidate tile image
///
/// # Errors
///
/// Returns [`MosaicError::ImageLoad`] if the file is missing, truncated or
/// in an unsupported format
pub fn open_candidate(path: &Path) -> Result<DynamicImage> {
    image::open(path).map_err(|e| MosaicError::ImageLoad {
        path: path.to_path_buf(),
        source: e,
    })
}

/// Decode the source photograph
///
/// # Errors
///
/// Returns [`MosaicError::SourceUnreadable`] if the image cannot be decoded
pub fn open_source(path: &Path) -> Result<DynamicImage> {
    image::open(path).map_err(|e| MosaicError::SourceUnreadable {
        path: path.to_path_buf(),
        source: e,
    })
}

/// Whether the decoded image carries luminance only
pub fn is_grayscale(image: &DynamicImage) -> bool {
    !image.color().has_color()
}

/// Export a finished mosaic as PNG
///
/// # Errors
///
/// Returns an error if:
/// - The parent directory cannot be created
/// - The image cannot be encoded or written to the specified path
pub fn save_png(mosaic: &RgbImage, output_path: &Path) -> Result<()> {
    if let Some(parent) = output_path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)
            .map_err(|e| file_system(parent, "create directory", e))?;
    }

    mosaic
        .save_with_format(output_path, ImageFormat::Png)
        .map_err(|e| MosaicError::ImageExport {
            path: output_path.to_path_buf(),
            source: e,
        })
}
