//! Mosaic assembly over the output grid
//!
//! Every cell samples one source pixel, optionally jitters it, looks up the
//! closest candidate and pastes that candidate's thumbnail at the cell's
//! top-left corner. Matching is pure and runs in parallel; pasting happens
//! strictly in row-major order because oversized thumbnails overlap the
//! next cells and the last paste wins.

use crate::color::matching::{MatchTarget, nearest_position};
use crate::colormap::builder::ColormapBuilder;
use crate::colormap::index::ColorIndex;
use crate::io::configuration::MosaicConfig;
use crate::io::diagnostics::{Diagnostic, Diagnostics};
use crate::io::error::{MosaicError, Result};
use crate::io::image::{open_source, save_png};
use crate::mosaic::cache::ThumbnailCache;
use crate::mosaic::fuzz::Fuzz;
use crate::mosaic::grid::{Cell, Grid};
use crate::mosaic::source::SourceRaster;
use image::{DynamicImage, Rgb, RgbImage, imageops};
use rayon::prelude::*;
use std::path::Path;

/// Canvas color before any thumbnail is pasted
pub const BACKGROUND: Rgb<u8> = Rgb([255, 255, 255]);

/// Composes mosaics from a fixed color index
pub struct MosaicAssembler<'a> {
    index: &'a ColorIndex,
    config: MosaicConfig,
}

impl<'a> MosaicAssembler<'a> {
    /// Assembler matching against `index`
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - `config` has a zero zoom or thumbnail size
    /// - `index` holds no candidates
    pub fn new(index: &'a ColorIndex, config: MosaicConfig) -> Result<Self> {
        config.validate()?;
        if index.is_empty() {
            return Err(MosaicError::EmptyColorIndex);
        }
        Ok(Self { index, config })
    }

    /// Grid laid over `source` with this assembler's zoom and cell size
    ///
    /// # Errors
    ///
    /// Returns an error if the zoomed canvas would overflow
    pub fn grid_for(&self, source: &DynamicImage) -> Result<Grid> {
        Grid::new(
            source.width(),
            source.height(),
            self.config.zoom,
            self.config.thumb_size,
        )
    }

    // Fuzz draws happen here, sequentially, so a seed fixes every target
    fn cell_targets(
        &self,
        grid: &Grid,
        raster: &SourceRaster,
    ) -> Result<Vec<(Cell, MatchTarget)>> {
        let mut fuzz = Fuzz::new(self.config.fuzz, self.config.seed)?;
        Ok(grid
            .cells()
            .filter_map(|cell| {
                let (x, y) = grid.source_position(cell);
                // Positions stay inside the source because the canvas is an
                // exact multiple of it
                raster
                    .sample(x, y)
                    .map(|sample| (cell, fuzz.perturb(sample)))
            })
            .collect())
    }

    /// Build the mosaic for an already decoded source
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The zoomed canvas would overflow
    /// - A matched candidate can no longer be decoded
    pub fn assemble(
        &self,
        source: &DynamicImage,
        diagnostics: &dyn Diagnostics,
    ) -> Result<RgbImage> {
        let grid = self.grid_for(source)?;
        let raster = SourceRaster::from(source);
        let mut canvas = RgbImage::from_pixel(grid.width(), grid.height(), BACKGROUND);

        diagnostics.report(Diagnostic::MosaicStarted {
            width: grid.width(),
            height: grid.height(),
            rows: grid.rows(),
        });

        let targets = self.cell_targets(&grid, &raster)?;
        let samples = self.index.samples();
        let matches = targets
            .par_iter()
            .map(|(_, target)| nearest_position(*target, samples))
            .collect::<Option<Vec<usize>>>()
            .ok_or(MosaicError::EmptyColorIndex)?;

        let mut cache = ThumbnailCache::new(self.config.thumb_size, self.config.filter);
        for ((cell, _), position) in targets.iter().zip(matches) {
            let sample = self.index.get(position).ok_or(MosaicError::EmptyColorIndex)?;
            let thumbnail = cache.get_or_load(&sample.path)?;
            imageops::replace(
                &mut canvas,
                thumbnail,
                i64::from(cell.x),
                i64::from(cell.y),
            );

            if cell.x.saturating_add(grid.thumb_size()) >= grid.width() {
                diagnostics.report(Diagnostic::RowCompleted {
                    row: cell.row,
                    rows: grid.rows(),
                });
            }
        }

        diagnostics.report(Diagnostic::MosaicFinished {
            thumbnails: cache.len(),
        });
        Ok(canvas)
    }
}

/// Build a mosaic of the image at `source_path` from the candidates of
/// `colormap`
///
/// The source is opened first so an unreadable source never triggers a
/// collection scan. The colormap is reused from disk unless
/// `config.rebuild_colormap` is set.
///
/// # Errors
///
/// Returns an error if:
/// - `config` is invalid
/// - The source image cannot be decoded
/// - The collection cannot be read or yields no usable candidates
/// - A matched candidate can no longer be decoded
pub fn build_mosaic(
    source_path: &Path,
    colormap: &ColormapBuilder,
    config: &MosaicConfig,
    diagnostics: &dyn Diagnostics,
) -> Result<RgbImage> {
    config.validate()?;
    let source = open_source(source_path)?;
    let index = colormap.load_or_build(config.rebuild_colormap, diagnostics)?;
    MosaicAssembler::new(&index, *config)?.assemble(&source, diagnostics)
}

/// Build a mosaic and write it as PNG to `output_path`
///
/// Nothing is written when the build fails.
///
/// # Errors
///
/// Returns an error if the build fails or the PNG cannot be written
pub fn build_mosaic_to_file(
    source_path: &Path,
    colormap: &ColormapBuilder,
    config: &MosaicConfig,
    output_path: &Path,
    diagnostics: &dyn Diagnostics,
) -> Result<()> {
    let mosaic = build_mosaic(source_path, colormap, config, diagnostics)?;
    save_png(&mosaic, output_path)
}
