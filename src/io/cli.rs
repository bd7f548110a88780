//! Command-line interface for building a single mosaic

use crate::colormap::builder::ColormapBuilder;
use crate::io::configuration::{
    DEFAULT_FUZZ, DEFAULT_THUMB_SIZE, DEFAULT_ZOOM, MosaicConfig, OUTPUT_EXTENSION, OUTPUT_SUFFIX,
    ResizeFilter,
};
use crate::io::diagnostics::{Diagnostics, TracingDiagnostics};
use crate::io::error::Result;
use crate::io::progress::ProgressDiagnostics;
use crate::mosaic::assembler::build_mosaic_to_file;
use clap::Parser;
use std::path::{Path, PathBuf};

#[derive(Parser, Debug)]
#[command(name = "colormosaic")]
#[command(
    author,
    version,
    about = "Build a photomosaic from a directory of candidate images"
)]
/// Command-line arguments for the mosaic builder
pub struct Cli {
    /// Source photograph to approximate
    #[arg(value_name = "INPUT")]
    pub input: PathBuf,

    /// Directory of candidate tile images
    #[arg(value_name = "COLLECTION")]
    pub collection: PathBuf,

    /// Output PNG path (defaults to <input>_mosaic.png next to the input)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Canvas pixels per source pixel
    #[arg(short, long, default_value_t = DEFAULT_ZOOM)]
    pub zoom: u32,

    /// Edge length of each tile in pixels
    #[arg(short, long, default_value_t = DEFAULT_THUMB_SIZE)]
    pub thumb_size: u32,

    /// Random per-channel jitter applied before matching
    #[arg(short, long, default_value_t = DEFAULT_FUZZ)]
    pub fuzz: u32,

    /// Seed for reproducible fuzzing
    #[arg(short, long)]
    pub seed: Option<u64>,

    /// Rescan the collection instead of reusing its cached colormap
    #[arg(short, long)]
    pub rebuild_colormap: bool,

    /// Filter used to resize tiles
    #[arg(long, value_enum, default_value_t = ResizeFilter::Nearest)]
    pub filter: ResizeFilter,

    /// Suppress progress output
    #[arg(short, long)]
    pub quiet: bool,
}

impl Cli {
    /// Check if progress should be displayed
    pub const fn should_show_progress(&self) -> bool {
        !self.quiet
    }

    /// Mosaic parameters requested on the command line
    pub const fn config(&self) -> MosaicConfig {
        MosaicConfig {
            zoom: self.zoom,
            thumb_size: self.thumb_size,
            fuzz: self.fuzz,
            seed: self.seed,
            rebuild_colormap: self.rebuild_colormap,
            filter: self.filter,
        }
    }

    /// Where the mosaic will be written
    pub fn output_path(&self) -> PathBuf {
        self.output
            .clone()
            .unwrap_or_else(|| Self::default_output_path(&self.input))
    }

    fn default_output_path(input_path: &Path) -> PathBuf {
        let stem = input_path.file_stem().unwrap_or_default();
        let output_name = format!(
            "{}{OUTPUT_SUFFIX}.{OUTPUT_EXTENSION}",
            stem.to_string_lossy()
        );

        if let Some(parent) = input_path.parent() {
            parent.join(output_name)
        } else {
            PathBuf::from(output_name)
        }
    }
}

/// Runs one mosaic build described by the command line
pub struct MosaicCommand {
    cli: Cli,
    progress: Option<ProgressDiagnostics>,
}

impl MosaicCommand {
    /// Create a command for the given CLI arguments
    pub fn new(cli: Cli) -> Self {
        let progress = cli.should_show_progress().then(ProgressDiagnostics::new);
        Self { cli, progress }
    }

    /// Build the mosaic and write it to disk
    ///
    /// Returns the path of the written PNG.
    ///
    /// # Errors
    ///
    /// Returns an error if the build fails or the output cannot be written
    pub fn process(&self) -> Result<PathBuf> {
        let output_path = self.cli.output_path();
        let colormap = ColormapBuilder::new(&self.cli.collection);
        let diagnostics: &dyn Diagnostics = match &self.progress {
            Some(progress) => progress,
            None => &TracingDiagnostics,
        };

        let result = build_mosaic_to_file(
            &self.cli.input,
            &colormap,
            &self.cli.config(),
            &output_path,
            diagnostics,
        );

        if let Some(progress) = &self.progress {
            progress.finish();
        }

        result.map(|()| output_path)
    }
}
