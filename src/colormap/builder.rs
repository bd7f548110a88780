//! Candidate discovery, color scanning and cached colormap reuse

use crate::color::average::average_color;
use crate::colormap::index::{ColorIndex, ColorSample};
use crate::colormap::persistence::{load_colormap, save_colormap};
use crate::io::configuration::{CANDIDATE_EXTENSIONS, COLORMAP_FILE_NAME};
use crate::io::diagnostics::{Diagnostic, Diagnostics};
use crate::io::error::{MosaicError, Result, file_system};
use crate::io::image::open_candidate;
use rayon::prelude::*;
use std::path::{Path, PathBuf};

/// Builds and caches the color index of one candidate collection
#[derive(Clone, Debug)]
pub struct ColormapBuilder {
    collection: PathBuf,
    extensions: Vec<String>,
}

/// Why a candidate did not make it into the index
enum Skip {
    Unreadable(MosaicError),
    NoPixels,
}

impl Skip {
    fn reason(&self) -> String {
        match self {
            Self::Unreadable(error) => error.to_string(),
            Self::NoPixels => "image has no pixels".to_string(),
        }
    }
}

fn sample_candidate(path: &Path) -> std::result::Result<ColorSample, Skip> {
    let image = open_candidate(path).map_err(Skip::Unreadable)?;
    let color = average_color(&image).ok_or(Skip::NoPixels)?;
    Ok(ColorSample::new(color, path))
}

impl ColormapBuilder {
    /// Builder for the collection rooted at `collection`
    pub fn new(collection: impl Into<PathBuf>) -> Self {
        Self {
            collection: collection.into(),
            extensions: CANDIDATE_EXTENSIONS
                .iter()
                .map(|ext| (*ext).to_string())
                .collect(),
        }
    }

    /// Replace the candidate extension filter
    #[must_use]
    pub fn with_extensions<S: AsRef<str>>(mut self, extensions: &[S]) -> Self {
        self.extensions = extensions
            .iter()
            .map(|ext| ext.as_ref().to_ascii_lowercase())
            .collect();
        self
    }

    /// Collection directory
    pub fn collection(&self) -> &Path {
        &self.collection
    }

    /// Location of the persisted colormap for this collection
    pub fn artifact_path(&self) -> PathBuf {
        self.collection.join(COLORMAP_FILE_NAME)
    }

    fn accepts(&self, path: &Path) -> bool {
        path.extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| {
                self.extensions
                    .iter()
                    .any(|accepted| accepted.eq_ignore_ascii_case(ext))
            })
    }

    /// List candidate files in discovery order
    ///
    /// Only direct children with an accepted extension are returned, sorted
    /// by path so that index order is reproducible.
    ///
    /// # Errors
    ///
    /// Returns an error if the collection directory cannot be read
    pub fn discover(&self) -> Result<Vec<PathBuf>> {
        let entries = std::fs::read_dir(&self.collection)
            .map_err(|e| file_system(&self.collection, "read collection", e))?;

        let mut files = Vec::new();
        for entry in entries {
            let path = entry
                .map_err(|e| file_system(&self.collection, "read collection", e))?
                .path();
            if path.is_file() && self.accepts(&path) {
                files.push(path);
            }
        }
        files.sort();
        Ok(files)
    }

    /// Average every candidate in `files` and collect the usable ones
    ///
    /// Candidates are decoded in parallel; the resulting index and the skip
    /// diagnostics both follow the order of `files`.
    pub fn scan(files: &[PathBuf], diagnostics: &dyn Diagnostics) -> ColorIndex {
        let outcomes: Vec<_> = files
            .par_iter()
            .map(|path| sample_candidate(path))
            .collect();

        files
            .iter()
            .zip(outcomes)
            .filter_map(|(path, outcome)| match outcome {
                Ok(sample) => Some(sample),
                Err(skip) => {
                    diagnostics.report(Diagnostic::CandidateSkipped {
                        path,
                        reason: &skip.reason(),
                    });
                    None
                }
            })
            .collect()
    }

    /// Rescan the whole collection and overwrite the persisted colormap
    ///
    /// A failure to persist is reported through `diagnostics` and does not
    /// fail the build. Empty indexes are never persisted.
    ///
    /// # Errors
    ///
    /// Returns an error if the collection directory cannot be read
    pub fn rebuild(&self, diagnostics: &dyn Diagnostics) -> Result<ColorIndex> {
        let files = self.discover()?;
        let index = Self::scan(&files, diagnostics);

        if !index.is_empty() {
            let artifact = self.artifact_path();
            if let Err(error) = save_colormap(&index, &self.collection, &artifact) {
                diagnostics.report(Diagnostic::CacheWriteFailed {
                    path: &artifact,
                    reason: &error.to_string(),
                });
            }
        }

        diagnostics.report(Diagnostic::IndexReady {
            samples: index.len(),
            reused: false,
        });
        Ok(index)
    }

    /// Reuse the persisted colormap unless `force_rebuild` is set or it is
    /// missing or unreadable, in which case the collection is rescanned
    ///
    /// # Errors
    ///
    /// Returns an error if a rescan is needed and the collection directory
    /// cannot be read
    pub fn load_or_build(
        &self,
        force_rebuild: bool,
        diagnostics: &dyn Diagnostics,
    ) -> Result<ColorIndex> {
        if !force_rebuild {
            let artifact = self.artifact_path();
            match load_colormap(&self.collection, &artifact) {
                Ok(Some(index)) => {
                    diagnostics.report(Diagnostic::IndexReady {
                        samples: index.len(),
                        reused: true,
                    });
                    return Ok(index);
                }
                Ok(None) => {}
                Err(error) => diagnostics.report(Diagnostic::CacheRejected {
                    path: &artifact,
                    reason: &error.to_string(),
                }),
            }
        }

        self.rebuild(diagnostics)
    }
}
