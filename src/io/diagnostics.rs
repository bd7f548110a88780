//! Explicit diagnostics channel for colormap and mosaic builds
//!
//! Library code never logs through global state; callers hand in a
//! [`Diagnostics`] sink and decide where events end up.

use std::path::{Path, PathBuf};
use std::sync::{Mutex, PoisonError};

/// Event reported while building a colormap or a mosaic
#[derive(Debug, Clone, Copy)]
pub enum Diagnostic<'a> {
    /// A candidate could not be decoded or had no pixels
    CandidateSkipped {
        /// Candidate file
        path: &'a Path,
        /// Human readable cause
        reason: &'a str,
    },
    /// A persisted colormap was rejected and will be rebuilt
    CacheRejected {
        /// Artifact path
        path: &'a Path,
        /// Human readable cause
        reason: &'a str,
    },
    /// The freshly built colormap could not be persisted
    CacheWriteFailed {
        /// Artifact path
        path: &'a Path,
        /// Human readable cause
        reason: &'a str,
    },
    /// Colormap ready for matching
    IndexReady {
        /// Number of usable candidates
        samples: usize,
        /// Whether the index came from the persisted artifact
        reused: bool,
    },
    /// Grid iteration is about to start
    MosaicStarted {
        /// Canvas width in pixels
        width: u32,
        /// Canvas height in pixels
        height: u32,
        /// Number of grid rows
        rows: u32,
    },
    /// One grid row has been pasted
    RowCompleted {
        /// Zero-based row just finished
        row: u32,
        /// Total number of rows
        rows: u32,
    },
    /// Every cell has been pasted
    MosaicFinished {
        /// Distinct thumbnails decoded during the build
        thumbnails: usize,
    },
}

/// Receiver for build diagnostics
pub trait Diagnostics {
    /// Handle a single event
    fn report(&self, event: Diagnostic<'_>);
}

/// Forwards diagnostics to `tracing`
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingDiagnostics;

impl Diagnostics for TracingDiagnostics {
    fn report(&self, event: Diagnostic<'_>) {
        match event {
            Diagnostic::CandidateSkipped { path, reason } => {
                tracing::debug!(path = %path.display(), reason, "Skipping candidate");
            }
            Diagnostic::CacheRejected { path, reason } => {
                tracing::warn!(path = %path.display(), reason, "Rebuilding colormap");
            }
            Diagnostic::CacheWriteFailed { path, reason } => {
                tracing::warn!(path = %path.display(), reason, "Colormap not persisted");
            }
            Diagnostic::IndexReady { samples, reused } => {
                tracing::info!(samples, reused, "Color index built");
            }
            Diagnostic::MosaicStarted {
                width,
                height,
                rows,
            } => {
                tracing::info!(width, height, rows, "Generating mosaic");
            }
            Diagnostic::RowCompleted { row, rows } => {
                tracing::trace!(row, rows, "Row done");
            }
            Diagnostic::MosaicFinished { thumbnails } => {
                tracing::info!(thumbnails, "Mosaic generated");
            }
        }
    }
}

/// Discards every event
#[derive(Debug, Default, Clone, Copy)]
pub struct NullDiagnostics;

impl Diagnostics for NullDiagnostics {
    fn report(&self, _event: Diagnostic<'_>) {}
}

/// Owned copy of a [`Diagnostic`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RecordedDiagnostic {
    /// See [`Diagnostic::CandidateSkipped`]
    CandidateSkipped(PathBuf),
    /// See [`Diagnostic::CacheRejected`]
    CacheRejected(PathBuf),
    /// See [`Diagnostic::CacheWriteFailed`]
    CacheWriteFailed(PathBuf),
    /// See [`Diagnostic::IndexReady`]
    IndexReady {
        /// Number of usable candidates
        samples: usize,
        /// Whether the persisted artifact was used
        reused: bool,
    },
    /// See [`Diagnostic::MosaicStarted`]
    MosaicStarted {
        /// Canvas width
        width: u32,
        /// Canvas height
        height: u32,
    },
    /// See [`Diagnostic::RowCompleted`]
    RowCompleted(u32),
    /// See [`Diagnostic::MosaicFinished`]
    MosaicFinished {
        /// Distinct thumbnails decoded
        thumbnails: usize,
    },
}

impl From<Diagnostic<'_>> for RecordedDiagnostic {
    fn from(event: Diagnostic<'_>) -> Self {
        match event {
            Diagnostic::CandidateSkipped { path, .. } => Self::CandidateSkipped(path.to_path_buf()),
            Diagnostic::CacheRejected { path, .. } => Self::CacheRejected(path.to_path_buf()),
            Diagnostic::CacheWriteFailed { path, .. } => Self::CacheWriteFailed(path.to_path_buf()),
            Diagnostic::IndexReady { samples, reused } => Self::IndexReady { samples, reused },
            Diagnostic::MosaicStarted { width, height, .. } => {
                Self::MosaicStarted { width, height }
            }
            Diagnostic::RowCompleted { row, .. } => Self::RowCompleted(row),
            Diagnostic::MosaicFinished { thumbnails } => Self::MosaicFinished { thumbnails },
        }
    }
}

/// Keeps every event in memory, in arrival order
///
/// A reporter that panicked mid-build does not hide earlier or later events.
#[derive(Debug, Default)]
pub struct CollectingDiagnostics {
    events: Mutex<Vec<RecordedDiagnostic>>,
}

impl CollectingDiagnostics {
    /// Create an empty collector
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of the recorded events
    pub fn events(&self) -> Vec<RecordedDiagnostic> {
        self.events
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Candidates reported as skipped, in order
    pub fn skipped(&self) -> Vec<PathBuf> {
        self.events()
            .into_iter()
            .filter_map(|event| match event {
                RecordedDiagnostic::CandidateSkipped(path) => Some(path),
                _ => None,
            })
            .collect()
    }
}

impl Diagnostics for CollectingDiagnostics {
    fn report(&self, event: Diagnostic<'_>) {
        self.events
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(event.into());
    }
}
