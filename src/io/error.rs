//! Error types for colormap building and mosaic assembly

use std::fmt;
use std::path::PathBuf;

/// Main error type for all mosaic operations
#[derive(Debug)]
pub enum MosaicError {
    /// Failed to decode a candidate image
    ///
    /// During colormap scanning this is recovered by skipping the candidate;
    /// it only surfaces when an indexed candidate vanishes before its
    /// thumbnail is created.
    ImageLoad {
        /// Path to the image file
        path: PathBuf,
        /// Underlying image loading error
        source: image::ImageError,
    },

    /// The source photograph could not be decoded
    SourceUnreadable {
        /// Path to the source image
        path: PathBuf,
        /// Underlying image loading error
        source: image::ImageError,
    },

    /// Matching was requested against a color index without candidates
    EmptyColorIndex,

    /// Persisted colormap artifact is unreadable or from another format
    CacheCorrupt {
        /// Path to the artifact
        path: PathBuf,
        /// Why the artifact was rejected
        reason: String,
    },

    /// Mosaic parameter validation failed
    InvalidParameter {
        /// Name of the invalid parameter
        parameter: &'static str,
        /// Provided value that failed validation
        value: String,
        /// Explanation of why the value is invalid
        reason: String,
    },

    /// Failed to save the generated mosaic to disk
    ImageExport {
        /// Path where export was attempted
        path: PathBuf,
        /// Underlying image export error
        source: image::ImageError,
    },

    /// General file system operation failure
    FileSystem {
        /// Path involved in the operation
        path: PathBuf,
        /// Description of the operation that failed
        operation: &'static str,
        /// Underlying I/O error
        source: std::io::Error,
    },

    /// Colormap could not be encoded for persistence
    Serialization {
        /// Artifact path being written
        path: PathBuf,
        /// Underlying encoder error
        source: serde_json::Error,
    },
}

impl fmt::Display for MosaicError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ImageLoad { path, source } => {
                write!(
                    f,
                    "Failed to load candidate image '{}': {source} (rebuild the colormap if the collection changed)",
                    path.display()
                )
            }
            Self::SourceUnreadable { path, source } => {
                write!(
                    f,
                    "Failed to open source image '{}': {source}",
                    path.display()
                )
            }
            Self::EmptyColorIndex => {
                write!(f, "Color index holds no usable candidate images")
            }
            Self::CacheCorrupt { path, reason } => {
                write!(f, "Colormap cache '{}' rejected: {reason}", path.display())
            }
            Self::InvalidParameter {
                parameter,
                value,
                reason,
            } => {
                write!(f, "Invalid parameter '{parameter}' = '{value}': {reason}")
            }
            Self::ImageExport { path, source } => {
                write!(
                    f,
                    "Failed to export image to '{}': {source}",
                    path.display()
                )
            }
            Self::FileSystem {
                path,
                operation,
                source,
            } => {
                write!(
                    f,
                    "File system error during {operation} on '{}': {source}",
                    path.display()
                )
            }
            Self::Serialization { path, source } => {
                write!(
                    f,
                    "Failed to encode colormap for '{}': {source}",
                    path.display()
                )
            }
        }
    }
}

impl std::error::Error for MosaicError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::ImageLoad { source, .. }
            | Self::SourceUnreadable { source, .. }
            | Self::ImageExport { source, .. } => Some(source),
            Self::FileSystem { source, .. } => Some(source),
            Self::Serialization { source, .. } => Some(source),
            Self::EmptyColorIndex
            | Self::CacheCorrupt { .. }
            | Self::InvalidParameter { .. } => None,
        }
    }
}

/// Convenience type alias for mosaic results
pub type Result<T> = std::result::Result<T, MosaicError>;

/// Create an invalid parameter error
pub fn invalid_parameter(
    parameter: &'static str,
    value: &impl ToString,
    reason: &impl ToString,
) -> MosaicError {
    MosaicError::InvalidParameter {
        parameter,
        value: value.to_string(),
        reason: reason.to_string(),
    }
}

/// Create a file system error for the given path and operation
pub fn file_system(
    path: impl Into<PathBuf>,
    operation: &'static str,
    source: std::io::Error,
) -> MosaicError {
    MosaicError::FileSystem {
        path: path.into(),
        operation,
        source,
    }
}

