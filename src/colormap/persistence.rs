//! Versioned on-disk colormap artifact
//!
//! The artifact is a JSON document tagged with a format name and schema
//! version. Candidates are stored relative to their collection so a moved
//! collection keeps its cache.

use crate::color::average::Color;
use crate::colormap::index::{ColorIndex, ColorSample};
use crate::io::configuration::{COLORMAP_FORMAT, COLORMAP_VERSION};
use crate::io::error::{MosaicError, Result, file_system};
use serde::{Deserialize, Serialize};
use std::io::Write;
use std::path::{Component, Path, PathBuf};
use tempfile::NamedTempFile;

#[derive(Debug, Serialize, Deserialize)]
struct ColormapArtifact {
    format: String,
    version: u32,
    samples: Vec<SampleRecord>,
}

#[derive(Debug, Serialize, Deserialize)]
struct SampleRecord {
    color: Color,
    file: PathBuf,
}

fn corrupt(path: &Path, reason: impl ToString) -> MosaicError {
    MosaicError::CacheCorrupt {
        path: path.to_path_buf(),
        reason: reason.to_string(),
    }
}

// Only bare file names are accepted so a tampered artifact cannot point
// outside its collection
fn is_plain_file_name(file: &Path) -> bool {
    let mut components = file.components();
    matches!(
        (components.next(), components.next()),
        (Some(Component::Normal(_)), None)
    )
}

/// Write `index` to `artifact`, storing candidates relative to `collection`
///
/// The document is written to a uniquely named temporary file next to the
/// artifact and renamed into place. Readers never observe a half-written
/// artifact and concurrent writers never share a staging file.
///
/// # Errors
///
/// Returns an error if:
/// - The index cannot be encoded
/// - The temporary file cannot be written or renamed
pub fn save_colormap(index: &ColorIndex, collection: &Path, artifact: &Path) -> Result<()> {
    let samples = index
        .iter()
        .map(|sample| SampleRecord {
            color: sample.color,
            file: sample
                .path
                .strip_prefix(collection)
                .map(Path::to_path_buf)
                .unwrap_or_else(|_| sample.path.file_name().map(PathBuf::from).unwrap_or_default()),
        })
        .collect();

    let document = ColormapArtifact {
        format: COLORMAP_FORMAT.to_string(),
        version: COLORMAP_VERSION,
        samples,
    };

    let bytes = serde_json::to_vec(&document).map_err(|e| MosaicError::Serialization {
        path: artifact.to_path_buf(),
        source: e,
    })?;

    let directory = artifact
        .parent()
        .filter(|parent| !parent.as_os_str().is_empty())
        .unwrap_or_else(|| Path::new("."));
    let mut staging = NamedTempFile::new_in(directory)
        .map_err(|e| file_system(directory, "create colormap staging file", e))?;
    staging
        .write_all(&bytes)
        .map_err(|e| file_system(staging.path(), "write colormap", e))?;
    staging
        .persist(artifact)
        .map_err(|e| file_system(artifact, "replace colormap", e.error))?;
    Ok(())
}

/// Read a previously saved colormap
///
/// Returns `Ok(None)` when no artifact exists. Entries are resolved against
/// `collection` and keep their stored order.
///
/// # Errors
///
/// Returns [`MosaicError::CacheCorrupt`] if:
/// - The artifact cannot be read or fails to parse
/// - It carries another format tag or schema version
/// - An entry names a file outside the collection or one that is gone
pub fn load_colormap(collection: &Path, artifact: &Path) -> Result<Option<ColorIndex>> {
    let bytes = match std::fs::read(artifact) {
        Ok(bytes) => bytes,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(None),
        Err(e) => return Err(corrupt(artifact, e)),
    };

    let document: ColormapArtifact =
        serde_json::from_slice(&bytes).map_err(|e| corrupt(artifact, e))?;

    if document.format != COLORMAP_FORMAT {
        return Err(corrupt(
            artifact,
            format!("unknown format tag '{}'", document.format),
        ));
    }
    if document.version != COLORMAP_VERSION {
        return Err(corrupt(
            artifact,
            format!(
                "schema version {} (expected {COLORMAP_VERSION})",
                document.version
            ),
        ));
    }

    document
        .samples
        .into_iter()
        .map(|record| {
            if !is_plain_file_name(&record.file) {
                return Err(corrupt(
                    artifact,
                    format!("entry '{}' is not a file name", record.file.display()),
                ));
            }
            let path = collection.join(&record.file);
            if !path.is_file() {
                return Err(corrupt(
                    artifact,
                    format!("candidate '{}' no longer exists", record.file.display()),
                ));
            }
            Ok(ColorSample::new(record.color, path))
        })
        .collect::<Result<ColorIndex>>()
        .map(Some)
}
