//! Shape normalization for near-square sources.
//!
//! Stage 1 of per-entry processing. Pattern, category, and featured
//! derivatives are forced into a 3:4 aspect ratio by a cover resize; for a
//! near-square or landscape source that crop would discard too much of the
//! photographed knitwear. Those sources are first padded onto a taller canvas
//! whose background is the averaged color of the photo's top and bottom
//! edges, so the padding blends into the backdrop the pieces were shot
//! against.
//!
//! The padded working copy lives in a scoped temporary directory owned by
//! the returned [`Normalized`]; it is removed on drop, on success and
//! failure paths alike. The on-disk original is never modified.

use crate::imaging::{
    BackendError, Dimensions, ExtendParams, RasterBackend, extended_height, needs_extension,
};
use std::path::{Path, PathBuf};
use tempfile::TempDir;
use thiserror::Error;

/// Height of the sampling band taken from each of the top and bottom edges.
pub const EDGE_BAND_PX: u32 = 20;

#[derive(Error, Debug)]
pub enum NormalizeError {
    #[error("Could not read dimensions of {path}: {source}")]
    Unreadable {
        path: PathBuf,
        source: BackendError,
    },
    #[error("Canvas extension failed for {path}: {source}")]
    Extension {
        path: PathBuf,
        source: BackendError,
    },
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// A source image ready for rendering, possibly padded to the target ratio.
///
/// Holds the temporary workspace for the padded copy; dropping the value
/// removes it.
pub struct Normalized {
    path: PathBuf,
    /// Dimensions of the working image (post-extension when `extended`).
    pub dimensions: Dimensions,
    pub extended: bool,
    _workspace: Option<TempDir>,
}

impl Normalized {
    /// Path of the image the renderer should read: the padded working copy
    /// when extension happened, the original source otherwise.
    pub fn working_path(&self) -> &Path {
        &self.path
    }
}

/// Normalize a source image's shape for 3:4 cover rendering.
///
/// Sources with width/height ratio > 0.85 are centered on a canvas of
/// height `round(width / 0.75)` filled with the sampled edge color. Others
/// pass through untouched.
pub fn normalize_shape(
    backend: &impl RasterBackend,
    source: &Path,
) -> Result<Normalized, NormalizeError> {
    let dims = backend
        .identify(source)
        .map_err(|e| NormalizeError::Unreadable {
            path: source.to_path_buf(),
            source: e,
        })?;

    if !needs_extension(dims.width, dims.height) {
        return Ok(Normalized {
            path: source.to_path_buf(),
            dimensions: dims,
            extended: false,
            _workspace: None,
        });
    }

    let extension_err = |e: BackendError| NormalizeError::Extension {
        path: source.to_path_buf(),
        source: e,
    };

    let background = backend
        .sample_edge_color(source, EDGE_BAND_PX)
        .map_err(extension_err)?;

    let workspace = TempDir::new()?;
    // PNG so the intermediate adds no generation loss before final encoding
    let working = workspace.path().join("extended.png");
    let height = extended_height(dims.width);

    backend
        .extend_canvas(&ExtendParams {
            source: source.to_path_buf(),
            output: working.clone(),
            width: dims.width,
            height,
            background,
        })
        .map_err(extension_err)?;

    Ok(Normalized {
        path: working,
        dimensions: Dimensions {
            width: dims.width,
            height,
        },
        extended: true,
        _workspace: Some(workspace),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::imaging::Rgb;
    use crate::imaging::backend::tests::{MockBackend, RecordedOp};

    #[test]
    fn portrait_source_passes_through() {
        let backend = MockBackend::with_dimensions(vec![Dimensions {
            width: 600,
            height: 800,
        }]);

        let normalized = normalize_shape(&backend, Path::new("/src/shawl.jpg")).unwrap();

        assert!(!normalized.extended);
        assert_eq!(normalized.working_path(), Path::new("/src/shawl.jpg"));
        assert_eq!(normalized.dimensions.width, 600);
        assert_eq!(normalized.dimensions.height, 800);

        // identify only — no sampling, no canvas work
        let ops = backend.get_operations();
        assert_eq!(ops.len(), 1);
        assert!(matches!(&ops[0], RecordedOp::Identify(_)));
    }

    #[test]
    fn ratio_at_threshold_passes_through() {
        // 850x1000 = 0.85 exactly; extension requires strictly greater
        let backend = MockBackend::with_dimensions(vec![Dimensions {
            width: 850,
            height: 1000,
        }]);

        let normalized = normalize_shape(&backend, Path::new("/src/wrap.jpg")).unwrap();
        assert!(!normalized.extended);
    }

    #[test]
    fn near_square_source_gets_extended() {
        let backend = MockBackend::with_dimensions(vec![Dimensions {
            width: 1000,
            height: 1000,
        }]);
        backend.color_results.lock().unwrap().push(Rgb {
            r: 230,
            g: 225,
            b: 218,
        });

        let normalized = normalize_shape(&backend, Path::new("/src/mittens.jpg")).unwrap();

        assert!(normalized.extended);
        assert_ne!(normalized.working_path(), Path::new("/src/mittens.jpg"));
        assert_eq!(normalized.dimensions.width, 1000);
        // 1000 / 0.75 = 1333.33 → 1333
        assert_eq!(normalized.dimensions.height, 1333);

        let ops = backend.get_operations();
        assert_eq!(ops.len(), 3);
        assert!(matches!(&ops[0], RecordedOp::Identify(_)));
        assert!(matches!(
            &ops[1],
            RecordedOp::SampleEdgeColor { band_px: 20, .. }
        ));
        assert!(matches!(
            &ops[2],
            RecordedOp::ExtendCanvas {
                width: 1000,
                height: 1333,
                background: Rgb {
                    r: 230,
                    g: 225,
                    b: 218
                },
                ..
            }
        ));
    }

    #[test]
    fn workspace_is_removed_on_drop() {
        let backend = MockBackend::with_dimensions(vec![Dimensions {
            width: 500,
            height: 500,
        }]);

        let normalized = normalize_shape(&backend, Path::new("/src/square.jpg")).unwrap();
        let workspace_dir = normalized.working_path().parent().unwrap().to_path_buf();
        assert!(workspace_dir.exists());

        drop(normalized);
        assert!(!workspace_dir.exists());
    }

    #[test]
    fn unreadable_dimensions_reported() {
        // No mock dimensions queued → identify fails
        let backend = MockBackend::new();

        let result = normalize_shape(&backend, Path::new("/src/corrupt.jpg"));
        assert!(matches!(result, Err(NormalizeError::Unreadable { .. })));
    }
}
