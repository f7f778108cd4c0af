//! Size/format rendering.
//!
//! Stage 2 of per-entry processing. Takes a (possibly shape-normalized)
//! working image and emits the derivative files for one catalog entry.
//!
//! ## Output contract
//!
//! | Mode | Files per width | Geometry |
//! |---|---|---|
//! | [`render_derivatives`] | `<name>-<W>w.webp` (q80) + `<name>-<W>w.jpg` (q82) | cover resize to W × trunc(W/0.75) |
//! | [`render_logo`] | `<name>-<W>w.png` (q90) | fit resize to width W, aspect preserved |
//! | [`render_favicon`] | `favicon-<S>.png` for S ∈ {16, 32, 180} | cover resize to S × S, always square |
//!
//! Output directories are created on demand; existing files are overwritten,
//! so re-runs are idempotent.

use crate::imaging::{BackendError, CoverParams, FitParams, Quality, RasterBackend, cover_height};
use std::path::{Path, PathBuf};

/// Quality for the modern (WebP) derivative format.
pub const WEBP_QUALITY: u32 = 80;
/// Quality for the legacy (JPEG) derivative format.
pub const JPEG_QUALITY: u32 = 82;
/// Quality for logotype and favicon PNG output.
pub const LOGO_QUALITY: u32 = 90;
/// Fixed square favicon sizes.
pub const FAVICON_SIZES: [u32; 3] = [16, 32, 180];

/// Render 3:4 cover derivatives in both formats for each target width.
pub fn render_derivatives(
    backend: &impl RasterBackend,
    source: &Path,
    output_dir: &Path,
    name: &str,
    widths: &[u32],
) -> Result<Vec<PathBuf>, BackendError> {
    std::fs::create_dir_all(output_dir)?;
    let mut outputs = Vec::new();

    for &width in widths {
        let height = cover_height(width);

        let webp_path = output_dir.join(format!("{name}-{width}w.webp"));
        backend.render_cover(&CoverParams {
            source: source.to_path_buf(),
            output: webp_path.clone(),
            width,
            height,
            quality: Quality::new(WEBP_QUALITY),
        })?;
        outputs.push(webp_path);

        let jpg_path = output_dir.join(format!("{name}-{width}w.jpg"));
        backend.render_cover(&CoverParams {
            source: source.to_path_buf(),
            output: jpg_path.clone(),
            width,
            height,
            quality: Quality::new(JPEG_QUALITY),
        })?;
        outputs.push(jpg_path);
    }

    Ok(outputs)
}

/// Render logotype derivatives: width-only PNG resizes, aspect preserved.
pub fn render_logo(
    backend: &impl RasterBackend,
    source: &Path,
    output_dir: &Path,
    name: &str,
    widths: &[u32],
) -> Result<Vec<PathBuf>, BackendError> {
    std::fs::create_dir_all(output_dir)?;
    let mut outputs = Vec::new();

    for &width in widths {
        let path = output_dir.join(format!("{name}-{width}w.png"));
        backend.render_fit(&FitParams {
            source: source.to_path_buf(),
            output: path.clone(),
            width,
            quality: Quality::new(LOGO_QUALITY),
        })?;
        outputs.push(path);
    }

    Ok(outputs)
}

/// Render the fixed square favicon set.
///
/// Favicons are exactly S × S at every size. A non-square source is
/// center-cropped by the cover resize rather than letterboxed or distorted.
pub fn render_favicon(
    backend: &impl RasterBackend,
    source: &Path,
    output_dir: &Path,
) -> Result<Vec<PathBuf>, BackendError> {
    std::fs::create_dir_all(output_dir)?;
    let mut outputs = Vec::new();

    for size in FAVICON_SIZES {
        let path = output_dir.join(format!("favicon-{size}.png"));
        backend.render_cover(&CoverParams {
            source: source.to_path_buf(),
            output: path.clone(),
            width: size,
            height: size,
            quality: Quality::new(LOGO_QUALITY),
        })?;
        outputs.push(path);
    }

    Ok(outputs)
}
