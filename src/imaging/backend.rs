//! Raster backend trait and shared types.
//!
//! The [`RasterBackend`] trait defines the five operations every backend must
//! support: identify, sample_edge_color, extend_canvas, render_cover, and
//! render_fit.
//!
//! The production implementation is
//! [`RustBackend`](super::rust_backend::RustBackend) — pure Rust via the
//! `image` crate, statically linked into the binary.

use super::params::{CoverParams, ExtendParams, FitParams};
use std::path::Path;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum BackendError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Processing failed: {0}")]
    ProcessingFailed(String),
    #[error("Edge band of {band}px does not fit an image {height}px tall")]
    BandTooTall { band: u32, height: u32 },
}

/// Result of an identify operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Dimensions {
    pub width: u32,
    pub height: u32,
}

/// A single RGB color, as produced by edge sampling.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

/// Trait for raster processing backends.
///
/// Every backend must implement all five operations so the normalizer,
/// renderer, and batch orchestrator stay backend-agnostic and testable
/// against a recording mock.
pub trait RasterBackend {
    /// Get image dimensions.
    fn identify(&self, path: &Path) -> Result<Dimensions, BackendError>;

    /// Average the pixels of a `band_px`-tall band at the top and bottom
    /// edges into a single color.
    ///
    /// Errors with [`BackendError::BandTooTall`] when the two bands would
    /// overlap (`2 * band_px > height`).
    fn sample_edge_color(&self, path: &Path, band_px: u32) -> Result<Rgb, BackendError>;

    /// Center the source on a larger solid-color canvas.
    fn extend_canvas(&self, params: &ExtendParams) -> Result<(), BackendError>;

    /// Cover resize: scale to cover the target, center-crop to exact
    /// dimensions, encode at the given quality.
    fn render_cover(&self, params: &CoverParams) -> Result<(), BackendError>;

    /// Width-only resize preserving the source aspect ratio.
    fn render_fit(&self, params: &FitParams) -> Result<(), BackendError>;
}
