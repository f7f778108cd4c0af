//! Parameter types for raster operations.
//!
//! These structs describe *what* to do, not *how* to do it. They are the
//! interface between the high-level pipeline stages (which decide what
//! derivatives to create) and the [`backend`](super::backend) (which does the
//! actual pixel work). This separation allows swapping backends (e.g. for
//! testing with a mock) without changing pipeline logic.
//!
//! ## Types
//!
//! - [`Quality`] — Lossy encoding quality (1–100, default 90). Clamped on construction.
//! - [`CoverParams`] — Cover resize: scale to cover the target, center-crop to exact dimensions.
//! - [`FitParams`] — Width-only resize preserving the source aspect ratio.
//! - [`ExtendParams`] — Canvas extension: source centered on a larger solid-color canvas.

use super::backend::Rgb;
use std::path::PathBuf;

/// Quality setting for lossy image encoding (1-100).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Quality(pub u32);

impl Quality {
    pub fn new(value: u32) -> Self {
        Self(value.clamp(1, 100))
    }

    pub fn value(self) -> u32 {
        self.0
    }
}

impl Default for Quality {
    fn default() -> Self {
        Self(90)
    }
}

/// Parameters for a cover resize (scale to cover, then center-crop).
///
/// The output format is inferred from the output path's extension.
#[derive(Debug, Clone, PartialEq)]
pub struct CoverParams {
    pub source: PathBuf,
    pub output: PathBuf,
    /// Exact output dimensions after the center crop.
    pub width: u32,
    pub height: u32,
    pub quality: Quality,
}

/// Parameters for a width-only resize that preserves aspect ratio.
#[derive(Debug, Clone, PartialEq)]
pub struct FitParams {
    pub source: PathBuf,
    pub output: PathBuf,
    pub width: u32,
    pub quality: Quality,
}

/// Parameters for a canvas extension operation.
///
/// The source image is centered on a `width`×`height` canvas filled with
/// `background`. The canvas must be at least as large as the source.
#[derive(Debug, Clone, PartialEq)]
pub struct ExtendParams {
    pub source: PathBuf,
    pub output: PathBuf,
    pub width: u32,
    pub height: u32,
    pub background: Rgb,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn quality_clamps_to_valid_range() {
        assert_eq!(Quality::new(0).value(), 1);
        assert_eq!(Quality::new(50).value(), 50);
        assert_eq!(Quality::new(150).value(), 100);
    }

    #[test]
    fn quality_default_is_90() {
        assert_eq!(Quality::default().value(), 90);
    }
}
