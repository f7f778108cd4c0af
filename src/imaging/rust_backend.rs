//! Pure Rust raster backend — no external tool required.
//!
//! Everything is statically linked into the binary.
//!
//! ## Crate mapping
//!
//! | Operation | Crate / function |
//! |---|---|
//! | Identify | `image::image_dimensions` |
//! | Edge color sampling | `image` decode + channel averaging |
//! | Canvas extension | `image::imageops::overlay` on a solid canvas |
//! | Cover resize | `image::DynamicImage::resize_to_fill` (Lanczos3) |
//! | Fit resize | `image::DynamicImage::resize_exact` (Lanczos3) |
//! | Encode → WebP (lossy) | `webp` crate |
//! | Encode → JPEG | `image::codecs::jpeg::JpegEncoder` |
//! | Encode → PNG | `image` crate (lossless, quality ignored) |

use super::backend::{BackendError, Dimensions, RasterBackend, Rgb};
use super::calculations::average_color;
use super::params::{CoverParams, ExtendParams, FitParams};
use image::imageops::FilterType;
use image::{DynamicImage, ImageReader, RgbImage};
use std::path::Path;

/// Pure Rust backend using the `image` crate ecosystem.
///
/// See the [module docs](self) for the crate-to-operation mapping.
pub struct RustBackend;

impl RustBackend {
    pub fn new() -> Self {
        Self
    }
}

impl Default for RustBackend {
    fn default() -> Self {
        Self::new()
    }
}

/// Load and decode an image from disk.
fn load_image(path: &Path) -> Result<DynamicImage, BackendError> {
    ImageReader::open(path)
        .map_err(BackendError::Io)?
        .decode()
        .map_err(|e| {
            BackendError::ProcessingFailed(format!("Failed to decode {}: {}", path.display(), e))
        })
}

/// Save a DynamicImage to the given path, inferring format from extension.
fn save_image(img: &DynamicImage, path: &Path, quality: u32) -> Result<(), BackendError> {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .unwrap_or("")
        .to_lowercase();

    match ext.as_str() {
        "webp" => save_webp(img, path, quality),
        "jpg" | "jpeg" => save_jpeg(img, path, quality),
        // PNG is lossless; the quality setting does not apply
        "png" => img.save(path).map_err(|e| {
            BackendError::ProcessingFailed(format!("PNG encode failed: {}", e))
        }),
        other => Err(BackendError::ProcessingFailed(format!(
            "Unsupported output format: {}",
            other
        ))),
    }
}

/// Encode and save as lossy WebP via the `webp` crate.
///
/// The `image` crate's own WebP encoder is lossless-only.
fn save_webp(img: &DynamicImage, path: &Path, quality: u32) -> Result<(), BackendError> {
    let rgb = img.to_rgb8();
    let encoder = webp::Encoder::from_rgb(rgb.as_raw(), rgb.width(), rgb.height());
    let encoded = encoder.encode(quality as f32);
    std::fs::write(path, &*encoded).map_err(BackendError::Io)
}

/// Encode and save as JPEG at the given quality.
fn save_jpeg(img: &DynamicImage, path: &Path, quality: u32) -> Result<(), BackendError> {
    let file = std::fs::File::create(path).map_err(BackendError::Io)?;
    let writer = std::io::BufWriter::new(file);
    let encoder = image::codecs::jpeg::JpegEncoder::new_with_quality(writer, quality as u8);
    img.to_rgb8()
        .write_with_encoder(encoder)
        .map_err(|e| BackendError::ProcessingFailed(format!("JPEG encode failed: {}", e)))
}

impl RasterBackend for RustBackend {
    fn identify(&self, path: &Path) -> Result<Dimensions, BackendError> {
        let (width, height) = image::image_dimensions(path).map_err(|e| {
            BackendError::ProcessingFailed(format!("Failed to read dimensions: {}", e))
        })?;
        Ok(Dimensions { width, height })
    }

    fn sample_edge_color(&self, path: &Path, band_px: u32) -> Result<Rgb, BackendError> {
        let img = load_image(path)?.to_rgb8();
        let height = img.height();

        if band_px * 2 > height {
            return Err(BackendError::BandTooTall {
                band: band_px,
                height,
            });
        }

        let in_band = |y: u32| y < band_px || y >= height - band_px;
        let samples = img
            .enumerate_pixels()
            .filter(|(_, y, _)| in_band(*y))
            .map(|(_, _, p)| p.0);

        let (r, g, b) = average_color(samples).ok_or_else(|| {
            BackendError::ProcessingFailed(format!("No edge pixels in {}", path.display()))
        })?;
        Ok(Rgb { r, g, b })
    }

    fn extend_canvas(&self, params: &ExtendParams) -> Result<(), BackendError> {
        let src = load_image(&params.source)?.to_rgb8();
        if src.width() > params.width || src.height() > params.height {
            return Err(BackendError::ProcessingFailed(format!(
                "Canvas {}x{} smaller than source {}x{}",
                params.width,
                params.height,
                src.width(),
                src.height()
            )));
        }

        let bg = params.background;
        let mut canvas =
            RgbImage::from_pixel(params.width, params.height, image::Rgb([bg.r, bg.g, bg.b]));

        let x = (params.width - src.width()) / 2;
        let y = (params.height - src.height()) / 2;
        image::imageops::overlay(&mut canvas, &src, x as i64, y as i64);

        save_image(&DynamicImage::ImageRgb8(canvas), &params.output, 100)
    }

    fn render_cover(&self, params: &CoverParams) -> Result<(), BackendError> {
        let img = load_image(&params.source)?;
        let covered = img.resize_to_fill(params.width, params.height, FilterType::Lanczos3);
        save_image(&covered, &params.output, params.quality.value())
    }

    fn render_fit(&self, params: &FitParams) -> Result<(), BackendError> {
        let img = load_image(&params.source)?;
        let height =
            (img.height() as f64 * params.width as f64 / img.width() as f64).round() as u32;
        // resize_exact guarantees the requested width; plain resize can land
        // one pixel short on awkward ratios
        let fitted = img.resize_exact(params.width, height.max(1), FilterType::Lanczos3);
        save_image(&fitted, &params.output, params.quality.value())
    }
}
