//! Raster processing — pure Rust, no external tool invocations.
//!
//! | Operation | Crate / function |
//! |---|---|
//! | **Identify** | `image::image_dimensions` |
//! | **Edge color sampling** | `image` decode + channel averaging |
//! | **Canvas extension** | `imageops::overlay` on a solid background |
//! | **Cover resize** | `resize_to_fill` (Lanczos3) |
//! | **Fit resize** | `resize_exact` (Lanczos3) |
//! | **Encode** | `webp` crate (lossy WebP), `image` (JPEG, PNG) |
//!
//! The module is split into:
//! - **Calculations**: Pure functions for dimension and color math (unit testable)
//! - **Parameters**: Data structures describing raster operations
//! - **Backend**: [`RasterBackend`] trait + [`RustBackend`]

pub mod backend;
pub mod calculations;
mod params;
pub mod rust_backend;

pub use backend::{BackendError, Dimensions, RasterBackend, Rgb};
pub use calculations::{cover_height, extended_height, needs_extension};
pub use params::{CoverParams, ExtendParams, FitParams, Quality};
pub use rust_backend::RustBackend;
