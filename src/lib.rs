//! # knitpress
//!
//! Asset pipeline for a hand-knitting pattern website. Two jobs:
//!
//! 1. **Derivative generation** — batch-produce responsive image derivatives
//!    (WebP + JPEG, PNG for logo and favicon) from a directory of raw source
//!    photos, organized into semantic categories.
//! 2. **Footer injection** — insert the shared site footer into every HTML
//!    page, rewriting sitemap links relative to each page's depth.
//!
//! # Architecture: Data-Driven Sequential Batch
//!
//! The derivative generator composes three stages per catalog entry:
//!
//! ```text
//! catalog entry → normalize (pad near-square sources) → render (sizes × formats)
//! ```
//!
//! The batch is driven entirely by a declarative [`catalog::Catalog`] — an
//! ordered list of (source, canonical name, widths) records — and runs
//! strictly sequentially. Entries are independent: a missing source or
//! unreadable file skips that entry with a diagnostic and the batch
//! continues. Output names are deterministic, so re-runs overwrite in place.
//!
//! # Module Map
//!
//! | Module | Role |
//! |--------|------|
//! | [`catalog`] | Declarative derivative catalog: stock table, TOML loading, validation |
//! | [`normalize`] | Shape normalizer — pads near-square sources onto an edge-color canvas |
//! | [`render`] | Size/format renderer — cover, logo, and favicon output sets |
//! | [`batch`] | Sequential orchestrator — per-entry lifecycle, skip handling, report |
//! | [`imaging`] | Raster backend trait, pure Rust implementation, dimension math |
//! | [`footer`] | Footer markup (maud), link rewriting, page injection |
//! | [`output`] | CLI output formatting — entry lines and batch summary |
//!
//! # Design Decisions
//!
//! ## Backend Behind a Trait
//!
//! All pixel work goes through the narrow [`imaging::RasterBackend`] trait
//! (identify, sample edge color, extend canvas, cover render, fit render).
//! The normalizer, renderer, and orchestrator are tested against a recording
//! mock; only the trait's production implementation touches the `image`
//! crate.
//!
//! ## Pure-Rust Imaging
//!
//! No ImageMagick, no shelling out. Decoding, resizing, and encoding use
//! the `image` crate (Lanczos3 resampling) plus the `webp` crate for lossy
//! WebP. The binary is fully self-contained.
//!
//! ## Edge-Color Canvas Extension
//!
//! Pattern photos are shot against neutral backdrops but arrive in assorted
//! shapes. Near-square sources (width/height > 0.85) are padded to the 3:4
//! target ratio on a canvas filled with the averaged color of the photo's
//! top and bottom edge bands, so the padding reads as more backdrop rather
//! than letterboxing.
//!
//! ## Scoped Working Copies
//!
//! Padded intermediates live in per-entry temporary directories owned by the
//! normalization result and removed on drop — success and failure paths
//! alike. Nothing intermediate survives a run.

pub mod batch;
pub mod catalog;
pub mod footer;
pub mod imaging;
pub mod normalize;
pub mod output;
pub mod render;
