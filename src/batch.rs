//! Batch orchestration.
//!
//! Walks the catalog in order and drives the two per-entry stages
//! (shape normalization, then rendering) against a [`RasterBackend`].
//!
//! ## Execution model
//!
//! The batch is deliberately sequential and run-to-completion: one entry at
//! a time, no shared mutable state between entries besides the output tree,
//! no partial-resume bookkeeping. Re-running is safe because output names
//! are deterministic and files are overwritten in place.
//!
//! Each entry moves through a linear lifecycle: pending → normalizing
//! (photo categories only) → rendering → done, or → skipped on a missing
//! source, unreadable dimensions, or a failed raster operation. All entry
//! errors are entry-scoped; the batch continues with the next entry. The
//! only fatal error is a source root that is not a directory, checked once
//! before the first entry.
//!
//! ## Report
//!
//! After the last entry the batch produces a [`BatchReport`]: per-entry
//! outcomes, output file counts per category, and aggregate source/output
//! byte totals for the size-reduction summary.

use crate::catalog::{Catalog, CatalogError, Category, DerivativeSpec};
use crate::imaging::{BackendError, RasterBackend, RustBackend};
use crate::normalize::{NormalizeError, normalize_shape};
use crate::render::{render_derivatives, render_favicon, render_logo};
use serde::Serialize;
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum BatchError {
    #[error("Source root is not a directory: {0}")]
    InvalidSourceRoot(PathBuf),
    #[error(transparent)]
    Catalog(#[from] CatalogError),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Why an entry was skipped. Entry-scoped — never aborts the batch.
#[derive(Error, Debug)]
pub enum EntryError {
    #[error("source file not found: {0}")]
    MissingSource(PathBuf),
    #[error("could not read dimensions of {path}: {message}")]
    UnreadableDimensions { path: PathBuf, message: String },
    #[error("render failed for '{name}': {message}")]
    RenderFailed { name: String, message: String },
}

/// Outcome of one catalog entry.
#[derive(Debug, Serialize)]
pub struct EntryReport {
    pub name: String,
    pub category: Category,
    pub source: String,
    /// Whether the source was padded onto an extended canvas first.
    pub extended: bool,
    pub outputs: Vec<PathBuf>,
    /// Skip diagnostic; `None` for completed entries.
    pub skipped: Option<String>,
}

impl EntryReport {
    pub fn is_done(&self) -> bool {
        self.skipped.is_none()
    }
}

/// Aggregate result of a full batch run.
#[derive(Debug, Serialize)]
pub struct BatchReport {
    pub entries: Vec<EntryReport>,
    /// Output file count per category label.
    pub category_counts: BTreeMap<String, usize>,
    pub skipped: usize,
    pub source_bytes: u64,
    pub output_bytes: u64,
}

impl BatchReport {
    /// Size reduction of outputs relative to sources, in percent.
    pub fn reduction_percent(&self) -> f64 {
        if self.source_bytes == 0 {
            return 0.0;
        }
        let saved = self.source_bytes.saturating_sub(self.output_bytes);
        saved as f64 / self.source_bytes as f64 * 100.0
    }
}

/// Run the batch with the production backend.
pub fn run(
    catalog: &Catalog,
    source_root: &Path,
    output_root: &Path,
    observer: impl FnMut(&EntryReport),
) -> Result<BatchReport, BatchError> {
    let backend = RustBackend::new();
    run_with_backend(&backend, catalog, source_root, output_root, observer)
}

/// Run the batch against a specific backend (allows testing with a mock).
///
/// `observer` is called once per entry as it completes, in catalog order.
pub fn run_with_backend(
    backend: &impl RasterBackend,
    catalog: &Catalog,
    source_root: &Path,
    output_root: &Path,
    mut observer: impl FnMut(&EntryReport),
) -> Result<BatchReport, BatchError> {
    catalog.validate()?;
    if !source_root.is_dir() {
        return Err(BatchError::InvalidSourceRoot(source_root.to_path_buf()));
    }
    std::fs::create_dir_all(output_root)?;

    let mut entries = Vec::new();
    for entry in &catalog.entries {
        let report = process_entry(backend, entry, source_root, output_root);
        observer(&report);
        entries.push(report);
    }

    let mut category_counts: BTreeMap<String, usize> = BTreeMap::new();
    for report in &entries {
        *category_counts
            .entry(report.category.label().to_string())
            .or_default() += report.outputs.len();
    }
    let skipped = entries.iter().filter(|e| !e.is_done()).count();

    Ok(BatchReport {
        entries,
        category_counts,
        skipped,
        source_bytes: dir_bytes(source_root),
        output_bytes: dir_bytes(output_root),
    })
}

/// Process a single entry through its full lifecycle.
fn process_entry(
    backend: &impl RasterBackend,
    entry: &DerivativeSpec,
    source_root: &Path,
    output_root: &Path,
) -> EntryReport {
    let source = source_root.join(&entry.source);
    let output_dir = match entry.category.dir() {
        Some(dir) => output_root.join(dir),
        None => output_root.to_path_buf(),
    };

    let result = render_entry(backend, entry, &source, &output_dir);
    let (outputs, extended, skipped) = match result {
        Ok((outputs, extended)) => (outputs, extended, None),
        Err(e) => (Vec::new(), false, Some(e.to_string())),
    };

    EntryReport {
        name: entry.name.clone(),
        category: entry.category,
        source: entry.source.clone(),
        extended,
        outputs,
        skipped,
    }
}

fn render_entry(
    backend: &impl RasterBackend,
    entry: &DerivativeSpec,
    source: &Path,
    output_dir: &Path,
) -> Result<(Vec<PathBuf>, bool), EntryError> {
    if !source.is_file() {
        return Err(EntryError::MissingSource(source.to_path_buf()));
    }

    let render_failed = |e: BackendError| EntryError::RenderFailed {
        name: entry.name.clone(),
        message: e.to_string(),
    };

    match entry.category {
        Category::Logo => {
            let outputs = render_logo(backend, source, output_dir, &entry.name, &entry.widths)
                .map_err(render_failed)?;
            Ok((outputs, false))
        }
        Category::Favicon => {
            let outputs =
                render_favicon(backend, source, output_dir).map_err(render_failed)?;
            Ok((outputs, false))
        }
        _ => {
            // Working copy (if any) lives until rendering finishes, then its
            // temp dir is cleaned up with `normalized`
            let normalized = normalize_shape(backend, source).map_err(|e| match e {
                NormalizeError::Unreadable { path, source } => EntryError::UnreadableDimensions {
                    path,
                    message: source.to_string(),
                },
                other => EntryError::RenderFailed {
                    name: entry.name.clone(),
                    message: other.to_string(),
                },
            })?;

            let outputs = render_derivatives(
                backend,
                normalized.working_path(),
                output_dir,
                &entry.name,
                &entry.widths,
            )
            .map_err(render_failed)?;
            Ok((outputs, normalized.extended))
        }
    }
}

/// Total size in bytes of all files under a directory. Missing directories
/// count as zero.
fn dir_bytes(root: &Path) -> u64 {
    walkdir::WalkDir::new(root)
        .into_iter()
        .filter_map(|e| e.ok())
        .filter(|e| e.file_type().is_file())
        .filter_map(|e| e.metadata().ok())
        .map(|m| m.len())
        .sum()
}
