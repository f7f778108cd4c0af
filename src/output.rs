//! CLI output formatting.
//!
//! # Output Format
//!
//! Per-entry lines stream as the batch runs:
//!
//! ```text
//! patterns/meadow-shawl: 4 files (extended)
//! patterns/aran-cable-pullover: 4 files
//! logo/logo: 3 files
//! ```
//!
//! Skip diagnostics go to stderr with the offending filename:
//!
//! ```text
//! skipped fisherman-gansey: source file not found: assets/IMG_2203.jpg
//! ```
//!
//! After the last entry, the summary:
//!
//! ```text
//! categories: 8 files
//! favicon: 3 files
//! ...
//! Skipped: 1 entry
//! Source 14.2 MB → output 3.4 MB (76% smaller)
//! ```
//!
//! # Architecture
//!
//! Each display has a `format_*` function (returns `String`s) for
//! testability and a `print_*` wrapper that writes to stdout/stderr. Format
//! functions are pure — no I/O, no side effects.

use crate::batch::{BatchReport, EntryReport};

/// Format one completed or skipped entry as its stream line.
pub fn format_entry_line(entry: &EntryReport) -> String {
    match &entry.skipped {
        Some(reason) => format!("skipped {}: {}", entry.name, reason),
        None => {
            let extended = if entry.extended { " (extended)" } else { "" };
            format!(
                "{}/{}: {} files{}",
                entry.category.label(),
                entry.name,
                entry.outputs.len(),
                extended
            )
        }
    }
}

/// Format the end-of-batch summary.
pub fn format_summary(report: &BatchReport) -> Vec<String> {
    let mut lines = Vec::new();

    for (category, count) in &report.category_counts {
        lines.push(format!("{category}: {count} files"));
    }

    if report.skipped > 0 {
        let plural = if report.skipped == 1 { "entry" } else { "entries" };
        lines.push(format!("Skipped: {} {plural}", report.skipped));
    }

    lines.push(format!(
        "Source {} → output {} ({:.0}% smaller)",
        human_bytes(report.source_bytes),
        human_bytes(report.output_bytes),
        report.reduction_percent()
    ));

    lines
}

/// Print one entry line: completions to stdout, skips to stderr.
pub fn print_entry(entry: &EntryReport) {
    if entry.is_done() {
        println!("{}", format_entry_line(entry));
    } else {
        eprintln!("{}", format_entry_line(entry));
    }
}

pub fn print_summary(report: &BatchReport) {
    for line in format_summary(report) {
        println!("{line}");
    }
}

/// Human-readable byte size, one decimal place above kilobytes.
fn human_bytes(bytes: u64) -> String {
    const KB: f64 = 1024.0;
    const MB: f64 = 1024.0 * 1024.0;
    let b = bytes as f64;
    if b >= MB {
        format!("{:.1} MB", b / MB)
    } else if b >= KB {
        format!("{:.1} KB", b / KB)
    } else {
        format!("{bytes} B")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Category;
    use std::collections::BTreeMap;
    use std::path::PathBuf;

    fn done_entry() -> EntryReport {
        EntryReport {
            name: "meadow-shawl".into(),
            category: Category::Patterns,
            source: "IMG_2041.jpg".into(),
            extended: false,
            outputs: vec![
                PathBuf::from("out/patterns/meadow-shawl-320w.webp"),
                PathBuf::from("out/patterns/meadow-shawl-320w.jpg"),
            ],
            skipped: None,
        }
    }

    #[test]
    fn entry_line_for_completed_entry() {
        assert_eq!(
            format_entry_line(&done_entry()),
            "patterns/meadow-shawl: 2 files"
        );
    }

    #[test]
    fn entry_line_marks_extension() {
        let entry = EntryReport {
            extended: true,
            ..done_entry()
        };
        assert_eq!(
            format_entry_line(&entry),
            "patterns/meadow-shawl: 2 files (extended)"
        );
    }

    #[test]
    fn entry_line_for_skip_names_file() {
        let entry = EntryReport {
            outputs: vec![],
            skipped: Some("source file not found: src/IMG_2041.jpg".into()),
            ..done_entry()
        };
        assert_eq!(
            format_entry_line(&entry),
            "skipped meadow-shawl: source file not found: src/IMG_2041.jpg"
        );
    }

    #[test]
    fn summary_lists_categories_and_sizes() {
        let report = BatchReport {
            entries: vec![],
            category_counts: BTreeMap::from([
                ("logo".to_string(), 5),
                ("patterns".to_string(), 24),
            ]),
            skipped: 0,
            source_bytes: 4 * 1024 * 1024,
            output_bytes: 1024 * 1024,
        };

        let lines = format_summary(&report);
        assert_eq!(
            lines,
            vec![
                "logo: 5 files",
                "patterns: 24 files",
                "Source 4.0 MB → output 1.0 MB (75% smaller)",
            ]
        );
    }

    #[test]
    fn summary_reports_skips() {
        let report = BatchReport {
            entries: vec![],
            category_counts: BTreeMap::new(),
            skipped: 1,
            source_bytes: 0,
            output_bytes: 0,
        };

        let lines = format_summary(&report);
        assert!(lines.contains(&"Skipped: 1 entry".to_string()));
    }

    #[test]
    fn human_bytes_units() {
        assert_eq!(human_bytes(512), "512 B");
        assert_eq!(human_bytes(2048), "2.0 KB");
        assert_eq!(human_bytes(3 * 1024 * 1024 + 512 * 1024), "3.5 MB");
    }
}
