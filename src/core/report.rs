//! Report aggregation across chart roots.
//!
//! Entries are produced in a single pass over the discovered files and are
//! never mutated afterwards. Ordering for presentation is applied by
//! [`Report::groups`], not during collection.

use std::{
    collections::BTreeMap,
    path::{Path, PathBuf},
};

use glob::Pattern;
use serde::Serialize;

use super::{
    discovery::{ChartRoot, collect_chart_files},
    extract::extract_file_references,
    resolve::path_exists,
    values::ValuesTree,
};

/// One reference found in one file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReportEntry {
    /// `<chart root>/<path relative to the root>`, always with `/`.
    pub display_path: String,
    /// The dotted path after `.Values.`.
    pub reference: String,
    pub found: bool,
}

/// Counts derived from the report entries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Summary {
    pub total: usize,
    pub found: usize,
    pub missing: usize,
    pub files_scanned: usize,
}

/// Entries of a single file, sorted by reference.
#[derive(Debug, PartialEq, Eq)]
pub struct FileGroup<'a> {
    pub display_path: &'a str,
    pub entries: Vec<&'a ReportEntry>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Report {
    pub entries: Vec<ReportEntry>,
    /// Every chart file that was scanned, including those without references.
    pub files_scanned: usize,
}

impl Report {
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn summary(&self) -> Summary {
        let total = self.entries.len();
        let missing = self.entries.iter().filter(|e| !e.found).count();
        Summary {
            total,
            found: total - missing,
            missing,
            files_scanned: self.files_scanned,
        }
    }

    pub fn missing(&self) -> impl Iterator<Item = &ReportEntry> {
        self.entries.iter().filter(|e| !e.found)
    }

    /// Entries grouped by display path, groups and entries sorted.
    pub fn groups(&self) -> Vec<FileGroup<'_>> {
        let mut by_file: BTreeMap<&str, Vec<&ReportEntry>> = BTreeMap::new();
        for entry in &self.entries {
            by_file
                .entry(entry.display_path.as_str())
                .or_default()
                .push(entry);
        }

        by_file
            .into_iter()
            .map(|(display_path, mut entries)| {
                entries.sort_by(|a, b| {
                    a.reference
                        .cmp(&b.reference)
                        .then_with(|| a.found.cmp(&b.found))
                });
                FileGroup {
                    display_path,
                    entries,
                }
            })
            .collect()
    }
}

fn normalize_separators(path: &str) -> String {
    path.replace('\\', "/")
}

/// Label `file` with the first root (in discovery order) that contains it.
///
/// Falls back to the full path when no root matches.
pub fn display_path(file: &Path, roots: &[ChartRoot]) -> String {
    for root in roots {
        if let Ok(relative) = file.strip_prefix(root.path()) {
            let root_str = root.as_str().trim_end_matches(['/', '\\']);
            return format!(
                "{}/{}",
                normalize_separators(root_str),
                normalize_separators(&relative.to_string_lossy())
            );
        }
    }
    normalize_separators(&file.to_string_lossy())
}

/// Scan every root, extract references and resolve them against `values`.
///
/// Roots must already be validated. Callers only get here with a loaded
/// values tree; a values file that failed to load aborts the run earlier.
pub fn build_report(roots: &[ChartRoot], values: &ValuesTree, ignores: &[Pattern]) -> Report {
    let files = collect_chart_files(roots, ignores);
    log::info!("Found {} Helm chart files to process", files.len());
    build_report_for_files(roots, &files, values)
}

/// Like [`build_report`] for an already enumerated file list.
pub fn build_report_for_files(
    roots: &[ChartRoot],
    files: &[PathBuf],
    values: &ValuesTree,
) -> Report {
    let mut entries = Vec::new();

    for file in files {
        let references = extract_file_references(file);
        if references.is_empty() {
            continue;
        }

        let display = display_path(file, roots);
        log::info!(
            "Processing file: {} ({} variables found)",
            display,
            references.len()
        );

        let mut references: Vec<String> = references.into_iter().collect();
        references.sort();

        for reference in references {
            let found = path_exists(values, &reference);
            entries.push(ReportEntry {
                display_path: display.clone(),
                reference,
                found,
            });
        }
    }

    log::info!("Total variables processed: {}", entries.len());

    Report {
        entries,
        files_scanned: files.len(),
    }
}
