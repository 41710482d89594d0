//! Chart root discovery and chart file enumeration.
//!
//! Chart roots come either straight from the command line or from the
//! `spec.workloadList[*].helm.chartPath` entries of a manifest (BOM) file.

use std::{
    collections::HashSet,
    fs,
    path::{Path, PathBuf},
};

use glob::Pattern;
use serde_yaml::Value;
use walkdir::{DirEntry, WalkDir};

use super::{
    error::{DiscoveryError, SourceError, SourceKind},
    values::read_source,
};

/// Extensions (compared case-insensitively) of files that are scanned.
pub const CHART_FILE_EXTENSIONS: &[&str] = &["yaml", "yml", "tpl"];

/// Where chart roots come from. The two modes are mutually exclusive.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ChartSource {
    /// A single directory, kept exactly as given for display.
    Directory(String),
    /// A manifest listing workloads with `helm.chartPath` entries.
    Manifest(PathBuf),
}

/// A directory under which chart files are discovered.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ChartRoot {
    root: String,
}

impl ChartRoot {
    pub fn new(root: impl Into<String>) -> Self {
        Self { root: root.into() }
    }

    /// The root as supplied by the user or the manifest.
    pub fn as_str(&self) -> &str {
        &self.root
    }

    pub fn path(&self) -> &Path {
        Path::new(&self.root)
    }
}

/// Resolve a [`ChartSource`] into the ordered list of chart roots.
pub fn discover_chart_roots(source: &ChartSource) -> Result<Vec<ChartRoot>, SourceError> {
    match source {
        ChartSource::Directory(dir) => Ok(vec![ChartRoot::new(dir.clone())]),
        ChartSource::Manifest(path) => load_manifest_file(path),
    }
}

pub fn load_manifest_file(path: &Path) -> Result<Vec<ChartRoot>, SourceError> {
    let content = read_source(path, SourceKind::Manifest)?;
    parse_manifest(&content, path)
}

/// Parse manifest content; `path` is only used in error messages.
///
/// Workload entries without a `helm.chartPath` string are skipped. Any string
/// is kept as is, even an empty one, and is left to [`validate_chart_roots`].
/// A manifest that yields no chart root at all is an error.
pub fn parse_manifest(content: &str, path: &Path) -> Result<Vec<ChartRoot>, SourceError> {
    let value: Value = serde_yaml::from_str(content).map_err(|source| SourceError::Parse {
        kind: SourceKind::Manifest,
        path: path.to_path_buf(),
        source,
    })?;

    let workloads = value
        .get("spec")
        .and_then(|spec| spec.get("workloadList"))
        .and_then(Value::as_sequence)
        .ok_or_else(|| SourceError::MissingWorkloadList {
            path: path.to_path_buf(),
        })?;

    let roots: Vec<ChartRoot> = workloads
        .iter()
        .filter_map(|workload| workload.get("helm")?.get("chartPath")?.as_str())
        .map(ChartRoot::new)
        .collect();

    if roots.is_empty() {
        return Err(SourceError::NoChartPaths {
            path: path.to_path_buf(),
        });
    }

    log::debug!(
        "Manifest {} lists {} chart root(s)",
        path.display(),
        roots.len()
    );
    Ok(roots)
}

/// Every root must exist and be a directory. Stops at the first bad root.
pub fn validate_chart_roots(roots: &[ChartRoot]) -> Result<(), DiscoveryError> {
    for root in roots {
        let path = root.path();
        if !path.exists() {
            return Err(DiscoveryError::NotFound {
                root: root.as_str().to_string(),
            });
        }
        if !path.is_dir() {
            return Err(DiscoveryError::NotADirectory {
                root: root.as_str().to_string(),
            });
        }
    }
    Ok(())
}

pub fn is_chart_file(path: &Path) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .map(|ext| {
            CHART_FILE_EXTENSIONS
                .iter()
                .any(|allowed| ext.eq_ignore_ascii_case(allowed))
        })
        .unwrap_or(false)
}

/// Recursively list chart files under `root`, hidden directories included.
///
/// `ignores` are matched against the path relative to the root. Walk errors
/// are logged and the walk goes on, so every file it still reaches is kept.
pub fn scan_chart_files(root: &ChartRoot, ignores: &[Pattern]) -> Vec<PathBuf> {
    chart_files_from_walk(root, WalkDir::new(root.path()).sort_by_file_name(), ignores)
}

fn chart_files_from_walk<I>(root: &ChartRoot, entries: I, ignores: &[Pattern]) -> Vec<PathBuf>
where
    I: IntoIterator<Item = walkdir::Result<DirEntry>>,
{
    let mut files = Vec::new();

    for entry in entries {
        let entry = match entry {
            Ok(e) => e,
            Err(e) => {
                log::error!(
                    "Error traversing helm charts directory {}: {}",
                    root.as_str(),
                    e
                );
                continue;
            }
        };
        let path = entry.path();
        if !path.is_file() || !is_chart_file(path) {
            continue;
        }

        let relative = path.strip_prefix(root.path()).unwrap_or(path);
        if ignores.iter().any(|p| p.matches_path(relative)) {
            log::debug!("Ignoring {}", path.display());
            continue;
        }

        files.push(path.to_path_buf());
    }

    files
}

/// Chart files of all roots, in root order. A file reachable from several
/// roots, nested or spelled differently, is listed once under the first.
pub fn collect_chart_files(roots: &[ChartRoot], ignores: &[Pattern]) -> Vec<PathBuf> {
    let mut seen: HashSet<PathBuf> = HashSet::new();
    let mut files = Vec::new();
    for root in roots {
        for file in scan_chart_files(root, ignores) {
            let key = fs::canonicalize(&file).unwrap_or_else(|_| file.clone());
            if seen.insert(key) {
                files.push(file);
            } else {
                log::debug!("Skipping {}, already scanned", file.display());
            }
        }
    }
    files
}
