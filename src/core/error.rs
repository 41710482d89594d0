//! Fatal error conditions raised before any chart file is scanned.
//!
//! Recoverable problems (an unreadable chart file, a directory walk that fails
//! halfway) never show up here; they are logged where they happen.

use std::{fmt, io, path::PathBuf};

use thiserror::Error;

/// Which kind of input document a [`SourceError`] refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SourceKind {
    Values,
    Manifest,
}

impl fmt::Display for SourceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SourceKind::Values => write!(f, "Values"),
            SourceKind::Manifest => write!(f, "Manifest"),
        }
    }
}

/// Failure to load the values file or the manifest.
#[derive(Debug, Error)]
pub enum SourceError {
    #[error("{kind} file does not exist: {}", .path.display())]
    NotFound { kind: SourceKind, path: PathBuf },

    #[error("{kind} path is not a file: {}", .path.display())]
    NotAFile { kind: SourceKind, path: PathBuf },

    #[error("Error reading {kind} file {}: {source}", .path.display())]
    Read {
        kind: SourceKind,
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Error parsing YAML file {}: {source}", .path.display())]
    Parse {
        kind: SourceKind,
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },

    #[error("Manifest {} has no spec.workloadList sequence", .path.display())]
    MissingWorkloadList { path: PathBuf },

    #[error("Manifest {} has no usable helm.chartPath entries", .path.display())]
    NoChartPaths { path: PathBuf },
}

/// A chart root failed validation. Discovery is fail-fast: the first bad
/// root aborts the run.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum DiscoveryError {
    #[error("Helm charts directory does not exist: {root}")]
    NotFound { root: String },

    #[error("Helm charts path is not a directory: {root}")]
    NotADirectory { root: String },
}
