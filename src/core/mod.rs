//! Core checking engine.
//!
//! Chart roots are discovered, chart files are scanned for `.Values`
//! references, each reference is resolved against the values tree and the
//! results are aggregated into a [`Report`].

pub mod discovery;
pub mod error;
pub mod extract;
pub mod report;
pub mod resolve;
pub mod values;

pub use discovery::{ChartRoot, ChartSource};
pub use error::{DiscoveryError, SourceError, SourceKind};
pub use report::{FileGroup, Report, ReportEntry, Summary, build_report};
pub use resolve::{exists, path_exists};
pub use values::{ValueNode, ValuesTree, load_values_file, parse_values};
