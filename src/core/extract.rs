//! Reference extraction from chart templates.
//!
//! Matches `{{ .Values.<path> }}` and `{{ .Values.<path> | filter ... }}`.
//! The filter expression is discarded; nothing else of the template language
//! is interpreted.

use std::{collections::HashSet, fs, path::Path, sync::LazyLock};

use regex::Regex;

/// `.Values` references: `{{`, optional whitespace, `.Values.`, the dotted
/// path, an optional `| filter`, optional whitespace, `}}`.
static VALUES_REFERENCE_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\{\{\s*\.Values\.([^}\s|]+)(?:\s*\|\s*[^}]+)?\s*\}\}").unwrap()
});

/// Return the distinct dotted paths referenced in `text`.
///
/// Paths are returned verbatim, so `A..B` stays `A..B` and simply fails to
/// resolve later. Ordering is left to the report.
pub fn extract_references(text: &str) -> HashSet<String> {
    VALUES_REFERENCE_REGEX
        .captures_iter(text)
        .filter_map(|caps| caps.get(1))
        .map(|m| m.as_str().to_string())
        .collect()
}

/// Read `path` and extract its references.
///
/// A file that cannot be read or is not valid UTF-8 is logged and yields an
/// empty set; it never aborts the run.
pub fn extract_file_references(path: &Path) -> HashSet<String> {
    match fs::read_to_string(path) {
        Ok(content) => extract_references(&content),
        Err(e) => {
            log::warn!("Error reading file {}: {}", path.display(), e);
            HashSet::new()
        }
    }
}
