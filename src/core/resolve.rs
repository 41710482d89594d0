//! Path resolution: does a dotted `.Values` path exist in the values tree?
//!
//! Only existence is checked, never the value itself. A missing key and an
//! ancestor that is not a mapping both mean "not found".

use super::values::{ValueNode, ValuesTree};

/// Walk `segments` left to right from the tree root.
///
/// Returns true only when every segment names a key of the mapping reached so
/// far. The final value may be anything, including `null` or an empty mapping.
pub fn exists<S: AsRef<str>>(tree: &ValuesTree, segments: &[S]) -> bool {
    let mut current = tree.root();
    for segment in segments {
        match current {
            ValueNode::Mapping(map) => match map.get(segment.as_ref()) {
                Some(next) => current = next,
                None => return false,
            },
            _ => return false,
        }
    }
    true
}

/// Split a reference like `PG.R1.DBName` on `.` and resolve it.
///
/// Empty segments (`A..B`) are kept, so they only resolve when the values
/// file really defines an empty key.
pub fn path_exists(tree: &ValuesTree, path: &str) -> bool {
    let segments: Vec<&str> = path.split('.').collect();
    exists(tree, &segments)
}
