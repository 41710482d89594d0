//! Values tree loaded from a Helm values file.
//!
//! The tree is built once per run and is read-only afterwards. Every node is an
//! explicit [`ValueNode`] variant so that path resolution only ever descends
//! through [`ValueNode::Mapping`].

use std::{collections::BTreeMap, fs, path::Path};

use serde_yaml::Value;

use super::error::{SourceError, SourceKind};

/// A single node of the values tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValueNode {
    Mapping(BTreeMap<String, ValueNode>),
    Sequence(Vec<ValueNode>),
    /// Any scalar, kept in its rendered form.
    Scalar(String),
    Null,
}

impl ValueNode {
    pub fn as_mapping(&self) -> Option<&BTreeMap<String, ValueNode>> {
        match self {
            ValueNode::Mapping(map) => Some(map),
            _ => None,
        }
    }
}

impl From<Value> for ValueNode {
    fn from(value: Value) -> Self {
        match value {
            Value::Null => ValueNode::Null,
            Value::Bool(b) => ValueNode::Scalar(b.to_string()),
            Value::Number(n) => ValueNode::Scalar(n.to_string()),
            Value::String(s) => ValueNode::Scalar(s),
            Value::Sequence(seq) => ValueNode::Sequence(seq.into_iter().map(Into::into).collect()),
            Value::Mapping(map) => {
                // Only string keys can ever be addressed by a dotted path.
                let entries = map
                    .into_iter()
                    .filter_map(|(key, val)| match key {
                        Value::String(key) => Some((key, ValueNode::from(val))),
                        _ => None,
                    })
                    .collect();
                ValueNode::Mapping(entries)
            }
            Value::Tagged(tagged) => ValueNode::from(tagged.value),
        }
    }
}

/// Parsed contents of a values file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValuesTree {
    root: ValueNode,
}

impl ValuesTree {
    pub fn empty() -> Self {
        Self {
            root: ValueNode::Mapping(BTreeMap::new()),
        }
    }

    /// An empty (null) document becomes an empty mapping.
    pub fn from_yaml(value: Value) -> Self {
        match ValueNode::from(value) {
            ValueNode::Null => Self::empty(),
            root => Self { root },
        }
    }

    pub fn root(&self) -> &ValueNode {
        &self.root
    }

    /// Number of top-level keys, 0 when the root is not a mapping.
    pub fn top_level_len(&self) -> usize {
        self.root.as_mapping().map_or(0, BTreeMap::len)
    }
}

pub fn parse_values(content: &str) -> Result<ValuesTree, serde_yaml::Error> {
    let value: Value = serde_yaml::from_str(content)?;
    Ok(ValuesTree::from_yaml(value))
}

/// Load the values file at `path`.
///
/// Each failure mode maps to its own [`SourceError`] variant: missing file,
/// path that is not a file, unreadable file and invalid YAML.
pub fn load_values_file(path: &Path) -> Result<ValuesTree, SourceError> {
    let content = read_source(path, SourceKind::Values)?;
    parse_values(&content).map_err(|source| SourceError::Parse {
        kind: SourceKind::Values,
        path: path.to_path_buf(),
        source,
    })
}

/// Read an input document, distinguishing "missing" and "not a file" from
/// other I/O failures.
pub(crate) fn read_source(path: &Path, kind: SourceKind) -> Result<String, SourceError> {
    if !path.exists() {
        return Err(SourceError::NotFound {
            kind,
            path: path.to_path_buf(),
        });
    }
    if !path.is_file() {
        return Err(SourceError::NotAFile {
            kind,
            path: path.to_path_buf(),
        });
    }
    fs::read_to_string(path).map_err(|source| SourceError::Read {
        kind,
        path: path.to_path_buf(),
        source,
    })
}
