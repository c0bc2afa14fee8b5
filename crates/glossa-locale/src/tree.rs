//! Nested key -> template string trees.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use glossa_core::GlossaError;

/// A node in a locale tree: a template string or a nested mapping.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum LocaleNode {
    Leaf(String),
    Branch(BTreeMap<String, LocaleNode>),
}

/// The resource tree for one language.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LocaleTree {
    root: BTreeMap<String, LocaleNode>,
}

impl LocaleTree {
    /// Parse a tree from TOML. `origin` names the source in error messages.
    pub fn from_toml_str(content: &str, origin: &str) -> Result<Self, GlossaError> {
        toml::from_str(content)
            .map_err(|e| GlossaError::Locale(format!("failed to parse {origin}: {e}")))
    }

    /// Parse a tree from JSON. `origin` names the source in error messages.
    pub fn from_json_str(content: &str, origin: &str) -> Result<Self, GlossaError> {
        serde_json::from_str(content)
            .map_err(|e| GlossaError::Locale(format!("failed to parse {origin}: {e}")))
    }

    pub(crate) fn root(&self) -> &BTreeMap<String, LocaleNode> {
        &self.root
    }

    /// Walk `path` segment by segment. Returns `None` if a segment is absent,
    /// a leaf is hit before the path is exhausted, or the path ends on a branch.
    pub fn lookup(&self, path: &str) -> Option<&str> {
        if path.is_empty() {
            return None;
        }
        let mut segments = path.split('.');
        let mut node = self.root.get(segments.next()?)?;
        for segment in segments {
            match node {
                LocaleNode::Branch(children) => node = children.get(segment)?,
                LocaleNode::Leaf(_) => return None,
            }
        }
        match node {
            LocaleNode::Leaf(template) => Some(template),
            LocaleNode::Branch(_) => None,
        }
    }

    /// Every dotted leaf path, sorted.
    pub fn leaf_paths(&self) -> Vec<String> {
        let mut paths = Vec::new();
        collect_leaves(&self.root, "", &mut paths);
        paths.sort();
        paths
    }
}

fn collect_leaves(map: &BTreeMap<String, LocaleNode>, prefix: &str, out: &mut Vec<String>) {
    for (key, node) in map {
        let path = join_path(prefix, key);
        match node {
            LocaleNode::Leaf(_) => out.push(path),
            LocaleNode::Branch(children) => collect_leaves(children, &path, out),
        }
    }
}

pub(crate) fn join_path(prefix: &str, key: &str) -> String {
    if prefix.is_empty() {
        key.to_string()
    } else {
        format!("{prefix}.{key}")
    }
}
