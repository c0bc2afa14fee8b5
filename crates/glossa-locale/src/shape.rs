//! Shape checks: a translated tree may omit keys but never add any.

use std::collections::BTreeMap;
use std::fmt;

use crate::tree::{join_path, LocaleNode, LocaleTree};

/// Whether a node is a template string or a nested mapping.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NodeKind {
    Leaf,
    Branch,
}

impl NodeKind {
    fn of(node: &LocaleNode) -> Self {
        match node {
            LocaleNode::Leaf(_) => Self::Leaf,
            LocaleNode::Branch(_) => Self::Branch,
        }
    }
}

/// A place where a translated tree diverges from the default tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ShapeIssue {
    /// The path does not exist in the default tree.
    ExtraKey { path: String },
    /// The default tree has a node of the other kind at this path.
    KindMismatch { path: String, expected: NodeKind },
}

impl fmt::Display for ShapeIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ExtraKey { path } => write!(f, "`{path}` is not a key of the default tree"),
            Self::KindMismatch { path, expected } => {
                let expected = match expected {
                    NodeKind::Leaf => "a template string",
                    NodeKind::Branch => "a nested table",
                };
                write!(f, "`{path}` must be {expected}")
            }
        }
    }
}

/// Compare `other` against `default`. Keys missing from `other` are fine.
pub fn shape_issues(default: &LocaleTree, other: &LocaleTree) -> Vec<ShapeIssue> {
    let mut issues = Vec::new();
    compare(default.root(), other.root(), "", &mut issues);
    issues
}

fn compare(
    default: &BTreeMap<String, LocaleNode>,
    other: &BTreeMap<String, LocaleNode>,
    prefix: &str,
    issues: &mut Vec<ShapeIssue>,
) {
    for (key, node) in other {
        let path = join_path(prefix, key);
        let Some(canonical) = default.get(key) else {
            issues.push(ShapeIssue::ExtraKey { path });
            continue;
        };
        match (canonical, node) {
            (LocaleNode::Branch(d), LocaleNode::Branch(o)) => compare(d, o, &path, issues),
            (LocaleNode::Leaf(_), LocaleNode::Leaf(_)) => {}
            _ => issues.push(ShapeIssue::KindMismatch {
                path,
                expected: NodeKind::of(canonical),
            }),
        }
    }
}
