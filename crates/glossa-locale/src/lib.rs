//! # glossa-locale
//!
//! Locale resource trees and key resolution for Glossa. One nested tree is
//! loaded per language; lookups walk the active language first and fall back
//! to the default language's tree, which is exhaustive over all valid keys.

mod bundled;
mod catalog;
mod loader;
mod shape;
mod tree;

pub use bundled::{bundled_source, install_bundled_locales};
pub use catalog::Catalog;
pub use loader::{load_catalog, load_language};
pub use shape::{shape_issues, NodeKind, ShapeIssue};
pub use tree::{LocaleNode, LocaleTree};
