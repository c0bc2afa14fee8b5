//! The loaded set of locale trees and fallback resolution over them.

use std::collections::HashMap;
use std::sync::Arc;
use tracing::{debug, warn};

use glossa_core::{GlossaError, Language};

use crate::shape::shape_issues;
use crate::tree::LocaleTree;

/// Locale trees keyed by language.
///
/// The default language's tree is required up front. Other languages are
/// appended later; a loaded tree is never replaced or mutated, so clones of
/// a catalog can be read from any thread.
#[derive(Debug, Clone)]
pub struct Catalog {
    default: Language,
    trees: HashMap<Language, Arc<LocaleTree>>,
    strict_shape: bool,
}

impl Catalog {
    pub fn new(default: Language, tree: LocaleTree) -> Self {
        let mut trees = HashMap::new();
        trees.insert(default, Arc::new(tree));
        Self {
            default,
            trees,
            strict_shape: false,
        }
    }

    /// Reject inserted trees that add keys absent from the default tree.
    pub fn with_strict_shape(mut self, strict: bool) -> Self {
        self.strict_shape = strict;
        self
    }

    pub fn default_language(&self) -> Language {
        self.default
    }

    pub fn get(&self, language: Language) -> Option<&LocaleTree> {
        self.trees.get(&language).map(Arc::as_ref)
    }

    pub fn is_loaded(&self, language: Language) -> bool {
        self.trees.contains_key(&language)
    }

    /// Loaded languages in declaration order.
    pub fn languages(&self) -> Vec<Language> {
        let mut langs: Vec<Language> = self.trees.keys().copied().collect();
        langs.sort();
        langs
    }

    /// Add the tree for a language that is not loaded yet.
    pub fn insert(&mut self, language: Language, tree: LocaleTree) -> Result<(), GlossaError> {
        if self.trees.contains_key(&language) {
            return Err(GlossaError::Locale(format!(
                "language {language} is already loaded"
            )));
        }

        let issues = shape_issues(self.default_tree(), &tree);
        if let Some(first) = issues.first() {
            if self.strict_shape {
                return Err(GlossaError::Locale(format!("{language}: {first}")));
            }
            for issue in &issues {
                warn!("locale {language}: {issue}");
            }
        }

        self.trees.insert(language, Arc::new(tree));
        Ok(())
    }

    /// Resolve a dotted key path to its template string.
    ///
    /// The active language is tried first; on any miss the same walk runs
    /// against the default tree. A miss there is an invalid key.
    pub fn resolve(&self, language: Language, path: &str) -> Result<&str, GlossaError> {
        if language != self.default {
            if let Some(template) = self.get(language).and_then(|tree| tree.lookup(path)) {
                return Ok(template);
            }
            debug!("i18n: `{path}` missing in {language}, falling back to {}", self.default);
        }

        self.default_tree()
            .lookup(path)
            .ok_or_else(|| GlossaError::UnresolvedKey {
                path: path.to_string(),
                language,
                default: self.default,
            })
    }

    fn default_tree(&self) -> &LocaleTree {
        // The default tree is inserted by `new` and never removed.
        &self.trees[&self.default]
    }
}
