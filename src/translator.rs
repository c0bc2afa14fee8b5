//! Resolve-then-interpolate, the per-call integration of the two engines.

use tracing::error;

use glossa_core::{GlossaError, Language};
use glossa_locale::Catalog;
use glossa_template::{interpolate_keyed, Arg, FragmentSequence, Options};

/// Looks up keys in a catalog and fills their placeholders.
#[derive(Debug, Clone)]
pub struct Translator {
    catalog: Catalog,
    options: Options,
}

impl Translator {
    pub fn new(catalog: Catalog, options: Options) -> Self {
        Self { catalog, options }
    }

    /// Resolve `path` for `language` and bind `values` to its placeholders.
    ///
    /// Unknown keys and arity errors are logged and returned; they indicate a
    /// broken call site or template, never a missing translation.
    pub fn translate<'s, 'v, V>(
        &'s self,
        language: Language,
        path: &str,
        values: &'v [V],
    ) -> Result<FragmentSequence<'s, 'v, V>, GlossaError> {
        let result = self
            .catalog
            .resolve(language, path)
            .and_then(|template| interpolate_keyed(path, template, values, self.options));
        if let Err(e) = &result {
            error!("i18n: {e}");
        }
        result
    }

    /// Translate a key whose template takes no values.
    pub fn text(&self, language: Language, path: &str) -> Result<String, GlossaError> {
        self.translate::<Arg>(language, path, &[]).map(|seq| seq.render())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glossa_template::Fragment;

    fn translator() -> Translator {
        Translator::new(Catalog::bundled().unwrap(), Options::default())
    }

    #[test]
    fn test_text_native() {
        let t = translator();
        assert_eq!(
            t.text(
                Language::Hr,
                "contests.management.individual.overview.status.pending"
            )
            .unwrap(),
            "Na čekanju"
        );
        assert_eq!(t.text(Language::En, "login.title").unwrap(), "Sign in");
    }

    #[test]
    fn test_translate_with_values() {
        let t = translator();
        let values = [Arg::from(3i64), Arg::from("Zagreb Open")];
        let seq = t
            .translate(Language::En, "admin.overview.alerts.count", &values)
            .unwrap();
        assert_eq!(seq.render(), "3 unresolved alerts in Zagreb Open");
    }

    #[test]
    fn test_translate_falls_back_then_interpolates() {
        let t = translator();
        let values = [Arg::from("FER")];
        let hr = t
            .translate(Language::Hr, "login.siteRestriction", &values)
            .unwrap()
            .render();
        let en = t
            .translate(Language::En, "login.siteRestriction", &values)
            .unwrap()
            .render();
        assert_eq!(hr, en);
        assert!(hr.contains("members of FER"));
    }

    #[test]
    fn test_translate_reordered_placeholders() {
        let t = translator();
        let values = [Arg::from("FER"), Arg::from("ana")];
        let seq = t
            .translate(Language::En, "organisations.invitation", &values)
            .unwrap();
        assert_eq!(seq.render(), "ana invited you to join FER");
    }

    #[test]
    fn test_translate_escaped_placeholder() {
        let t = translator();
        assert_eq!(
            t.text(Language::En, "problems.formatHint").unwrap(),
            "Write %1 in a statement to show a literal placeholder"
        );
    }

    #[test]
    fn test_translate_unknown_key() {
        let t = translator();
        let err = t.text(Language::Hr, "login.doesNotExist").unwrap_err();
        assert!(matches!(err, GlossaError::UnresolvedKey { .. }));
    }

    #[test]
    fn test_translate_missing_value_names_key() {
        let t = translator();
        let err = t.text(Language::En, "problems.limits").unwrap_err();
        assert!(err.to_string().contains("problems.limits"));
        assert!(err.to_string().contains("%1"));
    }

    #[test]
    fn test_translate_fragments_keep_structure() {
        let t = Translator::new(
            Catalog::bundled().unwrap(),
            Options {
                separate_adjacent_slots: true,
            },
        );
        let values = [Arg::from("Ana")];
        let fragments: Vec<_> = t
            .translate(Language::Hr, "navigation.signedInAs", &values)
            .unwrap()
            .into_iter()
            .collect();
        assert_eq!(fragments.len(), 2);
        assert!(matches!(fragments[0], Fragment::Literal(_)));
        assert!(fragments[1].is_slot());
    }
}
