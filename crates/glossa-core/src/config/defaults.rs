use crate::language::Language;

pub(super) fn default_log_level() -> String {
    "info".into()
}

pub(super) fn default_locale_dir() -> String {
    "~/.glossa/locales".into()
}

pub(super) fn default_languages() -> Vec<Language> {
    vec![Language::Hr]
}
