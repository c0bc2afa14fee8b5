use thiserror::Error;

use crate::language::Language;

/// Top-level error type for Glossa.
#[derive(Debug, Error)]
pub enum GlossaError {
    /// Configuration error.
    #[error("config error: {0}")]
    Config(String),

    /// A locale file could not be read, parsed, or accepted into a catalog.
    #[error("locale error: {0}")]
    Locale(String),

    /// The key path does not reach a leaf in the active or the default tree.
    #[error("unresolved key `{path}` (language {language}, default {default})")]
    UnresolvedKey {
        path: String,
        language: Language,
        default: Language,
    },

    /// A live placeholder has no caller-supplied value.
    #[error("template `{key}` references %{digit} but only {supplied} value(s) were supplied")]
    MissingSlot {
        key: String,
        digit: u8,
        supplied: usize,
    },

    /// The number of distinct placeholders differs from the supplied values.
    #[error("template `{key}` declares {expected} placeholder(s) but {supplied} value(s) were supplied")]
    ArityMismatch {
        key: String,
        expected: usize,
        supplied: usize,
    },

    /// I/O error.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_slot_names_key_and_digit() {
        let err = GlossaError::MissingSlot {
            key: "contests.summary".into(),
            digit: 2,
            supplied: 1,
        };
        let msg = err.to_string();
        assert!(msg.contains("contests.summary"));
        assert!(msg.contains("%2"));
        assert!(msg.contains("only 1 value"));
    }

    #[test]
    fn test_unresolved_key_names_both_languages() {
        let err = GlossaError::UnresolvedKey {
            path: "login.nope".into(),
            language: Language::Hr,
            default: Language::En,
        };
        assert_eq!(
            err.to_string(),
            "unresolved key `login.nope` (language hr, default en)"
        );
    }

    #[test]
    fn test_io_error_converts() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "gone");
        let err: GlossaError = io.into();
        assert!(matches!(err, GlossaError::Io(_)));
        assert_eq!(err.to_string(), "io error: gone");
    }
}
