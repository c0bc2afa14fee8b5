//! Statically known language identifiers.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::GlossaError;

/// A supported UI language.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    /// English -- the canonical resource tree.
    #[default]
    En,
    /// Croatian.
    Hr,
}

impl Language {
    /// Every supported language, default first.
    pub const ALL: [Language; 2] = [Language::En, Language::Hr];

    /// Lowercase code used for file names and config values.
    pub fn code(&self) -> &'static str {
        match self {
            Self::En => "en",
            Self::Hr => "hr",
        }
    }

    /// Human-readable name for display.
    pub fn display_name(&self) -> &'static str {
        match self {
            Self::En => "English",
            Self::Hr => "Hrvatski",
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Language {
    type Err = GlossaError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let code = s.trim().to_ascii_lowercase();
        Self::ALL
            .into_iter()
            .find(|lang| lang.code() == code)
            .ok_or_else(|| GlossaError::Config(format!("unsupported language: {s:?}")))
    }
}
