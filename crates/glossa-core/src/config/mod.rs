mod defaults;

#[cfg(test)]
mod tests;

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::info;

use crate::error::GlossaError;
use crate::language::Language;
use defaults::*;

/// Top-level Glossa configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub glossa: GlossaConfig,
    #[serde(default)]
    pub locale: LocaleConfig,
    #[serde(default)]
    pub interpolation: InterpolationConfig,
}

/// General settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GlossaConfig {
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

impl Default for GlossaConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
        }
    }
}

/// Where locale files live and how they are accepted.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LocaleConfig {
    /// Directory holding `<code>.toml` / `<code>.json` files. `~/` is expanded.
    #[serde(default = "default_locale_dir")]
    pub dir: String,
    /// Language whose tree is exhaustive over all valid keys.
    #[serde(default)]
    pub default_language: Language,
    /// Extra languages loaded next to the default one.
    #[serde(default = "default_languages")]
    pub languages: Vec<Language>,
    /// Reject trees whose keys are not a subset of the default tree.
    #[serde(default)]
    pub strict_shape: bool,
}

impl Default for LocaleConfig {
    fn default() -> Self {
        Self {
            dir: default_locale_dir(),
            default_language: Language::default(),
            languages: default_languages(),
            strict_shape: false,
        }
    }
}

impl LocaleConfig {
    /// Locale directory with `~` expanded.
    pub fn dir_path(&self) -> PathBuf {
        PathBuf::from(shellexpand(&self.dir))
    }
}

/// Interpolation behaviour.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct InterpolationConfig {
    /// Insert a separator between two directly adjacent slot values.
    #[serde(default)]
    pub separate_adjacent_slots: bool,
}

/// Expand `~` to home directory.
pub fn shellexpand(path: &str) -> String {
    if let Some(rest) = path.strip_prefix("~/") {
        if let Some(home) = std::env::var_os("HOME") {
            return format!("{}/{rest}", home.to_string_lossy());
        }
    }
    path.to_string()
}

/// Load configuration from a TOML file.
///
/// Falls back to defaults if the file does not exist.
pub fn load(path: &str) -> Result<Config, GlossaError> {
    let path = Path::new(path);
    if !path.exists() {
        info!(
            "Config file not found at {}, using defaults",
            path.display()
        );
        return Ok(Config::default());
    }

    let content = std::fs::read_to_string(path)
        .map_err(|e| GlossaError::Config(format!("failed to read {}: {}", path.display(), e)))?;

    let config: Config = toml::from_str(&content)
        .map_err(|e| GlossaError::Config(format!("failed to parse config: {}", e)))?;

    Ok(config)
}
