//! Locale files shipped inside the binary.

use std::path::{Path, PathBuf};
use tracing::info;

use glossa_core::{GlossaError, Language};

use crate::catalog::Catalog;
use crate::tree::LocaleTree;

/// Bundled canonical English strings (compiled into the binary).
const BUNDLED_EN: &str = include_str!("../../../locales/en.toml");

/// Bundled Croatian strings (compiled into the binary).
const BUNDLED_HR: &str = include_str!("../../../locales/hr.toml");

/// The bundled TOML source for `language`.
pub fn bundled_source(language: Language) -> &'static str {
    match language {
        Language::En => BUNDLED_EN,
        Language::Hr => BUNDLED_HR,
    }
}

impl Catalog {
    /// Build a catalog from the bundled files, English as default.
    pub fn bundled() -> Result<Self, GlossaError> {
        let en = LocaleTree::from_toml_str(BUNDLED_EN, "bundled en.toml")?;
        let mut catalog = Catalog::new(Language::En, en);
        for language in Language::ALL {
            if catalog.is_loaded(language) {
                continue;
            }
            let origin = format!("bundled {}.toml", language.code());
            let tree = LocaleTree::from_toml_str(bundled_source(language), &origin)?;
            catalog.insert(language, tree)?;
        }
        Ok(catalog)
    }
}

/// Deploy bundled locale files to `dir`. Never overwrites existing files.
///
/// Returns the paths that were written; empty when every file was present.
pub fn install_bundled_locales(dir: &Path) -> Result<Vec<PathBuf>, GlossaError> {
    std::fs::create_dir_all(dir)?;

    let mut written = Vec::new();
    for language in Language::ALL {
        let dest = dir.join(format!("{}.toml", language.code()));
        if dest.exists() {
            continue;
        }
        std::fs::write(&dest, bundled_source(language))?;
        info!("locales: deployed bundled {}", dest.display());
        written.push(dest);
    }
    Ok(written)
}
