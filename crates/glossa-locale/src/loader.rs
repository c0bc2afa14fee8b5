//! Loading locale trees from `<dir>/<code>.toml` or `<dir>/<code>.json`.

use std::path::{Path, PathBuf};
use tracing::{info, warn};

use glossa_core::config::LocaleConfig;
use glossa_core::{GlossaError, Language};

use crate::catalog::Catalog;
use crate::tree::LocaleTree;

/// Find the locale file for `language`, preferring TOML over JSON.
async fn locate(dir: &Path, language: Language) -> Result<Option<PathBuf>, GlossaError> {
    for ext in ["toml", "json"] {
        let path = dir.join(format!("{}.{ext}", language.code()));
        if tokio::fs::try_exists(&path).await? {
            return Ok(Some(path));
        }
    }
    Ok(None)
}

fn parse_file(path: &Path, content: &str) -> Result<LocaleTree, GlossaError> {
    let origin = path.display().to_string();
    match path.extension().and_then(|e| e.to_str()) {
        Some("json") => LocaleTree::from_json_str(content, &origin),
        _ => LocaleTree::from_toml_str(content, &origin),
    }
}

/// Read and parse the tree for one language.
pub async fn load_language(dir: &Path, language: Language) -> Result<LocaleTree, GlossaError> {
    let Some(path) = locate(dir, language).await? else {
        return Err(GlossaError::Locale(format!(
            "no locale file for {language} in {}",
            dir.display()
        )));
    };
    let content = tokio::fs::read_to_string(&path)
        .await
        .map_err(|e| GlossaError::Locale(format!("failed to read {}: {e}", path.display())))?;
    let tree = parse_file(&path, &content)?;
    info!("locale: loaded {language} from {}", path.display());
    Ok(tree)
}

/// Build a catalog from the configured directory.
///
/// The default language must load. Extra languages without a file are
/// skipped; any other failure is returned.
pub async fn load_catalog(cfg: &LocaleConfig) -> Result<Catalog, GlossaError> {
    let dir = cfg.dir_path();
    let default_tree = load_language(&dir, cfg.default_language).await?;
    let mut catalog =
        Catalog::new(cfg.default_language, default_tree).with_strict_shape(cfg.strict_shape);

    for &language in &cfg.languages {
        if catalog.is_loaded(language) {
            continue;
        }
        if locate(&dir, language).await?.is_none() {
            warn!("locale: no file for {language} in {}, skipping", dir.display());
            continue;
        }
        let tree = load_language(&dir, language).await?;
        catalog.insert(language, tree)?;
    }

    Ok(catalog)
}
