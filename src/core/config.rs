//! Configuration: which catalog is active and which model is selected.

use std::borrow::Cow;
use std::env;
use std::fmt;
use std::path::PathBuf;

use crate::core::models::{self, CatalogError, ModelCatalog, ModelDescriptor};
use crate::core::paths;

/// Env var pointing at a catalog JSON file; overrides the user catalog.
pub const CATALOG_FILE_ENV: &str = "MODEL_CATALOG_FILE";

/// Env var naming the selected model; unset or blank means the default.
pub const MODEL_ENV: &str = "MODEL_CATALOG_MODEL";

/// Where the active catalog came from.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum CatalogSource {
    BuiltIn,
    File(PathBuf),
}

impl fmt::Display for CatalogSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CatalogSource::BuiltIn => write!(f, "built-in"),
            CatalogSource::File(path) => write!(f, "{}", path.display()),
        }
    }
}

/// Raw settings before any catalog is loaded.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Settings {
    pub catalog_file: Option<PathBuf>,
    pub model: Option<String>,
}

impl Settings {
    /// Read settings from the environment.
    ///
    /// The catalog file is `MODEL_CATALOG_FILE` if set, otherwise the user
    /// catalog in the config directory when it exists.
    pub fn from_env() -> Self {
        let catalog_file = non_blank_var(CATALOG_FILE_ENV)
            .map(PathBuf::from)
            .or_else(|| paths::user_catalog_path().filter(|p| p.is_file()));
        Self {
            catalog_file,
            model: non_blank_var(MODEL_ENV),
        }
    }
}

fn non_blank_var(key: &str) -> Option<String> {
    env::var(key)
        .ok()
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
}

/// Resolved configuration: the active catalog and the selected model.
#[derive(Clone, Debug)]
pub struct Config {
    pub catalog: Cow<'static, ModelCatalog>,
    pub source: CatalogSource,
    pub model: ModelDescriptor,
    /// True when the model was named explicitly rather than taken as default.
    pub explicit_model: bool,
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("built-in model catalog: {0}")]
    BuiltIn(#[source] &'static CatalogError),
    #[error("model catalog {}: {source}", .path.display())]
    CatalogFile {
        path: PathBuf,
        #[source]
        source: CatalogError,
    },
    #[error("{var}: {source}", var = MODEL_ENV)]
    Model {
        #[source]
        source: CatalogError,
    },
}

/// Load configuration from environment.
pub fn load() -> Result<Config, ConfigError> {
    load_with(Settings::from_env())
}

/// Load the catalog named by `settings` and resolve the selected model.
pub fn load_with(settings: Settings) -> Result<Config, ConfigError> {
    let (catalog, source) = match settings.catalog_file {
        Some(path) => {
            log::debug!("Using catalog file {}", path.display());
            // An empty catalog is fatal here even when a model is named explicitly.
            let catalog = models::load_file(&path)
                .and_then(|catalog| {
                    catalog.default_model()?;
                    Ok(catalog)
                })
                .map_err(|source| ConfigError::CatalogFile {
                    path: path.clone(),
                    source,
                })?;
            (Cow::Owned(catalog), CatalogSource::File(path))
        }
        None => {
            log::debug!("Using built-in catalog");
            let catalog = models::builtin().map_err(ConfigError::BuiltIn)?;
            (Cow::Borrowed(catalog), CatalogSource::BuiltIn)
        }
    };

    // Both sources are non-empty by now, so only an unlisted name can fail.
    let model = catalog
        .resolve(settings.model.as_deref())
        .map_err(|source| ConfigError::Model { source })?
        .clone();

    log::info!(
        "Catalog {} has {} model(s); selected {}",
        source,
        catalog.len(),
        model.name
    );

    Ok(Config {
        catalog,
        source,
        model,
        explicit_model: settings.model.is_some(),
    })
}
