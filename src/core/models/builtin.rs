//! Built-in OpenAI catalog, embedded from `config/openai-models.json`.
//!
//! `build.rs` rejects an invalid table, so parsing here only fails if the
//! build script and this module disagree on the format. The result, error
//! included, is computed once and shared for the rest of the process.

use std::sync::OnceLock;

use super::catalog::ModelCatalog;
use super::error::CatalogError;
use super::file::parse_catalog;

const OPENAI_MODELS_JSON: &str = include_str!("../../../config/openai-models.json");

static BUILTIN_CATALOG: OnceLock<Result<ModelCatalog, CatalogError>> = OnceLock::new();

/// Returns the built-in catalog, parsing it on first access.
///
/// A successful result is never empty, so its default model always exists.
pub fn builtin() -> Result<&'static ModelCatalog, &'static CatalogError> {
    BUILTIN_CATALOG
        .get_or_init(|| {
            let catalog = parse_catalog(OPENAI_MODELS_JSON)?;
            catalog.default_model()?;
            Ok(catalog)
        })
        .as_ref()
}
