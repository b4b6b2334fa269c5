//! On-disk catalog format: a versioned list of model descriptors.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use super::catalog::ModelCatalog;
use super::error::CatalogError;
use super::info::ModelDescriptor;

/// The only schema version this build understands.
pub const SCHEMA_VERSION: u32 = 1;

/// JSON structure on disk.
#[derive(Debug, Serialize, Deserialize)]
pub struct CatalogFile {
    pub schema_version: u32,
    pub models: Vec<ModelDescriptor>,
}

impl CatalogFile {
    pub fn new(models: Vec<ModelDescriptor>) -> Self {
        Self {
            schema_version: SCHEMA_VERSION,
            models,
        }
    }

    /// Check the schema version and validate entries into a catalog.
    pub fn into_catalog(self) -> Result<ModelCatalog, CatalogError> {
        if self.schema_version != SCHEMA_VERSION {
            return Err(CatalogError::UnsupportedSchema(self.schema_version));
        }
        ModelCatalog::new(self.models)
    }
}

/// Parse and validate catalog JSON.
pub fn parse_catalog(json: &str) -> Result<ModelCatalog, CatalogError> {
    let file: CatalogFile = serde_json::from_str(json)?;
    file.into_catalog()
}

/// Read, parse, and validate a catalog file.
pub fn load_file(path: &Path) -> Result<ModelCatalog, CatalogError> {
    let content = fs::read_to_string(path)?;
    let catalog = parse_catalog(&content)?;
    log::debug!(
        "Loaded {} model(s) from {}",
        catalog.len(),
        path.display()
    );
    Ok(catalog)
}
