//! Catalog configuration errors.

/// A defect in catalog data, or a lookup the catalog cannot satisfy.
///
/// Everything except `UnknownModel` means the catalog itself is broken and
/// should abort startup.
#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("model catalog is empty; at least one model is required")]
    Empty,
    #[error("duplicate model name '{0}'")]
    DuplicateName(String),
    #[error("model '{0}': contextWindow must be greater than zero")]
    InvalidContextWindow(String),
    #[error("model at index {index}: {field} cannot be empty")]
    BlankField { index: usize, field: &'static str },
    #[error("unsupported catalog schema_version {0} (expected {expected})", expected = super::file::SCHEMA_VERSION)]
    UnsupportedSchema(u32),
    #[error("invalid catalog JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("failed to read catalog file: {0}")]
    Io(#[from] std::io::Error),
    #[error("unknown model '{0}'")]
    UnknownModel(String),
}
