//! Shared model descriptor type (no dependencies on catalog or files).

use serde::{Deserialize, Serialize};

/// One catalog entry: a model's identity and its context window.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ModelDescriptor {
    /// Vendor the model is served by, e.g. "openai".
    pub provider: String,
    /// API-facing slug, unique within a catalog.
    pub name: String,
    /// Display label.
    pub title: String,
    /// Maximum context size in tokens.
    pub context_window: u64,
}

impl ModelDescriptor {
    pub fn new(
        provider: impl Into<String>,
        name: impl Into<String>,
        title: impl Into<String>,
        context_window: u64,
    ) -> Self {
        Self {
            provider: provider.into(),
            name: name.into(),
            title: title.into(),
            context_window,
        }
    }
}
