//! Ordered, validated model catalog with a positional default.

use std::collections::HashMap;

use super::error::CatalogError;
use super::info::ModelDescriptor;

/// Immutable list of models for one or more providers.
///
/// Declaration order is significant: the first entry is the default model.
/// There are no setters; build a new catalog to change the contents.
#[derive(Clone, Debug, Default)]
pub struct ModelCatalog {
    entries: Vec<ModelDescriptor>,
    index: HashMap<String, usize>,
}

impl ModelCatalog {
    /// Validate entries and build the catalog.
    ///
    /// Rejects duplicate names, zero context windows, and blank fields.
    /// An empty list is accepted here; [`ModelCatalog::default_model`] is
    /// where an empty catalog becomes an error.
    pub fn new(entries: Vec<ModelDescriptor>) -> Result<Self, CatalogError> {
        let mut index = HashMap::with_capacity(entries.len());

        for (i, entry) in entries.iter().enumerate() {
            for (field, value) in [
                ("provider", &entry.provider),
                ("name", &entry.name),
                ("title", &entry.title),
            ] {
                if value.trim().is_empty() {
                    return Err(CatalogError::BlankField { index: i, field });
                }
            }
            if entry.context_window == 0 {
                return Err(CatalogError::InvalidContextWindow(entry.name.clone()));
            }
            if index.insert(entry.name.clone(), i).is_some() {
                return Err(CatalogError::DuplicateName(entry.name.clone()));
            }
        }

        Ok(Self { entries, index })
    }

    /// All models in declaration order.
    pub fn list_models(&self) -> &[ModelDescriptor] {
        &self.entries
    }

    /// The model used when none is chosen explicitly: the first entry.
    pub fn default_model(&self) -> Result<&ModelDescriptor, CatalogError> {
        self.entries.first().ok_or(CatalogError::Empty)
    }

    /// Number of models.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True when the catalog has no models (and therefore no default).
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Exact-name lookup.
    pub fn find(&self, name: &str) -> Option<&ModelDescriptor> {
        self.index.get(name).and_then(|&i| self.entries.get(i))
    }

    /// Context window for a model name, if the catalog knows it.
    pub fn context_window(&self, name: &str) -> Option<u64> {
        self.find(name).map(|m| m.context_window)
    }

    /// Resolve an optional explicit choice: `None` falls back to the default,
    /// an unlisted name is an error.
    pub fn resolve(&self, requested: Option<&str>) -> Result<&ModelDescriptor, CatalogError> {
        match requested {
            Some(name) => self
                .find(name)
                .ok_or_else(|| CatalogError::UnknownModel(name.to_string())),
            None => self.default_model(),
        }
    }

    /// Filter models by query (case-insensitive match on name or title).
    /// Returns every model, in order, when the query is empty.
    pub fn filter(&self, query: &str) -> Vec<&ModelDescriptor> {
        if query.is_empty() {
            return self.entries.iter().collect();
        }
        let q = query.to_lowercase();
        self.entries
            .iter()
            .filter(|m| {
                m.name.to_lowercase().contains(&q) || m.title.to_lowercase().contains(&q)
            })
            .collect()
    }
}
