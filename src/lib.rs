//! # model-catalog
//!
//! Ordered catalog of model descriptors (provider, name, title, context window)
//! whose first entry is the default model. Ships the OpenAI table built in and
//! accepts user catalog files in the same JSON format.

pub mod core;

pub use crate::core::models::{CatalogError, ModelCatalog, ModelDescriptor, builtin};
