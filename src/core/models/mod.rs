//! Model catalog: descriptors, validation, the built-in table, and catalog files.

mod builtin;
mod catalog;
mod error;
mod file;
mod info;

pub use builtin::builtin;
pub use catalog::ModelCatalog;
pub use error::CatalogError;
pub use file::{CatalogFile, SCHEMA_VERSION, load_file, parse_catalog};
pub use info::ModelDescriptor;

#[cfg(test)]
mod tests;
