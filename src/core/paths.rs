//! Centralized path helpers for the config directory and user catalog file.

use std::path::PathBuf;

use crate::core::app;

/// File name of the user catalog inside the config directory.
pub const USER_CATALOG_FILE: &str = "models.json";

/// Project directories from the standard platform locations.
pub fn project_dirs() -> Option<directories::ProjectDirs> {
    directories::ProjectDirs::from("io", app::VENDOR, app::NAME)
}

/// Config directory (~/.config/model-catalog/).
pub fn config_dir() -> Option<PathBuf> {
    project_dirs().map(|d| d.config_dir().to_path_buf())
}

/// User catalog path (~/.config/model-catalog/models.json). May not exist.
pub fn user_catalog_path() -> Option<PathBuf> {
    config_dir().map(|d| d.join(USER_CATALOG_FILE))
}
