//! CLI commands: models list, default, show, config info.
//!
//! These produce plain text (or JSON with `--json`) on stdout.

use std::error::Error;

use crate::core::config::{self, Config};
use crate::core::models::{CatalogError, ModelDescriptor};
use crate::core::paths;

/// Format context length as human-readable (e.g. "128k", "1.0M").
pub fn format_context(n: u64) -> String {
    if n >= 1_000_000 {
        format!("{:.1}M", n as f64 / 1_000_000.0)
    } else if n >= 1_000 {
        format!("{}k", n / 1_000)
    } else {
        n.to_string()
    }
}

/// Render models as an aligned table with a trailing count line.
pub fn format_table(models: &[&ModelDescriptor]) -> String {
    if models.is_empty() {
        return "No models found.\n".to_string();
    }

    let name_w = models
        .iter()
        .map(|m| m.name.len())
        .max()
        .unwrap_or(20)
        .max(20);
    let title_w = models
        .iter()
        .map(|m| m.title.len())
        .max()
        .unwrap_or(30)
        .max(30);

    let mut out = String::new();
    out.push_str(&format!(
        "{:<name_w$}  {:<title_w$}  {:>7}\n",
        "NAME", "TITLE", "CONTEXT"
    ));
    out.push_str(&format!(
        "{}  {}  -------\n",
        "-".repeat(name_w),
        "-".repeat(title_w)
    ));
    for m in models {
        out.push_str(&format!(
            "{:<name_w$}  {:<title_w$}  {:>7}\n",
            m.name,
            m.title,
            format_context(m.context_window)
        ));
    }
    out.push_str(&format!("\n{} model(s) listed\n", models.len()));
    out
}

/// Render one model as labelled lines.
pub fn format_details(model: &ModelDescriptor) -> String {
    format!(
        "Name:     {}\nTitle:    {}\nProvider: {}\nContext:  {} tokens ({})\n",
        model.name,
        model.title,
        model.provider,
        model.context_window,
        format_context(model.context_window)
    )
}

/// Run the `models` command: list catalog models, optionally filtered.
pub fn run_models(config: &Config, query: Option<&str>, json: bool) -> Result<(), Box<dyn Error>> {
    let filtered = config.catalog.filter(query.unwrap_or(""));
    log::debug!("{} model(s) match query {:?}", filtered.len(), query);
    if json {
        println!("{}", serde_json::to_string_pretty(&filtered)?);
    } else {
        print!("{}", format_table(&filtered));
    }
    Ok(())
}

/// Run the `default` command: show the catalog's default model.
pub fn run_default(config: &Config, json: bool) -> Result<(), Box<dyn Error>> {
    let model = config.catalog.default_model()?;
    print_model(model, json)
}

/// Run the `show` command: show one model by name.
pub fn run_show(config: &Config, name: &str, json: bool) -> Result<(), Box<dyn Error>> {
    let model = config
        .catalog
        .find(name)
        .ok_or_else(|| CatalogError::UnknownModel(name.to_string()))?;
    print_model(model, json)
}

fn print_model(model: &ModelDescriptor, json: bool) -> Result<(), Box<dyn Error>> {
    if json {
        println!("{}", serde_json::to_string_pretty(model)?);
    } else {
        print!("{}", format_details(model));
    }
    Ok(())
}

/// Run the `config` command: display config dir, catalog source, and selected model.
/// Prints the config dir, then fails like every other command on a catalog error.
pub fn run_config() -> Result<(), Box<dyn Error>> {
    let config_dir = paths::config_dir()
        .map(|p| p.display().to_string())
        .unwrap_or_else(|| "—".to_string());
    println!("Config:   {}", config_dir);

    let c = config::load()?;
    let selection = if c.explicit_model {
        format!("from {}", config::MODEL_ENV)
    } else {
        "default".to_string()
    };
    println!("Catalog:  {} ({} models)", c.source, c.catalog.len());
    println!("Model:    {} ({})", c.model.name, selection);
    Ok(())
}
