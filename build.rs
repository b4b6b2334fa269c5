//! Build script: validates openai-models.json at compile time.

use std::collections::HashSet;
use std::path::PathBuf;

fn main() {
    let manifest_dir =
        std::env::var("CARGO_MANIFEST_DIR").expect("CARGO_MANIFEST_DIR set by Cargo");
    let catalog_path: PathBuf = [&manifest_dir, "config", "openai-models.json"]
        .iter()
        .collect();
    println!("cargo:rerun-if-changed={}", catalog_path.display());

    let json = std::fs::read_to_string(&catalog_path).unwrap_or_else(|e| {
        panic!(
            "Failed to read {}: {}. openai-models.json must exist and be valid.",
            catalog_path.display(),
            e
        )
    });

    #[derive(serde::Deserialize)]
    struct CatalogFile {
        schema_version: u32,
        models: Vec<ModelEntry>,
    }
    #[derive(serde::Deserialize)]
    #[serde(rename_all = "camelCase")]
    struct ModelEntry {
        provider: String,
        name: String,
        title: String,
        context_window: u64,
    }

    let file: CatalogFile = serde_json::from_str(&json).unwrap_or_else(|e| {
        panic!(
            "openai-models.json is invalid JSON: {}. Fix the file and rebuild.",
            e
        )
    });

    assert_eq!(
        file.schema_version, 1,
        "openai-models.json: unsupported schema_version"
    );
    assert!(
        !file.models.is_empty(),
        "openai-models.json: at least one model is required (the first one is the default)"
    );

    let mut seen = HashSet::new();
    for (i, m) in file.models.iter().enumerate() {
        for (field, value) in [
            ("provider", &m.provider),
            ("name", &m.name),
            ("title", &m.title),
        ] {
            assert!(
                !value.trim().is_empty(),
                "openai-models.json: model at index {} has an empty {}",
                i,
                field
            );
        }
        assert!(
            m.context_window > 0,
            "openai-models.json: model '{}' has a zero contextWindow",
            m.name
        );
        assert!(
            seen.insert(m.name.as_str()),
            "openai-models.json: duplicate model name '{}'",
            m.name
        );
    }
}
