//! Model catalog tests.

use std::collections::HashSet;
use std::io::Write;

use super::{CatalogError, CatalogFile, ModelCatalog, ModelDescriptor};
use super::{builtin, load_file, parse_catalog};

fn openai(name: &str, context_window: u64) -> ModelDescriptor {
    ModelDescriptor::new("openai", name, name.to_uppercase(), context_window)
}

#[test]
fn default_is_first_declared_model() {
    let catalog =
        ModelCatalog::new(vec![openai("gpt-5.2", 200_000), openai("gpt-4.1", 1_047_576)])
            .unwrap();
    assert_eq!(catalog.default_model().unwrap().name, "gpt-5.2");
}

#[test]
fn single_entry_is_the_default() {
    let only = openai("o3", 200_000);
    let catalog = ModelCatalog::new(vec![only.clone()]).unwrap();
    assert_eq!(catalog.default_model().unwrap(), &only);
}

#[test]
fn empty_catalog_has_no_default() {
    let catalog = ModelCatalog::new(vec![]).unwrap();
    assert!(catalog.is_empty());
    assert!(matches!(catalog.default_model(), Err(CatalogError::Empty)));
    assert!(matches!(catalog.resolve(None), Err(CatalogError::Empty)));
}

#[test]
fn duplicate_name_rejected_at_construction() {
    let err = ModelCatalog::new(vec![
        openai("gpt-5", 200_000),
        openai("o3", 200_000),
        openai("gpt-5", 128_000),
    ])
    .unwrap_err();
    assert!(matches!(&err, CatalogError::DuplicateName(name) if name == "gpt-5"));
}

#[test]
fn zero_context_window_rejected() {
    let err = ModelCatalog::new(vec![openai("gpt-5", 0)]).unwrap_err();
    assert!(matches!(&err, CatalogError::InvalidContextWindow(name) if name == "gpt-5"));
}

#[test]
fn blank_fields_rejected() {
    let err = ModelCatalog::new(vec![
        openai("gpt-5", 200_000),
        ModelDescriptor::new("openai", "gpt-5-mini", "  ", 200_000),
    ])
    .unwrap_err();
    assert!(matches!(
        err,
        CatalogError::BlankField {
            index: 1,
            field: "title"
        }
    ));
    assert!(err.to_string().contains("index 1"));
}

#[test]
fn list_models_keeps_declaration_order() {
    let catalog = ModelCatalog::new(vec![
        openai("o4-mini", 200_000),
        openai("gpt-4.1", 1_047_576),
        openai("gpt-5", 200_000),
    ])
    .unwrap();
    let first: Vec<_> = catalog.list_models().iter().map(|m| &m.name).collect();
    let second: Vec<_> = catalog.list_models().iter().map(|m| &m.name).collect();
    assert_eq!(first, vec!["o4-mini", "gpt-4.1", "gpt-5"]);
    assert_eq!(first, second);
}

#[test]
fn find_and_context_window() {
    let catalog =
        ModelCatalog::new(vec![openai("gpt-5.2", 200_000), openai("gpt-4.1", 1_047_576)])
            .unwrap();
    assert_eq!(catalog.find("gpt-4.1").unwrap().context_window, 1_047_576);
    assert_eq!(catalog.context_window("gpt-5.2"), Some(200_000));
    assert_eq!(catalog.context_window("gpt-3.5-turbo"), None);
}

#[test]
fn resolve_explicit_and_unknown() {
    let catalog =
        ModelCatalog::new(vec![openai("gpt-5.2", 200_000), openai("gpt-4.1", 1_047_576)])
            .unwrap();
    assert_eq!(catalog.resolve(None).unwrap().name, "gpt-5.2");
    assert_eq!(catalog.resolve(Some("gpt-4.1")).unwrap().name, "gpt-4.1");
    assert!(matches!(
        catalog.resolve(Some("claude")),
        Err(CatalogError::UnknownModel(name)) if name == "claude"
    ));
}

#[test]
fn filter_matches_name_or_title_case_insensitively() {
    let catalog = ModelCatalog::new(vec![
        ModelDescriptor::new("openai", "o3", "o3 (Reasoning)", 200_000),
        ModelDescriptor::new("openai", "gpt-5", "GPT-5", 200_000),
        ModelDescriptor::new("openai", "o4-mini", "o4-mini (Fast Reasoning)", 200_000),
    ])
    .unwrap();

    let names = |q: &str| -> Vec<String> {
        catalog
            .filter(q)
            .into_iter()
            .map(|m| m.name.clone())
            .collect()
    };
    assert_eq!(names(""), vec!["o3", "gpt-5", "o4-mini"]);
    assert_eq!(names("REASON"), vec!["o3", "o4-mini"]);
    assert_eq!(names("gpt"), vec!["gpt-5"]);
    assert!(names("xyz").is_empty());
}

#[test]
fn builtin_catalog_holds_openai_models() {
    let catalog = builtin().unwrap();
    let models = catalog.list_models();

    assert_eq!(models.len(), 9);
    assert!(models.iter().all(|m| m.provider == "openai"));
    assert!(models.iter().all(|m| m.context_window > 0));

    let unique: HashSet<_> = models.iter().map(|m| m.name.as_str()).collect();
    assert_eq!(unique.len(), models.len());

    let default = catalog.default_model().unwrap();
    assert_eq!(default, &models[0]);
    assert_eq!(default.name, "gpt-5.2");
    assert_eq!(default.title, "GPT-5.2");
    assert_eq!(catalog.context_window("gpt-5-nano"), Some(128_000));
    assert_eq!(catalog.context_window("gpt-4.1"), Some(1_047_576));
}

#[test]
fn builtin_catalog_is_shared() {
    let a = builtin().unwrap();
    let b = builtin().unwrap();
    assert!(std::ptr::eq(a, b));
}

#[test]
fn parse_uses_camel_case_keys() {
    let json = r#"{
        "schema_version": 1,
        "models": [
            {"provider": "openai", "name": "gpt-5", "title": "GPT-5", "contextWindow": 200000}
        ]
    }"#;
    let catalog = parse_catalog(json).unwrap();
    assert_eq!(catalog.context_window("gpt-5"), Some(200_000));
}

#[test]
fn parse_rejects_unknown_schema_version() {
    let json = r#"{"schema_version": 2, "models": []}"#;
    let err = parse_catalog(json).unwrap_err();
    assert!(matches!(err, CatalogError::UnsupportedSchema(2)));
    assert!(err.to_string().contains("expected 1"));
}

#[test]
fn parse_rejects_invalid_json() {
    let err = parse_catalog("{ not json").unwrap_err();
    assert!(matches!(err, CatalogError::Json(_)));
    assert!(std::error::Error::source(&err).is_some());
}

#[test]
fn parse_rejects_negative_context_window() {
    let json = r#"{
        "schema_version": 1,
        "models": [
            {"provider": "openai", "name": "gpt-5", "title": "GPT-5", "contextWindow": -1}
        ]
    }"#;
    assert!(matches!(
        parse_catalog(json).unwrap_err(),
        CatalogError::Json(_)
    ));
}

#[test]
fn load_file_reads_written_catalog() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    let contents = CatalogFile::new(vec![openai("gpt-4.1", 1_047_576), openai("o3", 200_000)]);
    file.write_all(serde_json::to_string_pretty(&contents).unwrap().as_bytes())
        .unwrap();

    let catalog = load_file(file.path()).unwrap();
    assert_eq!(catalog.len(), 2);
    assert_eq!(catalog.default_model().unwrap().name, "gpt-4.1");
}

#[test]
fn load_file_missing_is_io_error() {
    let dir = tempfile::TempDir::new().unwrap();
    let err = load_file(&dir.path().join("missing.json")).unwrap_err();
    match err {
        CatalogError::Io(e) => assert_eq!(e.kind(), std::io::ErrorKind::NotFound),
        other => panic!("expected Io, got {:?}", other),
    }
}
