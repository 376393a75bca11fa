//! File round-trips through the catalog loaders.

use lab_catalog::{
    Catalog, CatalogError, MemCatalog, ValidationError, demo::demo_catalog, load_json, load_path,
    load_yaml, save_json, save_yaml,
};
use lab_core::{ExperimentId, ToolKind};

fn temp_path(name: &str) -> std::path::PathBuf {
    std::env::temp_dir().join(format!("lab-catalog-{}-{name}", std::process::id()))
}

#[test]
fn yaml_file_roundtrip() {
    let catalog = demo_catalog().unwrap();
    let path = temp_path("demo.yaml");
    save_yaml(&path, &catalog).unwrap();
    let loaded = load_yaml(&path).unwrap();
    std::fs::remove_file(&path).ok();
    assert_eq!(catalog, loaded);
}

#[test]
fn json_file_uses_web_field_names() {
    let catalog = demo_catalog().unwrap();
    let path = temp_path("demo.json");
    save_json(&path, &catalog).unwrap();
    let text = std::fs::read_to_string(&path).unwrap();
    assert!(text.contains("\"requiredTools\""));
    assert!(text.contains("\"experimentId\""));
    assert!(text.contains("\"height-selector\""));

    let loaded = load_path(&path).unwrap();
    std::fs::remove_file(&path).ok();
    assert_eq!(catalog, loaded);
}

#[test]
fn invalid_file_is_rejected_on_load() {
    let path = temp_path("broken.json");
    std::fs::write(
        &path,
        r#"{"version":1,"experiments":[],"tools":[{"id":1,"name":"Ball","type":"ball","experimentId":5}]}"#,
    )
    .unwrap();
    let err = load_json(&path).unwrap_err();
    std::fs::remove_file(&path).ok();
    assert!(matches!(
        err,
        CatalogError::Validation(ValidationError::MissingReference { .. })
    ));
}

#[test]
fn missing_file_is_io_error() {
    let err = load_yaml(&temp_path("does-not-exist.yaml")).unwrap_err();
    assert!(matches!(err, CatalogError::Io(_)));
}

#[test]
fn loaded_file_serves_as_catalog() {
    let path = temp_path("served.yaml");
    save_yaml(&path, &demo_catalog().unwrap()).unwrap();
    let catalog = MemCatalog::from_def(load_yaml(&path).unwrap()).unwrap();
    std::fs::remove_file(&path).ok();

    let projectile = catalog.experiment(ExperimentId(3)).unwrap();
    assert_eq!(projectile.title, "Projectile Motion");
    let kinds: Vec<ToolKind> = catalog
        .tools_for(projectile.id)
        .unwrap()
        .into_iter()
        .map(|t| t.kind)
        .collect();
    assert!(kinds.contains(&ToolKind::Launcher));
    assert!(kinds.contains(&ToolKind::WindControl));
}
