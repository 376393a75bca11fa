//! lab-catalog: the read-only experiment and tool catalog.

pub mod demo;
pub mod schema;
pub mod source;
pub mod validate;

pub use schema::*;
pub use source::{Catalog, MemCatalog};
pub use validate::{ValidationError, validate_catalog};

use lab_core::ExperimentId;

/// Newest catalog document version this build understands.
pub const LATEST_VERSION: u32 = 1;

pub type CatalogResult<T> = Result<T, CatalogError>;

#[derive(thiserror::Error, Debug)]
pub enum CatalogError {
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    #[error("Experiment not found: {experiment}")]
    NotFound { experiment: ExperimentId },

    #[error("Catalog unavailable: {message}")]
    Unavailable { message: String },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub fn load_yaml(path: &std::path::Path) -> CatalogResult<CatalogDef> {
    let content = std::fs::read_to_string(path)?;
    let catalog: CatalogDef = serde_yaml::from_str(&content)?;
    validate_catalog(&catalog)?;
    Ok(catalog)
}

pub fn save_yaml(path: &std::path::Path, catalog: &CatalogDef) -> CatalogResult<()> {
    validate_catalog(catalog)?;
    let content = serde_yaml::to_string(catalog)?;
    std::fs::write(path, content)?;
    Ok(())
}

pub fn load_json(path: &std::path::Path) -> CatalogResult<CatalogDef> {
    let content = std::fs::read_to_string(path)?;
    let catalog: CatalogDef = serde_json::from_str(&content)?;
    validate_catalog(&catalog)?;
    Ok(catalog)
}

pub fn save_json(path: &std::path::Path, catalog: &CatalogDef) -> CatalogResult<()> {
    validate_catalog(catalog)?;
    let content = serde_json::to_string_pretty(catalog)?;
    std::fs::write(path, content)?;
    Ok(())
}

/// Load a catalog document, choosing the parser from the file extension.
pub fn load_path(path: &std::path::Path) -> CatalogResult<CatalogDef> {
    match path.extension().and_then(|ext| ext.to_str()) {
        Some("json") => load_json(path),
        _ => load_yaml(path),
    }
}
