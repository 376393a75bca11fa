//! Catalog validation logic.

use crate::schema::CatalogDef;
use std::collections::HashSet;

#[derive(thiserror::Error, Debug)]
pub enum ValidationError {
    #[error("Duplicate ID: {id} in {context}")]
    DuplicateId { id: String, context: String },

    #[error("Missing reference: {id} in {context}")]
    MissingReference { id: String, context: String },

    #[error("Invalid value: {field} = {value} ({reason})")]
    InvalidValue {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Unsupported version: {version}")]
    UnsupportedVersion { version: u32 },
}

pub fn validate_catalog(catalog: &CatalogDef) -> Result<(), ValidationError> {
    if catalog.version > crate::LATEST_VERSION {
        return Err(ValidationError::UnsupportedVersion {
            version: catalog.version,
        });
    }

    let mut experiment_ids = HashSet::new();
    for experiment in &catalog.experiments {
        if !experiment_ids.insert(experiment.id) {
            return Err(ValidationError::DuplicateId {
                id: experiment.id.to_string(),
                context: "experiments".to_string(),
            });
        }
        if experiment.title.trim().is_empty() {
            return Err(ValidationError::InvalidValue {
                field: format!("experiments[{}].title", experiment.id),
                value: experiment.title.clone(),
                reason: "title must not be empty".to_string(),
            });
        }
    }

    let mut tool_ids = HashSet::new();
    for tool in &catalog.tools {
        if !tool_ids.insert(tool.id) {
            return Err(ValidationError::DuplicateId {
                id: tool.id.to_string(),
                context: "tools".to_string(),
            });
        }
        if !experiment_ids.contains(&tool.experiment_id) {
            return Err(ValidationError::MissingReference {
                id: tool.experiment_id.to_string(),
                context: format!("tool {} experimentId", tool.id),
            });
        }
        if tool.name.trim().is_empty() {
            return Err(ValidationError::InvalidValue {
                field: format!("tools[{}].name", tool.id),
                value: tool.name.clone(),
                reason: "name must not be empty".to_string(),
            });
        }
        if !tool.properties.is_object() {
            return Err(ValidationError::InvalidValue {
                field: format!("tools[{}].properties", tool.id),
                value: tool.properties.to_string(),
                reason: "properties must be a map".to_string(),
            });
        }
    }

    // A required kind nobody offers would make the experiment impossible to run
    for experiment in &catalog.experiments {
        for required in &experiment.required_tool_types {
            let offered = catalog
                .tools_for(experiment.id)
                .any(|t| &t.kind == required);
            if !offered {
                return Err(ValidationError::MissingReference {
                    id: required.to_string(),
                    context: format!("experiment {} requiredTools", experiment.id),
                });
            }
        }
    }

    Ok(())
}
