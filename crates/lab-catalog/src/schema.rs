//! Catalog schema definitions.
//!
//! Field names follow the camelCase shape the web front end already consumes.

use lab_core::{ExperimentId, ExperimentKind, ToolId, ToolKind};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CatalogDef {
    pub version: u32,
    #[serde(default)]
    pub experiments: Vec<ExperimentDescriptor>,
    #[serde(default)]
    pub tools: Vec<Tool>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ExperimentDescriptor {
    pub id: ExperimentId,
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(rename = "type")]
    pub kind: ExperimentKind,
    #[serde(default)]
    pub category: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub video_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub instructions: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub theory: Option<String>,
    /// Tool kinds that must all be placed before a run; order is kept for messages.
    #[serde(default, rename = "requiredTools", alias = "requiredToolTypes")]
    pub required_tool_types: Vec<ToolKind>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Tool {
    pub id: ToolId,
    pub name: String,
    #[serde(rename = "type")]
    pub kind: ToolKind,
    #[serde(default)]
    pub icon_url: String,
    pub experiment_id: ExperimentId,
    #[serde(default = "empty_properties")]
    pub properties: serde_json::Value,
}

fn empty_properties() -> serde_json::Value {
    serde_json::Value::Object(serde_json::Map::new())
}

impl Tool {
    /// Numeric property lookup, e.g. `voltage` on a battery.
    pub fn number_property(&self, key: &str) -> Option<f64> {
        self.properties.get(key).and_then(|v| v.as_f64())
    }
}

impl CatalogDef {
    pub fn experiment(&self, id: ExperimentId) -> Option<&ExperimentDescriptor> {
        self.experiments.iter().find(|e| e.id == id)
    }

    /// Tools of one experiment, in catalog order.
    pub fn tools_for(&self, id: ExperimentId) -> impl Iterator<Item = &Tool> + '_ {
        self.tools.iter().filter(move |t| t.experiment_id == id)
    }
}
