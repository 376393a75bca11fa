//! Error types for the lab-app service layer.

use std::path::PathBuf;

use lab_catalog::CatalogError;
use lab_core::ToolId;
use lab_graph::GraphError;
use lab_sim::RunError;

/// Errors from workspace editing and run requests.
#[derive(Debug, thiserror::Error)]
pub enum WorkspaceError {
    #[error("Tool {tool} is not available in this experiment")]
    UnknownTool { tool: ToolId },

    #[error("Component {component} is not placed")]
    NotPlaced { component: ToolId },

    #[error("A simulation is running")]
    Busy,

    #[error("Graph error: {0}")]
    Graph(#[from] GraphError),

    #[error(transparent)]
    Run(#[from] RunError),
}

pub type WorkspaceResult<T> = Result<T, WorkspaceError>;

/// Application error type shared by the session, scenario runner and CLI.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("Catalog error: {0}")]
    Catalog(#[from] CatalogError),

    #[error("Workspace error: {0}")]
    Workspace(#[from] WorkspaceError),

    #[error("Failed to read file: {path}")]
    FileRead {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to parse {path}: {message}")]
    Parse { path: PathBuf, message: String },

    #[error("Scenario step {step} failed: {source}")]
    Step {
        step: usize,
        source: WorkspaceError,
    },

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for lab-app operations.
pub type AppResult<T> = Result<T, AppError>;

/// Read a YAML document into `T`.
pub(crate) fn read_yaml<T: serde::de::DeserializeOwned>(path: &std::path::Path) -> AppResult<T> {
    let content = std::fs::read_to_string(path).map_err(|e| AppError::FileRead {
        path: path.to_path_buf(),
        source: e,
    })?;
    serde_yaml::from_str(&content).map_err(|e| AppError::Parse {
        path: path.to_path_buf(),
        message: e.to_string(),
    })
}
