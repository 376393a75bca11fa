//! Content-addressed run records.

use lab_core::ExperimentId;
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};

use crate::input::RunInput;
use crate::types::SimulationResult;

/// A delivered result with the id of the layout that produced it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RunRecord {
    pub run_id: String,
    pub experiment_id: ExperimentId,
    /// RFC 3339, UTC.
    pub timestamp: String,
    pub result: SimulationResult,
}

impl RunRecord {
    pub fn new(input: &RunInput<'_>, result: SimulationResult) -> Self {
        Self {
            run_id: compute_run_id(input),
            experiment_id: input.experiment.id,
            timestamp: chrono::Utc::now().to_rfc3339(),
            result,
        }
    }
}

/// SHA-256 over the experiment, the placed components and the wiring.
///
/// Connection ids are random, so only their endpoints are hashed; the same
/// layout wired the same way always gets the same id.
pub fn compute_run_id(input: &RunInput<'_>) -> String {
    let mut hasher = Sha256::new();

    hasher.update(input.experiment.id.get().to_le_bytes());

    for component in input.components {
        hasher.update(component.id.get().to_le_bytes());
        hasher.update(component.kind.as_str().as_bytes());
        hasher.update(component.position.x.to_le_bytes());
        hasher.update(component.position.y.to_le_bytes());
        hasher.update(b";");
    }

    for connection in input.graph.connections() {
        hasher.update(connection.source_point.as_str().as_bytes());
        hasher.update(b"->");
        hasher.update(connection.target_point.as_str().as_bytes());
        hasher.update(b";");
    }

    let result = hasher.finalize();
    format!("{:x}", result)
}
