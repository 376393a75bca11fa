//! Graph-specific error types.

use lab_core::{LabError, ToolId};

use crate::model::{ConnectionId, PointId};

pub type GraphResult<T> = Result<T, GraphError>;

/// Connection graph errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GraphError {
    /// A point id that no placed component owns.
    UnknownPoint { point: PointId },

    /// Two points share the same id.
    DuplicatePoint { point: PointId },

    /// A point belongs to a component the graph doesn't know about.
    OrphanPoint { point: PointId, owner: ToolId },

    /// A component's points don't match the set its kind prescribes.
    PointSetMismatch { owner: ToolId },

    /// A connection joins two points on the same component.
    SelfLoop { connection: ConnectionId },

    /// A connection refers to a point that doesn't exist.
    DanglingEndpoint {
        connection: ConnectionId,
        point: PointId,
    },

    /// A connection's component field doesn't match the owner of its point.
    EndpointOwnerMismatch {
        connection: ConnectionId,
        point: PointId,
        expected: ToolId,
        actual: ToolId,
    },

    /// A point's `connected` flag disagrees with the connection list.
    StaleConnectedFlag { point: PointId, expected: bool },
}

impl std::fmt::Display for GraphError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GraphError::UnknownPoint { point } => {
                write!(f, "Connection point {} does not exist", point)
            }
            GraphError::DuplicatePoint { point } => {
                write!(f, "Connection point {} appears more than once", point)
            }
            GraphError::OrphanPoint { point, owner } => {
                write!(f, "Point {} refers to unplaced component {}", point, owner)
            }
            GraphError::PointSetMismatch { owner } => {
                write!(f, "Component {} has points that don't match its kind", owner)
            }
            GraphError::SelfLoop { connection } => {
                write!(f, "Connection {} joins a component to itself", connection)
            }
            GraphError::DanglingEndpoint { connection, point } => {
                write!(
                    f,
                    "Connection {} refers to non-existent point {}",
                    connection, point
                )
            }
            GraphError::EndpointOwnerMismatch {
                connection,
                point,
                expected,
                actual,
            } => {
                write!(
                    f,
                    "Connection {} expects point {} on component {} but it belongs to {}",
                    connection, point, expected, actual
                )
            }
            GraphError::StaleConnectedFlag { point, expected } => {
                write!(
                    f,
                    "Point {} has connected={} but the connection list says {}",
                    point, !expected, expected
                )
            }
        }
    }
}

impl std::error::Error for GraphError {}

impl From<GraphError> for LabError {
    fn from(err: GraphError) -> Self {
        LabError::Invariant {
            what: err.to_string(),
        }
    }
}
