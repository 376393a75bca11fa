//! Core workspace data structures.

use core::fmt;

use lab_core::{Position, ToolId, ToolKind};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Direction of a connection point.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PointKind {
    Input,
    Output,
    Bidirectional,
}

impl PointKind {
    /// Whether a point of this kind may be wired to a point of `other`'s kind.
    ///
    /// Bidirectional points accept anything; otherwise one side must be an
    /// output and the other an input. The relation is symmetric.
    pub fn can_connect(self, other: PointKind) -> bool {
        matches!(
            (self, other),
            (PointKind::Bidirectional, _)
                | (_, PointKind::Bidirectional)
                | (PointKind::Output, PointKind::Input)
                | (PointKind::Input, PointKind::Output)
        )
    }
}

/// Role of a point on its owner; also the suffix of the point's id.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PointRole {
    Pos,
    Neg,
    In,
    Out,
    Start,
    End,
}

impl PointRole {
    pub fn suffix(self) -> &'static str {
        match self {
            PointRole::Pos => "pos",
            PointRole::Neg => "neg",
            PointRole::In => "in",
            PointRole::Out => "out",
            PointRole::Start => "start",
            PointRole::End => "end",
        }
    }
}

/// Stable identifier of a connection point: `"<componentId>-<role>"`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PointId(pub String);

impl PointId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn for_role(owner: ToolId, role: PointRole) -> Self {
        Self(format!("{}-{}", owner, role.suffix()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for PointId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

impl From<String> for PointId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

impl fmt::Display for PointId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Opaque, globally unique connection identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ConnectionId(pub Uuid);

impl ConnectionId {
    pub fn new_v4() -> Self {
        Self(Uuid::new_v4())
    }
}

impl fmt::Display for ConnectionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A catalog tool positioned on the canvas.
///
/// The id is the tool's catalog id, so a tool can be placed at most once.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlacedComponent {
    pub id: ToolId,
    pub kind: ToolKind,
    pub position: Position,
}

impl PlacedComponent {
    pub fn new(id: ToolId, kind: ToolKind, position: Position) -> Self {
        Self { id, kind, position }
    }
}

/// A named anchor on a placed component through which it can be wired.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConnectionPoint {
    pub id: PointId,
    pub kind: PointKind,
    pub role: PointRole,
    pub position: Position,
    pub owner: ToolId,
    pub connected: bool,
}

/// A wire between two connection points on different components.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Connection {
    pub id: ConnectionId,
    pub source_point: PointId,
    pub target_point: PointId,
    pub source_component: ToolId,
    pub target_component: ToolId,
}

impl Connection {
    pub(crate) fn between(source: &ConnectionPoint, target: &ConnectionPoint) -> Self {
        Self {
            id: ConnectionId::new_v4(),
            source_point: source.id.clone(),
            target_point: target.id.clone(),
            source_component: source.owner,
            target_component: target.owner,
        }
    }

    /// Whether either endpoint of this connection is `point`.
    pub fn touches(&self, point: &PointId) -> bool {
        self.source_point == *point || self.target_point == *point
    }

    pub fn involves(&self, component: ToolId) -> bool {
        self.source_component == component || self.target_component == component
    }
}
