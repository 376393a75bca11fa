//! lab-graph: connection graph layer for labbench.
//!
//! Provides:
//! - Workspace data structures (PlacedComponent, ConnectionPoint, Connection)
//! - The fixed per-kind connection point table
//! - `ConnectionGraph`, which keeps points in step with component positions
//!   and enforces connection legality
//!
//! # Example
//!
//! ```
//! use lab_core::{Position, ToolId, ToolKind};
//! use lab_graph::{ConnectOutcome, ConnectionGraph, PlacedComponent, PointId};
//!
//! let mut graph = ConnectionGraph::new();
//! let battery = PlacedComponent::new(ToolId(1), ToolKind::Battery, Position::new(100.0, 100.0));
//! let bulb = PlacedComponent::new(ToolId(4), ToolKind::Bulb, Position::new(200.0, 100.0));
//! graph.sync(&[battery, bulb]);
//!
//! let pos = PointId::new("1-pos");
//! let bulb_in = PointId::new("4-in");
//! assert_eq!(graph.click_point(&pos).unwrap(), ConnectOutcome::Started);
//! assert!(matches!(graph.click_point(&bulb_in).unwrap(), ConnectOutcome::Created(_)));
//! assert_eq!(graph.connections().len(), 1);
//! ```

pub mod builder;
pub mod error;
pub mod layout;
pub mod model;
pub(crate) mod validate;

// Re-exports for ergonomics
pub use builder::{ConnectOutcome, ConnectionGraph};
pub use error::{GraphError, GraphResult};
pub use layout::{PointTemplate, default_points_for, point_templates};
pub use model::{
    Connection, ConnectionId, ConnectionPoint, PlacedComponent, PointId, PointKind, PointRole,
};
