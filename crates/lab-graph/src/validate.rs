//! Graph invariant checks.

use std::collections::{HashMap, HashSet};

use lab_core::ToolId;

use crate::builder::OwnerRecord;
use crate::error::{GraphError, GraphResult};
use crate::layout::point_templates;
use crate::model::{Connection, ConnectionPoint, PointId};

/// Validate points: unique ids, known owners, and per-owner sets matching the kind table.
pub(crate) fn validate_points(
    points: &[ConnectionPoint],
    owners: &HashMap<ToolId, OwnerRecord>,
) -> GraphResult<()> {
    let mut seen: HashSet<&PointId> = HashSet::new();
    for point in points {
        if !seen.insert(&point.id) {
            return Err(GraphError::DuplicatePoint {
                point: point.id.clone(),
            });
        }
        if !owners.contains_key(&point.owner) {
            return Err(GraphError::OrphanPoint {
                point: point.id.clone(),
                owner: point.owner,
            });
        }
    }

    // Each owner must carry exactly the roles and kinds its table entry lists
    for (owner, record) in owners {
        let templates = point_templates(&record.kind);
        let owned: Vec<&ConnectionPoint> = points.iter().filter(|p| p.owner == *owner).collect();
        if owned.len() != templates.len() {
            return Err(GraphError::PointSetMismatch { owner: *owner });
        }
        for template in templates {
            let matches = owned
                .iter()
                .any(|p| p.role == template.role && p.kind == template.kind);
            if !matches {
                return Err(GraphError::PointSetMismatch { owner: *owner });
            }
        }
    }

    Ok(())
}

/// Validate connections against the point list, including the `connected` flags.
pub(crate) fn validate_connections(
    points: &[ConnectionPoint],
    connections: &[Connection],
) -> GraphResult<()> {
    let by_id: HashMap<&PointId, &ConnectionPoint> = points.iter().map(|p| (&p.id, p)).collect();

    for conn in connections {
        if conn.source_component == conn.target_component {
            return Err(GraphError::SelfLoop {
                connection: conn.id,
            });
        }

        for (point_id, component) in [
            (&conn.source_point, conn.source_component),
            (&conn.target_point, conn.target_component),
        ] {
            let point = by_id
                .get(point_id)
                .ok_or_else(|| GraphError::DanglingEndpoint {
                    connection: conn.id,
                    point: point_id.clone(),
                })?;
            if point.owner != component {
                return Err(GraphError::EndpointOwnerMismatch {
                    connection: conn.id,
                    point: point_id.clone(),
                    expected: component,
                    actual: point.owner,
                });
            }
        }
    }

    for point in points {
        let expected = connections.iter().any(|c| c.touches(&point.id));
        if point.connected != expected {
            return Err(GraphError::StaleConnectedFlag {
                point: point.id.clone(),
                expected,
            });
        }
    }

    Ok(())
}
