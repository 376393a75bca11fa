//! Incremental connection graph.

use std::collections::{HashMap, HashSet};

use lab_core::{Position, ToolId, ToolKind};
use tracing::debug;

use crate::error::{GraphError, GraphResult};
use crate::layout::default_points_for;
use crate::model::{Connection, ConnectionId, ConnectionPoint, PlacedComponent, PointId};
use crate::validate;

/// Result of clicking a connection point in connect mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConnectOutcome {
    /// No point was active; the clicked point is now active.
    Started,
    /// The active point was clicked again; selection cleared.
    Cancelled,
    /// Both points belong to the same component. The active point stays selected.
    RejectedSelf,
    /// The point kinds can't be wired together.
    RejectedIncompatible,
    /// The clicked point already has a connection and its owner is not a wire.
    RejectedOccupied,
    /// A new connection was recorded.
    Created(ConnectionId),
}

/// What the graph remembers about a placed component between syncs.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct OwnerRecord {
    pub(crate) kind: ToolKind,
    /// Owner position at the last sync; point moves are measured from here.
    pub(crate) anchor: Position,
}

/// Connection points and connections of one workspace.
///
/// Call [`ConnectionGraph::sync`] whenever the set of placed components or
/// their positions change. Connections are only created through
/// [`ConnectionGraph::click_point`], which applies the compatibility rules.
#[derive(Debug, Clone, Default)]
pub struct ConnectionGraph {
    points: Vec<ConnectionPoint>,
    connections: Vec<Connection>,
    owners: HashMap<ToolId, OwnerRecord>,
    active: Option<PointId>,
}

impl ConnectionGraph {
    /// Create a new empty graph.
    pub fn new() -> Self {
        Self::default()
    }

    /// Bring points in line with the placed components.
    ///
    /// - Components seen for the first time get their default points.
    /// - Known components translate their unconnected points by the distance
    ///   the owner moved since the last sync. Points that take part in a
    ///   connection keep their absolute position so wires don't jump.
    /// - Points and connections of components no longer placed are dropped.
    ///
    /// Calling it twice with the same input leaves the graph unchanged.
    pub fn sync(&mut self, placed: &[PlacedComponent]) {
        let placed_ids: HashSet<ToolId> = placed.iter().map(|c| c.id).collect();

        let removed: Vec<ToolId> = self
            .owners
            .keys()
            .filter(|id| !placed_ids.contains(*id))
            .copied()
            .collect();
        if !removed.is_empty() {
            debug!(?removed, "dropping points of removed components");
            self.owners.retain(|id, _| placed_ids.contains(id));
            self.connections.retain(|c| {
                placed_ids.contains(&c.source_component) && placed_ids.contains(&c.target_component)
            });
        }

        let wired: HashSet<PointId> = self
            .connections
            .iter()
            .flat_map(|c| [c.source_point.clone(), c.target_point.clone()])
            .collect();

        let mut by_owner: HashMap<ToolId, Vec<ConnectionPoint>> = HashMap::new();
        for point in std::mem::take(&mut self.points) {
            if placed_ids.contains(&point.owner) {
                by_owner.entry(point.owner).or_default().push(point);
            }
        }

        let mut next = Vec::with_capacity(placed.len() * 2);
        for component in placed {
            let existing = by_owner.remove(&component.id).unwrap_or_default();
            if existing.is_empty() {
                next.extend(default_points_for(
                    &component.kind,
                    component.id,
                    component.position,
                ));
            } else {
                let anchor = self
                    .owners
                    .get(&component.id)
                    .map_or(component.position, |o| o.anchor);
                let delta = component.position - anchor;
                for mut point in existing {
                    if !wired.contains(&point.id) {
                        point.position += delta;
                    }
                    next.push(point);
                }
            }
            self.owners.insert(
                component.id,
                OwnerRecord {
                    kind: component.kind.clone(),
                    anchor: component.position,
                },
            );
        }

        for point in &mut next {
            point.connected = wired.contains(&point.id);
        }
        self.points = next;

        if self
            .active
            .as_ref()
            .is_some_and(|active| self.point(active).is_none())
        {
            self.active = None;
        }
    }

    /// Handle a click on `clicked` while in connect mode.
    ///
    /// The first click selects a point; the second click on another
    /// component's point attempts the connection. See [`ConnectOutcome`] for
    /// the possible results.
    pub fn click_point(&mut self, clicked: &PointId) -> GraphResult<ConnectOutcome> {
        let target = self
            .point(clicked)
            .cloned()
            .ok_or_else(|| GraphError::UnknownPoint {
                point: clicked.clone(),
            })?;

        let Some(active_id) = self.active.clone() else {
            self.active = Some(clicked.clone());
            return Ok(ConnectOutcome::Started);
        };

        if active_id == *clicked {
            self.active = None;
            return Ok(ConnectOutcome::Cancelled);
        }

        let Some(source) = self.point(&active_id).cloned() else {
            // The active point's owner was removed since it was selected
            self.active = Some(clicked.clone());
            return Ok(ConnectOutcome::Started);
        };

        if source.owner == target.owner {
            debug!(source = %source.id, target = %target.id, "rejected: same component");
            return Ok(ConnectOutcome::RejectedSelf);
        }

        if !source.kind.can_connect(target.kind) {
            debug!(source = %source.id, target = %target.id, "rejected: incompatible kinds");
            self.active = None;
            return Ok(ConnectOutcome::RejectedIncompatible);
        }

        let target_is_wire = self
            .owner_kind(target.owner)
            .is_some_and(|kind| kind.is_wire());
        if self.is_wired(&target.id) && !target_is_wire {
            debug!(target = %target.id, "rejected: point already connected");
            self.active = None;
            return Ok(ConnectOutcome::RejectedOccupied);
        }

        let connection = Connection::between(&source, &target);
        let id = connection.id;
        self.connections.push(connection);
        for point in &mut self.points {
            if point.id == source.id || point.id == target.id {
                point.connected = true;
            }
        }
        self.active = None;
        debug!(%id, source = %source.id, target = %target.id, "connection created");
        Ok(ConnectOutcome::Created(id))
    }

    /// Remove a connection. Endpoints still used by another connection stay connected.
    pub fn delete_connection(&mut self, id: &ConnectionId) -> Option<Connection> {
        let idx = self.connections.iter().position(|c| c.id == *id)?;
        let removed = self.connections.remove(idx);

        for point in &mut self.points {
            if removed.touches(&point.id) {
                point.connected = self.connections.iter().any(|c| c.touches(&point.id));
            }
        }
        debug!(%id, "connection deleted");
        Some(removed)
    }

    /// Drop every point, connection and selection.
    pub fn clear(&mut self) {
        self.points.clear();
        self.connections.clear();
        self.owners.clear();
        self.active = None;
    }

    /// Forget the active point without creating a connection.
    pub fn cancel_selection(&mut self) {
        self.active = None;
    }

    /// Check the graph invariants.
    pub fn validate(&self) -> GraphResult<()> {
        validate::validate_points(&self.points, &self.owners)?;
        validate::validate_connections(&self.points, &self.connections)
    }

    /// Return all points, grouped by owner in placement order.
    pub fn points(&self) -> &[ConnectionPoint] {
        &self.points
    }

    /// Return all connections in creation order.
    pub fn connections(&self) -> &[Connection] {
        &self.connections
    }

    pub fn point(&self, id: &PointId) -> Option<&ConnectionPoint> {
        self.points.iter().find(|p| p.id == *id)
    }

    /// Iterate over the points owned by a component.
    pub fn points_of(&self, owner: ToolId) -> impl Iterator<Item = &ConnectionPoint> + '_ {
        self.points.iter().filter(move |p| p.owner == owner)
    }

    /// Iterate over the connections touching a point.
    pub fn connections_of_point<'a>(
        &'a self,
        point: &'a PointId,
    ) -> impl Iterator<Item = &'a Connection> + 'a {
        self.connections.iter().filter(move |c| c.touches(point))
    }

    pub fn connection(&self, id: &ConnectionId) -> Option<&Connection> {
        self.connections.iter().find(|c| c.id == *id)
    }

    /// The point selected by the last click, if any.
    pub fn active_point(&self) -> Option<&PointId> {
        self.active.as_ref()
    }

    /// Kind of a component as recorded at the last sync.
    pub fn owner_kind(&self, owner: ToolId) -> Option<&ToolKind> {
        self.owners.get(&owner).map(|o| &o.kind)
    }

    fn is_wired(&self, point: &PointId) -> bool {
        self.connections.iter().any(|c| c.touches(point))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use lab_core::Offset;

    fn comp(id: u32, kind: ToolKind, x: f64, y: f64) -> PlacedComponent {
        PlacedComponent::new(ToolId(id), kind, Position::new(x, y))
    }

    fn pid(s: &str) -> PointId {
        PointId::new(s)
    }

    #[test]
    fn sync_generates_defaults_once() {
        let mut graph = ConnectionGraph::new();
        let placed = [comp(1, ToolKind::Battery, 100.0, 100.0)];
        graph.sync(&placed);
        assert_eq!(graph.points().len(), 2);
        graph.sync(&placed);
        assert_eq!(graph.points().len(), 2);
        assert_eq!(graph.owner_kind(ToolId(1)), Some(&ToolKind::Battery));
    }

    #[test]
    fn sync_translates_unconnected_points_by_delta() {
        let mut graph = ConnectionGraph::new();
        let mut placed = vec![comp(2, ToolKind::Resistor, 100.0, 100.0)];
        graph.sync(&placed);

        placed[0].position += Offset::new(30.0, -10.0);
        graph.sync(&placed);

        let input = graph.point(&pid("2-in")).unwrap();
        assert_eq!(input.position, Position::new(105.0, 90.0));
        let output = graph.point(&pid("2-out")).unwrap();
        assert_eq!(output.position, Position::new(155.0, 90.0));
    }

    #[test]
    fn removing_a_component_drops_its_connections() {
        let mut graph = ConnectionGraph::new();
        let placed = vec![
            comp(1, ToolKind::Battery, 100.0, 100.0),
            comp(4, ToolKind::Bulb, 200.0, 100.0),
        ];
        graph.sync(&placed);
        graph.click_point(&pid("1-pos")).unwrap();
        graph.click_point(&pid("4-in")).unwrap();
        assert!(graph.point(&pid("1-pos")).unwrap().connected);

        graph.sync(&placed[..1]);
        assert!(graph.connections().is_empty());
        assert!(graph.point(&pid("4-in")).is_none());
        assert!(!graph.point(&pid("1-pos")).unwrap().connected);
        assert!(graph.validate().is_ok());
    }

    #[test]
    fn same_component_keeps_selection() {
        let mut graph = ConnectionGraph::new();
        graph.sync(&[comp(1, ToolKind::Battery, 0.0, 0.0)]);
        graph.click_point(&pid("1-pos")).unwrap();
        let outcome = graph.click_point(&pid("1-neg")).unwrap();
        assert_eq!(outcome, ConnectOutcome::RejectedSelf);
        assert_eq!(graph.active_point(), Some(&pid("1-pos")));
    }

    #[test]
    fn clicking_active_point_cancels() {
        let mut graph = ConnectionGraph::new();
        graph.sync(&[comp(1, ToolKind::Battery, 0.0, 0.0)]);
        graph.click_point(&pid("1-pos")).unwrap();
        let outcome = graph.click_point(&pid("1-pos")).unwrap();
        assert_eq!(outcome, ConnectOutcome::Cancelled);
        assert!(graph.active_point().is_none());
        assert!(graph.connections().is_empty());
    }

    #[test]
    fn unknown_point_is_an_error() {
        let mut graph = ConnectionGraph::new();
        let err = graph.click_point(&pid("99-pos")).unwrap_err();
        assert!(matches!(err, GraphError::UnknownPoint { .. }));
    }

    #[test]
    fn stale_active_point_restarts_selection() {
        let mut graph = ConnectionGraph::new();
        let placed = vec![
            comp(1, ToolKind::Battery, 0.0, 0.0),
            comp(2, ToolKind::Resistor, 100.0, 0.0),
        ];
        graph.sync(&placed);
        graph.click_point(&pid("1-pos")).unwrap();
        graph.sync(&placed[1..]);
        assert!(graph.active_point().is_none());
        let outcome = graph.click_point(&pid("2-in")).unwrap();
        assert_eq!(outcome, ConnectOutcome::Started);
    }
}
