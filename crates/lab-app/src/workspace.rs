//! One experiment's editable canvas.
//!
//! The workspace owns the placed components, the connection graph and the
//! run orchestrator. Every edit that changes placement re-syncs the graph.

use std::time::Instant;

use lab_catalog::{ExperimentDescriptor, Tool};
use lab_core::{Position, Rect, ToolId};
use lab_graph::{
    ConnectOutcome, Connection, ConnectionGraph, ConnectionId, PlacedComponent, PointId,
};
use lab_sim::{Orchestrator, ResultSink, RunInput, RunOptions, RunRecord, RunState};
use tracing::{debug, info};

use crate::config::WorkspaceOptions;
use crate::error::{WorkspaceError, WorkspaceResult};

#[derive(Debug)]
pub struct Workspace {
    experiment: ExperimentDescriptor,
    tools: Vec<Tool>,
    options: WorkspaceOptions,
    bounds: Rect,
    components: Vec<PlacedComponent>,
    graph: ConnectionGraph,
    connect_mode: bool,
    orchestrator: Orchestrator,
}

impl Workspace {
    pub fn new(
        experiment: ExperimentDescriptor,
        tools: Vec<Tool>,
        options: WorkspaceOptions,
        run_options: RunOptions,
    ) -> Self {
        Self {
            experiment,
            tools,
            bounds: options.bounds(),
            options,
            components: Vec::new(),
            graph: ConnectionGraph::new(),
            connect_mode: false,
            orchestrator: Orchestrator::new(run_options),
        }
    }

    pub fn experiment(&self) -> &ExperimentDescriptor {
        &self.experiment
    }

    /// Tools offered by this experiment, in catalog order.
    pub fn tools(&self) -> &[Tool] {
        &self.tools
    }

    pub fn options(&self) -> &WorkspaceOptions {
        &self.options
    }

    pub fn components(&self) -> &[PlacedComponent] {
        &self.components
    }

    pub fn component(&self, id: ToolId) -> Option<&PlacedComponent> {
        self.components.iter().find(|c| c.id == id)
    }

    pub fn graph(&self) -> &ConnectionGraph {
        &self.graph
    }

    pub fn is_connect_mode(&self) -> bool {
        self.connect_mode
    }

    pub fn run_state(&self) -> RunState {
        self.orchestrator.state()
    }

    pub fn is_running(&self) -> bool {
        self.orchestrator.is_running()
    }

    pub fn orchestrator(&self) -> &Orchestrator {
        &self.orchestrator
    }

    /// Client-space bounding box of the canvas.
    pub fn bounds(&self) -> Rect {
        self.bounds
    }

    /// Update the bounding box after a resize or scroll.
    pub fn set_bounds(&mut self, bounds: Rect) {
        self.bounds = bounds;
    }

    /// The canvas in its own coordinates.
    pub fn canvas(&self) -> Rect {
        Rect::from_origin_size(Position::ORIGIN, self.bounds.width(), self.bounds.height())
    }

    /// Place a tool at canvas coordinates. Placing an already placed tool is a no-op.
    pub fn place(
        &mut self,
        tool_id: ToolId,
        x: f64,
        y: f64,
    ) -> WorkspaceResult<Option<&PlacedComponent>> {
        let tool = self
            .tools
            .iter()
            .find(|t| t.id == tool_id)
            .ok_or(WorkspaceError::UnknownTool { tool: tool_id })?;
        if self.component(tool_id).is_some() {
            debug!(tool = %tool_id, "tool already placed");
            return Ok(None);
        }

        let component = PlacedComponent::new(tool_id, tool.kind.clone(), Position::new(x, y));
        info!(tool = %tool_id, kind = %component.kind, x, y, "component placed");
        self.components.push(component);
        self.graph.sync(&self.components);
        Ok(self.components.last())
    }

    /// Place a tool dropped at a client-space position. Drops outside the canvas are ignored.
    pub fn drop_tool(
        &mut self,
        tool_id: ToolId,
        client: Position,
    ) -> WorkspaceResult<Option<&PlacedComponent>> {
        if !self.bounds.contains(client) {
            debug!(tool = %tool_id, x = client.x, y = client.y, "drop outside canvas");
            return Ok(None);
        }
        let local = self.bounds.to_local(client);
        self.place(tool_id, local.x, local.y)
    }

    pub fn move_component(&mut self, id: ToolId, x: f64, y: f64) -> WorkspaceResult<()> {
        let component = self
            .components
            .iter_mut()
            .find(|c| c.id == id)
            .ok_or(WorkspaceError::NotPlaced { component: id })?;
        component.position = Position::new(x, y);
        self.graph.sync(&self.components);
        Ok(())
    }

    /// Take a component off the canvas together with its points and connections.
    pub fn remove(&mut self, id: ToolId) -> WorkspaceResult<PlacedComponent> {
        let index = self
            .components
            .iter()
            .position(|c| c.id == id)
            .ok_or(WorkspaceError::NotPlaced { component: id })?;
        let removed = self.components.remove(index);
        self.graph.sync(&self.components);
        info!(tool = %id, "component removed");
        Ok(removed)
    }

    /// Empty the canvas, leave connect mode and stop the engine.
    pub fn clear(&mut self) -> WorkspaceResult<()> {
        if self.is_running() {
            return Err(WorkspaceError::Busy);
        }
        self.components.clear();
        self.graph.clear();
        self.connect_mode = false;
        self.orchestrator.teardown();
        info!(experiment = %self.experiment.id, "workspace cleared");
        Ok(())
    }

    /// Flip connect mode. Returns the new mode.
    pub fn toggle_connect_mode(&mut self) -> WorkspaceResult<bool> {
        if self.is_running() {
            return Err(WorkspaceError::Busy);
        }
        self.connect_mode = !self.connect_mode;
        self.graph.cancel_selection();
        debug!(enabled = self.connect_mode, "connect mode toggled");
        Ok(self.connect_mode)
    }

    /// Drop a half-made connection, keeping connect mode as it is.
    pub fn cancel_selection(&mut self) {
        self.graph.cancel_selection();
    }

    /// Route a point click to the graph. `None` outside connect mode.
    pub fn click_point(&mut self, point: &PointId) -> WorkspaceResult<Option<ConnectOutcome>> {
        if !self.connect_mode {
            return Ok(None);
        }
        let outcome = self.graph.click_point(point)?;
        Ok(Some(outcome))
    }

    /// Delete a connection. `None` outside connect mode or for an unknown id.
    pub fn delete_connection(&mut self, id: &ConnectionId) -> Option<Connection> {
        if !self.connect_mode {
            return None;
        }
        self.graph.delete_connection(id)
    }

    /// Validate and start a run. Returns when the result will be due.
    pub fn run(&mut self, now: Instant) -> WorkspaceResult<Instant> {
        let canvas = self.canvas();
        let input = RunInput {
            experiment: &self.experiment,
            components: &self.components,
            graph: &self.graph,
            canvas,
        };
        Ok(self.orchestrator.begin_run(&input, now)?)
    }

    /// Deliver a due result to `sink`.
    pub fn poll(&mut self, now: Instant, sink: &mut dyn ResultSink) -> Option<RunRecord> {
        self.orchestrator.poll(now, sink)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use lab_catalog::{Catalog, MemCatalog};
    use lab_core::{ExperimentId, ToolKind};

    fn workspace(experiment: u32) -> Workspace {
        let catalog = MemCatalog::demo().unwrap();
        let id = ExperimentId(experiment);
        Workspace::new(
            catalog.experiment(id).unwrap(),
            catalog.tools_for(id).unwrap(),
            WorkspaceOptions::default(),
            RunOptions::default(),
        )
    }

    #[test]
    fn place_is_idempotent_per_tool() {
        let mut ws = workspace(1);
        let placed = ws.place(ToolId(1), 100.0, 100.0).unwrap().cloned();
        assert_eq!(placed.unwrap().kind, ToolKind::Battery);
        assert!(ws.place(ToolId(1), 300.0, 300.0).unwrap().is_none());
        assert_eq!(ws.components().len(), 1);
        assert_eq!(ws.components()[0].position, Position::new(100.0, 100.0));
        assert_eq!(ws.graph().points().len(), 2);
    }

    #[test]
    fn tool_from_another_experiment_is_unknown() {
        let mut ws = workspace(1);
        assert!(matches!(
            ws.place(ToolId(9), 0.0, 0.0),
            Err(WorkspaceError::UnknownTool { tool: ToolId(9) })
        ));
    }

    #[test]
    fn moving_unplaced_component_fails() {
        let mut ws = workspace(1);
        assert!(matches!(
            ws.move_component(ToolId(2), 0.0, 0.0),
            Err(WorkspaceError::NotPlaced { .. })
        ));
    }

    #[test]
    fn drop_is_relative_to_bounds() {
        let mut ws = workspace(2);
        ws.set_bounds(Rect::from_origin_size(Position::new(200.0, 50.0), 600.0, 300.0));

        let placed = ws
            .drop_tool(ToolId(9), Position::new(260.0, 150.0))
            .unwrap()
            .cloned()
            .unwrap();
        assert_eq!(placed.position, Position::new(60.0, 100.0));

        assert!(
            ws.drop_tool(ToolId(10), Position::new(100.0, 150.0))
                .unwrap()
                .is_none()
        );
        assert_eq!(ws.components().len(), 1);
    }

    #[test]
    fn clicks_ignored_outside_connect_mode() {
        let mut ws = workspace(1);
        ws.place(ToolId(1), 100.0, 100.0).unwrap();
        ws.place(ToolId(2), 200.0, 100.0).unwrap();
        assert_eq!(ws.click_point(&PointId::new("1-pos")).unwrap(), None);
        assert!(ws.graph().active_point().is_none());

        assert!(ws.toggle_connect_mode().unwrap());
        assert_eq!(
            ws.click_point(&PointId::new("1-pos")).unwrap(),
            Some(ConnectOutcome::Started)
        );
        // Toggling drops the half-made connection
        assert!(!ws.toggle_connect_mode().unwrap());
        assert!(ws.graph().active_point().is_none());
    }

    #[test]
    fn remove_drops_connections() {
        let mut ws = workspace(1);
        ws.place(ToolId(1), 100.0, 100.0).unwrap();
        ws.place(ToolId(2), 200.0, 100.0).unwrap();
        ws.toggle_connect_mode().unwrap();
        ws.click_point(&PointId::new("1-pos")).unwrap();
        ws.click_point(&PointId::new("2-in")).unwrap();
        assert_eq!(ws.graph().connections().len(), 1);

        let removed = ws.remove(ToolId(2)).unwrap();
        assert_eq!(removed.kind, ToolKind::Resistor);
        assert!(ws.graph().connections().is_empty());
        assert!(!ws.graph().point(&PointId::new("1-pos")).unwrap().connected);
    }

    #[test]
    fn clear_resets_everything() {
        let mut ws = workspace(1);
        ws.place(ToolId(1), 100.0, 100.0).unwrap();
        ws.toggle_connect_mode().unwrap();
        ws.clear().unwrap();
        assert!(ws.components().is_empty());
        assert!(ws.graph().points().is_empty());
        assert!(!ws.is_connect_mode());
    }
}
