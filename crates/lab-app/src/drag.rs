//! Pointer handling for the canvas.
//!
//! Positions are canvas-local. Connection points take precedence over
//! components so terminals stay clickable on top of their owner.

use lab_core::{Offset, Position, Rect, ToolId};
use lab_graph::{ConnectOutcome, PointId};

use crate::error::WorkspaceResult;
use crate::workspace::Workspace;

#[derive(Debug, Clone, PartialEq)]
pub enum PointerTarget {
    Point(PointId),
    Component(ToolId),
    Empty,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PointerOutcome {
    Connect(ConnectOutcome),
    DragStarted(ToolId),
    Ignored,
}

/// Hit-test `pos` against the workspace.
pub fn hit_test(workspace: &Workspace, pos: Position) -> PointerTarget {
    let options = workspace.options();

    let nearest_point = workspace
        .graph()
        .points()
        .iter()
        .map(|p| (p, p.position.distance_to(pos)))
        .filter(|(_, d)| *d <= options.point_hit_radius)
        .min_by(|a, b| a.1.total_cmp(&b.1));
    if let Some((point, _)) = nearest_point {
        return PointerTarget::Point(point.id.clone());
    }

    // Later placements are drawn on top
    let size = options.component_hit_size;
    workspace
        .components()
        .iter()
        .rev()
        .find(|c| Rect::from_center_size(c.position, size, size).contains(pos))
        .map_or(PointerTarget::Empty, |c| PointerTarget::Component(c.id))
}

#[derive(Debug, Clone, Copy, PartialEq)]
struct Grab {
    component: ToolId,
    /// Component position minus pointer position at grab time.
    offset: Offset,
}

#[derive(Debug, Default)]
pub struct DragController {
    grab: Option<Grab>,
}

impl DragController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn dragging(&self) -> Option<ToolId> {
        self.grab.map(|g| g.component)
    }

    /// In connect mode a point hit becomes a click; otherwise a component hit starts a drag.
    pub fn pointer_down(
        &mut self,
        workspace: &mut Workspace,
        pos: Position,
    ) -> WorkspaceResult<PointerOutcome> {
        self.grab = None;
        let target = hit_test(workspace, pos);

        if workspace.is_connect_mode() {
            if let PointerTarget::Point(point) = target
                && let Some(outcome) = workspace.click_point(&point)?
            {
                return Ok(PointerOutcome::Connect(outcome));
            }
            return Ok(PointerOutcome::Ignored);
        }

        // Points sit inside their owner's hit box, so fall back to the owner
        let component = match target {
            PointerTarget::Component(id) => Some(id),
            PointerTarget::Point(point) => workspace.graph().point(&point).map(|p| p.owner),
            PointerTarget::Empty => None,
        };
        let Some(placed) = component.and_then(|id| workspace.component(id)) else {
            return Ok(PointerOutcome::Ignored);
        };

        self.grab = Some(Grab {
            component: placed.id,
            offset: placed.position - pos,
        });
        Ok(PointerOutcome::DragStarted(placed.id))
    }

    /// Move the grabbed component so it keeps its grab offset. Returns whether anything moved.
    pub fn pointer_move(
        &mut self,
        workspace: &mut Workspace,
        pos: Position,
    ) -> WorkspaceResult<bool> {
        let Some(grab) = self.grab else {
            return Ok(false);
        };
        let target = pos + grab.offset;
        workspace.move_component(grab.component, target.x, target.y)?;
        Ok(true)
    }

    /// End the drag, returning the component that was being dragged.
    pub fn pointer_up(&mut self) -> Option<ToolId> {
        self.grab.take().map(|g| g.component)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::WorkspaceOptions;
    use lab_catalog::{Catalog, MemCatalog};
    use lab_core::ExperimentId;
    use lab_sim::RunOptions;

    fn circuit() -> Workspace {
        let catalog = MemCatalog::demo().unwrap();
        let id = ExperimentId(1);
        let mut ws = Workspace::new(
            catalog.experiment(id).unwrap(),
            catalog.tools_for(id).unwrap(),
            WorkspaceOptions::default(),
            RunOptions::default(),
        );
        ws.place(ToolId(1), 100.0, 100.0).unwrap();
        ws.place(ToolId(2), 300.0, 100.0).unwrap();
        ws
    }

    #[test]
    fn point_wins_over_component() {
        let ws = circuit();
        assert_eq!(
            hit_test(&ws, Position::new(122.0, 103.0)),
            PointerTarget::Point(PointId::new("1-pos"))
        );
        assert_eq!(
            hit_test(&ws, Position::new(100.0, 115.0)),
            PointerTarget::Component(ToolId(1))
        );
        assert_eq!(hit_test(&ws, Position::new(200.0, 100.0)), PointerTarget::Empty);
    }

    #[test]
    fn drag_keeps_grab_offset() {
        let mut ws = circuit();
        let mut drag = DragController::new();
        let outcome = drag
            .pointer_down(&mut ws, Position::new(110.0, 95.0))
            .unwrap();
        assert_eq!(outcome, PointerOutcome::DragStarted(ToolId(1)));

        assert!(drag.pointer_move(&mut ws, Position::new(160.0, 145.0)).unwrap());
        assert_eq!(
            ws.component(ToolId(1)).unwrap().position,
            Position::new(150.0, 150.0)
        );
        assert_eq!(
            ws.graph().point(&PointId::new("1-pos")).unwrap().position,
            Position::new(175.0, 150.0)
        );

        assert_eq!(drag.pointer_up(), Some(ToolId(1)));
        assert!(!drag.pointer_move(&mut ws, Position::new(0.0, 0.0)).unwrap());
    }

    #[test]
    fn connect_mode_routes_point_clicks() {
        let mut ws = circuit();
        ws.toggle_connect_mode().unwrap();
        let mut drag = DragController::new();

        assert_eq!(
            drag.pointer_down(&mut ws, Position::new(125.0, 100.0)).unwrap(),
            PointerOutcome::Connect(ConnectOutcome::Started)
        );
        let outcome = drag
            .pointer_down(&mut ws, Position::new(275.0, 100.0))
            .unwrap();
        assert!(matches!(
            outcome,
            PointerOutcome::Connect(ConnectOutcome::Created(_))
        ));

        // No dragging while connecting
        assert_eq!(
            drag.pointer_down(&mut ws, Position::new(100.0, 110.0)).unwrap(),
            PointerOutcome::Ignored
        );
        assert!(drag.dragging().is_none());
    }
}
