//! Scripted workspace sessions.
//!
//! A scenario opens one experiment, replays placement and wiring steps, then
//! runs the simulation and reports either the delivered record or the reason
//! the run was refused.

use std::path::Path;
use std::time::Instant;

use lab_catalog::Catalog;
use lab_core::{ExperimentId, Rect, ToolId};
use lab_graph::PointId;
use lab_sim::{RunError, RunRecord, SimulationResult};
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::config::LabConfig;
use crate::error::{AppError, AppResult, WorkspaceError, WorkspaceResult, read_yaml};
use crate::presentation::Notice;
use crate::workspace::Workspace;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Scenario {
    pub experiment_id: ExperimentId,
    /// Overrides the configured canvas size.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub canvas: Option<CanvasSize>,
    #[serde(default)]
    pub steps: Vec<Step>,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CanvasSize {
    pub width: f64,
    pub height: f64,
}

/// One edit, in canvas coordinates.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "action", rename_all = "snake_case")]
pub enum Step {
    Place { tool: ToolId, x: f64, y: f64 },
    Move { tool: ToolId, x: f64, y: f64 },
    Remove { tool: ToolId },
    Connect { from: PointId, to: PointId },
    DisconnectAll,
    Clear,
}

pub fn load_scenario(path: &Path) -> AppResult<Scenario> {
    read_yaml(path)
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum RunReport {
    Completed { record: RunRecord },
    Rejected { title: String, message: String },
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScenarioReport {
    pub experiment_id: ExperimentId,
    pub components: usize,
    pub connections: usize,
    /// Messages raised while wiring, in order.
    pub notices: Vec<Notice>,
    pub run: RunReport,
}

impl ScenarioReport {
    pub fn result(&self) -> Option<&SimulationResult> {
        match &self.run {
            RunReport::Completed { record } => Some(&record.result),
            RunReport::Rejected { .. } => None,
        }
    }
}

/// Replay `scenario` against `catalog` and run it to completion.
///
/// Time is virtual: the pending result is collected at its deadline.
pub fn run_scenario<C: Catalog>(
    catalog: &C,
    scenario: &Scenario,
    config: &LabConfig,
) -> AppResult<ScenarioReport> {
    let id = scenario.experiment_id;
    let experiment = catalog.experiment(id)?;
    let tools = catalog.tools_for(id)?;
    let mut ws = Workspace::new(experiment, tools, config.workspace, config.run);
    if let Some(canvas) = scenario.canvas {
        let origin = ws.bounds().min;
        ws.set_bounds(Rect::from_origin_size(origin, canvas.width, canvas.height));
    }

    let mut notices = Vec::new();
    for (index, step) in scenario.steps.iter().enumerate() {
        debug!(step = index + 1, ?step, "scenario step");
        apply_step(&mut ws, step, &mut notices).map_err(|source| AppError::Step {
            step: index + 1,
            source,
        })?;
    }

    let run = match ws.run(Instant::now()) {
        Ok(deadline) => {
            let mut log = |result: &SimulationResult| {
                debug!(measurements = result.measurements.len(), "result delivered");
            };
            let record = ws.poll(deadline, &mut log).ok_or(WorkspaceError::Busy)?;
            RunReport::Completed { record }
        }
        Err(WorkspaceError::Run(RunError::Precondition(err))) => {
            let notice = Notice::precondition(&err);
            RunReport::Rejected {
                title: notice.title,
                message: notice.message,
            }
        }
        Err(err) => return Err(err.into()),
    };
    info!(experiment = %id, steps = scenario.steps.len(), "scenario finished");

    Ok(ScenarioReport {
        experiment_id: id,
        components: ws.components().len(),
        connections: ws.graph().connections().len(),
        notices,
        run,
    })
}

fn apply_step(ws: &mut Workspace, step: &Step, notices: &mut Vec<Notice>) -> WorkspaceResult<()> {
    match step {
        Step::Place { tool, x, y } => {
            ws.place(*tool, *x, *y)?;
        }
        Step::Move { tool, x, y } => ws.move_component(*tool, *x, *y)?,
        Step::Remove { tool } => {
            ws.remove(*tool)?;
        }
        Step::Connect { from, to } => {
            enter_connect_mode(ws)?;
            // Each step is a fresh pair of clicks
            ws.cancel_selection();
            for point in [from, to] {
                if let Some(outcome) = ws.click_point(point)?
                    && let Some(notice) = Notice::connect(outcome)
                {
                    notices.push(notice);
                }
            }
        }
        Step::DisconnectAll => {
            enter_connect_mode(ws)?;
            let ids: Vec<_> = ws.graph().connections().iter().map(|c| c.id).collect();
            for id in &ids {
                if ws.delete_connection(id).is_some() {
                    notices.push(Notice::disconnected());
                }
            }
        }
        Step::Clear => ws.clear()?,
    }
    Ok(())
}

fn enter_connect_mode(ws: &mut Workspace) -> WorkspaceResult<()> {
    if !ws.is_connect_mode() {
        ws.toggle_connect_mode()?;
    }
    Ok(())
}
