//! Turning results and outcomes into something to show.

use std::fmt::Write as _;

use lab_graph::ConnectOutcome;
use lab_sim::{GraphPoint, PreconditionError, RunError, SimulationResult};
use serde::Serialize;

use crate::error::WorkspaceError;

/// Side of the square plot viewbox.
pub const VIEWBOX: f64 = 100.0;
/// Plot area inset from the left and bottom edges.
pub const PLOT_MARGIN: f64 = 10.0;
pub const PLOT_SPAN: f64 = 80.0;

pub const EMPTY_RESULTS: &str = "Run the simulation to see results";

/// A result's curve mapped into the viewbox, y pointing down.
#[derive(Debug, Clone, PartialEq)]
pub struct PlotView {
    pub title: String,
    pub x_label: &'static str,
    pub y_label: &'static str,
    /// Empty when there are fewer than two samples.
    pub points: Vec<GraphPoint>,
}

impl PlotView {
    /// `None` when the result carries no graph at all.
    pub fn from_result(result: &SimulationResult) -> Option<Self> {
        if result.graph_data.is_empty() {
            return None;
        }
        let title = result.graph_title.as_deref();
        let (x_label, y_label) = axis_labels(title);
        let points = if result.has_plot() {
            scale_points(&result.graph_data)
        } else {
            Vec::new()
        };
        Some(Self {
            title: title.unwrap_or("Graph").to_string(),
            x_label,
            y_label,
            points,
        })
    }

    /// SVG `points` attribute, e.g. `"10,90 90,10"`.
    pub fn polyline(&self) -> String {
        self.points
            .iter()
            .map(|p| format!("{},{}", p.x, p.y))
            .collect::<Vec<_>>()
            .join(" ")
    }
}

/// Axis captions guessed from the graph title.
pub fn axis_labels(title: Option<&str>) -> (&'static str, &'static str) {
    let title = title.unwrap_or_default();
    let x = if title.contains("Time") {
        "Time (s)"
    } else if title.contains("Current") {
        "Current (A)"
    } else if title.contains("Trajectory") {
        "Distance (m)"
    } else {
        "X"
    };
    let y = if title.contains("Position") {
        "Height (m)"
    } else if title.contains("Voltage") {
        "Voltage (V)"
    } else if title.contains("Trajectory") {
        "Height (m)"
    } else {
        "Y"
    };
    (x, y)
}

/// Map samples so that `[0, max]` on each axis spans the plot area.
///
/// A non-positive maximum leaves that axis unscaled.
pub fn scale_points(data: &[GraphPoint]) -> Vec<GraphPoint> {
    let max_x = axis_max(data.iter().map(|p| p.x));
    let max_y = axis_max(data.iter().map(|p| p.y));
    data.iter()
        .map(|p| {
            GraphPoint::new(
                PLOT_MARGIN + p.x / max_x * PLOT_SPAN,
                VIEWBOX - PLOT_MARGIN - p.y / max_y * PLOT_SPAN,
            )
        })
        .collect()
}

fn axis_max(values: impl Iterator<Item = f64>) -> f64 {
    let max = values.fold(f64::NEG_INFINITY, f64::max);
    if max.is_finite() && max > 0.0 { max } else { 1.0 }
}

/// Plain-text results panel.
pub fn render_text(result: Option<&SimulationResult>) -> String {
    let Some(result) = result else {
        return EMPTY_RESULTS.to_string();
    };

    let mut out = String::from("Measurements\n");
    for m in &result.measurements {
        let _ = writeln!(out, "  {}: {} {}", m.label, m.value, m.unit);
    }
    if let Some(plot) = PlotView::from_result(result) {
        let _ = writeln!(out, "{}", plot.title);
        let _ = writeln!(out, "  x: {}  y: {}", plot.x_label, plot.y_label);
        for p in &result.graph_data {
            let _ = writeln!(out, "  ({}, {})", p.x, p.y);
        }
    }
    out
}

/// A toast-style message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Notice {
    pub title: String,
    pub message: String,
    pub destructive: bool,
}

impl Notice {
    fn info(title: &str, message: &str) -> Self {
        Self {
            title: title.to_string(),
            message: message.to_string(),
            destructive: false,
        }
    }

    fn error(title: &str, message: impl Into<String>) -> Self {
        Self {
            title: title.to_string(),
            message: message.into(),
            destructive: true,
        }
    }

    pub fn completed() -> Self {
        Self::info(
            "Simulation Complete",
            "Your experiment results are ready to view.",
        )
    }

    pub fn connect_mode(enabled: bool) -> Self {
        if enabled {
            Self::info(
                "Connection Mode Enabled",
                "Click on connection points to create connections between components.",
            )
        } else {
            Self::info(
                "Connection Mode Disabled",
                "You can now move components freely.",
            )
        }
    }

    /// `None` for a cancelled selection, which needs no message.
    pub fn connect(outcome: ConnectOutcome) -> Option<Self> {
        let notice = match outcome {
            ConnectOutcome::Started => Self::info(
                "Connection Started",
                "Now click on another component's connection point to complete the connection.",
            ),
            ConnectOutcome::Cancelled => return None,
            ConnectOutcome::RejectedSelf => Self::error(
                "Invalid Connection",
                "You cannot connect points on the same component.",
            ),
            ConnectOutcome::RejectedIncompatible => Self::error(
                "Incompatible Connection",
                "These connection points are not compatible with each other.",
            ),
            ConnectOutcome::RejectedOccupied => Self::error(
                "Point Already Connected",
                "This connection point already has a connection. Only wires can have multiple connections.",
            ),
            ConnectOutcome::Created(_) => Self::info(
                "Connection Created",
                "Components are now connected successfully.",
            ),
        };
        Some(notice)
    }

    pub fn disconnected() -> Self {
        Self::info("Connection Removed", "The connection has been deleted.")
    }

    pub fn precondition(err: &PreconditionError) -> Self {
        Self::error(err.title(), err.to_string())
    }

    pub fn workspace_error(err: &WorkspaceError) -> Self {
        match err {
            WorkspaceError::Run(RunError::Precondition(p)) => Self::precondition(p),
            WorkspaceError::Busy | WorkspaceError::Run(RunError::Busy) => Self::error(
                "Simulation Running",
                "Wait for the current simulation to finish.",
            ),
            other => Self::error("Error", other.to_string()),
        }
    }
}
