//! Application layer for the lab bench.
//!
//! Ties the catalog, connection graph and simulation orchestrator into an
//! editable workspace, and provides the session navigation, pointer handling,
//! result presentation and scenario runner used by front ends.

pub mod config;
pub mod drag;
pub mod error;
pub mod presentation;
pub mod scenario;
pub mod session;
pub mod workspace;

pub use config::{LabConfig, WorkspaceOptions};
pub use drag::{DragController, PointerOutcome, PointerTarget, hit_test};
pub use error::{AppError, AppResult, WorkspaceError, WorkspaceResult};
pub use presentation::{Notice, PlotView, render_text};
pub use scenario::{
    CanvasSize, RunReport, Scenario, ScenarioReport, Step, load_scenario, run_scenario,
};
pub use session::{LabSession, ViewState};
pub use workspace::Workspace;
