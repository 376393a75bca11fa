//! lab-sim: run preconditions, result generators and the run state machine.

pub mod engine;
pub mod error;
pub mod generator;
pub mod input;
pub mod orchestrator;
pub mod precondition;
pub mod record;
pub mod sink;
pub mod types;

pub use engine::{Body, Shape, SimEngine, Stage};
pub use error::{RunError, RunResult, SimError, SimResult};
pub use generator::generate;
pub use input::RunInput;
pub use orchestrator::{Orchestrator, RunOptions, RunState, run_duration};
pub use precondition::{PreconditionError, check_preconditions};
pub use record::{RunRecord, compute_run_id};
pub use sink::{LatestResult, ResultSink};
pub use types::*;
