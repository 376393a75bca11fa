//! Run state machine: `Idle -> Validating -> Running -> Idle`.
//!
//! A run is accepted synchronously and its result held back until the
//! caller polls past the deadline. Time is injected, so there are no threads.

use std::time::{Duration, Instant};

use lab_core::{ExperimentKind, LabError};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use crate::engine::{SimEngine, Stage};
use crate::error::{RunError, RunResult, SimError};
use crate::generator::generate;
use crate::input::RunInput;
use crate::precondition::check_preconditions;
use crate::record::RunRecord;
use crate::sink::ResultSink;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RunState {
    #[default]
    Idle,
    Validating,
    Running,
}

/// Options for running simulations.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RunOptions {
    /// Multiplier on the per-experiment run duration. `0.0` delivers on the next poll.
    pub time_scale: f64,
}

impl Default for RunOptions {
    fn default() -> Self {
        Self { time_scale: 1.0 }
    }
}

/// How long a run of `kind` stays pending before its result is delivered.
pub fn run_duration(kind: &ExperimentKind) -> Duration {
    match kind {
        ExperimentKind::ElectricCircuits => Duration::from_secs(3),
        ExperimentKind::FreeFall => Duration::from_secs(4),
        ExperimentKind::ProjectileMotion | ExperimentKind::Other(_) => Duration::from_secs(5),
    }
}

#[derive(Debug)]
struct PendingRun {
    record: RunRecord,
    deadline: Instant,
}

#[derive(Debug, Default)]
pub struct Orchestrator {
    options: RunOptions,
    state: RunState,
    engine: SimEngine,
    pending: Option<PendingRun>,
}

impl Orchestrator {
    pub fn new(options: RunOptions) -> Self {
        Self {
            options,
            ..Self::default()
        }
    }

    pub fn state(&self) -> RunState {
        self.state
    }

    pub fn is_running(&self) -> bool {
        self.state == RunState::Running
    }

    pub fn options(&self) -> RunOptions {
        self.options
    }

    pub fn engine(&self) -> &SimEngine {
        &self.engine
    }

    /// Deadline of the pending run, if any.
    pub fn deadline(&self) -> Option<Instant> {
        self.pending.as_ref().map(|p| p.deadline)
    }

    /// Validate and start a run. Returns the delivery deadline.
    ///
    /// On a failed precondition nothing changes and the state is back to `Idle`.
    pub fn begin_run(&mut self, input: &RunInput<'_>, now: Instant) -> RunResult<Instant> {
        if self.is_running() {
            return Err(RunError::Busy);
        }

        self.state = RunState::Validating;
        let prepared = self.prepare(input, now);
        let (record, stage, deadline) = match prepared {
            Ok(prepared) => prepared,
            Err(err) => {
                self.state = RunState::Idle;
                warn!(experiment = %input.experiment.id, error = %err, "run rejected");
                return Err(err);
            }
        };

        self.engine.start(stage);
        info!(
            experiment = %input.experiment.id,
            kind = %input.experiment.kind,
            run_id = %record.run_id,
            "run started"
        );
        self.pending = Some(PendingRun { record, deadline });
        self.state = RunState::Running;
        Ok(deadline)
    }

    fn prepare(
        &self,
        input: &RunInput<'_>,
        now: Instant,
    ) -> RunResult<(RunRecord, Stage, Instant)> {
        check_preconditions(input)?;
        let result = generate(input)?;
        let stage = Stage::for_input(input)?;

        let base = run_duration(&input.experiment.kind);
        let delay = Duration::try_from_secs_f64(base.as_secs_f64() * self.options.time_scale)
            .map_err(|_| {
                SimError::Core(LabError::InvalidArg {
                    what: "time_scale must be finite and non-negative",
                })
            })?;

        let deadline = now.checked_add(delay).ok_or(SimError::Core(LabError::InvalidArg {
            what: "time_scale too large",
        }))?;

        Ok((RunRecord::new(input, result), stage, deadline))
    }

    /// Deliver the pending result once `now` has reached its deadline.
    ///
    /// The engine keeps its stage after delivery; [`Orchestrator::teardown`] stops it.
    pub fn poll(&mut self, now: Instant, sink: &mut dyn ResultSink) -> Option<RunRecord> {
        let due = self.pending.as_ref().is_some_and(|p| now >= p.deadline);
        if !due {
            return None;
        }
        let pending = self.pending.take()?;
        self.state = RunState::Idle;
        sink.accept(&pending.record.result);
        info!(run_id = %pending.record.run_id, "run finished");
        Some(pending.record)
    }

    /// Drop any pending run and stop the engine.
    pub fn teardown(&mut self) {
        if self.pending.take().is_some() {
            debug!("pending run discarded");
        }
        self.state = RunState::Idle;
        self.engine.stop();
    }
}
