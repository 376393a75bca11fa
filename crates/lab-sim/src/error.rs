//! Error types for lab-sim.

use lab_core::LabError;

use crate::precondition::PreconditionError;

pub type SimResult<T> = Result<T, SimError>;

#[derive(thiserror::Error, Debug)]
pub enum SimError {
    #[error("Core error: {0}")]
    Core(#[from] LabError),
}

/// Why a run request was refused or failed.
#[derive(thiserror::Error, Debug)]
pub enum RunError {
    #[error("A simulation is already running")]
    Busy,

    #[error(transparent)]
    Precondition(#[from] PreconditionError),

    #[error("Simulation failed: {0}")]
    Sim(#[from] SimError),
}

pub type RunResult<T> = Result<T, RunError>;
