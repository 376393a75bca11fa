//! Per-experiment result generators.
//!
//! Generators are pure: the same workspace always yields the same result.

mod electric;
mod free_fall;
mod projectile;

pub use electric::electric_circuit_result;
pub use free_fall::free_fall_result;
pub use projectile::{ProjectileOutcome, ProjectileSetup, projectile_result};

use lab_core::ExperimentKind;

use crate::error::SimResult;
use crate::input::RunInput;
use crate::types::{Measurement, SimulationResult};

/// Compute the result for the experiment in `input`.
pub fn generate(input: &RunInput<'_>) -> SimResult<SimulationResult> {
    match &input.experiment.kind {
        ExperimentKind::ElectricCircuits => Ok(electric_circuit_result()),
        ExperimentKind::FreeFall => Ok(free_fall_result()),
        ExperimentKind::ProjectileMotion => {
            let setup = ProjectileSetup::from_input(input)?;
            Ok(projectile_result(&setup))
        }
        ExperimentKind::Other(_) => Ok(generic_result()),
    }
}

pub fn generic_result() -> SimulationResult {
    SimulationResult {
        measurements: vec![Measurement::new("Result", "Generic simulation complete", "")],
        graph_title: None,
        graph_data: Vec::new(),
    }
}
