//! Checks that must pass before a run starts.
//!
//! Rules are evaluated in a fixed order and the first failure wins. None of
//! them mutate anything.

use lab_core::{ExperimentKind, ToolKind};

use crate::input::RunInput;

#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum PreconditionError {
    #[error("Please add some tools to the workspace first.")]
    NoComponents,

    #[error("Please add: {}", join_kinds(.missing))]
    MissingTools { missing: Vec<ToolKind> },

    #[error("Connect components to create a complete circuit.")]
    NoConnections,

    #[error("Your circuit needs a battery to function.")]
    MissingPowerSource,

    #[error(
        "Your circuit is not complete. Make sure both terminals of the battery are connected."
    )]
    OpenCircuit,
}

impl PreconditionError {
    /// Short heading shown above the message.
    pub fn title(&self) -> &'static str {
        match self {
            PreconditionError::NoComponents => "No tools in workspace",
            PreconditionError::MissingTools { .. } => "Missing required tools",
            PreconditionError::NoConnections => "Incomplete Circuit",
            PreconditionError::MissingPowerSource => "Missing Power Source",
            PreconditionError::OpenCircuit => "Open Circuit",
        }
    }
}

fn join_kinds(kinds: &[ToolKind]) -> String {
    kinds
        .iter()
        .map(ToolKind::as_str)
        .collect::<Vec<_>>()
        .join(", ")
}

pub fn check_preconditions(input: &RunInput<'_>) -> Result<(), PreconditionError> {
    if input.components.is_empty() {
        return Err(PreconditionError::NoComponents);
    }

    let missing: Vec<ToolKind> = input
        .experiment
        .required_tool_types
        .iter()
        .filter(|kind| !input.has_kind(kind))
        .cloned()
        .collect();
    if !missing.is_empty() {
        return Err(PreconditionError::MissingTools { missing });
    }

    if input.experiment.kind == ExperimentKind::ElectricCircuits {
        check_circuit(input)?;
    }

    Ok(())
}

fn check_circuit(input: &RunInput<'_>) -> Result<(), PreconditionError> {
    let graph = input.graph;
    if graph.connections().is_empty() {
        return Err(PreconditionError::NoConnections);
    }

    let batteries: Vec<_> = input
        .components
        .iter()
        .filter(|c| c.kind == ToolKind::Battery)
        .collect();
    if batteries.is_empty() {
        return Err(PreconditionError::MissingPowerSource);
    }

    // Every terminal of every battery must be wired somewhere
    let closed = batteries.iter().all(|battery| {
        graph
            .points_of(battery.id)
            .all(|point| graph.connections_of_point(&point.id).next().is_some())
    });
    if !closed {
        return Err(PreconditionError::OpenCircuit);
    }

    Ok(())
}
