//! Where finished results go.

use crate::types::SimulationResult;

/// Display collaborator for finished runs.
pub trait ResultSink {
    fn accept(&mut self, result: &SimulationResult);
}

/// Sink that keeps only the most recent result.
#[derive(Debug, Clone, Default)]
pub struct LatestResult {
    latest: Option<SimulationResult>,
}

impl LatestResult {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self) -> Option<&SimulationResult> {
        self.latest.as_ref()
    }

    pub fn take(&mut self) -> Option<SimulationResult> {
        self.latest.take()
    }
}

impl ResultSink for LatestResult {
    fn accept(&mut self, result: &SimulationResult) {
        self.latest = Some(result.clone());
    }
}

impl<F: FnMut(&SimulationResult)> ResultSink for F {
    fn accept(&mut self, result: &SimulationResult) {
        self(result)
    }
}
