//! Result data types.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Measurement {
    pub label: String,
    /// Already formatted for display, e.g. `"9.0"`.
    pub value: String,
    pub unit: String,
}

impl Measurement {
    pub fn new(label: impl Into<String>, value: impl Into<String>, unit: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            value: value.into(),
            unit: unit.into(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GraphPoint {
    pub x: f64,
    pub y: f64,
}

impl GraphPoint {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Output of one run. Replaced, never merged, by the next run.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SimulationResult {
    pub measurements: Vec<Measurement>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub graph_title: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub graph_data: Vec<GraphPoint>,
}

impl SimulationResult {
    /// A line needs at least two samples.
    pub fn has_plot(&self) -> bool {
        self.graph_data.len() >= 2
    }

    pub fn measurement(&self, label: &str) -> Option<&Measurement> {
        self.measurements.iter().find(|m| m.label == label)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn single_point_is_not_a_plot() {
        let mut result = SimulationResult::default();
        assert!(!result.has_plot());
        result.graph_data.push(GraphPoint::new(0.0, 0.0));
        assert!(!result.has_plot());
        result.graph_data.push(GraphPoint::new(1.0, 1.0));
        assert!(result.has_plot());
    }

    #[test]
    fn json_shape_skips_missing_graph() {
        let result = SimulationResult {
            measurements: vec![Measurement::new("Result", "Generic simulation complete", "")],
            graph_title: None,
            graph_data: vec![],
        };
        let json = serde_json::to_string(&result).unwrap();
        assert_eq!(
            json,
            r#"{"measurements":[{"label":"Result","value":"Generic simulation complete","unit":""}]}"#
        );
    }
}
