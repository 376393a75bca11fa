use crate::types::{GraphPoint, Measurement, SimulationResult};

/// Fixed reading of the demo circuit: 9 V across 18 Ω.
///
/// The wiring is not analysed; preconditions already ensured it is closed.
pub fn electric_circuit_result() -> SimulationResult {
    SimulationResult {
        measurements: vec![
            Measurement::new("Voltage", "9.0", "V"),
            Measurement::new("Current", "0.5", "A"),
            Measurement::new("Resistance", "18.0", "Ω"),
            Measurement::new("Power", "4.5", "W"),
        ],
        graph_title: Some("Voltage vs. Current Graph".to_string()),
        graph_data: vec![
            GraphPoint::new(0.0, 0.0),
            GraphPoint::new(3.0, 0.167),
            GraphPoint::new(6.0, 0.333),
            GraphPoint::new(9.0, 0.5),
        ],
    }
}
