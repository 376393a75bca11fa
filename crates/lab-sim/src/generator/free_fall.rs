use crate::types::{GraphPoint, Measurement, SimulationResult};

/// Fixed 10 m drop.
pub fn free_fall_result() -> SimulationResult {
    SimulationResult {
        measurements: vec![
            Measurement::new("Drop Height", "10.0", "m"),
            Measurement::new("Time of Fall", "1.43", "s"),
            Measurement::new("Final Velocity", "14.0", "m/s"),
            Measurement::new("Calculated g", "9.79", "m/s²"),
        ],
        graph_title: Some("Position vs. Time Graph".to_string()),
        graph_data: vec![
            GraphPoint::new(0.0, 0.0),
            GraphPoint::new(0.5, 1.22),
            GraphPoint::new(1.0, 4.9),
            GraphPoint::new(1.43, 10.0),
        ],
    }
}
