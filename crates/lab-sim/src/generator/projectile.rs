//! Projectile launch derived from where the controls sit on the canvas.

use lab_core::constants::lab_g;
use lab_core::{
    Accel, Angle, Length, Position, Time, ToolKind, Velocity, deg, ensure_finite, fixed,
    in_degrees, in_meters, in_mps, in_seconds, mps,
};

use crate::error::SimResult;
use crate::input::RunInput;
use crate::types::{GraphPoint, Measurement, SimulationResult};

pub const DEFAULT_ANGLE_DEG: f64 = 45.0;
pub const DEFAULT_VELOCITY_MPS: f64 = 10.0;
pub const MIN_VELOCITY_MPS: f64 = 5.0;
pub const MAX_VELOCITY_MPS: f64 = 20.0;
/// Canvas pixels per m/s for the velocity control's horizontal position.
pub const VELOCITY_PX_PER_MPS: f64 = 50.0;
/// Height of the launch point above the canvas bottom, in pixels.
pub const LAUNCH_HEIGHT_PX: f64 = 30.0;
pub const TRAJECTORY_SAMPLES: usize = 10;

/// Launch parameters.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ProjectileSetup {
    pub angle: Angle,
    pub velocity: Velocity,
    /// Canvas launch point; `None` when no launcher is placed.
    pub launch_point: Option<Position>,
}

impl Default for ProjectileSetup {
    fn default() -> Self {
        Self {
            angle: deg(DEFAULT_ANGLE_DEG),
            velocity: mps(DEFAULT_VELOCITY_MPS),
            launch_point: None,
        }
    }
}

impl ProjectileSetup {
    pub fn from_input(input: &RunInput<'_>) -> SimResult<Self> {
        let Some(launcher) = input.first_of(&ToolKind::Launcher) else {
            return Ok(Self::default());
        };

        let launch = Position::new(
            launcher.position.x,
            input.canvas.height() - LAUNCH_HEIGHT_PX,
        );

        let angle_deg = match input.first_of(&ToolKind::AngleSelector) {
            Some(selector) => angle_towards(launch, selector.position),
            None => DEFAULT_ANGLE_DEG,
        };
        let velocity_mps = match input.first_of(&ToolKind::VelocityControl) {
            Some(control) => (control.position.x / VELOCITY_PX_PER_MPS)
                .clamp(MIN_VELOCITY_MPS, MAX_VELOCITY_MPS),
            None => DEFAULT_VELOCITY_MPS,
        };

        Ok(Self {
            angle: deg(ensure_finite(angle_deg, "launch angle")?),
            velocity: mps(ensure_finite(velocity_mps, "launch velocity")?),
            launch_point: Some(launch),
        })
    }
}

/// Angle in degrees of the selector as seen from the launch point, folded
/// into `[0, 180)`. A flat result falls back to the default angle.
fn angle_towards(launch: Position, selector: Position) -> f64 {
    let raw = (selector.y - launch.y).atan2(selector.x - launch.x).to_degrees();
    let folded = (raw + 180.0).rem_euclid(180.0);
    if folded == 0.0 {
        DEFAULT_ANGLE_DEG
    } else {
        folded
    }
}

/// Ideal drag-free flight over level ground.
#[derive(Debug, Clone, PartialEq)]
pub struct ProjectileOutcome {
    pub time_of_flight: Time,
    pub max_height: Length,
    pub range: Length,
    /// Evenly spaced samples over `[0, time_of_flight]`, in meters.
    pub trajectory: Vec<GraphPoint>,
}

impl ProjectileOutcome {
    pub fn compute(setup: &ProjectileSetup, g: Accel) -> Self {
        let vx: Velocity = setup.velocity * setup.angle.cos();
        let vy: Velocity = setup.velocity * setup.angle.sin();

        let time_of_flight: Time = vy * 2.0 / g;
        let max_height: Length = vy * vy / (g * 2.0);
        // v² sin 2θ / g, written with the components
        let range: Length = vx * vy * 2.0 / g;

        let last = (TRAJECTORY_SAMPLES - 1) as f64;
        let trajectory = (0..TRAJECTORY_SAMPLES)
            .map(|i| {
                let t: Time = time_of_flight * (i as f64 / last);
                let x: Length = vx * t;
                let y: Length = vy * t - g * t * t * 0.5;
                GraphPoint::new(in_meters(x), in_meters(y))
            })
            .collect();

        Self {
            time_of_flight,
            max_height,
            range,
            trajectory,
        }
    }
}

pub fn projectile_result(setup: &ProjectileSetup) -> SimulationResult {
    let outcome = ProjectileOutcome::compute(setup, lab_g());
    SimulationResult {
        measurements: vec![
            Measurement::new("Launch Angle", fixed(in_degrees(setup.angle), 1), "°"),
            Measurement::new("Initial Velocity", fixed(in_mps(setup.velocity), 1), "m/s"),
            Measurement::new("Maximum Height", fixed(in_meters(outcome.max_height), 1), "m"),
            Measurement::new("Horizontal Range", fixed(in_meters(outcome.range), 1), "m"),
            Measurement::new(
                "Time of Flight",
                fixed(in_seconds(outcome.time_of_flight), 2),
                "s",
            ),
        ],
        graph_title: Some("Projectile Trajectory".to_string()),
        graph_data: outcome.trajectory,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn close(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-2
    }

    #[test]
    fn default_launch() {
        let outcome = ProjectileOutcome::compute(&ProjectileSetup::default(), lab_g());
        assert!(close(in_meters(outcome.range), 10.20));
        assert!(close(in_meters(outcome.max_height), 2.55));
        assert!(close(in_seconds(outcome.time_of_flight), 1.44));
    }

    #[test]
    fn trajectory_starts_and_lands_on_ground() {
        let outcome = ProjectileOutcome::compute(&ProjectileSetup::default(), lab_g());
        assert_eq!(outcome.trajectory.len(), TRAJECTORY_SAMPLES);
        let first = outcome.trajectory[0];
        let last = outcome.trajectory[TRAJECTORY_SAMPLES - 1];
        assert!(first.x.abs() < 1e-12 && first.y.abs() < 1e-12);
        assert!(close(last.x, in_meters(outcome.range)));
        assert!(last.y.abs() < 1e-9);
    }

    #[test]
    fn measurement_formatting() {
        let result = projectile_result(&ProjectileSetup::default());
        let values: Vec<(&str, &str, &str)> = result
            .measurements
            .iter()
            .map(|m| (m.label.as_str(), m.value.as_str(), m.unit.as_str()))
            .collect();
        assert_eq!(
            values,
            [
                ("Launch Angle", "45.0", "°"),
                ("Initial Velocity", "10.0", "m/s"),
                ("Maximum Height", "2.6", "m"),
                ("Horizontal Range", "10.2", "m"),
                ("Time of Flight", "1.44", "s"),
            ]
        );
        assert_eq!(result.graph_title.as_deref(), Some("Projectile Trajectory"));
    }

    #[test]
    fn selector_up_and_right_gives_obtuse_fold() {
        // Canvas y grows downwards, so "above" the launch point is negative dy.
        let launch = Position::new(100.0, 370.0);
        let angle = angle_towards(launch, Position::new(200.0, 270.0));
        assert!(close(angle, 135.0));
    }

    #[test]
    fn flat_selector_falls_back_to_default() {
        let launch = Position::new(100.0, 370.0);
        assert_eq!(angle_towards(launch, Position::new(50.0, 370.0)), DEFAULT_ANGLE_DEG);
    }

    proptest! {
        #[test]
        fn range_matches_closed_form(
            angle in 1.0_f64..179.0,
            speed in MIN_VELOCITY_MPS..=MAX_VELOCITY_MPS,
        ) {
            let setup = ProjectileSetup {
                angle: deg(angle),
                velocity: mps(speed),
                launch_point: None,
            };
            let outcome = ProjectileOutcome::compute(&setup, lab_g());
            let g = 9.8;
            let expected = speed * speed * (2.0 * angle.to_radians()).sin() / g;
            prop_assert!((in_meters(outcome.range) - expected).abs() < 1e-9);
        }

        #[test]
        fn selector_angle_is_folded(
            dx in -500.0_f64..500.0,
            dy in -500.0_f64..500.0,
        ) {
            let launch = Position::new(400.0, 370.0);
            let angle = angle_towards(launch, Position::new(400.0 + dx, 370.0 + dy));
            prop_assert!(angle > 0.0 && angle < 180.0);
        }
    }
}
