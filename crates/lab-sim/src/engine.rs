//! Visual stage for a run and the engine that owns it.
//!
//! The stage mirrors what is drawn while a run is pending: static bounds plus
//! bodies built from the placed components. Nothing is integrated here; the
//! numbers come from the generators.

use lab_core::{ExperimentKind, LabError, Offset, Position, ToolKind, ensure_finite};
use lab_core::{in_mps, in_radians};
use tracing::{debug, info};

use crate::error::{SimError, SimResult};
use crate::generator::ProjectileSetup;
use crate::input::RunInput;

/// Thickness of the ground, walls and ceiling.
pub const BOUND_THICKNESS: f64 = 20.0;
/// Ball height when no height selector is placed.
pub const DEFAULT_DROP_Y: f64 = 50.0;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Shape {
    Rect { width: f64, height: f64 },
    Circle { radius: f64 },
}

#[derive(Debug, Clone, PartialEq)]
pub struct Body {
    pub label: String,
    pub center: Position,
    pub shape: Shape,
    /// Rotation in radians.
    pub angle: f64,
    pub is_static: bool,
    /// Initial velocity in m/s, canvas axes (y down).
    pub velocity: Offset,
}

impl Body {
    fn fixed(label: impl Into<String>, center: Position, shape: Shape) -> Self {
        Self {
            label: label.into(),
            center,
            shape,
            angle: 0.0,
            is_static: true,
            velocity: Offset::ZERO,
        }
    }

    fn free(label: impl Into<String>, center: Position, shape: Shape) -> Self {
        Self {
            is_static: false,
            ..Self::fixed(label, center, shape)
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Stage {
    pub width: f64,
    pub height: f64,
    pub bounds: Vec<Body>,
    pub bodies: Vec<Body>,
}

impl Stage {
    /// Empty stage enclosed by ground, side walls and ceiling.
    pub fn new(width: f64, height: f64) -> SimResult<Self> {
        let width = ensure_finite(width, "stage width")?;
        let height = ensure_finite(height, "stage height")?;
        if width <= 0.0 || height <= 0.0 {
            return Err(SimError::Core(LabError::InvalidArg {
                what: "stage size must be positive",
            }));
        }

        let t = BOUND_THICKNESS;
        let bounds = vec![
            Body::fixed(
                "ground",
                Position::new(width / 2.0, height - t / 2.0),
                Shape::Rect { width, height: t },
            ),
            Body::fixed(
                "left-wall",
                Position::new(0.0, height / 2.0),
                Shape::Rect { width: t, height },
            ),
            Body::fixed(
                "right-wall",
                Position::new(width, height / 2.0),
                Shape::Rect { width: t, height },
            ),
            Body::fixed(
                "ceiling",
                Position::new(width / 2.0, 0.0),
                Shape::Rect { width, height: t },
            ),
        ];

        Ok(Self {
            width,
            height,
            bounds,
            bodies: Vec::new(),
        })
    }

    /// Stage for the experiment in `input`.
    pub fn for_input(input: &RunInput<'_>) -> SimResult<Self> {
        let mut stage = Self::new(input.canvas.width(), input.canvas.height())?;
        match &input.experiment.kind {
            ExperimentKind::ElectricCircuits => stage.add_circuit(input),
            ExperimentKind::FreeFall => stage.add_drop(input),
            ExperimentKind::ProjectileMotion => {
                stage.add_launch(&ProjectileSetup::from_input(input)?)
            }
            ExperimentKind::Other(_) => {
                for component in input.components {
                    stage.bodies.push(Body::free(
                        tool_label(component.id.get()),
                        component.position,
                        Shape::Circle { radius: 20.0 },
                    ));
                }
            }
        }
        Ok(stage)
    }

    pub fn body(&self, label: &str) -> Option<&Body> {
        self.bodies.iter().find(|b| b.label == label)
    }

    fn add_circuit(&mut self, input: &RunInput<'_>) {
        for component in input.components {
            let shape = match component.kind {
                ToolKind::Battery => Shape::Rect {
                    width: 40.0,
                    height: 20.0,
                },
                ToolKind::Resistor => Shape::Rect {
                    width: 30.0,
                    height: 10.0,
                },
                ToolKind::Bulb => Shape::Circle { radius: 15.0 },
                ToolKind::Wire => Shape::Rect {
                    width: 40.0,
                    height: 5.0,
                },
                _ => continue,
            };
            self.bodies.push(Body::fixed(
                tool_label(component.id.get()),
                component.position,
                shape,
            ));
        }

        for connection in input.graph.connections() {
            let source = input
                .components
                .iter()
                .find(|c| c.id == connection.source_component);
            let target = input
                .components
                .iter()
                .find(|c| c.id == connection.target_component);
            let (Some(source), Some(target)) = (source, target) else {
                continue;
            };

            let delta = target.position - source.position;
            self.bodies.push(Body {
                angle: delta.dy.atan2(delta.dx),
                ..Body::fixed(
                    format!("connection-{}", connection.id),
                    source.position.midpoint(target.position),
                    Shape::Rect {
                        width: source.position.distance_to(target.position),
                        height: 2.0,
                    },
                )
            });

            // A bulb wired straight to a battery lights up
            let bulb = match (&source.kind, &target.kind) {
                (ToolKind::Battery, ToolKind::Bulb) => Some(target),
                (ToolKind::Bulb, ToolKind::Battery) => Some(source),
                _ => None,
            };
            if let Some(bulb) = bulb {
                self.bodies.push(Body::fixed(
                    format!("glow-{}", bulb.id),
                    bulb.position,
                    Shape::Circle { radius: 25.0 },
                ));
            }
        }
    }

    fn add_drop(&mut self, input: &RunInput<'_>) {
        let Some(ball) = input.first_of(&ToolKind::Ball) else {
            return;
        };
        let y = input
            .first_of(&ToolKind::HeightSelector)
            .map_or(DEFAULT_DROP_Y, |h| h.position.y);
        self.bodies.push(Body::free(
            tool_label(ball.id.get()),
            Position::new(ball.position.x, y),
            Shape::Circle { radius: 15.0 },
        ));
    }

    fn add_launch(&mut self, setup: &ProjectileSetup) {
        let Some(launch) = setup.launch_point else {
            return;
        };
        self.bodies.push(Body::fixed(
            "launcher",
            launch,
            Shape::Rect {
                width: 40.0,
                height: 20.0,
            },
        ));

        let speed = in_mps(setup.velocity);
        let theta = in_radians(setup.angle);
        self.bodies.push(Body {
            velocity: Offset::new(speed * theta.cos(), -speed * theta.sin()),
            ..Body::free(
                "projectile",
                launch + Offset::new(0.0, -20.0),
                Shape::Circle { radius: 10.0 },
            )
        });
    }
}

fn tool_label(id: u32) -> String {
    format!("tool-{id}")
}

/// Owns the stage of the current run. Dropping the engine stops it.
#[derive(Debug, Default)]
pub struct SimEngine {
    stage: Option<Stage>,
}

impl SimEngine {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start with a fresh stage, replacing whatever was running.
    pub fn start(&mut self, stage: Stage) {
        if self.stage.is_some() {
            self.stop();
        }
        info!(
            bodies = stage.bodies.len(),
            width = stage.width,
            height = stage.height,
            "engine started"
        );
        self.stage = Some(stage);
    }

    pub fn stop(&mut self) {
        if self.stage.take().is_some() {
            debug!("engine stopped");
        }
    }

    pub fn is_running(&self) -> bool {
        self.stage.is_some()
    }

    pub fn stage(&self) -> Option<&Stage> {
        self.stage.as_ref()
    }
}

impl Drop for SimEngine {
    fn drop(&mut self) {
        self.stop();
    }
}
