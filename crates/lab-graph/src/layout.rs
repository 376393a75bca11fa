//! Default connection points per tool kind.
//!
//! Offsets are fixed: existing experiment definitions and saved drawings rely
//! on these exact values.

use lab_core::{Offset, Position, ToolId, ToolKind};

use crate::model::{ConnectionPoint, PointId, PointKind, PointRole};

/// One entry of the per-kind point table.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointTemplate {
    pub role: PointRole,
    pub kind: PointKind,
    pub offset: Offset,
}

const fn template(role: PointRole, kind: PointKind, dx: f64, dy: f64) -> PointTemplate {
    PointTemplate {
        role,
        kind,
        offset: Offset::new(dx, dy),
    }
}

static BATTERY: [PointTemplate; 2] = [
    template(PointRole::Pos, PointKind::Output, 25.0, 0.0),
    template(PointRole::Neg, PointKind::Output, -25.0, 0.0),
];

static RESISTOR: [PointTemplate; 2] = [
    template(PointRole::In, PointKind::Input, -25.0, 0.0),
    template(PointRole::Out, PointKind::Output, 25.0, 0.0),
];

static WIRE: [PointTemplate; 2] = [
    template(PointRole::Start, PointKind::Bidirectional, -25.0, 0.0),
    template(PointRole::End, PointKind::Bidirectional, 25.0, 0.0),
];

// Both bulb terminals are inputs; the "out" role only names the right-hand one.
static BULB: [PointTemplate; 2] = [
    template(PointRole::In, PointKind::Input, -20.0, 10.0),
    template(PointRole::Out, PointKind::Input, 20.0, 10.0),
];

/// Point table entry for a tool kind. Kinds without terminals get an empty slice.
pub fn point_templates(kind: &ToolKind) -> &'static [PointTemplate] {
    match kind {
        ToolKind::Battery => &BATTERY,
        ToolKind::Resistor => &RESISTOR,
        ToolKind::Wire => &WIRE,
        ToolKind::Bulb => &BULB,
        ToolKind::Switch
        | ToolKind::Ammeter
        | ToolKind::Voltmeter
        | ToolKind::Capacitor
        | ToolKind::Ball
        | ToolKind::Timer
        | ToolKind::Ruler
        | ToolKind::HeightSelector
        | ToolKind::AirResistance
        | ToolKind::MassAdjuster
        | ToolKind::Launcher
        | ToolKind::Projectile
        | ToolKind::AngleSelector
        | ToolKind::VelocityControl
        | ToolKind::DistanceMeter
        | ToolKind::HeightMeter
        | ToolKind::WindControl
        | ToolKind::Other(_) => &[],
    }
}

/// Build the default, unconnected points of a component of `kind` placed at `position`.
pub fn default_points_for(
    kind: &ToolKind,
    owner: ToolId,
    position: Position,
) -> Vec<ConnectionPoint> {
    point_templates(kind)
        .iter()
        .map(|t| ConnectionPoint {
            id: PointId::for_role(owner, t.role),
            kind: t.kind,
            role: t.role,
            position: position + t.offset,
            owner,
            connected: false,
        })
        .collect()
}
