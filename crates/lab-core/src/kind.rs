//! Closed discriminants for catalog tools and experiments.
//!
//! Catalog documents carry these as kebab-case strings. Strings that name no
//! known variant are kept verbatim in `Other` so catalogs written for newer
//! builds still load; behavior keyed on the kind treats them as inert.

use core::fmt;
use core::str::FromStr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Kind of a catalog tool.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(from = "String", into = "String")
)]
pub enum ToolKind {
    // electric circuits
    Battery,
    Resistor,
    Wire,
    Bulb,
    Switch,
    Ammeter,
    Voltmeter,
    Capacitor,
    // free fall
    Ball,
    Timer,
    Ruler,
    HeightSelector,
    AirResistance,
    MassAdjuster,
    // projectile motion
    Launcher,
    Projectile,
    AngleSelector,
    VelocityControl,
    DistanceMeter,
    HeightMeter,
    WindControl,
    Other(String),
}

impl ToolKind {
    pub const KNOWN: [ToolKind; 21] = [
        ToolKind::Battery,
        ToolKind::Resistor,
        ToolKind::Wire,
        ToolKind::Bulb,
        ToolKind::Switch,
        ToolKind::Ammeter,
        ToolKind::Voltmeter,
        ToolKind::Capacitor,
        ToolKind::Ball,
        ToolKind::Timer,
        ToolKind::Ruler,
        ToolKind::HeightSelector,
        ToolKind::AirResistance,
        ToolKind::MassAdjuster,
        ToolKind::Launcher,
        ToolKind::Projectile,
        ToolKind::AngleSelector,
        ToolKind::VelocityControl,
        ToolKind::DistanceMeter,
        ToolKind::HeightMeter,
        ToolKind::WindControl,
    ];

    pub fn as_str(&self) -> &str {
        match self {
            ToolKind::Battery => "battery",
            ToolKind::Resistor => "resistor",
            ToolKind::Wire => "wire",
            ToolKind::Bulb => "bulb",
            ToolKind::Switch => "switch",
            ToolKind::Ammeter => "ammeter",
            ToolKind::Voltmeter => "voltmeter",
            ToolKind::Capacitor => "capacitor",
            ToolKind::Ball => "ball",
            ToolKind::Timer => "timer",
            ToolKind::Ruler => "ruler",
            ToolKind::HeightSelector => "height-selector",
            ToolKind::AirResistance => "air-resistance",
            ToolKind::MassAdjuster => "mass-adjuster",
            ToolKind::Launcher => "launcher",
            ToolKind::Projectile => "projectile",
            ToolKind::AngleSelector => "angle-selector",
            ToolKind::VelocityControl => "velocity-control",
            ToolKind::DistanceMeter => "distance-meter",
            ToolKind::HeightMeter => "height-meter",
            ToolKind::WindControl => "wind-control",
            ToolKind::Other(raw) => raw,
        }
    }

    /// Wires are the only tools whose terminals may carry several connections.
    pub fn is_wire(&self) -> bool {
        matches!(self, ToolKind::Wire)
    }
}

impl FromStr for ToolKind {
    type Err = core::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let kind = ToolKind::KNOWN
            .iter()
            .find(|k| k.as_str() == s)
            .cloned()
            .unwrap_or_else(|| ToolKind::Other(s.to_string()));
        Ok(kind)
    }
}

impl From<String> for ToolKind {
    fn from(s: String) -> Self {
        match s.parse() {
            Ok(kind) => kind,
            Err(never) => match never {},
        }
    }
}

impl From<&str> for ToolKind {
    fn from(s: &str) -> Self {
        ToolKind::from(s.to_string())
    }
}

impl From<ToolKind> for String {
    fn from(kind: ToolKind) -> Self {
        kind.as_str().to_string()
    }
}

impl fmt::Display for ToolKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Kind of an experiment; selects the precondition rules and the result generator.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(from = "String", into = "String")
)]
pub enum ExperimentKind {
    ElectricCircuits,
    FreeFall,
    ProjectileMotion,
    Other(String),
}

impl ExperimentKind {
    pub fn as_str(&self) -> &str {
        match self {
            ExperimentKind::ElectricCircuits => "electric-circuits",
            ExperimentKind::FreeFall => "free-fall",
            ExperimentKind::ProjectileMotion => "projectile-motion",
            ExperimentKind::Other(raw) => raw,
        }
    }
}

impl From<String> for ExperimentKind {
    fn from(s: String) -> Self {
        match s.as_str() {
            "electric-circuits" => ExperimentKind::ElectricCircuits,
            "free-fall" => ExperimentKind::FreeFall,
            "projectile-motion" => ExperimentKind::ProjectileMotion,
            _ => ExperimentKind::Other(s),
        }
    }
}

impl From<&str> for ExperimentKind {
    fn from(s: &str) -> Self {
        ExperimentKind::from(s.to_string())
    }
}

impl From<ExperimentKind> for String {
    fn from(kind: ExperimentKind) -> Self {
        kind.as_str().to_string()
    }
}

impl fmt::Display for ExperimentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_tool_kinds_round_trip_through_strings() {
        for kind in ToolKind::KNOWN.iter() {
            let parsed = ToolKind::from(kind.as_str());
            assert_eq!(&parsed, kind);
        }
    }

    #[test]
    fn unknown_tool_kind_is_preserved() {
        let kind = ToolKind::from("oscilloscope");
        assert_eq!(kind, ToolKind::Other("oscilloscope".into()));
        assert_eq!(kind.to_string(), "oscilloscope");
        assert!(!kind.is_wire());
    }

    #[test]
    fn experiment_kind_parsing() {
        assert_eq!(
            ExperimentKind::from("projectile-motion"),
            ExperimentKind::ProjectileMotion
        );
        assert_eq!(
            ExperimentKind::from("optics"),
            ExperimentKind::Other("optics".into())
        );
        assert_eq!(ExperimentKind::FreeFall.to_string(), "free-fall");
    }
}
