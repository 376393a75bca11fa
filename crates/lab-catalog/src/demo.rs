//! Built-in demo catalog: electric circuits, free fall and projectile motion.

use crate::CatalogResult;
use crate::schema::CatalogDef;
use crate::validate::validate_catalog;

const DEMO_YAML: &str = include_str!("../data/demo_catalog.yaml");

/// Parse and validate the bundled demo catalog.
pub fn demo_catalog() -> CatalogResult<CatalogDef> {
    let catalog: CatalogDef = serde_yaml::from_str(DEMO_YAML)?;
    validate_catalog(&catalog)?;
    Ok(catalog)
}

#[cfg(test)]
mod tests {
    use super::*;
    use lab_core::{ExperimentId, ExperimentKind, ToolKind};

    #[test]
    fn demo_parses() {
        let catalog = demo_catalog().unwrap();
        assert_eq!(catalog.experiments.len(), 3);
        assert_eq!(catalog.tools.len(), 22);
    }

    #[test]
    fn electric_experiment_shape() {
        let catalog = demo_catalog().unwrap();
        let exp = catalog.experiment(ExperimentId(1)).unwrap();
        assert_eq!(exp.kind, ExperimentKind::ElectricCircuits);
        assert_eq!(
            exp.required_tool_types,
            vec![
                ToolKind::Battery,
                ToolKind::Resistor,
                ToolKind::Wire,
                ToolKind::Bulb
            ]
        );
        let battery = catalog
            .tools_for(exp.id)
            .find(|t| t.kind == ToolKind::Battery)
            .unwrap();
        assert_eq!(battery.number_property("voltage"), Some(9.0));
    }

    #[test]
    fn timer_is_offered_twice() {
        let catalog = demo_catalog().unwrap();
        let timers = catalog
            .tools
            .iter()
            .filter(|t| t.kind == ToolKind::Timer)
            .count();
        assert_eq!(timers, 2);
    }
}
