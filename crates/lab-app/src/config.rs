//! Workspace and run configuration.

use std::path::Path;

use lab_core::{Position, Rect};
use lab_sim::RunOptions;
use serde::{Deserialize, Serialize};

use crate::error::{AppResult, read_yaml};

/// Canvas geometry and hit-test sizes.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WorkspaceOptions {
    /// Client-space left edge of the canvas.
    pub left: f64,
    /// Client-space top edge of the canvas.
    pub top: f64,
    pub width: f64,
    pub height: f64,
    /// Side of the square hit box centred on each component.
    pub component_hit_size: f64,
    pub point_hit_radius: f64,
}

impl Default for WorkspaceOptions {
    fn default() -> Self {
        Self {
            left: 0.0,
            top: 0.0,
            width: 800.0,
            height: 400.0,
            component_hit_size: 50.0,
            point_hit_radius: 12.0,
        }
    }
}

impl WorkspaceOptions {
    /// Canvas bounding box in client coordinates.
    pub fn bounds(&self) -> Rect {
        Rect::from_origin_size(Position::new(self.left, self.top), self.width, self.height)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct LabConfig {
    pub workspace: WorkspaceOptions,
    pub run: RunOptions,
}

impl LabConfig {
    pub fn load(path: &Path) -> AppResult<Self> {
        read_yaml(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partial_yaml_keeps_defaults() {
        let config: LabConfig = serde_yaml::from_str(
            r#"
workspace:
  width: 1024
run:
  time_scale: 0.5
"#,
        )
        .unwrap();
        assert_eq!(config.workspace.width, 1024.0);
        assert_eq!(config.workspace.height, 400.0);
        assert_eq!(config.workspace.point_hit_radius, 12.0);
        assert_eq!(config.run.time_scale, 0.5);
    }

    #[test]
    fn bounds_from_options() {
        let options = WorkspaceOptions {
            left: 20.0,
            top: 100.0,
            ..WorkspaceOptions::default()
        };
        let bounds = options.bounds();
        assert_eq!(bounds.min, Position::new(20.0, 100.0));
        assert_eq!(bounds.max, Position::new(820.0, 500.0));
    }
}
