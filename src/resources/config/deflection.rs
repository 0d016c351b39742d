use bevy::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Resource, Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DeflectionConfig {
    /// Degrees a step may exceed the actuator cap before it is clamped.
    pub rate_limit_slack: f64,
    /// Maximum distance between two hinge axes (unit vectors) to link them.
    pub axis_tolerance: f32,
    /// Levels below the group root searched for linked surfaces.
    pub search_depth: usize,
}

impl Default for DeflectionConfig {
    fn default() -> Self {
        Self {
            rate_limit_slack: 0.1,
            axis_tolerance: 0.05,
            search_depth: 3,
        }
    }
}
