use bevy::prelude::*;
use serde::{Deserialize, Serialize};

use crate::components::WingKind;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Limit {
    pub min: f64,
    pub max: f64,
}

impl Limit {
    pub const fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    /// Clamps `value` into the range. Non-finite input collapses to `min`.
    pub fn clamp(&self, value: f64) -> f64 {
        if !value.is_finite() {
            return self.min;
        }
        value.max(self.min).min(self.max)
    }

    pub fn contains(&self, value: f64) -> bool {
        value >= self.min && value <= self.max
    }
}

/// Editable ranges for one geometry class.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ParameterLimits {
    pub length: Limit,
    pub thickness: Limit,
    pub width_root: Limit,
    pub width_tip: Limit,
    pub offset: Limit,
    pub edge_type: Limit,
    pub edge_width: Limit,
    pub material: Limit,
    pub color: Limit,
    pub armor: Limit,
}

impl ParameterLimits {
    pub fn wing() -> Self {
        Self {
            length: Limit::new(0.01, 40.0),
            thickness: Limit::new(0.01, 4.0),
            width_root: Limit::new(0.01, 40.0),
            width_tip: Limit::new(0.0, 40.0),
            offset: Limit::new(-10.0, 10.0),
            edge_type: Limit::new(1.0, 15.0),
            edge_width: Limit::new(0.0, 6.0),
            material: Limit::new(0.0, 4.0),
            color: Limit::new(0.0, 1.0),
            armor: Limit::new(0.0, 1000.0),
        }
    }

    pub fn control_surface() -> Self {
        Self {
            length: Limit::new(0.01, 20.0),
            width_root: Limit::new(0.01, 2.0),
            width_tip: Limit::new(0.0, 2.0),
            offset: Limit::new(-1.5, 1.5),
            edge_type: Limit::new(1.0, 7.0),
            ..Self::wing()
        }
    }
}

#[derive(Resource, Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WingLimits {
    pub wing: ParameterLimits,
    pub control_surface: ParameterLimits,
}

impl Default for WingLimits {
    fn default() -> Self {
        Self {
            wing: ParameterLimits::wing(),
            control_surface: ParameterLimits::control_surface(),
        }
    }
}

impl WingLimits {
    pub fn for_kind(&self, kind: WingKind) -> &ParameterLimits {
        match kind {
            WingKind::Wing => &self.wing,
            WingKind::ControlSurface => &self.control_surface,
        }
    }
}
