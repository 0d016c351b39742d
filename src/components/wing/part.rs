use bevy::prelude::*;
use serde::{Deserialize, Serialize};

/// Geometry class of a part.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum WingKind {
    #[default]
    Wing,
    ControlSurface,
}

/// Host-side description of a procedural part.
#[derive(Component, Debug, Clone, Serialize, Deserialize)]
pub struct WingPart {
    pub kind: WingKind,
    /// Left-hand copy of a symmetric pair.
    pub mirrored: bool,
    /// Host scale applied to the part; geometry is divided by it.
    pub rescale_factor: f64,
    /// Wing that rotates as a whole about its hinge axis.
    pub all_moving: bool,
    pub lifting_surface: bool,
    /// Structural panel, produces no lift.
    pub panel: bool,
    pub airbrake: bool,
}

impl Default for WingPart {
    fn default() -> Self {
        Self::wing()
    }
}

impl WingPart {
    pub fn wing() -> Self {
        Self {
            kind: WingKind::Wing,
            mirrored: false,
            rescale_factor: 1.0,
            all_moving: false,
            lifting_surface: true,
            panel: false,
            airbrake: false,
        }
    }

    pub fn control_surface() -> Self {
        Self {
            kind: WingKind::ControlSurface,
            ..Self::wing()
        }
    }

    pub fn all_moving_wing() -> Self {
        Self {
            all_moving: true,
            ..Self::wing()
        }
    }

    pub fn with_mirrored(mut self, mirrored: bool) -> Self {
        self.mirrored = mirrored;
        self
    }

    pub fn is_control_surface(&self) -> bool {
        self.kind == WingKind::ControlSurface
    }

    /// Rescale factor safe to divide by.
    pub fn effective_rescale(&self) -> f64 {
        if self.rescale_factor.is_finite() && self.rescale_factor > 1e-6 {
            self.rescale_factor
        } else {
            1.0
        }
    }
}
