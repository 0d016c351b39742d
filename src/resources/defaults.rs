use bevy::prelude::*;
use serde::{Deserialize, Serialize};

use crate::components::{WingKind, WingParameters};

/// Per-class defaults applied to newly created parts during an editing session.
#[derive(Resource, Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WingDefaults {
    wing: WingParameters,
    control_surface: WingParameters,
}

impl Default for WingDefaults {
    fn default() -> Self {
        Self {
            wing: WingParameters::default_for(WingKind::Wing),
            control_surface: WingParameters::default_for(WingKind::ControlSurface),
        }
    }
}

impl WingDefaults {
    pub fn get(&self, kind: WingKind) -> &WingParameters {
        match kind {
            WingKind::Wing => &self.wing,
            WingKind::ControlSurface => &self.control_surface,
        }
    }

    /// Replaces the defaults of `kind` with a part's current parameters.
    pub fn set(&mut self, kind: WingKind, params: &WingParameters) {
        *self.slot(kind) = params.clone();
        info!("Replaced {:?} defaults", kind);
    }

    /// Returns the defaults of `kind` to the baseline values.
    pub fn restore(&mut self, kind: WingKind) {
        *self.slot(kind) = WingParameters::default_for(kind);
    }

    fn slot(&mut self, kind: WingKind) -> &mut WingParameters {
        match kind {
            WingKind::Wing => &mut self.wing,
            WingKind::ControlSurface => &mut self.control_surface,
        }
    }
}
