use bevy::prelude::*;
use serde::{Deserialize, Serialize};

/// Per-area verbose logging switches. Degraded-operation warnings are always logged.
#[derive(Resource, Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DebugLogConfig {
    pub log_aero: bool,
    pub log_geometry: bool,
    pub log_mesh_references: bool,
    pub log_updates: bool,
    pub log_flight_setup: bool,
    pub log_symmetry: bool,
    pub log_deflection: bool,
}
