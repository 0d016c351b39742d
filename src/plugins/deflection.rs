use bevy::prelude::*;

use crate::components::{ControlSurfaceActuator, ExternalControllableSurface};
use crate::resources::{AeroBackend, DebugLogConfig, DeflectionConfig};
use crate::systems::{deflection_sync_system, form_deflection_groups_system};

#[derive(Debug, Hash, PartialEq, Eq, Clone, SystemSet)]
pub enum DeflectionSet {
    Grouping,
    Synchronize,
}

/// Keeps linked all-moving wings deflecting as one surface.
#[derive(Default)]
pub struct DeflectionSyncPlugin {
    /// Selects the actuator type the groups drive.
    pub backend: AeroBackend,
}

impl Plugin for DeflectionSyncPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<DeflectionConfig>()
            .init_resource::<DebugLogConfig>();

        app.configure_sets(
            FixedUpdate,
            (DeflectionSet::Grouping, DeflectionSet::Synchronize).chain(),
        );

        match self.backend {
            AeroBackend::Stock => {
                app.add_systems(
                    FixedUpdate,
                    (
                        form_deflection_groups_system::<ControlSurfaceActuator>
                            .in_set(DeflectionSet::Grouping),
                        deflection_sync_system::<ControlSurfaceActuator>
                            .in_set(DeflectionSet::Synchronize),
                    ),
                );
            }
            AeroBackend::External => {
                app.add_systems(
                    FixedUpdate,
                    (
                        form_deflection_groups_system::<ExternalControllableSurface>
                            .in_set(DeflectionSet::Grouping),
                        deflection_sync_system::<ExternalControllableSurface>
                            .in_set(DeflectionSet::Synchronize),
                    ),
                );
            }
        }
    }
}
