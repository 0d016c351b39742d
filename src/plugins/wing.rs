use bevy::prelude::*;

use crate::components::{AeroCommitted, ExternalAeroSurface, StockLiftSurface, WingParametersChanged};
use crate::plugins::DeflectionSyncPlugin;
use crate::resources::{AeroBackend, ProcWingConfig, TemplateMeshCache, WingDefaults};
use crate::systems::{
    aero_commit_system, aero_derivation_system, detect_parameter_changes_system,
    geometry_rebuild_system, publish_aero_adapter_system, stock_fallback_system,
    symmetry_propagation_system,
};

/// Procedural wing pipeline stages, run once per fixed tick in this order.
#[derive(Debug, Hash, PartialEq, Eq, Clone, SystemSet)]
pub enum WingSet {
    /// Expiring delayed commits from earlier ticks.
    Commit,
    DetectChanges,
    Symmetry,
    Geometry,
    Aerodynamics,
}

/// Registers the procedural wing pipeline, its resources and events.
///
/// Also adds [`DeflectionSyncPlugin`] for the configured backend, so it must not be
/// added separately alongside this plugin.
pub struct ProcWingPlugin {
    pub config: ProcWingConfig,
    pub timestep: f64,
}

impl Default for ProcWingPlugin {
    fn default() -> Self {
        Self {
            config: ProcWingConfig::default(),
            timestep: 1.0 / 50.0,
        }
    }
}

impl ProcWingPlugin {
    pub fn new(config: ProcWingConfig) -> Self {
        Self {
            config,
            ..Default::default()
        }
    }
}

impl Plugin for ProcWingPlugin {
    fn build(&self, app: &mut App) {
        let config = &self.config;
        app.insert_resource(config.aero.clone())
            .insert_resource(config.backend)
            .insert_resource(config.commit.clone())
            .insert_resource(config.limits.clone())
            .insert_resource(config.deflection.clone())
            .insert_resource(config.logging.clone())
            .init_resource::<TemplateMeshCache>()
            .init_resource::<WingDefaults>();

        app.add_event::<WingParametersChanged>()
            .add_event::<AeroCommitted>();

        app.insert_resource(Time::<Fixed>::from_seconds(self.timestep));

        app.configure_sets(
            FixedUpdate,
            (
                WingSet::Commit,
                WingSet::DetectChanges,
                WingSet::Symmetry,
                WingSet::Geometry,
                WingSet::Aerodynamics,
            )
                .chain(),
        );

        app.add_systems(
            FixedUpdate,
            (
                detect_parameter_changes_system.in_set(WingSet::DetectChanges),
                symmetry_propagation_system.in_set(WingSet::Symmetry),
                geometry_rebuild_system.in_set(WingSet::Geometry),
            ),
        );

        match config.backend {
            AeroBackend::Stock => {
                app.add_systems(
                    FixedUpdate,
                    (
                        aero_commit_system::<StockLiftSurface>.in_set(WingSet::Commit),
                        (
                            aero_derivation_system,
                            publish_aero_adapter_system::<StockLiftSurface>,
                        )
                            .chain()
                            .in_set(WingSet::Aerodynamics),
                    ),
                );
            }
            AeroBackend::External => {
                app.add_systems(
                    FixedUpdate,
                    (
                        aero_commit_system::<ExternalAeroSurface>.in_set(WingSet::Commit),
                        (
                            aero_derivation_system,
                            (
                                publish_aero_adapter_system::<ExternalAeroSurface>,
                                stock_fallback_system,
                            ),
                        )
                            .chain()
                            .in_set(WingSet::Aerodynamics),
                    ),
                );
            }
        }
        if config.logging.log_flight_setup {
            info!("Procedural wings using the {:?} aerodynamics backend", config.backend);
        }

        app.add_plugins(DeflectionSyncPlugin {
            backend: config.backend,
        });
    }
}
