use bevy::prelude::*;
use std::collections::HashSet;

use crate::components::{
    AerodynamicAdapter, AerodynamicProfile, ExternalAeroSurface, StockLiftSurface, WingPart,
};
use crate::resources::{AeroConstants, DebugLogConfig};

/// Hands freshly derived profiles to the backend adapter `A`.
pub fn publish_aero_adapter_system<A: AerodynamicAdapter + Component>(
    mut parts: Query<(Entity, &AerodynamicProfile, &WingPart, &mut A), Changed<AerodynamicProfile>>,
    constants: Res<AeroConstants>,
    log: Res<DebugLogConfig>,
) {
    for (entity, profile, part, mut adapter) in parts.iter_mut() {
        adapter.publish(profile, part, &constants);
        if log.log_aero {
            debug!("Published profile of {:?} to {}", entity, std::any::type_name::<A>());
        }
    }
}

/// With the external backend selected, parts lacking an external surface fall back
/// to the built-in lift model.
pub fn stock_fallback_system(
    mut parts: Query<
        (Entity, &AerodynamicProfile, &WingPart, &mut StockLiftSurface),
        (Changed<AerodynamicProfile>, Without<ExternalAeroSurface>),
    >,
    constants: Res<AeroConstants>,
    mut warned: Local<HashSet<Entity>>,
) {
    for (entity, profile, part, mut stock) in parts.iter_mut() {
        if warned.insert(entity) {
            warn!(
                "Part {:?} has no external aerodynamics surface, using built-in lift model",
                entity
            );
        }
        stock.publish(profile, part, &constants);
    }
}
