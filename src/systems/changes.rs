use bevy::prelude::*;

use crate::components::{ParameterShadow, RebuildFlags, WingParameters, WingParametersChanged, WingPart};
use crate::resources::{DebugLogConfig, WingLimits};

/// Clamps edited parameters into their class limits and compares them against the
/// shadow copy, flagging the pipelines that must rerun.
pub fn detect_parameter_changes_system(
    mut parts: Query<(
        Entity,
        &WingPart,
        &mut WingParameters,
        &mut ParameterShadow,
        &mut RebuildFlags,
    )>,
    limits: Res<WingLimits>,
    mut changed: EventWriter<WingParametersChanged>,
    log: Res<DebugLogConfig>,
) {
    for (entity, part, mut params, mut shadow, mut flags) in parts.iter_mut() {
        let mut clamped = params.clone();
        if clamped.clamp_to(limits.for_kind(part.kind)) {
            if log.log_updates {
                debug!("Clamped out-of-range parameters of {:?}", entity);
            }
            *params = clamped;
        }

        let changes = params.diff(&shadow.0);
        if !changes.any() {
            continue;
        }
        flags.mark(changes);
        shadow.0 = params.clone();

        if log.log_updates {
            debug!(
                "Parameters of {:?} changed (geometry: {}, aero: {})",
                entity, changes.geometry, changes.aero
            );
        }
        changed.send(WingParametersChanged {
            entity,
            geometry: changes.geometry,
            aero: changes.aero,
        });
    }
}
