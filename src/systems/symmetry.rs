use bevy::prelude::*;

use crate::components::{ParameterShadow, RebuildFlags, SymmetryGroup, WingParameters};
use crate::resources::DebugLogConfig;

/// Copies a primary's parameters and shadow to its mirrored counterparts whenever
/// the primary has a rebuild pending, and schedules the same rebuilds for them.
///
/// Copying the shadow keeps counterparts from re-detecting the copy as an edit of
/// their own. The mirrored flag lives on `WingPart` and is never copied.
pub fn symmetry_propagation_system(
    primaries: Query<(
        Entity,
        &SymmetryGroup,
        &WingParameters,
        &ParameterShadow,
        &RebuildFlags,
    )>,
    mut counterparts: Query<
        (&mut WingParameters, &mut ParameterShadow, &mut RebuildFlags),
        Without<SymmetryGroup>,
    >,
    log: Res<DebugLogConfig>,
) {
    for (primary, group, params, shadow, flags) in primaries.iter() {
        if !flags.geometry && !flags.aero {
            continue;
        }
        for &counterpart in &group.counterparts {
            let Ok((mut cp_params, mut cp_shadow, mut cp_flags)) = counterparts.get_mut(counterpart)
            else {
                warn!(
                    "Symmetry counterpart {:?} of {:?} is not a procedural part",
                    counterpart, primary
                );
                continue;
            };
            if *cp_params != *params {
                *cp_params = params.clone();
            }
            if *cp_shadow != *shadow {
                *cp_shadow = shadow.clone();
            }
            cp_flags.geometry |= flags.geometry;
            cp_flags.aero |= flags.aero;

            if log.log_symmetry {
                debug!("Propagated parameters {:?} -> {:?}", primary, counterpart);
            }
        }
    }
}
