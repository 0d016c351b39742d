use bevy::prelude::*;

use crate::components::{AeroCommitted, AerodynamicAdapter, DragCube, PendingAeroCommit, WingMeshes};
use crate::resources::DebugLogConfig;

/// Second phase of the commit barrier: counts down armed commits and, when one
/// expires, lets the adapter commit its side effects. Parts without the adapter
/// only get their drag cube rebuilt.
pub fn aero_commit_system<A: AerodynamicAdapter + Component>(
    mut parts: Query<(
        Entity,
        &WingMeshes,
        &mut PendingAeroCommit,
        &mut DragCube,
        Option<&mut A>,
    )>,
    mut committed: EventWriter<AeroCommitted>,
    log: Res<DebugLogConfig>,
) {
    for (entity, meshes, mut pending, mut drag_cube, adapter) in parts.iter_mut() {
        if !pending.is_pending() || !pending.tick() {
            continue;
        }
        match adapter {
            Some(mut adapter) => adapter.commit(meshes, &mut drag_cube),
            None => drag_cube.rebuild(meshes),
        }
        if log.log_updates {
            debug!("Committed aerodynamic side effects of {:?}", entity);
        }
        committed.send(AeroCommitted { entity });
    }
}
