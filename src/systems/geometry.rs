use bevy::prelude::*;

use crate::components::{RebuildFlags, WingMeshes, WingParameters, WingPart};
use crate::geometry::deform;
use crate::resources::{DebugLogConfig, TemplateMeshCache, WingLimits};

/// Rebuilds every sub-mesh of parts flagged for a geometry rebuild.
pub fn geometry_rebuild_system(
    mut parts: Query<(
        Entity,
        &WingParameters,
        &WingPart,
        &mut RebuildFlags,
        &mut WingMeshes,
    )>,
    mut cache: ResMut<TemplateMeshCache>,
    limits: Res<WingLimits>,
    log: Res<DebugLogConfig>,
) {
    for (entity, params, part, mut flags, mut meshes) in parts.iter_mut() {
        if !flags.geometry {
            continue;
        }
        flags.geometry = false;

        let templates = cache.get(part.kind);
        *meshes = deform(templates, params, part, limits.for_kind(part.kind));

        if log.log_geometry {
            let size = meshes.bounds().map(|b| b.size()).unwrap_or_default();
            debug!(
                "Rebuilt {:?} {:?}: trailing variant {:?}, leading variant {:?}, bounds {:?}",
                part.kind, entity, meshes.active_trailing, meshes.active_leading, size
            );
        }
        if log.log_mesh_references {
            debug!(
                "{:?} sub-meshes: {} total, {} with collision",
                entity,
                meshes.all().count(),
                meshes.all().filter(|sub| sub.collision.enabled).count()
            );
        }
    }
}
