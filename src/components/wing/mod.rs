mod mesh;
mod parameters;
mod part;

pub use mesh::{Bounds, CollisionProxy, DeformedMesh, SubMesh, WingMeshes};
pub use parameters::{
    ParameterChanges, ParameterShadow, RebuildFlags, SurfacePaint, SurfacePaints, WingParameters,
};
pub use part::{WingKind, WingPart};

use bevy::prelude::*;

use crate::components::{AerodynamicProfile, DragCube, PendingAeroCommit, StockLiftSurface};

/// Everything a procedural part needs to enter the pipeline.
#[derive(Bundle, Default)]
pub struct WingBundle {
    pub part: WingPart,
    pub parameters: WingParameters,
    pub shadow: ParameterShadow,
    pub rebuild: RebuildFlags,
    pub meshes: WingMeshes,
    pub profile: AerodynamicProfile,
    pub stock_lift: StockLiftSurface,
    pub pending_commit: PendingAeroCommit,
    pub drag_cube: DragCube,
}

impl WingBundle {
    pub fn new(part: WingPart, parameters: WingParameters) -> Self {
        Self {
            shadow: ParameterShadow(parameters.clone()),
            part,
            parameters,
            ..Default::default()
        }
    }

    /// Part of `kind` with that class's baseline parameters.
    pub fn with_defaults(part: WingPart) -> Self {
        let parameters = WingParameters::default_for(part.kind);
        Self::new(part, parameters)
    }
}
