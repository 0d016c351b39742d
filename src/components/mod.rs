pub mod aerodynamics;
pub mod deflection;
pub mod events;
pub mod symmetry;
pub mod wing;

pub use aerodynamics::{
    AerodynamicAdapter, AerodynamicProfile, DragCube, ExternalAeroSurface, PendingAeroCommit,
    StockLiftSurface,
};
pub use deflection::{
    ControlSurfaceActuator, DeflectionGroup, DeflectionGroupChecked, ExternalControllableSurface,
    HingeActuator,
};
pub use events::{AeroCommitted, WingParametersChanged};
pub use symmetry::SymmetryGroup;
pub use wing::{
    Bounds, CollisionProxy, DeformedMesh, ParameterChanges, ParameterShadow, RebuildFlags,
    SubMesh, SurfacePaint, SurfacePaints, WingBundle, WingKind, WingMeshes, WingParameters,
    WingPart,
};
