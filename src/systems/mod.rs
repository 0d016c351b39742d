pub mod aerodynamics;
mod changes;
pub mod deflection;
mod geometry;
mod symmetry;

pub use aerodynamics::{
    aero_commit_system, aero_derivation_system, publish_aero_adapter_system, stock_fallback_system,
};
pub use changes::detect_parameter_changes_system;
pub use deflection::{deflection_sync_system, form_deflection_groups_system};
pub use geometry::geometry_rebuild_system;
pub use symmetry::symmetry_propagation_system;
