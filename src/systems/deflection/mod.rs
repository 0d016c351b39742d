mod grouping;
mod synchronizer;

pub use grouping::{axes_aligned, form_deflection_groups_system};
pub use synchronizer::{consensus_angle, deflection_sync_system, ActuatorSample};
