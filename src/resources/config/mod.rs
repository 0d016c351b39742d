pub mod aero;
pub mod deflection;
pub mod limits;
pub mod logging;
pub mod procwing;

pub use aero::{AeroBackend, AeroConstants, CommitConfig};
pub use deflection::DeflectionConfig;
pub use limits::{Limit, ParameterLimits, WingLimits};
pub use logging::DebugLogConfig;
pub use procwing::ProcWingConfig;
