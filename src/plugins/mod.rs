mod deflection;
mod wing;

pub use deflection::{DeflectionSet, DeflectionSyncPlugin};
pub use wing::{ProcWingPlugin, WingSet};
