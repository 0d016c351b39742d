use bevy::prelude::*;

/// A part's parameters changed since the previous tick.
#[derive(Event, Debug, Clone, Copy, PartialEq, Eq)]
pub struct WingParametersChanged {
    pub entity: Entity,
    pub geometry: bool,
    pub aero: bool,
}

/// The delayed aerodynamic side effects of a part were committed.
#[derive(Event, Debug, Clone, Copy, PartialEq, Eq)]
pub struct AeroCommitted {
    pub entity: Entity,
}
