use bevy::prelude::*;
use serde::{Deserialize, Serialize};

/// Empirical constants of the aerodynamic derivation.
#[derive(Resource, Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AeroConstants {
    pub lift_fudge: f64,
    pub mass_fudge: f64,
    pub drag_base: f64,
    pub drag_multiplier: f64,
    /// Multiplier applied to sqrt(Cl) when deriving the connection force.
    pub connection_factor: f64,
    pub connection_minimum: f64,
    pub control_surface_fraction: f64,
    pub mass_minimum: f64,
    /// Surface area per unit of built-in lift coefficient.
    pub stock_lift_area_divisor: f64,
    pub stock_mass_factor: f64,
    pub stock_airbrake_mass_factor: f64,
}

impl Default for AeroConstants {
    fn default() -> Self {
        Self {
            lift_fudge: 0.0775,
            mass_fudge: 0.015,
            drag_base: 0.6,
            drag_multiplier: 3.3939,
            connection_factor: 150.0,
            connection_minimum: 50.0,
            control_surface_fraction: 1.0,
            mass_minimum: 0.01,
            stock_lift_area_divisor: 3.52,
            stock_mass_factor: 0.1,
            stock_airbrake_mass_factor: 0.12,
        }
    }
}

/// Which aerodynamic adapter receives derived profiles.
///
/// Chosen once when the plugins are built and never re-resolved.
#[derive(Resource, Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum AeroBackend {
    #[default]
    Stock,
    External,
}

/// Two-phase commit timing.
#[derive(Resource, Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CommitConfig {
    /// Fixed ticks between an aerodynamic recompute and its drag/notification commit.
    pub delay_ticks: u32,
}

impl Default for CommitConfig {
    fn default() -> Self {
        Self { delay_ticks: 2 }
    }
}
