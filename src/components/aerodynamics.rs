use bevy::prelude::*;
use nalgebra::Vector3;
use serde::{Deserialize, Serialize};

use crate::components::{WingMeshes, WingPart};
use crate::resources::AeroConstants;

/// Aerodynamic values derived from a part's current parameters.
#[derive(Component, Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AerodynamicProfile {
    /// Spanwise length root to tip [m]
    pub semispan: f64,
    /// Mean aerodynamic chord [m]
    pub mean_aerodynamic_chord: f64,
    pub taper_ratio: f64,
    /// Mid-chord sweep [deg]
    pub mid_chord_sweep: f64,
    pub aspect_ratio: f64,
    pub aspect_ratio_sweep_scale: f64,
    /// Surface area [m²]
    pub surface_area: f64,
    pub mass: f64,
    pub cl: f64,
    pub cd: f64,
    /// Lift of every descendant part, summed bottom-up.
    pub children_cl: f64,
    pub connection_force: f64,
    pub breaking_force: f64,
    pub breaking_torque: f64,
    /// Spanwise fraction splitting the planform into equal areas.
    pub pseudotaper_ratio: f64,
    pub center_of_lift: Vector3<f64>,
    pub center_of_mass: Vector3<f64>,
    pub root_mid_chord_offset: Vector3<f64>,
}

impl Default for AerodynamicProfile {
    fn default() -> Self {
        Self {
            semispan: 0.0,
            mean_aerodynamic_chord: 0.0,
            taper_ratio: 0.0,
            mid_chord_sweep: 0.0,
            aspect_ratio: 0.0,
            aspect_ratio_sweep_scale: 0.0,
            surface_area: 0.0,
            mass: 0.0,
            cl: 0.0,
            cd: 0.0,
            children_cl: 0.0,
            connection_force: 0.0,
            breaking_force: 0.0,
            breaking_torque: 0.0,
            pseudotaper_ratio: 0.5,
            center_of_lift: Vector3::zeros(),
            center_of_mass: Vector3::zeros(),
            root_mid_chord_offset: Vector3::zeros(),
        }
    }
}

impl AerodynamicProfile {
    pub fn is_finite(&self) -> bool {
        [
            self.semispan,
            self.mean_aerodynamic_chord,
            self.taper_ratio,
            self.mid_chord_sweep,
            self.aspect_ratio,
            self.aspect_ratio_sweep_scale,
            self.surface_area,
            self.mass,
            self.cl,
            self.cd,
            self.children_cl,
            self.connection_force,
            self.pseudotaper_ratio,
        ]
        .iter()
        .all(|v| v.is_finite())
            && self.center_of_lift.iter().all(|v| v.is_finite())
            && self.center_of_mass.iter().all(|v| v.is_finite())
    }
}

/// Receiver of derived aerodynamic profiles.
pub trait AerodynamicAdapter {
    /// Takes a freshly derived profile.
    fn publish(&mut self, profile: &AerodynamicProfile, part: &WingPart, constants: &AeroConstants);

    /// Second phase, run once the commit barrier expires.
    fn commit(&mut self, meshes: &WingMeshes, drag_cube: &mut DragCube);
}

/// Built-in simplified lift model.
#[derive(Component, Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StockLiftSurface {
    pub lift_coefficient: f64,
    /// Lift coefficient as handed to the stock lifting-surface model, two decimals.
    pub deflection_lift_coefficient: f64,
    /// Control-surface area fraction, also preset for airbrakes.
    pub ctrl_surface_area: f64,
    pub ui_mass: f64,
}

impl AerodynamicAdapter for StockLiftSurface {
    fn publish(&mut self, profile: &AerodynamicProfile, part: &WingPart, constants: &AeroConstants) {
        let coefficient = profile.surface_area / constants.stock_lift_area_divisor;
        self.lift_coefficient = if part.lifting_surface && !part.panel {
            coefficient
        } else {
            0.0
        };
        self.deflection_lift_coefficient = (self.lift_coefficient * 100.0).round() / 100.0;

        if !part.is_control_surface() && !part.all_moving {
            self.ui_mass = coefficient * constants.stock_mass_factor;
        } else if !part.airbrake {
            self.ctrl_surface_area = constants.control_surface_fraction;
            self.ui_mass = coefficient * (1.0 + self.ctrl_surface_area) * constants.stock_mass_factor;
        } else {
            self.ui_mass =
                coefficient * (1.0 + self.ctrl_surface_area) * constants.stock_airbrake_mass_factor;
        }
    }

    fn commit(&mut self, meshes: &WingMeshes, drag_cube: &mut DragCube) {
        drag_cube.rebuild(meshes);
    }
}

/// Field set of an external aerodynamics model attached to the part.
#[derive(Component, Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExternalAeroSurface {
    pub b_2: f64,
    pub b_2_actual: f64,
    pub mac: f64,
    pub mac_actual: f64,
    pub mid_chord_sweep: f64,
    pub taper_ratio: f64,
    pub ctrl_surf_frac: f64,
    pub root_mid_chord_offset: Vector3<f64>,
    /// Times the external model was asked to reinitialize.
    pub initializations: u32,
    /// Geometry-changed notifications sent to the external model.
    pub mesh_rebuilds: u32,
}

impl Default for ExternalAeroSurface {
    fn default() -> Self {
        Self {
            b_2: 0.0,
            b_2_actual: 0.0,
            mac: 0.0,
            mac_actual: 0.0,
            mid_chord_sweep: 0.0,
            taper_ratio: 0.0,
            ctrl_surf_frac: 0.0,
            root_mid_chord_offset: Vector3::zeros(),
            initializations: 0,
            mesh_rebuilds: 0,
        }
    }
}

impl ExternalAeroSurface {
    fn start_initialization(&mut self) {
        self.initializations += 1;
    }
}

impl AerodynamicAdapter for ExternalAeroSurface {
    fn publish(&mut self, profile: &AerodynamicProfile, part: &WingPart, constants: &AeroConstants) {
        let scale = part.effective_rescale();
        let lifting = !part.panel;
        let keep = |value: f64| if lifting { value } else { 0.0 };

        self.b_2 = keep(profile.semispan);
        self.b_2_actual = keep(profile.semispan * scale);
        self.mac = keep(profile.mean_aerodynamic_chord);
        self.mac_actual = keep(profile.mean_aerodynamic_chord * scale);
        self.mid_chord_sweep = keep(profile.mid_chord_sweep);
        self.taper_ratio = keep(profile.taper_ratio);

        if part.is_control_surface() {
            self.ctrl_surf_frac = constants.control_surface_fraction;
        } else {
            self.root_mid_chord_offset = profile.root_mid_chord_offset;
        }
        self.start_initialization();
    }

    fn commit(&mut self, _meshes: &WingMeshes, _drag_cube: &mut DragCube) {
        self.start_initialization();
        self.mesh_rebuilds += 1;
    }
}

/// Countdown between an aerodynamic recompute and its externally visible commit.
#[derive(Component, Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PendingAeroCommit {
    pub ticks_remaining: Option<u32>,
}

impl PendingAeroCommit {
    /// (Re)starts the countdown; retriggering while pending restarts it.
    pub fn arm(&mut self, delay_ticks: u32) {
        self.ticks_remaining = Some(delay_ticks.max(1));
    }

    pub fn is_pending(&self) -> bool {
        self.ticks_remaining.is_some()
    }

    /// Advances one tick. Returns true on the tick the commit fires.
    pub fn tick(&mut self) -> bool {
        match self.ticks_remaining {
            Some(remaining) if remaining <= 1 => {
                self.ticks_remaining = None;
                true
            }
            Some(remaining) => {
                self.ticks_remaining = Some(remaining - 1);
                false
            }
            None => false,
        }
    }
}

/// Box drag model rebuilt from the deformed geometry.
#[derive(Component, Debug, Clone, Default, PartialEq)]
pub struct DragCube {
    pub center: Vec3,
    pub size: Vec3,
    /// Projected areas facing x, y and z.
    pub face_areas: Vec3,
    pub revision: u32,
}

impl DragCube {
    pub fn rebuild(&mut self, meshes: &WingMeshes) {
        let (center, size) = meshes
            .bounds()
            .map(|b| (b.center(), b.size()))
            .unwrap_or((Vec3::ZERO, Vec3::ZERO));
        self.center = center;
        self.size = size;
        self.face_areas = Vec3::new(size.y * size.z, size.x * size.z, size.x * size.y);
        self.revision += 1;
    }
}
