use bevy::prelude::*;

/// Read/apply access to a hinged actuator, in degrees.
pub trait HingeActuator {
    /// Deflection the actuator currently asks for.
    fn desired_deflection(&self) -> f64;

    /// Maximum deflection rate [deg/s].
    fn actuator_speed(&self) -> f64;

    /// Rotates the hinge to `angle` degrees about its axis.
    fn apply_deflection(&mut self, angle: f64, transform: &mut Transform);
}

fn hinge_rotation(axis: Vec3, angle: f64, neutral: Quat) -> Quat {
    let axis = axis.try_normalize().unwrap_or(Vec3::X);
    Quat::from_axis_angle(axis, (angle as f32).to_radians()) * neutral
}

/// Built-in control-surface actuator.
#[derive(Component, Debug, Clone)]
pub struct ControlSurfaceActuator {
    /// Commanded deflection [deg], written by the host control input.
    pub deflection: f64,
    /// [deg/s]
    pub actuator_speed: f64,
    /// Hinge axis in the part's local frame.
    pub hinge_axis: Vec3,
    pub neutral_rotation: Quat,
    /// Angle last applied to the hinge.
    pub applied_angle: f64,
}

impl Default for ControlSurfaceActuator {
    fn default() -> Self {
        Self {
            deflection: 0.0,
            actuator_speed: 60.0,
            hinge_axis: Vec3::X,
            neutral_rotation: Quat::IDENTITY,
            applied_angle: 0.0,
        }
    }
}

impl HingeActuator for ControlSurfaceActuator {
    fn desired_deflection(&self) -> f64 {
        self.deflection
    }

    fn actuator_speed(&self) -> f64 {
        self.actuator_speed
    }

    fn apply_deflection(&mut self, angle: f64, transform: &mut Transform) {
        self.applied_angle = angle;
        transform.rotation = hinge_rotation(self.hinge_axis, angle, self.neutral_rotation);
    }
}

/// Actuator owned by an external aerodynamics model.
///
/// The model reads and writes its angle-of-attack offset and is told to replay its
/// deflection animation after every write.
#[derive(Component, Debug, Clone)]
pub struct ExternalControllableSurface {
    pub aoa_offset: f64,
    pub actuator_speed: f64,
    pub hinge_axis: Vec3,
    pub neutral_rotation: Quat,
    pub deflection_animations: u32,
}

impl Default for ExternalControllableSurface {
    fn default() -> Self {
        Self {
            aoa_offset: 0.0,
            actuator_speed: 60.0,
            hinge_axis: Vec3::X,
            neutral_rotation: Quat::IDENTITY,
            deflection_animations: 0,
        }
    }
}

impl HingeActuator for ExternalControllableSurface {
    fn desired_deflection(&self) -> f64 {
        self.aoa_offset
    }

    fn actuator_speed(&self) -> f64 {
        self.actuator_speed
    }

    fn apply_deflection(&mut self, angle: f64, transform: &mut Transform) {
        self.aoa_offset = angle;
        self.deflection_animations += 1;
        transform.rotation = hinge_rotation(self.hinge_axis, angle, self.neutral_rotation);
    }
}

/// Linked hinges that move as one rigid surface. Lives on the group's root part.
#[derive(Component, Debug, Clone, Default, PartialEq)]
pub struct DeflectionGroup {
    pub members: Vec<Entity>,
    pub last_angle: f64,
}

impl DeflectionGroup {
    pub fn new(members: Vec<Entity>) -> Self {
        Self {
            members,
            last_angle: 0.0,
        }
    }
}

/// Marks an all-moving wing whose group membership has been resolved.
#[derive(Component, Debug, Clone, Copy, Default)]
pub struct DeflectionGroupChecked;
