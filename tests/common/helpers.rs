use bevy::prelude::*;
use procwing::components::{ControlSurfaceActuator, WingBundle, WingParameters, WingPart};

use crate::common::TestApp;

/// Spawns a default wing
pub fn spawn_wing(app: &mut TestApp) -> Entity {
    app.spawn(WingBundle::with_defaults(WingPart::wing()))
}

/// Spawns a wing with the given parameters
pub fn spawn_wing_with(app: &mut TestApp, part: WingPart, params: WingParameters) -> Entity {
    app.spawn(WingBundle::new(part, params))
}

/// Spawns an all-moving wing with a stock actuator and a world hinge axis of
/// `rotation * X`
pub fn spawn_all_moving(app: &mut TestApp, deflection: f64, rotation: Quat) -> Entity {
    let transform = Transform::from_rotation(rotation);
    app.spawn((
        WingBundle::with_defaults(WingPart::all_moving_wing()),
        ControlSurfaceActuator {
            deflection,
            ..Default::default()
        },
        transform,
        GlobalTransform::from(transform),
    ))
}

/// Stock actuator angle last applied to `entity`
pub fn applied_angle(app: &TestApp, entity: Entity) -> f64 {
    app.get::<ControlSurfaceActuator>(entity)
        .map(|actuator| actuator.applied_angle)
        .unwrap_or(f64::NAN)
}
