use bevy::prelude::*;
use procwing::components::{ControlSurfaceActuator, DeflectionGroup, DeflectionGroupChecked};

use crate::common::{applied_angle, spawn_all_moving, TestAppBuilder};

#[test]
fn test_aligned_all_moving_wings_form_one_group() {
    let mut app = TestAppBuilder::new().build();
    let root = spawn_all_moving(&mut app, 10.0, Quat::IDENTITY);
    let left = spawn_all_moving(&mut app, -4.0, Quat::IDENTITY);
    let right = spawn_all_moving(&mut app, 0.0, Quat::IDENTITY);
    let skewed = spawn_all_moving(&mut app, 5.0, Quat::from_rotation_z(0.5));
    app.attach(root, &[left, right, skewed]);

    app.run_ticks(2);

    let group = app.get::<DeflectionGroup>(root).expect("group on root");
    assert_eq!(group.members.len(), 3);
    for member in [root, left, right] {
        assert!(group.members.contains(&member));
    }
    assert!(!group.members.contains(&skewed));
    for entity in [root, left, right, skewed] {
        assert!(app.get::<DeflectionGroupChecked>(entity).is_some());
    }
}

#[test]
fn test_group_moves_together_at_actuator_rate() {
    let mut app = TestAppBuilder::new().build();
    let root = spawn_all_moving(&mut app, 10.0, Quat::IDENTITY);
    let left = spawn_all_moving(&mut app, -4.0, Quat::IDENTITY);
    let skewed = spawn_all_moving(&mut app, 5.0, Quat::from_rotation_z(0.5));
    app.attach(root, &[left, skewed]);

    app.run_ticks(3);
    let last = app.get::<DeflectionGroup>(root).expect("group").last_angle;
    assert!(last > 0.0 && last <= 3.0 * 1.2 + 1e-9);
    assert_eq!(applied_angle(&app, root), last);
    assert_eq!(applied_angle(&app, left), last);

    app.run_ticks(20);
    assert_eq!(applied_angle(&app, root), 10.0);
    assert_eq!(applied_angle(&app, left), 10.0);
    assert_eq!(applied_angle(&app, skewed), 0.0);

    let rotation = app.get::<Transform>(left).expect("transform").rotation;
    let expected = Quat::from_axis_angle(Vec3::X, 10.0_f32.to_radians());
    assert!(rotation.abs_diff_eq(expected, 1e-5));
}

#[test]
fn test_group_prunes_and_dissolves() {
    let mut app = TestAppBuilder::new().build();
    let root = spawn_all_moving(&mut app, 2.0, Quat::IDENTITY);
    let left = spawn_all_moving(&mut app, 0.0, Quat::IDENTITY);
    let right = spawn_all_moving(&mut app, 0.0, Quat::IDENTITY);
    app.attach(root, &[left, right]);
    app.run_ticks(2);
    assert_eq!(app.get::<DeflectionGroup>(root).map(|g| g.members.len()), Some(3));

    app.despawn(right);
    app.run_ticks(1);
    assert_eq!(app.get::<DeflectionGroup>(root).map(|g| g.members.len()), Some(2));

    app.get_mut::<ControlSurfaceActuator>(root)
        .expect("actuator")
        .deflection = -3.0;
    app.run_ticks(8);
    assert_eq!(applied_angle(&app, left), -3.0);

    app.despawn(left);
    app.run_ticks(2);
    assert!(app.get::<DeflectionGroup>(root).is_none());
}

#[test]
fn test_lone_all_moving_wing_stays_ungrouped() {
    let mut app = TestAppBuilder::new().build();
    let wing = spawn_all_moving(&mut app, 10.0, Quat::IDENTITY);

    app.run_ticks(3);

    assert!(app.get::<DeflectionGroup>(wing).is_none());
    assert!(app.get::<DeflectionGroupChecked>(wing).is_some());
    assert_eq!(applied_angle(&app, wing), 0.0);
}
